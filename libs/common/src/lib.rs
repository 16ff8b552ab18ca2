#![cfg_attr(
    all(feature = "stylus", not(any(test, feature = "stylus-test"))),
    no_std
)]

pub mod log;

#[cfg(feature = "stylus-debug")]
pub use stylus_sdk;
