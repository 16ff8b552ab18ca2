//! Dispatch and initialization authorization for an account-abstraction
//! delegation proxy.
//!
//! An externally-owned account whose code designates the delegator proxy
//! executes every inbound call through [`dispatcher::Dispatcher`]:
//!
//! ```text
//! call ─► Dispatcher::classify ─┬─ guarded selector ──────► GuardedSelectorRejected
//!                               ├─ initialize(bytes,bytes) ► InitializationGate ─► delegate
//!                               └─ anything else ──────────────────────────────► delegate
//! ```
//!
//! Both delegation paths run implementation code in the account's own
//! storage and address context, against the implementation address found in
//! the ERC-1967 slot (see [`slot`]).
//!
#![cfg_attr(
    all(feature = "stylus", not(any(test, feature = "stylus-test"))),
    no_std
)]

extern crate alloc;

pub mod binding;
pub mod config;
pub mod digest;
pub mod dispatcher;
pub mod error;
pub mod gate;
pub mod host;
pub mod interfaces;
pub mod selector;
pub mod signature;
pub mod slot;
