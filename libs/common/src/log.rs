//! log_msg!() vs ~console!()~ macro
//! ---
//!
//! The delegator runs in three places, and each needs a different sink:
//!
//! 1. Release program installed as account code on a Nitro node: all logging
//!    is compiled out.
//!
//! 2. Program built with `stylus-debug`: messages go to the Nitro log through
//!    `stylus_sdk::console!()`.
//!
//! 3. Native unit tests of the dispatcher and gate (with or without
//!    `stylus-test`): messages go to `println!()`, as ~`console!()`~ will
//!    SIGSEGV outside of the node.
//!
//! Enable the `debug` feature to get anything at all.
//!

#[cfg(all(
    feature = "debug",
    not(feature = "stylus-debug"),
    any(feature = "stylus-test", not(feature = "stylus"))
))]
pub fn print_msg(msg: &str) {
    println!("[delegator] {}", msg);
}

#[cfg(all(
    feature = "debug",
    not(feature = "stylus-debug"),
    any(feature = "stylus-test", not(feature = "stylus"))
))]
#[macro_export]
macro_rules! log_msg {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::log::print_msg(&format!($fmt $(, $args)*));
    };
}

#[cfg(all(
    feature = "debug",
    not(feature = "stylus-test"),
    feature = "stylus-debug"
))]
#[macro_export]
macro_rules! log_msg {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::stylus_sdk::console!($fmt $(, $args)*);
    };
}

#[cfg(not(any(
    all(
        feature = "debug",
        not(feature = "stylus-debug"),
        any(feature = "stylus-test", not(feature = "stylus"))
    ),
    all(
        feature = "debug",
        not(feature = "stylus-test"),
        feature = "stylus-debug"
    )
)))]
#[macro_export]
macro_rules! log_msg {
    ($($t:tt)*) => {};
}
