use alloy_primitives::aliases::B32;
use alloy_sol_types::SolCall;

use crate::interfaces::IUniversalInitializer;

/// Selector of `initialize(bytes,bytes)`.
///
/// Identical for every deployment, whatever the native initializer of the
/// fronted implementation looks like.
pub const UNIVERSAL_INITIALIZE_SELECTOR: B32 =
    B32::new(<IUniversalInitializer::initializeCall as SolCall>::SELECTOR);

/// How the dispatcher routes a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallClass {
    /// The implementation's real initializer, called directly.
    Guarded,
    /// The universal initializer, handled by the initialization gate.
    Initialize,
    /// Everything else, forwarded to the implementation as-is.
    Forward,
}

/// First four bytes of `calldata`, if there are that many.
pub fn selector_of(calldata: &[u8]) -> Option<B32> {
    calldata.get(..4).map(B32::from_slice)
}

pub fn classify(guarded: B32, calldata: &[u8]) -> CallClass {
    match selector_of(calldata) {
        Some(selector) if selector == guarded => CallClass::Guarded,
        Some(selector) if selector == UNIVERSAL_INITIALIZE_SELECTOR => CallClass::Initialize,
        _ => CallClass::Forward,
    }
}
