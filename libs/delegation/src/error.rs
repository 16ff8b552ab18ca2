use core::fmt::Debug;

use alloc::vec::Vec;

use alloy_primitives::aliases::B32;
use alloy_sol_types::SolError;

use crate::{interfaces, signature::SignatureFault};

/// Failure of a dispatched call. Every variant aborts the whole call.
#[derive(Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The implementation's real initializer was called directly.
    GuardedSelectorRejected(B32),
    /// The initialization signature is malformed, does not recover, or
    /// recovers to a signer the deployment does not accept.
    InvalidSignature(SignatureFault),
    /// Universal initializer calldata that does not decode as `(bytes, bytes)`.
    InvalidInitializeCall,
    /// Revert data produced by the implementation, kept byte-for-byte.
    DelegatedCallFailure(Vec<u8>),
}

impl DispatchError {
    /// Revert data the caller observes.
    ///
    /// The core's own errors are ABI-encoded Solidity errors; failures of the
    /// implementation come back exactly as the implementation produced them.
    pub fn into_revert_data(self) -> Vec<u8> {
        match self {
            Self::GuardedSelectorRejected(selector) => {
                interfaces::GuardedSelectorRejected { selector }.abi_encode()
            }
            Self::InvalidSignature(_) => interfaces::InvalidSignature {}.abi_encode(),
            Self::InvalidInitializeCall => interfaces::InvalidInitializeCall {}.abi_encode(),
            Self::DelegatedCallFailure(data) => data,
        }
    }
}

impl From<SignatureFault> for DispatchError {
    fn from(value: SignatureFault) -> Self {
        Self::InvalidSignature(value)
    }
}

impl From<DispatchError> for Vec<u8> {
    fn from(value: DispatchError) -> Self {
        value.into_revert_data()
    }
}

impl Debug for DispatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GuardedSelectorRejected(selector) => {
                write!(f, "GuardedSelectorRejected({})", selector)
            }
            Self::InvalidSignature(fault) => write!(f, "InvalidSignature({:?})", fault),
            Self::InvalidInitializeCall => write!(f, "InvalidInitializeCall"),
            Self::DelegatedCallFailure(data) => {
                write!(f, "DelegatedCallFailure({})", alloy_primitives::hex::encode_prefixed(data))
            }
        }
    }
}
