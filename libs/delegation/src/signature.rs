use core::fmt::Debug;

use alloy_primitives::{Address, B256};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

/// `r ‖ s ‖ v`
pub const SIGNATURE_LENGTH: usize = 65;

/// Why an initialization signature was not accepted.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SignatureFault {
    InvalidLength(usize),
    InvalidRecoveryId(u8),
    InvalidScalars,
    NonCanonicalS,
    Unrecoverable,
    UnauthorizedSigner(Address),
}

impl Debug for SignatureFault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(f, "InvalidLength({})", len),
            Self::InvalidRecoveryId(v) => write!(f, "InvalidRecoveryId({})", v),
            Self::InvalidScalars => write!(f, "InvalidScalars"),
            Self::NonCanonicalS => write!(f, "NonCanonicalS"),
            Self::Unrecoverable => write!(f, "Unrecoverable"),
            Self::UnauthorizedSigner(signer) => write!(f, "UnauthorizedSigner({})", signer),
        }
    }
}

/// Recover the address that produced `signature` over `digest`.
///
/// Accepts only the form the chain's `ecrecover` agrees with and nothing
/// malleable: exactly 65 bytes, `v` of 27 or 28, non-zero `r` and `s` below
/// the curve order, and `s` in the lower half of the order.
pub fn recover_signer(digest: &B256, signature: &[u8]) -> Result<Address, SignatureFault> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(SignatureFault::InvalidLength(signature.len()));
    }

    let v = signature[64];
    let recovery_id = match v {
        27 | 28 => RecoveryId::from_byte(v - 27).ok_or(SignatureFault::InvalidRecoveryId(v))?,
        _ => return Err(SignatureFault::InvalidRecoveryId(v)),
    };

    let signature =
        Signature::from_slice(&signature[..64]).map_err(|_| SignatureFault::InvalidScalars)?;
    if signature.normalize_s().is_some() {
        return Err(SignatureFault::NonCanonicalS);
    }

    let key = VerifyingKey::recover_from_prehash(digest.as_slice(), &signature, recovery_id)
        .map_err(|_| SignatureFault::Unrecoverable)?;

    Ok(Address::from_public_key(&key))
}
