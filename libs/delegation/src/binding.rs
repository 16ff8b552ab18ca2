//! Binding between the recovered signer and the party allowed to initialize.
//!
//! The gate only proves that `args` were signed by a genuine key. Which key
//! that has to be depends on what the wrapped initializer considers
//! authoritative, so it is chosen per deployment instead of assumed.

use alloc::vec::Vec;

use alloy_primitives::Address;

pub trait SignerBinding {
    /// Whether `signer` may initialize the account at `proxy` with `args`.
    fn authorize(&self, signer: Address, proxy: Address, args: &[u8]) -> bool;
}

/// Any recovered signer passes; the wrapped initializer decides whether the
/// arguments it receives are acceptable.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecoverOnly;

impl SignerBinding for RecoverOnly {
    fn authorize(&self, _signer: Address, _proxy: Address, _args: &[u8]) -> bool {
        true
    }
}

/// The signer must be the account itself.
///
/// This is the EIP-7702 case, where the account's own key is the only one
/// entitled to decide what the account becomes.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccountKey;

impl SignerBinding for AccountKey {
    fn authorize(&self, signer: Address, proxy: Address, _args: &[u8]) -> bool {
        signer == proxy
    }
}

/// The signer must be one of the addresses the initializer treats as
/// authoritative inside `args` (e.g. the new owners).
///
/// `extract` knows the implementation's argument layout; returning `None`
/// means the arguments could not be read and nobody is authorized.
pub struct ArgsSubject<F> {
    extract: F,
}

impl<F> ArgsSubject<F>
where
    F: Fn(&[u8]) -> Option<Vec<Address>>,
{
    pub fn new(extract: F) -> Self {
        Self { extract }
    }
}

impl<F> SignerBinding for ArgsSubject<F>
where
    F: Fn(&[u8]) -> Option<Vec<Address>>,
{
    fn authorize(&self, signer: Address, _proxy: Address, args: &[u8]) -> bool {
        (self.extract)(args).is_some_and(|subjects| subjects.contains(&signer))
    }
}
