use alloc::vec::Vec;

use alloy_primitives::{aliases::B32, Address, B256};
use common::log_msg;

use crate::{
    binding::SignerBinding,
    digest::initialization_digest,
    error::DispatchError,
    host::DelegateHost,
    signature::{recover_signer, SignatureFault},
    slot::ImplementationSlot,
};

/// Signature-authorized path to the implementation's real initializer.
///
/// The gate never reaches the guarded selector without a recovered,
/// accepted signer, and it does not write storage itself. Whether the
/// account was already initialized is for the implementation to decide:
/// its initializer rejects a second run, and that rejection is returned
/// untouched.
pub struct InitializationGate<B> {
    guarded: B32,
    binding: B,
}

impl<B> InitializationGate<B>
where
    B: SignerBinding,
{
    pub fn new(guarded: B32, binding: B) -> Self {
        Self { guarded, binding }
    }

    pub fn guarded_selector(&self) -> B32 {
        self.guarded
    }

    pub fn binding(&self) -> &B {
        &self.binding
    }

    pub fn digest(proxy: Address, args: &[u8]) -> B256 {
        initialization_digest(proxy, args)
    }

    /// Recover the signer of `args` for the account at `proxy` and check it
    /// against the binding.
    pub fn authorize(
        &self,
        proxy: Address,
        args: &[u8],
        signature: &[u8],
    ) -> Result<Address, DispatchError> {
        let digest = Self::digest(proxy, args);
        let signer = recover_signer(&digest, signature).map_err(|fault| {
            log_msg!("Initialization signature rejected: {:?}", fault);
            fault
        })?;
        if !self.binding.authorize(signer, proxy, args) {
            log_msg!("Signer {} is not authorized to initialize {}", signer, proxy);
            Err(SignatureFault::UnauthorizedSigner(signer))?;
        }
        log_msg!("Initialization of {} authorized by {}", proxy, signer);
        Ok(signer)
    }

    /// Calldata for the real initializer: `guarded ‖ args`.
    ///
    /// `args` already are the ABI-encoded parameters of the initializer and
    /// go through unchanged.
    pub fn compose(&self, args: &[u8]) -> Vec<u8> {
        let mut calldata = Vec::with_capacity(4 + args.len());
        calldata.extend_from_slice(self.guarded.as_slice());
        calldata.extend_from_slice(args);
        calldata
    }

    pub fn initialize(
        &self,
        host: &mut impl DelegateHost,
        slot: &ImplementationSlot,
        args: &[u8],
        signature: &[u8],
    ) -> Result<Vec<u8>, DispatchError> {
        let proxy = host.contract_address();
        self.authorize(proxy, args, signature)?;
        let implementation = slot.get(&*host);
        log_msg!("Delegating guarded initializer {} to {}", self.guarded, implementation);
        let calldata = self.compose(args);
        host.delegate_call(implementation, &calldata)
            .map_err(DispatchError::DelegatedCallFailure)
    }
}
