use alloc::vec::Vec;

use alloy_primitives::aliases::B32;
use alloy_sol_types::SolCall;
use common::log_msg;

use crate::{
    binding::SignerBinding,
    config::DelegatorConfig,
    error::DispatchError,
    gate::InitializationGate,
    host::DelegateHost,
    interfaces::IUniversalInitializer,
    selector::{classify, CallClass},
    slot::ImplementationSlot,
};

/// Entry point of every call made to the account.
///
/// Classification happens before anything else and has no side effects.
/// The only way to the guarded initializer is through the gate; every other
/// call reaches the implementation unchanged, including the implementation's
/// own upgrade function, which is what moves the implementation slot.
pub struct Dispatcher<B> {
    gate: InitializationGate<B>,
    slot: ImplementationSlot,
}

impl<B> Dispatcher<B>
where
    B: SignerBinding,
{
    pub fn new(config: &DelegatorConfig, binding: B) -> Self {
        Self {
            gate: InitializationGate::new(config.guarded_initializer(), binding),
            slot: ImplementationSlot::new(config.initial_implementation()),
        }
    }

    pub fn gate(&self) -> &InitializationGate<B> {
        &self.gate
    }

    pub fn slot(&self) -> &ImplementationSlot {
        &self.slot
    }

    pub fn guarded_selector(&self) -> B32 {
        self.gate.guarded_selector()
    }

    pub fn classify(&self, calldata: &[u8]) -> CallClass {
        classify(self.gate.guarded_selector(), calldata)
    }

    /// Deployment step. Must not run as part of a dispatched call.
    pub fn deploy(&self, host: &mut impl DelegateHost) -> Result<(), Vec<u8>> {
        self.slot.initialize(host)
    }

    pub fn dispatch(
        &self,
        host: &mut impl DelegateHost,
        calldata: &[u8],
    ) -> Result<Vec<u8>, DispatchError> {
        match self.classify(calldata) {
            CallClass::Guarded => {
                log_msg!("Rejecting direct call to guarded initializer {}", self.guarded_selector());
                Err(DispatchError::GuardedSelectorRejected(self.guarded_selector()))
            }
            CallClass::Initialize => {
                // Offsets and lengths are still checked. Trailing bytes and
                // dirty padding are accepted, as Solidity calldata decoding does.
                let request = IUniversalInitializer::initializeCall::abi_decode(calldata, false)
                    .map_err(|_| {
                        log_msg!("Malformed universal initializer calldata");
                        DispatchError::InvalidInitializeCall
                    })?;
                self.gate
                    .initialize(host, &self.slot, &request.args, &request.signature)
            }
            CallClass::Forward => {
                let implementation = self.slot.get(&*host);
                host.delegate_call(implementation, calldata)
                    .map_err(DispatchError::DelegatedCallFailure)
            }
        }
    }
}
