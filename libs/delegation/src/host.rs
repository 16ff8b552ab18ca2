use alloc::vec::Vec;

use alloy_primitives::{Address, B256};

/// Execution environment of the account the delegator is running as.
///
/// The dispatcher and the gate only ever read storage and perform delegated
/// calls; `store` exists for the deployment step that seeds the
/// implementation slot.
pub trait DelegateHost {
    /// Address whose storage and identity the current call executes under.
    ///
    /// For an EIP-7702 account this is the account itself, not the address
    /// the delegator program was deployed at.
    fn contract_address(&self) -> Address;

    fn load(&self, slot: B256) -> B256;

    fn store(&mut self, slot: B256, value: B256);

    /// Run `calldata` against the code of `to` in the current storage and
    /// address context, with the current caller and value.
    ///
    /// On failure the error carries the callee's revert data unchanged.
    fn delegate_call(&mut self, to: Address, calldata: &[u8]) -> Result<Vec<u8>, Vec<u8>>;
}
