// Allow `cargo stylus export-abi` to generate a main function.
#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
#![cfg_attr(not(any(test, feature = "export-abi")), no_std)]

#[macro_use]
extern crate alloc;

use alloc::vec::Vec;

use alloy_primitives::{Address, B256, U256};
use common::log_msg;
use delegation::{
    binding::AccountKey, config::DelegatorConfig, dispatcher::Dispatcher, host::DelegateHost,
};
use stylus_sdk::{prelude::*, ArbResult};

/// Deployment parameters, fixed into the program at build time.
const INITIAL_IMPLEMENTATION: Option<&str> = option_env!("DELEGATOR_INITIAL_IMPLEMENTATION");
const GUARDED_INITIALIZER: Option<&str> = option_env!("DELEGATOR_GUARDED_INITIALIZER");

fn config() -> Result<DelegatorConfig, Vec<u8>> {
    let (Some(implementation), Some(guarded)) = (INITIAL_IMPLEMENTATION, GUARDED_INITIALIZER)
    else {
        return Err(b"Delegator built without deployment parameters".into());
    };
    DelegatorConfig::parse(implementation, guarded).map_err(|err| {
        log_msg!("Invalid deployment parameters: {:?}", err);
        b"Invalid deployment parameters".into()
    })
}

/// The account's own key is the only one that may initialize it.
fn dispatcher() -> Result<Dispatcher<AccountKey>, Vec<u8>> {
    Ok(Dispatcher::new(&config()?, AccountKey))
}

/// Delegation proxy designated as account code by EIP-7702 accounts.
///
/// It has no storage of its own. Everything lives in the account: the
/// implementation address in the ERC-1967 slot, and whatever the
/// implementation keeps there.
#[storage]
#[entrypoint]
pub struct Delegator;

#[public]
impl Delegator {
    #[constructor]
    fn constructor(&mut self) -> Result<(), Vec<u8>> {
        dispatcher()?.deploy(self)
    }

    #[payable]
    #[fallback]
    fn fallback(&mut self, calldata: &[u8]) -> ArbResult {
        dispatcher()?.dispatch(self, calldata).map_err(Into::into)
    }
}

impl DelegateHost for Delegator {
    fn contract_address(&self) -> Address {
        self.vm().contract_address()
    }

    fn load(&self, slot: B256) -> B256 {
        self.vm().storage_load_bytes32(U256::from_be_bytes(slot.0))
    }

    fn store(&mut self, slot: B256, value: B256) {
        unsafe { self.vm().storage_cache_bytes32(U256::from_be_bytes(slot.0), value) };
        self.vm().flush_cache(false);
    }

    fn delegate_call(&mut self, to: Address, calldata: &[u8]) -> Result<Vec<u8>, Vec<u8>> {
        unsafe { Ok(self.vm().delegate_call(&self, to, calldata)?) }
    }
}

#[cfg(all(test, feature = "stylus-test"))]
mod test {
    use alloy_primitives::address;
    use delegation::slot::{ImplementationSlot, IMPLEMENTATION_SLOT};
    use stylus_sdk::testing::*;

    use super::*;

    #[test]
    fn implementation_slot_lives_in_host_storage() {
        let vm = TestVM::default();
        let mut delegator = Delegator::from(&vm);
        let implementation = address!("00000000000000000000000000000000000c0de1");
        let slot = ImplementationSlot::new(implementation);

        assert!(DelegateHost::load(&delegator, IMPLEMENTATION_SLOT).is_zero());
        assert_eq!(slot.get(&delegator), implementation);

        slot.initialize(&mut delegator).unwrap();
        assert_eq!(DelegateHost::load(&delegator, IMPLEMENTATION_SLOT), implementation.into_word());
        assert_eq!(
            vm.storage_load_bytes32(U256::from_be_bytes(IMPLEMENTATION_SLOT.0)),
            implementation.into_word()
        );
        assert!(slot.initialize(&mut delegator).is_err());
    }
}
