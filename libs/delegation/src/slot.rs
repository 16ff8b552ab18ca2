use alloc::vec::Vec;

use alloy_primitives::{uint, Address, B256, U256};
use common::log_msg;

use crate::host::DelegateHost;

/// ERC-1967 implementation slot: `keccak256("eip1967.proxy.implementation") - 1`.
///
/// Block explorers, upgrade tooling and the implementation's own
/// `upgradeToAndCall` all locate the implementation address here.
pub const IMPLEMENTATION_SLOT: B256 = {
    const HASH: [u8; 32] = keccak_const::Keccak256::new()
        .update(b"eip1967.proxy.implementation")
        .finalize();
    B256::new(
        U256::from_be_bytes(HASH)
            .wrapping_sub(uint!(1_U256))
            .to_be_bytes(),
    )
};

/// Handle to the implementation address of the account.
///
/// The slot is written once at deployment and afterwards only by delegated
/// implementation code. Neither the dispatcher nor the gate write it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImplementationSlot {
    initial: Address,
}

impl ImplementationSlot {
    pub const fn new(initial: Address) -> Self {
        Self { initial }
    }

    pub fn initial(&self) -> Address {
        self.initial
    }

    /// Raw slot contents, zero while nothing was ever stored.
    pub fn stored(&self, host: &impl DelegateHost) -> Address {
        Address::from_word(host.load(IMPLEMENTATION_SLOT))
    }

    /// Address calls are delegated to.
    ///
    /// An account that never ran the deployment step (the usual case for an
    /// EIP-7702 account, whose storage is not the proxy's) resolves to the
    /// initial implementation until the implementation upgrades itself.
    pub fn get(&self, host: &impl DelegateHost) -> Address {
        let stored = self.stored(host);
        if stored.is_zero() {
            self.initial
        } else {
            stored
        }
    }

    /// Deployment step: seed the slot with the initial implementation.
    pub fn initialize(&self, host: &mut impl DelegateHost) -> Result<(), Vec<u8>> {
        let stored = self.stored(&*host);
        if !stored.is_zero() {
            log_msg!("Implementation slot already holds {}", stored);
            Err(b"Can only call initialize once")?;
        }
        log_msg!("Seeding implementation slot with {}", self.initial);
        host.store(IMPLEMENTATION_SLOT, self.initial.into_word());
        Ok(())
    }
}
