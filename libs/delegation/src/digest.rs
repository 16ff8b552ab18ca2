use alloy_primitives::{keccak256, Address, Bytes, B256};
use alloy_sol_types::SolValue;

/// Hash an initialization request is signed over:
/// `keccak256(abi.encode(proxy, args))`.
///
/// `proxy` is the address the call executes as. There is no chain id or
/// nonce in the digest; a signature only ever authorizes `args` for this one
/// account.
pub fn initialization_digest(proxy: Address, args: &[u8]) -> B256 {
    let encoded = (proxy, Bytes::copy_from_slice(args)).abi_encode_params();
    keccak256(encoded)
}
