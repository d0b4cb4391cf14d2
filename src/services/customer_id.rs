//! Customer id derivation.
//!
//! Internal user ids never leave the gateway. External systems see the 64-bit
//! FNV-1a hash of the id rendered as an unsigned decimal string. The exact
//! values are relied upon by downstream consumers, so the algorithm must not
//! change.

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hash a user id into its external customer id.
pub fn hash_customer_id(user_id: &str) -> String {
    fnv1a_64(user_id.as_bytes()).to_string()
}

fn fnv1a_64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}
