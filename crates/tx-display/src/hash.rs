use rand::RngCore;
use rand_core::OsRng;

/// Length of a rendered transaction hash: `0x` plus 64 hex digits.
pub const TX_HASH_LEN: usize = 66;

const TX_HASH_BYTES: usize = 32;

/// Generates a mock transaction hash from the OS random source.
///
/// Demo use only: the output has the shape of a real hash but identifies
/// nothing on-chain, and uniqueness is probabilistic rather than
/// guaranteed.
pub fn generate_tx_hash() -> String {
    generate_tx_hash_with(&mut OsRng)
}

/// Generates a mock transaction hash from an injected random source, so
/// callers (and tests) can seed determinism.
pub fn generate_tx_hash_with<R: RngCore>(rng: &mut R) -> String {
    let mut buf = [0u8; TX_HASH_BYTES];
    rng.fill_bytes(&mut buf);
    format!("0x{}", hex::encode(buf))
}
