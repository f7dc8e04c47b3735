//! 64-bit FNV-1a hashing of artifact and signal names
use fnv::FnvHasher;
use std::hash::Hasher;

pub const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a over the UTF-16 code units of `inp`. Each code unit is folded in
/// whole, so non-ASCII text hashes differently from its UTF-8 bytes.
pub fn fnv_hash_u64(inp: &str) -> u64 {
    inp.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u64::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// [`fnv_hash_u64`] rendered as 16 lowercase hex characters.
pub fn fnv_hash(inp: &str) -> String {
    hex::encode(fnv_hash_u64(inp).to_be_bytes())
}

/// Hashes a signal name over its UTF-8 bytes and splits the result into the
/// `(msb, lsb)` words the witness runtime expects.
pub fn fnv(inp: &str) -> (u32, u32) {
    let mut hasher = FnvHasher::default();
    hasher.write(inp.as_bytes());
    let h = hasher.finish();

    ((h >> 32) as u32, h as u32)
}
