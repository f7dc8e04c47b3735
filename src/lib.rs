//! Circom encoding primitives
//!
//! Converts big integers to and from big-endian arrays of 32-bit limbs,
//! flattens nested input arrays and hashes names with 64-bit FNV-1a, as needed
//! to hand field elements and signals to a Circom witness runtime.
mod error;
pub use error::{EncodingError, Result};

pub mod limbs;
pub use limbs::{
    biguint_to_array32, from_array32, parse_biguint, to_array32, to_array32_exact, ToLimbValue,
};

pub mod flatten;
pub use flatten::{flat_array, try_flat_array, Nested};

mod hash;
pub use hash::{fnv, fnv_hash, fnv_hash_u64, FNV_OFFSET_BASIS, FNV_PRIME};

pub mod field;
pub use field::{array32_to_field, field_modulus, field_to_array32, limbs_per_element};

pub mod witness;
pub use witness::{EncodedSignal, EncoderConfig, InputEncoder};

pub use num_bigint::{BigInt, BigUint};
