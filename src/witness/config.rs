//! Field parameters shared by every encoded input
use ark_ff::PrimeField;
use num_bigint::BigUint;
use num_traits::One;

use crate::error::{EncodingError, Result};
use crate::field::{field_modulus, limbs_per_element};

/// Field parameters the inputs are reduced and encoded against. Only
/// constructible with a modulus greater than one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncoderConfig {
    prime: BigUint,
    /// Width of every encoded value, in 32-bit limbs
    n32: usize,
}

impl EncoderConfig {
    pub fn new(prime: BigUint) -> Result<Self> {
        if prime <= BigUint::one() {
            return Err(EncodingError::invalid(format!(
                "{} is not a valid field modulus",
                prime
            )));
        }
        let n32 = ((prime.bits() + 31) / 32) as usize;
        Ok(Self { prime, n32 })
    }

    pub fn from_field<F: PrimeField>() -> Self {
        Self {
            prime: field_modulus::<F>(),
            n32: limbs_per_element::<F>(),
        }
    }

    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    pub fn n32(&self) -> usize {
        self.n32
    }
}

#[cfg(feature = "bn254")]
impl Default for EncoderConfig {
    fn default() -> Self {
        Self::from_field::<ark_bn254::Fr>()
    }
}
