//! Bridges limb arrays and arkworks prime field elements
use ark_ff::PrimeField;
use num_bigint::BigUint;

use crate::limbs::{biguint_to_array32, from_array32};

/// The order of `F` as an unsigned big integer.
pub fn field_modulus<F: PrimeField>() -> BigUint {
    F::MODULUS.into()
}

/// Number of 32-bit limbs needed to hold any element of `F`.
pub fn limbs_per_element<F: PrimeField>() -> usize {
    ((F::MODULUS_BIT_SIZE + 31) / 32) as usize
}

/// Encodes the canonical representative of `f`, most significant limb first.
pub fn field_to_array32<F: PrimeField>(f: &F, size: Option<usize>) -> Vec<u32> {
    let value: BigUint = (*f).into();
    biguint_to_array32(&value, size)
}

/// Decodes limbs into an element of `F`, reducing modulo the field order.
pub fn array32_to_field<F: PrimeField>(arr: &[u32]) -> F {
    F::from(from_array32(arr))
}
