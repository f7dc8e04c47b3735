//! Encoding of JSON circuit inputs into hashed, fixed-width signals
use num_bigint::BigUint;
use num_traits::Zero;
use serde_json::{Map, Value};

use super::EncoderConfig;
use crate::error::{EncodingError, Result};
use crate::flatten::Nested;
use crate::hash::fnv;
use crate::limbs::{from_array32, parse_biguint, to_array32_exact};

/// A circuit input ready to be written to the witness runtime: the hashed
/// signal name plus every flattened value as a fixed-width limb array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedSignal {
    pub name: String,
    pub hash_msb: u32,
    pub hash_lsb: u32,
    pub values: Vec<Vec<u32>>,
}

impl EncodedSignal {
    /// Limbs of the `i`-th value, least significant first, in the order the
    /// runtime's shared memory is written.
    pub fn shared_memory_words(&self, i: usize) -> Option<impl Iterator<Item = u32> + '_> {
        self.values.get(i).map(|v| v.iter().rev().copied())
    }
}

/// Inverse of [`EncodedSignal::shared_memory_words`].
pub fn read_shared_memory_words(words: &[u32]) -> BigUint {
    let arr = words.iter().rev().copied().collect::<Vec<_>>();
    from_array32(&arr)
}

#[derive(Clone, Debug)]
pub struct InputEncoder {
    pub cfg: EncoderConfig,
}

impl InputEncoder {
    pub fn new(cfg: EncoderConfig) -> Self {
        Self { cfg }
    }

    /// Parses a JSON object of `signal name -> value(s)` and encodes it.
    pub fn encode_str(&self, json: &str) -> Result<Vec<EncodedSignal>> {
        let inputs: Map<String, Value> =
            serde_json::from_str(json).map_err(EncodingError::invalid)?;
        self.encode(&inputs)
    }

    /// Encodes every signal of `inputs`, ordered by signal name.
    pub fn encode(&self, inputs: &Map<String, Value>) -> Result<Vec<EncodedSignal>> {
        let mut entries = inputs.iter().collect::<Vec<_>>();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
            .into_iter()
            .map(|(name, value)| self.encode_signal(name, value.clone()))
            .collect()
    }

    pub fn encode_signal(&self, name: &str, value: Value) -> Result<EncodedSignal> {
        let (hash_msb, hash_lsb) = fnv(name);

        let values = Nested::from(value)
            .into_flat()
            .iter()
            .map(|leaf| {
                let fr = self.normalize(leaf)?;
                to_array32_exact(&fr, self.cfg.n32())
            })
            .collect::<Result<Vec<_>>>()
            .map_err(|e| match e {
                EncodingError::InvalidInput(msg) => {
                    EncodingError::InvalidInput(format!("signal {}: {}", name, msg))
                }
                other => other,
            })?;

        Ok(EncodedSignal {
            name: name.to_string(),
            hash_msb,
            hash_lsb,
            values,
        })
    }

    /// Maps a scalar JSON value into `[0, prime)`. Negative values wrap
    /// around the modulus.
    pub fn normalize(&self, leaf: &Value) -> Result<BigUint> {
        let (negative, magnitude) = match leaf {
            Value::String(s) => {
                let s = s.trim();
                match s.strip_prefix('-') {
                    // negatives are plain decimal only, no sign, prefix or space after `-`
                    Some(rest) if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) => {
                        (true, parse_biguint(rest)?)
                    }
                    Some(_) => {
                        return Err(EncodingError::invalid(format!(
                            "{:?} is not a number",
                            s
                        )))
                    }
                    None => (false, parse_biguint(s)?),
                }
            }
            Value::Number(n) => {
                if let Some(v) = n.as_u64() {
                    (false, BigUint::from(v))
                } else if let Some(v) = n.as_i64() {
                    (true, BigUint::from(v.unsigned_abs()))
                } else {
                    return Err(EncodingError::invalid(format!(
                        "{} is not an integer, pass large values as strings",
                        n
                    )));
                }
            }
            Value::Bool(b) => (false, BigUint::from(*b as u8)),
            Value::Null => return Err(EncodingError::invalid("null is not a number")),
            Value::Object(_) => return Err(EncodingError::invalid("object is not a number")),
            Value::Array(_) => {
                return Err(EncodingError::TypeMismatch {
                    expected: "scalar",
                    found: "sequence",
                })
            }
        };

        let reduced = magnitude % self.cfg.prime();
        if negative && !reduced.is_zero() {
            Ok(self.cfg.prime() - reduced)
        } else {
            Ok(reduced)
        }
    }
}
