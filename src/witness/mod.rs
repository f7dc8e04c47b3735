//! Preparation of circuit inputs for the witness runtime.
//!
//! Every input signal is addressed by the FNV-1a hash of its name and every
//! value is reduced into the field and written as a fixed-width array of
//! 32-bit limbs.
mod config;
pub use config::EncoderConfig;

mod input;
pub use input::{read_shared_memory_words, EncodedSignal, InputEncoder};
