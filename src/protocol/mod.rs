//! Protocol Layer: Byte-level Encoding
//!
//! Prinsip desain:
//! - Flat Binary: scalar di-copy apa adanya (native endian)
//! - Fixed-width prefixes: length `u64`, discriminant `u32`
//! - Fail-fast: short input selalu `BufferUnderrun`, tidak pernah UB

mod encoder;
mod message;
mod scalar;

pub use encoder::{Decoder, Encoder, DISCRIMINANT_WIDTH, LEN_WIDTH};
pub use message::{peek_name, ContractMessage};
pub use scalar::Scalar;
