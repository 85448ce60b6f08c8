//! Error types untuk codec dan dispatch.
//!
//! Semua kegagalan decode dikembalikan sebagai `CodecError` eksplisit,
//! tidak pernah panic dan tidak pernah di-swallow. "Tidak ada subscriber"
//! pada dispatch BUKAN error: itu `Ok(false)`.

use std::str::Utf8Error;

use thiserror::Error;

/// Error dari layer codec (juga dipakai oleh contract dan dispatcher).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Decode membaca melewati akhir buffer.
    #[error("buffer underrun: needed {needed} bytes, {remaining} remaining")]
    BufferUnderrun { needed: usize, remaining: usize },

    /// Length prefix melebihi batas `CodecConfig::max_len`.
    #[error("length prefix {len} exceeds limit of {max}")]
    LengthLimitExceeded { len: u64, max: usize },

    /// Discriminant variant di luar jumlah alternatif yang dideklarasikan.
    #[error("discriminant {discriminant} out of range for union with {alternatives} alternatives")]
    InvalidDiscriminant { discriminant: u32, alternatives: u32 },

    #[error("invalid bool byte {0:#04x}")]
    InvalidBool(u8),

    #[error("invalid char scalar value {0:#x}")]
    InvalidChar(u32),

    #[error("invalid utf-8 in string: {0}")]
    InvalidUtf8(#[from] Utf8Error),

    /// Integer 64-bit di wire tidak muat di `usize`/`isize` host.
    #[error("integer {value} does not fit in {target}")]
    IntegerOverflow { value: i128, target: &'static str },

    #[error("fixed array expected {expected} elements, decoded {found}")]
    ArrayLength { expected: usize, found: usize },

    /// Pesan tidak habis dikonsumsi. Biasanya berarti arity/tipe schema
    /// pengirim dan penerima tidak cocok.
    #[error("{remaining} trailing bytes left after decode")]
    TrailingBytes { remaining: usize },

    /// Nama contract pada pesan berbeda (hanya jika `verify_contract_name`).
    #[error("contract mismatch: expected {expected:?}, found {found:?}")]
    ContractMismatch { expected: String, found: String },
}

/// Result alias untuk seluruh crate.
pub type Result<T> = std::result::Result<T, CodecError>;
