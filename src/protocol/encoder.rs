//! Byte Writer / Byte Reader
//!
//! `Encoder` adalah append-only accumulator, `Decoder` adalah cursor
//! read-only di atas borrowed slice. Hanya dua tipe ini yang menyentuh
//! layout byte secara langsung; semua codec lain dibangun di atasnya.

use super::scalar::Scalar;
use crate::config::CodecConfig;
use crate::error::{CodecError, Result};

/// Lebar length prefix di wire (`u64`).
pub const LEN_WIDTH: usize = std::mem::size_of::<u64>();

/// Lebar discriminant variant di wire (`u32`).
pub const DISCRIMINANT_WIDTH: usize = std::mem::size_of::<u32>();

/// Append-only output buffer.
#[derive(Debug, Default, Clone)]
pub struct Encoder {
    buffer: Vec<u8>,
}

impl Encoder {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Membuat encoder dengan buffer pre-allocated
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Ambil alih `buffer` untuk reuse alokasinya. Isi lama dibuang.
    pub fn from_vec(mut buffer: Vec<u8>) -> Self {
        buffer.clear();
        Self { buffer }
    }

    /// Reset encoder untuk reuse
    #[inline(always)]
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Append raw fixed-width bytes dari scalar.
    #[inline(always)]
    pub fn write_scalar<T: Scalar>(&mut self, value: T) {
        value.put(&mut self.buffer);
    }

    /// Length prefix untuk sequence, set, map, adapter dan string.
    #[inline(always)]
    pub fn write_len(&mut self, len: usize) {
        self.write_scalar(len as u64);
    }

    /// Ordinal alternatif aktif dari sebuah tagged union.
    #[inline(always)]
    pub fn write_discriminant(&mut self, ordinal: u32) {
        self.write_scalar(ordinal);
    }

    /// Raw bytes tanpa prefix.
    #[inline(always)]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Length-prefixed UTF-8 text.
    #[inline]
    pub fn write_str(&mut self, text: &str) {
        self.write_len(text.len());
        self.write_bytes(text.as_bytes());
    }

    /// Get current buffer content
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

/// Cursor-based reader. Cursor hanya maju, tidak pernah rewind.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    buffer: &'a [u8],
    read_pos: usize,
    config: CodecConfig,
}

impl<'a> Decoder<'a> {
    /// Membuat decoder dari buffer
    #[inline(always)]
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::with_config(buffer, CodecConfig::default())
    }

    pub fn with_config(buffer: &'a [u8], config: CodecConfig) -> Self {
        Self {
            buffer,
            read_pos: 0,
            config,
        }
    }

    #[inline(always)]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Ambil `len` bytes berikutnya (zero-copy) dan majukan cursor.
    #[inline]
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(CodecError::BufferUnderrun {
                needed: len,
                remaining,
            });
        }

        let start = self.read_pos;
        self.read_pos += len;
        Ok(&self.buffer[start..self.read_pos])
    }

    /// Copy `T::WIDTH` bytes berikutnya ke sebuah `T`.
    #[inline(always)]
    pub fn read_scalar<T: Scalar>(&mut self) -> Result<T> {
        let bytes = self.read_bytes(T::WIDTH)?;
        T::take(bytes).ok_or(CodecError::BufferUnderrun {
            needed: T::WIDTH,
            remaining: bytes.len(),
        })
    }

    /// Baca length prefix, dicek terhadap `max_len`.
    #[inline]
    pub fn read_len(&mut self) -> Result<usize> {
        let len = self.read_scalar::<u64>()?;
        let max = self.config.max_len;
        match usize::try_from(len) {
            Ok(n) if n <= max => Ok(n),
            _ => Err(CodecError::LengthLimitExceeded { len, max }),
        }
    }

    #[inline(always)]
    pub fn read_discriminant(&mut self) -> Result<u32> {
        self.read_scalar::<u32>()
    }

    /// Length-prefixed UTF-8 text, borrowed dari buffer sumber.
    #[inline]
    pub fn read_str(&mut self) -> Result<&'a str> {
        let len = self.read_len()?;
        let bytes = self.read_bytes(len)?;
        Ok(std::str::from_utf8(bytes)?)
    }

    /// Kapasitas awal yang aman untuk `len` elemen bertipe `T`.
    ///
    /// Memori yang di-reserve (`hint * size_of::<T>()`) tidak pernah lebih
    /// besar dari sisa bytes input, jadi prefix palsu tidak bisa memaksa
    /// alokasi raksasa.
    #[inline(always)]
    pub fn capacity_hint<T>(&self, len: usize) -> usize {
        len.min(self.remaining() / std::mem::size_of::<T>().max(1))
    }

    /// Remaining bytes
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.read_pos)
    }

    #[inline(always)]
    pub fn position(&self) -> usize {
        self.read_pos
    }

    /// Sisa buffer yang belum dibaca, tanpa memajukan cursor.
    #[inline(always)]
    pub fn rest(&self) -> &'a [u8] {
        &self.buffer[self.read_pos..]
    }

    /// Pastikan seluruh pesan sudah dikonsumsi.
    pub fn finish(&self) -> Result<()> {
        let remaining = self.remaining();
        if remaining > 0 && !self.config.allow_trailing_bytes {
            return Err(CodecError::TrailingBytes { remaining });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_roundtrip() {
        let mut encoder = Encoder::new();
        encoder.write_scalar(42u32);
        encoder.write_scalar(-7i64);
        encoder.write_scalar(1.5f32);

        let mut decoder = Decoder::new(encoder.as_bytes());
        assert_eq!(decoder.read_scalar::<u32>(), Ok(42));
        assert_eq!(decoder.read_scalar::<i64>(), Ok(-7));
        assert_eq!(decoder.read_scalar::<f32>(), Ok(1.5));
        assert_eq!(decoder.remaining(), 0);
        assert!(decoder.finish().is_ok());
    }

    #[test]
    fn test_underrun_is_error() {
        let bytes = [1u8, 2, 3];
        let mut decoder = Decoder::new(&bytes);

        assert_eq!(
            decoder.read_scalar::<u64>(),
            Err(CodecError::BufferUnderrun {
                needed: 8,
                remaining: 3
            })
        );
        // Cursor tidak bergerak setelah gagal
        assert_eq!(decoder.position(), 0);
    }

    #[test]
    fn test_len_limit() {
        let mut encoder = Encoder::new();
        encoder.write_len(100);

        let config = CodecConfig::default().with_max_len(10);
        let mut decoder = Decoder::with_config(encoder.as_bytes(), config);
        assert_eq!(
            decoder.read_len(),
            Err(CodecError::LengthLimitExceeded { len: 100, max: 10 })
        );
    }

    #[test]
    fn test_str_zero_copy() {
        let mut encoder = Encoder::new();
        encoder.write_str("Hello, Hermes!");

        assert_eq!(encoder.len(), LEN_WIDTH + 14);

        let bytes = encoder.into_bytes();
        let mut decoder = Decoder::new(&bytes);
        assert_eq!(decoder.read_str(), Ok("Hello, Hermes!"));
    }

    #[test]
    fn test_encoder_reuse() {
        let mut encoder = Encoder::with_capacity(64);
        encoder.write_scalar(1u8);
        encoder.reset();
        encoder.write_scalar(2u8);
        assert_eq!(encoder.as_bytes(), &[2]);

        let encoder = Encoder::from_vec(vec![9, 9, 9]);
        assert!(encoder.is_empty());
    }

    #[test]
    fn test_capacity_hint_scales_with_element_size() {
        let bytes = vec![0u8; 4096];
        let decoder = Decoder::new(&bytes);

        assert_eq!(decoder.capacity_hint::<u8>(usize::MAX), 4096);
        assert_eq!(decoder.capacity_hint::<u64>(usize::MAX), 512);
        assert_eq!(decoder.capacity_hint::<[u8; 4096]>(usize::MAX), 1);
        assert_eq!(decoder.capacity_hint::<[u8; 8192]>(usize::MAX), 0);
        assert_eq!(decoder.capacity_hint::<()>(3), 3);
    }

    #[test]
    fn test_trailing_bytes() {
        let bytes = [0u8; 5];
        let mut decoder = Decoder::new(&bytes);
        decoder.read_scalar::<u32>().unwrap();
        assert_eq!(
            decoder.finish(),
            Err(CodecError::TrailingBytes { remaining: 1 })
        );

        let lenient = CodecConfig::default().with_trailing_bytes(true);
        let mut decoder = Decoder::with_config(&bytes, lenient);
        decoder.read_scalar::<u32>().unwrap();
        assert!(decoder.finish().is_ok());
    }
}
