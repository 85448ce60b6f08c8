//! Contract Message Format
//!
//! Layout:
//! ┌─────────────────────────────────────────────────────┐
//! │ name: [len: u64][utf-8 bytes]                       │
//! ├─────────────────────────────────────────────────────┤
//! │ param_1 .. param_n (schema order, no framing)       │
//! └─────────────────────────────────────────────────────┘
//!
//! Nama bisa dibaca tanpa decode parameter (zero-copy), misalnya untuk
//! routing atau logging di sisi transport.

use super::encoder::Decoder;
use crate::error::Result;

/// Pesan contract yang sudah dipisah: nama + bytes parameter mentah.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractMessage<'a> {
    pub name: &'a str,
    pub payload: &'a [u8],
}

impl<'a> ContractMessage<'a> {
    /// Parse message dari buffer (zero-copy untuk nama dan payload)
    #[inline]
    pub fn from_bytes(buf: &'a [u8]) -> Result<Self> {
        let mut decoder = Decoder::new(buf);
        let name = decoder.read_str()?;
        Ok(Self {
            name,
            payload: decoder.rest(),
        })
    }
}

/// Baca nama contract dari awal pesan.
#[inline]
pub fn peek_name(buf: &[u8]) -> Result<&str> {
    Decoder::new(buf).read_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;
    use crate::protocol::Encoder;

    #[test]
    fn test_message_parse() {
        let mut encoder = Encoder::new();
        encoder.write_str("XYZ");
        encoder.write_scalar(10i32);

        let msg = ContractMessage::from_bytes(encoder.as_bytes()).unwrap();
        assert_eq!(msg.name, "XYZ");
        assert_eq!(msg.payload, 10i32.to_ne_bytes());
        assert_eq!(peek_name(encoder.as_bytes()), Ok("XYZ"));
    }

    #[test]
    fn test_truncated_name() {
        let mut encoder = Encoder::new();
        encoder.write_str("HRMS");
        let bytes = encoder.as_bytes();

        let err = peek_name(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(matches!(err, CodecError::BufferUnderrun { .. }));
    }
}
