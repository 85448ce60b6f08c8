//! Optional codec: `[present: u8][value jika present]`.
//!
//! `Result<T, E>` diperlakukan sebagai tagged union dua alternatif:
//! `Ok` = 0, `Err` = 1.

use super::Codec;
use crate::error::{CodecError, Result};
use crate::protocol::{Decoder, Encoder};

impl<T: Codec> Codec for Option<T> {
    #[inline]
    fn encode(&self, enc: &mut Encoder) {
        match self {
            Some(value) => {
                true.encode(enc);
                value.encode(enc);
            }
            None => false.encode(enc),
        }
    }

    #[inline]
    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        if bool::decode(dec)? {
            T::decode(dec).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl<T: Codec, E: Codec> Codec for std::result::Result<T, E> {
    fn encode(&self, enc: &mut Encoder) {
        match self {
            Ok(value) => {
                enc.write_discriminant(0);
                value.encode(enc);
            }
            Err(err) => {
                enc.write_discriminant(1);
                err.encode(enc);
            }
        }
    }

    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        match dec.read_discriminant()? {
            0 => T::decode(dec).map(Ok),
            1 => E::decode(dec).map(Err),
            discriminant => Err(CodecError::InvalidDiscriminant {
                discriminant,
                alternatives: 2,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_bytes, to_bytes};

    #[test]
    fn test_present_and_absent() {
        let present = Some(vec!["QAZ".to_string()]);
        let absent: Option<Vec<String>> = None;

        assert_eq!(to_bytes(&absent), vec![0]);
        assert_eq!(to_bytes(&present)[0], 1);

        assert_eq!(from_bytes::<Option<Vec<String>>>(&to_bytes(&present)), Ok(present));
        assert_eq!(from_bytes::<Option<Vec<String>>>(&to_bytes(&absent)), Ok(absent));
    }

    #[test]
    fn test_bad_presence_flag() {
        assert_eq!(
            from_bytes::<Option<u8>>(&[3, 0]),
            Err(CodecError::InvalidBool(3))
        );
    }

    #[test]
    fn test_result_alternatives() {
        let ok: std::result::Result<u16, String> = Ok(7);
        let err: std::result::Result<u16, String> = Err("boom".into());
        assert_eq!(from_bytes::<std::result::Result<u16, String>>(&to_bytes(&ok)), Ok(ok));
        assert_eq!(from_bytes::<std::result::Result<u16, String>>(&to_bytes(&err)), Ok(err));

        let bogus = 2u32.to_ne_bytes();
        assert_eq!(
            from_bytes::<std::result::Result<u16, String>>(&bogus),
            Err(CodecError::InvalidDiscriminant {
                discriminant: 2,
                alternatives: 2
            })
        );
    }
}
