//! Scalar codec: integer, float, bool, char, unit.

use super::Codec;
use crate::error::{CodecError, Result};
use crate::protocol::{Decoder, Encoder};

macro_rules! scalar_codec {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Codec for $ty {
                #[inline(always)]
                fn encode(&self, enc: &mut Encoder) {
                    enc.write_scalar(*self);
                }

                #[inline(always)]
                fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
                    dec.read_scalar::<$ty>()
                }
            }
        )+
    };
}

scalar_codec!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

/// Sempitkan integer wire ke tipe host, gagal dengan `IntegerOverflow`.
fn narrow<W, T>(raw: W) -> Result<T>
where
    W: Copy + Into<i128>,
    T: TryFrom<W>,
{
    T::try_from(raw).map_err(|_| CodecError::IntegerOverflow {
        value: raw.into(),
        target: std::any::type_name::<T>(),
    })
}

// usize/isize dilebarkan ke 64 bit supaya lebar wire tidak tergantung
// pointer width.
impl Codec for usize {
    #[inline(always)]
    fn encode(&self, enc: &mut Encoder) {
        enc.write_scalar(*self as u64);
    }

    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        narrow(dec.read_scalar::<u64>()?)
    }
}

impl Codec for isize {
    #[inline(always)]
    fn encode(&self, enc: &mut Encoder) {
        enc.write_scalar(*self as i64);
    }

    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        narrow(dec.read_scalar::<i64>()?)
    }
}

impl Codec for bool {
    #[inline(always)]
    fn encode(&self, enc: &mut Encoder) {
        enc.write_scalar(u8::from(*self));
    }

    #[inline]
    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        match dec.read_scalar::<u8>()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(CodecError::InvalidBool(other)),
        }
    }
}

impl Codec for char {
    #[inline(always)]
    fn encode(&self, enc: &mut Encoder) {
        enc.write_scalar(u32::from(*self));
    }

    #[inline]
    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        let raw = dec.read_scalar::<u32>()?;
        char::from_u32(raw).ok_or(CodecError::InvalidChar(raw))
    }
}

impl Codec for () {
    #[inline(always)]
    fn encode(&self, _enc: &mut Encoder) {}

    #[inline(always)]
    fn decode(_dec: &mut Decoder<'_>) -> Result<Self> {
        Ok(())
    }
}
