//! Tuple codec: concatenation komponen dari kiri ke kanan, tanpa prefix.
//! Pair = tuple dua elemen.

use super::Codec;
use crate::error::Result;
use crate::protocol::{Decoder, Encoder};

macro_rules! tuple_codec {
    ($($name:ident $idx:tt),+) => {
        impl<$($name: Codec),+> Codec for ($($name,)+) {
            #[inline]
            fn encode(&self, enc: &mut Encoder) {
                $(self.$idx.encode(enc);)+
            }

            #[inline]
            fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
                // Operand tuple dievaluasi kiri ke kanan
                Ok(($($name::decode(dec)?,)+))
            }
        }
    };
}

for_each_tuple!(tuple_codec);

#[cfg(test)]
mod tests {
    use crate::codec::{from_bytes, to_bytes};

    #[test]
    fn test_pair_is_plain_concatenation() {
        let pair = (10i32, "ABC1".to_string());
        let mut expected = to_bytes(&10i32);
        expected.extend(to_bytes(&"ABC1".to_string()));

        assert_eq!(to_bytes(&pair), expected);
        assert_eq!(from_bytes::<(i32, String)>(&expected), Ok(pair));
    }

    #[test]
    fn test_wide_tuple() {
        type WideTuple = (u8, u16, u32, u64, i8, f32, bool, char, (), String, [u8; 2], Option<i64>);
        let value: WideTuple = (1u8, 2u16, 3u32, 4u64, -5i8, 6.0f32, true, 'x', (), "s".to_string(), [1u8; 2], Some(9i64));
        assert_eq!(from_bytes::<WideTuple>(&to_bytes(&value)), Ok(value));
    }
}
