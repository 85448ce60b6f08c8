//! Tagged union codec: `[discriminant: u32][payload alternatif aktif]`.
//!
//! Discriminant = posisi alternatif dalam deklarasi (mulai dari 0). Hanya
//! payload alternatif aktif yang ditulis. Decode dengan ordinal di luar
//! range menghasilkan `CodecError::InvalidDiscriminant`.

/// Deklarasikan enum single-payload beserta codec-nya.
///
/// ```
/// use hermes_contract::{from_bytes, to_bytes, variant};
///
/// variant! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub enum Reading {
///         Count(u32),
///         Level(f64),
///         Label(String),
///     }
/// }
///
/// let reading = Reading::Label("ABC".into());
/// let bytes = to_bytes(&reading);
/// assert_eq!(&bytes[..4], &2u32.to_ne_bytes());
/// assert_eq!(from_bytes::<Reading>(&bytes).unwrap(), reading);
/// ```
///
/// Untuk enum yang sudah ada, pakai bentuk `impl`:
///
/// ```
/// # use hermes_contract::variant;
/// enum Side { Bid(u64), Ask(u64) }
///
/// variant!(impl Side { Bid(u64), Ask(u64) });
/// ```
#[macro_export]
macro_rules! variant {
    (impl $name:ident { $($alt:ident($ty:ty)),+ $(,)? }) => {
        impl $crate::Codec for $name {
            fn encode(&self, enc: &mut $crate::Encoder) {
                #[allow(dead_code, non_camel_case_types, clippy::enum_variant_names)]
                enum Ordinal { $($alt),+ }

                match self {
                    $(
                        Self::$alt(value) => {
                            enc.write_discriminant(Ordinal::$alt as u32);
                            $crate::Codec::encode(value, enc);
                        }
                    )+
                }
            }

            fn decode(dec: &mut $crate::Decoder<'_>) -> $crate::Result<Self> {
                #[allow(dead_code, non_camel_case_types, clippy::enum_variant_names)]
                enum Ordinal { $($alt),+ }
                const ALTERNATIVES: u32 = [$(stringify!($alt)),+].len() as u32;

                let discriminant = dec.read_discriminant()?;
                $(
                    if discriminant == Ordinal::$alt as u32 {
                        return <$ty as $crate::Codec>::decode(dec).map(Self::$alt);
                    }
                )+
                Err($crate::CodecError::InvalidDiscriminant {
                    discriminant,
                    alternatives: ALTERNATIVES,
                })
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$alt_meta:meta])* $alt:ident($ty:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($(#[$alt_meta])* $alt($ty)),+
        }

        $crate::variant!(impl $name { $($alt($ty)),+ });
    };
}
