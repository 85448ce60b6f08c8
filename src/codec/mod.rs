//! Codec Layer: composable encode/decode rules
//!
//! Setiap shape (scalar, sequence, set, map, adapter, tuple, optional,
//! variant) adalah satu impl `Codec`. Karena semua composite hanya
//! memanggil `Codec` elemennya, nesting tidak dibatasi: `Vec<BTreeMap<K,
//! Option<(A, B)>>>` otomatis punya codec.
//!
//! Tipe milik caller cukup implement `Codec` sekali:
//!
//! ```
//! use hermes_contract::{Codec, Decoder, Encoder, Result};
//!
//! #[derive(Debug, PartialEq)]
//! struct Data {
//!     label: String,
//!     weight: u32,
//! }
//!
//! impl Codec for Data {
//!     fn encode(&self, enc: &mut Encoder) {
//!         self.label.encode(enc);
//!         self.weight.encode(enc);
//!     }
//!
//!     fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
//!         Ok(Self {
//!             label: String::decode(dec)?,
//!             weight: u32::decode(dec)?,
//!         })
//!     }
//! }
//!
//! let data = Data { label: "ABC3".into(), weight: 7 };
//! let bytes = hermes_contract::to_bytes(&data);
//! assert_eq!(hermes_contract::from_bytes::<Data>(&bytes).unwrap(), data);
//! ```

mod adapter;
mod map;
mod option;
mod primitive;
mod sequence;
mod set;
mod tuple;
mod variant;

pub use adapter::{Queue, Stack};

use crate::error::Result;
use crate::protocol::{Decoder, Encoder};

/// Pasangan encode/decode untuk satu shape.
pub trait Codec: Sized {
    /// Append encoding `self` ke encoder.
    fn encode(&self, enc: &mut Encoder);

    /// Decode satu nilai baru dari posisi cursor saat ini.
    fn decode(dec: &mut Decoder<'_>) -> Result<Self>;

    /// Decode ke variabel yang sudah ada (isi lama diganti, bukan di-merge).
    ///
    /// `self` tidak berubah jika decode gagal.
    fn decode_into(&mut self, dec: &mut Decoder<'_>) -> Result<()> {
        *self = Self::decode(dec)?;
        Ok(())
    }
}

/// Encode satu nilai ke buffer baru.
pub fn to_bytes<T: Codec>(value: &T) -> Vec<u8> {
    let mut encoder = Encoder::new();
    value.encode(&mut encoder);
    encoder.into_bytes()
}

/// Decode satu nilai; seluruh buffer harus terkonsumsi.
pub fn from_bytes<T: Codec>(bytes: &[u8]) -> Result<T> {
    let mut decoder = Decoder::new(bytes);
    let value = T::decode(&mut decoder)?;
    decoder.finish()?;
    Ok(value)
}
