//! Sequence codec: `[len][element]×len`.
//!
//! Urutan elemen = urutan iterasi. Decode selalu mulai dari target kosong
//! lalu append sesuai urutan baca.

use std::collections::{LinkedList, VecDeque};

use super::Codec;
use crate::error::{CodecError, Result};
use crate::protocol::{Decoder, Encoder};

/// Tulis prefix lalu setiap elemen dari `items`.
#[inline]
pub(crate) fn encode_items<'a, T, I>(enc: &mut Encoder, len: usize, items: I)
where
    T: Codec + 'a,
    I: IntoIterator<Item = &'a T>,
{
    enc.write_len(len);
    for item in items {
        item.encode(enc);
    }
}

/// Baca prefix lalu `len` elemen, masing-masing diserahkan ke `push`.
#[inline]
pub(crate) fn decode_items<T, F>(dec: &mut Decoder<'_>, mut push: F) -> Result<()>
where
    T: Codec,
    F: FnMut(T),
{
    let len = dec.read_len()?;
    for _ in 0..len {
        push(T::decode(dec)?);
    }
    Ok(())
}

impl Codec for String {
    #[inline]
    fn encode(&self, enc: &mut Encoder) {
        enc.write_str(self);
    }

    #[inline]
    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        dec.read_str().map(str::to_owned)
    }
}

impl<T: Codec> Codec for Vec<T> {
    fn encode(&self, enc: &mut Encoder) {
        encode_items(enc, self.len(), self);
    }

    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        let len = dec.read_len()?;
        let mut items = Vec::with_capacity(dec.capacity_hint::<T>(len));
        for _ in 0..len {
            items.push(T::decode(dec)?);
        }
        Ok(items)
    }
}

impl<T: Codec> Codec for VecDeque<T> {
    fn encode(&self, enc: &mut Encoder) {
        encode_items(enc, self.len(), self);
    }

    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        Vec::<T>::decode(dec).map(VecDeque::from)
    }
}

impl<T: Codec> Codec for LinkedList<T> {
    fn encode(&self, enc: &mut Encoder) {
        encode_items(enc, self.len(), self);
    }

    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        let mut list = LinkedList::new();
        decode_items::<T, _>(dec, |item| list.push_back(item))?;
        Ok(list)
    }
}

// Array berukuran tetap: N sudah diketahui dari tipe, jadi tanpa prefix.
impl<T: Codec, const N: usize> Codec for [T; N] {
    fn encode(&self, enc: &mut Encoder) {
        for item in self {
            item.encode(enc);
        }
    }

    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(T::decode(dec)?);
        }
        items.try_into().map_err(|items: Vec<T>| CodecError::ArrayLength {
            expected: N,
            found: items.len(),
        })
    }
}

impl<T: Codec> Codec for Box<T> {
    #[inline]
    fn encode(&self, enc: &mut Encoder) {
        (**self).encode(enc);
    }

    #[inline]
    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        T::decode(dec).map(Box::new)
    }
}
