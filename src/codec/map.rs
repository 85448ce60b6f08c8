//! Map codec: `[len][key, value]×len`.
//!
//! `BTreeMap` ditulis dalam urutan key, jadi dua map yang sama selalu
//! menghasilkan bytes yang identik berapa pun urutan insert-nya.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::Codec;
use crate::error::Result;
use crate::protocol::{Decoder, Encoder};

#[inline]
fn encode_pairs<'a, K, V, I>(enc: &mut Encoder, len: usize, pairs: I)
where
    K: Codec + 'a,
    V: Codec + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    enc.write_len(len);
    for (key, value) in pairs {
        key.encode(enc);
        value.encode(enc);
    }
}

#[inline]
fn decode_pairs<K, V, F>(dec: &mut Decoder<'_>, mut insert: F) -> Result<()>
where
    K: Codec,
    V: Codec,
    F: FnMut(K, V),
{
    let len = dec.read_len()?;
    for _ in 0..len {
        let key = K::decode(dec)?;
        let value = V::decode(dec)?;
        insert(key, value);
    }
    Ok(())
}

impl<K: Codec + Ord, V: Codec> Codec for BTreeMap<K, V> {
    fn encode(&self, enc: &mut Encoder) {
        encode_pairs(enc, self.len(), self);
    }

    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        let mut map = BTreeMap::new();
        decode_pairs::<K, V, _>(dec, |key, value| {
            map.insert(key, value);
        })?;
        Ok(map)
    }
}

impl<K, V, S> Codec for HashMap<K, V, S>
where
    K: Codec + Eq + Hash,
    V: Codec,
    S: BuildHasher + Default,
{
    fn encode(&self, enc: &mut Encoder) {
        encode_pairs(enc, self.len(), self);
    }

    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        let len = dec.read_len()?;
        let mut map = HashMap::with_capacity_and_hasher(dec.capacity_hint::<(K, V)>(len), S::default());
        for _ in 0..len {
            let key = K::decode(dec)?;
            let value = V::decode(dec)?;
            map.insert(key, value);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_bytes, to_bytes};

    #[test]
    fn test_btree_map_roundtrip() {
        let map: BTreeMap<i32, String> = [(15, "ABC3".to_string())].into_iter().collect();
        assert_eq!(from_bytes::<BTreeMap<i32, String>>(&to_bytes(&map)), Ok(map));
    }

    #[test]
    fn test_insert_order_irrelevant() {
        let mut a = BTreeMap::new();
        a.insert(2u8, 'b');
        a.insert(1u8, 'a');

        let mut b = BTreeMap::new();
        b.insert(1u8, 'a');
        b.insert(2u8, 'b');

        assert_eq!(to_bytes(&a), to_bytes(&b));
    }

    #[test]
    fn test_nested_map_values() {
        let mut map: HashMap<String, Vec<Option<u8>>> = HashMap::new();
        map.insert("x".into(), vec![Some(1), None]);
        map.insert("y".into(), vec![]);
        assert_eq!(from_bytes::<HashMap<String, Vec<Option<u8>>>>(&to_bytes(&map)), Ok(map));
    }

    #[test]
    fn test_duplicate_keys() {
        // Vec<(K, V)> punya layout wire yang sama dengan map, tapi
        // mempertahankan duplikat dan urutannya (pengganti multimap)
        let pairs = vec![(1u8, 'a'), (2, 'x'), (1, 'b')];
        let bytes = to_bytes(&pairs);
        assert_eq!(from_bytes::<Vec<(u8, char)>>(&bytes), Ok(pairs));

        // Map biasa: insert terakhir menang
        let map = from_bytes::<BTreeMap<u8, char>>(&bytes).unwrap();
        assert_eq!(map, BTreeMap::from([(1, 'b'), (2, 'x')]));

        // Grouping per key: urutan value dalam satu key dipertahankan
        let grouped = BTreeMap::from([(1u8, vec!['a', 'b']), (2, vec!['x'])]);
        assert_eq!(
            from_bytes::<BTreeMap<u8, Vec<char>>>(&to_bytes(&grouped)),
            Ok(grouped)
        );
    }
}
