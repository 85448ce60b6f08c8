//! Set codec: `[len][element]×len`, decode lewat insert.
//!
//! Duplikat di wire (misal dari encoder lain) collapse sesuai semantik set.
//! `BTreeSet` encode dalam urutan terurut sehingga deterministik;
//! `HashSet` mengikuti urutan iterasi hasher.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use super::sequence::{decode_items, encode_items};
use super::Codec;
use crate::error::Result;
use crate::protocol::{Decoder, Encoder};

impl<T: Codec + Ord> Codec for BTreeSet<T> {
    fn encode(&self, enc: &mut Encoder) {
        encode_items(enc, self.len(), self);
    }

    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        let mut set = BTreeSet::new();
        decode_items::<T, _>(dec, |item| {
            set.insert(item);
        })?;
        Ok(set)
    }
}

impl<T, S> Codec for HashSet<T, S>
where
    T: Codec + Eq + Hash,
    S: BuildHasher + Default,
{
    fn encode(&self, enc: &mut Encoder) {
        encode_items(enc, self.len(), self);
    }

    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        let mut set = HashSet::with_hasher(S::default());
        decode_items::<T, _>(dec, |item| {
            set.insert(item);
        })?;
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_bytes, to_bytes};

    #[test]
    fn test_btree_set_sorted_on_wire() {
        let set: BTreeSet<u8> = [3, 1, 2].into_iter().collect();
        let bytes = to_bytes(&set);
        assert_eq!(&bytes[8..], &[1, 2, 3]);
        assert_eq!(from_bytes::<BTreeSet<u8>>(&bytes), Ok(set));
    }

    #[test]
    fn test_duplicates_collapse() {
        // Wire berisi [5, 5, 6] -> set {5, 6}
        let bytes = to_bytes(&vec![5u32, 5, 6]);
        let set: BTreeSet<u32> = from_bytes(&bytes).unwrap();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![5, 6]);
    }

    #[test]
    fn test_hash_set() {
        let set: HashSet<String> = ["ABC1", "ABC2"].iter().map(|s| s.to_string()).collect();
        assert_eq!(from_bytes::<HashSet<String>>(&to_bytes(&set)), Ok(set));
    }
}
