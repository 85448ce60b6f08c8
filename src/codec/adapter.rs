//! Adapter codec: stack, queue, priority queue.
//!
//! Wire: `[len][element dalam urutan pop]×len`.
//!
//! - `Stack`: top dulu. Decode membangun ulang urutan top-to-bottom yang
//!   sama, jadi pop order setelah decode = pop order sebelum encode dan
//!   re-encode menghasilkan bytes identik.
//! - `Queue`: front-to-back, decode push_back sesuai urutan baca.
//! - `BinaryHeap`: urutan pop (terbesar dulu), decode push satu per satu.

use std::collections::{BinaryHeap, VecDeque};

use super::sequence::encode_items;
use super::Codec;
use crate::error::Result;
use crate::protocol::{Decoder, Encoder};

/// LIFO stack. Top ada di akhir `Vec` internal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterasi dari top ke bottom (urutan pop).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }
}

/// Push berurutan: elemen terakhir jadi top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Codec> Codec for Stack<T> {
    fn encode(&self, enc: &mut Encoder) {
        encode_items(enc, self.len(), self.iter());
    }

    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        // Wire top-first, Vec butuh bottom-first
        let mut items = Vec::<T>::decode(dec)?;
        items.reverse();
        Ok(Self { items })
    }
}

/// FIFO queue.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterasi front-to-back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Codec> Codec for Queue<T> {
    fn encode(&self, enc: &mut Encoder) {
        encode_items(enc, self.len(), self.iter());
    }

    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        VecDeque::<T>::decode(dec).map(|items| Self { items })
    }
}

impl<T: Codec + Ord + Clone> Codec for BinaryHeap<T> {
    fn encode(&self, enc: &mut Encoder) {
        // into_sorted_vec ascending; pop order = descending
        let sorted = self.clone().into_sorted_vec();
        encode_items(enc, sorted.len(), sorted.iter().rev());
    }

    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        Vec::<T>::decode(dec).map(BinaryHeap::from)
    }
}
