//! Contract schema: nama + daftar tipe parameter yang terurut.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use tracing::trace;

use super::invocation::{Arguments, ArgumentsMut, Invocation};
use crate::codec::Codec;
use crate::config::CodecConfig;
use crate::error::Result;

/// Tuple tipe parameter sebuah contract (`()` untuk contract tanpa parameter).
///
/// Encode/decode parameter memakai `Codec` dari tuple itu sendiri, jadi
/// urutan schema = urutan posisi tuple.
pub trait Parameters: Codec {
    /// Jumlah parameter.
    const ARITY: usize;

    /// Nama tipe setiap parameter sesuai urutan schema.
    fn type_names() -> Vec<&'static str>;
}

impl Parameters for () {
    const ARITY: usize = 0;

    fn type_names() -> Vec<&'static str> {
        Vec::new()
    }
}

macro_rules! tuple_parameters {
    ($($name:ident $idx:tt),+) => {
        impl<$($name: Codec),+> Parameters for ($($name,)+) {
            const ARITY: usize = [$($idx),+].len();

            fn type_names() -> Vec<&'static str> {
                vec![$(std::any::type_name::<$name>()),+]
            }
        }
    };
}

for_each_tuple!(tuple_parameters);

/// Schema immutable untuk satu jenis pesan.
///
/// Keunikan nama adalah tanggung jawab caller; lihat `Dispatcher::subscribe`
/// untuk perilaku nama duplikat.
pub struct Contract<P> {
    name: Cow<'static, str>,
    // fn() -> P: Contract tetap Send + Sync apa pun P
    params: PhantomData<fn() -> P>,
}

impl<P: Parameters> Contract<P> {
    /// Definisikan contract baru.
    pub fn define(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            params: PhantomData,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn arity(&self) -> usize {
        P::ARITY
    }

    pub fn parameter_types(&self) -> Vec<&'static str> {
        P::type_names()
    }

    /// Bind argumen read-only. Hanya bisa encode.
    pub fn bind<A: Arguments<P>>(&self, args: A) -> Invocation<'_, P, A> {
        Invocation::new(self, args)
    }

    /// Bind argumen mutable. Bisa encode dan decode.
    pub fn bind_mut<A: ArgumentsMut<P>>(&self, args: A) -> Invocation<'_, P, A> {
        Invocation::new(self, args)
    }

    /// Shortcut untuk `bind(args).encode()`.
    pub fn encode<A: Arguments<P>>(&self, args: A) -> Vec<u8> {
        self.bind(args).encode()
    }

    /// Shortcut untuk `bind_mut(args).decode(bytes)`.
    pub fn decode<A: ArgumentsMut<P>>(&self, bytes: &[u8], args: A) -> Result<()> {
        self.bind_mut(args).decode(bytes)
    }

    /// Decode pesan ke tuple parameter baru.
    pub fn decode_params(&self, bytes: &[u8]) -> Result<P> {
        self.decode_params_with(bytes, CodecConfig::default())
    }

    pub fn decode_params_with(&self, bytes: &[u8], config: CodecConfig) -> Result<P> {
        let params = super::invocation::decode_message::<P>(self.name(), bytes, config)?;
        trace!(contract = %self.name, bytes = bytes.len(), "decoded contract params");
        Ok(params)
    }
}

impl<P> Clone for Contract<P> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            params: PhantomData,
        }
    }
}

impl<P> fmt::Debug for Contract<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contract")
            .field("name", &self.name)
            .field("params", &std::any::type_name::<P>())
            .finish()
    }
}

/// `XYZ(alloc::vec::Vec<i32>, ..)`
impl<P: Parameters> fmt::Display for Contract<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, P::type_names().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_define() {
        let xyz = Contract::<(Vec<(i32, String)>, BTreeMap<i32, String>)>::define("XYZ");
        assert_eq!(xyz.name(), "XYZ");
        assert_eq!(xyz.arity(), 2);
        assert_eq!(xyz.parameter_types().len(), 2);
        assert!(xyz.parameter_types()[0].contains("Vec"));
    }

    #[test]
    fn test_display() {
        let ping = Contract::<(u64, bool)>::define(String::from("PING"));
        assert_eq!(ping.to_string(), "PING(u64, bool)");

        let empty = Contract::<()>::define("EMPTY");
        assert_eq!(empty.arity(), 0);
        assert_eq!(empty.to_string(), "EMPTY()");
    }

    #[test]
    fn test_clone_keeps_name() {
        let a = Contract::<(u8,)>::define("A");
        let b = a.clone();
        assert_eq!(a.name(), b.name());
    }
}
