//! Invocation proxy: contract + argumen konkret.
//!
//! Argumen read-only (`(&A, &B)`) hanya bisa encode. Argumen mutable
//! (`(&mut A, &mut B)`) bisa encode dan decode. Decode lewat proxy
//! read-only ditolak saat compile:
//!
//! ```compile_fail
//! use hermes_contract::Contract;
//!
//! let counter = Contract::<(u32,)>::define("COUNTER");
//! let value = 1u32;
//! let bytes = counter.bind((&value,)).encode();
//! counter.bind((&value,)).decode(&bytes).unwrap();
//! ```
//!
//! Arity atau tipe yang tidak cocok dengan schema juga compile error:
//!
//! ```compile_fail
//! use hermes_contract::Contract;
//!
//! let counter = Contract::<(u32, String)>::define("COUNTER");
//! let value = 1u32;
//! counter.bind((&value,)).encode();
//! ```

use tracing::trace;

use super::schema::{Contract, Parameters};
use crate::codec::Codec;
use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::protocol::{Decoder, Encoder};

/// Argumen yang bisa di-encode sesuai schema `P`.
pub trait Arguments<P: Parameters> {
    fn encode_args(&self, enc: &mut Encoder);
}

/// Argumen yang juga bisa menerima hasil decode.
pub trait ArgumentsMut<P: Parameters>: Arguments<P> {
    /// Tulis parameter hasil decode ke variabel yang di-bind.
    fn assign(&mut self, params: P);
}

impl Arguments<()> for () {
    fn encode_args(&self, _enc: &mut Encoder) {}
}

impl ArgumentsMut<()> for () {
    fn assign(&mut self, _params: ()) {}
}

macro_rules! tuple_arguments {
    ($($name:ident $idx:tt),+) => {
        impl<'a, $($name: Codec),+> Arguments<($($name,)+)> for ($(&'a $name,)+) {
            #[inline]
            fn encode_args(&self, enc: &mut Encoder) {
                $(self.$idx.encode(enc);)+
            }
        }

        impl<'a, $($name: Codec),+> Arguments<($($name,)+)> for ($(&'a mut $name,)+) {
            #[inline]
            fn encode_args(&self, enc: &mut Encoder) {
                $(self.$idx.encode(enc);)+
            }
        }

        impl<'a, $($name: Codec),+> ArgumentsMut<($($name,)+)> for ($(&'a mut $name,)+) {
            #[inline]
            fn assign(&mut self, params: ($($name,)+)) {
                $(*self.$idx = params.$idx;)+
            }
        }
    };
}

for_each_tuple!(tuple_arguments);

/// Contract yang sudah di-bind ke argumen.
pub struct Invocation<'c, P, A> {
    contract: &'c Contract<P>,
    args: A,
}

impl<'c, P: Parameters, A> Invocation<'c, P, A> {
    pub(super) fn new(contract: &'c Contract<P>, args: A) -> Self {
        Self { contract, args }
    }

    pub fn contract(&self) -> &'c Contract<P> {
        self.contract
    }
}

impl<P: Parameters, A: Arguments<P>> Invocation<'_, P, A> {
    /// Encode ke buffer baru: nama, lalu parameter sesuai urutan schema.
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        self.encode_into(&mut bytes);
        bytes
    }

    /// Encode ke `out`. Isi lama `out` selalu dibuang (bukan append),
    /// alokasinya dipakai ulang.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        let mut encoder = Encoder::from_vec(std::mem::take(out));
        encoder.write_str(self.contract.name());
        self.args.encode_args(&mut encoder);
        *out = encoder.into_bytes();

        trace!(contract = self.contract.name(), bytes = out.len(), "encoded contract message");
    }
}

impl<P: Parameters, A: ArgumentsMut<P>> Invocation<'_, P, A> {
    /// Decode pesan ke variabel yang di-bind.
    ///
    /// All-or-nothing: variabel baru ditulis setelah semua parameter
    /// berhasil di-decode dan pesan habis dikonsumsi.
    pub fn decode(&mut self, bytes: &[u8]) -> Result<()> {
        self.decode_with(bytes, CodecConfig::default())
    }

    pub fn decode_with(&mut self, bytes: &[u8], config: CodecConfig) -> Result<()> {
        let params = decode_message::<P>(self.contract.name(), bytes, config)?;
        self.args.assign(params);

        trace!(contract = self.contract.name(), bytes = bytes.len(), "decoded contract message");
        Ok(())
    }
}

/// Baca nama lalu parameter `P`, dengan exact-consumption check.
pub(crate) fn decode_message<P: Codec>(
    expected: &str,
    bytes: &[u8],
    config: CodecConfig,
) -> Result<P> {
    let mut decoder = Decoder::with_config(bytes, config);

    let name = decoder.read_str()?;
    if config.verify_contract_name && name != expected {
        return Err(CodecError::ContractMismatch {
            expected: expected.to_owned(),
            found: name.to_owned(),
        });
    }

    let params = P::decode(&mut decoder)?;
    decoder.finish()?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::peek_name;

    #[test]
    fn test_encode_layout() {
        let ping = Contract::<(u32,)>::define("PING");
        let bytes = ping.bind((&7u32,)).encode();

        let mut expected = Encoder::new();
        expected.write_str("PING");
        expected.write_scalar(7u32);
        assert_eq!(bytes, expected.into_bytes());
    }

    #[test]
    fn test_encode_into_overwrites() {
        let ping = Contract::<(u8,)>::define("PING");
        let mut out = vec![0xAA; 32];

        ping.bind((&1u8,)).encode_into(&mut out);
        assert_eq!(out, ping.encode((&1u8,)));
        assert_eq!(peek_name(&out), Ok("PING"));
    }

    #[test]
    fn test_decode_is_all_or_nothing() {
        let pair = Contract::<(u32, String)>::define("PAIR");
        let bytes = pair.encode((&5u32, &"five".to_string()));

        let mut number = 0u32;
        let mut text = String::from("untouched");
        let truncated = &bytes[..bytes.len() - 1];

        let err = pair
            .bind_mut((&mut number, &mut text))
            .decode(truncated)
            .unwrap_err();
        assert!(matches!(err, CodecError::BufferUnderrun { .. }));
        assert_eq!(number, 0);
        assert_eq!(text, "untouched");

        pair.decode(&bytes, (&mut number, &mut text)).unwrap();
        assert_eq!((number, text.as_str()), (5, "five"));
    }

    #[test]
    fn test_mutable_proxy_encodes_current_values() {
        let pair = Contract::<(u8, bool)>::define("PAIR");
        let mut a = 9u8;
        let mut b = true;

        let bytes = pair.bind_mut((&mut a, &mut b)).encode();
        assert_eq!(bytes, pair.encode((&9u8, &true)));
    }

    #[test]
    fn test_name_ignored_by_default() {
        let a = Contract::<(u8,)>::define("A");
        let b = Contract::<(u8,)>::define("B");
        let bytes = a.encode((&3u8,));

        assert_eq!(b.decode_params(&bytes), Ok((3,)));

        let strict = CodecConfig::default().with_contract_name_check(true);
        assert_eq!(
            b.decode_params_with(&bytes, strict),
            Err(CodecError::ContractMismatch {
                expected: "B".into(),
                found: "A".into()
            })
        );
    }

    #[test]
    fn test_empty_contract() {
        let tick = Contract::<()>::define("TICK");
        let bytes = tick.encode(());
        assert_eq!(peek_name(&bytes), Ok("TICK"));
        assert!(tick.decode(&bytes, ()).is_ok());
    }
}
