//! Hermes Contract - Typed Binary Contracts
//!
//! Arsitektur:
//! - Protocol: `Encoder`/`Decoder`, satu-satunya layer yang menyentuh bytes
//! - Codec: rule encode/decode yang composable untuk setiap shape
//! - Contract: nama + daftar tipe parameter, di-bind ke argumen konkret
//! - Dispatch: routing pesan ke handler berdasarkan nama contract
//!
//! ```
//! use std::collections::BTreeMap;
//! use hermes_contract::{Contract, Dispatcher};
//!
//! type Params = (Vec<(i32, String)>, BTreeMap<i32, String>);
//! let xyz = Contract::<Params>::define("XYZ");
//!
//! // Sisi pengirim
//! let pairs = vec![(10, "XYZ1".to_string()), (11, "XYZ2".to_string())];
//! let table = BTreeMap::from([(15, "ABC3".to_string())]);
//! let bytes = xyz.bind((&pairs, &table)).encode();
//!
//! // Sisi penerima: decode langsung...
//! let mut out_pairs = Vec::new();
//! let mut out_table = BTreeMap::new();
//! xyz.bind_mut((&mut out_pairs, &mut out_table)).decode(&bytes).unwrap();
//! assert_eq!((out_pairs, out_table), (pairs, table));
//!
//! // ...atau lewat dispatcher
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.subscribe(&xyz, |pairs: Vec<(i32, String)>, _table: BTreeMap<i32, String>| {
//!     assert_eq!(pairs.len(), 2);
//! });
//! assert_eq!(dispatcher.dispatch(&bytes), Ok(true));
//! ```
//!
//! Format wire memakai layout native host (tanpa normalisasi endianness).
//! Bytes hanya portable antar host dengan arsitektur yang sama.

// Generate impl untuk tuple arity 1..=12 (arity 0 ditangani manual).
macro_rules! for_each_tuple {
    ($m:ident) => {
        $m!(A 0);
        $m!(A 0, B 1);
        $m!(A 0, B 1, C 2);
        $m!(A 0, B 1, C 2, D 3);
        $m!(A 0, B 1, C 2, D 3, E 4);
        $m!(A 0, B 1, C 2, D 3, E 4, F 5);
        $m!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
        $m!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
        $m!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
        $m!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
        $m!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
        $m!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);
    };
}

pub mod codec;
pub mod config;
pub mod contract;
pub mod dispatch;
pub mod error;
pub mod protocol;

pub use codec::{from_bytes, to_bytes, Codec, Queue, Stack};
pub use config::{CodecConfig, DEFAULT_MAX_LEN};
pub use contract::{Arguments, ArgumentsMut, Contract, Invocation, Parameters};
pub use dispatch::{DispatchStats, Dispatcher, Handler};
pub use error::{CodecError, Result};
pub use protocol::{peek_name, ContractMessage, Decoder, Encoder, Scalar};
