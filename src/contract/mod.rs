//! Contract Layer
//!
//! `Contract<P>` didefinisikan sekali per jenis pesan. Pengecekan arity dan
//! tipe argumen terjadi di compile time lewat generics, bukan runtime tag.

mod invocation;
mod schema;

pub use invocation::{Arguments, ArgumentsMut, Invocation};
pub use schema::{Contract, Parameters};
