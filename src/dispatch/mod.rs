//! Dispatch Layer: publish/route di atas byte channel opaque
//!
//! Producer tidak perlu tahu siapa (kalau ada) yang consume sebuah
//! contract; consumer cukup subscribe sekali.

mod registry;

pub use registry::{DispatchStats, Dispatcher, Handler};
