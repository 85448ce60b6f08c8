//! Dispatch registry: tabel (nama contract -> decode-and-invoke).
//!
//! State: `Empty -> Populated`, add-only. Setiap entry membawa closure
//! yang tipenya statis untuk contract-nya, jadi yang dicek saat runtime
//! hanya perbandingan nama.

use tracing::{debug, trace, warn};

use crate::config::CodecConfig;
use crate::contract::{Contract, Parameters};
use crate::error::Result;
use crate::protocol::Decoder;

/// Handler untuk contract dengan parameter `P`.
///
/// Otomatis terimplementasi untuk closure `FnMut(A, B, ..)` yang arity dan
/// tipenya sama dengan tuple `P`. Parameter diterima sebagai owned value.
pub trait Handler<P>: Send + 'static {
    fn call(&mut self, params: P);
}

impl<Func> Handler<()> for Func
where
    Func: FnMut() + Send + 'static,
{
    fn call(&mut self, _params: ()) {
        (self)()
    }
}

macro_rules! tuple_handler {
    ($($name:ident $idx:tt),+) => {
        impl<Func, $($name),+> Handler<($($name,)+)> for Func
        where
            Func: FnMut($($name),+) + Send + 'static,
        {
            #[inline]
            fn call(&mut self, params: ($($name,)+)) {
                (self)($(params.$idx),+)
            }
        }
    };
}

for_each_tuple!(tuple_handler);

type DecodeAndInvoke = Box<dyn FnMut(&mut Decoder<'_>) -> Result<()> + Send>;

struct Entry {
    name: String,
    invoke: DecodeAndInvoke,
}

/// Counter dispatch sejak registry dibuat.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchStats {
    /// Pesan yang cocok dan handler-nya dipanggil.
    pub routed: u64,
    /// Pesan tanpa subscriber (`Ok(false)`).
    pub unrouted: u64,
    /// Pesan rusak (nama tidak terbaca, atau parameter gagal di-decode).
    pub malformed: u64,
}

/// Registry subscriber. Dibuat sekali oleh host lalu di-share ke semua
/// subscriber dan dispatcher; tidak ada instance global.
///
/// `Dispatcher` adalah `Send`. Host yang butuh akses dari banyak thread
/// membungkusnya sendiri (misal `Mutex<Dispatcher>`).
#[derive(Default)]
pub struct Dispatcher {
    entries: Vec<Entry>,
    config: CodecConfig,
    stats: DispatchStats,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CodecConfig) -> Self {
        Self {
            entries: Vec::new(),
            config,
            stats: DispatchStats::default(),
        }
    }

    /// Daftarkan handler untuk `contract`.
    ///
    /// Nama duplikat TIDAK ditolak, tapi di-log sebagai warning: entry yang
    /// didaftarkan lebih dulu selalu menang, yang baru tidak akan pernah
    /// dipanggil.
    pub fn subscribe<P, H>(&mut self, contract: &Contract<P>, handler: H)
    where
        P: Parameters + 'static,
        H: Handler<P>,
    {
        let name = contract.name().to_owned();

        if self.is_subscribed(&name) {
            warn!(contract = %name, "duplicate subscription, first registered handler wins");
        } else {
            debug!(contract = %name, arity = P::ARITY, "subscribed");
        }

        let mut handler = handler;
        let invoke = move |dec: &mut Decoder<'_>| -> Result<()> {
            // Decode penuh dulu: handler tidak dipanggil untuk pesan rusak
            let params = P::decode(dec)?;
            dec.finish()?;
            handler.call(params);
            Ok(())
        };

        self.entries.push(Entry {
            name,
            invoke: Box::new(invoke),
        });
    }

    /// Route pesan ke handler pertama yang namanya sama persis.
    ///
    /// - `Ok(true)`: handler dipanggil
    /// - `Ok(false)`: tidak ada subscriber, tidak ada handler yang disentuh
    /// - `Err(_)`: pesan rusak, handler tidak dipanggil
    ///
    /// Satu-satunya side effect di luar handler adalah counter
    /// `DispatchStats` (`routed`, `unrouted`, `malformed`), termasuk pada
    /// jalur `Ok(false)`.
    pub fn dispatch(&mut self, bytes: &[u8]) -> Result<bool> {
        let mut decoder = Decoder::with_config(bytes, self.config);

        let name = match decoder.read_str() {
            Ok(name) => name,
            Err(err) => {
                self.stats.malformed += 1;
                warn!(error = %err, "unreadable contract name");
                return Err(err);
            }
        };

        let Some(entry) = self.entries.iter_mut().find(|entry| entry.name == name) else {
            self.stats.unrouted += 1;
            debug!(contract = name, "no subscriber");
            return Ok(false);
        };

        match (entry.invoke)(&mut decoder) {
            Ok(()) => {
                self.stats.routed += 1;
                trace!(contract = name, bytes = bytes.len(), "dispatched");
                Ok(true)
            }
            Err(err) => {
                self.stats.malformed += 1;
                warn!(contract = name, error = %err, "malformed contract message");
                Err(err)
            }
        }
    }

    pub fn is_subscribed(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// Nama contract dalam urutan registrasi (termasuk duplikat).
    pub fn contract_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> DispatchStats {
        self.stats
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("contracts", &self.contract_names().collect::<Vec<_>>())
            .field("config", &self.config)
            .field("stats", &self.stats)
            .finish()
    }
}
