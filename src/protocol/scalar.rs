//! Fixed-width scalar layout
//!
//! Scalar ditulis sebagai raw byte pattern host (native endian), persis
//! seperti representasi di memori. Tidak ada normalisasi endianness:
//! format ini hanya untuk host dengan arsitektur yang sama.

/// Tipe primitive dengan lebar tetap yang bisa di-copy langsung ke wire.
pub trait Scalar: Copy {
    /// Lebar dalam bytes.
    const WIDTH: usize;

    /// Append raw bytes ke `out`.
    fn put(self, out: &mut Vec<u8>);

    /// Baca dari slice yang panjangnya PERSIS `WIDTH`, `None` jika tidak.
    fn take(bytes: &[u8]) -> Option<Self>;
}

macro_rules! impl_scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Scalar for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                #[inline(always)]
                fn put(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_ne_bytes());
                }

                #[inline(always)]
                fn take(bytes: &[u8]) -> Option<Self> {
                    let raw: [u8; std::mem::size_of::<$ty>()] = bytes.try_into().ok()?;
                    Some(<$ty>::from_ne_bytes(raw))
                }
            }
        )+
    };
}

impl_scalar!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);
