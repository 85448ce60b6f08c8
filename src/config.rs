//! Konfigurasi decode.
//!
//! Encode tidak punya opsi: format wire tetap. Semua knob di sini
//! mengatur seberapa ketat decoder terhadap input yang datang dari transport.

/// Default batas elemen per length prefix (16 Mi).
pub const DEFAULT_MAX_LEN: usize = 16 * 1024 * 1024;

/// Opsi decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Batas atas untuk setiap length prefix yang di-decode
    /// (sequence, set, map, adapter, string).
    pub max_len: usize,
    /// Izinkan sisa byte setelah pesan selesai di-decode.
    pub allow_trailing_bytes: bool,
    /// Decode langsung menolak pesan dengan nama contract berbeda.
    pub verify_contract_name: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            allow_trailing_bytes: false,
            verify_contract_name: false,
        }
    }
}

impl CodecConfig {
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn with_trailing_bytes(mut self, allow: bool) -> Self {
        self.allow_trailing_bytes = allow;
        self
    }

    pub fn with_contract_name_check(mut self, verify: bool) -> Self {
        self.verify_contract_name = verify;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_strict() {
        let config = CodecConfig::default();
        assert_eq!(config.max_len, DEFAULT_MAX_LEN);
        assert!(!config.allow_trailing_bytes);
        assert!(!config.verify_contract_name);
    }

    #[test]
    fn test_builder() {
        let config = CodecConfig::default()
            .with_max_len(4)
            .with_trailing_bytes(true)
            .with_contract_name_check(true);
        assert_eq!(config.max_len, 4);
        assert!(config.allow_trailing_bytes);
        assert!(config.verify_contract_name);
    }
}
