//! TLS named group table
//!
//! Maps IANA supported-group identifiers to the library's internal key (NID)
//! and to the SECG and NIST names. Groups without a library identity keep a
//! key of `-1`.

use crate::config::LibraryProfile;

use super::constants::raw_definition;
use super::resolve_code;

/// One named group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveEntry {
    /// IANA supported-group identifier
    pub id: u16,
    /// Library-internal key, `-1` when unavailable
    pub key: i32,
    /// Definition text the key was resolved from
    pub raw_definition: &'static str,
    /// SECG-style name
    pub name: &'static str,
    /// NIST name, when the curve has one
    pub nist: Option<&'static str>,
}

struct CurveDef {
    id: u16,
    symbol: Option<&'static str>,
    name: &'static str,
    nist: Option<&'static str>,
}

const fn def(
    id: u16,
    symbol: Option<&'static str>,
    name: &'static str,
    nist: Option<&'static str>,
) -> CurveDef {
    CurveDef {
        id,
        symbol,
        name,
        nist,
    }
}

/// Immutable named group table
#[derive(Debug)]
pub struct CurveTable {
    entries: Vec<CurveEntry>,
}

impl CurveTable {
    /// Resolve every group's key against `profile`
    #[must_use]
    pub fn build(profile: LibraryProfile) -> Self {
        let entries: Vec<CurveEntry> = CURVES
            .iter()
            .map(|c| {
                let (raw, key) = match c.symbol {
                    Some(symbol) => {
                        let raw = raw_definition(profile, symbol);
                        (raw, resolve_code(symbol, raw))
                    }
                    None => ("-1", -1),
                };
                CurveEntry {
                    id: c.id,
                    key,
                    raw_definition: raw,
                    name: c.name,
                    nist: c.nist,
                }
            })
            .collect();

        tracing::debug!(
            "curve table built for {:?}: {} of {} groups have a library key",
            profile,
            entries.iter().filter(|e| e.key != -1).count(),
            entries.len()
        );

        Self { entries }
    }

    /// SECG name of a group identifier
    #[must_use]
    pub fn name(&self, id: u16) -> Option<&'static str> {
        self.by_id(id).map(|e| e.name)
    }

    /// Library key of a group identifier
    #[must_use]
    pub fn key_by_id(&self, id: u16) -> Option<i32> {
        self.by_id(id).map(|e| e.key).filter(|&key| key != -1)
    }

    /// Library key for a SECG or NIST name
    #[must_use]
    pub fn key(&self, name: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|e| e.name == name || e.nist == Some(name))
            .map(|e| e.key)
            .filter(|&key| key != -1)
    }

    /// SECG name for a library key
    #[must_use]
    pub fn name_by_key(&self, key: i32) -> Option<&'static str> {
        self.by_key(key).map(|e| e.name)
    }

    /// NIST name for a library key
    #[must_use]
    pub fn nist_by_key(&self, key: i32) -> Option<&'static str> {
        self.by_key(key).and_then(|e| e.nist)
    }

    /// Entry for a group identifier
    #[must_use]
    pub fn by_id(&self, id: u16) -> Option<&CurveEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// All entries in table order
    #[must_use]
    pub fn entries(&self) -> &[CurveEntry] {
        &self.entries
    }

    fn by_key(&self, key: i32) -> Option<&CurveEntry> {
        if key == -1 {
            return None;
        }
        self.entries.iter().find(|e| e.key == key)
    }
}

// https://www.iana.org/assignments/tls-parameters/tls-parameters.xhtml#tls-parameters-8
static CURVES: &[CurveDef] = &[
    def(1, Some("NID_sect163k1"), "sect163k1", Some("K-163")),
    def(2, Some("NID_sect163r1"), "sect163r1", None),
    def(3, Some("NID_sect163r2"), "sect163r2", Some("B-163")),
    def(4, Some("NID_sect193r1"), "sect193r1", None),
    def(5, Some("NID_sect193r2"), "sect193r2", None),
    def(6, Some("NID_sect233k1"), "sect233k1", Some("K-233")),
    def(7, Some("NID_sect233r1"), "sect233r1", Some("B-233")),
    def(8, Some("NID_sect239k1"), "sect239k1", None),
    def(9, Some("NID_sect283k1"), "sect283k1", Some("K-283")),
    def(10, Some("NID_sect283r1"), "sect283r1", Some("B-283")),
    def(11, Some("NID_sect409k1"), "sect409k1", Some("K-409")),
    def(12, Some("NID_sect409r1"), "sect409r1", Some("B-409")),
    def(13, Some("NID_sect571k1"), "sect571k1", Some("K-571")),
    def(14, Some("NID_sect571r1"), "sect571r1", Some("B-571")),
    def(15, Some("NID_secp160k1"), "secp160k1", None),
    def(16, Some("NID_secp160r1"), "secp160r1", None),
    def(17, Some("NID_secp160r2"), "secp160r2", None),
    def(18, Some("NID_secp192k1"), "secp192k1", None),
    def(19, Some("NID_X9_62_prime192v1"), "secp192r1", Some("P-192")),
    def(20, Some("NID_secp224k1"), "secp224k1", None),
    def(21, Some("NID_secp224r1"), "secp224r1", Some("P-224")),
    def(22, Some("NID_secp256k1"), "secp256k1", None),
    def(23, Some("NID_X9_62_prime256v1"), "secp256r1", Some("P-256")),
    def(24, Some("NID_secp384r1"), "secp384r1", Some("P-384")),
    def(25, Some("NID_secp521r1"), "secp521r1", Some("P-521")),
    def(26, Some("NID_brainpoolP256r1"), "brainpoolP256r1", None),
    def(27, Some("NID_brainpoolP384r1"), "brainpoolP384r1", None),
    def(28, Some("NID_brainpoolP512r1"), "brainpoolP512r1", None),
    def(29, Some("EVP_PKEY_X25519"), "ecdh_x25519", None),
    def(30, Some("EVP_PKEY_X448"), "ecdh_x448", None),
    def(31, Some("NID_brainpoolP256r1tls13"), "brainpoolP256r1tls13", None),
    def(32, Some("NID_brainpoolP384r1tls13"), "brainpoolP384r1tls13", None),
    def(33, Some("NID_brainpoolP512r1tls13"), "brainpoolP512r1tls13", None),
    def(34, Some("NID_id_tc26_gost_3410_2012_256_paramSetA"), "GC256A", None),
    def(35, Some("NID_id_tc26_gost_3410_2012_256_paramSetB"), "GC256B", None),
    def(36, Some("NID_id_tc26_gost_3410_2012_256_paramSetC"), "GC256C", None),
    def(37, Some("NID_id_tc26_gost_3410_2012_256_paramSetD"), "GC256D", None),
    def(38, Some("NID_id_tc26_gost_3410_2012_512_paramSetA"), "GC512A", None),
    def(39, Some("NID_id_tc26_gost_3410_2012_512_paramSetB"), "GC512B", None),
    def(40, Some("NID_id_tc26_gost_3410_2012_512_paramSetC"), "GC512C", None),
    def(256, Some("NID_ffdhe2048"), "ffdhe2048", None),
    def(257, Some("NID_ffdhe3072"), "ffdhe3072", None),
    def(258, Some("NID_ffdhe4096"), "ffdhe4096", None),
    def(259, Some("NID_ffdhe6144"), "ffdhe6144", None),
    def(260, Some("NID_ffdhe8192"), "ffdhe8192", None),
    // Listed by IANA and known to libraries, but without any NID
    def(25497, None, "X25519Kyber768Draft00", None),
    def(25498, None, "SecP256r1Kyber768Draft00", None),
    def(0xFF01, None, "arbitrary_explicit_prime_curves", None),
    def(0xFF02, None, "arbitrary_explicit_char2_curves", None),
];
