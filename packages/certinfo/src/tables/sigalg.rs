//! TLS signature scheme identifiers
//!
//! RFC 8446 §4.2.3 and the IANA TLS SignatureScheme registry, plus the TLS 1.2
//! hash/signature pairs that still show up in handshakes.

/// A signature scheme code and its protocol name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigAlg {
    /// Two-byte scheme identifier
    pub id: u16,
    /// Canonical name
    pub name: &'static str,
}

const fn alg(name: &'static str, id: u16) -> SigAlg {
    SigAlg { id, name }
}

/// Name of a signature scheme identifier
#[must_use]
pub fn sigalg_name(id: u16) -> Option<&'static str> {
    SIGALGS.iter().find(|s| s.id == id).map(|s| s.name)
}

/// The full table, in lookup order
#[must_use]
pub fn sigalgs() -> &'static [SigAlg] {
    SIGALGS
}

static SIGALGS: &[SigAlg] = &[
    // RSASSA-PKCS1-v1_5
    alg("rsa_pkcs1_sha256", 0x0401),
    alg("rsa_pkcs1_sha384", 0x0501),
    alg("rsa_pkcs1_sha512", 0x0601),
    // ECDSA
    alg("ecdsa_secp256r1_sha256", 0x0403),
    alg("ecdsa_secp384r1_sha384", 0x0503),
    alg("ecdsa_secp521r1_sha512", 0x0603),
    // RSASSA-PSS, public key OID rsaEncryption
    alg("rsa_pss_rsae_sha256", 0x0804),
    alg("rsa_pss_rsae_sha384", 0x0805),
    alg("rsa_pss_rsae_sha512", 0x0806),
    // EdDSA
    alg("ed25519", 0x0807),
    alg("ed448", 0x0808),
    // RSASSA-PSS, public key OID RSASSA-PSS
    alg("rsa_pss_pss_sha256", 0x0809),
    alg("rsa_pss_pss_sha384", 0x080a),
    alg("rsa_pss_pss_sha512", 0x080b),
    // Legacy
    alg("rsa_pkcs1_sha1", 0x0201),
    alg("ecdsa_sha1", 0x0203),
    // draft-davidben-tls13-pkcs1
    alg("rsa_pkcs1_sha256_legacy", 0x0420),
    alg("rsa_pkcs1_sha384_legacy", 0x0520),
    alg("rsa_pkcs1_sha512_legacy", 0x0620),
    // draft-wang-tls-raw-public-key-with-ibc
    alg("eccsi_sha256", 0x0704),
    alg("iso_ibs1", 0x0705),
    alg("iso_ibs2", 0x0706),
    alg("iso_chinese_ibs", 0x0707),
    // RFC 8998
    alg("sm2sig_sm3", 0x0708),
    // RFC 9367
    alg("gostr34102012_256a", 0x0709),
    alg("gostr34102012_256b", 0x070A),
    alg("gostr34102012_256c", 0x070B),
    alg("gostr34102012_256d", 0x070C),
    alg("gostr34102012_512a", 0x070D),
    alg("gostr34102012_512b", 0x070E),
    alg("gostr34102012_512c", 0x070F),
    // RFC 8734
    alg("ecdsa_brainpoolP256r1tls13_sha256", 0x081A),
    alg("ecdsa_brainpoolP384r1tls13_sha384", 0x081B),
    alg("ecdsa_brainpoolP512r1tls13_sha512", 0x081C),
    // TLS 1.2 hash/signature pairs
    alg("dsa_sha256", 0x0402),
    alg("dsa_sha384", 0x0502),
    alg("dsa_sha512", 0x0602),
    alg("dsa_sha224", 0x0302),
    alg("dsa_sha1", 0x0202),
    alg("ecdsa_sha224", 0x0303),
    // RFC 9189
    alg("gostr34102012_256_intrinsic", 0x0840),
    alg("gostr34102012_512_intrinsic", 0x0841),
];
