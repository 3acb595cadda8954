//! Verification error, signature scheme and named group tables

use cryypt_certinfo::tables::{self, CurveTable, Tables, VerifyErrorTable};
use cryypt_certinfo::{
    CertInfoConfig, LibraryProfile, curve_key, curve_key_to_nist, curve_name, sigalg_name,
    verify_error_code, verify_error_name,
};

#[test]
fn test_curve_23_is_p256() {
    assert_eq!(curve_name(23), Some("secp256r1"));
    let entry = tables::get().curves().by_id(23).expect("group 23 present");
    assert_eq!(entry.nist, Some("P-256"));
    assert_eq!(entry.key, 415);
    assert_eq!(curve_key("P-256"), curve_key("secp256r1"));
    assert_eq!(curve_key("P-256"), Some(415));
    assert_eq!(curve_key_to_nist(415), Some("P-256"));
}

#[test]
fn test_curve_lookups() {
    assert_eq!(curve_name(29), Some("ecdh_x25519"));
    assert_eq!(curve_name(24), Some("secp384r1"));
    assert_eq!(curve_key_to_nist(715), Some("P-384"));
    assert_eq!(curve_key_to_nist(716), Some("P-521"));
    assert_eq!(curve_key_to_nist(1034), None);
    assert_eq!(curve_name(0x0a0a), None);
    assert_eq!(curve_key("no-such-curve"), None);
    assert_eq!(tables::get().curves().key_by_id(0xFF01), None);
}

#[test]
fn test_curve_round_trip() {
    let curves = tables::get().curves();
    for entry in curves.entries().iter().filter(|e| e.key != -1) {
        assert_eq!(curves.name_by_key(entry.key), Some(entry.name), "{entry:?}");
        assert_eq!(curves.key(entry.name), Some(entry.key));
        if let Some(nist) = entry.nist {
            assert_eq!(curves.key(nist), Some(entry.key));
        }
    }
}

#[test]
fn test_verify_codes() {
    assert_eq!(verify_error_code("X509_V_OK"), Some(0));
    assert_eq!(verify_error_code("X509_V_ERR_CERT_HAS_EXPIRED"), Some(10));
    assert_eq!(verify_error_name(10), Some("X509_V_ERR_CERT_HAS_EXPIRED"));
    assert_eq!(verify_error_code("X509_V_ERR_NOT_A_THING"), None);
    assert_eq!(verify_error_name(-1), None);
    assert_eq!(verify_error_name(100_000), None);
}

#[test]
fn test_verify_round_trip() {
    let table = tables::get().verify_errors();
    for entry in table.entries().iter().filter(|e| e.code != -1) {
        assert_eq!(table.code(entry.name), Some(entry.code));
        assert_eq!(table.name(entry.code), Some(entry.name));
    }
}

#[test]
fn test_profile_drops_newer_constants() {
    let modern = VerifyErrorTable::build(LibraryProfile::Openssl3);
    let legacy = VerifyErrorTable::build(LibraryProfile::Openssl111);
    assert_eq!(modern.code("X509_V_ERR_EC_KEY_EXPLICIT_PARAMS"), Some(94));
    assert_eq!(legacy.code("X509_V_ERR_EC_KEY_EXPLICIT_PARAMS"), None);
    assert_eq!(legacy.name(94), None);
    assert_eq!(legacy.code("X509_V_ERR_CERT_HAS_EXPIRED"), Some(10));

    let undefined = legacy
        .entries()
        .iter()
        .find(|e| e.name == "X509_V_ERR_EC_KEY_EXPLICIT_PARAMS")
        .expect("entry kept");
    assert_eq!(undefined.code, -1);
    assert_eq!(undefined.raw_definition, undefined.name);
}

#[test]
fn test_minimal_profile_curves() {
    let curves = CurveTable::build(LibraryProfile::Minimal);
    assert_eq!(curves.key("P-256"), Some(415));
    assert_eq!(curves.key("secp384r1"), Some(715));
    assert_eq!(curves.key("secp256k1"), None);
    // the name still resolves even when the key does not
    assert_eq!(curves.name(22), Some("secp256k1"));
    assert_eq!(curves.key_by_id(22), None);
}

#[test]
fn test_tables_build_is_independent_of_global() {
    let tables = Tables::build(&CertInfoConfig::minimal());
    assert_eq!(tables.verify_errors().code("X509_V_OK"), Some(0));
    assert_eq!(tables.curves().key("ecdh_x25519"), None);
}

#[test]
fn test_sigalg_names() {
    assert_eq!(sigalg_name(0x0403), Some("ecdsa_secp256r1_sha256"));
    assert_eq!(sigalg_name(0x0804), Some("rsa_pss_rsae_sha256"));
    assert_eq!(sigalg_name(0x0807), Some("ed25519"));
    assert_eq!(sigalg_name(0x0a0a), None);
    assert!(tables::sigalgs().iter().all(|alg| sigalg_name(alg.id).is_some()));
}
