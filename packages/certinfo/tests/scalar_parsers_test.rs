//! Time, version and GREASE parsers

use cryypt_certinfo::{
    Asn1Time, CertInfoError, OutBuf, PackedVersion, exclude_grease, generalized_time_to_epoch,
    parse_version, time_to_epoch,
};
use hex_literal::hex;
use proptest::prelude::*;

fn epoch(text: &str) -> Option<i64> {
    generalized_time_to_epoch(&Asn1Time::generalized(text).expect("fits inline"))
}

#[test]
fn test_generalized_time_utc() {
    assert_eq!(epoch("20230115123045Z"), Some(1_673_785_845));
    assert_eq!(epoch("19700101000000Z"), Some(0));
    assert_eq!(epoch("19691231235959Z"), Some(-1));
    assert_eq!(epoch("20000229235959Z"), Some(951_868_799));
}

#[test]
fn test_generalized_time_offsets() {
    assert_eq!(epoch("20230115123045+0100"), Some(1_673_785_845 - 3600));
    assert_eq!(epoch("20230115123045-0230"), Some(1_673_785_845 + 9000));
}

#[test]
fn test_generalized_time_optional_seconds_and_fraction() {
    assert_eq!(epoch("202301151230Z"), Some(1_673_785_800));
    assert_eq!(epoch("20230115123045.123Z"), Some(1_673_785_845));
    // a bare '.' is an empty fraction
    assert_eq!(epoch("20230115123045.Z"), Some(1_673_785_845));
    assert_eq!(epoch("20230115123045.5+0100"), Some(1_673_782_245));
}

#[test]
fn test_generalized_time_malformed() {
    for bad in [
        "20231315000000Z",
        "20230015000000Z",
        "2023011512304",
        "20230115123045",
        "20230115123045ZZ",
        "20230115123045+01",
        "20230115123045+01000",
        "2023O115123045Z",
        "20230115123045.",
        "20230115123045X",
        "",
    ] {
        assert_eq!(epoch(bad), None, "{bad:?}");
    }
}

#[test]
fn test_generalized_parser_rejects_utc_tag() {
    let utc = Asn1Time::utc("230115123045Z").expect("fits inline");
    assert_eq!(generalized_time_to_epoch(&utc), None);
    assert_eq!(time_to_epoch(&utc), Some(1_673_785_845));
}

#[test]
fn test_version_release_and_beta() {
    let v = parse_version("3.0.0").expect("valid");
    assert_eq!(v.as_u32(), 0x3000_000f);
    assert_eq!(v.status(), 0xf);
    assert_eq!(v.patch(), 0);
    assert!(v.is_release());

    let beta = parse_version("3.0.0-beta2").expect("valid");
    assert_eq!(beta.status(), 2);
    assert!(beta < v);
}

#[test]
fn test_version_letter_patch() {
    let v = parse_version("1.0.2u").expect("valid");
    assert_eq!(v.patch(), 21);
    assert_eq!(v.status(), 0xf);
    assert_eq!(v.as_u32(), 0x1000_215f);
    assert_eq!(v.to_string(), "0x1000215f");

    let zh: PackedVersion = "0.9.8zh".parse().expect("valid");
    assert_eq!(zh.as_u32(), 0x0090_821f);
}

#[test]
fn test_version_development_build() {
    let v = parse_version("3.0.0-alpha17").expect("valid");
    assert_eq!(v.as_u32(), 0x3000_0000);
    assert!(!v.is_release());
}

#[test]
fn test_version_failures() {
    for bad in ["9999.0.0", "16.0.0", "3.256.0", "3.0.256", "3.0", "3..0", "x.1.2", "3.0.0-beta15", ""] {
        assert!(
            matches!(parse_version(bad), Err(CertInfoError::InvalidVersion { .. })),
            "{bad:?}"
        );
    }
}

#[test]
fn test_grease_examples() {
    let mut area = [0u8; 8];
    let mut out = OutBuf::new(&mut area);
    assert_eq!(exclude_grease(&hex!("0A0A 0001"), &mut out), 2);
    assert_eq!(out.as_bytes(), hex!("0001"));

    let mut out = OutBuf::new(&mut area);
    assert_eq!(exclude_grease(&hex!("1A1B"), &mut out), 2);
    assert_eq!(out.as_bytes(), hex!("1A1B"));
}

#[test]
fn test_grease_odd_tail_and_truncation() {
    let mut area = [0u8; 8];
    let mut out = OutBuf::new(&mut area);
    assert_eq!(exclude_grease(&hex!("FAFA 1301 7A"), &mut out), 3);
    assert_eq!(out.as_bytes(), hex!("1301 7A"));

    let mut small = [0u8; 3];
    let mut out = OutBuf::new(&mut small);
    assert_eq!(exclude_grease(&hex!("1301 1302 1303"), &mut out), 2);
    assert_eq!(out.as_bytes(), hex!("1301"));
}

proptest! {
    #[test]
    fn prop_epoch_matches_chrono(secs in 0i64..4_102_444_800) {
        let instant = chrono::DateTime::from_timestamp(secs, 0).expect("in range");
        let text = instant.format("%Y%m%d%H%M%SZ").to_string();
        prop_assert_eq!(epoch(&text), Some(secs));
    }

    #[test]
    fn prop_version_fields_round_trip(major in 0u32..16, minor in 0u32..256, fix in 0u32..256) {
        let v = parse_version(&format!("{major}.{minor}.{fix}")).expect("in range");
        prop_assert_eq!((v.major(), v.minor(), v.fix(), v.patch()), (major, minor, fix, 0));
        prop_assert!(v.is_release());
    }

    #[test]
    fn prop_grease_output_has_no_grease_pairs(input in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut area = [0u8; 64];
        let mut out = OutBuf::new(&mut area);
        let written = exclude_grease(&input, &mut out);
        prop_assert_eq!(written, out.len());
        prop_assert!(written <= input.len());
        for pair in out.as_bytes().chunks_exact(2) {
            prop_assert!(!cryypt_certinfo::is_grease(pair[0], pair[1]));
        }
    }
}
