//! Symbolic constants defined by each supported library build
//!
//! This is the "header" the tables resolve against: a symbol the active
//! profile does not define resolves to its own name, exactly like an
//! undefined macro stringified by the preprocessor.

use crate::config::LibraryProfile;

/// First library generation that defines a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Since {
    Baseline,
    V111,
    V3,
}

struct Symbol {
    name: &'static str,
    value: &'static str,
    since: Since,
}

const fn sym(name: &'static str, value: &'static str, since: Since) -> Symbol {
    Symbol { name, value, since }
}

impl LibraryProfile {
    fn generation(self) -> Since {
        match self {
            Self::Openssl3 => Since::V3,
            Self::Openssl111 => Since::V111,
            Self::Minimal => Since::Baseline,
        }
    }
}

/// Raw definition of `symbol` under `profile`: its literal value when defined,
/// otherwise the symbol name itself.
pub(crate) fn raw_definition(profile: LibraryProfile, symbol: &'static str) -> &'static str {
    let generation = profile.generation();
    VERIFY_CODES
        .iter()
        .chain(CURVE_KEYS)
        .find(|s| s.name == symbol)
        .filter(|s| s.since <= generation)
        .map_or(symbol, |s| s.value)
}

// X509_V_ERR_* from x509_vfy.h
static VERIFY_CODES: &[Symbol] = &[
    sym("X509_V_OK", "0", Since::Baseline),
    sym("X509_V_ERR_UNSPECIFIED", "1", Since::Baseline),
    sym("X509_V_ERR_UNABLE_TO_GET_ISSUER_CERT", "2", Since::Baseline),
    sym("X509_V_ERR_UNABLE_TO_GET_CRL", "3", Since::Baseline),
    sym("X509_V_ERR_UNABLE_TO_DECRYPT_CERT_SIGNATURE", "4", Since::Baseline),
    sym("X509_V_ERR_UNABLE_TO_DECRYPT_CRL_SIGNATURE", "5", Since::Baseline),
    sym("X509_V_ERR_UNABLE_TO_DECODE_ISSUER_PUBLIC_KEY", "6", Since::Baseline),
    sym("X509_V_ERR_CERT_SIGNATURE_FAILURE", "7", Since::Baseline),
    sym("X509_V_ERR_CRL_SIGNATURE_FAILURE", "8", Since::Baseline),
    sym("X509_V_ERR_CERT_NOT_YET_VALID", "9", Since::Baseline),
    sym("X509_V_ERR_CERT_HAS_EXPIRED", "10", Since::Baseline),
    sym("X509_V_ERR_CRL_NOT_YET_VALID", "11", Since::Baseline),
    sym("X509_V_ERR_CRL_HAS_EXPIRED", "12", Since::Baseline),
    sym("X509_V_ERR_ERROR_IN_CERT_NOT_BEFORE_FIELD", "13", Since::Baseline),
    sym("X509_V_ERR_ERROR_IN_CERT_NOT_AFTER_FIELD", "14", Since::Baseline),
    sym("X509_V_ERR_ERROR_IN_CRL_LAST_UPDATE_FIELD", "15", Since::Baseline),
    sym("X509_V_ERR_ERROR_IN_CRL_NEXT_UPDATE_FIELD", "16", Since::Baseline),
    sym("X509_V_ERR_OUT_OF_MEM", "17", Since::Baseline),
    sym("X509_V_ERR_DEPTH_ZERO_SELF_SIGNED_CERT", "18", Since::Baseline),
    sym("X509_V_ERR_SELF_SIGNED_CERT_IN_CHAIN", "19", Since::Baseline),
    sym("X509_V_ERR_UNABLE_TO_GET_ISSUER_CERT_LOCALLY", "20", Since::Baseline),
    sym("X509_V_ERR_UNABLE_TO_VERIFY_LEAF_SIGNATURE", "21", Since::Baseline),
    sym("X509_V_ERR_CERT_CHAIN_TOO_LONG", "22", Since::Baseline),
    sym("X509_V_ERR_CERT_REVOKED", "23", Since::Baseline),
    sym("X509_V_ERR_NO_ISSUER_PUBLIC_KEY", "24", Since::Baseline),
    sym("X509_V_ERR_PATH_LENGTH_EXCEEDED", "25", Since::Baseline),
    sym("X509_V_ERR_INVALID_PURPOSE", "26", Since::Baseline),
    sym("X509_V_ERR_CERT_UNTRUSTED", "27", Since::Baseline),
    sym("X509_V_ERR_CERT_REJECTED", "28", Since::Baseline),
    sym("X509_V_ERR_SUBJECT_ISSUER_MISMATCH", "29", Since::Baseline),
    sym("X509_V_ERR_AKID_SKID_MISMATCH", "30", Since::Baseline),
    sym("X509_V_ERR_AKID_ISSUER_SERIAL_MISMATCH", "31", Since::Baseline),
    sym("X509_V_ERR_KEYUSAGE_NO_CERTSIGN", "32", Since::Baseline),
    sym("X509_V_ERR_UNABLE_TO_GET_CRL_ISSUER", "33", Since::Baseline),
    sym("X509_V_ERR_UNHANDLED_CRITICAL_EXTENSION", "34", Since::Baseline),
    sym("X509_V_ERR_KEYUSAGE_NO_CRL_SIGN", "35", Since::Baseline),
    sym("X509_V_ERR_UNHANDLED_CRITICAL_CRL_EXTENSION", "36", Since::Baseline),
    sym("X509_V_ERR_INVALID_NON_CA", "37", Since::Baseline),
    sym("X509_V_ERR_PROXY_PATH_LENGTH_EXCEEDED", "38", Since::Baseline),
    sym("X509_V_ERR_KEYUSAGE_NO_DIGITAL_SIGNATURE", "39", Since::Baseline),
    sym("X509_V_ERR_PROXY_CERTIFICATES_NOT_ALLOWED", "40", Since::Baseline),
    sym("X509_V_ERR_INVALID_EXTENSION", "41", Since::Baseline),
    sym("X509_V_ERR_INVALID_POLICY_EXTENSION", "42", Since::Baseline),
    sym("X509_V_ERR_NO_EXPLICIT_POLICY", "43", Since::Baseline),
    sym("X509_V_ERR_DIFFERENT_CRL_SCOPE", "44", Since::Baseline),
    sym("X509_V_ERR_UNSUPPORTED_EXTENSION_FEATURE", "45", Since::Baseline),
    sym("X509_V_ERR_UNNESTED_RESOURCE", "46", Since::Baseline),
    sym("X509_V_ERR_PERMITTED_VIOLATION", "47", Since::Baseline),
    sym("X509_V_ERR_EXCLUDED_VIOLATION", "48", Since::Baseline),
    sym("X509_V_ERR_SUBTREE_MINMAX", "49", Since::Baseline),
    sym("X509_V_ERR_APPLICATION_VERIFICATION", "50", Since::Baseline),
    sym("X509_V_ERR_UNSUPPORTED_CONSTRAINT_TYPE", "51", Since::V111),
    sym("X509_V_ERR_UNSUPPORTED_CONSTRAINT_SYNTAX", "52", Since::V111),
    sym("X509_V_ERR_UNSUPPORTED_NAME_SYNTAX", "53", Since::V111),
    sym("X509_V_ERR_CRL_PATH_VALIDATION_ERROR", "54", Since::V111),
    sym("X509_V_ERR_PATH_LOOP", "55", Since::V111),
    sym("X509_V_ERR_SUITE_B_INVALID_VERSION", "56", Since::V111),
    sym("X509_V_ERR_SUITE_B_INVALID_ALGORITHM", "57", Since::V111),
    sym("X509_V_ERR_SUITE_B_INVALID_CURVE", "58", Since::V111),
    sym("X509_V_ERR_SUITE_B_INVALID_SIGNATURE_ALGORITHM", "59", Since::V111),
    sym("X509_V_ERR_SUITE_B_LOS_NOT_ALLOWED", "60", Since::V111),
    sym("X509_V_ERR_SUITE_B_CANNOT_SIGN_P_384_WITH_P_256", "61", Since::V111),
    sym("X509_V_ERR_HOSTNAME_MISMATCH", "62", Since::V111),
    sym("X509_V_ERR_EMAIL_MISMATCH", "63", Since::V111),
    sym("X509_V_ERR_IP_ADDRESS_MISMATCH", "64", Since::V111),
    sym("X509_V_ERR_DANE_NO_MATCH", "65", Since::V111),
    sym("X509_V_ERR_EE_KEY_TOO_SMALL", "66", Since::V111),
    sym("X509_V_ERR_CA_KEY_TOO_SMALL", "67", Since::V111),
    sym("X509_V_ERR_CA_MD_TOO_WEAK", "68", Since::V111),
    sym("X509_V_ERR_INVALID_CALL", "69", Since::V111),
    sym("X509_V_ERR_STORE_LOOKUP", "70", Since::V111),
    sym("X509_V_ERR_NO_VALID_SCTS", "71", Since::V111),
    sym("X509_V_ERR_PROXY_SUBJECT_NAME_VIOLATION", "72", Since::V111),
    sym("X509_V_ERR_OCSP_VERIFY_NEEDED", "73", Since::V111),
    sym("X509_V_ERR_OCSP_VERIFY_FAILED", "74", Since::V111),
    sym("X509_V_ERR_OCSP_CERT_UNKNOWN", "75", Since::V111),
    sym("X509_V_ERR_UNSUPPORTED_SIGNATURE_ALGORITHM", "76", Since::V3),
    sym("X509_V_ERR_SIGNATURE_ALGORITHM_MISMATCH", "77", Since::V3),
    sym("X509_V_ERR_SIGNATURE_ALGORITHM_INCONSISTENCY", "78", Since::V3),
    sym("X509_V_ERR_INVALID_CA", "79", Since::V3),
    sym("X509_V_ERR_PATHLEN_INVALID_FOR_NON_CA", "80", Since::V3),
    sym("X509_V_ERR_PATHLEN_WITHOUT_KU_KEY_CERT_SIGN", "81", Since::V3),
    sym("X509_V_ERR_KU_KEY_CERT_SIGN_INVALID_FOR_NON_CA", "82", Since::V3),
    sym("X509_V_ERR_ISSUER_NAME_EMPTY", "83", Since::V3),
    sym("X509_V_ERR_SUBJECT_NAME_EMPTY", "84", Since::V3),
    sym("X509_V_ERR_MISSING_AUTHORITY_KEY_IDENTIFIER", "85", Since::V3),
    sym("X509_V_ERR_MISSING_SUBJECT_KEY_IDENTIFIER", "86", Since::V3),
    sym("X509_V_ERR_EMPTY_SUBJECT_ALT_NAME", "87", Since::V3),
    sym("X509_V_ERR_EMPTY_SUBJECT_SAN_NOT_CRITICAL", "88", Since::V3),
    sym("X509_V_ERR_CA_BCONS_NOT_CRITICAL", "89", Since::V3),
    sym("X509_V_ERR_AUTHORITY_KEY_IDENTIFIER_CRITICAL", "90", Since::V3),
    sym("X509_V_ERR_SUBJECT_KEY_IDENTIFIER_CRITICAL", "91", Since::V3),
    sym("X509_V_ERR_CA_CERT_MISSING_KEY_USAGE", "92", Since::V3),
    sym("X509_V_ERR_EXTENSIONS_REQUIRE_VERSION_3", "93", Since::V3),
    sym("X509_V_ERR_EC_KEY_EXPLICIT_PARAMS", "94", Since::V3),
];

// NIDs and EVP_PKEY ids of the named groups
static CURVE_KEYS: &[Symbol] = &[
    sym("NID_sect163k1", "721", Since::V111),
    sym("NID_sect163r1", "722", Since::V111),
    sym("NID_sect163r2", "723", Since::V111),
    sym("NID_sect193r1", "724", Since::V111),
    sym("NID_sect193r2", "725", Since::V111),
    sym("NID_sect233k1", "726", Since::V111),
    sym("NID_sect233r1", "727", Since::V111),
    sym("NID_sect239k1", "728", Since::V111),
    sym("NID_sect283k1", "729", Since::V111),
    sym("NID_sect283r1", "730", Since::V111),
    sym("NID_sect409k1", "731", Since::V111),
    sym("NID_sect409r1", "732", Since::V111),
    sym("NID_sect571k1", "733", Since::V111),
    sym("NID_sect571r1", "734", Since::V111),
    sym("NID_secp160k1", "708", Since::V111),
    sym("NID_secp160r1", "709", Since::V111),
    sym("NID_secp160r2", "710", Since::V111),
    sym("NID_secp192k1", "711", Since::V111),
    sym("NID_X9_62_prime192v1", "409", Since::V111),
    sym("NID_secp224k1", "712", Since::V111),
    sym("NID_secp224r1", "713", Since::V111),
    sym("NID_secp256k1", "714", Since::V111),
    sym("NID_X9_62_prime256v1", "415", Since::Baseline),
    sym("NID_secp384r1", "715", Since::Baseline),
    sym("NID_secp521r1", "716", Since::Baseline),
    sym("NID_brainpoolP256r1", "927", Since::V111),
    sym("NID_brainpoolP384r1", "931", Since::V111),
    sym("NID_brainpoolP512r1", "933", Since::V111),
    sym("EVP_PKEY_X25519", "1034", Since::V111),
    sym("EVP_PKEY_X448", "1035", Since::V111),
    sym("NID_id_tc26_gost_3410_2012_256_paramSetA", "1148", Since::V111),
    sym("NID_id_tc26_gost_3410_2012_256_paramSetB", "1184", Since::V3),
    sym("NID_id_tc26_gost_3410_2012_256_paramSetC", "1185", Since::V3),
    sym("NID_id_tc26_gost_3410_2012_256_paramSetD", "1186", Since::V3),
    sym("NID_id_tc26_gost_3410_2012_512_paramSetA", "979", Since::V111),
    sym("NID_id_tc26_gost_3410_2012_512_paramSetB", "980", Since::V111),
    sym("NID_id_tc26_gost_3410_2012_512_paramSetC", "1149", Since::V111),
    sym("NID_ffdhe2048", "1126", Since::V111),
    sym("NID_ffdhe3072", "1127", Since::V111),
    sym("NID_ffdhe4096", "1128", Since::V111),
    sym("NID_ffdhe6144", "1129", Since::V111),
    sym("NID_ffdhe8192", "1130", Since::V111),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_symbol_resolves_to_itself() {
        assert_eq!(
            raw_definition(LibraryProfile::Openssl3, "NID_brainpoolP256r1tls13"),
            "NID_brainpoolP256r1tls13"
        );
    }

    #[test]
    fn profile_generation_gates_definitions() {
        let symbol = "X509_V_ERR_EC_KEY_EXPLICIT_PARAMS";
        assert_eq!(raw_definition(LibraryProfile::Openssl3, symbol), "94");
        assert_eq!(raw_definition(LibraryProfile::Openssl111, symbol), symbol);
        assert_eq!(raw_definition(LibraryProfile::Minimal, "NID_secp384r1"), "715");
        assert_eq!(raw_definition(LibraryProfile::Minimal, "NID_secp256k1"), "NID_secp256k1");
    }
}
