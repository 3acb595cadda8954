//! Public key size extraction
//!
//! Reads key sizes straight out of SubjectPublicKeyInfo: the RSA modulus,
//! the DSA prime `p`, or the order of an EC curve (named or explicit).

use const_oid::ObjectIdentifier;
use der::{Any, Encode, Reader, SliceReader, Tag, Tagged};
use spki::SubjectPublicKeyInfoOwned;

pub(crate) const RSA_ENCRYPTION: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");
pub(crate) const ID_DSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10040.4.1");
pub(crate) const ID_EC_PUBLIC_KEY: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

// Named curves and the bit length of their group order
static NAMED_CURVE_BITS: &[(ObjectIdentifier, u32)] = &[
    (ObjectIdentifier::new_unwrap("1.3.132.0.1"), 163),           // sect163k1
    (ObjectIdentifier::new_unwrap("1.3.132.0.2"), 162),           // sect163r1
    (ObjectIdentifier::new_unwrap("1.3.132.0.15"), 163),          // sect163r2
    (ObjectIdentifier::new_unwrap("1.3.132.0.24"), 193),          // sect193r1
    (ObjectIdentifier::new_unwrap("1.3.132.0.25"), 193),          // sect193r2
    (ObjectIdentifier::new_unwrap("1.3.132.0.26"), 232),          // sect233k1
    (ObjectIdentifier::new_unwrap("1.3.132.0.27"), 233),          // sect233r1
    (ObjectIdentifier::new_unwrap("1.3.132.0.3"), 238),           // sect239k1
    (ObjectIdentifier::new_unwrap("1.3.132.0.16"), 281),          // sect283k1
    (ObjectIdentifier::new_unwrap("1.3.132.0.17"), 282),          // sect283r1
    (ObjectIdentifier::new_unwrap("1.3.132.0.36"), 407),          // sect409k1
    (ObjectIdentifier::new_unwrap("1.3.132.0.37"), 409),          // sect409r1
    (ObjectIdentifier::new_unwrap("1.3.132.0.38"), 570),          // sect571k1
    (ObjectIdentifier::new_unwrap("1.3.132.0.39"), 570),          // sect571r1
    (ObjectIdentifier::new_unwrap("1.3.132.0.9"), 161),           // secp160k1
    (ObjectIdentifier::new_unwrap("1.3.132.0.8"), 161),           // secp160r1
    (ObjectIdentifier::new_unwrap("1.3.132.0.30"), 161),          // secp160r2
    (ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.1"), 192),   // prime192v1
    (ObjectIdentifier::new_unwrap("1.3.132.0.31"), 192),          // secp192k1
    (ObjectIdentifier::new_unwrap("1.3.132.0.32"), 225),          // secp224k1
    (ObjectIdentifier::new_unwrap("1.3.132.0.33"), 224),          // secp224r1
    (ObjectIdentifier::new_unwrap("1.3.132.0.10"), 256),          // secp256k1
    (ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7"), 256),   // prime256v1
    (ObjectIdentifier::new_unwrap("1.3.132.0.34"), 384),          // secp384r1
    (ObjectIdentifier::new_unwrap("1.3.132.0.35"), 521),          // secp521r1
    (ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.7"), 256),  // brainpoolP256r1
    (ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.11"), 384), // brainpoolP384r1
    (ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.13"), 512), // brainpoolP512r1
];

/// Key size in bits for the RSA, DSA and EC families
pub(crate) fn public_key_bits(spki: &SubjectPublicKeyInfoOwned) -> Option<u32> {
    let algorithm = &spki.algorithm;
    if algorithm.oid == RSA_ENCRYPTION {
        let Some(key) = spki.subject_public_key.as_bytes() else {
            tracing::warn!("RSA public key bit string has unused bits");
            return None;
        };
        rsa_modulus_bits(key)
    } else if algorithm.oid == ID_DSA {
        dsa_prime_bits(algorithm.parameters.as_ref()?)
    } else if algorithm.oid == ID_EC_PUBLIC_KEY {
        ec_order_bits(algorithm.parameters.as_ref()?)
    } else {
        None
    }
}

/// Compute the bit length of a big-endian byte slice representing a positive integer
fn compute_bit_length(bytes: &[u8]) -> Option<u32> {
    let start = bytes.iter().position(|&b| b != 0)?;
    let effective = &bytes[start..];
    let high_bits = 8u32 - effective[0].leading_zeros();
    let rest_bits = u32::try_from((effective.len() - 1) * 8).ok()?;
    Some(high_bits + rest_bits)
}

/// Consume the header of the next element, checking its tag; returns the content length
fn enter(reader: &mut SliceReader<'_>, tag: Tag) -> Option<der::Length> {
    let header = reader.peek_header().ok()?;
    if header.tag != tag {
        return None;
    }
    reader.read_slice(header.encoded_len().ok()?).ok()?;
    Some(header.length)
}

/// Skip a single ASN.1 element
fn skip_element(reader: &mut SliceReader<'_>) -> Option<()> {
    let header = reader.peek_header().ok()?;
    let total = (header.encoded_len().ok()? + header.length).ok()?;
    reader.read_slice(total).ok()?;
    Some(())
}

/// Bit length of the INTEGER the reader is positioned on
fn integer_bits(reader: &mut SliceReader<'_>) -> Option<u32> {
    let length = enter(reader, Tag::Integer)?;
    compute_bit_length(reader.read_slice(length).ok()?)
}

/// RSAPublicKey ::= SEQUENCE { modulus INTEGER, publicExponent INTEGER }
fn rsa_modulus_bits(key: &[u8]) -> Option<u32> {
    let mut reader = SliceReader::new(key).ok()?;
    enter(&mut reader, Tag::Sequence)?;
    integer_bits(&mut reader)
}

/// Dss-Parms ::= SEQUENCE { p INTEGER, q INTEGER, g INTEGER }
fn dsa_prime_bits(parameters: &Any) -> Option<u32> {
    if parameters.tag() != Tag::Sequence {
        return None;
    }
    let mut reader = SliceReader::new(parameters.value()).ok()?;
    integer_bits(&mut reader)
}

/// EC key size from namedCurve or specifiedCurve parameters
fn ec_order_bits(parameters: &Any) -> Option<u32> {
    match parameters.tag() {
        Tag::ObjectIdentifier => {
            let curve = ObjectIdentifier::from_bytes(parameters.value()).ok()?;
            let bits = NAMED_CURVE_BITS
                .iter()
                .find(|(known, _)| *known == curve)
                .map(|&(_, bits)| bits);
            if bits.is_none() {
                tracing::debug!("EC public key on unsupported named curve {curve}");
            }
            bits
        }
        Tag::Sequence => {
            // ECParameters: version, fieldID, curve, base, order, cofactor
            let mut reader = SliceReader::new(parameters.value()).ok()?;
            skip_element(&mut reader)?;
            skip_element(&mut reader)?;
            skip_element(&mut reader)?;
            skip_element(&mut reader)?;
            integer_bits(&mut reader)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_length_ignores_leading_zeros() {
        assert_eq!(compute_bit_length(&[0x00, 0x80, 0x00]), Some(16));
        assert_eq!(compute_bit_length(&[0x01]), Some(1));
        assert_eq!(compute_bit_length(&[0x00, 0x00]), None);
    }

    #[test]
    fn named_curve_order_bits() {
        let curve = |dotted: &str| {
            let oid = ObjectIdentifier::new_unwrap(dotted);
            Any::new(Tag::ObjectIdentifier, oid.as_bytes()).expect("valid OID content")
        };
        assert_eq!(ec_order_bits(&curve("1.3.132.0.1")), Some(163)); // sect163k1
        assert_eq!(ec_order_bits(&curve("1.3.132.0.8")), Some(161)); // secp160r1
        assert_eq!(ec_order_bits(&curve("1.2.840.10045.3.1.7")), Some(256));
        assert_eq!(ec_order_bits(&curve("1.3.6.1.4.1.55555.9")), None);
    }

    #[test]
    fn rsa_modulus_from_minimal_key() {
        // SEQUENCE { INTEGER 0x00C3, INTEGER 3 }
        let key = [0x30, 0x07, 0x02, 0x02, 0x00, 0xC3, 0x02, 0x01, 0x03];
        assert_eq!(rsa_modulus_bits(&key), Some(8));
    }
}
