//! `x509-cert` backed certificate handle

use std::fmt;

use const_oid::ObjectIdentifier;
use der::{Decode, Encode, Tag};
use x509_cert::Certificate;
use x509_cert::ext::pkix::{AuthorityKeyIdentifier, SubjectKeyIdentifier};
use x509_cert::name::Name;
use x509_cert::time::Time;

use crate::error::{CertInfoError, Result};
use crate::time::Asn1Time;

use super::key_extraction::public_key_bits;
use super::{CertificateAccess, DistinguishedName, NameEntry, PublicKeyInfo};

const ID_CE_SUBJECT_KEY_IDENTIFIER: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.14");
const ID_CE_AUTHORITY_KEY_IDENTIFIER: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("2.5.29.35");

/// A decoded X.509 certificate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct X509Certificate {
    inner: Certificate,
}

impl X509Certificate {
    /// Decode a DER certificate
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let inner = Certificate::from_der(der)
            .map_err(|e| CertInfoError::CertificateParsing(format!("X.509 parsing failed: {e}")))?;
        Ok(Self { inner })
    }

    /// Decode the first certificate of a PEM document
    pub fn from_pem(pem: &str) -> Result<Self> {
        Self::chain_from_pem(pem)?
            .into_iter()
            .next()
            .ok_or_else(|| CertInfoError::CertificateParsing("No certificate in PEM data".to_string()))
    }

    /// Decode every certificate of a PEM document, in order
    pub fn chain_from_pem(pem: &str) -> Result<Vec<Self>> {
        let mut cursor = std::io::Cursor::new(pem.as_bytes());
        rustls_pemfile::certs(&mut cursor)
            .map(|der| {
                let der = der
                    .map_err(|e| CertInfoError::CertificateParsing(format!("Failed to parse PEM: {e}")))?;
                Self::from_der(der.as_ref())
            })
            .collect()
    }

    /// Underlying `x509-cert` structure
    #[must_use]
    pub fn as_inner(&self) -> &Certificate {
        &self.inner
    }

    /// Serial number as lowercase hex, for diagnostics
    #[must_use]
    pub fn serial_hex(&self) -> String {
        hex::encode(self.inner.tbs_certificate.serial_number.as_bytes())
    }

    fn extension_value(&self, id: ObjectIdentifier) -> Option<&[u8]> {
        self.inner
            .tbs_certificate
            .extensions
            .as_ref()?
            .iter()
            .find(|ext| ext.extn_id == id)
            .map(|ext| ext.extn_value.as_bytes())
    }

    fn subject_key_id(&self) -> Option<SubjectKeyIdentifier> {
        let value = self.extension_value(ID_CE_SUBJECT_KEY_IDENTIFIER)?;
        SubjectKeyIdentifier::from_der(value)
            .map_err(|e| tracing::warn!("malformed subject key identifier: {e}"))
            .ok()
    }

    fn authority_key_id(&self) -> Option<AuthorityKeyIdentifier> {
        let value = self.extension_value(ID_CE_AUTHORITY_KEY_IDENTIFIER)?;
        AuthorityKeyIdentifier::from_der(value)
            .map_err(|e| tracing::warn!("malformed authority key identifier: {e}"))
            .ok()
    }
}

impl From<Certificate> for X509Certificate {
    fn from(inner: Certificate) -> Self {
        Self { inner }
    }
}

/// Content octets of a validity bound; UTCTime and GeneralizedTime payloads are
/// short enough for a single-byte DER length.
fn asn1_time(time: &Time) -> Option<Asn1Time> {
    let mut buf = [0u8; 32];
    let encoded = time.encode_to_slice(&mut buf).ok()?;
    let tag = Tag::try_from(*encoded.first()?).ok()?;
    Asn1Time::new(tag, encoded.get(2..)?)
}

impl CertificateAccess for X509Certificate {
    type Name = Name;

    fn subject(&self) -> &Name {
        &self.inner.tbs_certificate.subject
    }

    fn issuer(&self) -> &Name {
        &self.inner.tbs_certificate.issuer
    }

    fn public_key(&self) -> Option<PublicKeyInfo> {
        let spki = &self.inner.tbs_certificate.subject_public_key_info;
        Some(PublicKeyInfo {
            algorithm: spki.algorithm.oid,
            bits: public_key_bits(spki),
        })
    }

    fn serial(&self) -> Option<&[u8]> {
        Some(self.inner.tbs_certificate.serial_number.as_bytes())
    }

    fn der_len(&self) -> Option<usize> {
        let len = self.inner.encoded_len().ok()?;
        usize::try_from(len).ok()
    }

    fn encode_der(&self, out: &mut [u8]) -> Option<usize> {
        self.inner.encode_to_slice(out).ok().map(<[u8]>::len)
    }

    fn not_before(&self) -> Option<Asn1Time> {
        asn1_time(&self.inner.tbs_certificate.validity.not_before)
    }

    fn not_after(&self) -> Option<Asn1Time> {
        asn1_time(&self.inner.tbs_certificate.validity.not_after)
    }

    fn is_issued_by(&self, issuer: &Self) -> bool {
        if self.inner.tbs_certificate.issuer != issuer.inner.tbs_certificate.subject {
            return false;
        }
        let authority = self.authority_key_id().and_then(|akid| akid.key_identifier);
        match (authority, issuer.subject_key_id()) {
            (Some(akid), Some(skid)) => akid.as_bytes() == skid.0.as_bytes(),
            _ => true,
        }
    }
}

impl DistinguishedName for Name {
    fn entry_count(&self) -> usize {
        self.0.iter().map(|rdn| rdn.0.len()).sum()
    }

    fn entry(&self, index: usize) -> Option<NameEntry<'_>> {
        self.0
            .iter()
            .flat_map(|rdn| rdn.0.iter())
            .nth(index)
            .map(|atv| NameEntry {
                oid: atv.oid,
                value: atv.value.value(),
            })
    }

    fn write_rfc2253(&self, sink: &mut dyn fmt::Write) -> fmt::Result {
        write!(sink, "{self}")
    }
}
