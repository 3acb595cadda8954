//! Certificate access capabilities
//!
//! The extractors never parse certificates themselves; they work against the
//! [`CertificateAccess`] and [`DistinguishedName`] traits. `X509Certificate`
//! implements them on top of `x509-cert`.
//!
//! - `attributes`: short names of distinguished-name attribute types
//! - `certificate`: the `x509-cert` backed certificate handle
//! - `key_extraction`: public key size extraction from SubjectPublicKeyInfo

pub mod attributes;
pub mod certificate;
pub(crate) mod key_extraction;

use std::fmt;

use const_oid::ObjectIdentifier;

use crate::time::Asn1Time;

pub use certificate::X509Certificate;

/// One attribute of a distinguished name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameEntry<'a> {
    /// Attribute type
    pub oid: ObjectIdentifier,
    /// Raw content octets of the attribute value
    pub value: &'a [u8],
}

/// Ordered attribute sequence of a subject or issuer name
pub trait DistinguishedName {
    /// Number of attributes across all RDNs
    fn entry_count(&self) -> usize;

    /// Attribute at `index` in encoding order
    fn entry(&self, index: usize) -> Option<NameEntry<'_>>;

    /// Render the name as an RFC 2253 string into `sink`
    fn write_rfc2253(&self, sink: &mut dyn fmt::Write) -> fmt::Result;
}

/// Algorithm and size of a subject public key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKeyInfo {
    /// SubjectPublicKeyInfo algorithm identifier
    pub algorithm: ObjectIdentifier,
    /// Key size in bits, when it could be determined
    pub bits: Option<u32>,
}

/// Read access to a parsed certificate
pub trait CertificateAccess {
    /// Name type of subject and issuer
    type Name: DistinguishedName;

    /// Subject name
    fn subject(&self) -> &Self::Name;

    /// Issuer name
    fn issuer(&self) -> &Self::Name;

    /// Subject public key summary
    fn public_key(&self) -> Option<PublicKeyInfo>;

    /// Serial number content octets, big-endian
    fn serial(&self) -> Option<&[u8]>;

    /// Length of the DER encoding; `None` when the certificate cannot be encoded
    fn der_len(&self) -> Option<usize>;

    /// Encode into the front of `out`, returning the written length
    fn encode_der(&self, out: &mut [u8]) -> Option<usize>;

    /// Start of the validity period
    fn not_before(&self) -> Option<Asn1Time>;

    /// End of the validity period
    fn not_after(&self) -> Option<Asn1Time>;

    /// Whether `issuer` could have issued `self`
    fn is_issued_by(&self, issuer: &Self) -> bool;

    /// Self-issued: subject and issuer identify the same entity
    fn is_self_issued(&self) -> bool
    where
        Self: Sized,
    {
        self.is_issued_by(self)
    }
}
