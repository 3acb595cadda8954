//! Certificate field extractors
//!
//! Serial, DER encoding, public key summary and validity bounds, each copied
//! into a caller-owned [`OutBuf`].

use std::fmt;

use const_oid::ObjectIdentifier;
use der::Tag;

use crate::buffer::{Extract, OutBuf, format_into};
use crate::time::{Asn1Time, PrintableTime, time_to_epoch};
use crate::x509::CertificateAccess;
use crate::x509::key_extraction::{ID_DSA, ID_EC_PUBLIC_KEY, RSA_ENCRYPTION};

/// Public key families reported by [`pkey_algo`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFamily {
    /// rsaEncryption
    Rsa,
    /// id-ecPublicKey
    Ec,
    /// id-dsa
    Dsa,
}

impl KeyFamily {
    /// Family of a SubjectPublicKeyInfo algorithm, if supported
    #[must_use]
    pub fn from_algorithm(oid: &ObjectIdentifier) -> Option<Self> {
        if *oid == RSA_ENCRYPTION {
            Some(Self::Rsa)
        } else if *oid == ID_EC_PUBLIC_KEY {
            Some(Self::Ec)
        } else if *oid == ID_DSA {
            Some(Self::Dsa)
        } else {
            None
        }
    }

    /// Prefix used in the algorithm summary
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rsa => "RSA",
            Self::Ec => "EC",
            Self::Dsa => "DSA",
        }
    }
}

impl fmt::Display for KeyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Write the key family and size, e.g. `RSA2048` or `EC256`.
///
/// Keys outside the RSA, EC and DSA families are reported as absent, as are
/// keys whose size cannot be determined (e.g. an EC key on an unknown curve).
pub fn pkey_algo<C: CertificateAccess>(cert: &C, out: &mut OutBuf<'_>) -> Extract {
    out.reset();
    let Some(key) = cert.public_key() else {
        return Extract::Absent;
    };
    let Some(family) = KeyFamily::from_algorithm(&key.algorithm) else {
        tracing::debug!("unsupported public key algorithm {}", key.algorithm);
        return Extract::Absent;
    };
    let Some(bits) = key.bits else {
        tracing::debug!("no key size for {family} public key");
        return Extract::Absent;
    };
    format_into(out, format_args!("{family}{bits}"))
}

/// Copy the serial number's big-endian content octets verbatim
pub fn serial<C: CertificateAccess>(cert: &C, out: &mut OutBuf<'_>) -> Extract {
    match cert.serial() {
        Some(serial) => out.set(serial),
        None => {
            out.reset();
            Extract::Absent
        }
    }
}

/// Encode the whole certificate as DER.
///
/// An encoder failure is reported as absent, distinct from lack of space.
pub fn der<C: CertificateAccess>(cert: &C, out: &mut OutBuf<'_>) -> Extract {
    out.reset();
    let Some(len) = cert.der_len().filter(|&len| len > 0) else {
        tracing::debug!("certificate could not be DER encoded");
        return Extract::Absent;
    };
    if len > out.size() {
        return Extract::NoSpace;
    }
    match cert.encode_der(out.area_mut()) {
        Some(written) => {
            out.commit(written);
            Extract::Found
        }
        None => Extract::Absent,
    }
}

/// Copy an ASN.1 validity time as text.
///
/// GeneralizedTime must be at least 12 bytes and start with `20`; the output
/// drops those two century digits. UTCTime must be at least 10 bytes with a
/// year below 50 and is copied as is. Anything else is absent.
pub fn time_to_buf(time: &Asn1Time, out: &mut OutBuf<'_>) -> Extract {
    let text = time.as_bytes();
    match time.tag() {
        Tag::GeneralizedTime if text.len() >= 12 && text.starts_with(b"20") => out.set(&text[2..]),
        Tag::UtcTime if text.len() >= 10 && text[0] < b'5' => out.set(text),
        _ => {
            out.reset();
            Extract::Absent
        }
    }
}

/// Start of validity as text, see [`time_to_buf`]
pub fn not_before<C: CertificateAccess>(cert: &C, out: &mut OutBuf<'_>) -> Extract {
    match cert.not_before() {
        Some(time) => time_to_buf(&time, out),
        None => {
            out.reset();
            Extract::Absent
        }
    }
}

/// End of validity as text, see [`time_to_buf`]
pub fn not_after<C: CertificateAccess>(cert: &C, out: &mut OutBuf<'_>) -> Extract {
    match cert.not_after() {
        Some(time) => time_to_buf(&time, out),
        None => {
            out.reset();
            Extract::Absent
        }
    }
}

/// Start of validity in seconds since the Unix epoch.
///
/// `None` covers both a missing and a malformed field.
#[must_use]
pub fn not_before_epoch<C: CertificateAccess>(cert: &C) -> Option<i64> {
    time_to_epoch(&cert.not_before()?)
}

/// End of validity in seconds since the Unix epoch; `None` when missing or malformed
#[must_use]
pub fn not_after_epoch<C: CertificateAccess>(cert: &C) -> Option<i64> {
    time_to_epoch(&cert.not_after()?)
}

fn print_time(time: Option<Asn1Time>, out: &mut OutBuf<'_>) -> Extract {
    match time.as_ref().and_then(time_to_epoch) {
        Some(epoch) => format_into(out, format_args!("{}", PrintableTime(epoch))),
        None => {
            out.reset();
            Extract::Absent
        }
    }
}

/// Start of validity as `Mon DD HH:MM:SS YYYY GMT`
pub fn not_before_text<C: CertificateAccess>(cert: &C, out: &mut OutBuf<'_>) -> Extract {
    print_time(cert.not_before(), out)
}

/// End of validity as `Mon DD HH:MM:SS YYYY GMT`
pub fn not_after_text<C: CertificateAccess>(cert: &C, out: &mut OutBuf<'_>) -> Extract {
    print_time(cert.not_after(), out)
}
