#![allow(clippy::doc_markdown)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]

//! # Cyrup Certificate Introspection
//!
//! Allocation-free extraction of X.509 certificate fields into caller-owned
//! buffers, plus the TLS identifier tables and small parsers that go with
//! them.
//!
//! ## Features
//!
//! - **Field extraction**: serial, DER, key summary, validity, distinguished names
//! - **Scalar parsers**: ASN.1 time to epoch, OpenSSL-style version strings, GREASE filtering
//! - **Lookup tables**: verification error codes, signature schemes, named groups
//! - **Peer certificates**: retrieval with a verification stash fallback
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cryypt_certinfo::{OutBuf, X509Certificate, extract};
//!
//! let cert = X509Certificate::from_pem(&std::fs::read_to_string("leaf.pem")?)?;
//! let mut area = [0u8; 64];
//! let mut out = OutBuf::new(&mut area);
//! if extract::pkey_algo(&cert, &mut out).is_found() {
//!     println!("{}", out.as_str().unwrap_or_default()); // e.g. RSA2048
//! }
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod extract;
pub mod grease;
pub mod session;
pub mod tables;
pub mod time;
pub mod version;
pub mod x509;

pub use buffer::{Extract, OutBuf};
pub use config::{CertInfoConfig, LibraryProfile};
pub use error::{CertInfoError, Result};
pub use grease::{exclude_grease, is_grease};
pub use session::{PeerSession, SessionCertificates, get_peer_certificate, verified_chain_root};
pub use tables::{
    curve_key, curve_key_to_nist, curve_name, sigalg_name, verify_error_code, verify_error_name,
};
pub use time::{Asn1Time, generalized_time_to_epoch, time_to_epoch};
pub use version::{PackedVersion, parse_version};
pub use x509::{CertificateAccess, DistinguishedName, NameEntry, PublicKeyInfo, X509Certificate};
