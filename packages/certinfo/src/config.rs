//! Introspection configuration
//!
//! Selects which cryptography library build the lookup tables are resolved
//! against. Entries whose constant the profile does not define stay at the
//! `-1` sentinel.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Cryptography library build whose symbolic constants are considered defined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LibraryProfile {
    /// OpenSSL 3.x
    #[default]
    Openssl3,
    /// OpenSSL 1.1.1
    Openssl111,
    /// Baseline verification codes and the NIST prime curves only
    Minimal,
}

/// Configuration for table initialisation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertInfoConfig {
    /// Library build the tables resolve against
    pub profile: LibraryProfile,
}

impl CertInfoConfig {
    /// Configuration matching an OpenSSL 1.1.1 deployment
    #[must_use]
    pub fn legacy_openssl() -> Self {
        Self {
            profile: LibraryProfile::Openssl111,
        }
    }

    /// Configuration exposing only the baseline constants
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            profile: LibraryProfile::Minimal,
        }
    }

    /// Parse a configuration from JSON, e.g. `{"profile":"openssl111"}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
