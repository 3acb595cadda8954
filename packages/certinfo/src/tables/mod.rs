//! Static lookup tables
//!
//! The verification-error and curve tables are resolved once against a
//! library profile and never mutated afterwards, so any number of threads may
//! read them without locking. The signature scheme table needs no resolution.
//!
//! - `constants`: symbolic constants per library build
//! - `verify`: verification error codes
//! - `sigalg`: TLS signature schemes
//! - `curves`: TLS named groups

mod constants;
pub mod curves;
pub mod sigalg;
pub mod verify;

use once_cell::sync::OnceCell;

use crate::config::CertInfoConfig;
use crate::error::{CertInfoError, Result};

pub use curves::{CurveEntry, CurveTable};
pub use sigalg::{SigAlg, sigalg_name, sigalgs};
pub use verify::{VerifyErrorEntry, VerifyErrorTable};

static TABLES: OnceCell<Tables> = OnceCell::new();

/// The resolved tables for one library profile
#[derive(Debug)]
pub struct Tables {
    verify: VerifyErrorTable,
    curves: CurveTable,
}

impl Tables {
    /// Build both tables for `config`
    #[must_use]
    pub fn build(config: &CertInfoConfig) -> Self {
        Self {
            verify: VerifyErrorTable::build(config.profile),
            curves: CurveTable::build(config.profile),
        }
    }

    /// Verification error table
    #[must_use]
    pub fn verify_errors(&self) -> &VerifyErrorTable {
        &self.verify
    }

    /// Named group table
    #[must_use]
    pub fn curves(&self) -> &CurveTable {
        &self.curves
    }
}

/// Build the process-wide tables; call once during startup before any lookup.
///
/// Fails if the tables already exist, either from an earlier `init` or because
/// a lookup ran first and built the default profile.
pub fn init(config: &CertInfoConfig) -> Result<&'static Tables> {
    let mut built = false;
    let tables = TABLES.get_or_init(|| {
        built = true;
        Tables::build(config)
    });
    if built {
        tracing::debug!("lookup tables initialized for {:?}", config.profile);
        Ok(tables)
    } else {
        Err(CertInfoError::TablesAlreadyInitialized)
    }
}

/// Process-wide tables, built with the default profile if `init` never ran
pub fn get() -> &'static Tables {
    TABLES.get_or_init(|| Tables::build(&CertInfoConfig::default()))
}

/// Verification error code for a constant name
#[must_use]
pub fn verify_error_code(name: &str) -> Option<i32> {
    get().verify_errors().code(name)
}

/// Constant name for a verification error code
#[must_use]
pub fn verify_error_name(code: i32) -> Option<&'static str> {
    get().verify_errors().name(code)
}

/// SECG name of a TLS named group identifier
#[must_use]
pub fn curve_name(id: u16) -> Option<&'static str> {
    get().curves().name(id)
}

/// Library key for a SECG or NIST curve name
#[must_use]
pub fn curve_key(name: &str) -> Option<i32> {
    get().curves().key(name)
}

/// NIST name for a library curve key
#[must_use]
pub fn curve_key_to_nist(key: i32) -> Option<&'static str> {
    get().curves().nist_by_key(key)
}

/// Numeric value of a table entry: the raw definition parsed as an integer
/// literal when it differs from the symbol, `-1` otherwise.
pub(crate) fn resolve_code(symbol: &str, raw: &str) -> i32 {
    if raw == symbol {
        return -1;
    }
    match raw.trim().parse::<i32>() {
        Ok(code) => code,
        Err(e) => {
            tracing::warn!("constant {symbol} has non-numeric definition {raw:?}: {e}");
            -1
        }
    }
}
