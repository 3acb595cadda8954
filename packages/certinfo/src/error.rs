//! Error types for operations that are not bounded-buffer extractors

/// Errors raised while loading certificates, parsing versions or configuring tables
#[derive(Debug, thiserror::Error)]
pub enum CertInfoError {
    /// PEM or DER input could not be turned into a certificate
    #[error("Certificate parsing failed: {0}")]
    CertificateParsing(String),
    /// Version string rejected by the packed-version parser
    #[error("Invalid version string {input:?}: {reason}")]
    InvalidVersion {
        /// The rejected input
        input: String,
        /// Which field or separator failed
        reason: &'static str,
    },
    /// `tables::init` was called after the tables were already built
    #[error("Lookup tables already initialized")]
    TablesAlreadyInitialized,
    /// Configuration could not be deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias for this crate
pub type Result<T> = std::result::Result<T, CertInfoError>;
