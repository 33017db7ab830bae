use thiserror::Error;

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Represents errors that can occur while converting PEM text into
/// cryptographic objects.
///
/// Every variant that wraps an underlying failure keeps it as a source, so
/// callers can walk `std::error::Error::source` to reach the root cause.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The input text is not a well-formed PEM envelope.
    #[error("Failed to decode PEM envelope")]
    PemEnvelope(#[source] pem::PemError),

    /// The envelope label does not name an object kind this crate converts.
    #[error("Unrecognized PEM label: {0}")]
    UnrecognizedLabel(String),

    /// The key algorithm identified inside the document is not supported.
    #[error("Unsupported key algorithm: {0}")]
    UnsupportedAlgorithm(const_oid::ObjectIdentifier),

    /// The DER payload could not be decoded as a private key.
    #[error("Failed to decode private key")]
    KeyDecode(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The DER payload could not be decoded as an X.509 certificate.
    #[error("Failed to decode certificate")]
    CertificateDecode(#[source] der::Error),

    /// Error during data encoding.
    #[error("Failed to encode data")]
    Encode(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<pem::PemError> for ConversionError {
    /// Converts a `pem::PemError` into a `ConversionError`.
    fn from(err: pem::PemError) -> Self {
        ConversionError::PemEnvelope(err)
    }
}
