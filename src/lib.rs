//! # Pemkit - PEM to Cryptographic Object Conversion
//!
//! Pemkit converts PEM-encoded private keys and X.509 certificates into
//! typed cryptographic objects. It is built entirely with rustcrypto
//! libraries, without dependencies on ring or openssl (except for testing).
//! The library performs no I/O: callers hand it PEM text and receive a
//! [`key::PrivateKey`] or [`cert::Certificate`] handle, or a
//! [`error::ConversionError`] that keeps the underlying cause.
//!
//! ## Supported Key Types
//!
//! Pemkit converts the following cryptographic key types:
//! - **RSA**: PKCS#1 (`RSA PRIVATE KEY`) and PKCS#8 (`PRIVATE KEY`) encodings
//! - **ECDSA**: P-256, P-384, and P-521 curves, SEC1 (`EC PRIVATE KEY`) and
//!   PKCS#8 encodings
//! - **Ed25519**: PKCS#8 encoding
//!
//! Encrypted PKCS#8 documents (`ENCRYPTED PRIVATE KEY`) are not converted;
//! decrypt them before handing them to this crate.
//!
//! ## Quick Start
//!
//! ### Converting a Private Key
//!
//! ```rust,no_run
//! use pemkit::convert;
//! use pemkit::key::KeyAlgorithm;
//!
//! # fn main() -> Result<(), pemkit::error::ConversionError> {
//! let pem = std::fs::read_to_string("server.key").unwrap();
//! let key = convert::parse_private_key(&pem)?;
//!
//! match key.algorithm() {
//!     KeyAlgorithm::Rsa => println!("RSA private key"),
//!     other => println!("{other:?} private key"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Converting a Certificate
//!
//! ```rust,no_run
//! use pemkit::convert;
//!
//! # fn main() -> Result<(), pemkit::error::ConversionError> {
//! let pem = std::fs::read_to_string("server.crt").unwrap();
//! let cert = convert::parse_public_key_certificate(&pem)?;
//!
//! println!("Subject: {}", cert.subject());
//! println!("Expires: {}", cert.not_after());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every failure surfaces as a [`error::ConversionError`]. The variant names
//! the conversion phase that failed, and the underlying decoder error stays
//! reachable through `std::error::Error::source`:
//!
//! ```rust
//! use pemkit::convert;
//! use pemkit::error::ConversionError;
//!
//! match convert::parse_private_key("invalid pem data") {
//!     Ok(_) => println!("Key converted successfully"),
//!     Err(ConversionError::PemEnvelope(cause)) => println!("Bad envelope: {cause}"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`convert`]: Entry points turning PEM text into handles
//! - [`key`]: Key pair and private key types for the supported algorithms
//! - [`cert`]: Certificate handle with field accessors and re-encoding
//! - [`pem_utils`]: PEM envelope helpers shared by the conversion paths
//! - [`error`]: Error types and handling

pub mod cert;
pub mod convert;
pub mod error;
pub mod key;
pub mod pem_utils;
