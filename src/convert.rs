//! Conversion of PEM text into key and certificate handles.
//!
//! The two entry points here mirror the two object kinds this crate
//! converts: [`parse_private_key`] for private keys and
//! [`parse_public_key_certificate`] for X.509 certificates. Both take the
//! PEM text as a plain `&str` and leave reading it from disk or elsewhere to
//! the caller.

use once_cell::sync::Lazy;

use crate::cert::Certificate;
use crate::error::{ConversionError, Result};
use crate::key::{KeyPair, PrivateKey};
use crate::pem_utils;

/// A private-key encoding the conversion layer accepts: the PEM label that
/// announces it, and the decoder for its DER payload.
struct KeyFormat {
    label: &'static str,
    decode: fn(&[u8]) -> Result<KeyPair>,
}

/// Registry of supported private-key encodings.
///
/// Built once, on the first conversion that needs it. Concurrent first
/// callers observe exactly one initialization.
static KEY_FORMATS: Lazy<Vec<KeyFormat>> = Lazy::new(|| {
    vec![
        KeyFormat {
            label: "PRIVATE KEY",
            decode: KeyPair::from_pkcs8_der,
        },
        KeyFormat {
            label: "RSA PRIVATE KEY",
            decode: KeyPair::from_pkcs1_der,
        },
        KeyFormat {
            label: "EC PRIVATE KEY",
            decode: KeyPair::from_sec1_der,
        },
    ]
});

/// Converts a PEM-encoded private key into a [`PrivateKey`] handle.
///
/// The envelope label selects the decoder: `PRIVATE KEY` (PKCS#8),
/// `RSA PRIVATE KEY` (PKCS#1), and `EC PRIVATE KEY` (SEC1) are accepted. Any
/// other label, including `ENCRYPTED PRIVATE KEY`, is rejected with
/// [`ConversionError::UnrecognizedLabel`].
pub fn parse_private_key(pem_str: &str) -> Result<PrivateKey> {
    let block = pem_utils::decode_pem_block(pem_str)?;
    let format = KEY_FORMATS
        .iter()
        .find(|format| format.label == block.tag())
        .ok_or_else(|| ConversionError::UnrecognizedLabel(block.tag().to_string()))?;
    let key_pair = (format.decode)(block.contents())?;
    Ok(key_pair.into_private_key())
}

/// Converts a PEM-encoded X.509 certificate into a [`Certificate`] handle.
///
/// The envelope label is not inspected; the payload must decode as a DER
/// X.509 certificate document.
pub fn parse_public_key_certificate(pem_str: &str) -> Result<Certificate> {
    let der = pem_utils::pem_to_der(pem_str)?;
    Certificate::import_from_der(&der)
}
