use std::fmt;

use ed25519_dalek::SigningKey as Ed25519SigningKey;
use p256::ecdsa::{SigningKey as P256SigningKey, VerifyingKey as P256VerifyingKey};
use p384::ecdsa::{SigningKey as P384SigningKey, VerifyingKey as P384VerifyingKey};
use pkcs8::der::zeroize::Zeroizing;
use pkcs8::{DecodePrivateKey, EncodePrivateKey, PrivateKeyInfo};
use rsa::{RsaPrivateKey, RsaPublicKey, pkcs1::DecodeRsaPrivateKey};

use crate::error::{ConversionError, Result};

/// Supported key types for conversion operations.
pub enum KeyPair {
    Rsa {
        private: Box<RsaPrivateKey>,
        public: RsaPublicKey,
    },
    EcdsaP256 {
        signing_key: P256SigningKey,
        verifying_key: P256VerifyingKey,
    },
    EcdsaP384 {
        signing_key: P384SigningKey,
        verifying_key: P384VerifyingKey,
    },
    // p521 0.13 carries no pkcs8 trait impls on its ecdsa types, so this
    // variant holds the curve-level keys.
    EcdsaP521 {
        secret_key: p521::SecretKey,
        public_key: p521::PublicKey,
    },
    Ed25519 {
        signing_key: Ed25519SigningKey,
    },
}

impl KeyPair {
    /// Decodes a key pair from a DER-encoded PKCS#8 `PrivateKeyInfo` document.
    ///
    /// The algorithm identifier inside the document selects the concrete key
    /// type. Algorithms outside the supported set are rejected with
    /// [`ConversionError::UnsupportedAlgorithm`].
    pub fn from_pkcs8_der(der: &[u8]) -> Result<Self> {
        let info =
            PrivateKeyInfo::try_from(der).map_err(|e| ConversionError::KeyDecode(Box::new(e)))?;
        match info.algorithm.oid {
            const_oid::db::rfc5912::RSA_ENCRYPTION => {
                let private = RsaPrivateKey::from_pkcs8_der(der)
                    .map_err(|e| ConversionError::KeyDecode(Box::new(e)))?;
                let public = RsaPublicKey::from(&private);
                Ok(KeyPair::Rsa {
                    private: Box::new(private),
                    public,
                })
            }
            const_oid::db::rfc5912::ID_EC_PUBLIC_KEY => {
                let curve = info
                    .algorithm
                    .parameters_oid()
                    .map_err(|e| ConversionError::KeyDecode(Box::new(e)))?;
                match curve {
                    const_oid::db::rfc5912::SECP_256_R_1 => {
                        let secret = p256::SecretKey::from_pkcs8_der(der)
                            .map_err(|e| ConversionError::KeyDecode(Box::new(e)))?;
                        Ok(Self::from_p256_secret(secret))
                    }
                    const_oid::db::rfc5912::SECP_384_R_1 => {
                        let secret = p384::SecretKey::from_pkcs8_der(der)
                            .map_err(|e| ConversionError::KeyDecode(Box::new(e)))?;
                        Ok(Self::from_p384_secret(secret))
                    }
                    const_oid::db::rfc5912::SECP_521_R_1 => {
                        let secret = p521::SecretKey::from_pkcs8_der(der)
                            .map_err(|e| ConversionError::KeyDecode(Box::new(e)))?;
                        Ok(Self::from_p521_secret(secret))
                    }
                    other => Err(ConversionError::UnsupportedAlgorithm(other)),
                }
            }
            const_oid::db::rfc8410::ID_ED_25519 => {
                let signing_key = Ed25519SigningKey::from_pkcs8_der(der)
                    .map_err(|e| ConversionError::KeyDecode(Box::new(e)))?;
                Ok(KeyPair::Ed25519 { signing_key })
            }
            other => Err(ConversionError::UnsupportedAlgorithm(other)),
        }
    }

    /// Decodes an RSA key pair from a DER-encoded PKCS#1 `RSAPrivateKey`
    /// document.
    pub fn from_pkcs1_der(der: &[u8]) -> Result<Self> {
        let private = RsaPrivateKey::from_pkcs1_der(der)
            .map_err(|e| ConversionError::KeyDecode(Box::new(e)))?;
        let public = RsaPublicKey::from(&private);
        Ok(KeyPair::Rsa {
            private: Box::new(private),
            public,
        })
    }

    /// Decodes an ECDSA key pair from a DER-encoded SEC1 `ECPrivateKey`
    /// document, probing the supported curves in order.
    pub fn from_sec1_der(der: &[u8]) -> Result<Self> {
        if let Ok(secret) = p256::SecretKey::from_sec1_der(der) {
            return Ok(Self::from_p256_secret(secret));
        }
        if let Ok(secret) = p384::SecretKey::from_sec1_der(der) {
            return Ok(Self::from_p384_secret(secret));
        }
        match p521::SecretKey::from_sec1_der(der) {
            Ok(secret) => Ok(Self::from_p521_secret(secret)),
            Err(err) => Err(ConversionError::KeyDecode(Box::new(err))),
        }
    }

    /// Imports a key pair from a DER document of unknown encoding.
    ///
    /// Probes PKCS#8 first, then PKCS#1, then SEC1. A PKCS#8 document with an
    /// unsupported algorithm fails immediately rather than falling through to
    /// the other encodings.
    pub fn import_from_der(der: &[u8]) -> Result<Self> {
        match Self::from_pkcs8_der(der) {
            Ok(pair) => return Ok(pair),
            Err(err @ ConversionError::UnsupportedAlgorithm(_)) => return Err(err),
            Err(_) => {}
        }
        if let Ok(pair) = Self::from_pkcs1_der(der) {
            return Ok(pair);
        }
        Self::from_sec1_der(der)
    }

    /// The algorithm of this key pair.
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            KeyPair::Rsa { .. } => KeyAlgorithm::Rsa,
            KeyPair::EcdsaP256 { .. } => KeyAlgorithm::EcdsaP256,
            KeyPair::EcdsaP384 { .. } => KeyAlgorithm::EcdsaP384,
            KeyPair::EcdsaP521 { .. } => KeyAlgorithm::EcdsaP521,
            KeyPair::Ed25519 { .. } => KeyAlgorithm::Ed25519,
        }
    }

    /// Consumes the pair and returns its private half.
    pub fn into_private_key(self) -> PrivateKey {
        match self {
            KeyPair::Rsa { private, .. } => PrivateKey::Rsa(private),
            KeyPair::EcdsaP256 { signing_key, .. } => PrivateKey::EcdsaP256(signing_key),
            KeyPair::EcdsaP384 { signing_key, .. } => PrivateKey::EcdsaP384(signing_key),
            KeyPair::EcdsaP521 { secret_key, .. } => PrivateKey::EcdsaP521(secret_key),
            KeyPair::Ed25519 { signing_key } => PrivateKey::Ed25519(signing_key),
        }
    }

    fn from_p256_secret(secret: p256::SecretKey) -> Self {
        let signing_key = P256SigningKey::from(secret);
        let verifying_key = signing_key.verifying_key().to_owned();
        KeyPair::EcdsaP256 {
            signing_key,
            verifying_key,
        }
    }

    fn from_p384_secret(secret: p384::SecretKey) -> Self {
        let signing_key = P384SigningKey::from(secret);
        let verifying_key = signing_key.verifying_key().to_owned();
        KeyPair::EcdsaP384 {
            signing_key,
            verifying_key,
        }
    }

    fn from_p521_secret(secret: p521::SecretKey) -> Self {
        let public_key = secret.public_key();
        KeyPair::EcdsaP521 {
            secret_key: secret,
            public_key,
        }
    }
}

/// Identifies the algorithm of a converted key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAlgorithm {
    /// RSA.
    Rsa,
    /// ECDSA over the NIST P-256 curve.
    EcdsaP256,
    /// ECDSA over the NIST P-384 curve.
    EcdsaP384,
    /// ECDSA over the NIST P-521 curve.
    EcdsaP521,
    /// Ed25519.
    Ed25519,
}

/// The private half of a converted key pair.
///
/// This is the handle returned by [`crate::convert::parse_private_key`],
/// wrapping each algorithm's native RustCrypto key type.
///
/// The `Debug` representation names the algorithm and omits all key material.
pub enum PrivateKey {
    /// An RSA private key.
    Rsa(Box<RsaPrivateKey>),
    /// An ECDSA P-256 signing key.
    EcdsaP256(P256SigningKey),
    /// An ECDSA P-384 signing key.
    EcdsaP384(P384SigningKey),
    /// An ECDSA P-521 secret key.
    EcdsaP521(p521::SecretKey),
    /// An Ed25519 signing key.
    Ed25519(Ed25519SigningKey),
}

impl PrivateKey {
    /// The algorithm of this key.
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            PrivateKey::Rsa(_) => KeyAlgorithm::Rsa,
            PrivateKey::EcdsaP256(_) => KeyAlgorithm::EcdsaP256,
            PrivateKey::EcdsaP384(_) => KeyAlgorithm::EcdsaP384,
            PrivateKey::EcdsaP521(_) => KeyAlgorithm::EcdsaP521,
            PrivateKey::Ed25519(_) => KeyAlgorithm::Ed25519,
        }
    }

    /// Encodes the key into a DER-encoded PKCS#8 `PrivateKeyInfo` document.
    ///
    /// # Returns
    /// A byte vector containing the DER-encoded key.
    pub fn to_pkcs8_der(&self) -> Result<Vec<u8>> {
        let document = match self {
            PrivateKey::Rsa(private) => private.to_pkcs8_der(),
            PrivateKey::EcdsaP256(signing_key) => signing_key.to_pkcs8_der(),
            PrivateKey::EcdsaP384(signing_key) => signing_key.to_pkcs8_der(),
            PrivateKey::EcdsaP521(secret_key) => secret_key.to_pkcs8_der(),
            PrivateKey::Ed25519(signing_key) => signing_key.to_pkcs8_der(),
        }
        .map_err(|e| ConversionError::Encode(Box::new(e)))?;
        Ok(document.as_bytes().to_vec())
    }

    /// Encodes the key into a PEM-armored PKCS#8 document.
    ///
    /// # Returns
    /// A string containing the PEM-encoded key. The buffer is zeroized on
    /// drop.
    pub fn to_pkcs8_pem(&self) -> Result<Zeroizing<String>> {
        match self {
            PrivateKey::Rsa(private) => private.to_pkcs8_pem(pkcs8::LineEnding::LF),
            PrivateKey::EcdsaP256(signing_key) => signing_key.to_pkcs8_pem(pkcs8::LineEnding::LF),
            PrivateKey::EcdsaP384(signing_key) => signing_key.to_pkcs8_pem(pkcs8::LineEnding::LF),
            PrivateKey::EcdsaP521(secret_key) => secret_key.to_pkcs8_pem(pkcs8::LineEnding::LF),
            PrivateKey::Ed25519(signing_key) => signing_key.to_pkcs8_pem(pkcs8::LineEnding::LF),
        }
        .map_err(|e| ConversionError::Encode(Box::new(e)))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&self.algorithm()).finish()
    }
}
