use der::{Decode, Encode, EncodePem};
use sha2::{Digest, Sha256};
use time::OffsetDateTime;
use x509_cert::certificate::CertificateInner;
use x509_cert::name::Name;
use x509_cert::time::Time;

use crate::error::{ConversionError, Result};

/// Represents an X.509 certificate.
///
/// This is the handle returned by
/// [`crate::convert::parse_public_key_certificate`]. It wraps the decoded
/// certificate structure and provides accessors for the fields callers most
/// often inspect, plus methods to re-encode into DER or PEM.
#[derive(Debug, Clone)]
pub struct Certificate {
    /// The inner representation of the certificate.
    pub inner: CertificateInner,
}

impl Certificate {
    /// Decodes a certificate from a DER-encoded X.509 document.
    pub fn import_from_der(der: &[u8]) -> Result<Self> {
        let inner = CertificateInner::from_der(der).map_err(ConversionError::CertificateDecode)?;
        Ok(Certificate { inner })
    }

    /// Encodes the certificate into DER format.
    ///
    /// # Returns
    /// A byte vector containing the DER-encoded certificate.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        self.inner
            .to_der()
            .map_err(|e| ConversionError::Encode(Box::new(e)))
    }

    /// Encodes the certificate into PEM format.
    ///
    /// # Returns
    /// A string containing the PEM-encoded certificate.
    pub fn to_pem(&self) -> Result<String> {
        self.inner
            .to_pem(pkcs8::LineEnding::LF)
            .map_err(|e| ConversionError::Encode(Box::new(e)))
    }

    /// The subject distinguished name.
    pub fn subject(&self) -> &Name {
        &self.inner.tbs_certificate.subject
    }

    /// The issuer distinguished name.
    pub fn issuer(&self) -> &Name {
        &self.inner.tbs_certificate.issuer
    }

    /// The common name attribute of the subject, if present.
    pub fn subject_common_name(&self) -> Option<String> {
        common_name(self.subject())
    }

    /// The common name attribute of the issuer, if present.
    pub fn issuer_common_name(&self) -> Option<String> {
        common_name(self.issuer())
    }

    /// The certificate serial number as big-endian bytes.
    pub fn serial_number(&self) -> &[u8] {
        self.inner.tbs_certificate.serial_number.as_bytes()
    }

    /// The start of the certificate's validity period.
    pub fn not_before(&self) -> OffsetDateTime {
        match &self.inner.tbs_certificate.validity.not_before {
            Time::UtcTime(ut) => OffsetDateTime::from(ut.to_system_time()),
            Time::GeneralTime(gt) => OffsetDateTime::from(gt.to_system_time()),
        }
    }

    /// The end of the certificate's validity period.
    pub fn not_after(&self) -> OffsetDateTime {
        match &self.inner.tbs_certificate.validity.not_after {
            Time::UtcTime(ut) => OffsetDateTime::from(ut.to_system_time()),
            Time::GeneralTime(gt) => OffsetDateTime::from(gt.to_system_time()),
        }
    }

    /// Computes the SHA-256 fingerprint over the DER encoding.
    pub fn fingerprint_sha256(&self) -> Result<[u8; 32]> {
        Ok(Sha256::digest(self.to_der()?).into())
    }
}

/// Extracts the common name attribute from a distinguished name.
fn common_name(name: &Name) -> Option<String> {
    for rdn in name.0.iter() {
        for attr in rdn.0.iter() {
            if attr.oid.to_string() == "2.5.4.3" {
                // Common Name OID
                if let Ok(s) = attr.value.decode_as::<String>() {
                    return Some(s);
                }
                if let Ok(s) = attr.value.decode_as::<der::asn1::PrintableStringRef<'_>>() {
                    return Some(s.as_str().to_owned());
                }
            }
        }
    }
    None
}
