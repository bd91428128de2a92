use std::path::Path;

use sha1::{Digest, Sha1};
use x509_parser::pem::parse_x509_pem;
use x509_parser::prelude::{FromDer, SubjectPublicKeyInfo, X509Certificate};

use crate::error::OcspError;

/// SHA-1 digest length.
pub const ISSUER_KEY_HASH_LEN: usize = 20;

const PEM_MARKER: &[u8] = b"-----BEGIN";
const BITS_PER_OCTET: u32 = 8;

/// SHA-1 of the issuer's right-aligned public key bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IssuerKeyHash([u8; ISSUER_KEY_HASH_LEN]);

impl IssuerKeyHash {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ISSUER_KEY_HASH_LEN]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ISSUER_KEY_HASH_LEN] {
        &self.0
    }
}

/// The parts of an issuer certificate warm-up needs.
#[derive(Clone, Debug)]
pub struct IssuerCertificate {
    subject: String,
    subject_public_key_info: Vec<u8>,
}

impl IssuerCertificate {
    /// Loads a PEM or DER certificate from disk.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or does not hold a
    /// parseable X.509 certificate.
    pub fn load(path: &Path) -> Result<Self, OcspError> {
        let bytes = std::fs::read(path).map_err(|err| OcspError::ReadIssuer {
            path: path.to_path_buf(),
            source: err,
        })?;
        Self::from_pem_or_der(&bytes)
    }

    /// Parses a certificate, accepting either a PEM block or raw DER.
    ///
    /// # Errors
    ///
    /// Returns [`OcspError::IssuerParse`] when the input is not a certificate.
    pub fn from_pem_or_der(bytes: &[u8]) -> Result<Self, OcspError> {
        let is_pem = bytes
            .windows(PEM_MARKER.len())
            .any(|window| window == PEM_MARKER);
        if !is_pem {
            return Self::from_der(bytes);
        }
        let (_, pem) = parse_x509_pem(bytes).map_err(|err| OcspError::IssuerParse {
            message: format!("invalid PEM: {}", err),
        })?;
        Self::from_der(&pem.contents)
    }

    /// Parses a DER certificate.
    ///
    /// # Errors
    ///
    /// Returns [`OcspError::IssuerParse`] when the input is not a certificate.
    pub fn from_der(der: &[u8]) -> Result<Self, OcspError> {
        let (_, certificate) =
            X509Certificate::from_der(der).map_err(|err| OcspError::IssuerParse {
                message: format!("invalid certificate: {}", err),
            })?;
        Ok(Self {
            subject: certificate.subject().to_string(),
            subject_public_key_info: certificate.public_key().raw.to_vec(),
        })
    }

    /// Builds an issuer from an already extracted SubjectPublicKeyInfo.
    #[must_use]
    pub fn from_subject_public_key_info(subject: impl Into<String>, spki_der: Vec<u8>) -> Self {
        Self {
            subject: subject.into(),
            subject_public_key_info: spki_der,
        }
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Raw DER of the SubjectPublicKeyInfo.
    #[must_use]
    pub fn subject_public_key_info(&self) -> &[u8] {
        &self.subject_public_key_info
    }
}

/// Hashes the issuer's subject public key the way OCSP `CertID` expects.
///
/// # Errors
///
/// Returns [`OcspError::IssuerParse`] when the SubjectPublicKeyInfo cannot be
/// parsed.
pub fn issuer_key_hash(issuer: &IssuerCertificate) -> Result<IssuerKeyHash, OcspError> {
    let (_, spki) = SubjectPublicKeyInfo::from_der(issuer.subject_public_key_info()).map_err(
        |err| OcspError::IssuerParse {
            message: format!("invalid subject public key info: {}", err),
        },
    )?;
    let key = &spki.subject_public_key;
    let aligned = right_align(&key.data, key.unused_bits);
    Ok(IssuerKeyHash(Sha1::digest(&aligned).into()))
}

/// Drops the trailing unused bits of a BIT STRING by shifting the whole value
/// right, carrying bits across octet boundaries.
fn right_align(bits: &[u8], unused_bits: u8) -> Vec<u8> {
    let shift = u32::from(unused_bits);
    if shift == 0 || shift >= BITS_PER_OCTET {
        return bits.to_vec();
    }
    let carry_shift = BITS_PER_OCTET.saturating_sub(shift);
    let mut aligned = Vec::with_capacity(bits.len());
    let mut carry: u8 = 0;
    for byte in bits {
        aligned.push(carry | byte.checked_shr(shift).unwrap_or(0));
        carry = byte.checked_shl(carry_shift).unwrap_or(0);
    }
    aligned
}
