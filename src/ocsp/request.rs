use bytes::Bytes;

use crate::error::OcspError;

use super::der::{
    TAG_NULL, TAG_OBJECT_IDENTIFIER, TAG_OCTET_STRING, TAG_SEQUENCE, sequence, write_tlv,
    write_unsigned_integer,
};
use super::issuer::IssuerKeyHash;
use super::serial::SerialNumber;

/// Content octets of OID 1.3.14.3.2.26 (SHA-1).
const SHA1_OID: [u8; 5] = [0x2b, 0x0e, 0x03, 0x02, 0x1a];

/// One fully encoded `OCSPRequest`. Cloning shares the underlying buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestMessage(Bytes);

impl RequestMessage {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Cheap handle to the encoded bytes, suitable for a request body.
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        self.0.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Encodes a single-entry status request for `serial` under the issuer
/// identified by `issuer_key_hash`.
///
/// The shape is RFC 2560 §4.1.1 with every optional part left out:
///
/// ```text
/// OCSPRequest { tbsRequest { requestList { Request { CertID {
///     hashAlgorithm  { sha1, NULL },
///     issuerNameHash OCTET STRING (empty),
///     issuerKeyHash  OCTET STRING (20 octets),
///     serialNumber   INTEGER } } } } }
/// ```
///
/// `version` is omitted because it equals its default. `issuerNameHash` is
/// written as a zero-length OCTET STRING.
///
/// # Errors
///
/// Returns [`OcspError::Encoding`] when a length cannot be represented.
pub fn build_request(
    serial: &SerialNumber,
    issuer_key_hash: &IssuerKeyHash,
) -> Result<RequestMessage, OcspError> {
    let mut algorithm = Vec::with_capacity(SHA1_OID.len().saturating_add(4));
    write_tlv(&mut algorithm, TAG_OBJECT_IDENTIFIER, &SHA1_OID)?;
    write_tlv(&mut algorithm, TAG_NULL, &[])?;

    let mut cert_id_fields = Vec::with_capacity(64);
    write_tlv(&mut cert_id_fields, TAG_SEQUENCE, &algorithm)?;
    write_tlv(&mut cert_id_fields, TAG_OCTET_STRING, &[])?;
    write_tlv(&mut cert_id_fields, TAG_OCTET_STRING, issuer_key_hash.as_bytes())?;
    write_unsigned_integer(&mut cert_id_fields, serial.as_be_bytes())?;

    let cert_id = sequence(&cert_id_fields)?;
    let request = sequence(&cert_id)?;
    let request_list = sequence(&request)?;
    let tbs_request = sequence(&request_list)?;
    let ocsp_request = sequence(&tbs_request)?;
    Ok(RequestMessage(Bytes::from(ocsp_request)))
}
