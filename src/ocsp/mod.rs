//! OCSP status-request construction.
//!
//! Requests are built once during warm-up: the issuer's public key is hashed,
//! every serial is parsed and encoded into a minimal DER `OCSPRequest`, and the
//! resulting byte strings are handed to the request pool.
mod der;
mod issuer;
mod request;
mod serial;

pub use issuer::{ISSUER_KEY_HASH_LEN, IssuerCertificate, IssuerKeyHash, issuer_key_hash};
pub use request::{RequestMessage, build_request};
pub use serial::{SerialNumber, read_serials};
