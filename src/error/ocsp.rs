use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcspError {
    #[error("Failed to encode status request: {reason}")]
    Encoding { reason: &'static str },
    #[error("Failed to parse issuer certificate: {message}")]
    IssuerParse { message: String },
    #[error("Invalid serial number '{value}': expected 32 or 36 hex characters.")]
    InvalidSerialLength { value: String },
    #[error("Invalid serial number '{value}': {source}")]
    InvalidSerialHex {
        value: String,
        #[source]
        source: hex::FromHexError,
    },
    #[error("Failed to read issuer certificate '{path}': {source}")]
    ReadIssuer {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read serials file '{path}': {source}")]
    ReadSerials {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
