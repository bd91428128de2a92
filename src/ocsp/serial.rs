use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::OcspError;

/// Serials issued before the width change are 32 hex characters; current ones are 36.
const LEGACY_SERIAL_HEX_LEN: usize = 32;
const SERIAL_HEX_LEN: usize = 36;

/// Certificate serial number as a non-negative big-endian integer.
///
/// Leading zero octets are stripped on parse, so two spellings of the same
/// value compare equal and encode identically.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SerialNumber {
    magnitude: Vec<u8>,
}

impl SerialNumber {
    #[must_use]
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let magnitude = bytes
            .iter()
            .position(|byte| *byte != 0)
            .and_then(|start| bytes.get(start..))
            .unwrap_or_default()
            .to_vec();
        Self { magnitude }
    }

    /// Big-endian magnitude without leading zeros; empty for zero.
    #[must_use]
    pub fn as_be_bytes(&self) -> &[u8] {
        &self.magnitude
    }
}

impl FromStr for SerialNumber {
    type Err = OcspError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.len() != LEGACY_SERIAL_HEX_LEN && value.len() != SERIAL_HEX_LEN {
            return Err(OcspError::InvalidSerialLength {
                value: value.to_owned(),
            });
        }
        let bytes = hex::decode(value).map_err(|err| OcspError::InvalidSerialHex {
            value: value.to_owned(),
            source: err,
        })?;
        Ok(Self::from_be_bytes(&bytes))
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.magnitude.is_empty() {
            return f.write_str("0");
        }
        f.write_str(&hex::encode(&self.magnitude))
    }
}

/// Reads one serial per line, skipping blank lines.
///
/// # Errors
///
/// Returns an error when the file cannot be read. Individual lines are not
/// validated here; bad serials are skipped during warm-up.
pub fn read_serials(path: &Path) -> Result<Vec<String>, OcspError> {
    let content = std::fs::read_to_string(path).map_err(|err| OcspError::ReadSerials {
        path: path.to_path_buf(),
        source: err,
    })?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}
