//! Just enough DER to write a status request.
use crate::error::OcspError;

pub(super) const TAG_INTEGER: u8 = 0x02;
pub(super) const TAG_OCTET_STRING: u8 = 0x04;
pub(super) const TAG_NULL: u8 = 0x05;
pub(super) const TAG_OBJECT_IDENTIFIER: u8 = 0x06;
pub(super) const TAG_SEQUENCE: u8 = 0x30;

/// Short-form lengths cover 0..=127 content octets.
const SHORT_FORM_MAX: usize = 0x7f;
const LONG_FORM_FLAG: u8 = 0x80;
const SIGN_BIT: u8 = 0x80;

/// Appends one tag-length-value triple to `out`.
pub(super) fn write_tlv(out: &mut Vec<u8>, tag: u8, content: &[u8]) -> Result<(), OcspError> {
    out.push(tag);
    write_length(out, content.len())?;
    out.extend_from_slice(content);
    Ok(())
}

/// Wraps already-encoded members in a SEQUENCE.
pub(super) fn sequence(members: &[u8]) -> Result<Vec<u8>, OcspError> {
    let mut out = Vec::with_capacity(members.len().saturating_add(6));
    write_tlv(&mut out, TAG_SEQUENCE, members)?;
    Ok(out)
}

/// Writes a non-negative INTEGER from its big-endian magnitude.
///
/// Leading zero octets are dropped and a single zero octet is prepended when
/// the high bit would otherwise mark the value as negative.
pub(super) fn write_unsigned_integer(out: &mut Vec<u8>, magnitude: &[u8]) -> Result<(), OcspError> {
    let significant = magnitude
        .iter()
        .position(|byte| *byte != 0)
        .and_then(|start| magnitude.get(start..))
        .unwrap_or_default();

    let mut content = Vec::with_capacity(significant.len().saturating_add(1));
    match significant.first() {
        None => content.push(0),
        Some(first) if first & SIGN_BIT != 0 => {
            content.push(0);
            content.extend_from_slice(significant);
        }
        Some(_) => content.extend_from_slice(significant),
    }
    write_tlv(out, TAG_INTEGER, &content)
}

fn write_length(out: &mut Vec<u8>, len: usize) -> Result<(), OcspError> {
    if len <= SHORT_FORM_MAX {
        let short = u8::try_from(len).ok().ok_or(OcspError::Encoding {
            reason: "short-form length out of range",
        })?;
        out.push(short);
        return Ok(());
    }

    let len = u32::try_from(len).ok().ok_or(OcspError::Encoding {
        reason: "content longer than four length octets",
    })?;
    let octets = len.to_be_bytes();
    let significant = octets
        .iter()
        .position(|byte| *byte != 0)
        .and_then(|start| octets.get(start..))
        .unwrap_or_default();
    let count = u8::try_from(significant.len()).ok().ok_or(OcspError::Encoding {
        reason: "length octet count overflow",
    })?;
    out.push(LONG_FORM_FLAG | count);
    out.extend_from_slice(significant);
    Ok(())
}
