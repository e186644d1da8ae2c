//! Canonical cable identifiers: grammar, parsing and repair.

use std::sync::LazyLock;

use regex::Regex;

use super::ExtractionError;
use crate::catalog::{corrections, stations};
use crate::models::CanonicalCableId;

pub const MIN_SERIAL_LENGTH: usize = 1;
pub const MAX_SERIAL_LENGTH: usize = 7;

/// `YY` + station + serial. Stations are alternated longest first so a
/// shorter prefix never wins over the full name.
static REFERENCE_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let stations = stations::stations_longest_first().join("|");
    Regex::new(&format!(
        r"^([0-9]{{2}})({stations})([0-9]{{{MIN_SERIAL_LENGTH},{MAX_SERIAL_LENGTH}}})$"
    ))
    .expect("Invalid reference id pattern")
});

/// Split a reference id into `(year, station, serial)`.
///
/// The id is upper-cased first. Fails with
/// [`ExtractionError::InvalidReferenceId`] if it does not match the grammar.
pub fn parse(reference_id: &str) -> Result<(String, String, String), ExtractionError> {
    let upper = reference_id.trim().to_uppercase();
    let caps = REFERENCE_ID_PATTERN
        .captures(&upper)
        .ok_or_else(|| ExtractionError::InvalidReferenceId(reference_id.to_string()))?;
    Ok((caps[1].to_string(), caps[2].to_string(), caps[3].to_string()))
}

/// Turn a published reference id into its canonical form.
///
/// Known malformed ids are repaired by exact lookup. Well-formed ids lose
/// leading zeros in the serial. Ids listed as having no valid twin fail
/// with [`ExtractionError::NoKnownEquivalent`]; anything else fails with
/// [`ExtractionError::InvalidReferenceId`].
pub fn canonicalize(raw: &str) -> Result<CanonicalCableId, ExtractionError> {
    let upper = raw.trim().to_uppercase();

    if let Some(corrected) = corrections::corrected_id(&upper) {
        tracing::info!(reference_id = %upper, corrected, "Repaired malformed cable identifier");
        return from_parts(corrected);
    }

    if REFERENCE_ID_PATTERN.is_match(&upper) {
        return from_parts(&upper);
    }

    if let Some(suggested) = corrections::suggested_id(&upper) {
        tracing::warn!(reference_id = %upper, suggested, "Cable identifier has no valid equivalent");
        return Err(ExtractionError::NoKnownEquivalent {
            reference_id: upper,
            suggested: suggested.to_string(),
        });
    }

    tracing::warn!(reference_id = %raw, "Illegal cable identifier");
    Err(ExtractionError::InvalidReferenceId(raw.to_string()))
}

fn from_parts(reference_id: &str) -> Result<CanonicalCableId, ExtractionError> {
    let (year, station, serial) = parse(reference_id)?;
    CanonicalCableId::new(&year, &station, strip_leading_zeros(&serial))
}

/// `"00723"` → `"723"`; an all-zero serial keeps a single `0`.
pub(crate) fn strip_leading_zeros(serial: &str) -> &str {
    let stripped = serial.trim_start_matches('0');
    if stripped.is_empty() && !serial.is_empty() {
        &serial[serial.len() - 1..]
    } else {
        stripped
    }
}
