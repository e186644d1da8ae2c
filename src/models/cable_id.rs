use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::stations;
use crate::pipeline::extraction::reference_id::{self, MAX_SERIAL_LENGTH, MIN_SERIAL_LENGTH};
use crate::pipeline::extraction::ExtractionError;

/// A validated `YYSTATIONNNN` cable identifier.
///
/// Parts are checked on construction and cannot change afterwards, so any
/// value of this type matches the canonical grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalCableId {
    year: String,
    station: String,
    serial: String,
}

impl CanonicalCableId {
    pub fn new(year: &str, station: &str, serial: &str) -> Result<Self, ExtractionError> {
        if year.len() != 2 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ExtractionError::InvalidPart {
                part: "year",
                value: year.into(),
            });
        }
        let station = station.to_uppercase();
        if !stations::is_valid_station(&station) {
            return Err(ExtractionError::InvalidPart {
                part: "station",
                value: station,
            });
        }
        if !(MIN_SERIAL_LENGTH..=MAX_SERIAL_LENGTH).contains(&serial.len())
            || !serial.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ExtractionError::InvalidPart {
                part: "serial",
                value: serial.into(),
            });
        }
        Ok(Self {
            year: year.into(),
            station,
            serial: serial.into(),
        })
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn station(&self) -> &str {
        &self.station
    }

    pub fn serial(&self) -> &str {
        &self.serial
    }
}

impl fmt::Display for CanonicalCableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.year, self.station, self.serial)
    }
}

impl FromStr for CanonicalCableId {
    type Err = ExtractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, station, serial) = reference_id::parse(s)?;
        Self::new(&year, &station, &serial)
    }
}

impl TryFrom<String> for CanonicalCableId {
    type Error = ExtractionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CanonicalCableId> for String {
    fn from(id: CanonicalCableId) -> Self {
        id.to_string()
    }
}
