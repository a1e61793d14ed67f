use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::modules::shifts::core::validation::ValidationError;

/// Calendar day a shift belongs to. Always `YYYY-MM-DD` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShiftDate(NaiveDate);

impl ShiftDate {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let value = value.trim();
        // chrono accepts unpadded months and days, the wire format does not
        if value.len() != 10 {
            return Err(ValidationError::InvalidDate(value.to_string()));
        }
        NaiveDate::parse_from_str(value, Self::FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(value.to_string()))
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for ShiftDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ShiftDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl TryFrom<String> for ShiftDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ShiftDate> for String {
    fn from(date: ShiftDate) -> Self {
        date.to_string()
    }
}

/// Site where the shift takes place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Location {
    Granadilla,
    SanIsidro,
    Other(String),
}

impl Location {
    pub fn label(&self) -> &str {
        match self {
            Location::Granadilla => "C.S. Granadilla",
            Location::SanIsidro => "SNU San Isidro",
            Location::Other(label) => label,
        }
    }
}

impl From<&str> for Location {
    fn from(value: &str) -> Self {
        match value.trim() {
            "C.S. Granadilla" => Location::Granadilla,
            "SNU San Isidro" => Location::SanIsidro,
            other => Location::Other(other.to_string()),
        }
    }
}

impl From<String> for Location {
    fn from(value: String) -> Self {
        Location::from(value.as_str())
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.label().to_string()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Time window of the shift.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShiftTime {
    /// 20h to 8h
    Night,
    /// 8h to 20h
    Day,
    /// 9h to 17h
    Morning,
    /// 17h to 9h
    Evening,
    Other(String),
}

impl ShiftTime {
    pub fn label(&self) -> &str {
        match self {
            ShiftTime::Night => "20h a 8h",
            ShiftTime::Day => "8h a 20h",
            ShiftTime::Morning => "9h a 17h",
            ShiftTime::Evening => "17h a 9h",
            ShiftTime::Other(label) => label,
        }
    }
}

impl From<&str> for ShiftTime {
    fn from(value: &str) -> Self {
        match value.trim() {
            "20h a 8h" => ShiftTime::Night,
            "8h a 20h" => ShiftTime::Day,
            "9h a 17h" => ShiftTime::Morning,
            "17h a 9h" => ShiftTime::Evening,
            other => ShiftTime::Other(other.to_string()),
        }
    }
}

impl From<String> for ShiftTime {
    fn from(value: String) -> Self {
        ShiftTime::from(value.as_str())
    }
}

impl From<ShiftTime> for String {
    fn from(time: ShiftTime) -> Self {
        time.label().to_string()
    }
}

impl fmt::Display for ShiftTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated posting that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShift {
    pub user_id: String,
    pub name: String,
    pub date: ShiftDate,
    pub location: Location,
    pub time: ShiftTime,
    pub phone: String,
    pub notes: Option<String>,
}

/// A live swap posting as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub date: ShiftDate,
    pub location: Location,
    pub time: ShiftTime,
    pub phone: String,
    pub notes: Option<String>,
    pub created_at: i64,
}

impl ShiftRecord {
    pub fn from_new(id: impl Into<String>, created_at: i64, shift: NewShift) -> Self {
        Self {
            id: id.into(),
            user_id: shift.user_id,
            name: shift.name,
            date: shift.date,
            location: shift.location,
            time: shift.time,
            phone: shift.phone,
            notes: shift.notes,
            created_at,
        }
    }

    /// Overwrites every field except `id` and `created_at`.
    pub fn replaced_with(self, shift: NewShift) -> Self {
        Self::from_new(self.id, self.created_at, shift)
    }
}
