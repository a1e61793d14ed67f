use regex::Regex;
use std::sync::LazyLock;

use crate::modules::shifts::core::shift::{Location, ShiftTime};

pub const NAME_MIN_CHARS: usize = 2;
pub const NOTES_MAX_CHARS: usize = 200;

// Spanish mobile numbers, national format without prefix
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{8}$").expect("phone pattern is a valid regex"));

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("user id is required")]
    MissingUserId,

    #[error("name must have at least {NAME_MIN_CHARS} characters")]
    NameTooShort,

    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("{field} must not be blank")]
    BlankOther { field: &'static str },

    #[error("invalid mobile phone number `{0}`")]
    InvalidPhone(String),

    #[error("notes exceed {max} characters ({actual})")]
    NotesTooLong { max: usize, actual: usize },
}

pub fn validate_user_id(user_id: &str) -> Result<String, ValidationError> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(ValidationError::MissingUserId);
    }
    Ok(user_id.to_string())
}

pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.chars().count() < NAME_MIN_CHARS {
        return Err(ValidationError::NameTooShort);
    }
    Ok(name.to_string())
}

pub fn validate_location(location: Location) -> Result<Location, ValidationError> {
    match location {
        Location::Other(label) if label.trim().is_empty() => {
            Err(ValidationError::BlankOther { field: "location" })
        }
        location => Ok(location),
    }
}

pub fn validate_time(time: ShiftTime) -> Result<ShiftTime, ValidationError> {
    match time {
        ShiftTime::Other(label) if label.trim().is_empty() => {
            Err(ValidationError::BlankOther { field: "time" })
        }
        time => Ok(time),
    }
}

pub fn validate_phone(phone: &str) -> Result<String, ValidationError> {
    let phone = phone.trim();
    if !PHONE_PATTERN.is_match(phone) {
        return Err(ValidationError::InvalidPhone(phone.to_string()));
    }
    Ok(phone.to_string())
}

/// Blank notes are stored as absent. Length is counted in UTF-16 code units.
pub fn validate_notes(notes: Option<&str>) -> Result<Option<String>, ValidationError> {
    let Some(notes) = notes.map(str::trim).filter(|n| !n.is_empty()) else {
        return Ok(None);
    };
    let actual = notes.encode_utf16().count();
    if actual > NOTES_MAX_CHARS {
        return Err(ValidationError::NotesTooLong {
            max: NOTES_MAX_CHARS,
            actual,
        });
    }
    Ok(Some(notes.to_string()))
}
