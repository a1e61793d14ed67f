// Shared test fixtures for shift postings.
// Defaults come from `json/new_shift.json`; setters override single fields.

use serde::Deserialize;

use crate::modules::shifts::core::shift::{NewShift, ShiftDate, ShiftRecord};
use crate::modules::shifts::use_cases::post_shift::command::PostShift;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct NewShiftDto {
    pub user_id: String,
    pub name: String,
    pub date: String,
    pub location: String,
    pub time: String,
    pub phone: String,
    pub notes: Option<String>,
}

pub struct NewShiftBuilder {
    inner: NewShiftDto,
}

impl Default for NewShiftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewShiftBuilder {
    pub fn new() -> Self {
        let dto: NewShiftDto = serde_json::from_str(include_str!("json/new_shift.json"))
            .expect("new_shift.json fixture is valid");
        Self { inner: dto }
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.inner.location = v.into();
        self
    }

    pub fn time(mut self, v: impl Into<String>) -> Self {
        self.inner.time = v.into();
        self
    }

    pub fn phone(mut self, v: impl Into<String>) -> Self {
        self.inner.phone = v.into();
        self
    }

    pub fn notes(mut self, v: Option<&str>) -> Self {
        self.inner.notes = v.map(str::to_string);
        self
    }

    /// Already-validated shape, as handed to a store.
    pub fn build(self) -> NewShift {
        NewShift {
            user_id: self.inner.user_id,
            name: self.inner.name,
            date: ShiftDate::parse(&self.inner.date).expect("fixture date is valid"),
            location: self.inner.location.into(),
            time: self.inner.time.into(),
            phone: self.inner.phone,
            notes: self.inner.notes,
        }
    }

    /// Raw shape, as received from a transport.
    pub fn build_command(self) -> PostShift {
        PostShift {
            user_id: self.inner.user_id,
            name: self.inner.name,
            date: self.inner.date,
            location: self.inner.location,
            time: self.inner.time,
            phone: self.inner.phone,
            notes: self.inner.notes,
        }
    }
}

/// A stored record for index and admission tests.
pub fn make_shift_record(id: &str, date: &str, user_id: &str) -> ShiftRecord {
    ShiftRecord::from_new(
        id,
        1_700_000_000_000,
        NewShiftBuilder::new().date(date).user_id(user_id).build(),
    )
}

#[cfg(test)]
mod new_shift_builder_tests {
    use super::*;
    use crate::modules::shifts::core::shift::{Location, ShiftTime};
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = NewShiftBuilder::default().build();
        assert_eq!(built.user_id, "user-fixed-0001");
        assert_eq!(built.name, "Ana García");
        assert_eq!(built.date.to_string(), "2024-06-01");
        assert_eq!(built.location, Location::Granadilla);
        assert_eq!(built.time, ShiftTime::Night);
        assert_eq!(built.phone, "612345678");
        assert!(built.notes.is_some());
    }

    #[rstest]
    fn setters_override_fields_in_both_shapes() {
        let command = NewShiftBuilder::new()
            .user_id("u-2")
            .location("SNU San Isidro")
            .time("whenever")
            .notes(None)
            .build_command();
        assert_eq!(command.user_id, "u-2");
        assert_eq!(command.location, "SNU San Isidro");
        assert_eq!(command.time, "whenever");
        assert_eq!(command.notes, None);
    }
}
