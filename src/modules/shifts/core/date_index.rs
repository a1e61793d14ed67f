use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::modules::shifts::core::shift::{ShiftDate, ShiftRecord};

/// Postings grouped by calendar day.
///
/// Always rebuilt from a full record list; there is no incremental update.
/// Within a day, records keep the order in which they were fed to [`DateIndex::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DateIndex {
    days: BTreeMap<ShiftDate, Vec<ShiftRecord>>,
}

impl DateIndex {
    pub fn build(records: impl IntoIterator<Item = ShiftRecord>) -> Self {
        let mut days: BTreeMap<ShiftDate, Vec<ShiftRecord>> = BTreeMap::new();
        for record in records {
            days.entry(record.date).or_default().push(record);
        }
        Self { days }
    }

    /// Records posted for `date`, empty when there are none.
    pub fn day(&self, date: &ShiftDate) -> &[ShiftRecord] {
        self.days.get(date).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn dates(&self) -> impl Iterator<Item = &ShiftDate> {
        self.days.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ShiftDate, &[ShiftRecord])> {
        self.days.iter().map(|(date, day)| (date, day.as_slice()))
    }

    /// Sub-index of the days in `from..=to`; open ends are unbounded.
    pub fn between(&self, from: Option<ShiftDate>, to: Option<ShiftDate>) -> DateIndex {
        let from = from.unwrap_or(ShiftDate::new(NaiveDate::MIN));
        let to = to.unwrap_or(ShiftDate::new(NaiveDate::MAX));
        if from > to {
            return DateIndex::default();
        }
        let days = self
            .days
            .range(from..=to)
            .map(|(date, day)| (*date, day.clone()))
            .collect();
        Self { days }
    }

    pub fn find(&self, id: &str) -> Option<&ShiftRecord> {
        self.days.values().flatten().find(|record| record.id == id)
    }

    /// Number of days with at least one posting.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}
