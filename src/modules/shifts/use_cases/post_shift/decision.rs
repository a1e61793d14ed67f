use crate::modules::shifts::core::admission::Denial;
use crate::modules::shifts::core::ports::Insertion;
use crate::modules::shifts::core::shift::ShiftRecord;

/// Result of a write that passed validation. A denial is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOutcome {
    Posted(ShiftRecord),
    Denied { reason: Denial },
}

impl From<Insertion> for PostOutcome {
    fn from(insertion: Insertion) -> Self {
        match insertion {
            Insertion::Inserted(record) => PostOutcome::Posted(record),
            Insertion::Denied(reason) => PostOutcome::Denied { reason },
        }
    }
}
