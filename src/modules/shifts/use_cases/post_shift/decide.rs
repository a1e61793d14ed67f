use crate::modules::shifts::core::shift::{Location, NewShift, ShiftDate, ShiftTime};
use crate::modules::shifts::core::validation::{
    ValidationError, validate_location, validate_name, validate_notes, validate_phone,
    validate_time, validate_user_id,
};
use crate::modules::shifts::use_cases::post_shift::command::PostShift;

/// Field checks run in declaration order; the first failure is reported.
pub fn decide_post(command: PostShift) -> Result<NewShift, ValidationError> {
    Ok(NewShift {
        user_id: validate_user_id(&command.user_id)?,
        name: validate_name(&command.name)?,
        date: ShiftDate::parse(&command.date)?,
        location: validate_location(Location::from(command.location))?,
        time: validate_time(ShiftTime::from(command.time))?,
        phone: validate_phone(&command.phone)?,
        notes: validate_notes(command.notes.as_deref())?,
    })
}
