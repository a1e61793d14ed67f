use chrono::Locale;

use crate::modules::shifts::core::shift::{ShiftDate, ShiftRecord};

const NATIONAL_NUMBER_DIGITS: usize = 9;

/// `sábado, 1 de junio de 2024`
pub fn spanish_long_date(date: &ShiftDate) -> String {
    date.as_naive()
        .format_localized("%A, %-d de %B de %Y", Locale::es_ES)
        .to_string()
}

/// Deep link that opens a WhatsApp chat with the poster, pre-filled with a
/// greeting that names the shift's day.
pub fn whatsapp_link(record: &ShiftRecord, country_code: &str) -> String {
    let digits: String = record.phone.chars().filter(char::is_ascii_digit).collect();
    let number = if digits.len() == NATIONAL_NUMBER_DIGITS {
        format!("{country_code}{digits}")
    } else {
        digits
    };
    let message = format!(
        "Hola {}, te escribo por la guardia del {}.",
        record.name,
        spanish_long_date(&record.date)
    );
    format!("https://wa.me/{number}?text={}", urlencoding::encode(&message))
}
