use chrono::{Datelike, NaiveDate, Weekday};

use crate::domain::ValidationError;

/// A shift is full once the signed-up count reaches the plan. Over-capacity
/// (`current > plan`) counts as full; nothing distinguishes it visually.
pub fn is_shift_full(current: u32, plan: u32) -> bool {
    current >= plan
}

/// Fill fraction of a shift, clamped to `[0, 1]` for use as a bar width.
/// A plan of zero is a degenerate input and renders as full.
pub fn progress_ratio(current: u32, plan: u32) -> f64 {
    if plan == 0 {
        return 1.0;
    }
    (current as f64 / plan as f64).min(1.0)
}

/// Urgency color of the capacity bar. Ties at a threshold take the more
/// urgent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressColor {
    Full,
    NearFull,
    Normal,
}

impl ProgressColor {
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Full => "#ff3b30",
            Self::NearFull => "#ff9500",
            Self::Normal => "#007AFF",
        }
    }
}

pub fn progress_color(current: u32, plan: u32) -> ProgressColor {
    if plan == 0 {
        return ProgressColor::Full;
    }
    let ratio = current as f64 / plan as f64;
    if ratio >= 1.0 {
        ProgressColor::Full
    } else if ratio >= 0.8 {
        ProgressColor::NearFull
    } else {
        ProgressColor::Normal
    }
}

pub const NO_RATING_LABEL: &str = "Нет рейтинга";

/// One decimal place, or the fixed no-rating label when absent.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(rating) => format!("{:.1}", rating),
        None => NO_RATING_LABEL.to_string(),
    }
}

const WEEKDAYS_RU: [&str; 7] = [
    "понедельник",
    "вторник",
    "среда",
    "четверг",
    "пятница",
    "суббота",
    "воскресенье",
];

const MONTHS_GENITIVE_RU: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Renders day-first `DD.MM.YYYY` text as the long localized form the
/// list and detail views show, e.g. `"понедельник, 15 сентября"`.
pub fn format_date(date_string: &str) -> Result<String, ValidationError> {
    let date = NaiveDate::parse_from_str(date_string.trim(), "%d.%m.%Y")
        .map_err(|e| {
            ValidationError::new(format!("Invalid date '{date_string}': {e}"))
        })?;

    let weekday = match date.weekday() {
        Weekday::Mon => WEEKDAYS_RU[0],
        Weekday::Tue => WEEKDAYS_RU[1],
        Weekday::Wed => WEEKDAYS_RU[2],
        Weekday::Thu => WEEKDAYS_RU[3],
        Weekday::Fri => WEEKDAYS_RU[4],
        Weekday::Sat => WEEKDAYS_RU[5],
        Weekday::Sun => WEEKDAYS_RU[6],
    };
    let month = MONTHS_GENITIVE_RU[date.month0() as usize];

    Ok(format!("{}, {} {}", weekday, date.day(), month))
}

/// Map-search URL for a shift's coordinates. Opening it is the platform
/// URL handler's job; this layer only produces a well-formed URL.
pub fn map_search_url(latitude: f64, longitude: f64) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={},{}",
        latitude, longitude
    )
}
