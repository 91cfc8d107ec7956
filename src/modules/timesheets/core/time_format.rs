// Conversions between decimal hours and `HH:MM:SS` display strings.

use thiserror::Error;

const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeFormatError {
    #[error("expected HH:MM:SS, got {0:?}")]
    Malformed(String),
}

/// Cell rendering: every stage is truncated, never rounded.
pub fn duration_to_time_string(hours: f64) -> String {
    let hours = hours.max(0.0);
    let whole_hours = hours.floor();
    let fractional_minutes = (hours - whole_hours) * 60.0;
    let minutes = fractional_minutes.floor();
    let seconds = ((fractional_minutes - minutes) * 60.0).floor();

    format!("{:02}:{:02}:{:02}", whole_hours as u64, minutes as u64, seconds as u64)
}

pub fn parse_time(value: &str) -> Result<f64, TimeFormatError> {
    let malformed = || TimeFormatError::Malformed(value.to_string());

    let mut parts = value.trim().split(':');
    let mut next = || -> Result<u64, TimeFormatError> {
        parts
            .next()
            .and_then(|part| part.parse::<u64>().ok())
            .ok_or_else(malformed)
    };
    let (hours, minutes, seconds) = (next()?, next()?, next()?);
    if parts.next().is_some() || minutes >= 60 || seconds >= 60 {
        return Err(malformed());
    }

    Ok(hours as f64 + minutes as f64 / 60.0 + seconds as f64 / SECONDS_PER_HOUR)
}

/// Totals rendering. Hours do not wrap at 24.
pub fn format_time(hours: f64) -> String {
    let total_seconds = (hours.max(0.0) * SECONDS_PER_HOUR).round() as u64;
    format!(
        "{:02}:{:02}:{:02}",
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60
    )
}
