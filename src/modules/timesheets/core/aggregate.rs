use chrono::{NaiveDate, TimeZone};

use crate::modules::timesheets::core::entry::{ProjectId, TimeEntry};
use crate::modules::timesheets::core::time_format::duration_to_time_string;

/// Calendar date an entry is booked on: the start date as seen in `timezone`.
/// The end date plays no part, so overnight entries land on one day only.
pub fn entry_date<Tz: TimeZone>(entry: &TimeEntry, timezone: &Tz) -> NaiveDate {
    entry.start_date.with_timezone(timezone).date_naive()
}

/// Decimal hours booked on `project_id` for `date`.
pub fn sum_duration<Tz: TimeZone>(
    entries: &[TimeEntry],
    project_id: ProjectId,
    date: NaiveDate,
    timezone: &Tz,
) -> f64 {
    entries
        .iter()
        .filter(|entry| entry.project_id == project_id && entry_date(entry, timezone) == date)
        .map(TimeEntry::duration_hours)
        .sum()
}

/// Grid cell text: blank when nothing was booked.
pub fn cell_display(hours: f64) -> String {
    if hours > 0.0 {
        duration_to_time_string(hours)
    } else {
        String::new()
    }
}
