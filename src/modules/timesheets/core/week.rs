use chrono::{Datelike, Days, NaiveDate, TimeZone, Utc};

pub const DAYS_PER_WEEK: usize = 7;

/// Monday of the week containing `anchor`.
pub fn week_start(anchor: NaiveDate) -> NaiveDate {
    let offset = u64::from(anchor.weekday().num_days_from_monday());
    anchor - Days::new(offset)
}

pub fn week_dates(anchor: NaiveDate) -> [NaiveDate; DAYS_PER_WEEK] {
    let start = week_start(anchor);
    std::array::from_fn(|day| start + Days::new(day as u64))
}

/// Moves the anchor by whole weeks; negative goes back in time.
///
/// Returns `None` when the shifted week does not fit in the calendar.
pub fn shift_weeks(anchor: NaiveDate, weeks: i64) -> Option<NaiveDate> {
    let days = Days::new(weeks.unsigned_abs().checked_mul(DAYS_PER_WEEK as u64)?);
    let shifted = if weeks >= 0 {
        anchor.checked_add_days(days)?
    } else {
        anchor.checked_sub_days(days)?
    };

    // Monday through Sunday must all be representable.
    let offset = Days::new(u64::from(shifted.weekday().num_days_from_monday()));
    shifted
        .checked_sub_days(offset)?
        .checked_add_days(Days::new(DAYS_PER_WEEK as u64 - 1))?;
    Some(shifted)
}

/// Today's calendar date as seen in `timezone`.
pub fn today_in<Tz: TimeZone>(timezone: &Tz) -> NaiveDate {
    Utc::now().with_timezone(timezone).date_naive()
}

/// Column header label, e.g. `Mon, May 6`.
pub fn display_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}
