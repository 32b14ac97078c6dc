use chrono::{Datelike, Local, Months, NaiveDate};

/// `YYYY-MM` key for a date.
pub(crate) fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Month containing "now" on the local clock.
pub(crate) fn current_month() -> String {
    month_key(Local::now().date_naive())
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// First day of a `YYYY-MM` month, or `None` if it isn't one.
pub(crate) fn parse_month(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.len() != 7 {
        return None;
    }
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").ok()
}

/// Move a `YYYY-MM` month forward or back. Invalid input comes back unchanged.
pub(crate) fn shift_month(month: &str, delta: i32) -> String {
    let Some(first) = parse_month(month) else {
        return month.to_string();
    };
    let shifted = if delta >= 0 {
        first.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        first.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.map_or_else(|| month.to_string(), month_key)
}

/// Short display label, e.g. `2025-07` → `Jul 2025`.
pub(crate) fn month_label(month: &str) -> String {
    match parse_month(month) {
        Some(d) => format!("{} {}", d.format("%b"), d.year()),
        None => month.to_string(),
    }
}
