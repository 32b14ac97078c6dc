use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::Transaction;

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"$1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Amount column text: `+$12.00` for income, `-$4.50` for expenses,
/// regardless of the stored sign.
pub(crate) fn format_signed(txn: &Transaction) -> String {
    let sign = if txn.is_income() { "+" } else { "-" };
    format!("{sign}{}", format_amount(txn.abs_amount()))
}

/// `"42.5%"`, or `"∞"` when the percentage is unbounded.
pub(crate) fn format_percent(pct: Option<Decimal>) -> String {
    match pct {
        Some(p) => format!("{:.1}%", p.round_dp(1)),
        None => "∞".to_string(),
    }
}

/// Fixed-width bar for a 0..=100 progress value.
pub(crate) fn progress_bar(progress: Decimal, width: usize) -> String {
    let ratio = (progress.to_f64().unwrap_or(0.0) / 100.0).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64) as usize).min(width);
    let empty = width - filled;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// The result is guaranteed to be at most `max` characters (counting "…" as one).
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Selected row of a list plus the first row scrolled into view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Cursor {
    pub(crate) index: usize,
    pub(crate) offset: usize,
}

impl Cursor {
    pub(crate) fn down(&mut self, len: usize, page: usize) {
        if self.index + 1 < len {
            self.index += 1;
            self.reveal(page);
        }
    }

    pub(crate) fn up(&mut self) {
        self.index = self.index.saturating_sub(1);
        self.offset = self.offset.min(self.index);
    }

    pub(crate) fn top(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn bottom(&mut self, len: usize, page: usize) {
        self.index = len.saturating_sub(1);
        self.reveal(page);
    }

    /// Pull the cursor back inside a list that shrank to `len` rows.
    pub(crate) fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
        self.offset = self.offset.min(self.index);
    }

    fn reveal(&mut self, page: usize) {
        let page = page.max(1);
        if self.index >= self.offset + page {
            self.offset = self.index + 1 - page;
        }
    }
}
