//! Time-range parsing
//!
//! Turns compact strings like `7d` or `2w` into a maximum file age in days.

use crate::error::AppError;

/// Maximum age, in whole calendar days, a file may have to be selected.
/// Weeks are normalized to days at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TimeWindow {
    days: u32,
}

impl TimeWindow {
    pub(crate) fn days(days: u32) -> Self {
        Self { days }
    }

    pub(crate) fn weeks(weeks: u32) -> Option<Self> {
        weeks.checked_mul(7).map(Self::days)
    }

    pub(crate) fn num_days(self) -> i64 {
        i64::from(self.days)
    }

    /// Inclusive upper bound; negative ages (future dates) always pass.
    pub(crate) fn admits(self, age_days: i64) -> bool {
        age_days <= self.num_days()
    }
}

/// Parse `<digits><unit>` with unit `d` or `w`.
///
/// `None` or an empty string means "no filter". Only the leading token is
/// read, so trailing characters after a valid prefix are ignored ("7dxyz" is
/// seven days).
pub(crate) fn parse_time_range(input: Option<&str>) -> Result<Option<TimeWindow>, AppError> {
    let Some(raw) = input else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(None);
    }

    let invalid = || AppError::InvalidTimeFormat {
        input: raw.to_string(),
    };

    let digits_len = raw.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(invalid());
    }
    let amount: u32 = raw[..digits_len].parse().map_err(|_| invalid())?;

    let window = match raw.as_bytes().get(digits_len) {
        Some(b'd') => Some(TimeWindow::days(amount)),
        Some(b'w') => TimeWindow::weeks(amount),
        _ => None,
    };
    window.map(Some).ok_or_else(invalid)
}
