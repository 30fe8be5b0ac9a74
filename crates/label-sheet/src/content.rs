//! Label content model
//!
//! Turns the raw form values into the ordered rows printed on every label.

use chrono::{Datelike, Months, NaiveDate};

use crate::constants::{DEFAULT_EXPIRY_YEARS, MAX_CUSTOM_LINES, MAX_LOT, MIN_LOT};
use crate::types::{FieldKey, FieldRow, LabelContent, LabelMode};

/// Raw values as entered in the form.
///
/// Custom lines longer than [`MAX_CHARS`](crate::constants::MAX_CHARS) are
/// rejected at the input boundary; the builder does not re-check them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabelInputs {
    pub mode: LabelMode,
    /// Manufacture date as `YYYY-MM-DD`; empty when unset
    pub mfd: String,
    pub expiry_years: u32,
    /// Lot number exactly as typed
    pub lot: String,
    pub custom_lines: [String; MAX_CUSTOM_LINES],
}

impl Default for LabelInputs {
    fn default() -> Self {
        Self {
            mode: LabelMode::default(),
            mfd: String::new(),
            expiry_years: DEFAULT_EXPIRY_YEARS,
            lot: "1".to_string(),
            custom_lines: Default::default(),
        }
    }
}

impl LabelInputs {
    /// Parsed manufacture date, if the field holds a valid one
    pub fn mfd_date(&self) -> Option<NaiveDate> {
        parse_date(&self.mfd)
    }
}

/// Build the label content for the current inputs.
///
/// Date modes without a valid manufacture date produce empty content rather
/// than an error; the grid is simply rendered blank.
pub fn build_content(inputs: &LabelInputs) -> LabelContent {
    if inputs.mode.is_custom() {
        let lines = inputs
            .custom_lines
            .iter()
            .filter(|line| !line.is_empty())
            .cloned()
            .collect();
        return LabelContent::CustomLines(lines);
    }

    let Some(mfd) = inputs.mfd_date() else {
        log::debug!(
            "No valid manufacture date ({:?}), rendering empty grid",
            inputs.mfd
        );
        return LabelContent::FieldRows(Vec::new());
    };

    let mut rows = vec![FieldRow::new(FieldKey::Mfd, format_date(mfd))];

    if inputs.mode.includes_exp() {
        let Some(exp) = add_years(mfd, inputs.expiry_years) else {
            log::debug!(
                "Expiry date out of range for {} + {} years",
                mfd,
                inputs.expiry_years
            );
            return LabelContent::FieldRows(Vec::new());
        };
        rows.push(FieldRow::new(FieldKey::Exp, format_date(exp)));
    }

    if inputs.mode.includes_lot() {
        let lot = parse_lot(&inputs.lot);
        rows.push(FieldRow::new(FieldKey::Lot, lot_code(mfd, lot)));
    }

    LabelContent::FieldRows(rows)
}

// =============================================================================
// Dates
// =============================================================================

/// Parse a `YYYY-MM-DD` date field
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Format as `DD.MM.YY`
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{:02}.{:02}.{:02}",
        date.day(),
        date.month(),
        date.year().rem_euclid(100)
    )
}

/// Add whole calendar years.
///
/// Month and day are kept; Feb 29 lands on Feb 28 when the target year is
/// not a leap year. Returns `None` past the end of the supported calendar.
pub fn add_years(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    let months = years.checked_mul(12)?;
    date.checked_add_months(Months::new(months))
}

// =============================================================================
// Lot Numbers
// =============================================================================

/// Clamp any integer into the lot range `1..=99`
pub fn clamp_lot(n: i64) -> u8 {
    n.clamp(MIN_LOT as i64, MAX_LOT as i64) as u8
}

/// Parse a lot field the way the generator reads it.
///
/// Takes the leading integer (`"12abc"` is 12), then clamps. Empty or
/// non-numeric input becomes 1.
pub fn parse_lot(value: &str) -> u8 {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return MIN_LOT;
    }

    // Anything that overflows i64 is far outside the range anyway
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    clamp_lot(if negative { -magnitude } else { magnitude })
}

/// Filter applied to the lot field while the user types.
///
/// Non-digits are removed and the value is clamped, but an empty field stays
/// empty so it can be cleared and retyped.
pub fn sanitize_lot_field(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return digits;
    }
    let n = digits.parse::<i64>().unwrap_or(i64::MAX);
    clamp_lot(n).to_string()
}

/// Lot code `YYMM-NN` from the manufacture year/month and the lot number
pub fn lot_code(mfd: NaiveDate, lot: u8) -> String {
    format!(
        "{:02}{:02}-{:02}",
        mfd.year().rem_euclid(100),
        mfd.month(),
        lot
    )
}
