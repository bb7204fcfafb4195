//! Free-text duration parsing and calendar date arithmetic
//!
//! Durations arrive as human-entered text ("3 months", "1 year"). The
//! grammar is deliberately loose: the text is lower-cased and split on
//! whitespace, the first token is a signed whole amount, and the second
//! token names the unit by substring containment, so plural and decorated
//! forms are accepted. Anything that does not fit yields a typed error the
//! caller is expected to absorb silently.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar unit of a parsed duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
	Month,
	Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DurationParseError {
	#[error("Enter a duration with an amount and a unit")]
	TooFewTokens,
	#[error("Enter a whole number of months or years")]
	InvalidAmount,
	#[error("Enter a duration in months or years")]
	UnknownUnit,
}

/// A duration in whole calendar units
///
/// # Examples
///
/// ```
/// use formgate::duration::{DurationSpec, DurationUnit};
///
/// let spec = DurationSpec::parse("3 Months").unwrap();
/// assert_eq!(spec, DurationSpec::new(3, DurationUnit::Month));
/// assert_eq!(spec.total_months(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationSpec {
	pub amount: i32,
	pub unit: DurationUnit,
}

impl DurationSpec {
	pub fn new(amount: i32, unit: DurationUnit) -> Self {
		Self { amount, unit }
	}

	/// Parse the free-text duration grammar.
	///
	/// The text is lower-cased and split on whitespace. The first token is
	/// the signed amount; the second names the unit, matched by substring
	/// containment so "months", "month(s)" and similar all resolve. A token
	/// naming both units resolves to months. Tokens past the second are
	/// ignored.
	///
	/// # Examples
	///
	/// ```
	/// use formgate::duration::{DurationParseError, DurationSpec, DurationUnit};
	///
	/// assert_eq!(
	/// 	DurationSpec::parse("6 months"),
	/// 	Ok(DurationSpec::new(6, DurationUnit::Month))
	/// );
	/// assert_eq!(
	/// 	DurationSpec::parse("1 YEAR"),
	/// 	Ok(DurationSpec::new(1, DurationUnit::Year))
	/// );
	/// assert_eq!(DurationSpec::parse("5"), Err(DurationParseError::TooFewTokens));
	/// assert_eq!(DurationSpec::parse("5 weeks"), Err(DurationParseError::UnknownUnit));
	/// ```
	pub fn parse(text: &str) -> Result<Self, DurationParseError> {
		let lowered = text.to_lowercase();
		let mut tokens = lowered.split_whitespace();

		let amount_token = tokens.next().ok_or(DurationParseError::TooFewTokens)?;
		let unit_token = tokens.next().ok_or(DurationParseError::TooFewTokens)?;

		let amount: i32 = amount_token
			.parse()
			.map_err(|_| DurationParseError::InvalidAmount)?;

		let unit = if unit_token.contains("month") {
			DurationUnit::Month
		} else if unit_token.contains("year") {
			DurationUnit::Year
		} else {
			return Err(DurationParseError::UnknownUnit);
		};

		Ok(Self { amount, unit })
	}

	/// Total number of months this duration spans
	pub fn total_months(&self) -> i64 {
		match self.unit {
			DurationUnit::Month => i64::from(self.amount),
			DurationUnit::Year => i64::from(self.amount) * 12,
		}
	}
}

/// Advance `start` by `spec` using calendar month arithmetic.
///
/// Month-end overflow follows [`chrono::Months`]: the day is clamped to the
/// last day of the target month, so `2025-01-31` plus one month is
/// `2025-02-28`. Year steps are twelve month steps, which keeps the same
/// clamping for `2024-02-29` plus one year. Returns `None` when the result
/// falls outside chrono's representable range.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use formgate::duration::{DurationSpec, DurationUnit, advance_date};
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// let end = advance_date(start, DurationSpec::new(3, DurationUnit::Month)).unwrap();
/// assert_eq!(end, NaiveDate::from_ymd_opt(2025, 4, 15).unwrap());
/// ```
pub fn advance_date(start: NaiveDate, spec: DurationSpec) -> Option<NaiveDate> {
	let months = spec.total_months();
	let magnitude = u32::try_from(months.unsigned_abs()).ok()?;
	if months >= 0 {
		start.checked_add_months(Months::new(magnitude))
	} else {
		start.checked_sub_months(Months::new(magnitude))
	}
}
