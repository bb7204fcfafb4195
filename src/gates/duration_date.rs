//! Derived end-date computation from a start date and a free-text duration

use std::time::Duration;

use chrono::NaiveDate;

use crate::control::{FieldControl, HighlightToken};
use crate::duration::{DurationSpec, advance_date};

/// Message shown by the host's blocking alert when a past start date is
/// chosen
pub const PAST_DATE_ALERT: &str =
	"Start date cannot be in the past. Please select a date today or in the future.";

const ISO_DATE: &str = "%Y-%m-%d";

/// Options for [`DurationDateDeriver`]
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use formgate::gates::DeriverOptions;
///
/// let options = DeriverOptions::new();
/// assert_eq!(options.highlight_duration(), Duration::from_millis(1000));
///
/// let options = options.with_highlight_duration(Duration::from_millis(250));
/// assert_eq!(options.highlight_duration(), Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeriverOptions {
	highlight_duration: Duration,
}

impl DeriverOptions {
	pub fn new() -> Self {
		Self {
			highlight_duration: Duration::from_millis(1000),
		}
	}

	/// Set how long the derived field stays highlighted after a write
	pub fn with_highlight_duration(mut self, highlight_duration: Duration) -> Self {
		self.highlight_duration = highlight_duration;
		self
	}

	pub fn highlight_duration(&self) -> Duration {
		self.highlight_duration
	}
}

impl Default for DeriverOptions {
	fn default() -> Self {
		Self::new()
	}
}

/// Outcome of one derivation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivation {
	/// The end date was written and highlighted. The host fires `revert`
	/// back through [`DurationDateDeriver::revert_highlight`] once the
	/// highlight delay has elapsed.
	Written {
		end: NaiveDate,
		revert: HighlightToken,
	},
	/// Inputs were missing or unreadable; the end field was left at its
	/// previous value
	Skipped,
}

/// Outcome of a start-date change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartDateOutcome {
	/// The start date passed the past-date check and a derivation was
	/// attempted
	Accepted(Derivation),
	/// The start date preceded today: the field was cleared and no
	/// derivation ran. The host shows [`PAST_DATE_ALERT`] as a blocking
	/// alert.
	RejectedPast,
}

/// Computes an end date from a start date and a free-text duration,
/// writing it into a dependent field.
///
/// Derivation is a pure function of the two source values: re-running it
/// with unchanged inputs writes the same end date. Unreadable input never
/// surfaces to the user; the dependent field simply keeps its last value.
///
/// # Examples
///
/// ```
/// use formgate::control::FieldControl;
/// use formgate::gates::{Derivation, DurationDateDeriver};
///
/// let start = FieldControl::new("start_date").with_default_value("2025-01-15");
/// let duration = FieldControl::new("duration").with_default_value("3 months");
/// let end = FieldControl::new("end_date");
///
/// let deriver = DurationDateDeriver::bind(&start, &duration, &end);
/// assert_eq!(end.value(), "2025-04-15");
///
/// duration.set_value("1 year");
/// let outcome = deriver.duration_changed();
/// assert!(matches!(outcome, Derivation::Written { .. }));
/// assert_eq!(end.value(), "2026-01-15");
/// ```
pub struct DurationDateDeriver {
	start: FieldControl,
	duration: FieldControl,
	end: FieldControl,
	options: DeriverOptions,
}

impl DurationDateDeriver {
	/// Bind to the three fields and attempt one derivation immediately,
	/// picking up whatever values the page was rendered with
	pub fn bind(start: &FieldControl, duration: &FieldControl, end: &FieldControl) -> Self {
		Self::bind_with(start, duration, end, DeriverOptions::new())
	}

	pub fn bind_with(
		start: &FieldControl,
		duration: &FieldControl,
		end: &FieldControl,
		options: DeriverOptions,
	) -> Self {
		let deriver = Self {
			start: start.clone(),
			duration: duration.clone(),
			end: end.clone(),
			options,
		};
		deriver.derive();
		deriver
	}

	/// Handle a change to the start date.
	///
	/// The past-date check runs first: a start date strictly before
	/// `today` clears the field and skips derivation. `today` is the
	/// host's current calendar day, typically
	/// `chrono::Local::now().date_naive()`; taking it as a parameter keeps
	/// the check clock-free.
	pub fn start_date_changed(&self, today: NaiveDate) -> StartDateOutcome {
		let raw = self.start.value();
		if let Ok(chosen) = NaiveDate::parse_from_str(raw.trim(), ISO_DATE)
			&& chosen < today
		{
			tracing::warn!(chosen = %chosen, today = %today, "start date in the past rejected");
			self.start.clear();
			return StartDateOutcome::RejectedPast;
		}
		StartDateOutcome::Accepted(self.derive())
	}

	/// Handle a change to the duration text. Always attempts derivation;
	/// the past-date check belongs to the start-date path only.
	pub fn duration_changed(&self) -> Derivation {
		self.derive()
	}

	/// Attempt a derivation from the current field values.
	///
	/// On success the end field is overwritten with the ISO date and
	/// transiently highlighted; any pending highlight revert is
	/// invalidated, so overlapping derivations cannot strobe the field.
	pub fn derive(&self) -> Derivation {
		let start_raw = self.start.value();
		let duration_raw = self.duration.value();

		if start_raw.trim().is_empty() || duration_raw.trim().is_empty() {
			tracing::debug!("derivation skipped: missing start date or duration");
			return Derivation::Skipped;
		}

		let Ok(start) = NaiveDate::parse_from_str(start_raw.trim(), ISO_DATE) else {
			tracing::debug!(start = %start_raw.trim(), "derivation skipped: unreadable start date");
			return Derivation::Skipped;
		};

		let spec = match DurationSpec::parse(&duration_raw) {
			Ok(spec) => spec,
			Err(error) => {
				tracing::debug!(%error, duration = %duration_raw.trim(), "derivation skipped");
				return Derivation::Skipped;
			}
		};

		let Some(end) = advance_date(start, spec) else {
			tracing::debug!(start = %start, amount = spec.amount, "derivation skipped: end date out of range");
			return Derivation::Skipped;
		};

		self.end.set_value(end.format(ISO_DATE).to_string());
		let revert = self.end.begin_highlight();
		tracing::debug!(start = %start, end = %end, "end date derived");

		Derivation::Written { end, revert }
	}

	/// Fire a highlight revert scheduled by an earlier derivation.
	///
	/// Returns `false` when the token was invalidated by a newer
	/// derivation, in which case the highlight is left alone.
	pub fn revert_highlight(&self, token: HighlightToken) -> bool {
		self.end.end_highlight(token)
	}

	pub fn options(&self) -> &DeriverOptions {
		&self.options
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn date(y: i32, m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, d).unwrap()
	}

	fn fields(start: &str, duration: &str) -> (FieldControl, FieldControl, FieldControl) {
		(
			FieldControl::new("start_date").with_default_value(start),
			FieldControl::new("duration").with_default_value(duration),
			FieldControl::new("end_date"),
		)
	}

	#[rstest]
	#[case("2025-01-15", "3 months", "2025-04-15")]
	#[case("2025-01-15", "1 year", "2026-01-15")]
	#[case("2025-01-31", "1 month", "2025-02-28")]
	#[case("2025-01-15", "18 Months", "2026-07-15")]
	fn test_bind_derives_from_rendered_values(
		#[case] start: &str,
		#[case] duration: &str,
		#[case] expected: &str,
	) {
		// Arrange
		let (start, duration, end) = fields(start, duration);

		// Act
		let _deriver = DurationDateDeriver::bind(&start, &duration, &end);

		// Assert
		assert_eq!(end.value(), expected);
		assert!(end.is_highlighted());
	}

	#[rstest]
	#[case("5")]
	#[case("5 weeks")]
	#[case("soon")]
	#[case("")]
	fn test_unreadable_duration_leaves_end_field_alone(#[case] duration_text: &str) {
		// Arrange
		let (start, duration, end) = fields("2025-01-15", "");
		end.set_value("2024-12-31");
		let deriver = DurationDateDeriver::bind(&start, &duration, &end);

		// Act
		duration.set_value(duration_text);
		let outcome = deriver.duration_changed();

		// Assert
		assert_eq!(outcome, Derivation::Skipped);
		assert_eq!(end.value(), "2024-12-31");
	}

	#[test]
	fn test_unreadable_start_date_skips_silently() {
		let (start, duration, end) = fields("someday", "3 months");
		let deriver = DurationDateDeriver::bind(&start, &duration, &end);

		let outcome = deriver.derive();

		assert_eq!(outcome, Derivation::Skipped);
		assert!(end.value().is_empty());
	}

	#[test]
	fn test_missing_start_date_skips() {
		let (start, duration, end) = fields("", "3 months");
		let deriver = DurationDateDeriver::bind(&start, &duration, &end);

		assert_eq!(deriver.derive(), Derivation::Skipped);
		assert!(end.value().is_empty());
	}

	#[test]
	fn test_past_start_date_is_cleared_and_alerted() {
		let (start, duration, end) = fields("2025-01-10", "3 months");
		let deriver = DurationDateDeriver::bind(&start, &duration, &end);
		let derived_at_bind = end.value();

		let outcome = deriver.start_date_changed(date(2025, 1, 15));

		assert_eq!(outcome, StartDateOutcome::RejectedPast);
		assert!(start.value().is_empty());
		// The end field keeps whatever the earlier derivation wrote
		assert_eq!(end.value(), derived_at_bind);
	}

	#[test]
	fn test_start_date_today_is_accepted() {
		let (start, duration, end) = fields("2025-01-15", "3 months");
		let deriver = DurationDateDeriver::bind(&start, &duration, &end);

		let outcome = deriver.start_date_changed(date(2025, 1, 15));

		assert!(matches!(
			outcome,
			StartDateOutcome::Accepted(Derivation::Written { .. })
		));
		assert_eq!(end.value(), "2025-04-15");
	}

	#[test]
	fn test_future_start_date_is_accepted() {
		let (start, duration, end) = fields("2025-06-01", "1 year");
		let deriver = DurationDateDeriver::bind(&start, &duration, &end);

		let outcome = deriver.start_date_changed(date(2025, 1, 15));

		assert!(matches!(outcome, StartDateOutcome::Accepted(_)));
		assert_eq!(end.value(), "2026-06-01");
	}

	#[test]
	fn test_unreadable_start_date_passes_the_past_check() {
		// A start value that does not parse cannot be "in the past"; the
		// attempt falls through to derivation, which skips on its own
		let (start, duration, end) = fields("someday", "3 months");
		let deriver = DurationDateDeriver::bind(&start, &duration, &end);

		let outcome = deriver.start_date_changed(date(2025, 1, 15));

		assert_eq!(outcome, StartDateOutcome::Accepted(Derivation::Skipped));
		assert_eq!(start.value(), "someday");
		assert!(end.value().is_empty());
	}

	#[test]
	fn test_duration_change_skips_the_past_check() {
		let (start, duration, end) = fields("2020-01-15", "3 months");
		let deriver = DurationDateDeriver::bind(&start, &duration, &end);

		duration.set_value("2 months");
		let outcome = deriver.duration_changed();

		assert!(matches!(outcome, Derivation::Written { .. }));
		assert_eq!(start.value(), "2020-01-15");
		assert_eq!(end.value(), "2020-03-15");
	}

	#[test]
	fn test_derivation_is_idempotent() {
		let (start, duration, end) = fields("2025-01-15", "3 months");
		let deriver = DurationDateDeriver::bind(&start, &duration, &end);

		let first = deriver.derive();
		let second = deriver.derive();

		let (Derivation::Written { end: a, .. }, Derivation::Written { end: b, .. }) =
			(first, second)
		else {
			panic!("expected both derivations to write");
		};
		assert_eq!(a, b);
		assert_eq!(end.value(), "2025-04-15");
	}

	#[test]
	fn test_highlight_reverts_through_the_token() {
		let (start, duration, end) = fields("2025-01-15", "3 months");
		let deriver = DurationDateDeriver::bind(&start, &duration, &end);

		let Derivation::Written { revert, .. } = deriver.derive() else {
			panic!("expected a written derivation");
		};
		assert!(end.is_highlighted());

		assert!(deriver.revert_highlight(revert));
		assert!(!end.is_highlighted());
	}

	#[test]
	fn test_new_derivation_invalidates_pending_revert() {
		let (start, duration, end) = fields("2025-01-15", "3 months");
		let deriver = DurationDateDeriver::bind(&start, &duration, &end);

		let Derivation::Written { revert: stale, .. } = deriver.derive() else {
			panic!("expected a written derivation");
		};

		duration.set_value("4 months");
		let Derivation::Written { revert: fresh, .. } = deriver.duration_changed() else {
			panic!("expected a written derivation");
		};

		// The stale revert fires after the second derivation and must not
		// clear the newer highlight
		assert!(!deriver.revert_highlight(stale));
		assert!(end.is_highlighted());

		assert!(deriver.revert_highlight(fresh));
		assert!(!end.is_highlighted());
	}

	#[test]
	fn test_options_default_highlight_duration() {
		let (start, duration, end) = fields("", "");
		let deriver = DurationDateDeriver::bind(&start, &duration, &end);

		assert_eq!(
			deriver.options().highlight_duration(),
			Duration::from_millis(1000)
		);
	}

	#[test]
	fn test_out_of_range_end_date_skips() {
		let (start, duration, end) = fields("2025-01-15", "500000 years");
		let deriver = DurationDateDeriver::bind(&start, &duration, &end);

		assert_eq!(deriver.derive(), Derivation::Skipped);
		assert!(end.value().is_empty());
	}
}
