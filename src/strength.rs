//! Password-strength assessment and submission policy
//!
//! The scoring function itself is an external oracle; this module defines
//! the trait it plugs in through, the assessment it produces, and the
//! policy that maps its 0..=4 score onto meter state and a submission
//! decision.

use serde::{Deserialize, Serialize};

/// Highest score the oracle can report
pub const MAX_SCORE: u8 = 4;

/// An external password-strength oracle.
///
/// Treated as pure and synchronous: the same password yields the same
/// assessment, and nothing is cached between keystrokes.
///
/// Any `Fn(&str) -> StrengthAssessment` is a scorer, which keeps tests and
/// small hosts free of wrapper types:
///
/// # Examples
///
/// ```
/// use formgate::strength::{StrengthAssessment, StrengthScorer};
///
/// let scorer = |password: &str| StrengthAssessment::new(password.len().min(4) as u8);
/// assert_eq!(scorer.evaluate("abc").score(), 3);
/// ```
pub trait StrengthScorer {
	fn evaluate(&self, password: &str) -> StrengthAssessment;
}

impl<F> StrengthScorer for F
where
	F: Fn(&str) -> StrengthAssessment,
{
	fn evaluate(&self, password: &str) -> StrengthAssessment {
		self(password)
	}
}

/// One oracle verdict: a 0..=4 score and optional supplementary warning
/// text. Scores above [`MAX_SCORE`] from a misbehaving oracle are clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthAssessment {
	score: u8,
	warning: Option<String>,
}

impl StrengthAssessment {
	/// # Examples
	///
	/// ```
	/// use formgate::strength::StrengthAssessment;
	///
	/// let assessment = StrengthAssessment::new(7);
	/// assert_eq!(assessment.score(), 4);
	/// assert!(assessment.warning().is_none());
	/// ```
	pub fn new(score: u8) -> Self {
		Self {
			score: score.min(MAX_SCORE),
			warning: None,
		}
	}

	/// Attach the oracle's supplementary warning text
	///
	/// # Examples
	///
	/// ```
	/// use formgate::strength::StrengthAssessment;
	///
	/// let assessment = StrengthAssessment::new(2).with_warning("Avoid repeated characters");
	/// assert_eq!(assessment.warning(), Some("Avoid repeated characters"));
	/// ```
	pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
		self.warning = Some(warning.into());
		self
	}

	pub fn score(&self) -> u8 {
		self.score
	}

	pub fn warning(&self) -> Option<&str> {
		self.warning.as_deref()
	}

	/// Meter fill proportion, `score / 4`
	pub fn fill(&self) -> f32 {
		f32::from(self.score) / f32::from(MAX_SCORE)
	}

	pub fn band(&self) -> StrengthBand {
		StrengthBand::from_score(self.score)
	}

	/// Read an assessment from the oracle's wire shape,
	/// `{"score": 0..4, "feedback": {"warning": string|null}}`.
	///
	/// Returns `None` when the value does not carry a numeric score.
	///
	/// # Examples
	///
	/// ```
	/// use formgate::strength::StrengthAssessment;
	/// use serde_json::json;
	///
	/// let verdict = json!({"score": 2, "feedback": {"warning": "Too short"}});
	/// let assessment = StrengthAssessment::from_oracle(&verdict).unwrap();
	/// assert_eq!(assessment.score(), 2);
	/// assert_eq!(assessment.warning(), Some("Too short"));
	/// ```
	pub fn from_oracle(value: &serde_json::Value) -> Option<Self> {
		let score = value.get("score")?.as_u64()?;
		let score = u8::try_from(score).unwrap_or(MAX_SCORE);

		let warning = value
			.get("feedback")
			.and_then(|f| f.get("warning"))
			.and_then(|w| w.as_str())
			.map(str::to_string);

		let mut assessment = Self::new(score);
		assessment.warning = warning;
		Some(assessment)
	}
}

/// The visual and textual band a score maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthBand {
	VeryWeak,
	Weak,
	Medium,
	Strong,
}

impl StrengthBand {
	/// # Examples
	///
	/// ```
	/// use formgate::strength::StrengthBand;
	///
	/// assert_eq!(StrengthBand::from_score(0), StrengthBand::VeryWeak);
	/// assert_eq!(StrengthBand::from_score(1), StrengthBand::VeryWeak);
	/// assert_eq!(StrengthBand::from_score(2), StrengthBand::Weak);
	/// assert_eq!(StrengthBand::from_score(3), StrengthBand::Medium);
	/// assert_eq!(StrengthBand::from_score(4), StrengthBand::Strong);
	/// ```
	pub fn from_score(score: u8) -> Self {
		match score {
			0 | 1 => Self::VeryWeak,
			2 => Self::Weak,
			3 => Self::Medium,
			_ => Self::Strong,
		}
	}

	/// The styling hook written onto the meter for this band
	pub fn css_class(self) -> &'static str {
		match self {
			Self::VeryWeak => "very-weak",
			Self::Weak => "weak",
			Self::Medium => "medium",
			Self::Strong => "strong",
		}
	}

	/// The base message line shown for this band
	pub fn message(self) -> &'static str {
		match self {
			Self::VeryWeak => "Very weak - try a longer password with different characters.",
			Self::Weak => "Weak - consider adding more length and symbols.",
			Self::Medium => "Good - reasonably strong.",
			Self::Strong => "Strong - great!",
		}
	}
}

/// Submission policy over oracle scores
///
/// # Examples
///
/// ```
/// use formgate::strength::StrengthPolicy;
///
/// let policy = StrengthPolicy::new();
/// assert!(!policy.allows(2));
/// assert!(policy.allows(3));
///
/// let strict = StrengthPolicy::new().with_minimum_score(4);
/// assert!(!strict.allows(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthPolicy {
	minimum_score: u8,
}

impl StrengthPolicy {
	pub fn new() -> Self {
		Self { minimum_score: 3 }
	}

	pub fn with_minimum_score(mut self, minimum_score: u8) -> Self {
		self.minimum_score = minimum_score;
		self
	}

	pub fn minimum_score(&self) -> u8 {
		self.minimum_score
	}

	pub fn allows(&self, score: u8) -> bool {
		score >= self.minimum_score
	}
}

impl Default for StrengthPolicy {
	fn default() -> Self {
		Self::new()
	}
}
