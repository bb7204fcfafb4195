//! The submission-gating contract shared by the form controllers

use serde::{Deserialize, Serialize};

/// Outcome of a gate reviewing a submit attempt
///
/// # Examples
///
/// ```
/// use formgate::gate::SubmitDecision;
///
/// assert!(SubmitDecision::Cancel.is_cancelled());
/// assert!(!SubmitDecision::Proceed.is_cancelled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitDecision {
	/// The submission may go through to the server
	Proceed,
	/// The submission is blocked; the gate has already surfaced its feedback
	Cancel,
}

impl SubmitDecision {
	pub fn is_cancelled(self) -> bool {
		matches!(self, SubmitDecision::Cancel)
	}
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// A controller that conditionally permits or blocks form submission.
///
/// Every gate follows the same shape: field mutations feed a derived state,
/// the derived state feeds dependent UI, and a submit attempt is reviewed
/// against it.
///
/// ```mermaid
/// flowchart LR
///     Mutation["field mutation"] --> Derived["recompute derived state"]
///     Derived --> Ui["dependent UI / fields"]
///     Submit["submit attempt"] --> Review["review_submit()"]
///     Review -->|Proceed| Server["submission"]
///     Review -->|Cancel| Feedback["inline feedback"]
/// ```
pub trait SubmitGate {
	/// Review a submit attempt against the gate's current derived state.
	///
	/// Gates apply their user-facing side effects (validation markers,
	/// error regions) before returning; the host only has to honor the
	/// decision.
	fn review_submit(&self) -> SubmitDecision;
}
