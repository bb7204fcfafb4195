//! Password-strength meter state and submission gating

use crate::control::{FieldControl, MeterControl, SubmitControl};
use crate::gate::{SubmitDecision, SubmitGate};
use crate::strength::{StrengthPolicy, StrengthScorer};

/// Feeds the password field to a [`StrengthScorer`] on every keystroke,
/// maps the score onto the meter, and gates submission below the policy
/// threshold.
///
/// Without a scorer the gate is inert: nothing on the page is touched and
/// every submit attempt proceeds. The submit control is optional; without
/// one the meter and message are still maintained.
///
/// # Examples
///
/// ```
/// use formgate::control::{FieldControl, MeterControl, SubmitControl};
/// use formgate::gates::StrengthPolicyGate;
/// use formgate::strength::StrengthAssessment;
///
/// let password = FieldControl::new("new_password");
/// let meter = MeterControl::new();
/// let submit = SubmitControl::new();
///
/// // Score by length: one point per two characters
/// let scorer = |value: &str| StrengthAssessment::new((value.len() / 2).min(4) as u8);
/// let gate = StrengthPolicyGate::bind(
/// 	&password,
/// 	&meter,
/// 	Some(&submit),
/// 	Some(Box::new(scorer)),
/// );
///
/// // Bound against an empty field: reset state, submit disabled
/// assert!(submit.is_disabled());
///
/// password.set_value("longenough");
/// gate.password_input();
/// assert!(!submit.is_disabled());
/// assert_eq!(meter.class_name().as_deref(), Some("strong"));
/// ```
pub struct StrengthPolicyGate {
	field: FieldControl,
	meter: MeterControl,
	submit: Option<SubmitControl>,
	scorer: Option<Box<dyn StrengthScorer>>,
	policy: StrengthPolicy,
}

impl StrengthPolicyGate {
	/// Bind to the password field and meter, evaluating once against the
	/// field's current value (normally empty, yielding the reset state)
	pub fn bind(
		field: &FieldControl,
		meter: &MeterControl,
		submit: Option<&SubmitControl>,
		scorer: Option<Box<dyn StrengthScorer>>,
	) -> Self {
		Self::bind_with(field, meter, submit, scorer, StrengthPolicy::default())
	}

	pub fn bind_with(
		field: &FieldControl,
		meter: &MeterControl,
		submit: Option<&SubmitControl>,
		scorer: Option<Box<dyn StrengthScorer>>,
		policy: StrengthPolicy,
	) -> Self {
		let gate = Self {
			field: field.clone(),
			meter: meter.clone(),
			submit: submit.cloned(),
			scorer,
			policy,
		};
		gate.password_input();
		gate
	}

	/// Whether the gate was bound without a scorer and does nothing
	pub fn is_inert(&self) -> bool {
		self.scorer.is_none()
	}

	/// Re-evaluate after a keystroke in the password field
	pub fn password_input(&self) {
		let Some(scorer) = &self.scorer else {
			return;
		};

		let value = self.field.value();
		if value.is_empty() {
			self.meter.reset();
			if let Some(submit) = &self.submit {
				submit.set_disabled(true);
			}
			return;
		}

		let assessment = scorer.evaluate(&value);
		let band = assessment.band();

		self.meter.set_fill(assessment.fill());
		self.meter.set_class(Some(band.css_class()));

		let mut message = band.message().to_string();
		if let Some(warning) = assessment.warning() {
			if message.is_empty() {
				message = warning.to_string();
			} else {
				message.push_str(" - ");
				message.push_str(warning);
			}
		}
		self.meter.set_message(message);

		if let Some(submit) = &self.submit {
			submit.set_disabled(!self.policy.allows(assessment.score()));
		}
	}
}

impl SubmitGate for StrengthPolicyGate {
	fn review_submit(&self) -> SubmitDecision {
		let Some(scorer) = &self.scorer else {
			return SubmitDecision::Proceed;
		};

		let value = self.field.value();
		if value.is_empty() {
			tracing::debug!("submission cancelled: empty password");
			return SubmitDecision::Cancel;
		}

		let score = scorer.evaluate(&value).score();
		if self.policy.allows(score) {
			SubmitDecision::Proceed
		} else {
			tracing::debug!(score, "submission cancelled: password below policy threshold");
			SubmitDecision::Cancel
		}
	}
}
