//! Save-control gating driven by per-field dirty state

use crate::control::{FormControl, SubmitControl};
use crate::gate::{SubmitDecision, SubmitGate};

/// Tracks every field of a form against its default value and enables the
/// save control only while at least one differs.
///
/// The save control starts disabled: a pristine form is never submittable,
/// even when it was rendered pre-filled with values the user would happily
/// save unchanged.
///
/// # Examples
///
/// ```
/// use formgate::control::{FieldControl, FormControl, SubmitControl};
/// use formgate::gates::DirtyStateGate;
///
/// let name = FieldControl::new("name").with_default_value("John");
/// let save = SubmitControl::new();
/// let form = FormControl::new().with_field(name.clone()).with_save(save.clone());
///
/// let gate = DirtyStateGate::bind(&form).unwrap();
/// assert!(save.is_disabled());
///
/// name.set_value("Jane");
/// gate.notify_input();
/// assert!(!save.is_disabled());
/// ```
pub struct DirtyStateGate {
	form: FormControl,
	save: SubmitControl,
}

impl DirtyStateGate {
	/// Bind to a form, disabling its save control.
	///
	/// A form without a save control is skipped entirely: `None` is
	/// returned and nothing on the form is touched.
	pub fn bind(form: &FormControl) -> Option<Self> {
		let save = form.save()?;
		save.set_disabled(true);
		Some(Self {
			form: form.clone(),
			save,
		})
	}

	/// Bind every form that carries a save control, independently
	///
	/// # Examples
	///
	/// ```
	/// use formgate::control::{FormControl, SubmitControl};
	/// use formgate::gates::DirtyStateGate;
	///
	/// let with_save = FormControl::new().with_save(SubmitControl::new());
	/// let without_save = FormControl::new();
	///
	/// let gates = DirtyStateGate::bind_all(&[with_save, without_save]);
	/// assert_eq!(gates.len(), 1);
	/// ```
	pub fn bind_all(forms: &[FormControl]) -> Vec<Self> {
		forms.iter().filter_map(Self::bind).collect()
	}

	/// Recompute dirty state after any tracked field changed
	pub fn notify_input(&self) {
		self.save.set_disabled(!self.is_dirty());
	}

	/// Whether any tracked field's value differs from its default
	pub fn is_dirty(&self) -> bool {
		self.form.fields().iter().any(|field| field.is_dirty())
	}
}

impl SubmitGate for DirtyStateGate {
	/// Cancel when the form's native constraint validation fails.
	///
	/// The "validated" styling marker is set on every attempt, valid or
	/// not, so the page shows its validation feedback either way.
	fn review_submit(&self) -> SubmitDecision {
		let valid = self.form.check_validity();
		self.form.mark_validated();

		if valid {
			SubmitDecision::Proceed
		} else {
			tracing::debug!("submission cancelled: native validation failed");
			SubmitDecision::Cancel
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::control::FieldControl;

	fn form_with_save(fields: Vec<FieldControl>) -> (FormControl, SubmitControl) {
		let save = SubmitControl::new();
		let mut form = FormControl::new().with_save(save.clone());
		for field in fields {
			form = form.with_field(field);
		}
		(form, save)
	}

	#[test]
	fn test_bind_disables_save_control() {
		let (form, save) = form_with_save(vec![FieldControl::new("name")]);

		let _gate = DirtyStateGate::bind(&form).unwrap();

		assert!(save.is_disabled());
	}

	#[test]
	fn test_form_without_save_control_is_skipped() {
		let form = FormControl::new().with_field(FieldControl::new("name"));
		assert!(DirtyStateGate::bind(&form).is_none());
	}

	#[test]
	fn test_edit_enables_save() {
		let name = FieldControl::new("name").with_default_value("John");
		let (form, save) = form_with_save(vec![name.clone()]);
		let gate = DirtyStateGate::bind(&form).unwrap();

		name.set_value("Jane");
		gate.notify_input();

		assert!(!save.is_disabled());
	}

	#[test]
	fn test_reverting_edit_disables_save_again() {
		let name = FieldControl::new("name").with_default_value("John");
		let (form, save) = form_with_save(vec![name.clone()]);
		let gate = DirtyStateGate::bind(&form).unwrap();

		name.set_value("Jane");
		gate.notify_input();
		name.set_value("John");
		gate.notify_input();

		assert!(save.is_disabled());
	}

	#[test]
	fn test_any_dirty_field_is_enough() {
		let first = FieldControl::new("first_name").with_default_value("John");
		let last = FieldControl::new("last_name").with_default_value("Lennon");
		let (form, save) = form_with_save(vec![first, last.clone()]);
		let gate = DirtyStateGate::bind(&form).unwrap();

		last.set_value("McCartney");
		gate.notify_input();

		assert!(!save.is_disabled());
	}

	#[test]
	fn test_prefilled_pristine_form_stays_disabled() {
		let name = FieldControl::new("name").with_default_value("John");
		let (form, save) = form_with_save(vec![name]);
		let gate = DirtyStateGate::bind(&form).unwrap();

		gate.notify_input();

		assert!(save.is_disabled());
	}

	#[test]
	fn test_submit_on_invalid_form_is_cancelled() {
		let email = FieldControl::new("email");
		email.set_validity(false);
		let (form, _save) = form_with_save(vec![email]);
		let gate = DirtyStateGate::bind(&form).unwrap();

		let decision = gate.review_submit();

		assert!(decision.is_cancelled());
		assert!(form.is_validated());
	}

	#[test]
	fn test_submit_on_valid_form_proceeds_and_still_marks_validated() {
		let email = FieldControl::new("email");
		let (form, _save) = form_with_save(vec![email]);
		let gate = DirtyStateGate::bind(&form).unwrap();

		let decision = gate.review_submit();

		assert_eq!(decision, SubmitDecision::Proceed);
		assert!(form.is_validated());
	}

	#[test]
	fn test_multiple_forms_are_independent() {
		let profile_name = FieldControl::new("name").with_default_value("John");
		let (profile, profile_save) = form_with_save(vec![profile_name.clone()]);
		let (settings, settings_save) = form_with_save(vec![
			FieldControl::new("timezone").with_default_value("UTC"),
		]);

		let gates = DirtyStateGate::bind_all(&[profile, settings]);
		assert_eq!(gates.len(), 2);

		profile_name.set_value("Jane");
		for gate in &gates {
			gate.notify_input();
		}

		assert!(!profile_save.is_disabled());
		assert!(settings_save.is_disabled());
	}
}
