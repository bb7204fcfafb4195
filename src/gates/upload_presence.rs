//! File-upload presence gating across the picker and drag-and-drop paths

use crate::control::{DropZone, ErrorRegion, FileControl, InfoLabel};
use crate::gate::{SubmitDecision, SubmitGate};
use crate::upload::DroppedFile;

/// Binds three interaction surfaces to one selection slot: clicking the
/// drop zone opens the native picker, the picker's change event captures a
/// chosen file, and drops assign their files into the same slot.
///
/// The slot is the single source of truth for presence; submit review asks
/// it directly rather than consulting a separate chosen-file flag.
///
/// # Examples
///
/// ```
/// use formgate::control::{DropZone, ErrorRegion, FileControl, InfoLabel};
/// use formgate::gate::SubmitGate;
/// use formgate::gates::UploadPresenceGate;
/// use formgate::upload::DroppedFile;
///
/// let zone = DropZone::new();
/// let picker = FileControl::new();
/// let info = InfoLabel::new();
/// let error = ErrorRegion::new();
/// let gate = UploadPresenceGate::bind(&zone, &picker, &info, &error);
///
/// // Submitting with nothing chosen reveals the error region
/// assert!(gate.review_submit().is_cancelled());
/// assert!(error.is_visible());
///
/// gate.dropped(vec![DroppedFile::new("cv.pdf", 48_213)]);
/// assert_eq!(info.text(), "cv.pdf");
/// assert!(!error.is_visible());
/// assert!(!gate.review_submit().is_cancelled());
/// ```
pub struct UploadPresenceGate {
	zone: DropZone,
	picker: FileControl,
	info: InfoLabel,
	error: ErrorRegion,
}

impl UploadPresenceGate {
	pub fn bind(
		zone: &DropZone,
		picker: &FileControl,
		info: &InfoLabel,
		error: &ErrorRegion,
	) -> Self {
		Self {
			zone: zone.clone(),
			picker: picker.clone(),
			info: info.clone(),
			error: error.clone(),
		}
	}

	/// A click on the drop zone delegates to the native file picker
	pub fn zone_clicked(&self) {
		self.zone.open_picker();
	}

	/// Handle the picker's change event.
	///
	/// A non-empty choice replaces the selection, renders the filename and
	/// clears any visible error. An empty choice empties the selection and
	/// the rendered filename; the error region is left as it was.
	pub fn picker_changed(&self, files: Vec<DroppedFile>) {
		if files.is_empty() {
			self.picker.clear();
			self.info.clear();
			return;
		}

		let name = files[0].name.clone();
		self.picker.assign(files);
		self.info.set_text(name);
		self.error.hide();
	}

	/// Dragged payload entered the zone
	pub fn drag_over(&self) {
		self.zone.set_hover(true);
	}

	/// Dragged payload left the zone without dropping
	pub fn drag_leave(&self) {
		self.zone.set_hover(false);
	}

	/// Handle a drop on the zone.
	///
	/// A drop carrying at least one file assigns those files into the
	/// picker's slot, renders the filename, clears any visible error and
	/// resets the hover cue. A drop without files is ignored; the host's
	/// drag-leave handling owns the cue in that case.
	pub fn dropped(&self, files: Vec<DroppedFile>) {
		if files.is_empty() {
			return;
		}

		let name = files[0].name.clone();
		self.picker.assign(files);
		self.info.set_text(name);
		self.error.hide();
		self.zone.set_hover(false);
	}
}

impl SubmitGate for UploadPresenceGate {
	fn review_submit(&self) -> SubmitDecision {
		if self.picker.present() {
			SubmitDecision::Proceed
		} else {
			tracing::debug!("submission cancelled: no file selected");
			self.error.reveal();
			SubmitDecision::Cancel
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn bound() -> (DropZone, FileControl, InfoLabel, ErrorRegion, UploadPresenceGate) {
		let zone = DropZone::new();
		let picker = FileControl::new();
		let info = InfoLabel::new();
		let error = ErrorRegion::new();
		let gate = UploadPresenceGate::bind(&zone, &picker, &info, &error);
		(zone, picker, info, error, gate)
	}

	#[test]
	fn test_zone_click_delegates_to_picker() {
		let (zone, _picker, _info, _error, gate) = bound();

		gate.zone_clicked();

		assert_eq!(zone.picker_opens(), 1);
	}

	#[test]
	fn test_picker_choice_renders_filename_and_clears_error() {
		let (_zone, picker, info, error, gate) = bound();
		error.reveal();

		gate.picker_changed(vec![DroppedFile::new("cv.pdf", 100)]);

		assert!(picker.present());
		assert_eq!(info.text(), "cv.pdf");
		assert!(!error.is_visible());
	}

	#[test]
	fn test_empty_picker_choice_clears_selection_and_filename() {
		let (_zone, picker, info, error, gate) = bound();
		gate.picker_changed(vec![DroppedFile::new("cv.pdf", 100)]);
		error.reveal();

		gate.picker_changed(vec![]);

		assert!(!picker.present());
		assert!(info.text().is_empty());
		// An empty choice does not touch the error region
		assert!(error.is_visible());
	}

	#[test]
	fn test_drag_lifecycle_toggles_hover_cue() {
		let (zone, _picker, _info, _error, gate) = bound();

		gate.drag_over();
		assert!(zone.is_hovering());

		gate.drag_leave();
		assert!(!zone.is_hovering());
	}

	#[test]
	fn test_drop_assigns_files_and_resets_hover() {
		let (zone, picker, info, error, gate) = bound();
		error.reveal();
		gate.drag_over();

		gate.dropped(vec![
			DroppedFile::new("cv.pdf", 100),
			DroppedFile::new("letter.pdf", 50),
		]);

		assert!(picker.present());
		assert_eq!(picker.selection().files().len(), 2);
		assert_eq!(info.text(), "cv.pdf");
		assert!(!error.is_visible());
		assert!(!zone.is_hovering());
	}

	#[test]
	fn test_fileless_drop_is_ignored() {
		let (zone, picker, info, _error, gate) = bound();
		gate.drag_over();

		gate.dropped(vec![]);

		assert!(!picker.present());
		assert!(info.text().is_empty());
		// The cue stays until the host's drag handling clears it
		assert!(zone.is_hovering());
	}

	#[test]
	fn test_submit_without_selection_is_cancelled_with_error() {
		let (_zone, _picker, _info, error, gate) = bound();

		let decision = gate.review_submit();

		assert!(decision.is_cancelled());
		assert!(error.is_visible());
	}

	#[test]
	fn test_submit_with_selection_proceeds() {
		let (_zone, _picker, _info, error, gate) = bound();
		gate.dropped(vec![DroppedFile::new("cv.pdf", 100)]);

		let decision = gate.review_submit();

		assert_eq!(decision, SubmitDecision::Proceed);
		assert!(!error.is_visible());
	}

	#[test]
	fn test_last_write_wins_between_picker_and_drop() {
		let (_zone, picker, info, _error, gate) = bound();

		gate.picker_changed(vec![DroppedFile::new("draft.pdf", 100)]);
		gate.dropped(vec![DroppedFile::new("final.pdf", 200)]);

		assert_eq!(picker.first_name().as_deref(), Some("final.pdf"));
		assert_eq!(info.text(), "final.pdf");
	}

	#[test]
	fn test_selection_cleared_after_choice_cancels_again() {
		let (_zone, _picker, _info, error, gate) = bound();
		gate.picker_changed(vec![DroppedFile::new("cv.pdf", 100)]);
		gate.picker_changed(vec![]);

		let decision = gate.review_submit();

		assert!(decision.is_cancelled());
		assert!(error.is_visible());
	}
}
