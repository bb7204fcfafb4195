//! Control handles shared between a host page and its controllers
//!
//! Every handle is a cheap `Clone` wrapper around `Rc<RefCell<_>>` state:
//! the host and any number of controllers observe and mutate the same
//! underlying control, the way the elements of a rendered page are shared
//! by the scripts attached to it. All clones of a handle see every write.
//!
//! Handles are single-threaded by design (`Rc`, not `Arc`); controllers run
//! synchronously inside the host's event dispatch and never contend.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::upload::{DroppedFile, UploadSelection};

/// The kind of form control a [`FieldControl`] stands in for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
	#[default]
	Text,
	Select,
	TextArea,
	Date,
	Password,
}

/// Token returned when a transient highlight is applied to a field.
///
/// The host fires the token back after the highlight delay; a token made
/// stale by a newer highlight is ignored, so overlapping derivations cannot
/// revert each other's visual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightToken(u64);

#[derive(Debug)]
struct FieldState {
	name: String,
	kind: ControlKind,
	value: String,
	default_value: String,
	valid: bool,
	highlighted: bool,
	highlight_generation: u64,
}

/// A single value-bearing control: text input, select, textarea, date or
/// password input.
///
/// The control records the default value it was rendered with alongside the
/// current value, which is what dirty tracking compares against. Native
/// constraint validation is the host environment's job; its verdict is
/// mirrored onto the control through [`set_validity`](Self::set_validity).
///
/// # Examples
///
/// ```
/// use formgate::control::FieldControl;
///
/// let field = FieldControl::new("title").with_default_value("Internship");
/// assert_eq!(field.value(), "Internship");
/// assert!(!field.is_dirty());
///
/// field.set_value("Internship 2025");
/// assert!(field.is_dirty());
/// ```
#[derive(Debug, Clone)]
pub struct FieldControl {
	inner: Rc<RefCell<FieldState>>,
}

impl FieldControl {
	/// Create a control with an empty value and default value
	///
	/// # Examples
	///
	/// ```
	/// use formgate::control::{ControlKind, FieldControl};
	///
	/// let field = FieldControl::new("notes");
	/// assert_eq!(field.name(), "notes");
	/// assert_eq!(field.kind(), ControlKind::Text);
	/// assert!(field.value().is_empty());
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			inner: Rc::new(RefCell::new(FieldState {
				name: name.into(),
				kind: ControlKind::Text,
				value: String::new(),
				default_value: String::new(),
				valid: true,
				highlighted: false,
				highlight_generation: 0,
			})),
		}
	}

	/// Set the control kind
	///
	/// # Examples
	///
	/// ```
	/// use formgate::control::{ControlKind, FieldControl};
	///
	/// let field = FieldControl::new("department").with_kind(ControlKind::Select);
	/// assert_eq!(field.kind(), ControlKind::Select);
	/// ```
	pub fn with_kind(self, kind: ControlKind) -> Self {
		self.inner.borrow_mut().kind = kind;
		self
	}

	/// Set the value the control was rendered with.
	///
	/// Both the current value and the recorded default are set, matching a
	/// control that has not been edited since load.
	pub fn with_default_value(self, value: impl Into<String>) -> Self {
		{
			let mut state = self.inner.borrow_mut();
			let value = value.into();
			state.value = value.clone();
			state.default_value = value;
		}
		self
	}

	pub fn name(&self) -> String {
		self.inner.borrow().name.clone()
	}

	pub fn kind(&self) -> ControlKind {
		self.inner.borrow().kind
	}

	pub fn value(&self) -> String {
		self.inner.borrow().value.clone()
	}

	pub fn default_value(&self) -> String {
		self.inner.borrow().default_value.clone()
	}

	/// Overwrite the current value, leaving the recorded default untouched
	pub fn set_value(&self, value: impl Into<String>) {
		self.inner.borrow_mut().value = value.into();
	}

	/// Reset the current value to the empty string
	pub fn clear(&self) {
		self.inner.borrow_mut().value.clear();
	}

	/// Whether the current value differs from the value rendered at load
	///
	/// # Examples
	///
	/// ```
	/// use formgate::control::FieldControl;
	///
	/// let field = FieldControl::new("status").with_default_value("pending");
	/// field.set_value("approved");
	/// assert!(field.is_dirty());
	///
	/// field.set_value("pending");
	/// assert!(!field.is_dirty());
	/// ```
	pub fn is_dirty(&self) -> bool {
		let state = self.inner.borrow();
		state.value != state.default_value
	}

	/// Record the host environment's native constraint-validation verdict
	pub fn set_validity(&self, valid: bool) {
		self.inner.borrow_mut().valid = valid;
	}

	pub fn is_valid(&self) -> bool {
		self.inner.borrow().valid
	}

	/// Apply a transient highlight, invalidating any pending revert.
	///
	/// Returns the token the host fires back through
	/// [`end_highlight`](Self::end_highlight) once the highlight delay has
	/// elapsed.
	pub fn begin_highlight(&self) -> HighlightToken {
		let mut state = self.inner.borrow_mut();
		state.highlight_generation += 1;
		state.highlighted = true;
		HighlightToken(state.highlight_generation)
	}

	/// Revert a highlight. Returns `false` when the token is stale, in which
	/// case the visual state is left alone.
	///
	/// # Examples
	///
	/// ```
	/// use formgate::control::FieldControl;
	///
	/// let field = FieldControl::new("end_date");
	/// let first = field.begin_highlight();
	/// let second = field.begin_highlight();
	///
	/// assert!(!field.end_highlight(first));
	/// assert!(field.is_highlighted());
	///
	/// assert!(field.end_highlight(second));
	/// assert!(!field.is_highlighted());
	/// ```
	pub fn end_highlight(&self, token: HighlightToken) -> bool {
		let mut state = self.inner.borrow_mut();
		if token.0 != state.highlight_generation {
			return false;
		}
		state.highlighted = false;
		true
	}

	pub fn is_highlighted(&self) -> bool {
		self.inner.borrow().highlighted
	}
}

/// A submit or save control carrying only a disabled flag
///
/// # Examples
///
/// ```
/// use formgate::control::SubmitControl;
///
/// let save = SubmitControl::new();
/// assert!(!save.is_disabled());
///
/// save.set_disabled(true);
/// assert!(save.is_disabled());
/// ```
#[derive(Debug, Clone)]
pub struct SubmitControl {
	disabled: Rc<RefCell<bool>>,
}

impl SubmitControl {
	pub fn new() -> Self {
		Self {
			disabled: Rc::new(RefCell::new(false)),
		}
	}

	pub fn set_disabled(&self, disabled: bool) {
		*self.disabled.borrow_mut() = disabled;
	}

	pub fn is_disabled(&self) -> bool {
		*self.disabled.borrow()
	}
}

impl Default for SubmitControl {
	fn default() -> Self {
		Self::new()
	}
}

#[derive(Debug)]
struct FormState {
	fields: Vec<FieldControl>,
	save: Option<SubmitControl>,
	validated: bool,
}

/// A form: the value-bearing controls it contains, an optional save
/// control, and the cosmetic "validated" marker used as a styling hook for
/// validation feedback.
///
/// # Examples
///
/// ```
/// use formgate::control::{FieldControl, FormControl, SubmitControl};
///
/// let form = FormControl::new()
/// 	.with_field(FieldControl::new("first_name").with_default_value("John"))
/// 	.with_save(SubmitControl::new());
///
/// assert_eq!(form.fields().len(), 1);
/// assert!(form.save().is_some());
/// assert!(form.check_validity());
/// ```
#[derive(Debug, Clone)]
pub struct FormControl {
	inner: Rc<RefCell<FormState>>,
}

impl FormControl {
	pub fn new() -> Self {
		Self {
			inner: Rc::new(RefCell::new(FormState {
				fields: vec![],
				save: None,
				validated: false,
			})),
		}
	}

	pub fn with_field(self, field: FieldControl) -> Self {
		self.inner.borrow_mut().fields.push(field);
		self
	}

	pub fn with_save(self, save: SubmitControl) -> Self {
		self.inner.borrow_mut().save = Some(save);
		self
	}

	pub fn add_field(&self, field: FieldControl) {
		self.inner.borrow_mut().fields.push(field);
	}

	/// Handles on every tracked field
	pub fn fields(&self) -> Vec<FieldControl> {
		self.inner.borrow().fields.clone()
	}

	/// Handle on the save control, when the form has one
	pub fn save(&self) -> Option<SubmitControl> {
		self.inner.borrow().save.clone()
	}

	/// Aggregate native-validity verdict: every tracked field must hold a
	/// passing verdict from the host environment
	pub fn check_validity(&self) -> bool {
		self.inner.borrow().fields.iter().all(FieldControl::is_valid)
	}

	/// Set the cosmetic marker that makes validation feedback visible
	pub fn mark_validated(&self) {
		self.inner.borrow_mut().validated = true;
	}

	pub fn is_validated(&self) -> bool {
		self.inner.borrow().validated
	}
}

impl Default for FormControl {
	fn default() -> Self {
		Self::new()
	}
}

#[derive(Debug)]
struct MeterState {
	fill: f32,
	class_name: Option<String>,
	message: String,
}

/// A strength meter: a fill fraction, a CSS-class styling hook and a
/// message line. The class token is written for the stylesheet's benefit
/// and never inspected by controller logic.
///
/// # Examples
///
/// ```
/// use formgate::control::MeterControl;
///
/// let meter = MeterControl::new();
/// meter.set_fill(0.75);
/// meter.set_class(Some("medium"));
/// meter.set_message("Good - reasonably strong.");
///
/// assert_eq!(meter.fill(), 0.75);
/// assert_eq!(meter.class_name().as_deref(), Some("medium"));
///
/// meter.reset();
/// assert_eq!(meter.fill(), 0.0);
/// assert!(meter.class_name().is_none());
/// assert!(meter.message().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct MeterControl {
	inner: Rc<RefCell<MeterState>>,
}

impl MeterControl {
	pub fn new() -> Self {
		Self {
			inner: Rc::new(RefCell::new(MeterState {
				fill: 0.0,
				class_name: None,
				message: String::new(),
			})),
		}
	}

	pub fn set_fill(&self, fill: f32) {
		self.inner.borrow_mut().fill = fill;
	}

	pub fn fill(&self) -> f32 {
		self.inner.borrow().fill
	}

	pub fn set_class(&self, class_name: Option<&str>) {
		self.inner.borrow_mut().class_name = class_name.map(str::to_string);
	}

	pub fn class_name(&self) -> Option<String> {
		self.inner.borrow().class_name.clone()
	}

	pub fn set_message(&self, message: impl Into<String>) {
		self.inner.borrow_mut().message = message.into();
	}

	pub fn message(&self) -> String {
		self.inner.borrow().message.clone()
	}

	/// Zero-width, classless, empty-message state
	pub fn reset(&self) {
		let mut state = self.inner.borrow_mut();
		state.fill = 0.0;
		state.class_name = None;
		state.message.clear();
	}
}

impl Default for MeterControl {
	fn default() -> Self {
		Self::new()
	}
}

/// A file input's selection slot.
///
/// Both the native picker path and the drag-and-drop path write this one
/// slot, so there is a single source of truth for what has been chosen.
///
/// # Examples
///
/// ```
/// use formgate::control::FileControl;
/// use formgate::upload::DroppedFile;
///
/// let picker = FileControl::new();
/// assert!(!picker.present());
///
/// picker.assign(vec![DroppedFile::new("cv.pdf", 48_213)]);
/// assert!(picker.present());
/// assert_eq!(picker.first_name().as_deref(), Some("cv.pdf"));
/// ```
#[derive(Debug, Clone)]
pub struct FileControl {
	inner: Rc<RefCell<UploadSelection>>,
}

impl FileControl {
	pub fn new() -> Self {
		Self {
			inner: Rc::new(RefCell::new(UploadSelection::new())),
		}
	}

	/// Replace the selection; the previous selection is discarded
	pub fn assign(&self, files: Vec<DroppedFile>) {
		self.inner.borrow_mut().assign(files);
	}

	pub fn clear(&self) {
		self.inner.borrow_mut().clear();
	}

	pub fn present(&self) -> bool {
		self.inner.borrow().present()
	}

	pub fn first_name(&self) -> Option<String> {
		self.inner.borrow().first_name().map(str::to_string)
	}

	pub fn selection(&self) -> UploadSelection {
		self.inner.borrow().clone()
	}
}

impl Default for FileControl {
	fn default() -> Self {
		Self::new()
	}
}

#[derive(Debug)]
struct DropZoneState {
	hovering: bool,
	picker_opens: u32,
}

/// The drop target: a hover cue toggled by the drag lifecycle, and a
/// counter of picker-open delegations from clicks on the zone.
///
/// # Examples
///
/// ```
/// use formgate::control::DropZone;
///
/// let zone = DropZone::new();
/// assert!(!zone.is_hovering());
/// assert_eq!(zone.picker_opens(), 0);
///
/// zone.open_picker();
/// assert_eq!(zone.picker_opens(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DropZone {
	inner: Rc<RefCell<DropZoneState>>,
}

impl DropZone {
	pub fn new() -> Self {
		Self {
			inner: Rc::new(RefCell::new(DropZoneState {
				hovering: false,
				picker_opens: 0,
			})),
		}
	}

	pub fn set_hover(&self, hovering: bool) {
		self.inner.borrow_mut().hovering = hovering;
	}

	pub fn is_hovering(&self) -> bool {
		self.inner.borrow().hovering
	}

	/// Record a delegation to the native file picker
	pub fn open_picker(&self) {
		self.inner.borrow_mut().picker_opens += 1;
	}

	pub fn picker_opens(&self) -> u32 {
		self.inner.borrow().picker_opens
	}
}

impl Default for DropZone {
	fn default() -> Self {
		Self::new()
	}
}

/// An inline error region, hidden until revealed
///
/// # Examples
///
/// ```
/// use formgate::control::ErrorRegion;
///
/// let error = ErrorRegion::new();
/// assert!(!error.is_visible());
///
/// error.reveal();
/// assert!(error.is_visible());
/// ```
#[derive(Debug, Clone)]
pub struct ErrorRegion {
	visible: Rc<RefCell<bool>>,
}

impl ErrorRegion {
	pub fn new() -> Self {
		Self {
			visible: Rc::new(RefCell::new(false)),
		}
	}

	pub fn reveal(&self) {
		*self.visible.borrow_mut() = true;
	}

	pub fn hide(&self) {
		*self.visible.borrow_mut() = false;
	}

	pub fn is_visible(&self) -> bool {
		*self.visible.borrow()
	}
}

impl Default for ErrorRegion {
	fn default() -> Self {
		Self::new()
	}
}

/// A text display line, such as the rendered name of a chosen file
#[derive(Debug, Clone)]
pub struct InfoLabel {
	text: Rc<RefCell<String>>,
}

impl InfoLabel {
	pub fn new() -> Self {
		Self {
			text: Rc::new(RefCell::new(String::new())),
		}
	}

	pub fn set_text(&self, text: impl Into<String>) {
		*self.text.borrow_mut() = text.into();
	}

	pub fn clear(&self) {
		self.text.borrow_mut().clear();
	}

	pub fn text(&self) -> String {
		self.text.borrow().clone()
	}
}

impl Default for InfoLabel {
	fn default() -> Self {
		Self::new()
	}
}
