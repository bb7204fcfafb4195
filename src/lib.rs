//! Form gating and derived-field controllers for server-rendered pages
//!
//! This crate provides the client-side behaviors of a form-driven page as
//! headless, synchronously driven controllers:
//! - Dirty-state tracking that enables a save control only when a field
//!   differs from its default value
//! - A derived end-date field computed from a start date and a free-text
//!   duration, with a transient highlight on the dependent field
//! - A password-strength meter backed by a pluggable scorer, gating
//!   submission below a policy threshold
//! - A file-upload widget fed by both a picker and drag-and-drop, with
//!   presence gating at submit time
//!
//! Controllers bind to shared [`control`] handles instead of scanning a
//! document, so every behavior can be driven and observed without a DOM.
//! Each controller owns only the handles it was bound to; controllers
//! compose by being attached independently to the same page.

pub mod control;
pub mod duration;
pub mod gate;
pub mod gates;
pub mod strength;
pub mod upload;

pub use control::{
	ControlKind, DropZone, ErrorRegion, FieldControl, FileControl, FormControl, HighlightToken,
	InfoLabel, MeterControl, SubmitControl,
};
pub use duration::{DurationParseError, DurationSpec, DurationUnit, advance_date};
pub use gate::{SubmitDecision, SubmitGate};
pub use gates::{
	Derivation, DeriverOptions, DirtyStateGate, DurationDateDeriver, PAST_DATE_ALERT,
	StartDateOutcome, StrengthPolicyGate, UploadPresenceGate,
};
pub use strength::{MAX_SCORE, StrengthAssessment, StrengthBand, StrengthPolicy, StrengthScorer};
pub use upload::{DroppedFile, UploadSelection};
