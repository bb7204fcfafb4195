// One controller per file, one form behavior each
pub mod dirty_state;
pub mod duration_date;
pub mod strength_policy;
pub mod upload_presence;

pub use dirty_state::DirtyStateGate;
pub use duration_date::{
	Derivation, DeriverOptions, DurationDateDeriver, PAST_DATE_ALERT, StartDateOutcome,
};
pub use strength_policy::StrengthPolicyGate;
pub use upload_presence::UploadPresenceGate;
