pub mod audit;
pub mod call;
pub mod roster;
pub mod summary;

pub use audit::AuditEntry;
pub use call::{CallArtifact, CallRecord, Customer, UpstreamCall};
pub use roster::{ClientRecord, Roster};
pub use summary::{ActionItems, CaregiverSummary, Mood, SummaryDocument};
