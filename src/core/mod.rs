pub mod birthday;
pub mod fields;
pub mod normalize;
pub mod reconcile;

pub use birthday::derive_birth_date;
pub use normalize::normalize;
pub use reconcile::{MergeSummary, dedup_events, reconcile};
