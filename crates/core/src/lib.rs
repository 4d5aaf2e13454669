// Activity Directory
//
// This crate holds the framework-agnostic core of the Mergington activities
// service: the activity record, the directory of activities keyed by name,
// and the enroll/withdraw rules that guard each roster.
//
// Key design decisions:
// - The directory is reached through the ActivityStore trait so handlers never
//   depend on where activities live
// - The in-memory store makes each mutation atomic under a single lock
// - Errors distinguish caller rejections (not found, full, duplicate, not
//   registered) from store failures

pub mod activity;
pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

// Telemetry (console logging, optional OpenTelemetry export)
pub mod telemetry;

// Re-exports for convenience
pub use activity::{Activities, Activity};
pub use error::{DirectoryError, Result};
pub use memory::InMemoryActivityStore;
pub use traits::ActivityStore;
