// Core traits for pluggable backends
//
// The activity directory is reached only through ActivityStore:
// - In-memory implementation for the server and tests
// - A durable implementation can be added without touching the API layer

use async_trait::async_trait;

use crate::activity::{Activities, Activity};
use crate::error::Result;

// ============================================================================
// ActivityStore - The activity directory
// ============================================================================

/// Trait for listing activities and mutating their rosters
///
/// Implementations must make `enroll` and `withdraw` atomic: the guard checks
/// and the roster mutation happen as one step with respect to other callers.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Snapshot of every activity, keyed by name
    async fn list(&self) -> Result<Activities>;

    /// Look up a single activity by exact name
    async fn get(&self, name: &str) -> Result<Option<Activity>>;

    /// Append `email` to the roster of `name`
    ///
    /// Fails with `NotFound`, `Full`, or `Duplicate`, checked in that order.
    async fn enroll(&self, name: &str, email: &str) -> Result<()>;

    /// Remove `email` from the roster of `name`
    ///
    /// Fails with `NotFound` or `NotRegistered`, checked in that order.
    async fn withdraw(&self, name: &str, email: &str) -> Result<()>;

    /// Number of activities in the directory
    async fn count(&self) -> Result<usize> {
        Ok(self.list().await?.len())
    }
}
