// In-memory activity directory
// Decision: Use parking_lot for thread-safe access
// Decision: One lock over the whole directory; enroll/withdraw hold the write
// lock across check and mutation so they are atomic
//
// All data is kept in process memory and lost on restart.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::activity::{Activities, Activity};
use crate::error::{DirectoryError, Result};
use crate::traits::ActivityStore;

// ============================================================================
// InMemoryActivityStore
// ============================================================================

/// In-memory activity directory
///
/// Created from a seed set at startup. Activities are never added or removed
/// afterwards; only their rosters change.
#[derive(Debug, Default)]
pub struct InMemoryActivityStore {
    activities: RwLock<Activities>,
}

impl InMemoryActivityStore {
    pub fn new(activities: Activities) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Replace the whole directory (useful for testing)
    pub fn reset(&self, activities: Activities) {
        *self.activities.write() = activities;
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn list(&self) -> Result<Activities> {
        Ok(self.activities.read().clone())
    }

    async fn get(&self, name: &str) -> Result<Option<Activity>> {
        Ok(self.activities.read().get(name).cloned())
    }

    async fn enroll(&self, name: &str, email: &str) -> Result<()> {
        let mut activities = self.activities.write();
        let activity = activities
            .get_mut(name)
            .ok_or_else(|| DirectoryError::not_found(name))?;

        if activity.is_full() {
            return Err(DirectoryError::full(name));
        }
        if activity.has_participant(email) {
            return Err(DirectoryError::duplicate(name, email));
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    async fn withdraw(&self, name: &str, email: &str) -> Result<()> {
        let mut activities = self.activities.write();
        let activity = activities
            .get_mut(name)
            .ok_or_else(|| DirectoryError::not_found(name))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| DirectoryError::not_registered(name, email))?;

        activity.participants.remove(position);
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.activities.read().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn fixture() -> InMemoryActivityStore {
        let mut activities = Activities::new();
        activities.insert(
            "Chess Club".to_string(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                2,
            )
            .with_participants(["alice@test.edu"]),
        );
        activities.insert(
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                3,
            ),
        );
        activities.insert(
            "Full Activity".to_string(),
            Activity::new("An activity at capacity", "Mondays, 2:00 PM - 3:00 PM", 1)
                .with_participants(["bob@test.edu"]),
        );
        InMemoryActivityStore::new(activities)
    }

    async fn roster(store: &InMemoryActivityStore, name: &str) -> Vec<String> {
        store.get(name).await.unwrap().unwrap().participants
    }

    #[tokio::test]
    async fn test_list_returns_all_activities() {
        let store = fixture();

        let activities = store.list().await.unwrap();

        assert_eq!(activities.len(), 3);
        assert_eq!(activities["Chess Club"].participants, vec!["alice@test.edu"]);
        assert!(activities["Programming Class"].participants.is_empty());
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_enroll_fills_to_capacity() {
        let store = fixture();

        for email in ["a@x", "b@x", "c@x"] {
            store.enroll("Programming Class", email).await.unwrap();
        }
        assert_eq!(
            roster(&store, "Programming Class").await,
            vec!["a@x", "b@x", "c@x"]
        );

        let err = store.enroll("Programming Class", "d@x").await.unwrap_err();
        assert!(matches!(err, DirectoryError::Full { .. }));
        assert_eq!(roster(&store, "Programming Class").await.len(), 3);
    }

    #[tokio::test]
    async fn test_enroll_duplicate_then_other() {
        let store = fixture();

        let err = store
            .enroll("Chess Club", "alice@test.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::Duplicate { .. }));
        assert_eq!(roster(&store, "Chess Club").await.len(), 1);

        store.enroll("Chess Club", "bob@test.edu").await.unwrap();
        assert_eq!(
            roster(&store, "Chess Club").await,
            vec!["alice@test.edu", "bob@test.edu"]
        );
    }

    #[tokio::test]
    async fn test_full_is_checked_before_duplicate() {
        let store = fixture();

        let err = store
            .enroll("Full Activity", "bob@test.edu")
            .await
            .unwrap_err();

        assert!(matches!(err, DirectoryError::Full { .. }));
    }

    #[tokio::test]
    async fn test_enroll_unknown_activity_leaves_directory_untouched() {
        let store = fixture();
        let before = store.list().await.unwrap();

        let err = store
            .enroll("Nonexistent Club", "eve@test.edu")
            .await
            .unwrap_err();

        assert!(matches!(err, DirectoryError::NotFound { .. }));
        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_activity_names_are_case_sensitive() {
        let store = fixture();

        let err = store.enroll("chess club", "eve@test.edu").await.unwrap_err();

        assert!(matches!(err, DirectoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_withdraw_not_registered() {
        let store = fixture();
        let before = store.list().await.unwrap();

        let err = store
            .withdraw("Chess Club", "grace@test.edu")
            .await
            .unwrap_err();

        assert!(matches!(err, DirectoryError::NotRegistered { .. }));
        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_withdraw_unknown_activity() {
        let store = fixture();

        let err = store
            .withdraw("Nonexistent Club", "alice@test.edu")
            .await
            .unwrap_err();

        assert!(matches!(err, DirectoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_withdraw_frees_spot() {
        let store = fixture();

        store
            .withdraw("Full Activity", "bob@test.edu")
            .await
            .unwrap();
        store
            .enroll("Full Activity", "henry@test.edu")
            .await
            .unwrap();

        assert_eq!(roster(&store, "Full Activity").await, vec!["henry@test.edu"]);
    }

    #[tokio::test]
    async fn test_withdraw_preserves_order_of_others() {
        let store = fixture();
        for email in ["jack@test.edu", "kate@test.edu", "liam@test.edu"] {
            store.enroll("Programming Class", email).await.unwrap();
        }

        store
            .withdraw("Programming Class", "kate@test.edu")
            .await
            .unwrap();

        assert_eq!(
            roster(&store, "Programming Class").await,
            vec!["jack@test.edu", "liam@test.edu"]
        );
    }

    #[tokio::test]
    async fn test_enroll_withdraw_enroll_round_trip() {
        let store = fixture();
        let before = store.list().await.unwrap();

        store.enroll("Chess Club", "zoe@test.edu").await.unwrap();
        store.withdraw("Chess Club", "zoe@test.edu").await.unwrap();
        assert_eq!(store.list().await.unwrap(), before);

        store.enroll("Chess Club", "zoe@test.edu").await.unwrap();
        assert_eq!(
            roster(&store, "Chess Club").await,
            vec!["alice@test.edu", "zoe@test.edu"]
        );
    }

    #[tokio::test]
    async fn test_reset_replaces_directory() {
        let store = fixture();

        store.reset(Activities::new());

        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_enrollments_never_exceed_capacity() {
        let store = Arc::new(fixture());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .enroll("Programming Class", &format!("student{}@test.edu", i))
                        .await
                })
            })
            .collect();

        let mut succeeded = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => succeeded += 1,
                Err(e) => assert!(matches!(e, DirectoryError::Full { .. })),
            }
        }

        assert_eq!(succeeded, 3);
        let activity = store.get("Programming Class").await.unwrap().unwrap();
        assert_eq!(activity.participants.len(), 3);
        assert!(activity.validate().is_ok());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicate_enrollments_admit_one() {
        let store = Arc::new(fixture());

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.enroll("Chess Club", "same@test.edu").await })
            })
            .collect();

        let mut succeeded = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                succeeded += 1;
            }
        }

        assert_eq!(succeeded, 1);
        assert_eq!(
            roster(&store, "Chess Club").await,
            vec!["alice@test.edu", "same@test.edu"]
        );
    }
}
