// Activity service - business logic for the activity directory
//
// Wraps an ActivityStore with tracing spans and the confirmation messages
// returned to clients.

use mergington_core::telemetry::{attributes, directory_span_name};
use mergington_core::{Activities, ActivityStore, DirectoryError, Result};
use std::sync::Arc;
use tracing::Instrument;

pub struct ActivityService {
    store: Arc<dyn ActivityStore>,
}

impl ActivityService {
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Activities> {
        let span = tracing::debug_span!(
            "directory.list",
            "directory.operation" = attributes::operation::LIST,
        );
        self.store.list().instrument(span).await
    }

    /// Sign `email` up for `activity_name` and return the confirmation message
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<String> {
        let span = Self::mutation_span(attributes::operation::ENROLL, activity_name, email);

        async {
            let result = self.store.enroll(activity_name, email).await;
            Self::record_outcome(&result);

            result.map(|()| {
                tracing::info!(activity = %activity_name, email = %email, "Participant signed up");
                format!("Signed up {} for {}", email, activity_name)
            })
        }
        .instrument(span)
        .await
    }

    /// Remove `email` from `activity_name` and return the confirmation message
    pub async fn unregister(&self, activity_name: &str, email: &str) -> Result<String> {
        let span = Self::mutation_span(attributes::operation::WITHDRAW, activity_name, email);

        async {
            let result = self.store.withdraw(activity_name, email).await;
            Self::record_outcome(&result);

            result.map(|()| {
                tracing::info!(activity = %activity_name, email = %email, "Participant unregistered");
                format!("Unregistered {} from {}", email, activity_name)
            })
        }
        .instrument(span)
        .await
    }

    fn mutation_span(operation: &str, activity_name: &str, email: &str) -> tracing::Span {
        let span_name = directory_span_name(operation, activity_name);
        tracing::info_span!(
            "directory.mutation",
            "otel.name" = %span_name,
            "otel.kind" = "internal",
            "directory.operation" = operation,
            "activity.name" = %activity_name,
            "participant.email" = %email,
            "directory.outcome" = tracing::field::Empty,
        )
    }

    fn record_outcome(result: &Result<()>) {
        let outcome = match result {
            Ok(()) => "ok",
            Err(DirectoryError::NotFound { .. }) => "not_found",
            Err(DirectoryError::Full { .. }) => "full",
            Err(DirectoryError::Duplicate { .. }) => "duplicate",
            Err(DirectoryError::NotRegistered { .. }) => "not_registered",
            Err(DirectoryError::Internal(_)) => "error",
        };
        tracing::Span::current().record(attributes::OUTCOME, outcome);

        if let Err(e) = result {
            if e.is_rejection() {
                tracing::debug!(outcome, "Roster change rejected: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mergington_core::{Activity, InMemoryActivityStore};

    fn service() -> ActivityService {
        let mut activities = Activities::new();
        activities.insert(
            "Programming Class".to_string(),
            Activity::new("Learn programming", "Tuesdays", 3),
        );
        ActivityService::new(Arc::new(InMemoryActivityStore::new(activities)))
    }

    #[tokio::test]
    async fn test_signup_message_mentions_email_and_activity() {
        let service = service();

        let message = service
            .signup("Programming Class", "charlie@test.edu")
            .await
            .unwrap();

        assert_eq!(message, "Signed up charlie@test.edu for Programming Class");
    }

    #[tokio::test]
    async fn test_unregister_message() {
        let service = service();
        service
            .signup("Programming Class", "charlie@test.edu")
            .await
            .unwrap();

        let message = service
            .unregister("Programming Class", "charlie@test.edu")
            .await
            .unwrap();

        assert!(message.contains("Unregistered"));
        assert!(message.contains("charlie@test.edu"));
        assert!(service.list().await.unwrap()["Programming Class"]
            .participants
            .is_empty());
    }

    #[tokio::test]
    async fn test_errors_pass_through() {
        let service = service();

        let err = service
            .signup("Nonexistent Club", "eve@test.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::NotFound { .. }));

        let err = service
            .unregister("Programming Class", "grace@test.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::NotRegistered { .. }));
    }
}
