// Error types for directory operations

use thiserror::Error;

/// Result type alias for directory operations
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Errors that can occur when reading or mutating the activity directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// No activity with this name
    #[error("Activity not found")]
    NotFound { activity: String },

    /// Roster already at max_participants
    #[error("Activity is full")]
    Full { activity: String },

    /// Email already on the roster
    #[error("{email} is already signed up")]
    Duplicate { activity: String, email: String },

    /// Email not on the roster
    #[error("{email} is not registered for this activity")]
    NotRegistered { activity: String, email: String },

    /// Backing store failure
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DirectoryError {
    pub fn not_found(activity: impl Into<String>) -> Self {
        DirectoryError::NotFound {
            activity: activity.into(),
        }
    }

    pub fn full(activity: impl Into<String>) -> Self {
        DirectoryError::Full {
            activity: activity.into(),
        }
    }

    pub fn duplicate(activity: impl Into<String>, email: impl Into<String>) -> Self {
        DirectoryError::Duplicate {
            activity: activity.into(),
            email: email.into(),
        }
    }

    pub fn not_registered(activity: impl Into<String>, email: impl Into<String>) -> Self {
        DirectoryError::NotRegistered {
            activity: activity.into(),
            email: email.into(),
        }
    }

    /// Rejections caused by the caller's request, as opposed to store failures.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, DirectoryError::Internal(_))
    }
}
