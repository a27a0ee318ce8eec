use gatehouse_core::AppResult;
use serde::{Deserialize, Serialize};

use crate::RecordId;

/// User known to the identity provider, as listed for role assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    id: RecordId,
    email: String,
}

impl DirectoryUser {
    /// Creates a directory entry.
    #[must_use]
    pub fn new(id: RecordId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Returns the login email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Editable profile attached to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    user_id: RecordId,
    full_name: Option<String>,
}

impl Profile {
    /// Creates a profile, treating a blank name as absent.
    pub fn new(user_id: impl AsRef<str>, full_name: Option<String>) -> AppResult<Self> {
        Ok(Self {
            user_id: RecordId::new(user_id)?,
            full_name: full_name
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty()),
        })
    }

    /// Returns the owning user.
    #[must_use]
    pub fn user_id(&self) -> &RecordId {
        &self.user_id
    }

    /// Returns the full name, if set.
    #[must_use]
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }
}
