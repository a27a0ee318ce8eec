use chrono::{DateTime, Utc};
use gatehouse_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Opaque identifier of a stored record (user, role or permission).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    /// Creates an identifier, rejecting empty or whitespace-only values.
    pub fn new(value: impl AsRef<str>) -> AppResult<Self> {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return Err(AppError::Validation(
                "identifier must not be empty".to_owned(),
            ));
        }

        Ok(Self(value.to_owned()))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Named role that can be granted to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    id: RecordId,
    name: NonEmptyString,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl Role {
    /// Creates a role with a validated name.
    pub fn new(
        id: RecordId,
        name: impl AsRef<str>,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            name: NonEmptyString::trimmed(name)
                .map_err(|_| AppError::Validation("role name must not be empty".to_owned()))?,
            description: normalize_description(description),
            created_at,
        })
    }

    /// Returns the role identifier.
    #[must_use]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Returns the role name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Named permission that can be attached to roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    id: RecordId,
    name: NonEmptyString,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl Permission {
    /// Creates a permission with a validated name.
    pub fn new(
        id: RecordId,
        name: impl AsRef<str>,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            name: NonEmptyString::trimmed(name).map_err(|_| {
                AppError::Validation("permission name must not be empty".to_owned())
            })?,
            description: normalize_description(description),
            created_at,
        })
    }

    /// Returns the permission identifier.
    #[must_use]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Returns the permission name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{Permission, RecordId, Role};

    #[test]
    fn record_id_is_trimmed() {
        let id = RecordId::new("  role-admin ");
        assert!(matches!(id, Ok(ref id) if id.as_str() == "role-admin"));
    }

    #[test]
    fn record_id_rejects_blank_values() {
        assert!(RecordId::new(" \t").is_err());
    }

    #[test]
    fn role_requires_name() -> Result<(), gatehouse_core::AppError> {
        let role = Role::new(RecordId::new("r1")?, "   ", None, Utc::now());
        assert!(role.is_err());
        Ok(())
    }

    #[test]
    fn blank_description_is_dropped() -> Result<(), gatehouse_core::AppError> {
        let permission = Permission::new(
            RecordId::new("p1")?,
            " reports.read ",
            Some("  ".to_owned()),
            Utc::now(),
        )?;

        assert_eq!(permission.name().as_str(), "reports.read");
        assert_eq!(permission.description(), None);
        Ok(())
    }
}
