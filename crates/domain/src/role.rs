use rolegate_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Maximum length, in characters, of role, group and user names.
pub const NAME_MAX_LENGTH: usize = 80;

/// Creation-ordered role identifier.
///
/// Identifiers are assigned in ascending order when a role is created, so
/// sorting by id reproduces insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoleId(u64);

impl RoleId {
    /// Creates a role identifier from a stored value.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Unique permission name such as `protected.view`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoleName(NonEmptyString);

impl RoleName {
    /// Creates a validated role name.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        bounded_name("role name", value).map(Self)
    }

    /// Returns the role name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for RoleName {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoleName> for String {
    fn from(value: RoleName) -> Self {
        value.0.into()
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Named permission node, optionally parented to a broader role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    id: RoleId,
    name: RoleName,
    parent: Option<RoleId>,
}

impl Role {
    pub(crate) fn new(id: RoleId, name: RoleName, parent: Option<RoleId>) -> Self {
        Self { id, name, parent }
    }

    /// Returns the creation-ordered identifier.
    #[must_use]
    pub fn id(&self) -> RoleId {
        self.id
    }

    /// Returns the unique role name.
    #[must_use]
    pub fn name(&self) -> &RoleName {
        &self.name
    }

    /// Returns the parent role, if any.
    #[must_use]
    pub fn parent(&self) -> Option<RoleId> {
        self.parent
    }
}

pub(crate) fn bounded_name(kind: &str, value: impl Into<String>) -> AppResult<NonEmptyString> {
    let value = NonEmptyString::new(value)
        .map_err(|_| AppError::Validation(format!("{kind} must not be empty")))?;

    if value.as_str().chars().count() > NAME_MAX_LENGTH {
        return Err(AppError::Validation(format!(
            "{kind} must not exceed {NAME_MAX_LENGTH} characters"
        )));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{NAME_MAX_LENGTH, RoleName};

    #[test]
    fn role_name_rejects_blank_values() {
        assert!(RoleName::new("").is_err());
        assert!(RoleName::new(" \t").is_err());
    }

    #[test]
    fn role_name_rejects_overlong_values() {
        assert!(RoleName::new("a".repeat(NAME_MAX_LENGTH)).is_ok());
        assert!(RoleName::new("a".repeat(NAME_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn role_name_serializes_as_plain_string() {
        let name = RoleName::new("protected.view").unwrap_or_else(|_| unreachable!());
        let encoded = serde_json::to_string(&name).unwrap_or_default();
        assert_eq!(encoded, "\"protected.view\"");

        let decoded = serde_json::from_str::<RoleName>("\"protected.view\"");
        assert_eq!(decoded.ok(), Some(name));
    }
}
