use rolegate_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::holder::{RoleAssignments, RoleHolder};
use crate::role::{RoleId, bounded_name};

/// Unique identifier for a group record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupId(Uuid);

impl GroupId {
    /// Creates a new random group identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a group identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Named set of role assignments shared by its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    id: GroupId,
    name: NonEmptyString,
    roles: RoleAssignments,
}

impl Group {
    /// Creates a group with a fresh id and no roles.
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            id: GroupId::new(),
            name: bounded_name("group name", name)?,
            roles: RoleAssignments::default(),
        })
    }

    /// Returns the group identifier.
    #[must_use]
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Returns the unique group name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Assigns a role; returns `false` when the group already held it.
    pub fn add_role(&mut self, role_id: RoleId) -> bool {
        self.roles.assign(role_id)
    }

    /// Assigns several roles in order, skipping ones already held.
    pub fn add_roles(&mut self, role_ids: impl IntoIterator<Item = RoleId>) {
        for role_id in role_ids {
            self.roles.assign(role_id);
        }
    }

    /// Removes a role assignment.
    pub fn remove_role(&mut self, role_id: RoleId) -> AppResult<()> {
        if self.roles.unassign(role_id) {
            return Ok(());
        }

        Err(AppError::NotFound(format!(
            "group '{}' does not hold role '{role_id}'",
            self.name
        )))
    }
}

impl RoleHolder for Group {
    fn assigned_roles(&self) -> &[RoleId] {
        self.roles.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::Group;
    use crate::holder::RoleHolder;
    use crate::role::RoleId;

    #[test]
    fn group_rejects_blank_name() {
        assert!(Group::new("  ").is_err());
    }

    #[test]
    fn add_roles_appends_in_order() {
        let mut group = Group::new("protectors").unwrap_or_else(|_| unreachable!());
        group.add_roles([RoleId::new(2), RoleId::new(1), RoleId::new(2)]);

        assert_eq!(group.assigned_roles(), &[RoleId::new(2), RoleId::new(1)]);
    }

    #[test]
    fn removing_unheld_role_is_not_found() {
        let mut group = Group::new("viewers").unwrap_or_else(|_| unreachable!());
        assert!(group.remove_role(RoleId::new(1)).is_err());
    }
}
