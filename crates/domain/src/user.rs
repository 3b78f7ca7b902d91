//! User domain types.

use std::collections::BTreeSet;

use rolegate_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::group::GroupId;
use crate::holder::{RoleAssignments, RoleHolder};
use crate::role::{RoleId, bounded_name};

/// Unique identifier for a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a user identifier from an existing UUID value.
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

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Authenticated actor holding direct roles and group memberships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: NonEmptyString,
    roles: RoleAssignments,
    groups: BTreeSet<GroupId>,
}

impl User {
    /// Creates a user with a fresh id, no roles and no groups.
    pub fn new(username: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            id: UserId::new(),
            username: bounded_name("username", username)?,
            roles: RoleAssignments::default(),
            groups: BTreeSet::new(),
        })
    }

    /// Returns the user identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the unique login name.
    #[must_use]
    pub fn username(&self) -> &NonEmptyString {
        &self.username
    }

    /// Assigns a role; returns `false` when the user already held it.
    pub fn add_role(&mut self, role_id: RoleId) -> bool {
        self.roles.assign(role_id)
    }

    /// Assigns several roles in order, skipping ones already held.
    pub fn add_roles(&mut self, role_ids: impl IntoIterator<Item = RoleId>) {
        for role_id in role_ids {
            self.roles.assign(role_id);
        }
    }

    /// Removes a direct role assignment.
    pub fn remove_role(&mut self, role_id: RoleId) -> AppResult<()> {
        if self.roles.unassign(role_id) {
            return Ok(());
        }

        Err(AppError::NotFound(format!(
            "user '{}' does not hold role '{role_id}'",
            self.username
        )))
    }

    /// Adds the user to a group; returns `false` when already a member.
    pub fn join_group(&mut self, group_id: GroupId) -> bool {
        self.groups.insert(group_id)
    }

    /// Removes the user from a group.
    pub fn leave_group(&mut self, group_id: GroupId) -> AppResult<()> {
        if self.groups.remove(&group_id) {
            return Ok(());
        }

        Err(AppError::NotFound(format!(
            "user '{}' is not a member of group '{group_id}'",
            self.username
        )))
    }

    /// Returns whether the user belongs to the group.
    #[must_use]
    pub fn is_member_of(&self, group_id: GroupId) -> bool {
        self.groups.contains(&group_id)
    }

    /// Returns the groups the user belongs to.
    #[must_use]
    pub fn groups(&self) -> &BTreeSet<GroupId> {
        &self.groups
    }
}

impl RoleHolder for User {
    fn assigned_roles(&self) -> &[RoleId] {
        self.roles.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::User;
    use crate::group::GroupId;
    use crate::holder::RoleHolder;
    use crate::role::RoleId;

    fn user() -> User {
        User::new("test_user").unwrap_or_else(|_| unreachable!())
    }

    #[test]
    fn username_is_trimmed_and_required() {
        assert!(User::new("").is_err());
        assert_eq!(
            User::new(" alice ")
                .map(|user| user.username().as_str().to_owned())
                .unwrap_or_default(),
            "alice"
        );
    }

    #[test]
    fn role_assignment_is_idempotent() {
        let mut user = user();

        assert!(user.add_role(RoleId::new(1)));
        assert!(!user.add_role(RoleId::new(1)));
        assert_eq!(user.assigned_roles(), &[RoleId::new(1)]);

        assert!(user.remove_role(RoleId::new(1)).is_ok());
        assert!(user.remove_role(RoleId::new(1)).is_err());
    }

    #[test]
    fn group_membership_round_trip() {
        let mut user = user();
        let group_id = GroupId::new();

        assert!(user.join_group(group_id));
        assert!(!user.join_group(group_id));
        assert!(user.is_member_of(group_id));

        assert!(user.leave_group(group_id).is_ok());
        assert!(!user.is_member_of(group_id));
        assert!(user.leave_group(group_id).is_err());
    }
}
