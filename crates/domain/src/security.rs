use serde::{Deserialize, Serialize};

/// Stable audit actions emitted by administrative use-cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Emitted when a role is added to the hierarchy.
    SecurityRoleCreated,
    /// Emitted when a group is created.
    SecurityGroupCreated,
    /// Emitted when a user is created.
    SecurityUserCreated,
    /// Emitted when a role is assigned to a user or group.
    SecurityRoleAssigned,
    /// Emitted when a role is removed from a user or group.
    SecurityRoleUnassigned,
    /// Emitted when a user joins a group.
    SecurityGroupMemberAdded,
    /// Emitted when a user leaves a group.
    SecurityGroupMemberRemoved,
}

impl AuditAction {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SecurityRoleCreated => "security.role.created",
            Self::SecurityGroupCreated => "security.group.created",
            Self::SecurityUserCreated => "security.user.created",
            Self::SecurityRoleAssigned => "security.role.assigned",
            Self::SecurityRoleUnassigned => "security.role.unassigned",
            Self::SecurityGroupMemberAdded => "security.group.member_added",
            Self::SecurityGroupMemberRemoved => "security.group.member_removed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AuditAction;

    #[test]
    fn audit_action_storage_values_are_dotted() {
        assert_eq!(
            AuditAction::SecurityRoleAssigned.as_str(),
            "security.role.assigned"
        );
        assert_eq!(
            AuditAction::SecurityGroupMemberAdded.as_str(),
            "security.group.member_added"
        );
    }
}
