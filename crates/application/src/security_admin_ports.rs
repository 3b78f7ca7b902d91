use async_trait::async_trait;

use rolegate_core::AppResult;
use rolegate_domain::{Group, GroupId, Role, RoleId, RoleName, User, UserId};

/// Entity a role assignment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleHolderRef {
    /// A user's direct assignments.
    User(UserId),
    /// A group's assignments, shared by all members.
    Group(GroupId),
}

impl RoleHolderRef {
    /// Returns the audit resource type for this holder.
    #[must_use]
    pub fn resource_type(&self) -> &'static str {
        match self {
            Self::User(_) => "security_user",
            Self::Group(_) => "security_group",
        }
    }

    /// Returns the holder identifier as a string.
    #[must_use]
    pub fn resource_id(&self) -> String {
        match self {
            Self::User(user_id) => user_id.to_string(),
            Self::Group(group_id) => group_id.to_string(),
        }
    }
}

/// Input payload for creating roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRoleInput {
    /// Unique role name.
    pub name: String,
    /// Optional name of an existing parent role.
    pub parent: Option<String>,
}

/// Role projection returned to administrative callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleDefinition {
    /// Creation-ordered role identifier.
    pub role_id: RoleId,
    /// Unique role name.
    pub name: String,
    /// Parent role name, if any.
    pub parent: Option<String>,
    /// Direct child role names in creation order.
    pub children: Vec<String>,
}

/// Repository port for role, group and user administration.
#[async_trait]
pub trait SecurityAdminRepository: Send + Sync {
    /// Adds a role under an optional parent role.
    async fn create_role(&self, name: RoleName, parent: Option<RoleName>) -> AppResult<Role>;

    /// Lists all roles in creation order.
    async fn list_roles(&self) -> AppResult<Vec<RoleDefinition>>;

    /// Persists a new group; names must be unique.
    async fn create_group(&self, group: Group) -> AppResult<()>;

    /// Lists all groups ordered by name.
    async fn list_groups(&self) -> AppResult<Vec<Group>>;

    /// Persists a new user; usernames must be unique.
    async fn create_user(&self, user: User) -> AppResult<()>;

    /// Assigns a role; returns `false` when the holder already held it.
    async fn assign_role(&self, holder: RoleHolderRef, role_name: &RoleName) -> AppResult<bool>;

    /// Removes a role assignment.
    async fn unassign_role(&self, holder: RoleHolderRef, role_name: &RoleName) -> AppResult<()>;

    /// Adds a user to a group; returns `false` when already a member.
    async fn add_group_member(&self, user_id: UserId, group_id: GroupId) -> AppResult<bool>;

    /// Removes a user from a group.
    async fn remove_group_member(&self, user_id: UserId, group_id: GroupId) -> AppResult<()>;
}
