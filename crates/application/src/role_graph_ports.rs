use std::sync::Arc;

use async_trait::async_trait;

use rolegate_core::AppResult;
use rolegate_domain::{Group, RoleHierarchy, User, UserId};

/// Point-in-time view of everything needed to resolve one user's roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRoleGraph {
    /// The user being resolved.
    pub user: User,
    /// Groups the user is a member of.
    pub groups: Vec<Group>,
    /// Role tree the assignments refer to, shared with the store.
    pub hierarchy: Arc<RoleHierarchy>,
}

/// Repository port for reading role assignments and the role tree.
#[async_trait]
pub trait RoleGraphRepository: Send + Sync {
    /// Loads a consistent snapshot for one user, or `None` if the user is unknown.
    async fn load_user_role_graph(&self, user_id: UserId) -> AppResult<Option<UserRoleGraph>>;

    /// Finds a user by login name.
    async fn find_user_by_username(&self, username: &str) -> AppResult<Option<User>>;
}
