use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rolegate_application::{
    RoleDefinition, RoleGraphRepository, RoleHolderRef, SecurityAdminRepository, UserRoleGraph,
};
use rolegate_core::{AppError, AppResult};
use rolegate_domain::{Group, GroupId, Role, RoleHierarchy, RoleId, RoleName, User, UserId};
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory store for the role tree, users and groups.
///
/// Locks are always taken in the order hierarchy, users, groups. Readers
/// share the hierarchy through an `Arc` that writers replace copy-on-write.
#[derive(Debug, Default)]
pub struct InMemoryRoleGraphRepository {
    hierarchy: RwLock<Arc<RoleHierarchy>>,
    users: RwLock<HashMap<UserId, User>>,
    groups: RwLock<HashMap<GroupId, Group>>,
}

impl InMemoryRoleGraphRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn resolve_role_id(hierarchy: &RoleHierarchy, role_name: &RoleName) -> AppResult<RoleId> {
    hierarchy
        .find_by_name(role_name.as_str())
        .map(Role::id)
        .ok_or_else(|| AppError::NotFound(format!("role '{role_name}' does not exist")))
}

fn missing_user(user_id: UserId) -> AppError {
    AppError::NotFound(format!("user '{user_id}' does not exist"))
}

fn missing_group(group_id: GroupId) -> AppError {
    AppError::NotFound(format!("group '{group_id}' does not exist"))
}

#[async_trait]
impl RoleGraphRepository for InMemoryRoleGraphRepository {
    async fn load_user_role_graph(&self, user_id: UserId) -> AppResult<Option<UserRoleGraph>> {
        let hierarchy = self.hierarchy.read().await;
        let users = self.users.read().await;
        let groups = self.groups.read().await;

        let Some(user) = users.get(&user_id) else {
            return Ok(None);
        };

        let member_groups: Vec<Group> = user
            .groups()
            .iter()
            .filter_map(|group_id| groups.get(group_id).cloned())
            .collect();
        debug!(
            user_id = %user_id,
            groups = member_groups.len(),
            roles = hierarchy.len(),
            "loaded role graph snapshot"
        );

        Ok(Some(UserRoleGraph {
            user: user.clone(),
            groups: member_groups,
            hierarchy: Arc::clone(&*hierarchy),
        }))
    }

    async fn find_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.username().as_str() == username)
            .cloned())
    }
}

#[async_trait]
impl SecurityAdminRepository for InMemoryRoleGraphRepository {
    async fn create_role(&self, name: RoleName, parent: Option<RoleName>) -> AppResult<Role> {
        let mut hierarchy = self.hierarchy.write().await;
        let parent_id = parent
            .as_ref()
            .map(|parent| resolve_role_id(&hierarchy, parent))
            .transpose()?;

        Arc::make_mut(&mut *hierarchy).insert_role(name, parent_id)
    }

    async fn list_roles(&self) -> AppResult<Vec<RoleDefinition>> {
        let hierarchy = self.hierarchy.read().await;
        let name_of = |role_id: RoleId| {
            hierarchy
                .role(role_id)
                .map(|role| role.name().as_str().to_owned())
        };

        Ok(hierarchy
            .roles()
            .map(|role| RoleDefinition {
                role_id: role.id(),
                name: role.name().as_str().to_owned(),
                parent: role.parent().and_then(name_of),
                children: hierarchy
                    .children(role.id())
                    .iter()
                    .filter_map(|child_id| name_of(*child_id))
                    .collect(),
            })
            .collect())
    }

    async fn create_group(&self, group: Group) -> AppResult<()> {
        let mut groups = self.groups.write().await;
        if groups
            .values()
            .any(|existing| existing.name() == group.name())
        {
            return Err(AppError::Conflict(format!(
                "group '{}' already exists",
                group.name()
            )));
        }

        groups.insert(group.id(), group);
        Ok(())
    }

    async fn list_groups(&self) -> AppResult<Vec<Group>> {
        let mut listed: Vec<Group> = self.groups.read().await.values().cloned().collect();
        listed.sort_by(|left, right| left.name().cmp(right.name()));
        Ok(listed)
    }

    async fn create_user(&self, user: User) -> AppResult<()> {
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|existing| existing.username() == user.username())
        {
            return Err(AppError::Conflict(format!(
                "user '{}' already exists",
                user.username()
            )));
        }

        users.insert(user.id(), user);
        Ok(())
    }

    async fn assign_role(&self, holder: RoleHolderRef, role_name: &RoleName) -> AppResult<bool> {
        let hierarchy = self.hierarchy.read().await;
        let role_id = resolve_role_id(&hierarchy, role_name)?;

        match holder {
            RoleHolderRef::User(user_id) => self
                .users
                .write()
                .await
                .get_mut(&user_id)
                .map(|user| user.add_role(role_id))
                .ok_or_else(|| missing_user(user_id)),
            RoleHolderRef::Group(group_id) => self
                .groups
                .write()
                .await
                .get_mut(&group_id)
                .map(|group| group.add_role(role_id))
                .ok_or_else(|| missing_group(group_id)),
        }
    }

    async fn unassign_role(&self, holder: RoleHolderRef, role_name: &RoleName) -> AppResult<()> {
        let hierarchy = self.hierarchy.read().await;
        let role_id = resolve_role_id(&hierarchy, role_name)?;

        match holder {
            RoleHolderRef::User(user_id) => self
                .users
                .write()
                .await
                .get_mut(&user_id)
                .ok_or_else(|| missing_user(user_id))?
                .remove_role(role_id),
            RoleHolderRef::Group(group_id) => self
                .groups
                .write()
                .await
                .get_mut(&group_id)
                .ok_or_else(|| missing_group(group_id))?
                .remove_role(role_id),
        }
    }

    async fn add_group_member(&self, user_id: UserId, group_id: GroupId) -> AppResult<bool> {
        let mut users = self.users.write().await;
        let groups = self.groups.read().await;
        if !groups.contains_key(&group_id) {
            return Err(missing_group(group_id));
        }

        users
            .get_mut(&user_id)
            .map(|user| user.join_group(group_id))
            .ok_or_else(|| missing_user(user_id))
    }

    async fn remove_group_member(&self, user_id: UserId, group_id: GroupId) -> AppResult<()> {
        self.users
            .write()
            .await
            .get_mut(&user_id)
            .ok_or_else(|| missing_user(user_id))?
            .leave_group(group_id)
    }
}
