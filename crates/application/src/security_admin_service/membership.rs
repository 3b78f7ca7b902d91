use super::*;

use rolegate_domain::{Group, GroupId, User, UserId};
use tracing::info;

impl SecurityAdminService {
    /// Returns every group ordered by name.
    pub async fn list_groups(&self) -> AppResult<Vec<Group>> {
        self.repository.list_groups().await
    }

    /// Creates an empty group and emits an audit event.
    pub async fn create_group(&self, actor: &str, name: &str) -> AppResult<Group> {
        let group = Group::new(name)?;
        self.repository.create_group(group.clone()).await?;

        info!(group = %group.name(), group_id = %group.id(), "group created");
        self.audit(
            actor,
            AuditAction::SecurityGroupCreated,
            "security_group",
            group.id().to_string(),
            format!("created group '{}'", group.name()),
        )
        .await?;

        Ok(group)
    }

    /// Creates a user without roles or groups and emits an audit event.
    pub async fn create_user(&self, actor: &str, username: &str) -> AppResult<User> {
        let user = User::new(username)?;
        self.repository.create_user(user.clone()).await?;

        info!(username = %user.username(), user_id = %user.id(), "user created");
        self.audit(
            actor,
            AuditAction::SecurityUserCreated,
            "security_user",
            user.id().to_string(),
            format!("created user '{}'", user.username()),
        )
        .await?;

        Ok(user)
    }

    /// Adds a user to a group.
    ///
    /// Returns `false` without auditing when the user was already a member.
    pub async fn add_group_member(
        &self,
        actor: &str,
        user_id: UserId,
        group_id: GroupId,
    ) -> AppResult<bool> {
        if !self.repository.add_group_member(user_id, group_id).await? {
            return Ok(false);
        }

        info!(user_id = %user_id, group_id = %group_id, "group member added");
        self.audit(
            actor,
            AuditAction::SecurityGroupMemberAdded,
            "security_group_member",
            format!("{group_id}:{user_id}"),
            format!("added user '{user_id}' to group '{group_id}'"),
        )
        .await?;

        Ok(true)
    }

    /// Removes a user from a group and emits an audit event.
    pub async fn remove_group_member(
        &self,
        actor: &str,
        user_id: UserId,
        group_id: GroupId,
    ) -> AppResult<()> {
        self.repository
            .remove_group_member(user_id, group_id)
            .await?;

        info!(user_id = %user_id, group_id = %group_id, "group member removed");
        self.audit(
            actor,
            AuditAction::SecurityGroupMemberRemoved,
            "security_group_member",
            format!("{group_id}:{user_id}"),
            format!("removed user '{user_id}' from group '{group_id}'"),
        )
        .await
    }
}
