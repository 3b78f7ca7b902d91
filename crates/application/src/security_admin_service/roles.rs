use super::*;

use rolegate_domain::{Role, RoleName};
use tracing::info;

use crate::security_admin_ports::{CreateRoleInput, RoleDefinition, RoleHolderRef};

impl SecurityAdminService {
    /// Returns every role in creation order.
    pub async fn list_roles(&self) -> AppResult<Vec<RoleDefinition>> {
        self.repository.list_roles().await
    }

    /// Adds a role to the hierarchy and emits an audit event.
    pub async fn create_role(&self, actor: &str, input: CreateRoleInput) -> AppResult<Role> {
        let name = RoleName::new(input.name)?;
        let parent = input.parent.map(RoleName::new).transpose()?;

        let role = self.repository.create_role(name, parent.clone()).await?;
        info!(
            role = %role.name(),
            role_id = %role.id(),
            parent = parent.as_ref().map(RoleName::as_str),
            "role created"
        );

        let detail = match &parent {
            Some(parent) => format!("created role '{}' under '{parent}'", role.name()),
            None => format!("created role '{}'", role.name()),
        };
        self.audit(
            actor,
            AuditAction::SecurityRoleCreated,
            "security_role",
            role.id().to_string(),
            detail,
        )
        .await?;

        Ok(role)
    }

    /// Assigns a role to a user or group.
    ///
    /// Returns `false` without auditing when the holder already held the role.
    pub async fn assign_role(
        &self,
        actor: &str,
        holder: RoleHolderRef,
        role_name: &str,
    ) -> AppResult<bool> {
        let role_name = RoleName::new(role_name)?;
        let assigned = self.repository.assign_role(holder, &role_name).await?;
        if !assigned {
            return Ok(false);
        }

        info!(
            holder = %holder.resource_id(),
            role = %role_name,
            "role assigned"
        );
        self.audit(
            actor,
            AuditAction::SecurityRoleAssigned,
            holder.resource_type(),
            format!("{}:{role_name}", holder.resource_id()),
            format!("assigned role '{role_name}' to '{}'", holder.resource_id()),
        )
        .await?;

        Ok(true)
    }

    /// Assigns several roles in order, skipping ones already held.
    ///
    /// Stops at the first failing name; earlier assignments stay in place.
    pub async fn assign_roles<I, S>(
        &self,
        actor: &str,
        holder: RoleHolderRef,
        role_names: I,
    ) -> AppResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for role_name in role_names {
            self.assign_role(actor, holder, role_name.as_ref()).await?;
        }

        Ok(())
    }

    /// Removes a role from a user or group and emits an audit event.
    pub async fn unassign_role(
        &self,
        actor: &str,
        holder: RoleHolderRef,
        role_name: &str,
    ) -> AppResult<()> {
        let role_name = RoleName::new(role_name)?;
        self.repository.unassign_role(holder, &role_name).await?;

        info!(
            holder = %holder.resource_id(),
            role = %role_name,
            "role unassigned"
        );
        self.audit(
            actor,
            AuditAction::SecurityRoleUnassigned,
            holder.resource_type(),
            format!("{}:{role_name}", holder.resource_id()),
            format!("removed role '{role_name}' from '{}'", holder.resource_id()),
        )
        .await
    }
}
