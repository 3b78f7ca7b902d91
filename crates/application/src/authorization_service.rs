use std::sync::Arc;

use rolegate_core::{AppError, AppResult, UserIdentity};
use rolegate_domain::{EffectiveRoles, UserId, effective_role_names_for_user};
use tracing::{debug, warn};

use crate::RoleGraphRepository;

/// Application service for role-based access decisions.
///
/// Every call reloads the user's role graph, so assignment and membership
/// changes apply to the next check.
#[derive(Clone)]
pub struct AuthorizationService {
    repository: Arc<dyn RoleGraphRepository>,
}

impl AuthorizationService {
    /// Creates a new authorization service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn RoleGraphRepository>) -> Self {
        Self { repository }
    }

    /// Resolves the full set of role names a user holds.
    pub async fn effective_roles(&self, user_id: UserId) -> AppResult<EffectiveRoles> {
        let graph = self
            .repository
            .load_user_role_graph(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{user_id}' does not exist")))?;

        let roles = effective_role_names_for_user(&graph.hierarchy, &graph.user, &graph.groups);
        debug!(
            user_id = %user_id,
            groups = graph.groups.len(),
            roles = roles.len(),
            "resolved effective roles"
        );

        Ok(roles)
    }

    /// Returns whether the user currently holds the role.
    pub async fn has_role(&self, user_id: UserId, role_name: &str) -> AppResult<bool> {
        Ok(self.effective_roles(user_id).await?.contains(role_name))
    }

    /// Ensures the caller is identified and holds the role.
    ///
    /// A missing identity, or one whose user no longer exists, is
    /// `Unauthorized`; a known user without the role is `Forbidden`.
    pub async fn require_role(
        &self,
        identity: Option<&UserIdentity>,
        role_name: &str,
    ) -> AppResult<()> {
        let identity =
            identity.ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))?;

        let roles = match self
            .effective_roles(UserId::from_uuid(identity.user_id()))
            .await
        {
            Ok(roles) => roles,
            Err(AppError::NotFound(_)) => {
                return Err(AppError::Unauthorized(format!(
                    "user '{}' is no longer known",
                    identity.username()
                )));
            }
            Err(error) => return Err(error),
        };

        if roles.contains(role_name) {
            return Ok(());
        }

        warn!(
            username = identity.username(),
            role = role_name,
            "role check denied"
        );
        Err(AppError::Forbidden(format!(
            "user '{}' is missing role '{role_name}'",
            identity.username()
        )))
    }
}
