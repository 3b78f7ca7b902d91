//! Username login for the session layer.

use std::sync::Arc;

use rolegate_core::{AppError, AppResult, UserIdentity};
use tracing::{info, warn};

use crate::RoleGraphRepository;

/// Application service that turns a login name into a session identity.
///
/// Credentials are verified upstream; this service only checks that the
/// user exists.
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn RoleGraphRepository>,
}

impl UserService {
    /// Creates a new user service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn RoleGraphRepository>) -> Self {
        Self { repository }
    }

    /// Resolves a username into the identity stored in the session.
    pub async fn login(&self, username: &str) -> AppResult<UserIdentity> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::Validation(
                "username must not be empty".to_owned(),
            ));
        }

        let Some(user) = self.repository.find_user_by_username(username).await? else {
            warn!(username, "login rejected for unknown user");
            return Err(AppError::Unauthorized("unknown user".to_owned()));
        };

        info!(user_id = %user.id(), username, "user logged in");
        Ok(UserIdentity::new(
            user.id().as_uuid(),
            user.username().as_str(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use rolegate_core::{AppError, AppResult};
    use rolegate_domain::{User, UserId};

    use super::UserService;
    use crate::{RoleGraphRepository, UserRoleGraph};

    struct SingleUserRepository {
        user: User,
    }

    #[async_trait]
    impl RoleGraphRepository for SingleUserRepository {
        async fn load_user_role_graph(
            &self,
            _user_id: UserId,
        ) -> AppResult<Option<UserRoleGraph>> {
            Ok(None)
        }

        async fn find_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
            Ok((self.user.username().as_str() == username).then(|| self.user.clone()))
        }
    }

    fn service() -> (UserService, User) {
        let user = User::new("logged_in_user").unwrap_or_else(|_| unreachable!());
        let repository = Arc::new(SingleUserRepository { user: user.clone() });
        (UserService::new(repository), user)
    }

    #[tokio::test]
    async fn login_returns_identity_for_known_user() {
        let (service, user) = service();

        let identity = service
            .login(" logged_in_user ")
            .await
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(identity.user_id(), user.id().as_uuid());
        assert_eq!(identity.username(), "logged_in_user");
    }

    #[tokio::test]
    async fn login_rejects_unknown_user() {
        let (service, _) = service();

        let result = service.login("nobody").await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn login_rejects_blank_username() {
        let (service, _) = service();

        let result = service.login("   ").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
