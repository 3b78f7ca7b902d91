use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User information persisted in the authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    user_id: Uuid,
    username: String,
}

impl UserIdentity {
    /// Creates a user identity from the stored user record.
    #[must_use]
    pub fn new(user_id: Uuid, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }

    /// Returns the stable user identifier.
    #[must_use]
    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// Returns the login name of the user.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }
}
