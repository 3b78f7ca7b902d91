use rolegate_core::UserIdentity;
use rolegate_domain::EffectiveRoles;
use serde::{Deserialize, Serialize};

/// Health response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Plain message payload returned by page-like resources.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Incoming payload for username login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
}

/// API representation of the authenticated user.
#[derive(Debug, Serialize)]
pub struct UserIdentityResponse {
    pub user_id: String,
    pub username: String,
}

impl From<UserIdentity> for UserIdentityResponse {
    fn from(identity: UserIdentity) -> Self {
        Self {
            user_id: identity.user_id().to_string(),
            username: identity.username().to_owned(),
        }
    }
}

/// Effective role names of the authenticated user, sorted.
#[derive(Debug, Serialize)]
pub struct EffectiveRolesResponse {
    pub username: String,
    pub roles: EffectiveRoles,
}
