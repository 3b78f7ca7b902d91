use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use rolegate_core::{AppError, UserIdentity};
use rolegate_domain::UserId;
use tower_sessions::Session;
use tracing::info;

use crate::dto::{EffectiveRolesResponse, LoginRequest, UserIdentityResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub const SESSION_USER_KEY: &str = "user_identity";

/// Reads the identity stored by a previous login, if any.
pub async fn session_identity(session: &Session) -> ApiResult<Option<UserIdentity>> {
    Ok(session
        .get::<UserIdentity>(SESSION_USER_KEY)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to read session identity: {error}"))
        })?)
}

pub async fn login_handler(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<UserIdentityResponse>> {
    let identity = state.user_service.login(&payload.username).await?;

    session
        .cycle_id()
        .await
        .map_err(|error| AppError::Internal(format!("failed to cycle session id: {error}")))?;
    session
        .insert(SESSION_USER_KEY, &identity)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to persist session identity: {error}"))
        })?;

    Ok(Json(identity.into()))
}

pub async fn logout_handler(session: Session) -> ApiResult<StatusCode> {
    if let Some(identity) = session_identity(&session).await? {
        info!(username = identity.username(), "user logged out");
    }

    session
        .delete()
        .await
        .map_err(|error| AppError::Internal(format!("failed to delete session: {error}")))?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn profile_handler(
    Extension(identity): Extension<UserIdentity>,
) -> Json<UserIdentityResponse> {
    Json(identity.into())
}

pub async fn my_roles_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
) -> ApiResult<Json<EffectiveRolesResponse>> {
    let roles = state
        .authorization_service
        .effective_roles(UserId::from_uuid(identity.user_id()))
        .await
        .map_err(|error| match error {
            AppError::NotFound(_) => {
                AppError::Unauthorized("session user is no longer known".to_owned())
            }
            other => other,
        })?;

    Ok(Json(EffectiveRolesResponse {
        username: identity.username().to_owned(),
        roles,
    }))
}
