use axum::extract::{Extension, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use rolegate_core::AppError;
use tower_sessions::Session;

use crate::auth::session_identity;
use crate::error::ApiResult;
use crate::state::AppState;

/// Role a route group demands, attached with an `Extension` layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredRole(pub &'static str);

pub async fn require_auth(
    session: Session,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let identity = session_identity(&session)
        .await?
        .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

pub async fn require_role(
    State(state): State<AppState>,
    Extension(required_role): Extension<RequiredRole>,
    session: Session,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let identity = session_identity(&session).await?;
    state
        .authorization_service
        .require_role(identity.as_ref(), required_role.0)
        .await?;

    if let Some(identity) = identity {
        request.extensions_mut().insert(identity);
    }
    Ok(next.run(request).await)
}
