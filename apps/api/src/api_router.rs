use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::middleware::RequiredRole;
use crate::state::AppState;
use crate::{auth, handlers, middleware};

const PROTECTED_VIEW_ROLE: RequiredRole = RequiredRole("protected.view");
const PROTECTED_CREATE_ROLE: RequiredRole = RequiredRole("protected.create");

pub fn build_router(app_state: AppState, session_layer: SessionManagerLayer<MemoryStore>) -> Router {
    let authenticated_routes = Router::new()
        .route("/profile", get(auth::profile_handler))
        .route("/me/roles", get(auth::my_roles_handler))
        .route_layer(from_fn(middleware::require_auth));

    let view_routes = Router::new()
        .route(
            "/protected/view",
            get(handlers::pages::protected_view_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_role,
        ))
        .layer(Extension(PROTECTED_VIEW_ROLE));

    let create_routes = Router::new()
        .route(
            "/protected/create",
            get(handlers::pages::protected_create_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_role,
        ))
        .layer(Extension(PROTECTED_CREATE_ROLE));

    Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/index", get(handlers::pages::index_handler))
        .route("/login", post(auth::login_handler))
        .route("/logout", post(auth::logout_handler))
        .merge(authenticated_routes)
        .merge(view_routes)
        .merge(create_routes)
        .layer(TraceLayer::new_for_http())
        .layer(session_layer)
        .with_state(app_state)
}
