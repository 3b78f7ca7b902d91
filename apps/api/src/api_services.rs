use std::sync::Arc;

use rolegate_application::{AuthorizationService, SecurityAdminService, UserService};
use rolegate_infrastructure::{InMemoryAuditRepository, InMemoryRoleGraphRepository};
use tower_sessions::cookie::SameSite;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::api_config::ApiConfig;
use crate::state::AppState;

pub fn build_app_state() -> AppState {
    let role_graph_repository = Arc::new(InMemoryRoleGraphRepository::new());
    let audit_repository = Arc::new(InMemoryAuditRepository::new());

    AppState {
        authorization_service: AuthorizationService::new(role_graph_repository.clone()),
        security_admin_service: SecurityAdminService::new(
            role_graph_repository.clone(),
            audit_repository,
        ),
        user_service: UserService::new(role_graph_repository),
    }
}

pub fn build_session_layer(config: &ApiConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.cookie_secure)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(
            config.session_idle_minutes,
        )))
}
