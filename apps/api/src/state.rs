use rolegate_application::{AuthorizationService, SecurityAdminService, UserService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub authorization_service: AuthorizationService,
    pub security_admin_service: SecurityAdminService,
    pub user_service: UserService,
}
