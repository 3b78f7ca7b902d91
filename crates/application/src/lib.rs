//! Application services and ports.

#![forbid(unsafe_code)]

mod audit_ports;
mod authorization_service;
mod role_graph_ports;
mod security_admin_ports;
mod security_admin_service;
mod user_service;

pub use audit_ports::{AuditEvent, AuditRepository};
pub use authorization_service::AuthorizationService;
pub use role_graph_ports::{RoleGraphRepository, UserRoleGraph};
pub use security_admin_ports::{
    CreateRoleInput, RoleDefinition, RoleHolderRef, SecurityAdminRepository,
};
pub use security_admin_service::SecurityAdminService;
pub use user_service::UserService;
