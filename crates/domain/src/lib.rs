//! Domain entities, the role hierarchy and effective role resolution.

#![forbid(unsafe_code)]

mod group;
mod hierarchy;
mod holder;
mod resolver;
mod role;
mod security;
mod user;

pub use group::{Group, GroupId};
pub use hierarchy::{Descendants, RoleHierarchy};
pub use holder::{RoleAssignments, RoleHolder};
pub use resolver::{
    EffectiveRoles, HolderRoleNames, effective_role_names, effective_role_names_for_user,
};
pub use role::{NAME_MAX_LENGTH, Role, RoleId, RoleName};
pub use security::AuditAction;
pub use user::{User, UserId};
