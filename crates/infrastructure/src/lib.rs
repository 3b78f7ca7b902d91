//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_audit_repository;
mod in_memory_role_graph_repository;

pub use in_memory_audit_repository::{InMemoryAuditRepository, RecordedAuditEvent};
pub use in_memory_role_graph_repository::InMemoryRoleGraphRepository;
