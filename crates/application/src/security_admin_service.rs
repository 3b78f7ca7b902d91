use std::sync::Arc;

use rolegate_core::AppResult;
use rolegate_domain::AuditAction;

use crate::security_admin_ports::SecurityAdminRepository;
use crate::{AuditEvent, AuditRepository};

mod membership;
mod roles;

/// Application service for administering roles, groups and users.
///
/// Every successful mutation is recorded through the audit port with the
/// acting subject.
#[derive(Clone)]
pub struct SecurityAdminService {
    repository: Arc<dyn SecurityAdminRepository>,
    audit_repository: Arc<dyn AuditRepository>,
}

impl SecurityAdminService {
    /// Creates a new security admin service.
    #[must_use]
    pub fn new(
        repository: Arc<dyn SecurityAdminRepository>,
        audit_repository: Arc<dyn AuditRepository>,
    ) -> Self {
        Self {
            repository,
            audit_repository,
        }
    }

    async fn audit(
        &self,
        actor: &str,
        action: AuditAction,
        resource_type: &str,
        resource_id: String,
        detail: String,
    ) -> AppResult<()> {
        self.audit_repository
            .append_event(AuditEvent {
                subject: actor.to_owned(),
                action,
                resource_type: resource_type.to_owned(),
                resource_id,
                detail: Some(detail),
            })
            .await
    }
}
