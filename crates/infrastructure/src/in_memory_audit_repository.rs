use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rolegate_application::{AuditEvent, AuditRepository};
use rolegate_core::AppResult;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Audit event together with its storage metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedAuditEvent {
    /// Stable event identifier.
    pub event_id: Uuid,
    /// The appended event.
    pub event: AuditEvent,
    /// When the event was appended.
    pub recorded_at: DateTime<Utc>,
}

/// In-memory append-only audit log.
#[derive(Debug, Default)]
pub struct InMemoryAuditRepository {
    events: RwLock<Vec<RecordedAuditEvent>>,
}

impl InMemoryAuditRepository {
    /// Creates an empty audit log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recent events, newest first.
    #[cfg(test)]
    pub async fn recent_events(&self, limit: usize) -> Vec<RecordedAuditEvent> {
        self.events
            .read()
            .await
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl AuditRepository for InMemoryAuditRepository {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        self.events.write().await.push(RecordedAuditEvent {
            event_id: Uuid::new_v4(),
            event,
            recorded_at: Utc::now(),
        });

        Ok(())
    }
}
