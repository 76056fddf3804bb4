//! Catalog event bus for status change notifications
//!
//! Services publish one event per record changed by a committed bulk action.
//! Subscribers (dashboards, notification toasts, audit sinks) receive them
//! through a `tokio::sync::broadcast` channel.
//!
//! ```text
//! InMemoryCatalog::bulk_update_status ──▶ EventBus::publish() ──▶ subscribers
//! ```
//!
//! ```rust,ignore
//! let bus = EventBus::new(256);
//! let mut rx = bus.subscribe();
//!
//! let catalog = InMemoryCatalog::with_records(submissions).with_event_bus(bus);
//! catalog.bulk_update_status(&selection, BulkAction::Approve, "Admin").await?;
//!
//! while let Ok(envelope) = rx.try_recv() {
//!     println!("{:?}", envelope.event);
//! }
//! ```

use crate::core::mutation::{AuditEntry, BulkAction};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Events emitted by catalog services
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogEvent {
    /// A record's status was set by a moderation action
    StatusChanged {
        resource: String,
        record_id: String,
        action: BulkAction,
        status: String,
        actor: String,
    },
}

impl CatalogEvent {
    /// Build a status event from the audit entry of a committed change
    pub fn status_changed(resource: &str, entry: &AuditEntry, action: BulkAction) -> Self {
        CatalogEvent::StatusChanged {
            resource: resource.to_string(),
            record_id: entry.record_id.clone(),
            action,
            status: action.target_status().to_string(),
            actor: entry.actor.clone(),
        }
    }

    /// Resource the event relates to
    pub fn resource(&self) -> &str {
        match self {
            CatalogEvent::StatusChanged { resource, .. } => resource,
        }
    }

    /// Record the event relates to
    pub fn record_id(&self) -> &str {
        match self {
            CatalogEvent::StatusChanged { record_id, .. } => record_id,
        }
    }
}

/// Envelope wrapping an event with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event ID
    pub id: Uuid,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// The actual event
    pub event: CatalogEvent,
}

impl EventEnvelope {
    pub fn new(event: CatalogEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Broadcast-based event bus
///
/// Cheap to clone and shareable across threads. Slow receivers lose events
/// once `capacity` is exceeded and see `Lagged` on their next `recv()`.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventEnvelope>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish an event to all subscribers
    ///
    /// Never fails. Returns the number of receivers that will see the event.
    pub fn publish(&self, event: CatalogEvent) -> usize {
        let envelope = EventEnvelope::new(event);
        // send() returns Err only if there are no receivers, which is fine
        self.sender.send(envelope).unwrap_or(0)
    }

    /// Receive all events published after this call
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(1024)
    }
}
