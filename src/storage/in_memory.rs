//! In-memory implementation of the catalog services for testing and development

use crate::core::engine::{filter_and_sort, run_query};
use crate::core::error::{MutationError, Result, StorageError};
use crate::core::events::{CatalogEvent, EventBus};
use crate::core::mutation::{
    AuditEntry, BulkAction, BulkOutcome, apply_bulk_status, check_bulk_request,
};
use crate::core::query::{QueryPage, QueryState};
use crate::core::record::{Moderated, Record};
use crate::core::selection::Selection;
use crate::core::service::{CatalogService, ModerationService};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

/// In-memory catalog of one record type
///
/// Records keep their insertion order, which is the order listings show when
/// no sort is active. Uses RwLock for thread-safe access; clones share state.
#[derive(Clone)]
pub struct InMemoryCatalog<T: Record> {
    records: Arc<RwLock<Vec<T>>>,
    audit: Arc<RwLock<Vec<AuditEntry>>>,
    pending: Arc<AtomicBool>,
    fail_next: Arc<Mutex<Option<String>>>,
    latency: Duration,
    event_bus: Option<EventBus>,
}

impl<T: Record> InMemoryCatalog<T> {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a catalog seeded with `records`
    ///
    /// Ids are unique: a record repeating an earlier id is dropped with a
    /// warning. Use [`try_with_records`](Self::try_with_records) to refuse the
    /// seed instead.
    pub fn with_records(records: Vec<T>) -> Self {
        let mut seen = HashSet::new();
        let unique = records
            .into_iter()
            .filter(|record| {
                let fresh = seen.insert(record.id().clone());
                if !fresh {
                    tracing::warn!(
                        resource = T::resource_name(),
                        id = %record.id(),
                        "dropping record with duplicate id"
                    );
                }
                fresh
            })
            .collect();
        Self::from_unique(unique)
    }

    /// Create a catalog seeded with `records`, failing on a repeated id
    pub fn try_with_records(records: Vec<T>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(duplicate::<T>(record.id()).into());
            }
        }
        Ok(Self::from_unique(records))
    }

    fn from_unique(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            audit: Arc::new(RwLock::new(Vec::new())),
            pending: Arc::new(AtomicBool::new(false)),
            fail_next: Arc::new(Mutex::new(None)),
            latency: Duration::ZERO,
            event_bus: None,
        }
    }

    /// Delay every bulk action, like a remote backend would
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Publish a status event for each record a bulk action changes
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.event_bus = Some(bus);
        self
    }

    /// Make the next bulk action fail as a whole with `reason`
    pub fn fail_next_mutation(&self, reason: impl Into<String>) -> Result<()> {
        let mut slot = self.fail_next.lock().map_err(|_| self.poisoned("failure hook"))?;
        *slot = Some(reason.into());
        Ok(())
    }

    /// Append a record to the end of the collection
    ///
    /// Fails with [`StorageError::DuplicateId`] if the id is already taken.
    pub fn insert(&self, record: T) -> Result<()> {
        let mut records = self.records.write().map_err(|_| self.poisoned("write"))?;
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(duplicate::<T>(record.id()).into());
        }
        records.push(record);
        Ok(())
    }

    /// Whether a bulk action is in flight
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    fn poisoned(&self, kind: &'static str) -> StorageError {
        StorageError::LockPoisoned {
            resource: T::resource_name().to_string(),
            kind,
        }
    }

    fn snapshot(&self) -> Result<Vec<T>> {
        let records = self.records.read().map_err(|_| self.poisoned("read"))?;
        Ok(records.clone())
    }

    fn take_failure(&self) -> Result<Option<String>> {
        let mut slot = self.fail_next.lock().map_err(|_| self.poisoned("failure hook"))?;
        Ok(slot.take())
    }
}

fn duplicate<T: Record>(id: &T::Id) -> StorageError {
    StorageError::DuplicateId {
        resource: T::resource_name().to_string(),
        id: id.to_string(),
    }
}

impl<T: Record> Default for InMemoryCatalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> CatalogService<T> for InMemoryCatalog<T> {
    async fn list(&self) -> Result<Vec<T>> {
        self.snapshot()
    }

    async fn get(&self, id: &T::Id) -> Result<Option<T>> {
        let records = self.records.read().map_err(|_| self.poisoned("read"))?;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn query(&self, state: &QueryState) -> Result<QueryPage<T>> {
        let records = self.records.read().map_err(|_| self.poisoned("read"))?;
        Ok(run_query(&records, state))
    }

    async fn query_all(&self, state: &QueryState) -> Result<Vec<T>> {
        let records = self.records.read().map_err(|_| self.poisoned("read"))?;
        Ok(filter_and_sort(&records, state))
    }
}

/// Clears the pending flag when the action finishes, however it finishes
struct PendingGuard<'a>(&'a AtomicBool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[async_trait]
impl<T: Moderated> ModerationService<T> for InMemoryCatalog<T> {
    async fn bulk_update_status(
        &self,
        selection: &Selection<T::Id>,
        action: BulkAction,
        actor: &str,
    ) -> Result<BulkOutcome<T::Id>> {
        // Hopeless requests never reach the backend
        check_bulk_request::<T>(selection, action)?;

        if self
            .pending
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::warn!(resource = T::resource_name(), %action, "bulk action already pending");
            return Err(MutationError::ActionPending.into());
        }
        let _guard = PendingGuard(&self.pending);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if let Some(reason) = self.take_failure()? {
            tracing::warn!(resource = T::resource_name(), %action, %reason, "bulk action rejected");
            return Err(MutationError::Rejected { reason }.into());
        }

        let outcome = {
            let mut records = self.records.write().map_err(|_| self.poisoned("write"))?;
            let (next, outcome) =
                apply_bulk_status(&records, selection, action, actor, Utc::now())?;
            *records = next;
            outcome
        };

        {
            let mut audit = self.audit.write().map_err(|_| self.poisoned("write"))?;
            audit.extend(outcome.audit.iter().cloned());
        }

        if let Some(bus) = &self.event_bus {
            for entry in &outcome.audit {
                bus.publish(CatalogEvent::status_changed(T::resource_name(), entry, action));
            }
        }

        tracing::info!(
            resource = T::resource_name(),
            %action,
            actor,
            updated = outcome.updated.len(),
            missing = outcome.missing.len(),
            "bulk status update committed"
        );

        Ok(outcome)
    }

    async fn audit_log(&self) -> Result<Vec<AuditEntry>> {
        let audit = self.audit.read().map_err(|_| self.poisoned("read"))?;
        Ok(audit.clone())
    }
}
