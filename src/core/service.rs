//! Service traits: the asynchronous boundary in front of a record collection

use crate::core::error::Result;
use crate::core::mutation::{AuditEntry, BulkAction, BulkOutcome};
use crate::core::query::{QueryPage, QueryState};
use crate::core::record::{Moderated, Record};
use crate::core::selection::Selection;
use async_trait::async_trait;

/// Read access to a listing
///
/// Implementations may filter in memory (the whole collection fetched once)
/// or push the query to a backend; the query contract is the same.
#[async_trait]
pub trait CatalogService<T: Record>: Send + Sync {
    /// All records in collection order
    async fn list(&self) -> Result<Vec<T>>;

    /// A single record by id
    async fn get(&self, id: &T::Id) -> Result<Option<T>>;

    /// Filter, sort and paginate
    async fn query(&self, state: &QueryState) -> Result<QueryPage<T>>;

    /// Filter and sort without paginating
    async fn query_all(&self, state: &QueryState) -> Result<Vec<T>>;
}

/// Moderation of records with a mutable status
#[async_trait]
pub trait ModerationService<T: Moderated>: CatalogService<T> {
    /// Apply `action` to every selected record, all or nothing
    ///
    /// On error no record has changed.
    async fn bulk_update_status(
        &self,
        selection: &Selection<T::Id>,
        action: BulkAction,
        actor: &str,
    ) -> Result<BulkOutcome<T::Id>>;

    /// Entries appended by committed actions, oldest first
    async fn audit_log(&self) -> Result<Vec<AuditEntry>>;
}
