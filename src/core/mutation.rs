//! Bulk status mutation over a record collection
//!
//! A bulk action maps over the whole collection, changes the status of every
//! selected record and leaves everything else untouched. The new collection is
//! only returned on success, so callers swap it in whole or not at all.

use crate::core::error::MutationError;
use crate::core::record::Moderated;
use crate::core::selection::Selection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Status-changing actions offered by the admin screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkAction {
    Approve,
    Reject,
    Block,
    Unblock,
}

impl BulkAction {
    /// Status a record ends up in
    pub fn target_status(self) -> &'static str {
        match self {
            BulkAction::Approve => "approved",
            BulkAction::Reject => "rejected",
            BulkAction::Block => "blocked",
            BulkAction::Unblock => "active",
        }
    }

    /// Label written to the audit log
    pub fn audit_label(self) -> &'static str {
        match self {
            BulkAction::Approve => "Approved",
            BulkAction::Reject => "Rejected",
            BulkAction::Block => "Blocked",
            BulkAction::Unblock => "Unblocked",
        }
    }
}

impl fmt::Display for BulkAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BulkAction::Approve => "approve",
            BulkAction::Reject => "reject",
            BulkAction::Block => "block",
            BulkAction::Unblock => "unblock",
        };
        f.write_str(name)
    }
}

/// One status change, appended whenever an action succeeds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: Uuid,
    pub record_id: String,
    pub action: String,
    pub actor: String,
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(
        record_id: impl Into<String>,
        action: BulkAction,
        actor: &str,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            record_id: record_id.into(),
            action: action.audit_label().to_string(),
            actor: actor.to_string(),
            timestamp: at,
        }
    }
}

/// Result of a committed bulk action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkOutcome<Id> {
    pub action: BulkAction,

    /// Ids whose status was set, in collection order
    pub updated: Vec<Id>,

    /// Selected ids not present in the collection
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<Id>,

    /// One entry per updated record
    pub audit: Vec<AuditEntry>,
}

impl<Id> BulkOutcome<Id> {
    pub fn affected(&self) -> usize {
        self.updated.len()
    }
}

/// Reject a request that can never succeed, whatever the collection holds
pub fn check_bulk_request<T: Moderated>(
    selection: &Selection<T::Id>,
    action: BulkAction,
) -> Result<(), MutationError> {
    if selection.is_empty() {
        return Err(MutationError::EmptySelection);
    }
    if !T::supports(action) {
        return Err(MutationError::UnsupportedAction {
            resource: T::resource_name().to_string(),
            action,
        });
    }
    Ok(())
}

/// Apply `action` to every selected record
///
/// Fails without producing anything when the selection is empty or the record
/// type does not accept the action.
pub fn apply_bulk_status<T: Moderated>(
    records: &[T],
    selection: &Selection<T::Id>,
    action: BulkAction,
    actor: &str,
    at: DateTime<Utc>,
) -> Result<(Vec<T>, BulkOutcome<T::Id>), MutationError> {
    check_bulk_request::<T>(selection, action)?;

    let mut updated = Vec::new();
    let mut audit = Vec::new();

    let next: Vec<T> = records
        .iter()
        .map(|record| {
            if !selection.contains(record.id()) {
                return record.clone();
            }

            let mut changed = record.clone();
            changed.apply_action(action);

            let entry = AuditEntry::new(record.id().to_string(), action, actor, at);
            changed.record_audit(&entry);

            updated.push(record.id().clone());
            audit.push(entry);
            changed
        })
        .collect();

    let missing = selection
        .iter()
        .filter(|id| !updated.contains(id))
        .cloned()
        .collect();

    Ok((
        next,
        BulkOutcome {
            action,
            updated,
            missing,
            audit,
        },
    ))
}
