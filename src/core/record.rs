//! Record traits defining what the query engine can see of a listing item

use crate::core::field::FieldValue;
use crate::core::mutation::{AuditEntry, BulkAction};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Bounds every record identifier satisfies
///
/// Storefront products use integer ids, dashboard records use strings.
pub trait RecordId:
    Clone + Eq + Hash + Ord + Display + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl<T> RecordId for T where
    T: Clone
        + Eq
        + Hash
        + Ord
        + Display
        + Debug
        + Serialize
        + DeserializeOwned
        + Send
        + Sync
        + 'static
{
}

/// Base trait for every item shown in a listing.
///
/// A record exposes:
/// - id: stable unique identifier
/// - field_value: named fields usable as sort keys
/// - the filterable capability (see [`Filterable`])
pub trait Record: Filterable + Clone + Send + Sync + 'static {
    /// Identifier type
    type Id: RecordId;

    /// The plural resource name used in URLs (e.g., "products", "orders")
    fn resource_name() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> &Self::Id;

    /// Names of the fields accepted as sort keys
    fn sort_fields() -> &'static [&'static str];

    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}

/// The fields a record offers to filter predicates.
///
/// Every accessor defaults to "not present". A record lacking a field never
/// matches an active predicate on that field.
pub trait Filterable {
    /// Text fields searched by the free-text predicate (matched with OR)
    fn text_fields(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Category value for the categorical predicate
    fn category(&self) -> Option<&str> {
        None
    }

    /// Status value for the categorical predicate
    fn status(&self) -> Option<&str> {
        None
    }

    /// Numeric value for the range predicate (price, amount)
    fn range_value(&self) -> Option<f64> {
        None
    }

    /// Location value for the location predicate
    fn location(&self) -> Option<&str> {
        None
    }
}

/// Records whose status can be changed by moderation actions
pub trait Moderated: Record {
    /// Whether this record type accepts the given action
    fn supports(action: BulkAction) -> bool;

    /// Set the status corresponding to `action`
    ///
    /// Only called with actions for which [`Moderated::supports`] is true.
    fn apply_action(&mut self, action: BulkAction);

    /// Current status label
    fn status_label(&self) -> &str;

    /// Append an entry to the record's own audit trail, if it keeps one
    fn record_audit(&mut self, _entry: &AuditEntry) {}
}
