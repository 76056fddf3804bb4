//! Core module containing the query engine and the traits records implement

pub mod engine;
pub mod error;
pub mod events;
pub mod export;
pub mod field;
pub mod mutation;
pub mod predicate;
pub mod query;
pub mod record;
pub mod selection;
pub mod service;

pub use engine::{PageSlice, apply_filters, apply_sort, filter_and_sort, paginate, run_query};
pub use error::{CatalogError, Result};
pub use events::{CatalogEvent, EventBus, EventEnvelope};
pub use export::{CsvMode, Exportable, export_csv};
pub use field::FieldValue;
pub use mutation::{AuditEntry, BulkAction, BulkOutcome, apply_bulk_status, check_bulk_request};
pub use predicate::{Dimension, NumericRange, Predicate, PriceBucket, RangeBound};
pub use query::{
    PaginationMeta, QueryAction, QueryPage, QueryParams, QueryState, SortDirection, SortSpec,
};
pub use record::{Filterable, Moderated, Record, RecordId};
pub use selection::Selection;
pub use service::{CatalogService, ModerationService};
