//! # Storefront Catalog
//!
//! A catalog query engine for marketplace listings: the storefront product
//! grid, the seller's order table and the admin moderation screens.
//!
//! ## Features
//!
//! - **Filtering**: free-text search over several fields, category and status
//!   dimensions, numeric price ranges and configurable price buckets, location
//! - **Sorting**: stable sort on any declared field, toggling direction
//! - **Pagination**: 1-based pages, always clamped to the available range
//! - **Bulk Moderation**: approve/reject/block/unblock a selection, all or
//!   nothing, with an audit trail and status events
//! - **CSV Export**: the filtered listing, unpaginated
//! - **REST Server**: one set of routes per registered record type
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catalog::prelude::*;
//!
//! let catalog = InMemoryCatalog::with_records(vec![
//!     Product::new(1, "Modern Sofa", 120_000.0, "Living Room", "Kigali"),
//!     Product::new(2, "Office Chair", 75_000.0, "Office", "Musanze"),
//! ]);
//!
//! let state = QueryState::default()
//!     .with(QueryAction::SetSearch("sofa".into()))
//!     .with(QueryAction::ToggleSort("price".into()));
//!
//! let page = catalog.query(&state).await?;
//! assert_eq!(page.pagination.total, 1);
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;
pub mod telemetry;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        AuditEntry, BulkAction, BulkOutcome, CatalogError, CatalogEvent, CatalogService, CsvMode,
        EventBus, EventEnvelope, Exportable, FieldValue, Filterable, ModerationService, Moderated,
        NumericRange, PaginationMeta, Predicate, PriceBucket, QueryAction, QueryPage, QueryParams,
        QueryState, Record, Selection, SortDirection, SortSpec, apply_bulk_status, export_csv,
        run_query,
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Entities ===
    pub use crate::entities::{
        ApprovalStatus, Customer, Order, OrderStatus, PlatformUser, Product, ProductSubmission,
        SellerApplication, UserStatus, UserType,
    };

    // === Storage ===
    pub use crate::storage::InMemoryCatalog;

    // === Config ===
    pub use crate::config::CatalogConfig;

    // === Server ===
    pub use crate::server::{ResourceDescriptor, ResourceRegistry, ResourceRoutes, ServerBuilder};

    // === Telemetry ===
    pub use crate::telemetry::init_tracing;

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
}
