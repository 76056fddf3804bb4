//! Server module for building HTTP servers with auto-registered routes
//!
//! This module provides a `ServerBuilder` that registers, per resource:
//! - `GET /{resource}` listing with filters, sort and pagination
//! - `POST /{resource}/bulk-status` and `GET /{resource}/audit` for moderated records
//! - `GET /{resource}/export.csv` for exportable records

pub mod builder;
pub mod handlers;
pub mod resource_registry;

pub use builder::ServerBuilder;
pub use handlers::{AuditResponse, BulkStatusRequest, ResourceState};
pub use resource_registry::{ResourceDescriptor, ResourceRegistry, ResourceRoutes};
