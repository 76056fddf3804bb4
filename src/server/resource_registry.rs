//! Resource registry for managing resource descriptors and generating their routes

use super::handlers::{
    ResourceState, audit_log, bulk_status, export_records, get_record, list_records,
};
use crate::config::CatalogConfig;
use crate::core::export::Exportable;
use crate::core::record::{Moderated, Record};
use crate::core::service::{CatalogService, ModerationService};
use axum::Router;
use axum::routing::{get, post};
use indexmap::IndexMap;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;

/// Trait that describes how to build routes for a resource
///
/// Each registered record type (products, orders, submissions, etc.) is
/// exposed through one descriptor.
pub trait ResourceDescriptor: Send + Sync {
    /// The plural resource name (e.g., "orders")
    fn resource_name(&self) -> &str;

    /// Paths served under `/{resource}`, for introspection
    fn endpoints(&self) -> Vec<String>;

    /// Build the routes for this resource
    fn build_routes(&self, config: Arc<CatalogConfig>) -> Router;
}

/// Routes of one record type backed by service `S`
///
/// Starts with the listing route; moderation and export routes are opted in
/// where the record type supports them.
///
/// The static paths `audit`, `bulk-status` and `export.csv` win over
/// `/{resource}/{id}`, so ids equal to those segments are only reachable
/// through the listing.
pub struct ResourceRoutes<T, S> {
    service: Arc<S>,
    router: Router<ResourceState<S>>,
    endpoints: Vec<String>,
    _record: PhantomData<fn() -> T>,
}

impl<T, S> ResourceRoutes<T, S>
where
    T: Record + Serialize,
    S: CatalogService<T> + 'static,
{
    /// `GET /{resource}` and `GET /{resource}/{id}`
    pub fn listing(service: S) -> Self {
        Self::from_arc(Arc::new(service))
    }

    /// Same as [`listing`](Self::listing) for a service shared elsewhere
    pub fn from_arc(service: Arc<S>) -> Self {
        let path = format!("/{}", T::resource_name());
        let item = format!("/{}/{{id}}", T::resource_name());
        Self {
            service,
            router: Router::new()
                .route(&path, get(list_records::<T, S>))
                .route(&item, get(get_record::<T, S>)),
            endpoints: vec![path, item],
            _record: PhantomData,
        }
    }
}

impl<T, S> ResourceRoutes<T, S>
where
    T: Moderated,
    S: ModerationService<T> + 'static,
{
    /// `POST /{resource}/bulk-status` and `GET /{resource}/audit`
    pub fn with_moderation(mut self) -> Self {
        let bulk = format!("/{}/bulk-status", T::resource_name());
        let audit = format!("/{}/audit", T::resource_name());
        self.router = self
            .router
            .route(&bulk, post(bulk_status::<T, S>))
            .route(&audit, get(audit_log::<T, S>));
        self.endpoints.extend([bulk, audit]);
        self
    }
}

impl<T, S> ResourceRoutes<T, S>
where
    T: Record + Exportable,
    S: CatalogService<T> + 'static,
{
    /// `GET /{resource}/export.csv`
    pub fn with_export(mut self) -> Self {
        let path = format!("/{}/export.csv", T::resource_name());
        self.router = self.router.route(&path, get(export_records::<T, S>));
        self.endpoints.push(path);
        self
    }
}

impl<T, S> ResourceDescriptor for ResourceRoutes<T, S>
where
    T: Record,
    S: Send + Sync + 'static,
{
    fn resource_name(&self) -> &str {
        T::resource_name()
    }

    fn endpoints(&self) -> Vec<String> {
        self.endpoints.clone()
    }

    fn build_routes(&self, config: Arc<CatalogConfig>) -> Router {
        self.router.clone().with_state(ResourceState {
            service: self.service.clone(),
            config,
        })
    }
}

/// Registry for all resources served by the application
///
/// Resources are kept in registration order.
#[derive(Default)]
pub struct ResourceRegistry {
    descriptors: IndexMap<String, Box<dyn ResourceDescriptor>>,
}

impl ResourceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: IndexMap::new(),
        }
    }

    /// Register a resource descriptor
    ///
    /// The resource name is used as the key; registering it again replaces
    /// the earlier descriptor.
    pub fn register(&mut self, descriptor: Box<dyn ResourceDescriptor>) {
        let name = descriptor.resource_name().to_string();
        self.descriptors.insert(name, descriptor);
    }

    /// Build a router with all registered resource routes
    pub fn build_routes(&self, config: Arc<CatalogConfig>) -> Router {
        let mut router = Router::new();

        for descriptor in self.descriptors.values() {
            router = router.merge(descriptor.build_routes(config.clone()));
        }

        router
    }

    /// Get all registered resource names
    pub fn resource_names(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }

    /// Every registered endpoint, grouped by resource
    pub fn endpoints(&self) -> IndexMap<String, Vec<String>> {
        self.descriptors
            .iter()
            .map(|(name, d)| (name.clone(), d.endpoints()))
            .collect()
    }
}
