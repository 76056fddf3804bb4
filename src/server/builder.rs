//! ServerBuilder for fluent API to build HTTP servers

use super::handlers::unknown_resource;
use super::resource_registry::{ResourceDescriptor, ResourceRegistry};
use crate::config::CatalogConfig;
use anyhow::Result;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for creating HTTP servers with auto-registered routes
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(CatalogConfig::from_yaml_file("catalog.yaml")?)
///     .register(ResourceRoutes::listing(InMemoryCatalog::with_records(products)))
///     .register(
///         ResourceRoutes::listing(InMemoryCatalog::with_records(submissions))
///             .with_moderation()
///             .with_export(),
///     )
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: CatalogConfig,
    registry: ResourceRegistry,
    custom_routes: Vec<Router>,
    cors: bool,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the default configuration
    pub fn new() -> Self {
        Self {
            config: CatalogConfig::default(),
            registry: ResourceRegistry::new(),
            custom_routes: Vec::new(),
            cors: false,
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = config;
        self
    }

    /// Merge a configuration on top of the current one
    pub fn merge_config(mut self, overlay: CatalogConfig) -> Self {
        self.config = self.config.merge(overlay);
        self
    }

    /// Add custom routes to the server
    ///
    /// Use this for endpoints outside the resource pattern, such as
    /// authentication or webhooks.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Allow cross-origin requests from any origin
    pub fn with_permissive_cors(mut self) -> Self {
        self.cors = true;
        self
    }

    /// Register a resource
    pub fn register(mut self, descriptor: impl ResourceDescriptor + 'static) -> Self {
        self.registry.register(Box::new(descriptor));
        self
    }

    /// The configuration handlers will see
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Build the final REST router
    ///
    /// This generates:
    /// - Health check routes
    /// - Listing, moderation and export routes for every registered resource
    /// - A `/resources` introspection route
    /// - A JSON 404 for unknown paths
    pub fn build(self) -> Result<Router> {
        self.config.validate()?;
        if self.registry.resource_names().is_empty() {
            anyhow::bail!("No resources registered. Call .register()");
        }

        let config = Arc::new(self.config);
        let endpoints = self.registry.endpoints();

        let mut app = health_routes()
            .route(
                "/resources",
                get(move || {
                    let endpoints = endpoints.clone();
                    async move { Json(json!({ "resources": endpoints })) }
                }),
            )
            .merge(self.registry.build_routes(config));

        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        app = app.fallback(unknown_resource);

        if self.cors {
            app = app.layer(CorsLayer::permissive());
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    ///
    /// # Example
    ///
    /// ```ignore
    /// ServerBuilder::new()
    ///     .register(ResourceRoutes::listing(catalog))
    ///     .serve("127.0.0.1:3000").await?;
    /// ```
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build health check routes
fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "storefront-catalog"
    }))
}

/// Wait for a shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
