//! HTTP handlers for catalog resources
//!
//! Handlers are generic over the record type and the service behind it, so
//! one set of functions serves every registered resource.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::PathRejection},
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::CatalogConfig;
use crate::core::error::{CatalogError, QueryError, ValidationError};
use crate::core::export::{Exportable, export_csv};
use crate::core::mutation::{AuditEntry, BulkAction, BulkOutcome};
use crate::core::query::{QueryPage, QueryParams};
use crate::core::record::{Moderated, Record};
use crate::core::selection::Selection;
use crate::core::service::{CatalogService, ModerationService};

/// State shared by the handlers of one resource
pub struct ResourceState<S> {
    pub service: Arc<S>,
    pub config: Arc<CatalogConfig>,
}

impl<S> Clone for ResourceState<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            config: self.config.clone(),
        }
    }
}

/// Body of `POST /{resource}/bulk-status`
#[derive(Debug, Deserialize)]
pub struct BulkStatusRequest<Id> {
    pub ids: Vec<Id>,
    pub action: BulkAction,
    #[serde(default)]
    pub actor: Option<String>,
}

/// Response for the audit endpoint
#[derive(Debug, Serialize)]
pub struct AuditResponse {
    pub entries: Vec<AuditEntry>,
    pub count: usize,
}

/// `GET /{resource}`: filter, sort and paginate
pub async fn list_records<T, S>(
    State(state): State<ResourceState<S>>,
    Query(params): Query<QueryParams>,
) -> Result<Json<QueryPage<T>>, CatalogError>
where
    T: Record + Serialize,
    S: CatalogService<T>,
{
    let query = params.to_state::<T>(&state.config)?;
    let page = state.service.query(&query).await?;
    Ok(Json(page))
}

/// `GET /{resource}/{id}`
///
/// Ids are matched after the static routes, so a record whose id is `audit`,
/// `bulk-status` or `export.csv` cannot be fetched through this route.
pub async fn get_record<T, S>(
    State(state): State<ResourceState<S>>,
    id: Result<Path<T::Id>, PathRejection>,
) -> Result<Json<T>, CatalogError>
where
    T: Record + Serialize,
    S: CatalogService<T>,
{
    let Path(id) = id.map_err(|rejection| ValidationError::FieldError {
        field: "id".to_string(),
        message: rejection.body_text(),
    })?;

    match state.service.get(&id).await? {
        Some(record) => Ok(Json(record)),
        None => Err(QueryError::RecordNotFound {
            resource: T::resource_name().to_string(),
            id: id.to_string(),
        }
        .into()),
    }
}

/// `POST /{resource}/bulk-status`: apply one action to the selected ids
pub async fn bulk_status<T, S>(
    State(state): State<ResourceState<S>>,
    Json(request): Json<BulkStatusRequest<T::Id>>,
) -> Result<Json<BulkOutcome<T::Id>>, CatalogError>
where
    T: Moderated,
    S: ModerationService<T>,
{
    let actor = request
        .actor
        .filter(|a| !a.trim().is_empty())
        .unwrap_or_else(|| state.config.moderation.actor.clone());
    let selection: Selection<T::Id> = request.ids.into_iter().collect();

    let outcome = state
        .service
        .bulk_update_status(&selection, request.action, &actor)
        .await?;
    Ok(Json(outcome))
}

/// `GET /{resource}/audit`
pub async fn audit_log<T, S>(
    State(state): State<ResourceState<S>>,
) -> Result<Json<AuditResponse>, CatalogError>
where
    T: Moderated,
    S: ModerationService<T>,
{
    let entries = state.service.audit_log().await?;
    Ok(Json(AuditResponse {
        count: entries.len(),
        entries,
    }))
}

/// `GET /{resource}/export.csv`: the filtered and sorted rows, unpaginated
pub async fn export_records<T, S>(
    State(state): State<ResourceState<S>>,
    Query(params): Query<QueryParams>,
) -> Result<Response, CatalogError>
where
    T: Record + Exportable,
    S: CatalogService<T>,
{
    let query = params.to_state::<T>(&state.config)?;
    let rows = state.service.query_all(&query).await?;
    let body = export_csv(&rows, state.config.export.csv_mode)?;

    tracing::debug!(resource = T::resource_name(), rows = rows.len(), "csv export");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", T::csv_file_name()),
            ),
        ],
        body,
    )
        .into_response())
}

/// Fallback for paths no resource claims
pub async fn unknown_resource(uri: Uri) -> CatalogError {
    let resource = uri
        .path()
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default()
        .to_string();
    QueryError::UnknownResource { resource }.into()
}
