//! Catalog endpoints nested under `/domains/{domain_id}/subdomains/{sub_domain_id}`.
//!
//! The domain segment only addresses the resource; lookups and parent checks
//! are keyed by the subdomain id.

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{debug, info};

use super::types::{CatalogResponse, CreateCatalogRequest, ErrorResponse};
use crate::{
    api::error::ApiError,
    catalog::Level,
    store::{SharedStore, StoreError},
};

#[utoipa::path(
    get,
    path = "/domains/{domain_id}/subdomains/{sub_domain_id}/catalogs",
    params(
        ("domain_id" = String, Path, description = "Domain id"),
        ("sub_domain_id" = String, Path, description = "Subdomain id")
    ),
    responses(
        (status = 200, description = "List catalogs of the subdomain.", body = [CatalogResponse]),
    ),
    tag = "catalogs"
)]
pub async fn list_catalogs(
    Path((domain_id, sub_domain_id)): Path<(String, String)>,
    Extension(store): Extension<SharedStore>,
) -> impl IntoResponse {
    debug!(domain_id = %domain_id, "Listing catalogs by subdomain");
    match store.list_catalogs(&sub_domain_id).await {
        Ok(rows) => {
            let body: Vec<CatalogResponse> = rows.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/domains/{domain_id}/subdomains/{sub_domain_id}/catalogs",
    request_body = CreateCatalogRequest,
    params(
        ("domain_id" = String, Path, description = "Domain id"),
        ("sub_domain_id" = String, Path, description = "Subdomain id")
    ),
    responses(
        (status = 201, description = "Catalog created.", body = CatalogResponse),
        (status = 400, description = "Malformed payload.", body = ErrorResponse),
        (status = 404, description = "Subdomain does not exist.", body = ErrorResponse),
    ),
    tag = "catalogs"
)]
/// Creates a catalog under an existing subdomain.
pub async fn create_catalog(
    Path((domain_id, sub_domain_id)): Path<(String, String)>,
    Extension(store): Extension<SharedStore>,
    payload: Result<Json<CreateCatalogRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };

    match store.create_catalog(&sub_domain_id, payload.into()).await {
        Ok(catalog) => {
            info!(
                catalog_id = %catalog.id,
                sub_domain_id = %sub_domain_id,
                domain_id = %domain_id,
                "Catalog created"
            );
            (StatusCode::CREATED, Json(CatalogResponse::from(catalog))).into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/domains/{domain_id}/subdomains/{sub_domain_id}/catalogs/{catalog_id}",
    params(
        ("domain_id" = String, Path, description = "Domain id"),
        ("sub_domain_id" = String, Path, description = "Subdomain id"),
        ("catalog_id" = String, Path, description = "Catalog id")
    ),
    responses(
        (status = 200, description = "Catalog found.", body = CatalogResponse),
        (status = 404, description = "Catalog not found under this subdomain.", body = ErrorResponse),
    ),
    tag = "catalogs"
)]
pub async fn get_catalog(
    Path((_domain_id, sub_domain_id, catalog_id)): Path<(String, String, String)>,
    Extension(store): Extension<SharedStore>,
) -> impl IntoResponse {
    match store.get_catalog(&catalog_id).await {
        Ok(catalog) if catalog.sub_domain_id == sub_domain_id => {
            (StatusCode::OK, Json(CatalogResponse::from(catalog))).into_response()
        }
        Ok(_) => ApiError::from(StoreError::NotFound(Level::Catalog)).into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}
