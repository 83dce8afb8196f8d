//! Subdomain endpoints scoped to a domain.

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

use super::types::{CreateSubDomainRequest, ErrorResponse, SubDomainResponse};
use crate::{
    api::error::ApiError,
    catalog::Level,
    store::{SharedStore, StoreError},
};

#[utoipa::path(
    get,
    path = "/domains/{domain_id}/subdomains",
    params(("domain_id" = String, Path, description = "Domain id")),
    responses(
        (status = 200, description = "List subdomains of the domain.", body = [SubDomainResponse]),
    ),
    tag = "subdomains"
)]
/// Lists subdomains whose parent is `domain_id`. An unknown domain yields an empty list.
pub async fn list_subdomains(
    Path(domain_id): Path<String>,
    Extension(store): Extension<SharedStore>,
) -> impl IntoResponse {
    match store.list_subdomains(&domain_id).await {
        Ok(rows) => {
            let body: Vec<SubDomainResponse> = rows.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/domains/{domain_id}/subdomains",
    request_body = CreateSubDomainRequest,
    params(("domain_id" = String, Path, description = "Domain id")),
    responses(
        (status = 201, description = "Subdomain created.", body = SubDomainResponse),
        (status = 400, description = "Malformed payload.", body = ErrorResponse),
        (status = 404, description = "Domain does not exist.", body = ErrorResponse),
    ),
    tag = "subdomains"
)]
/// Creates a subdomain under an existing domain; a missing domain returns `404`
/// and nothing is persisted.
pub async fn create_subdomain(
    Path(domain_id): Path<String>,
    Extension(store): Extension<SharedStore>,
    payload: Result<Json<CreateSubDomainRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };

    match store.create_subdomain(&domain_id, payload.into()).await {
        Ok(subdomain) => {
            info!(sub_domain_id = %subdomain.id, domain_id = %domain_id, "Subdomain created");
            (StatusCode::CREATED, Json(SubDomainResponse::from(subdomain))).into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/domains/{domain_id}/subdomains/{sub_domain_id}",
    params(
        ("domain_id" = String, Path, description = "Domain id"),
        ("sub_domain_id" = String, Path, description = "Subdomain id")
    ),
    responses(
        (status = 200, description = "Subdomain found.", body = SubDomainResponse),
        (status = 404, description = "Subdomain not found under this domain.", body = ErrorResponse),
    ),
    tag = "subdomains"
)]
/// Fetches a subdomain, answering `404` when it belongs to a different domain.
pub async fn get_subdomain(
    Path((domain_id, sub_domain_id)): Path<(String, String)>,
    Extension(store): Extension<SharedStore>,
) -> impl IntoResponse {
    match store.get_subdomain(&sub_domain_id).await {
        Ok(subdomain) if subdomain.domain_id == domain_id => {
            (StatusCode::OK, Json(SubDomainResponse::from(subdomain))).into_response()
        }
        Ok(_) => ApiError::from(StoreError::NotFound(Level::SubDomain)).into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}
