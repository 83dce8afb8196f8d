//! Domain endpoints, the root of the catalog hierarchy.
//!
//! Domains are the only level that can be deleted. Deleting removes the domain
//! row alone; a domain that still owns subdomains is rejected by the storage
//! foreign key and surfaces as a server error.

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

use super::types::{CreateDomainRequest, DomainResponse, ErrorResponse};
use crate::{api::error::ApiError, store::SharedStore};

#[utoipa::path(
    get,
    path = "/domains",
    responses(
        (status = 200, description = "List domains.", body = [DomainResponse]),
    ),
    tag = "domains"
)]
/// Lists every domain in storage order.
pub async fn list_domains(Extension(store): Extension<SharedStore>) -> impl IntoResponse {
    match store.list_domains().await {
        Ok(rows) => {
            let body: Vec<DomainResponse> = rows.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/domains",
    request_body = CreateDomainRequest,
    responses(
        (status = 201, description = "Domain created.", body = DomainResponse),
        (status = 400, description = "Malformed payload.", body = ErrorResponse),
    ),
    tag = "domains"
)]
/// Creates a domain with a server-generated `dom-` id.
pub async fn create_domain(
    Extension(store): Extension<SharedStore>,
    payload: Result<Json<CreateDomainRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };

    match store.create_domain(payload.into()).await {
        Ok(domain) => {
            info!(domain_id = %domain.id, "Domain created");
            (StatusCode::CREATED, Json(DomainResponse::from(domain))).into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/domains/{domain_id}",
    params(("domain_id" = String, Path, description = "Domain id")),
    responses(
        (status = 200, description = "Domain found.", body = DomainResponse),
        (status = 404, description = "Domain not found.", body = ErrorResponse),
    ),
    tag = "domains"
)]
pub async fn get_domain(
    Path(domain_id): Path<String>,
    Extension(store): Extension<SharedStore>,
) -> impl IntoResponse {
    match store.get_domain(&domain_id).await {
        Ok(domain) => (StatusCode::OK, Json(DomainResponse::from(domain))).into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/domains/{domain_id}",
    params(("domain_id" = String, Path, description = "Domain id")),
    responses(
        (status = 204, description = "Domain deleted."),
        (status = 404, description = "Domain not found.", body = ErrorResponse),
    ),
    tag = "domains"
)]
/// Deletes a single domain row. A second delete of the same id returns `404`.
pub async fn delete_domain(
    Path(domain_id): Path<String>,
    Extension(store): Extension<SharedStore>,
) -> impl IntoResponse {
    match store.delete_domain(&domain_id).await {
        Ok(()) => {
            info!(domain_id = %domain_id, "Domain deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}
