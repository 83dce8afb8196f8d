//! Schema endpoints scoped to a catalog.

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

use super::types::{CreateSchemaRequest, ErrorResponse, SchemaResponse};
use crate::{
    api::error::ApiError,
    catalog::Level,
    store::{SharedStore, StoreError},
};

#[utoipa::path(
    get,
    path = "/catalogs/{catalog_id}/schemas",
    params(("catalog_id" = String, Path, description = "Catalog id")),
    responses(
        (status = 200, description = "List schemas of the catalog.", body = [SchemaResponse]),
    ),
    tag = "schemas"
)]
pub async fn list_schemas(
    Path(catalog_id): Path<String>,
    Extension(store): Extension<SharedStore>,
) -> impl IntoResponse {
    match store.list_schemas(&catalog_id).await {
        Ok(rows) => {
            let body: Vec<SchemaResponse> = rows.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/catalogs/{catalog_id}/schemas",
    request_body = CreateSchemaRequest,
    params(("catalog_id" = String, Path, description = "Catalog id")),
    responses(
        (status = 201, description = "Schema created.", body = SchemaResponse),
        (status = 400, description = "Malformed payload.", body = ErrorResponse),
        (status = 404, description = "Catalog does not exist.", body = ErrorResponse),
    ),
    tag = "schemas"
)]
pub async fn create_schema(
    Path(catalog_id): Path<String>,
    Extension(store): Extension<SharedStore>,
    payload: Result<Json<CreateSchemaRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };

    match store.create_schema(&catalog_id, payload.into()).await {
        Ok(schema) => {
            info!(schema_id = %schema.id, catalog_id = %catalog_id, "Schema created");
            (StatusCode::CREATED, Json(SchemaResponse::from(schema))).into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/catalogs/{catalog_id}/schemas/{schema_id}",
    params(
        ("catalog_id" = String, Path, description = "Catalog id"),
        ("schema_id" = String, Path, description = "Schema id")
    ),
    responses(
        (status = 200, description = "Schema found.", body = SchemaResponse),
        (status = 404, description = "Schema not found under this catalog.", body = ErrorResponse),
    ),
    tag = "schemas"
)]
pub async fn get_schema(
    Path((catalog_id, schema_id)): Path<(String, String)>,
    Extension(store): Extension<SharedStore>,
) -> impl IntoResponse {
    match store.get_schema(&schema_id).await {
        Ok(schema) if schema.catalog_id == catalog_id => {
            (StatusCode::OK, Json(SchemaResponse::from(schema))).into_response()
        }
        Ok(_) => ApiError::from(StoreError::NotFound(Level::Schema)).into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}
