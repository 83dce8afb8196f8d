//! Table endpoints scoped to a schema, the leaves of the hierarchy.
//!
//! A create request without `format` is stored as `iceberg`.

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

use super::types::{CreateTableRequest, ErrorResponse, TableResponse};
use crate::{
    api::error::ApiError,
    catalog::Level,
    store::{SharedStore, StoreError},
};

#[utoipa::path(
    get,
    path = "/schemas/{schema_id}/tables",
    params(("schema_id" = String, Path, description = "Schema id")),
    responses(
        (status = 200, description = "List tables of the schema.", body = [TableResponse]),
    ),
    tag = "tables"
)]
pub async fn list_tables(
    Path(schema_id): Path<String>,
    Extension(store): Extension<SharedStore>,
) -> impl IntoResponse {
    match store.list_tables(&schema_id).await {
        Ok(rows) => {
            let body: Vec<TableResponse> = rows.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/schemas/{schema_id}/tables",
    request_body = CreateTableRequest,
    params(("schema_id" = String, Path, description = "Schema id")),
    responses(
        (status = 201, description = "Table created.", body = TableResponse),
        (status = 400, description = "Malformed payload.", body = ErrorResponse),
        (status = 404, description = "Schema does not exist.", body = ErrorResponse),
    ),
    tag = "tables"
)]
pub async fn create_table(
    Path(schema_id): Path<String>,
    Extension(store): Extension<SharedStore>,
    payload: Result<Json<CreateTableRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };

    match store.create_table(&schema_id, payload.into()).await {
        Ok(table) => {
            info!(table_id = %table.id, schema_id = %schema_id, "Table created");
            (StatusCode::CREATED, Json(TableResponse::from(table))).into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/schemas/{schema_id}/tables/{table_id}",
    params(
        ("schema_id" = String, Path, description = "Schema id"),
        ("table_id" = String, Path, description = "Table id")
    ),
    responses(
        (status = 200, description = "Table found.", body = TableResponse),
        (status = 404, description = "Table not found under this schema.", body = ErrorResponse),
    ),
    tag = "tables"
)]
pub async fn get_table(
    Path((schema_id, table_id)): Path<(String, String)>,
    Extension(store): Extension<SharedStore>,
) -> impl IntoResponse {
    match store.get_table(&table_id).await {
        Ok(table) if table.schema_id == schema_id => {
            (StatusCode::OK, Json(TableResponse::from(table))).into_response()
        }
        Ok(_) => ApiError::from(StoreError::NotFound(Level::Table)).into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}
