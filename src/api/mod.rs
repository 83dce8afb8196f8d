use crate::store::SharedStore;
use anyhow::Result;
use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderName, HeaderValue, Request},
    routing::get,
    Extension, Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::PropagateRequestIdLayer, set_header::SetRequestHeaderLayer, trace::TraceLayer,
};
use tracing::{info, info_span, Span};
use ulid::Ulid;
use utoipa_swagger_ui::SwaggerUi;

pub(crate) mod error;
pub mod handlers;
mod openapi;

pub use openapi::openapi;

use handlers::{catalogs, domains, health, schemas, subdomains, tables};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the application router around an explicitly constructed store.
#[must_use]
pub fn router(store: SharedStore) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/health", get(health::health))
        .route(
            "/domains",
            get(domains::list_domains).post(domains::create_domain),
        )
        .route(
            "/domains/:domain_id",
            get(domains::get_domain).delete(domains::delete_domain),
        )
        .route(
            "/domains/:domain_id/subdomains",
            get(subdomains::list_subdomains).post(subdomains::create_subdomain),
        )
        .route(
            "/domains/:domain_id/subdomains/:sub_domain_id",
            get(subdomains::get_subdomain),
        )
        .route(
            "/domains/:domain_id/subdomains/:sub_domain_id/catalogs",
            get(catalogs::list_catalogs).post(catalogs::create_catalog),
        )
        .route(
            "/domains/:domain_id/subdomains/:sub_domain_id/catalogs/:catalog_id",
            get(catalogs::get_catalog),
        )
        .route(
            "/catalogs/:catalog_id/schemas",
            get(schemas::list_schemas).post(schemas::create_schema),
        )
        .route(
            "/catalogs/:catalog_id/schemas/:schema_id",
            get(schemas::get_schema),
        )
        .route(
            "/schemas/:schema_id/tables",
            get(tables::list_tables).post(tables::create_table),
        )
        .route(
            "/schemas/:schema_id/tables/:table_id",
            get(tables::get_table),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    request_id.clone(),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(Extension(store)),
        )
}

/// Start the server
/// # Errors
/// Return error if failed to bind the port or serve requests
pub async fn new(port: u16, store: SharedStore) -> Result<()> {
    let app = router(store);

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Gracefully shutdown");
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
        request_id
    )
}
