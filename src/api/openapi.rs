use super::handlers::{catalogs, domains, health, schemas, subdomains, tables, types};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        domains::list_domains,
        domains::create_domain,
        domains::get_domain,
        domains::delete_domain,
        subdomains::list_subdomains,
        subdomains::create_subdomain,
        subdomains::get_subdomain,
        catalogs::list_catalogs,
        catalogs::create_catalog,
        catalogs::get_catalog,
        schemas::list_schemas,
        schemas::create_schema,
        schemas::get_schema,
        tables::list_tables,
        tables::create_table,
        tables::get_table,
    ),
    components(schemas(
        health::Health,
        types::CreateDomainRequest,
        types::CreateSubDomainRequest,
        types::CreateCatalogRequest,
        types::CreateSchemaRequest,
        types::CreateTableRequest,
        types::DomainResponse,
        types::SubDomainResponse,
        types::CatalogResponse,
        types::SchemaResponse,
        types::TableResponse,
        types::ErrorResponse,
    )),
    tags(
        (name = "health", description = "Service and storage health"),
        (name = "domains", description = "Root level of the catalog hierarchy"),
        (name = "subdomains", description = "Subdomains scoped to a domain"),
        (name = "catalogs", description = "Catalogs scoped to a subdomain"),
        (name = "schemas", description = "Schemas scoped to a catalog"),
        (name = "tables", description = "Tables scoped to a schema"),
    )
)]
struct ApiDoc;

/// `OpenAPI` document for every routed endpoint. Info (title, version,
/// description, contact, license) comes from Cargo metadata.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
