//! Request/response payloads for the catalog API.
//!
//! Wire names are camelCase. Optional fields are always serialized, as `null`
//! when absent, so clients see the persisted state rather than read-side
//! defaults. These payloads are shared between handlers and `OpenAPI` generation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::{
    Catalog, Domain, NewEntity, NewTable, Schema, SubDomain, Table, DEFAULT_TABLE_FORMAT,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDomainRequest {
    pub domain_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubDomainRequest {
    pub sub_domain_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCatalogRequest {
    pub catalog_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSchemaRequest {
    pub schema_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// `format` falls back to `iceberg` only when the field is omitted; an explicit
/// `null` is kept as absent.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTableRequest {
    pub table_name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_table_format")]
    #[schema(example = "iceberg")]
    pub format: Option<String>,
}

#[allow(clippy::unnecessary_wraps)]
fn default_table_format() -> Option<String> {
    Some(DEFAULT_TABLE_FORMAT.to_string())
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DomainResponse {
    pub domain_id: String,
    pub domain_name: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubDomainResponse {
    pub sub_domain_id: String,
    pub sub_domain_name: String,
    pub description: Option<String>,
    pub domain_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub catalog_id: String,
    pub catalog_name: String,
    pub description: Option<String>,
    pub sub_domain_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchemaResponse {
    pub schema_id: String,
    pub schema_name: String,
    pub description: Option<String>,
    pub catalog_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableResponse {
    pub table_id: String,
    pub table_name: String,
    pub location: Option<String>,
    pub format: Option<String>,
    pub schema_id: String,
}

/// Error body returned for every non-2xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

impl From<CreateDomainRequest> for NewEntity {
    fn from(request: CreateDomainRequest) -> Self {
        Self {
            name: request.domain_name,
            description: request.description,
        }
    }
}

impl From<CreateSubDomainRequest> for NewEntity {
    fn from(request: CreateSubDomainRequest) -> Self {
        Self {
            name: request.sub_domain_name,
            description: request.description,
        }
    }
}

impl From<CreateCatalogRequest> for NewEntity {
    fn from(request: CreateCatalogRequest) -> Self {
        Self {
            name: request.catalog_name,
            description: request.description,
        }
    }
}

impl From<CreateSchemaRequest> for NewEntity {
    fn from(request: CreateSchemaRequest) -> Self {
        Self {
            name: request.schema_name,
            description: request.description,
        }
    }
}

impl From<CreateTableRequest> for NewTable {
    fn from(request: CreateTableRequest) -> Self {
        Self {
            name: request.table_name,
            location: request.location,
            format: request.format,
        }
    }
}

impl From<Domain> for DomainResponse {
    fn from(domain: Domain) -> Self {
        Self {
            domain_id: domain.id,
            domain_name: domain.name,
            description: domain.description,
        }
    }
}

impl From<SubDomain> for SubDomainResponse {
    fn from(subdomain: SubDomain) -> Self {
        Self {
            sub_domain_id: subdomain.id,
            sub_domain_name: subdomain.name,
            description: subdomain.description,
            domain_id: subdomain.domain_id,
        }
    }
}

impl From<Catalog> for CatalogResponse {
    fn from(catalog: Catalog) -> Self {
        Self {
            catalog_id: catalog.id,
            catalog_name: catalog.name,
            description: catalog.description,
            sub_domain_id: catalog.sub_domain_id,
        }
    }
}

impl From<Schema> for SchemaResponse {
    fn from(schema: Schema) -> Self {
        Self {
            schema_id: schema.id,
            schema_name: schema.name,
            description: schema.description,
            catalog_id: schema.catalog_id,
        }
    }
}

impl From<Table> for TableResponse {
    fn from(table: Table) -> Self {
        Self {
            table_id: table.id,
            table_name: table.name,
            location: table.location,
            format: table.format,
            schema_id: table.schema_id,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn table_format_defaults_only_when_omitted() {
        let omitted: CreateTableRequest =
            serde_json::from_value(json!({ "tableName": "orders" })).unwrap();
        assert_eq!(omitted.format.as_deref(), Some("iceberg"));
        assert_eq!(omitted.location, None);

        let explicit_null: CreateTableRequest =
            serde_json::from_value(json!({ "tableName": "orders", "format": null })).unwrap();
        assert_eq!(explicit_null.format, None);

        let delta: CreateTableRequest =
            serde_json::from_value(json!({ "tableName": "orders", "format": "delta" })).unwrap();
        assert_eq!(delta.format.as_deref(), Some("delta"));
    }

    #[test]
    fn name_field_is_required() {
        let missing = serde_json::from_value::<CreateDomainRequest>(json!({ "description": "x" }));
        assert!(missing.is_err());

        let snake_case = serde_json::from_value::<CreateSubDomainRequest>(
            json!({ "sub_domain_name": "EMEA" }),
        );
        assert!(snake_case.is_err());
    }

    #[test]
    fn absent_description_serializes_as_null() {
        let response = DomainResponse::from(Domain {
            id: "dom-a1b2c3".to_string(),
            name: "Sales".to_string(),
            description: None,
        });
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "domainId": "dom-a1b2c3", "domainName": "Sales", "description": null })
        );
    }

    #[test]
    fn subdomain_response_uses_camel_case() {
        let response = SubDomainResponse::from(SubDomain {
            id: "sd-000001".to_string(),
            name: "EMEA".to_string(),
            description: Some("Europe".to_string()),
            domain_id: "dom-a1b2c3".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "subDomainId": "sd-000001",
                "subDomainName": "EMEA",
                "description": "Europe",
                "domainId": "dom-a1b2c3"
            })
        );
    }
}
