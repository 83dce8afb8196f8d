//! Persisted catalog entities.
//!
//! These are storage-facing rows; the HTTP layer translates them to and from
//! its own camelCase payloads.

/// Fields shared by every create operation except tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntity {
    pub name: String,
    pub description: Option<String>,
}

/// Fields for creating a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTable {
    pub name: String,
    pub location: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubDomain {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub domain_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub sub_domain_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub catalog_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub id: String,
    pub name: String,
    pub location: Option<String>,
    pub format: Option<String>,
    pub schema_id: String,
}
