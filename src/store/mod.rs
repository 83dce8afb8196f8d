//! Repository operations for the catalog hierarchy.
//!
//! [`CatalogStore`] is the only seam between HTTP handlers and persistence.
//! Handlers receive an explicitly constructed store (see [`SharedStore`]), so
//! there is no process-wide engine or session factory.
//!
//! Every operation is one unit of work: create operations check the parent and
//! insert inside a single transaction, delete runs in its own transaction, and
//! reads use a pooled connection that is released when the call returns.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use std::sync::Arc;

use crate::catalog::{Catalog, Domain, Level, NewEntity, NewTable, Schema, SubDomain, Table};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Store handle shared by every request.
pub type SharedStore = Arc<dyn CatalogStore>;

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The addressed entity does not exist.
    #[error("{0} not found.")]
    NotFound(Level),
    /// A create operation referenced a parent of this level that does not exist.
    #[error("{0} does not exist.")]
    ParentNotFound(Level),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    /// Failure inside a non-SQL backend (constraint violation, poisoned lock).
    #[error("storage error: {0}")]
    Backend(String),
}

impl StoreError {
    /// `true` for the two "referenced entity is absent" cases.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::ParentNotFound(_))
    }
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<()>;

    async fn list_domains(&self) -> Result<Vec<Domain>>;
    async fn create_domain(&self, new: NewEntity) -> Result<Domain>;
    async fn get_domain(&self, domain_id: &str) -> Result<Domain>;
    /// Removes the domain row only; children are left to the engine's FK policy.
    async fn delete_domain(&self, domain_id: &str) -> Result<()>;

    async fn list_subdomains(&self, domain_id: &str) -> Result<Vec<SubDomain>>;
    async fn create_subdomain(&self, domain_id: &str, new: NewEntity) -> Result<SubDomain>;
    async fn get_subdomain(&self, sub_domain_id: &str) -> Result<SubDomain>;

    async fn list_catalogs(&self, sub_domain_id: &str) -> Result<Vec<Catalog>>;
    async fn create_catalog(&self, sub_domain_id: &str, new: NewEntity) -> Result<Catalog>;
    async fn get_catalog(&self, catalog_id: &str) -> Result<Catalog>;

    async fn list_schemas(&self, catalog_id: &str) -> Result<Vec<Schema>>;
    async fn create_schema(&self, catalog_id: &str, new: NewEntity) -> Result<Schema>;
    async fn get_schema(&self, schema_id: &str) -> Result<Schema>;

    async fn list_tables(&self, schema_id: &str) -> Result<Vec<Table>>;
    async fn create_table(&self, schema_id: &str, new: NewTable) -> Result<Table>;
    async fn get_table(&self, table_id: &str) -> Result<Table>;
}
