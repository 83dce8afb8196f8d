//! In-memory [`CatalogStore`] for tests and local development.
//!
//! Rows live in insertion-ordered vectors behind one `RwLock`, so each
//! operation sees a consistent snapshot. The same integrity rules as the
//! relational schema apply: parents must exist on create, ids are unique per
//! level, and a domain that still has subdomains cannot be deleted.
//!
//! Not durable and not shared across processes.

use async_trait::async_trait;
use std::sync::{PoisonError, RwLock};

use super::{CatalogStore, Result, StoreError};
use crate::catalog::{
    ids, Catalog, Domain, Level, NewEntity, NewTable, Schema, SubDomain, Table,
};

#[derive(Debug, Default)]
struct Rows {
    domains: Vec<Domain>,
    subdomains: Vec<SubDomain>,
    catalogs: Vec<Catalog>,
    schemas: Vec<Schema>,
    tables: Vec<Table>,
}

impl Rows {
    fn contains(&self, level: Level, id: &str) -> bool {
        match level {
            Level::Domain => self.domains.iter().any(|row| row.id == id),
            Level::SubDomain => self.subdomains.iter().any(|row| row.id == id),
            Level::Catalog => self.catalogs.iter().any(|row| row.id == id),
            Level::Schema => self.schemas.iter().any(|row| row.id == id),
            Level::Table => self.tables.iter().any(|row| row.id == id),
        }
    }

    /// Mirrors the parent check done before inserts.
    fn require_parent(&self, parent: Level, parent_id: &str) -> Result<()> {
        if ids::is_valid(parent, parent_id) && self.contains(parent, parent_id) {
            Ok(())
        } else {
            Err(StoreError::ParentNotFound(parent))
        }
    }

    /// Generates an id for `level`, rejecting a collision like a primary key would.
    fn fresh_id(&self, level: Level) -> Result<String> {
        let id = ids::generate(level);
        if self.contains(level, &id) {
            return Err(StoreError::Backend(format!(
                "duplicate key value violates unique constraint on {}: {id}",
                level.table()
            )));
        }
        Ok(id)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RwLock<Rows>,
}

fn poison_err<T>(_: PoisonError<T>) -> StoreError {
    StoreError::Backend("lock poisoned".to_string())
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn ping(&self) -> Result<()> {
        drop(self.rows.read().map_err(poison_err)?);
        Ok(())
    }

    async fn list_domains(&self) -> Result<Vec<Domain>> {
        let rows = self.rows.read().map_err(poison_err)?;
        Ok(rows.domains.clone())
    }

    async fn create_domain(&self, new: NewEntity) -> Result<Domain> {
        let mut rows = self.rows.write().map_err(poison_err)?;
        let domain = Domain {
            id: rows.fresh_id(Level::Domain)?,
            name: new.name,
            description: new.description,
        };
        rows.domains.push(domain.clone());
        Ok(domain)
    }

    async fn get_domain(&self, domain_id: &str) -> Result<Domain> {
        let rows = self.rows.read().map_err(poison_err)?;
        rows.domains
            .iter()
            .find(|row| row.id == domain_id)
            .cloned()
            .ok_or(StoreError::NotFound(Level::Domain))
    }

    async fn delete_domain(&self, domain_id: &str) -> Result<()> {
        let mut rows = self.rows.write().map_err(poison_err)?;
        let Some(index) = rows.domains.iter().position(|row| row.id == domain_id) else {
            return Err(StoreError::NotFound(Level::Domain));
        };
        if rows.subdomains.iter().any(|row| row.domain_id == domain_id) {
            return Err(StoreError::Backend(format!(
                "delete on domains violates foreign key constraint from subdomains: {domain_id}"
            )));
        }
        rows.domains.remove(index);
        Ok(())
    }

    async fn list_subdomains(&self, domain_id: &str) -> Result<Vec<SubDomain>> {
        let rows = self.rows.read().map_err(poison_err)?;
        Ok(rows
            .subdomains
            .iter()
            .filter(|row| row.domain_id == domain_id)
            .cloned()
            .collect())
    }

    async fn create_subdomain(&self, domain_id: &str, new: NewEntity) -> Result<SubDomain> {
        let mut rows = self.rows.write().map_err(poison_err)?;
        rows.require_parent(Level::Domain, domain_id)?;
        let subdomain = SubDomain {
            id: rows.fresh_id(Level::SubDomain)?,
            name: new.name,
            description: new.description,
            domain_id: domain_id.to_string(),
        };
        rows.subdomains.push(subdomain.clone());
        Ok(subdomain)
    }

    async fn get_subdomain(&self, sub_domain_id: &str) -> Result<SubDomain> {
        let rows = self.rows.read().map_err(poison_err)?;
        rows.subdomains
            .iter()
            .find(|row| row.id == sub_domain_id)
            .cloned()
            .ok_or(StoreError::NotFound(Level::SubDomain))
    }

    async fn list_catalogs(&self, sub_domain_id: &str) -> Result<Vec<Catalog>> {
        let rows = self.rows.read().map_err(poison_err)?;
        Ok(rows
            .catalogs
            .iter()
            .filter(|row| row.sub_domain_id == sub_domain_id)
            .cloned()
            .collect())
    }

    async fn create_catalog(&self, sub_domain_id: &str, new: NewEntity) -> Result<Catalog> {
        let mut rows = self.rows.write().map_err(poison_err)?;
        rows.require_parent(Level::SubDomain, sub_domain_id)?;
        let catalog = Catalog {
            id: rows.fresh_id(Level::Catalog)?,
            name: new.name,
            description: new.description,
            sub_domain_id: sub_domain_id.to_string(),
        };
        rows.catalogs.push(catalog.clone());
        Ok(catalog)
    }

    async fn get_catalog(&self, catalog_id: &str) -> Result<Catalog> {
        let rows = self.rows.read().map_err(poison_err)?;
        rows.catalogs
            .iter()
            .find(|row| row.id == catalog_id)
            .cloned()
            .ok_or(StoreError::NotFound(Level::Catalog))
    }

    async fn list_schemas(&self, catalog_id: &str) -> Result<Vec<Schema>> {
        let rows = self.rows.read().map_err(poison_err)?;
        Ok(rows
            .schemas
            .iter()
            .filter(|row| row.catalog_id == catalog_id)
            .cloned()
            .collect())
    }

    async fn create_schema(&self, catalog_id: &str, new: NewEntity) -> Result<Schema> {
        let mut rows = self.rows.write().map_err(poison_err)?;
        rows.require_parent(Level::Catalog, catalog_id)?;
        let schema = Schema {
            id: rows.fresh_id(Level::Schema)?,
            name: new.name,
            description: new.description,
            catalog_id: catalog_id.to_string(),
        };
        rows.schemas.push(schema.clone());
        Ok(schema)
    }

    async fn get_schema(&self, schema_id: &str) -> Result<Schema> {
        let rows = self.rows.read().map_err(poison_err)?;
        rows.schemas
            .iter()
            .find(|row| row.id == schema_id)
            .cloned()
            .ok_or(StoreError::NotFound(Level::Schema))
    }

    async fn list_tables(&self, schema_id: &str) -> Result<Vec<Table>> {
        let rows = self.rows.read().map_err(poison_err)?;
        Ok(rows
            .tables
            .iter()
            .filter(|row| row.schema_id == schema_id)
            .cloned()
            .collect())
    }

    async fn create_table(&self, schema_id: &str, new: NewTable) -> Result<Table> {
        let mut rows = self.rows.write().map_err(poison_err)?;
        rows.require_parent(Level::Schema, schema_id)?;
        let table = Table {
            id: rows.fresh_id(Level::Table)?,
            name: new.name,
            location: new.location,
            format: new.format,
            schema_id: schema_id.to_string(),
        };
        rows.tables.push(table.clone());
        Ok(table)
    }

    async fn get_table(&self, table_id: &str) -> Result<Table> {
        let rows = self.rows.read().map_err(poison_err)?;
        rows.tables
            .iter()
            .find(|row| row.id == table_id)
            .cloned()
            .ok_or(StoreError::NotFound(Level::Table))
    }
}
