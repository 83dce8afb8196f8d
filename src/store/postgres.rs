//! PostgreSQL-backed [`CatalogStore`].
//!
//! Queries are runtime-checked (`sqlx::query`) so the crate builds without a
//! live database. Create operations run the parent check and the insert in one
//! transaction; dropping an uncommitted transaction rolls it back, so every
//! early return releases the session.

use async_trait::async_trait;
use sqlx::{
    postgres::{PgPoolOptions, PgRow},
    Connection, PgPool, Postgres, Row, Transaction,
};
use std::time::Duration;
use tracing::{debug, info, instrument};

use super::{CatalogStore, Result, StoreError};
use crate::catalog::{
    ids, Catalog, Domain, Level, NewEntity, NewTable, Schema, SubDomain, Table,
};

/// Migrations embedded at build time from `./migrations`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool against `dsn`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be reached.
    pub async fn connect(dsn: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .min_connections(1)
            .max_connections(max_connections)
            .max_lifetime(Duration::from_secs(60 * 2))
            .test_before_acquire(true)
            .connect(dsn)
            .await?;

        Ok(Self::new(pool))
    }

    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Applies pending schema migrations.
    ///
    /// # Errors
    /// Returns an error if a migration fails or was modified after being applied.
    pub async fn migrate(&self) -> Result<()> {
        MIGRATOR.run(&self.pool).await?;
        info!("Database migrations applied");
        Ok(())
    }
}

/// Returns `true` when a row with `id` exists at `level`.
async fn exists(tx: &mut Transaction<'_, Postgres>, level: Level, id: &str) -> Result<bool> {
    let query = format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = $1) AS found",
        level.table(),
        level.id_column()
    );
    let row = sqlx::query(&query).bind(id).fetch_one(&mut **tx).await?;
    Ok(row.try_get("found")?)
}

/// Opens a transaction and fails with `ParentNotFound` when the parent is absent.
async fn begin_under_parent(
    pool: &PgPool,
    parent: Level,
    parent_id: &str,
) -> Result<Transaction<'static, Postgres>> {
    if !ids::is_valid(parent, parent_id) {
        debug!("{parent} id {parent_id} is malformed");
        return Err(StoreError::ParentNotFound(parent));
    }
    let mut tx = pool.begin().await?;
    if !exists(&mut tx, parent, parent_id).await? {
        debug!("{parent} {parent_id} does not exist");
        return Err(StoreError::ParentNotFound(parent));
    }
    Ok(tx)
}

fn domain_from_row(row: &PgRow) -> Result<Domain> {
    Ok(Domain {
        id: row.try_get("domain_id")?,
        name: row.try_get("domain_name")?,
        description: row.try_get("description")?,
    })
}

fn subdomain_from_row(row: &PgRow) -> Result<SubDomain> {
    Ok(SubDomain {
        id: row.try_get("sub_domain_id")?,
        name: row.try_get("sub_domain_name")?,
        description: row.try_get("description")?,
        domain_id: row.try_get("domain_id")?,
    })
}

fn catalog_from_row(row: &PgRow) -> Result<Catalog> {
    Ok(Catalog {
        id: row.try_get("catalog_id")?,
        name: row.try_get("catalog_name")?,
        description: row.try_get("description")?,
        sub_domain_id: row.try_get("sub_domain_id")?,
    })
}

fn schema_from_row(row: &PgRow) -> Result<Schema> {
    Ok(Schema {
        id: row.try_get("schema_id")?,
        name: row.try_get("schema_name")?,
        description: row.try_get("description")?,
        catalog_id: row.try_get("catalog_id")?,
    })
}

fn table_from_row(row: &PgRow) -> Result<Table> {
    Ok(Table {
        id: row.try_get("table_id")?,
        name: row.try_get("table_name")?,
        location: row.try_get("location")?,
        format: row.try_get("format")?,
        schema_id: row.try_get("schema_id")?,
    })
}

#[async_trait]
impl CatalogStore for PgStore {
    async fn ping(&self) -> Result<()> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_domains(&self) -> Result<Vec<Domain>> {
        let rows = sqlx::query("SELECT domain_id, domain_name, description FROM domains")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(domain_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn create_domain(&self, new: NewEntity) -> Result<Domain> {
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query(
            r"
            INSERT INTO domains (domain_id, domain_name, description)
            VALUES ($1, $2, $3)
            RETURNING domain_id, domain_name, description
            ",
        )
        .bind(ids::generate(Level::Domain))
        .bind(&new.name)
        .bind(&new.description)
        .fetch_one(&mut *tx)
        .await?;
        let domain = domain_from_row(&row)?;
        tx.commit().await?;
        Ok(domain)
    }

    #[instrument(skip(self))]
    async fn get_domain(&self, domain_id: &str) -> Result<Domain> {
        let row = sqlx::query(
            "SELECT domain_id, domain_name, description FROM domains WHERE domain_id = $1",
        )
        .bind(domain_id)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => domain_from_row(&row),
            None => Err(StoreError::NotFound(Level::Domain)),
        }
    }

    #[instrument(skip(self))]
    async fn delete_domain(&self, domain_id: &str) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM domains WHERE domain_id = $1")
            .bind(domain_id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(Level::Domain));
        }
        tx.commit().await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_subdomains(&self, domain_id: &str) -> Result<Vec<SubDomain>> {
        let rows = sqlx::query(
            r"
            SELECT sub_domain_id, sub_domain_name, description, domain_id
            FROM subdomains
            WHERE domain_id = $1
            ",
        )
        .bind(domain_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(subdomain_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn create_subdomain(&self, domain_id: &str, new: NewEntity) -> Result<SubDomain> {
        let mut tx = begin_under_parent(&self.pool, Level::Domain, domain_id).await?;
        let row = sqlx::query(
            r"
            INSERT INTO subdomains (sub_domain_id, sub_domain_name, description, domain_id)
            VALUES ($1, $2, $3, $4)
            RETURNING sub_domain_id, sub_domain_name, description, domain_id
            ",
        )
        .bind(ids::generate(Level::SubDomain))
        .bind(&new.name)
        .bind(&new.description)
        .bind(domain_id)
        .fetch_one(&mut *tx)
        .await?;
        let subdomain = subdomain_from_row(&row)?;
        tx.commit().await?;
        Ok(subdomain)
    }

    #[instrument(skip(self))]
    async fn get_subdomain(&self, sub_domain_id: &str) -> Result<SubDomain> {
        let row = sqlx::query(
            r"
            SELECT sub_domain_id, sub_domain_name, description, domain_id
            FROM subdomains
            WHERE sub_domain_id = $1
            ",
        )
        .bind(sub_domain_id)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => subdomain_from_row(&row),
            None => Err(StoreError::NotFound(Level::SubDomain)),
        }
    }

    #[instrument(skip(self))]
    async fn list_catalogs(&self, sub_domain_id: &str) -> Result<Vec<Catalog>> {
        let rows = sqlx::query(
            r"
            SELECT catalog_id, catalog_name, description, sub_domain_id
            FROM catalogs
            WHERE sub_domain_id = $1
            ",
        )
        .bind(sub_domain_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(catalog_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn create_catalog(&self, sub_domain_id: &str, new: NewEntity) -> Result<Catalog> {
        let mut tx = begin_under_parent(&self.pool, Level::SubDomain, sub_domain_id).await?;
        let row = sqlx::query(
            r"
            INSERT INTO catalogs (catalog_id, catalog_name, description, sub_domain_id)
            VALUES ($1, $2, $3, $4)
            RETURNING catalog_id, catalog_name, description, sub_domain_id
            ",
        )
        .bind(ids::generate(Level::Catalog))
        .bind(&new.name)
        .bind(&new.description)
        .bind(sub_domain_id)
        .fetch_one(&mut *tx)
        .await?;
        let catalog = catalog_from_row(&row)?;
        tx.commit().await?;
        Ok(catalog)
    }

    #[instrument(skip(self))]
    async fn get_catalog(&self, catalog_id: &str) -> Result<Catalog> {
        let row = sqlx::query(
            r"
            SELECT catalog_id, catalog_name, description, sub_domain_id
            FROM catalogs
            WHERE catalog_id = $1
            ",
        )
        .bind(catalog_id)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => catalog_from_row(&row),
            None => Err(StoreError::NotFound(Level::Catalog)),
        }
    }

    #[instrument(skip(self))]
    async fn list_schemas(&self, catalog_id: &str) -> Result<Vec<Schema>> {
        let rows = sqlx::query(
            r"
            SELECT schema_id, schema_name, description, catalog_id
            FROM schemas
            WHERE catalog_id = $1
            ",
        )
        .bind(catalog_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(schema_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn create_schema(&self, catalog_id: &str, new: NewEntity) -> Result<Schema> {
        let mut tx = begin_under_parent(&self.pool, Level::Catalog, catalog_id).await?;
        let row = sqlx::query(
            r"
            INSERT INTO schemas (schema_id, schema_name, description, catalog_id)
            VALUES ($1, $2, $3, $4)
            RETURNING schema_id, schema_name, description, catalog_id
            ",
        )
        .bind(ids::generate(Level::Schema))
        .bind(&new.name)
        .bind(&new.description)
        .bind(catalog_id)
        .fetch_one(&mut *tx)
        .await?;
        let schema = schema_from_row(&row)?;
        tx.commit().await?;
        Ok(schema)
    }

    #[instrument(skip(self))]
    async fn get_schema(&self, schema_id: &str) -> Result<Schema> {
        let row = sqlx::query(
            r"
            SELECT schema_id, schema_name, description, catalog_id
            FROM schemas
            WHERE schema_id = $1
            ",
        )
        .bind(schema_id)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => schema_from_row(&row),
            None => Err(StoreError::NotFound(Level::Schema)),
        }
    }

    #[instrument(skip(self))]
    async fn list_tables(&self, schema_id: &str) -> Result<Vec<Table>> {
        let rows = sqlx::query(
            r"
            SELECT table_id, table_name, location, format, schema_id
            FROM tables
            WHERE schema_id = $1
            ",
        )
        .bind(schema_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(table_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn create_table(&self, schema_id: &str, new: NewTable) -> Result<Table> {
        let mut tx = begin_under_parent(&self.pool, Level::Schema, schema_id).await?;
        // format is bound as given: an explicit null is stored as NULL, not the column default.
        let row = sqlx::query(
            r"
            INSERT INTO tables (table_id, table_name, location, format, schema_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING table_id, table_name, location, format, schema_id
            ",
        )
        .bind(ids::generate(Level::Table))
        .bind(&new.name)
        .bind(&new.location)
        .bind(&new.format)
        .bind(schema_id)
        .fetch_one(&mut *tx)
        .await?;
        let table = table_from_row(&row)?;
        tx.commit().await?;
        Ok(table)
    }

    #[instrument(skip(self))]
    async fn get_table(&self, table_id: &str) -> Result<Table> {
        let row = sqlx::query(
            r"
            SELECT table_id, table_name, location, format, schema_id
            FROM tables
            WHERE table_id = $1
            ",
        )
        .bind(table_id)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => table_from_row(&row),
            None => Err(StoreError::NotFound(Level::Table)),
        }
    }
}
