//! Catalog hierarchy: levels, entities, and identifier generation.
//!
//! The catalog is a strict five-level tree: `Domain > SubDomain > Catalog >
//! Schema > Table`. Every non-root entity points at exactly one parent through
//! its parent id, and each level owns a short identifier prefix.

pub mod ids;
pub mod model;

use std::fmt;

pub use model::{Catalog, Domain, NewEntity, NewTable, Schema, SubDomain, Table};

/// Table format stored when a create request does not name one.
pub const DEFAULT_TABLE_FORMAT: &str = "iceberg";

/// One level of the catalog hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Domain,
    SubDomain,
    Catalog,
    Schema,
    Table,
}

impl Level {
    /// Identifier prefix for entities of this level, e.g. `dom` in `dom-a1b2c3`.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Domain => "dom",
            Self::SubDomain => "sd",
            Self::Catalog => "cat",
            Self::Schema => "sch",
            Self::Table => "tbl",
        }
    }

    /// Relational table holding this level's rows.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Domain => "domains",
            Self::SubDomain => "subdomains",
            Self::Catalog => "catalogs",
            Self::Schema => "schemas",
            Self::Table => "tables",
        }
    }

    /// Primary key column of [`Level::table`].
    #[must_use]
    pub const fn id_column(self) -> &'static str {
        match self {
            Self::Domain => "domain_id",
            Self::SubDomain => "sub_domain_id",
            Self::Catalog => "catalog_id",
            Self::Schema => "schema_id",
            Self::Table => "table_id",
        }
    }

    /// The level directly above this one, `None` for the root.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Domain => None,
            Self::SubDomain => Some(Self::Domain),
            Self::Catalog => Some(Self::SubDomain),
            Self::Schema => Some(Self::Catalog),
            Self::Table => Some(Self::Schema),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Domain => "Domain",
            Self::SubDomain => "Subdomain",
            Self::Catalog => "Catalog",
            Self::Schema => "Schema",
            Self::Table => "Table",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parents_walk_up_to_the_domain() {
        let mut level = Level::Table;
        let mut chain = vec![level];
        while let Some(parent) = level.parent() {
            chain.push(parent);
            level = parent;
        }
        assert_eq!(
            chain,
            vec![
                Level::Table,
                Level::Schema,
                Level::Catalog,
                Level::SubDomain,
                Level::Domain
            ]
        );
    }

    #[test]
    fn prefixes_are_distinct() {
        let levels = [
            Level::Domain,
            Level::SubDomain,
            Level::Catalog,
            Level::Schema,
            Level::Table,
        ];
        for (i, a) in levels.iter().enumerate() {
            for b in &levels[i + 1..] {
                assert_ne!(a.prefix(), b.prefix());
            }
        }
    }

    #[test]
    fn display_labels() {
        assert_eq!(Level::SubDomain.to_string(), "Subdomain");
        assert_eq!(Level::Table.to_string(), "Table");
    }
}
