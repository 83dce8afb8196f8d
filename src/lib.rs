//! # Prime (Hierarchical Metadata Catalog)
//!
//! `prime` registers analytical tables inside a fixed five-level hierarchy and
//! serves it over a JSON/HTTP API.
//!
//! ## Hierarchy
//!
//! `Domain → SubDomain → Catalog → Schema → Table`
//!
//! - **Ids:** every entity gets a server-generated id of the form
//!   `<prefix>-<6 lowercase hex>` (`dom`, `sd`, `cat`, `sch`, `tbl`).
//! - **Parents:** a child can only be created under an existing parent; a missing
//!   parent is reported as `404` and nothing is persisted.
//! - **Tables:** carry a storage `location` and a `format` that defaults to
//!   `iceberg`.
//! - **Deletes:** only domains can be deleted, and a domain that still owns
//!   subdomains is refused by the database.
//!
//! ## Storage
//!
//! Persistence sits behind the [`store::CatalogStore`] trait. The server uses
//! [`store::PgStore`] (PostgreSQL with embedded migrations); tests drive the same
//! router against [`store::MemoryStore`].

pub mod api;
pub mod catalog;
pub mod cli;
pub mod store;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // non-git build
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(GIT_COMMIT_HASH.len() >= 7);
    }
}
