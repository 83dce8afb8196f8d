//! Route handlers for the catalog API.
//!
//! Each hierarchy level has its own module; handlers only translate payloads
//! and status codes, while `crate::store` owns persistence and parent checks.
//!
//! Flow Overview:
//! 1) Extract path ids and decode the JSON body (`400` on malformed input).
//! 2) Call one repository operation on the injected store.
//! 3) Map the entity to its camelCase response, or the error to `404`/`500`.

pub mod catalogs;
pub mod domains;
pub mod health;
pub mod schemas;
pub mod subdomains;
pub mod tables;
pub mod types;
