//! Catalog business rules on top of the SQLite store.
//!
//! The store crate only knows how to read and write rows. This crate decides
//! what a write is allowed to do: link integrity, deletion policy, genre name
//! uniqueness, field ranges, and the transaction each operation runs in.
//! [`CatalogService`] is the entry point frontends use.

pub mod association;
pub mod error;
pub mod query;
pub mod seed;
pub mod service;
pub mod settings;
pub mod uniqueness;
pub mod validation;

pub use cinedex_catalog::types::*;
pub use cinedex_catalog::{Page, PageError, PageRequest, SeedData, MAX_PAGE_SIZE};
pub use cinedex_db::CatalogStats;
pub use error::{CatalogError, ErrorKind};
pub use query::MovieQuery;
pub use seed::SeedStats;
pub use service::CatalogService;
