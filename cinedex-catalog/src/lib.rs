//! Movie catalog data model types, pagination values, and YAML seed data.
//!
//! This crate defines the entity model for the catalog without any database
//! dependencies. `cinedex-db` persists these types and `cinedex-lib` enforces
//! the business rules around them.

pub mod pagination;
pub mod seed;
pub mod types;

pub use pagination::{Page, PageError, PageRequest, MAX_PAGE_SIZE};
pub use seed::{default_seed, load_seed, parse_seed, SeedActor, SeedData, SeedError, SeedMovie};
pub use types::*;
