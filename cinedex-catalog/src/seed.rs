//! YAML seed data for populating an empty catalog.
//!
//! A seed file lists genres, actors, and movies. Movies reference their genres
//! and actors by name rather than by id, since ids are only assigned once the
//! rows are written.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The dataset shipped with the crate, used when no seed file is given.
const DEFAULT_SEED_YAML: &str = include_str!("../data/seed.yaml");

/// Running time used when a seed movie does not state one.
pub const DEFAULT_SEED_DURATION: i32 = 120;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
}

/// A complete seed dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub actors: Vec<SeedActor>,
    #[serde(default)]
    pub movies: Vec<SeedMovie>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedActor {
    pub name: String,
    pub birth_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedMovie {
    pub title: String,
    pub release_year: i32,
    #[serde(default = "default_duration")]
    pub duration: i32,
    /// Genre names, matched case-insensitively.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Actor names, matched exactly.
    #[serde(default)]
    pub actors: Vec<String>,
}

fn default_duration() -> i32 {
    DEFAULT_SEED_DURATION
}

/// Load a seed dataset from a YAML file.
pub fn load_seed(path: &Path) -> Result<SeedData, SeedError> {
    let contents = std::fs::read_to_string(path).map_err(|e| SeedError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_seed(&contents, &path.display().to_string())
}

/// Parse a seed dataset from YAML text. `origin` names the source in errors.
pub fn parse_seed(contents: &str, origin: &str) -> Result<SeedData, SeedError> {
    serde_yml::from_str(contents).map_err(|e| SeedError::Parse {
        path: origin.to_string(),
        source: e,
    })
}

/// The built-in demo dataset.
pub fn default_seed() -> Result<SeedData, SeedError> {
    parse_seed(DEFAULT_SEED_YAML, "<built-in seed>")
}
