//! Field checks applied before any write reaches the store.
//!
//! Partial updates only check the fields they carry.

use cinedex_catalog::types::{
    ActorPatch, MoviePatch, NewActor, NewMovie, DURATION_RANGE, RELEASE_YEAR_RANGE,
    TITLE_MAX_CHARS,
};

use crate::error::CatalogError;

pub fn validate_title(title: &str) -> Result<(), CatalogError> {
    if title.trim().is_empty() {
        return Err(CatalogError::invalid("Title is required"));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(CatalogError::invalid(format!(
            "Title must be at most {TITLE_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

pub fn validate_release_year(year: i32) -> Result<(), CatalogError> {
    if !RELEASE_YEAR_RANGE.contains(&year) {
        return Err(CatalogError::invalid(format!(
            "Release year must be between {} and {} (got {year})",
            RELEASE_YEAR_RANGE.start(),
            RELEASE_YEAR_RANGE.end(),
        )));
    }
    Ok(())
}

pub fn validate_duration(duration: i32) -> Result<(), CatalogError> {
    if !DURATION_RANGE.contains(&duration) {
        return Err(CatalogError::invalid(format!(
            "Duration must be between {} and {} minutes (got {duration})",
            DURATION_RANGE.start(),
            DURATION_RANGE.end(),
        )));
    }
    Ok(())
}

pub fn validate_actor_name(name: &str) -> Result<(), CatalogError> {
    if name.trim().is_empty() {
        return Err(CatalogError::invalid("Actor name is required"));
    }
    Ok(())
}

/// Trim a genre name, rejecting blank input.
pub fn normalize_genre_name(name: &str) -> Result<&str, CatalogError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::invalid("Genre name is required"));
    }
    Ok(trimmed)
}

pub fn validate_new_movie(movie: &NewMovie) -> Result<(), CatalogError> {
    validate_title(&movie.title)?;
    validate_release_year(movie.release_year)?;
    validate_duration(movie.duration)
}

pub fn validate_movie_patch(patch: &MoviePatch) -> Result<(), CatalogError> {
    if let Some(title) = &patch.title {
        validate_title(title)?;
    }
    if let Some(year) = patch.release_year {
        validate_release_year(year)?;
    }
    if let Some(duration) = patch.duration {
        validate_duration(duration)?;
    }
    Ok(())
}

pub fn validate_new_actor(actor: &NewActor) -> Result<(), CatalogError> {
    validate_actor_name(&actor.name)
}

pub fn validate_actor_patch(patch: &ActorPatch) -> Result<(), CatalogError> {
    match &patch.name {
        Some(name) => validate_actor_name(name),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
