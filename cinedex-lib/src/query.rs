//! Movie filters, pagination, and paged listings.
//!
//! A movie listing takes at most one predicate. Pages are always read with
//! their total count on the same connection, so callers wrap these in one
//! read transaction.

use cinedex_catalog::types::{Actor, Genre, Movie, MovieFilter};
use cinedex_catalog::{Page, PageRequest};
use cinedex_db as db;
use rusqlite::Connection;

use crate::error::CatalogError;

/// The filters accepted by a movie listing. At most one may be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieQuery {
    pub genre: Option<i64>,
    pub year: Option<i32>,
    pub actor: Option<i64>,
}

impl MovieQuery {
    pub fn by_genre(genre_id: i64) -> Self {
        Self {
            genre: Some(genre_id),
            ..Self::default()
        }
    }

    pub fn by_year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Self::default()
        }
    }

    pub fn by_actor(actor_id: i64) -> Self {
        Self {
            actor: Some(actor_id),
            ..Self::default()
        }
    }

    /// Resolve to a single store filter, rejecting combined predicates.
    pub fn into_filter(self) -> Result<MovieFilter, CatalogError> {
        match (self.genre, self.year, self.actor) {
            (None, None, None) => Ok(MovieFilter::All),
            (Some(genre), None, None) => Ok(MovieFilter::Genre(genre)),
            (None, Some(year), None) => Ok(MovieFilter::ReleaseYear(year)),
            (None, None, Some(actor)) => Ok(MovieFilter::Actor(actor)),
            _ => Err(CatalogError::invalid(
                "Use only one filter: genre, year or actor",
            )),
        }
    }
}

/// Validate raw pagination input.
pub fn page_request(page_number: i64, page_size: i64) -> Result<PageRequest, CatalogError> {
    Ok(PageRequest::new(page_number, page_size)?)
}

/// Filter for a title search. A blank term is rejected rather than matching everything.
pub fn title_filter(term: &str) -> Result<MovieFilter, CatalogError> {
    let term = term.trim();
    if term.is_empty() {
        return Err(CatalogError::invalid("Search term is required"));
    }
    Ok(MovieFilter::TitleContains(term.to_string()))
}

/// Blank actor-name filters mean no filter.
pub fn actor_name_filter(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|n| !n.is_empty())
}

pub fn movie_page(
    conn: &Connection,
    filter: &MovieFilter,
    request: PageRequest,
) -> Result<Page<Movie>, CatalogError> {
    let items = db::list_movies(conn, filter, Some(request))?;
    let total = db::count_movies(conn, filter)?;
    Ok(Page::new(items, request, total))
}

pub fn genre_page(conn: &Connection, request: PageRequest) -> Result<Page<Genre>, CatalogError> {
    let items = db::list_genres(conn, Some(request))?;
    let total = db::count_genres(conn)?;
    Ok(Page::new(items, request, total))
}

pub fn actor_page(
    conn: &Connection,
    name_contains: Option<&str>,
    request: PageRequest,
) -> Result<Page<Actor>, CatalogError> {
    let name_contains = actor_name_filter(name_contains);
    let items = db::list_actors(conn, name_contains, Some(request))?;
    let total = db::count_actors(conn, name_contains)?;
    Ok(Page::new(items, request, total))
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
