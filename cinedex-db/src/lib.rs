//! SQLite persistence layer for the movie catalog.
//!
//! Provides schema creation, write operations, and query APIs backed by
//! SQLite (via rusqlite with the bundled feature). Every function takes a
//! `&Connection`, so callers decide the transaction boundary: a
//! `rusqlite::Transaction` derefs to a connection and can be passed directly.

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    delete_entity, genre_name_key, insert_actor, insert_genre, insert_movie, rename_genre,
    replace_movie_actors, replace_movie_genres, search_key, update_actor, update_movie,
    OperationError,
};
pub use queries::{
    actors_for_movie, catalog_stats, count_actors, count_genres, count_links, count_movies,
    entity_exists, entity_label, find_actor, find_genre, find_genre_by_name, find_movie,
    genre_name_exists, genres_for_movie, linked_movie_ids, list_actors, list_genres, list_movies,
    movies_for_actor, movies_for_genre, CatalogStats,
};
pub use schema::{open_database, open_memory, SchemaError};
