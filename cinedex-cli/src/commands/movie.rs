use std::collections::BTreeSet;

use cinedex_lib::{Actor, CatalogError, EntityKind, Genre, Movie, MoviePatch, MovieQuery, NewMovie};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use crate::CliError;
use crate::cli_types::MovieAction;

use super::{Session, format_ids, log_heading, log_page_footer};

/// A movie with its genres and actors resolved, for `movie get`.
#[derive(Serialize)]
struct MovieDetail {
    #[serde(flatten)]
    movie: Movie,
    genre_names: Vec<String>,
    actor_names: Vec<String>,
}

pub(crate) fn run_movie(session: &Session, action: MovieAction) -> Result<(), CliError> {
    let svc = &session.service;
    match action {
        MovieAction::Create {
            title,
            year,
            duration,
            genres,
            actors,
        } => {
            let new = NewMovie::new(title, year, duration)
                .with_genres(genres)
                .with_actors(actors);
            let movie = svc.create_movie(new)?;
            session.emit(&movie, |m| {
                log::info!(
                    "Created movie {} {}",
                    m.id.if_supports_color(Stdout, |t| t.cyan()),
                    m.title,
                );
            })
        }
        MovieAction::Get { id } => {
            let movie = svc.find_movie(id)?;
            let genres = svc.genres_for_movie(id)?;
            let actors = svc.actors_for_movie(id)?;
            let detail = MovieDetail {
                movie,
                genre_names: genres.into_iter().map(|g| g.name).collect(),
                actor_names: actors.into_iter().map(|a| a.name).collect(),
            };
            session.emit(&detail, log_movie_detail)
        }
        MovieAction::List {
            genre,
            year,
            actor,
            paging,
        } => {
            let query = MovieQuery { genre, year, actor };
            match paging.requested() {
                Some((page, size)) => {
                    let page = svc.movie_page(query, page, size)?;
                    session.emit(&page, |p| {
                        log_movies(&p.items);
                        log_page_footer(p);
                    })
                }
                None => {
                    let movies = svc.list_movies(query)?;
                    session.emit(&movies, |m| log_movies(m))
                }
            }
        }
        MovieAction::Search { term, paging } => {
            let (page, size) = paging.or_default();
            let page = svc.search_movies(&term, page, size)?;
            session.emit(&page, |p| {
                log_movies(&p.items);
                log_page_footer(p);
            })
        }
        MovieAction::Update {
            id,
            title,
            year,
            duration,
            genres,
            actors,
        } => {
            let patch = MoviePatch {
                title,
                release_year: year,
                duration,
                genres: genres.map(BTreeSet::from_iter),
                actors: actors.map(BTreeSet::from_iter),
            };
            let movie = svc
                .update_movie(id, patch)?
                .ok_or(CatalogError::not_found(EntityKind::Movie, id))?;
            session.emit(&movie, |m| {
                log::info!("Updated movie {}", m.id);
                log_movie_line(m);
            })
        }
        MovieAction::Delete { id, force } => {
            svc.delete_movie(id, force)?;
            if !session.json {
                log::info!("Deleted movie {id}");
            }
            Ok(())
        }
        MovieAction::Actors { id } => {
            let actors = svc.actors_for_movie(id)?;
            session.emit(&actors, |a| log_actors(a))
        }
        MovieAction::Genres { id } => {
            let genres = svc.genres_for_movie(id)?;
            session.emit(&genres, |g| log_genres(g))
        }
    }
}

pub(crate) fn log_movies(movies: &[Movie]) {
    if movies.is_empty() {
        log::info!("{}", "No movies found.".if_supports_color(Stdout, |t| t.dimmed()));
        return;
    }
    for movie in movies {
        log_movie_line(movie);
    }
}

fn log_movie_line(movie: &Movie) {
    log::info!(
        "  {:>5}  {} ({}, {} min)  genres: {}  actors: {}",
        movie.id.if_supports_color(Stdout, |t| t.cyan()),
        movie.title.if_supports_color(Stdout, |t| t.bold()),
        movie.release_year,
        movie.duration,
        format_ids(&movie.genres),
        format_ids(&movie.actors),
    );
}

fn log_movie_detail(detail: &MovieDetail) {
    let movie = &detail.movie;
    log_heading(&movie.title);
    log::info!("  Id:        {}", movie.id);
    log::info!("  Released:  {}", movie.release_year);
    log::info!("  Duration:  {} min", movie.duration);
    log::info!("  Genres:    {}", join_or_dash(&detail.genre_names));
    log::info!("  Actors:    {}", join_or_dash(&detail.actor_names));
}

pub(crate) fn log_actors(actors: &[Actor]) {
    if actors.is_empty() {
        log::info!("{}", "No actors.".if_supports_color(Stdout, |t| t.dimmed()));
    }
    for actor in actors {
        log::info!("  {:>5}  {} ({})", actor.id, actor.name, actor.birth_date);
    }
}

pub(crate) fn log_genres(genres: &[Genre]) {
    if genres.is_empty() {
        log::info!("{}", "No genres.".if_supports_color(Stdout, |t| t.dimmed()));
    }
    for genre in genres {
        log::info!("  {:>5}  {}", genre.id, genre.name);
    }
}

fn join_or_dash(names: &[String]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}
