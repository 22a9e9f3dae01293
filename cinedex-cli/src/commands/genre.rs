use cinedex_lib::{CatalogError, EntityKind};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::GenreAction;

use super::movie::{log_genres, log_movies};
use super::{Session, log_page_footer};

pub(crate) fn run_genre(session: &Session, action: GenreAction) -> Result<(), CliError> {
    let svc = &session.service;
    match action {
        GenreAction::Create { name } => {
            let genre = svc.create_genre(&name)?;
            session.emit(&genre, |g| {
                log::info!(
                    "Created genre {} {}",
                    g.id.if_supports_color(Stdout, |t| t.cyan()),
                    g.name,
                );
            })
        }
        GenreAction::Get { id } => {
            let genre = svc.find_genre(id)?;
            session.emit(&genre, |g| log_genres(std::slice::from_ref(g)))
        }
        GenreAction::List { paging } => match paging.requested() {
            Some((page, size)) => {
                let page = svc.genre_page(page, size)?;
                session.emit(&page, |p| {
                    log_genres(&p.items);
                    log_page_footer(p);
                })
            }
            None => {
                let genres = svc.list_genres()?;
                session.emit(&genres, |g| log_genres(g))
            }
        },
        GenreAction::Rename { id, name } => {
            let genre = svc
                .rename_genre(id, &name)?
                .ok_or(CatalogError::not_found(EntityKind::Genre, id))?;
            session.emit(&genre, |g| log::info!("Renamed genre {} to {}", g.id, g.name))
        }
        GenreAction::Delete { id, force } => {
            svc.delete_genre(id, force)?;
            if !session.json {
                log::info!("Deleted genre {id}");
            }
            Ok(())
        }
        GenreAction::Movies { id } => {
            let movies = svc.movies_for_genre(id)?;
            session.emit(&movies, |m| log_movies(m))
        }
    }
}
