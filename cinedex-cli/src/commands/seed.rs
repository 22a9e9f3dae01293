use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::Session;

pub(crate) fn run_seed(session: &Session, file: Option<PathBuf>) -> Result<(), CliError> {
    let data = match &file {
        Some(path) => cinedex_catalog::load_seed(path)?,
        None => cinedex_catalog::default_seed()?,
    };

    let stats = session.service.seed(&data)?;

    session.emit(&stats, |stats| {
        if stats.skipped {
            log::info!(
                "{}",
                "Catalog already has movies; nothing seeded.".if_supports_color(Stdout, |t| t.dimmed()),
            );
            return;
        }
        log::info!(
            "{} {} genres, {} actors, {} movies",
            "Seeded".if_supports_color(Stdout, |t| t.green()),
            stats.genres,
            stats.actors,
            stats.movies,
        );
        if stats.unknown_genres > 0 {
            log::warn!("{} unknown genre reference(s) skipped", stats.unknown_genres);
        }
    })
}
