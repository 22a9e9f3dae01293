use crate::CliError;

use super::{Session, log_heading};

pub(crate) fn run_stats(session: &Session) -> Result<(), CliError> {
    let stats = session.service.stats()?;

    session.emit(&stats, |stats| {
        log_heading("Catalog Statistics");
        log::info!("  Database: {}", session.db_path.display());
        crate::log_blank();
        log::info!("  Movies:         {:>8}", stats.movies);
        log::info!("  Genres:         {:>8}", stats.genres);
        log::info!("  Actors:         {:>8}", stats.actors);
        log::info!("  Genre links:    {:>8}", stats.genre_links);
        log::info!("  Actor links:    {:>8}", stats.actor_links);
        if let (Some(min), Some(max)) = (stats.min_year, stats.max_year) {
            log::info!("  Years:        {min} - {max}");
        }
    })
}
