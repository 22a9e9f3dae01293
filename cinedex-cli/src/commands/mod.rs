pub(crate) mod actor;
pub(crate) mod config;
pub(crate) mod genre;
pub(crate) mod movie;
pub(crate) mod seed;
pub(crate) mod stats;

use std::path::PathBuf;

use cinedex_lib::settings;
use cinedex_lib::{CatalogService, Page};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use crate::CliError;
use crate::cli_types::{Cli, Commands};

/// What every catalog command needs: the open catalog and the output mode.
pub(crate) struct Session {
    pub service: CatalogService,
    pub db_path: PathBuf,
    pub json: bool,
}

impl Session {
    /// Print `value` as JSON, or run `human` to log a text rendering.
    pub(crate) fn emit<T: Serialize>(
        &self,
        value: &T,
        human: impl FnOnce(&T),
    ) -> Result<(), CliError> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human(value);
        }
        Ok(())
    }
}

pub(crate) fn run(cli: Cli) -> Result<(), CliError> {
    let json = cli.json;
    match cli.command {
        Commands::Config { action } => config::run_config(action, cli.db),
        Commands::Movie { action } => movie::run_movie(&open_session(cli.db, json)?, action),
        Commands::Genre { action } => genre::run_genre(&open_session(cli.db, json)?, action),
        Commands::Actor { action } => actor::run_actor(&open_session(cli.db, json)?, action),
        Commands::Seed { file } => seed::run_seed(&open_session(cli.db, json)?, file),
        Commands::Stats => stats::run_stats(&open_session(cli.db, json)?),
    }
}

/// Open the catalog at the resolved database path, creating its directory.
fn open_session(db: Option<PathBuf>, json: bool) -> Result<Session, CliError> {
    let db_path = settings::resolve_database_path(db);
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    log::debug!("Using catalog database {}", db_path.display());
    let service = CatalogService::open(&db_path)?;
    Ok(Session {
        service,
        db_path,
        json,
    })
}

/// Log a bold section heading.
pub(crate) fn log_heading(text: &str) {
    log::info!("{}", text.if_supports_color(Stdout, |t| t.bold()));
}

/// Log the position line under a paged listing.
pub(crate) fn log_page_footer<T>(page: &Page<T>) {
    crate::log_blank();
    log::info!(
        "{}",
        format!(
            "Page {} of {} pages ({} total, {} per page)",
            page.page_number,
            page.total_pages,
            page.total_elements,
            page.page_size,
        )
        .if_supports_color(Stdout, |t| t.dimmed()),
    );
}

/// Format an id list for display, e.g. `1, 4, 7` or `-` when empty.
pub(crate) fn format_ids<'a>(ids: impl IntoIterator<Item = &'a i64>) -> String {
    let joined: Vec<String> = ids.into_iter().map(i64::to_string).collect();
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ids() {
        assert_eq!(format_ids(&[] as &[i64]), "-");
        assert_eq!(format_ids(&[1, 4, 7]), "1, 4, 7");
    }
}
