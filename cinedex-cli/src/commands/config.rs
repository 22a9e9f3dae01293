use std::path::PathBuf;

use cinedex_lib::settings;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::ConfigAction;

pub(crate) fn run_config(action: ConfigAction, db: Option<PathBuf>) -> Result<(), CliError> {
    match action {
        ConfigAction::Path => {
            log::info!("{}", settings::settings_path().display());
            Ok(())
        }
        ConfigAction::Show => {
            run_config_show(db);
            Ok(())
        }
        ConfigAction::SetDb { path } => {
            if path.as_os_str().is_empty() {
                return Err(CliError::config("Database path must not be empty"));
            }
            let path = std::path::absolute(&path)?;
            settings::save_database_path(Some(&path))?;
            log::info!("Default database set to {}", path.display());
            Ok(())
        }
        ConfigAction::ClearDb => {
            settings::save_database_path(None)?;
            log::info!("Default database cleared");
            Ok(())
        }
    }
}

fn run_config_show(db: Option<PathBuf>) {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "cinedex Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let source = if db.is_some() {
        "--db flag"
    } else if settings::load_database_path().is_some() {
        "settings file"
    } else {
        "default"
    };
    log::info!(
        "  Database:      {} ({source})",
        settings::resolve_database_path(db).display(),
    );

    if let Some(contents) = settings::load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {line}");
        }
    }
}
