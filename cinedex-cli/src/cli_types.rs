//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Page size used when only `--page` is given.
pub(crate) const DEFAULT_PAGE_SIZE: i64 = 20;

#[derive(Parser)]
#[command(name = "cinedex")]
#[command(about = "Manage a catalog of movies, genres and actors", long_about = None)]
pub(crate) struct Cli {
    /// Catalog database file (defaults to the configured path, then the data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Optional paging for list commands. Without either flag the full list is shown.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct PageArgs {
    /// Page number, starting at 0
    #[arg(long, allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Items per page (1-100)
    #[arg(long, allow_negative_numbers = true)]
    pub size: Option<i64>,
}

impl PageArgs {
    /// `(page, size)` if paging was requested, filling in defaults for the missing half.
    pub fn requested(&self) -> Option<(i64, i64)> {
        if self.page.is_none() && self.size.is_none() {
            return None;
        }
        Some((self.page.unwrap_or(0), self.size.unwrap_or(DEFAULT_PAGE_SIZE)))
    }

    /// `(page, size)` for commands that are always paged.
    pub fn or_default(&self) -> (i64, i64) {
        self.requested().unwrap_or((0, DEFAULT_PAGE_SIZE))
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Manage movies
    Movie {
        #[command(subcommand)]
        action: MovieAction,
    },

    /// Manage genres
    Genre {
        #[command(subcommand)]
        action: GenreAction,
    },

    /// Manage actors
    Actor {
        #[command(subcommand)]
        action: ActorAction,
    },

    /// Load demo data into an empty catalog
    Seed {
        /// YAML seed file (defaults to the built-in dataset)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Show catalog statistics
    Stats,

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum MovieAction {
    /// Add a movie
    Create {
        title: String,

        /// Release year (1888-2100)
        #[arg(long)]
        year: i32,

        /// Running time in minutes (1-600)
        #[arg(long)]
        duration: i32,

        /// Genre ids (e.g., 1,3)
        #[arg(long, value_delimiter = ',')]
        genres: Vec<i64>,

        /// Actor ids (e.g., 2,5,8)
        #[arg(long, value_delimiter = ',')]
        actors: Vec<i64>,
    },

    /// Show one movie with its genres and actors
    Get { id: i64 },

    /// List movies, optionally filtered by one of genre, year or actor
    List {
        /// Only movies with this genre id
        #[arg(long)]
        genre: Option<i64>,

        /// Only movies released in this year
        #[arg(long)]
        year: Option<i32>,

        /// Only movies with this actor id
        #[arg(long)]
        actor: Option<i64>,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Search titles (case-insensitive substring)
    Search {
        term: String,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Change some fields of a movie
    Update {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        duration: Option<i32>,

        /// Replace the genre set; pass the flag with no ids to clear it
        #[arg(long, num_args = 0.., value_delimiter = ',')]
        genres: Option<Vec<i64>>,

        /// Replace the actor set; pass the flag with no ids to clear it
        #[arg(long, num_args = 0.., value_delimiter = ',')]
        actors: Option<Vec<i64>>,
    },

    /// Delete a movie
    Delete {
        id: i64,

        /// Remove its genre and actor links first
        #[arg(long)]
        force: bool,
    },

    /// List the actors of a movie
    Actors { id: i64 },

    /// List the genres of a movie
    Genres { id: i64 },
}

#[derive(Subcommand)]
pub(crate) enum GenreAction {
    /// Add a genre
    Create { name: String },

    /// Show one genre
    Get { id: i64 },

    /// List genres
    List {
        #[command(flatten)]
        paging: PageArgs,
    },

    /// Rename a genre
    Rename { id: i64, name: String },

    /// Delete a genre
    Delete {
        id: i64,

        /// Detach it from every movie first
        #[arg(long)]
        force: bool,
    },

    /// List the movies with a genre
    Movies { id: i64 },
}

#[derive(Subcommand)]
pub(crate) enum ActorAction {
    /// Add an actor
    Create {
        name: String,

        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: NaiveDate,
    },

    /// Show one actor
    Get { id: i64 },

    /// List actors
    List {
        /// Only actors whose name contains this text (case-insensitive)
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Change an actor's name or birth date
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: Option<NaiveDate>,
    },

    /// Delete an actor
    Delete {
        id: i64,

        /// Detach them from every movie first
        #[arg(long)]
        force: bool,
    },

    /// List the movies an actor appears in
    Movies { id: i64 },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the settings file path
    Path,

    /// Show the settings file and the database path in use
    Show,

    /// Save a default database path
    SetDb { path: PathBuf },

    /// Forget the saved database path
    ClearDb,
}
