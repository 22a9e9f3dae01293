//! Data model types for the movie catalog.
//!
//! Movie is the owning side of both many-to-many associations: its `genres`
//! and `actors` sets are the only place links are written from. Genres and
//! actors never hold their own copy of the movies they appear in; that view is
//! always derived from the link tables.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Longest accepted movie title, in characters.
pub const TITLE_MAX_CHARS: usize = 200;

/// Accepted release years. 1888 is the year of the oldest surviving film.
pub const RELEASE_YEAR_RANGE: RangeInclusive<i32> = 1888..=2100;

/// Accepted running times, in minutes.
pub const DURATION_RANGE: RangeInclusive<i32> = 1..=600;

// ── Movie ───────────────────────────────────────────────────────────────────

/// A film in the catalog, with its genre and actor references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub release_year: i32,
    /// Running time in minutes.
    pub duration: i32,
    pub genres: BTreeSet<i64>,
    pub actors: BTreeSet<i64>,
}

/// Input for creating a movie. Referenced genres and actors must already exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub release_year: i32,
    pub duration: i32,
    #[serde(default)]
    pub genres: BTreeSet<i64>,
    #[serde(default)]
    pub actors: BTreeSet<i64>,
}

impl NewMovie {
    pub fn new(title: impl Into<String>, release_year: i32, duration: i32) -> Self {
        Self {
            title: title.into(),
            release_year,
            duration,
            genres: BTreeSet::new(),
            actors: BTreeSet::new(),
        }
    }

    pub fn with_genres(mut self, genres: impl IntoIterator<Item = i64>) -> Self {
        self.genres = genres.into_iter().collect();
        self
    }

    pub fn with_actors(mut self, actors: impl IntoIterator<Item = i64>) -> Self {
        self.actors = actors.into_iter().collect();
        self
    }

    pub fn links(&self) -> MovieLinks {
        MovieLinks {
            genres: self.genres.clone(),
            actors: self.actors.clone(),
        }
    }
}

/// Partial update of a movie.
///
/// `None` leaves a field untouched. For the association sets, `Some` with an
/// empty set clears every link of that kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoviePatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub genres: Option<BTreeSet<i64>>,
    #[serde(default)]
    pub actors: Option<BTreeSet<i64>>,
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.release_year.is_none()
            && self.duration.is_none()
            && self.genres.is_none()
            && self.actors.is_none()
    }

    /// True if the patch changes title, release year or duration.
    pub fn touches_scalars(&self) -> bool {
        self.title.is_some() || self.release_year.is_some() || self.duration.is_some()
    }
}

/// The complete association sets of one movie, written with full-replace semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieLinks {
    pub genres: BTreeSet<i64>,
    pub actors: BTreeSet<i64>,
}

// ── Genre ───────────────────────────────────────────────────────────────────

/// A genre. Names are unique ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

// ── Actor ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: i64,
    pub name: String,
    pub birth_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActor {
    pub name: String,
    pub birth_date: NaiveDate,
}

impl NewActor {
    pub fn new(name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            birth_date,
        }
    }
}

/// Partial update of an actor. Associations are written from the movie side only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

impl ActorPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.birth_date.is_none()
    }
}

// ── Entity kinds and filters ────────────────────────────────────────────────

/// The three entity collections of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Movie,
    Genre,
    Actor,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Genre => "genre",
            Self::Actor => "actor",
        }
    }

    /// Capitalized name for user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Genre => "Genre",
            Self::Actor => "Actor",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to one stored entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Movie(i64),
    Genre(i64),
    Actor(i64),
}

impl EntityRef {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Movie(_) => EntityKind::Movie,
            Self::Genre(_) => EntityKind::Genre,
            Self::Actor(_) => EntityKind::Actor,
        }
    }

    pub fn id(&self) -> i64 {
        match *self {
            Self::Movie(id) | Self::Genre(id) | Self::Actor(id) => id,
        }
    }
}

/// The single predicate a movie listing is filtered by.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MovieFilter {
    #[default]
    All,
    Genre(i64),
    ReleaseYear(i32),
    Actor(i64),
    /// Case-insensitive substring of the title.
    TitleContains(String),
}
