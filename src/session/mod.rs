//! Ephemeral session snapshot.
//!
//! Holds the last fetched list, the selected movie and the active view so a
//! hop from a list view to a detail view can resolve the selection without
//! refetching. The file is truncated at the start of every session; it is
//! not a database.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::Movie;

/// Errors that can occur while reading or writing the snapshot.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read session file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write session file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse session file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize session: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Which list the user was browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveView {
    NowPlaying,
    Popular,
}

/// Movie picked from a list, by id and by position in that list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub movie_id: u64,
    pub index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Snapshot {
    #[serde(default)]
    movies: Vec<Movie>,
    #[serde(default)]
    selected: Option<Selection>,
    #[serde(default)]
    active_view: Option<ActiveView>,
}

/// File-backed session snapshot. Every mutation is written through.
pub struct SessionStore {
    path: PathBuf,
    snapshot: Snapshot,
}

impl SessionStore {
    /// Default location: `<cache dir>/cinescope/session.json`.
    pub fn default_path() -> PathBuf {
        let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
        cache_dir.join("cinescope").join("session.json")
    }

    /// Begin a new session, discarding whatever a previous one left behind.
    pub fn start(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let store = Self {
            path: path.into(),
            snapshot: Snapshot::default(),
        };
        store.persist()?;
        tracing::info!(path = %store.path.display(), "Session snapshot reset");
        Ok(store)
    }

    /// Continue the current session. A missing file is an empty snapshot.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                snapshot: Snapshot::default(),
            });
        }

        let content = fs::read_to_string(&path).map_err(|e| SessionError::Read {
            path: path.clone(),
            source: e,
        })?;
        let snapshot = if content.trim().is_empty() {
            Snapshot::default()
        } else {
            serde_json::from_str(&content).map_err(|e| SessionError::Parse {
                path: path.clone(),
                source: e,
            })?
        };

        Ok(Self { path, snapshot })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn movies(&self) -> &[Movie] {
        &self.snapshot.movies
    }

    /// Replace the stored list. The previous selection no longer applies.
    pub fn save_movies(&mut self, movies: &[Movie]) -> Result<(), SessionError> {
        self.snapshot.movies = movies.to_vec();
        self.snapshot.selected = None;
        self.persist()
    }

    pub fn clear_movies(&mut self) -> Result<(), SessionError> {
        self.snapshot.movies.clear();
        self.snapshot.selected = None;
        self.persist()
    }

    pub fn select(&mut self, movie_id: u64, index: usize) -> Result<(), SessionError> {
        self.snapshot.selected = Some(Selection { movie_id, index });
        self.persist()
    }

    pub fn selection(&self) -> Option<Selection> {
        self.snapshot.selected
    }

    pub fn set_active_view(&mut self, view: Option<ActiveView>) -> Result<(), SessionError> {
        self.snapshot.active_view = view;
        self.persist()
    }

    pub fn active_view(&self) -> Option<ActiveView> {
        self.snapshot.active_view
    }

    /// The selected movie from the stored list.
    ///
    /// Prefers the stored index when the id there still matches, and falls
    /// back to a lookup by id.
    pub fn resolve_selected(&self) -> Option<&Movie> {
        let selected = self.snapshot.selected?;
        let movies = &self.snapshot.movies;
        movies
            .get(selected.index)
            .filter(|m| m.id == selected.movie_id)
            .or_else(|| movies.iter().find(|m| m.id == selected.movie_id))
    }

    /// Drop everything, keeping the file in place.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.snapshot = Snapshot::default();
        self.persist()
    }

    fn persist(&self) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }
        let data = serde_json::to_string(&self.snapshot).map_err(SessionError::Serialize)?;
        fs::write(&self.path, data).map_err(|e| SessionError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}
