//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_tmdb;

use async_trait::async_trait;
use cinescope::api::{ApiError, MovieSource};
use cinescope::config::Config;
use cinescope::models::{Movie, MovieDetails, MoviePage};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::Notify;

pub const TEST_TOKEN: &str = "test-token";

/// Config pointing at `base_url` with a fixed token.
pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.image_base_url = "https://img.test/t/p".to_string();
    config.api.api_token = Some(TEST_TOKEN.to_string());
    config.api.timeout_seconds = 5;
    config.api.connect_timeout_seconds = 2;
    config
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Payload builders ---------------------------------------------------------

pub fn movie_json(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "original_title": title,
        "overview": format!("About {}", title),
        "poster_path": format!("/poster{}.jpg", id),
        "backdrop_path": null,
        "release_date": "2024-03-01",
        "vote_average": 7.1,
        "vote_count": 1200,
        "popularity": 55.0,
        "original_language": "en",
        "genre_ids": [18],
        "adult": false,
        "video": false
    })
}

pub fn page_json(page: u32, total_pages: u32, ids: &[u64]) -> String {
    let results: Vec<Value> = ids
        .iter()
        .map(|&id| movie_json(id, &format!("Movie {}", id)))
        .collect();
    json!({
        "page": page,
        "results": results,
        "total_pages": total_pages,
        "total_results": ids.len()
    })
    .to_string()
}

pub fn details_json(id: u64, title: &str) -> String {
    let mut value = movie_json(id, title);
    let extra = json!({
        "genres": [{"id": 18, "name": "Drama"}],
        "runtime": 139,
        "budget": 63000000,
        "revenue": 100853753,
        "status": "Released",
        "tagline": "Mischief. Mayhem. Soap.",
        "homepage": null,
        "imdb_id": "tt0137523",
        "production_companies": [],
        "production_countries": [],
        "spoken_languages": []
    });
    if let (Some(base), Some(extra)) = (value.as_object_mut(), extra.as_object()) {
        base.extend(extra.clone());
    }
    value.to_string()
}

pub fn movie(id: u64, title: &str) -> Movie {
    serde_json::from_value(movie_json(id, title)).unwrap()
}

pub fn page(page: u32, total_pages: u32, ids: &[u64]) -> MoviePage {
    serde_json::from_str(&page_json(page, total_pages, ids)).unwrap()
}

pub fn details(id: u64, title: &str) -> MovieDetails {
    serde_json::from_str(&details_json(id, title)).unwrap()
}

pub fn upstream_failure(operation: &'static str) -> ApiError {
    ApiError::Status {
        operation,
        status: 500,
        message: "Internal error".to_string(),
    }
}

// -- In-memory source ---------------------------------------------------------

/// Scripted `MovieSource`. Unscripted requests fail with HTTP 500.
#[derive(Default)]
pub struct FakeSource {
    pages: Mutex<HashMap<String, MoviePage>>,
    details: Mutex<HashMap<u64, MovieDetails>>,
    calls: Mutex<Vec<String>>,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl FakeSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_page(&self, key: &str, page: MoviePage) {
        self.pages.lock().insert(key.to_string(), page);
    }

    pub fn with_details(&self, details: MovieDetails) {
        self.details.lock().insert(details.id(), details);
    }

    /// Keys of every request made so far, e.g. `now_playing_2`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Block subsequent requests until the returned handle is notified.
    pub fn hold(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.gate.lock() = Some(notify.clone());
        notify
    }

    async fn respond(&self, key: String, operation: &'static str) -> Result<MoviePage, ApiError> {
        self.calls.lock().push(key.clone());
        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.pages
            .lock()
            .get(&key)
            .cloned()
            .ok_or_else(|| upstream_failure(operation))
    }
}

#[async_trait]
impl MovieSource for FakeSource {
    async fn now_playing_page(&self, page: u32) -> Result<MoviePage, ApiError> {
        self.respond(format!("now_playing_{}", page), "now_playing").await
    }

    async fn popular_page(&self, page: u32) -> Result<MoviePage, ApiError> {
        self.respond(format!("popular_{}", page), "popular").await
    }

    async fn search_page(&self, query: &str, page: u32) -> Result<MoviePage, ApiError> {
        self.respond(format!("search_{}_{}", query, page), "search").await
    }

    async fn details(&self, id: u64) -> Result<MovieDetails, ApiError> {
        self.calls.lock().push(format!("movie_details_{}", id));
        self.details
            .lock()
            .get(&id)
            .cloned()
            .ok_or_else(|| upstream_failure("movie_details"))
    }
}
