//! Seam between the state store and wherever movie data comes from.

use async_trait::async_trait;

use crate::api::error::ApiError;
use crate::api::service::MovieService;
use crate::models::{MovieDetails, MoviePage};

/// Source of movie pages and detail records consumed by the store.
///
/// [`MovieService`] is the production implementation; tests plug in
/// in-memory fakes.
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn now_playing_page(&self, page: u32) -> Result<MoviePage, ApiError>;

    async fn popular_page(&self, page: u32) -> Result<MoviePage, ApiError>;

    async fn search_page(&self, query: &str, page: u32) -> Result<MoviePage, ApiError>;

    async fn details(&self, id: u64) -> Result<MovieDetails, ApiError>;
}

#[async_trait]
impl MovieSource for MovieService {
    async fn now_playing_page(&self, page: u32) -> Result<MoviePage, ApiError> {
        MovieService::now_playing_page(self, page).await
    }

    async fn popular_page(&self, page: u32) -> Result<MoviePage, ApiError> {
        MovieService::popular_page(self, page).await
    }

    async fn search_page(&self, query: &str, page: u32) -> Result<MoviePage, ApiError> {
        MovieService::search_page(self, query, page).await
    }

    async fn details(&self, id: u64) -> Result<MovieDetails, ApiError> {
        MovieService::details(self, id).await
    }
}
