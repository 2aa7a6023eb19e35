//! Store object: runs fetches against a [`MovieSource`] and applies the
//! resulting actions through the reducer.
//!
//! State lives in a `watch` channel. Every write goes through it, which
//! serializes actions and notifies subscribers. Fetches never hold the
//! channel across an `.await`, so independent fetches can overlap; for two
//! fetches of the same kind, whichever completes last wins.

use std::sync::Arc;
use tokio::sync::watch;

use crate::api::{ApiError, MovieSource};
use crate::models::{FilterOptions, Movie};
use crate::store::action::MoviesAction;
use crate::store::mvi::Reducer;
use crate::store::query::{filter_movies_with_baseline, DEFAULT_BASELINE_LANGUAGE};
use crate::store::reducer::MoviesReducer;
use crate::store::state::MoviesState;

pub const NOW_PLAYING_FAILED: &str = "Failed to fetch movies";
pub const POPULAR_FAILED: &str = "Failed to fetch popular movies";
pub const DETAILS_FAILED: &str = "Failed to fetch movie details";
pub const SEARCH_FAILED: &str = "Failed to search movies";
pub const LOAD_MORE_FAILED: &str = "Failed to load more movies";

pub struct MoviesStore {
    source: Arc<dyn MovieSource>,
    state: watch::Sender<MoviesState>,
    baseline_language: String,
}

impl MoviesStore {
    pub fn new(source: Arc<dyn MovieSource>) -> Self {
        let (state, _) = watch::channel(MoviesState::default());
        Self {
            source,
            state,
            baseline_language: DEFAULT_BASELINE_LANGUAGE.to_string(),
        }
    }

    /// Compare language filters against `language` instead of "en".
    pub fn with_baseline_language(mut self, language: impl Into<String>) -> Self {
        self.baseline_language = language.into();
        self
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> MoviesState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<MoviesState> {
        self.state.subscribe()
    }

    /// Apply `action` through the reducer and notify subscribers.
    pub fn dispatch(&self, action: MoviesAction) {
        self.state.send_modify(|state| {
            *state = MoviesReducer::reduce(std::mem::take(state), action);
        });
    }

    pub async fn fetch_now_playing(&self, page: u32) {
        self.dispatch(MoviesAction::FetchStarted);
        match self.source.now_playing_page(page).await {
            Ok(page) => self.dispatch(MoviesAction::MoviesLoaded {
                movies: page.results,
                total_pages: page.total_pages,
            }),
            Err(err) => self.fail(NOW_PLAYING_FAILED, err),
        }
    }

    pub async fn fetch_popular(&self, page: u32) {
        self.dispatch(MoviesAction::FetchStarted);
        match self.source.popular_page(page).await {
            Ok(page) => self.dispatch(MoviesAction::PopularLoaded {
                movies: page.results,
            }),
            Err(err) => self.fail(POPULAR_FAILED, err),
        }
    }

    pub async fn fetch_details(&self, id: u64) {
        self.dispatch(MoviesAction::FetchStarted);
        match self.source.details(id).await {
            Ok(details) => self.dispatch(MoviesAction::DetailsLoaded(Box::new(details))),
            Err(err) => self.fail(DETAILS_FAILED, err),
        }
    }

    pub async fn search(&self, query: &str, page: u32) {
        self.dispatch(MoviesAction::SearchStarted {
            query: query.to_string(),
        });
        match self.source.search_page(query, page).await {
            Ok(page) => self.dispatch(MoviesAction::MoviesLoaded {
                movies: page.results,
                total_pages: page.total_pages,
            }),
            Err(err) => self.fail(SEARCH_FAILED, err),
        }
    }

    /// Fetch the page after `current_page` and append it to `movies`.
    ///
    /// Uses the active search query when there is one, otherwise now
    /// playing. Returns `false` without fetching when another fetch is
    /// already loading.
    pub async fn load_more(&self) -> bool {
        let mut claimed = None;
        self.state.send_if_modified(|state| {
            if state.loading {
                return false;
            }
            claimed = Some((state.current_page + 1, state.search_query.clone()));
            *state = MoviesReducer::reduce(std::mem::take(state), MoviesAction::FetchStarted);
            true
        });

        let Some((next_page, query)) = claimed else {
            tracing::debug!("Load more ignored while a fetch is in flight");
            return false;
        };

        let result = if query.is_empty() {
            self.source.now_playing_page(next_page).await
        } else {
            self.source.search_page(&query, next_page).await
        };

        match result {
            Ok(page) => self.dispatch(MoviesAction::MoviesAppended {
                movies: page.results,
                page: next_page,
                total_pages: page.total_pages,
            }),
            Err(err) => self.fail(LOAD_MORE_FAILED, err),
        }
        true
    }

    pub fn set_filters(&self, filters: FilterOptions) {
        self.dispatch(MoviesAction::FiltersChanged(filters));
    }

    pub fn set_selected_movie(&self, movie: Option<Movie>) {
        self.dispatch(MoviesAction::MovieSelected(movie));
    }

    pub fn clear_error(&self) {
        self.dispatch(MoviesAction::ErrorCleared);
    }

    /// Current list after the active filters and sort.
    pub fn visible_movies(&self) -> Vec<Movie> {
        let state = self.state.borrow();
        filter_movies_with_baseline(&state.movies, &state.filters, &self.baseline_language)
    }

    /// Popular list after the active filters and sort.
    pub fn visible_popular_movies(&self) -> Vec<Movie> {
        let state = self.state.borrow();
        filter_movies_with_baseline(&state.popular_movies, &state.filters, &self.baseline_language)
    }

    fn fail(&self, message: &'static str, err: ApiError) {
        tracing::warn!(
            error = %err,
            error_type = err.error_type(),
            operation = err.operation().unwrap_or("unknown"),
            "{}",
            message
        );
        self.dispatch(MoviesAction::FetchFailed {
            message: message.to_string(),
        });
    }
}
