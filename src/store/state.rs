use crate::models::{FilterOptions, Movie, MovieDetails};
use crate::store::mvi::StoreState;

/// Aggregate application state. Only the reducer produces new values.
#[derive(Debug, Clone, PartialEq)]
pub struct MoviesState {
    /// Current list view (now playing or search results).
    pub movies: Vec<Movie>,
    /// Tracked independently so switching views keeps both lists.
    pub popular_movies: Vec<Movie>,
    pub movie_details: Option<MovieDetails>,
    pub loading: bool,
    /// Last failure message. Shared by every operation; last write wins.
    pub error: Option<String>,
    /// Highest page appended by load-more. Never decreases.
    pub current_page: u32,
    pub total_pages: u32,
    /// Empty means no search is active.
    pub search_query: String,
    pub filters: FilterOptions,
    pub selected_movie: Option<Movie>,
}

impl Default for MoviesState {
    fn default() -> Self {
        Self {
            movies: Vec::new(),
            popular_movies: Vec::new(),
            movie_details: None,
            loading: false,
            error: None,
            current_page: 1,
            total_pages: 1,
            search_query: String::new(),
            filters: FilterOptions::default(),
            selected_movie: None,
        }
    }
}

impl StoreState for MoviesState {}

impl MoviesState {
    pub fn is_searching(&self) -> bool {
        !self.search_query.is_empty()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn has_more_pages(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state() {
        let state = MoviesState::default();
        assert!(state.movies.is_empty());
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages, 1);
        assert!(!state.is_searching());
        assert!(!state.has_more_pages());
    }

    #[test]
    fn has_more_pages_compares_cursor() {
        let state = MoviesState {
            current_page: 2,
            total_pages: 5,
            ..MoviesState::default()
        };
        assert!(state.has_more_pages());
    }
}
