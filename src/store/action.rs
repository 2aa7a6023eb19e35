use crate::models::{FilterOptions, Movie, MovieDetails};
use crate::store::mvi::Action;

/// Closed set of state changes the store can apply.
#[derive(Debug, Clone)]
pub enum MoviesAction {
    /// A fetch began: loading on, error cleared.
    FetchStarted,

    /// A search began for `query`.
    SearchStarted { query: String },

    /// The current list was replaced (now playing or search page).
    MoviesLoaded { movies: Vec<Movie>, total_pages: u32 },

    /// The popular list was replaced. Pagination tracks the current list only.
    PopularLoaded { movies: Vec<Movie> },

    /// A detail record arrived.
    DetailsLoaded(Box<MovieDetails>),

    /// Load-more results for `page`, appended after the current list.
    MoviesAppended {
        movies: Vec<Movie>,
        page: u32,
        total_pages: u32,
    },

    /// A fetch failed with a user-facing message.
    FetchFailed { message: String },

    /// Filters replaced as a whole.
    FiltersChanged(FilterOptions),

    MovieSelected(Option<Movie>),

    ErrorCleared,
}

impl Action for MoviesAction {}
