use crate::store::action::MoviesAction;
use crate::store::mvi::Reducer;
use crate::store::state::MoviesState;

/// Reducer for application state transitions.
///
/// Pure function: fetching, logging and error conversion happen in
/// `MoviesStore` around the dispatch call.
pub struct MoviesReducer;

impl Reducer for MoviesReducer {
    type State = MoviesState;
    type Action = MoviesAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            MoviesAction::FetchStarted => MoviesState {
                loading: true,
                error: None,
                ..state
            },

            MoviesAction::SearchStarted { query } => MoviesState {
                search_query: query,
                loading: true,
                error: None,
                ..state
            },

            MoviesAction::MoviesLoaded {
                movies,
                total_pages,
            } => MoviesState {
                movies,
                total_pages: total_pages.max(1),
                loading: false,
                error: None,
                ..state
            },

            MoviesAction::PopularLoaded { movies } => MoviesState {
                popular_movies: movies,
                loading: false,
                error: None,
                ..state
            },

            MoviesAction::DetailsLoaded(details) => MoviesState {
                movie_details: Some(*details),
                loading: false,
                error: None,
                ..state
            },

            MoviesAction::MoviesAppended {
                movies,
                page,
                total_pages,
            } => {
                let mut appended = state.movies;
                appended.extend(movies);
                MoviesState {
                    movies: appended,
                    current_page: state.current_page.max(page),
                    total_pages: total_pages.max(1),
                    loading: false,
                    error: None,
                    ..state
                }
            }

            MoviesAction::FetchFailed { message } => MoviesState {
                error: Some(message),
                loading: false,
                ..state
            },

            MoviesAction::FiltersChanged(filters) => MoviesState { filters, ..state },

            MoviesAction::MovieSelected(selected_movie) => MoviesState {
                selected_movie,
                ..state
            },

            MoviesAction::ErrorCleared => MoviesState {
                error: None,
                ..state
            },
        }
    }
}
