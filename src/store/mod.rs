//! Application state store.
//!
//! # Architecture
//!
//! Uses the action/reducer pattern:
//! - `state.rs` - Aggregate state (lists, detail record, flags, cursor, filters)
//! - `action.rs` - Closed set of named state changes
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `query.rs` - Derived sort/filter queries (pure)
//! - `store.rs` - Runs fetches and dispatches the resulting actions

pub mod mvi;

mod action;
mod query;
mod reducer;
mod state;
#[allow(clippy::module_inception)]
mod store;

pub use action::MoviesAction;
pub use query::{filter_movies, filter_movies_with_baseline, sort_movies, DEFAULT_BASELINE_LANGUAGE};
pub use reducer::MoviesReducer;
pub use state::MoviesState;
pub use store::{
    MoviesStore, DETAILS_FAILED, LOAD_MORE_FAILED, NOW_PLAYING_FAILED, POPULAR_FAILED,
    SEARCH_FAILED,
};
