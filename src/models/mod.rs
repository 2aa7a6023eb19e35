//! Entity shapes shared by the service, the store and the session snapshot.
//!
//! Field names follow the upstream JSON so records deserialize without
//! renaming.

mod details;
mod filter;
mod movie;

pub use details::{
    format_currency, Genre, MovieDetails, ProductionCompany, ProductionCountry, SpokenLanguage,
};
pub use filter::{FilterLanguage, FilterMedia, FilterOptions, SortOption};
pub use movie::{Movie, MoviePage};
