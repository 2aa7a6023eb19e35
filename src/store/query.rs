//! Pure, non-mutating list queries: sorting and filtering.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::models::{FilterLanguage, FilterMedia, FilterOptions, Movie, SortOption};

/// Baseline language the subtitled/dubbed filters compare against.
pub const DEFAULT_BASELINE_LANGUAGE: &str = "en";

/// Return a sorted copy of `movies`. Ties keep their input order.
pub fn sort_movies(movies: &[Movie], sort_by: SortOption) -> Vec<Movie> {
    let mut sorted = movies.to_vec();
    match sort_by {
        SortOption::Newest => sorted.sort_by(newest_first),
        SortOption::Popularity => sorted.sort_by(|a, b| b.popularity.total_cmp(&a.popularity)),
        SortOption::Alphabetical => sorted.sort_by_cached_key(|m| title_sort_key(&m.title)),
    }
    sorted
}

/// Filter against the default baseline language, then sort.
pub fn filter_movies(movies: &[Movie], filters: &FilterOptions) -> Vec<Movie> {
    filter_movies_with_baseline(movies, filters, DEFAULT_BASELINE_LANGUAGE)
}

/// Filter against `baseline` (an ISO 639-1 code), then apply `filters.sort_by`.
pub fn filter_movies_with_baseline(
    movies: &[Movie],
    filters: &FilterOptions,
    baseline: &str,
) -> Vec<Movie> {
    let filtered: Vec<Movie> = movies
        .iter()
        .filter(|movie| matches_language(movie, filters.language, baseline))
        .filter(|movie| matches_media(movie, filters.media))
        .cloned()
        .collect();
    sort_movies(&filtered, filters.sort_by)
}

fn matches_language(movie: &Movie, language: FilterLanguage, baseline: &str) -> bool {
    match language {
        FilterLanguage::All => true,
        FilterLanguage::Subtitled => !movie.original_language.eq_ignore_ascii_case(baseline),
        FilterLanguage::Dubbed => movie.original_language.eq_ignore_ascii_case(baseline),
    }
}

fn matches_media(_movie: &Movie, media: FilterMedia) -> bool {
    match media {
        FilterMedia::All => true,
        // Upstream lists only contain movies; series cannot be told apart yet.
        FilterMedia::Movies | FilterMedia::Series => true,
    }
}

/// Latest release first. Missing or unparsable dates sort after every valid date.
fn newest_first(a: &Movie, b: &Movie) -> Ordering {
    match (a.release_date_parsed(), b.release_date_parsed()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Collation key for title order.
///
/// Primary: diacritics stripped (NFD minus combining marks) and lowercased, so
/// "Émile" files under "e". Secondary: lowercased title, so an unaccented
/// letter precedes its accented form. Raw title last keeps the order total.
fn title_sort_key(title: &str) -> (String, String, String) {
    let base: String = title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();
    (base, title.to_lowercase(), title.to_string())
}
