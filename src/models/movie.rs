use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Summary record for a movie as it appears in list responses.
///
/// Records are replaced wholesale on refetch and never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Upstream identifier, stable across list and detail fetches.
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// ISO calendar date (`YYYY-MM-DD`); upstream sends an empty string when unknown.
    #[serde(default)]
    pub release_date: String,
    /// Average vote on a 0-10 scale.
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub popularity: f64,
    /// ISO 639-1 code.
    #[serde(default)]
    pub original_language: String,
    /// Absent from detail responses, which carry resolved `genres` instead.
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub video: bool,
}

impl Movie {
    /// Parse the release date, if it is a valid ISO date.
    pub fn release_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.release_date.trim(), "%Y-%m-%d").ok()
    }

    pub fn release_year(&self) -> Option<i32> {
        self.release_date_parsed().map(|d| d.year())
    }

    /// Long-form release date, e.g. "May 5, 2023".
    pub fn formatted_release_date(&self) -> Option<String> {
        self.release_date_parsed()
            .map(|d| d.format("%B %-d, %Y").to_string())
    }
}

/// One page of a list endpoint (`now_playing`, `popular`, `search`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    #[serde(default = "default_page")]
    pub page: u32,
    /// Missing `results` is an empty page, not an error.
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default = "default_page")]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

fn default_page() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie_released(date: &str) -> Movie {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Test",
            "release_date": date,
        }))
        .unwrap()
    }

    #[test]
    fn minimal_movie_deserializes_with_defaults() {
        let movie = movie_released("2023-05-05");
        assert_eq!(movie.id, 1);
        assert!(movie.poster_path.is_none());
        assert!(movie.genre_ids.is_empty());
        assert_eq!(movie.vote_count, 0);
        assert!(!movie.adult);
    }

    #[test]
    fn null_poster_path_is_none() {
        let movie: Movie = serde_json::from_str(
            r#"{"id": 7, "title": "No Poster", "poster_path": null, "backdrop_path": "/b.jpg"}"#,
        )
        .unwrap();
        assert!(movie.poster_path.is_none());
        assert_eq!(movie.backdrop_path.as_deref(), Some("/b.jpg"));
    }

    #[test]
    fn release_date_helpers() {
        let movie = movie_released("2023-05-05");
        assert_eq!(movie.release_year(), Some(2023));
        assert_eq!(movie.formatted_release_date().as_deref(), Some("May 5, 2023"));

        let unknown = movie_released("");
        assert_eq!(unknown.release_year(), None);
        assert_eq!(unknown.formatted_release_date(), None);
    }

    #[test]
    fn page_without_results_is_empty() {
        let page: MoviePage = serde_json::from_str(r#"{"page": 3}"#).unwrap();
        assert_eq!(page.page, 3);
        assert!(page.results.is_empty());
        assert_eq!(page.total_pages, 1);
    }
}
