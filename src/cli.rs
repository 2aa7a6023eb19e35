//! Command-line surface and plain-text rendering.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::{
    format_currency, FilterLanguage, FilterMedia, FilterOptions, Movie, MovieDetails, SortOption,
};

#[derive(Debug, Parser)]
#[command(name = "cinescope", version, about = "Browse TMDB movie lists from the terminal")]
pub struct Cli {
    /// Config file (defaults to the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Result ordering
    #[arg(long, global = true, default_value_t = SortOption::Newest)]
    pub sort: SortOption,

    /// Keep only subtitled or dubbed titles
    #[arg(long, global = true, default_value_t = FilterLanguage::All)]
    pub language: FilterLanguage,

    #[arg(long, global = true, default_value_t = FilterMedia::All)]
    pub media: FilterMedia,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn filters(&self) -> FilterOptions {
        FilterOptions {
            language: self.language,
            media: self.media,
            sort_by: self.sort,
        }
    }
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Movies currently in theatres
    NowPlaying {
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Append this many following pages
        #[arg(long, default_value_t = 0, conflicts_with = "page")]
        more: u32,
    },
    Popular {
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
    TopRated {
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
    Upcoming {
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
    /// Search titles by free text
    Search {
        query: String,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        #[arg(long, default_value_t = 0, conflicts_with = "page")]
        more: u32,
    },
    /// Full record for one movie id
    Details { id: u64 },
    /// Show details for entry INDEX (1-based) of the last printed list
    Select {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        index: u64,
    },
    ClearSession,
}

/// Numbered list, one movie per line.
pub fn render_movie_list(movies: &[Movie]) -> String {
    if movies.is_empty() {
        return "No movies found.\n".to_string();
    }

    let mut out = String::new();
    for (i, movie) in movies.iter().enumerate() {
        let year = movie
            .release_year()
            .map(|y| format!(" ({})", y))
            .unwrap_or_default();
        out.push_str(&format!(
            "{:>3}. {}{}  {:.1}/10  [{}]\n",
            i + 1,
            movie.title,
            year,
            movie.vote_average,
            movie.original_language
        ));
    }
    out
}

pub fn render_details(details: &MovieDetails, poster_url: &str) -> String {
    let movie = &details.movie;
    let mut lines = vec![movie.title.clone()];

    if let Some(tagline) = details.tagline.as_deref().filter(|t| !t.is_empty()) {
        lines.push(format!("  \"{}\"", tagline));
    }
    if let Some(date) = movie.formatted_release_date() {
        lines.push(format!("Released: {}", date));
    }
    if let Some(runtime) = details.formatted_runtime() {
        lines.push(format!("Runtime:  {}", runtime));
    }
    if !details.genres.is_empty() {
        lines.push(format!("Genres:   {}", details.genre_names().join(", ")));
    }
    lines.push(format!(
        "Rating:   {:.1}/10 ({} votes)",
        movie.vote_average, movie.vote_count
    ));
    lines.push(format!("Status:   {}", details.status));
    if details.budget > 0 {
        lines.push(format!("Budget:   {}", format_currency(details.budget)));
    }
    if details.revenue > 0 {
        lines.push(format!("Revenue:  {}", format_currency(details.revenue)));
    }
    lines.push(format!("Poster:   {}", poster_url));
    if !movie.overview.is_empty() {
        lines.push(String::new());
        lines.push(movie.overview.clone());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
