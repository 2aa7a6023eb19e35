use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordering applied to every filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// Release date, latest first.
    #[default]
    Newest,
    /// Upstream popularity score, highest first.
    Popularity,
    /// Title, ascending and case-insensitive.
    Alphabetical,
}

/// Language filter relative to the configured baseline language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterLanguage {
    #[default]
    All,
    /// Original language differs from the baseline.
    Subtitled,
    /// Original language is the baseline.
    Dubbed,
}

/// Media kind filter. Upstream lists only carry movies, so every variant
/// currently admits everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMedia {
    #[default]
    All,
    Movies,
    Series,
}

/// User filter and sort preferences. Always replaced as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    pub language: FilterLanguage,
    pub media: FilterMedia,
    #[serde(rename = "sortBy", alias = "sort_by")]
    pub sort_by: SortOption,
}

macro_rules! string_enum {
    ($ty:ident, $what:literal, { $($variant:ident => $key:literal),+ $(,)? }) => {
        impl $ty {
            /// Stable lowercase key, shared by serde and the CLI.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }

            pub fn all() -> &'static [$ty] {
                &[$(Self::$variant),+]
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($key => Ok(Self::$variant),)+
                    other => Err(format!(
                        "unknown {} '{}', expected one of: {}",
                        $what,
                        other,
                        [$($key),+].join(", ")
                    )),
                }
            }
        }
    };
}

string_enum!(SortOption, "sort option", {
    Newest => "newest",
    Popularity => "popularity",
    Alphabetical => "alphabetical",
});

string_enum!(FilterLanguage, "language filter", {
    All => "all",
    Subtitled => "subtitled",
    Dubbed => "dubbed",
});

string_enum!(FilterMedia, "media filter", {
    All => "all",
    Movies => "movies",
    Series => "series",
});
