//! Image URL resolution for poster and backdrop path fragments.

/// Returned in place of a URL when a record has no image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-movie.jpg";

/// Size segment used when none is requested.
pub const DEFAULT_IMAGE_SIZE: &str = "original";

/// Resolves path fragments like `/abc.jpg` against the image host.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base_url: String,
}

impl ImageResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/{size}{path}`, or the placeholder when `path` is missing or blank.
    pub fn image_url(&self, path: Option<&str>, size: &str) -> String {
        match path.map(str::trim).filter(|p| !p.is_empty()) {
            Some(path) => {
                let size = if size.trim().is_empty() {
                    DEFAULT_IMAGE_SIZE
                } else {
                    size.trim()
                };
                if path.starts_with('/') {
                    format!("{}/{}{}", self.base_url, size, path)
                } else {
                    format!("{}/{}/{}", self.base_url, size, path)
                }
            }
            None => PLACEHOLDER_IMAGE.to_string(),
        }
    }

    /// Full-resolution URL for `path`.
    pub fn full_image_url(&self, path: Option<&str>) -> String {
        self.image_url(path, DEFAULT_IMAGE_SIZE)
    }
}
