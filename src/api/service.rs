//! Movie data service: the single access point to the upstream API.
//!
//! Every operation is routed through the shared [`RequestCache`] under a key
//! scoped to the operation and its parameters. Failures are returned with
//! the operation's name attached; nothing is retried here.

use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::images::ImageResolver;
use crate::cache::{cache_key, RequestCache};
use crate::config::{Config, SecureString};
use crate::models::{Movie, MovieDetails, MoviePage};

/// Logical upstream operations, used for routing, cache keys and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    NowPlaying,
    Popular,
    TopRated,
    Upcoming,
    Search,
    Details,
}

impl Operation {
    /// Stable name, used as the cache key prefix.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NowPlaying => "now_playing",
            Self::Popular => "popular",
            Self::TopRated => "top_rated",
            Self::Upcoming => "upcoming",
            Self::Search => "search",
            Self::Details => "movie_details",
        }
    }

    fn list_path(&self) -> &'static str {
        match self {
            Self::NowPlaying => "movie/now_playing",
            Self::Popular => "movie/popular",
            Self::TopRated => "movie/top_rated",
            Self::Upcoming => "movie/upcoming",
            Self::Search => "search/movie",
            Self::Details => "movie",
        }
    }
}

pub struct MovieService {
    client: Client,
    base_url: String,
    language: String,
    token: Option<SecureString>,
    images: ImageResolver,
    cache: RequestCache<Value>,
}

impl MovieService {
    /// Build the service from configuration.
    ///
    /// Intended to be called once by the composition root and shared via `Arc`.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(config.api.connect_timeout())
            .timeout(config.api.timeout())
            .build()
            .map_err(ApiError::Client)?;

        let token = config.api.resolve_token();
        if token.is_none() {
            tracing::warn!("No API token configured; requests will be sent unauthenticated");
        }

        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            language: config.api.language.clone(),
            token,
            images: ImageResolver::new(config.api.image_base_url.clone()),
            cache: RequestCache::new(config.cache.ttl()),
        })
    }

    pub async fn now_playing(&self, page: u32) -> Result<Vec<Movie>, ApiError> {
        Ok(self.now_playing_page(page).await?.results)
    }

    pub async fn popular(&self, page: u32) -> Result<Vec<Movie>, ApiError> {
        Ok(self.popular_page(page).await?.results)
    }

    pub async fn top_rated(&self, page: u32) -> Result<Vec<Movie>, ApiError> {
        Ok(self.top_rated_page(page).await?.results)
    }

    pub async fn upcoming(&self, page: u32) -> Result<Vec<Movie>, ApiError> {
        Ok(self.upcoming_page(page).await?.results)
    }

    pub async fn search(&self, query: &str, page: u32) -> Result<Vec<Movie>, ApiError> {
        Ok(self.search_page(query, page).await?.results)
    }

    pub async fn now_playing_page(&self, page: u32) -> Result<MoviePage, ApiError> {
        self.list_page(Operation::NowPlaying, page, &[]).await
    }

    pub async fn popular_page(&self, page: u32) -> Result<MoviePage, ApiError> {
        self.list_page(Operation::Popular, page, &[("language", self.language.as_str())])
            .await
    }

    pub async fn top_rated_page(&self, page: u32) -> Result<MoviePage, ApiError> {
        self.list_page(Operation::TopRated, page, &[]).await
    }

    pub async fn upcoming_page(&self, page: u32) -> Result<MoviePage, ApiError> {
        self.list_page(Operation::Upcoming, page, &[]).await
    }

    pub async fn search_page(&self, query: &str, page: u32) -> Result<MoviePage, ApiError> {
        let page = page.max(1);
        let operation = Operation::Search;
        let key = cache_key(operation.name(), &[&query, &page]);
        let url = self.endpoint(
            operation,
            operation.list_path(),
            &[("query", query), ("page", &page.to_string())],
        )?;
        self.cached(operation, &key, url).await
    }

    /// Full detail record for `id`.
    ///
    /// Missing required fields are a decode failure, not a default.
    pub async fn details(&self, id: u64) -> Result<MovieDetails, ApiError> {
        let operation = Operation::Details;
        let key = cache_key(operation.name(), &[&id]);
        let path = format!("{}/{}", operation.list_path(), id);
        let url = self.endpoint(operation, &path, &[])?;
        self.cached(operation, &key, url).await
    }

    pub fn image_url(&self, path: Option<&str>, size: &str) -> String {
        self.images.image_url(path, size)
    }

    pub fn full_image_url(&self, path: Option<&str>) -> String {
        self.images.full_image_url(path)
    }

    /// Drop every cached response, forcing the next calls to hit upstream.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cache(&self) -> &RequestCache<Value> {
        &self.cache
    }

    async fn list_page(
        &self,
        operation: Operation,
        page: u32,
        extra: &[(&str, &str)],
    ) -> Result<MoviePage, ApiError> {
        let page = page.max(1);
        let key = cache_key(operation.name(), &[&page]);
        let page_str = page.to_string();
        let mut params: Vec<(&str, &str)> = extra.to_vec();
        params.push(("page", &page_str));
        let url = self.endpoint(operation, operation.list_path(), &params)?;
        self.cached(operation, &key, url).await
    }

    fn endpoint(
        &self,
        operation: Operation,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, path)).map_err(|e| {
            ApiError::InvalidUrl {
                operation: operation.name(),
                message: e.to_string(),
            }
        })?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter().copied());
        }
        Ok(url)
    }

    /// Fetch through the cache, storing only payloads that decode as `T`.
    async fn cached<T>(&self, operation: Operation, key: &str, url: Url) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let value = self
            .cache
            .get_or_fetch(key, || async {
                let value = self.fetch_json(operation, url).await?;
                decode::<T>(operation, &value)?;
                Ok::<_, ApiError>(value)
            })
            .await?;
        decode(operation, &value)
    }

    async fn fetch_json(&self, operation: Operation, url: Url) -> Result<Value, ApiError> {
        tracing::debug!(operation = operation.name(), url = %url, "Fetching from upstream");

        let mut request = self.client.get(url).header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose());
        }

        let response = request.send().await.map_err(|e| ApiError::Network {
            operation: operation.name(),
            source: e,
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Network {
            operation: operation.name(),
            source: e,
        })?;

        if !status.is_success() {
            return Err(ApiError::Status {
                operation: operation.name(),
                status: status.as_u16(),
                message: upstream_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            operation: operation.name(),
            source: e,
        })
    }
}

fn decode<T: DeserializeOwned>(operation: Operation, value: &Value) -> Result<T, ApiError> {
    T::deserialize(value).map_err(|e| ApiError::Decode {
        operation: operation.name(),
        source: e,
    })
}

/// Pull `status_message` out of an upstream error body, falling back to the raw text.
fn upstream_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        status_message: String,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.status_message,
        Err(_) => body.chars().take(200).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> MovieService {
        MovieService::new(&Config::default()).unwrap()
    }

    #[test]
    fn operation_names_match_cache_prefixes() {
        assert_eq!(Operation::NowPlaying.name(), "now_playing");
        assert_eq!(Operation::Details.name(), "movie_details");
        assert_eq!(Operation::Search.list_path(), "search/movie");
    }

    #[test]
    fn endpoint_encodes_query_parameters() {
        let url = service()
            .endpoint(
                Operation::Search,
                "search/movie",
                &[("query", "the matrix & more"), ("page", "2")],
            )
            .unwrap();
        assert_eq!(url.path(), "/3/search/movie");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("query".to_string(), "the matrix & more".to_string()),
                ("page".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn upstream_message_prefers_status_message() {
        assert_eq!(
            upstream_message(r#"{"status_code": 7, "status_message": "Invalid API key"}"#),
            "Invalid API key"
        );
        assert_eq!(upstream_message("gateway down"), "gateway down");
    }

    #[test]
    fn image_helpers_delegate_to_resolver() {
        let svc = service();
        assert_eq!(
            svc.image_url(Some("/a.jpg"), "w185"),
            "https://image.tmdb.org/t/p/w185/a.jpg"
        );
        assert_eq!(svc.full_image_url(None), crate::api::PLACEHOLDER_IMAGE);
    }
}
