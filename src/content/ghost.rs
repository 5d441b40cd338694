//! Ghost-style blog backend client
//!
//! Thin fetcher for the Content API: one GET per call, key in the query
//! string, `{ "posts": [...] }` envelope. No retry, no pagination; callers
//! get whatever page size the backend's default returns.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Error;
use crate::helpers::url::encode_slug;

/// Raw post record as returned by the Content API
///
/// Typed deserialization keeps only the data fields; render-layer payloads
/// embedded in the raw record (the `component` blob) are dropped here.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPost {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    pub created_at: String,
    #[serde(default)]
    pub html: String,
}

#[derive(Deserialize)]
struct PostsEnvelope {
    #[serde(default)]
    posts: Vec<RawPost>,
}

/// Read access to the blog backend
#[async_trait]
pub trait BlogBackend: Send + Sync {
    /// Fetch the full post list
    async fn fetch_post_list(&self) -> Result<Vec<RawPost>, Error>;

    /// Fetch a single post by slug; `Error::NotFound` when no post matches
    async fn fetch_post_by_slug(&self, slug: &str) -> Result<RawPost, Error>;
}

/// `reqwest`-backed Content API client
pub struct GhostClient {
    client: reqwest::Client,
    origin: String,
    key: String,
}

impl GhostClient {
    /// Create a client for the given origin (`https://blog.example.com`,
    /// no trailing slash) and Content API key
    pub fn new(origin: &str, key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            origin: origin.trim_end_matches('/').to_string(),
            key: key.to_string(),
        }
    }

    async fn get_posts(&self, path: &str) -> Result<Vec<RawPost>, Error> {
        let url = format!(
            "{}/ghost/api/v3/content/{}?key={}",
            self.origin, path, self.key
        );
        tracing::debug!(url = %url, "fetching from blog backend");

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(Error::from_response(resp).await);
        }

        let body = resp.text().await?;
        let envelope: PostsEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.posts)
    }
}

#[async_trait]
impl BlogBackend for GhostClient {
    async fn fetch_post_list(&self) -> Result<Vec<RawPost>, Error> {
        let posts = self.get_posts("posts").await?;
        tracing::debug!(count = posts.len(), "fetched post list");
        Ok(posts)
    }

    async fn fetch_post_by_slug(&self, slug: &str) -> Result<RawPost, Error> {
        // The slug endpoint answers with the same envelope; an empty array
        // means no match.
        let path = format!("posts/slug/{}", encode_slug(slug));
        let posts = self.get_posts(&path).await?;
        posts
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound(slug.to_string()))
    }
}
