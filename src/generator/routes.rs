//! Dynamic route enumeration
//!
//! Derives the complete set of article routes ahead of any per-page fetch.

use std::collections::HashSet;

use crate::content::BlogBackend;
use crate::error::Error;

/// Enumerate every generatable article route (slug)
///
/// Duplicates collapse; first-seen order is kept so two calls in the same
/// pass produce identical output. An empty or unavailable post list yields
/// the empty set — a site with zero posts generates zero article routes and
/// that is not a failure.
pub async fn enumerate_article_routes<B: BlogBackend>(blog: &B) -> Result<Vec<String>, Error> {
    let posts = match blog.fetch_post_list().await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::warn!(error = %e, "post list unavailable, enumerating zero routes");
            return Ok(Vec::new());
        }
    };

    let mut seen = HashSet::new();
    let mut routes = Vec::new();
    for post in posts {
        if seen.insert(post.slug.clone()) {
            routes.push(post.slug);
        }
    }

    tracing::debug!(count = routes.len(), "enumerated article routes");
    Ok(routes)
}
