//! Generator module - assembles view-models and freezes them as JSON bundles
//!
//! One generation pass enumerates routes, fetches from both backends,
//! normalizes everything, and writes one prop bundle per page under the
//! public directory. The rendering collaborator consumes the bundles; no
//! partial page is ever emitted.

pub mod routes;

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::content::{
    ArticleDetail, ArticleSummary, BlogBackend, HomePageModel, Normalizer, PageBackend,
};
use crate::error::Error;

/// Page key for the home page on the structured-content backend
const HOME_PAGE_KEY: &str = "home-page";

/// Summary of one generation pass
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub article_pages: usize,
    pub listing_articles: usize,
}

/// Assembles pages from the two remote backends
pub struct Generator<'a, B, P> {
    blog: &'a B,
    page: &'a P,
    normalizer: Normalizer,
}

impl<'a, B: BlogBackend, P: PageBackend> Generator<'a, B, P> {
    /// Create a generator; `asset_origin` is prepended to relative media
    /// paths coming from the structured-content backend
    pub fn new(config: &SiteConfig, asset_origin: &str, blog: &'a B, page: &'a P) -> Self {
        let normalizer = Normalizer::new(
            asset_origin,
            &config.date_format,
            config.excerpt_words,
            config.home_article_count,
        );
        Self {
            blog,
            page,
            normalizer,
        }
    }

    /// Assemble the article listing page
    pub async fn assemble_listing(&self) -> Result<Vec<ArticleSummary>, Error> {
        let posts = self.blog.fetch_post_list().await?;
        posts
            .iter()
            .map(|p| self.normalizer.to_article_summary(p))
            .collect()
    }

    /// Assemble one article detail page
    ///
    /// A slug with no matching post surfaces `Error::NotFound`; the caller
    /// must fail the pass rather than emit a dangling route.
    pub async fn assemble_detail(&self, slug: &str) -> Result<ArticleDetail, Error> {
        let raw = self.blog.fetch_post_by_slug(slug).await?;
        self.normalizer.to_article_detail(&raw)
    }

    /// Assemble the home page
    ///
    /// The two backends share nothing and are fetched concurrently.
    pub async fn assemble_home(&self) -> Result<HomePageModel, Error> {
        let (page, posts) = tokio::join!(
            self.page.fetch_page_content(HOME_PAGE_KEY),
            self.blog.fetch_post_list(),
        );
        self.normalizer.to_home_page_model(&page?, &posts?)
    }

    /// Run a full generation pass, writing frozen bundles under `public_dir`
    ///
    /// Any fetch or normalization error aborts the whole pass; the output
    /// directory may then hold a partial tree, which the orchestrating build
    /// must discard.
    pub async fn generate(&self, public_dir: &Path) -> Result<GenerationReport> {
        let start = std::time::Instant::now();

        let slugs = routes::enumerate_article_routes(self.blog).await?;
        tracing::info!(routes = slugs.len(), "enumerated article routes");

        let listing = self.assemble_listing().await?;
        write_bundle(&public_dir.join("articles.json"), &listing)?;

        let article_dir = public_dir.join("article");
        for slug in &slugs {
            let detail = self.assemble_detail(slug).await?;
            write_bundle(&article_dir.join(format!("{}.json", slug)), &detail)?;
        }

        let home = self.assemble_home().await?;
        write_bundle(&public_dir.join("home.json"), &home)?;

        let report = GenerationReport {
            article_pages: slugs.len(),
            listing_articles: listing.len(),
        };
        tracing::info!(
            article_pages = report.article_pages,
            elapsed = %format!("{:.2}s", start.elapsed().as_secs_f64()),
            "generation pass complete"
        );
        Ok(report)
    }
}

/// Serialize a view-model to pretty JSON on disk
fn write_bundle<T: Serialize>(path: &Path, model: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(model)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote bundle");
    Ok(())
}
