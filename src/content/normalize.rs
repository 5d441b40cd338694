//! Content normalizer
//!
//! Pure transformations from raw backend records to canonical view-models.
//! No I/O happens here: identical input always yields identical output, so
//! every entry point is unit-testable without a network.

use crate::content::ghost::RawPost;
use crate::content::model::{
    ArticleDetail, ArticleSummary, DateStamp, HomePageModel, MediaAsset, WorkHistoryEntry,
};
use crate::content::strapi::{RawAssetAttributes, RawDateStamp, RawPageRecord, RawRole};
use crate::error::Error;
use crate::helpers::{date, url};

/// Marker appended to an excerpt when it was cut at the word budget
const ELLIPSIS: &str = "...";

/// Normalizes raw records into view-models
///
/// Holds the handful of knobs normalization needs; everything else is pure
/// function of the input.
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// Origin prepended to relative asset paths
    pub asset_origin: String,
    /// Moment-style display date format
    pub date_format: String,
    /// Excerpt word budget
    pub excerpt_words: usize,
    /// How many posts the home page keeps
    pub home_article_count: usize,
}

impl Normalizer {
    pub fn new(
        asset_origin: &str,
        date_format: &str,
        excerpt_words: usize,
        home_article_count: usize,
    ) -> Self {
        Self {
            asset_origin: asset_origin.trim_end_matches('/').to_string(),
            date_format: date_format.to_string(),
            excerpt_words,
            home_article_count,
        }
    }

    /// Map a raw post to a listing summary
    ///
    /// The raw record's render-layer payload is already gone (typed
    /// deserialization never carried it); this adds date parsing and the
    /// excerpt word budget. The ellipsis is appended only when truncation
    /// actually removed tokens.
    pub fn to_article_summary(&self, raw: &RawPost) -> Result<ArticleSummary, Error> {
        let created_at = date::parse_timestamp(&raw.created_at)?;
        Ok(ArticleSummary {
            slug: raw.slug.clone(),
            title: raw.title.clone(),
            excerpt: truncate_words(&raw.excerpt, self.excerpt_words),
            created_at,
            display_date: date::format_date(&created_at, &self.date_format),
        })
    }

    /// Map a raw post to a detail model, carrying the body through unaltered
    pub fn to_article_detail(&self, raw: &RawPost) -> Result<ArticleDetail, Error> {
        Ok(ArticleDetail {
            summary: self.to_article_summary(raw)?,
            body_markup: raw.html.clone(),
        })
    }

    /// Resolve a media record into an asset with an absolute URL
    ///
    /// Fails when the record has no path or lacks intrinsic dimensions;
    /// neither is ever silently defaulted.
    pub fn to_media_asset(&self, attrs: &RawAssetAttributes) -> Result<MediaAsset, Error> {
        let resolved = resolve_asset_url(attrs.url.as_deref(), &self.asset_origin)?;
        let width = attrs
            .width
            .ok_or_else(|| Error::MissingAsset(format!("width for '{}'", resolved)))?;
        let height = attrs
            .height
            .ok_or_else(|| Error::MissingAsset(format!("height for '{}'", resolved)))?;
        Ok(MediaAsset {
            url: resolved,
            width,
            height,
        })
    }

    /// Map one raw role, preserving whichever start/end shape it came with
    pub fn to_work_history_entry(&self, raw: &RawRole) -> Result<WorkHistoryEntry, Error> {
        let logo = raw
            .logo
            .data
            .as_ref()
            .ok_or_else(|| Error::MissingAsset(format!("logo for role at '{}'", raw.company)))?;
        Ok(WorkHistoryEntry {
            company: raw.company.clone(),
            title: raw.title.clone(),
            start: normalize_date_stamp(&raw.start),
            end: normalize_date_stamp(&raw.end),
            logo: self.to_media_asset(&logo.attributes)?,
        })
    }

    /// Combine the structured page record and the post list into the home
    /// page view-model
    ///
    /// The backend returns posts reverse-chronological; only the head of the
    /// list is kept, never re-sorted.
    pub fn to_home_page_model(
        &self,
        page: &RawPageRecord,
        posts: &[RawPost],
    ) -> Result<HomePageModel, Error> {
        let articles = posts
            .iter()
            .take(self.home_article_count)
            .map(|p| self.to_article_summary(p))
            .collect::<Result<Vec<_>, _>>()?;

        let resume = page
            .resume
            .iter()
            .map(|r| self.to_work_history_entry(r))
            .collect::<Result<Vec<_>, _>>()?;

        // An absent carousel relation is an empty carousel, not an error
        let carousel = page
            .carousel
            .data
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|entry| self.to_media_asset(&entry.attributes))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(HomePageModel {
            page_title: page.page_title.clone(),
            main_header: page.main_header.clone(),
            main_subtext: page.main_subtext.clone(),
            twitter_url: page.twitter_url.clone(),
            github_url: page.github_url.clone(),
            linkedin_url: page.linkedin_url.clone(),
            instagram_url: page.instagram_url.clone(),
            youtube_url: page.youtube_url.clone(),
            articles,
            resume,
            carousel,
        })
    }
}

/// Rewrite a relative asset path to an absolute URL
///
/// Already-absolute input passes through unchanged; a record with no path at
/// all fails with `MissingAsset`.
pub fn resolve_asset_url(path: Option<&str>, base_origin: &str) -> Result<String, Error> {
    let path = path.ok_or_else(|| Error::MissingAsset("a path".to_string()))?;
    if url::is_absolute(path) {
        Ok(path.to_string())
    } else {
        Ok(url::join_origin(base_origin, path))
    }
}

/// Keep the first `budget` whitespace-delimited tokens, joined by single
/// spaces, appending an ellipsis when tokens were dropped
fn truncate_words(text: &str, budget: usize) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() > budget {
        let mut truncated = tokens[..budget].join(" ");
        truncated.push_str(ELLIPSIS);
        truncated
    } else {
        tokens.join(" ")
    }
}

fn normalize_date_stamp(raw: &RawDateStamp) -> DateStamp {
    match raw {
        RawDateStamp::Plain(label) => DateStamp::Plain(label.clone()),
        RawDateStamp::Structured { label, date_time } => DateStamp::Structured {
            label: label.clone(),
            date_time: date_time.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::strapi::tests::sample_record;

    fn normalizer() -> Normalizer {
        Normalizer::new("https://cdn.example.com", "MMMM D, YYYY", 36, 4)
    }

    fn raw_post(slug: &str, excerpt: &str) -> RawPost {
        RawPost {
            slug: slug.to_string(),
            title: format!("Title of {}", slug),
            excerpt: excerpt.to_string(),
            created_at: "2022-11-12T20:02:13.000+00:00".to_string(),
            html: format!("<p>{}</p>", excerpt),
        }
    }

    fn words(n: usize) -> String {
        (0..n).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_short_excerpt_unchanged() {
        let summary = normalizer()
            .to_article_summary(&raw_post("a", &words(36)))
            .unwrap();
        // At the budget: token sequence untouched, no suffix
        assert_eq!(summary.excerpt, words(36));
    }

    #[test]
    fn test_long_excerpt_truncated_with_ellipsis() {
        let summary = normalizer()
            .to_article_summary(&raw_post("a", &words(40)))
            .unwrap();
        assert_eq!(summary.excerpt, format!("{}...", words(36)));
    }

    #[test]
    fn test_excerpt_whitespace_normalized() {
        let summary = normalizer()
            .to_article_summary(&raw_post("a", "hello   world\n\tagain"))
            .unwrap();
        assert_eq!(summary.excerpt, "hello world again");
    }

    #[test]
    fn test_summary_dates() {
        let summary = normalizer().to_article_summary(&raw_post("a", "x")).unwrap();
        assert_eq!(summary.display_date, "November 12, 2022");
        assert_eq!(summary.created_at.to_rfc3339(), "2022-11-12T20:02:13+00:00");
    }

    #[test]
    fn test_detail_carries_body_unaltered() {
        let mut raw = raw_post("a", "x");
        raw.html = "<h1>Hi</h1>\n<script>let x = 1;</script>".to_string();
        let detail = normalizer().to_article_detail(&raw).unwrap();
        assert_eq!(detail.body_markup, raw.html);
        assert_eq!(detail.summary.slug, "a");
    }

    #[test]
    fn test_resolve_relative_asset_url() {
        assert_eq!(
            resolve_asset_url(Some("/img/a.png"), "https://cdn.example.com").unwrap(),
            "https://cdn.example.com/img/a.png"
        );
    }

    #[test]
    fn test_resolve_absolute_asset_url_unchanged() {
        assert_eq!(
            resolve_asset_url(Some("https://x.com/a.png"), "https://cdn.example.com").unwrap(),
            "https://x.com/a.png"
        );
    }

    #[test]
    fn test_resolve_missing_path() {
        let err = resolve_asset_url(None, "https://cdn.example.com").unwrap_err();
        assert!(matches!(err, Error::MissingAsset(_)));
    }

    #[test]
    fn test_asset_without_dimensions_fails() {
        let attrs = RawAssetAttributes {
            url: Some("/img/a.png".to_string()),
            width: None,
            height: Some(10),
        };
        let err = normalizer().to_media_asset(&attrs).unwrap_err();
        assert!(matches!(err, Error::MissingAsset(_)));
    }

    #[test]
    fn test_work_history_preserves_both_shapes() {
        let record = sample_record();
        let entry = normalizer().to_work_history_entry(&record.resume[0]).unwrap();

        assert_eq!(entry.company, "Acme");
        assert_eq!(entry.start, DateStamp::Plain("2021".to_string()));
        assert_eq!(
            entry.end,
            DateStamp::Structured {
                label: "Present".to_string(),
                date_time: "2024-01-01".to_string(),
            }
        );
        assert_eq!(entry.logo.url, "https://cdn.example.com/uploads/acme.png");
        assert_eq!(entry.logo.width, 150);

        // Lossless through the frozen bundle
        let json = serde_json::to_string(&entry).unwrap();
        let back: WorkHistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_home_page_keeps_first_four_posts() {
        let record = sample_record();
        let posts: Vec<RawPost> = (0..6).map(|i| raw_post(&format!("post-{}", i), "x")).collect();

        let model = normalizer().to_home_page_model(&record, &posts).unwrap();

        assert_eq!(model.articles.len(), 4);
        let slugs: Vec<_> = model.articles.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["post-0", "post-1", "post-2", "post-3"]);
    }

    #[test]
    fn test_home_page_scalars_and_carousel() {
        let record = sample_record();
        let model = normalizer().to_home_page_model(&record, &[]).unwrap();

        assert_eq!(model.page_title, "Jamie Doe - Developer");
        assert_eq!(model.github_url, "https://github.com/jamie");
        assert!(model.articles.is_empty());
        assert_eq!(model.carousel.len(), 1);
        assert_eq!(
            model.carousel[0],
            MediaAsset {
                url: "https://cdn.example.com/uploads/photo1.jpg".to_string(),
                width: 800,
                height: 900,
            }
        );
    }

    #[test]
    fn test_home_page_missing_carousel_is_empty() {
        let mut record = sample_record();
        record.carousel.data = None;
        let model = normalizer().to_home_page_model(&record, &[]).unwrap();
        assert!(model.carousel.is_empty());
    }

    #[test]
    fn test_determinism() {
        let raw = raw_post("a", &words(50));
        let n = normalizer();
        assert_eq!(
            n.to_article_summary(&raw).unwrap(),
            n.to_article_summary(&raw).unwrap()
        );
    }
}
