//! Canonical view-models
//!
//! Backend-agnostic shapes frozen into the generated page bundles. Rendering
//! collaborators consume these and never see the raw backend payloads. All
//! of them are built once per generation pass and never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post as it appears on listing surfaces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// URL-safe unique identifier, used as the dynamic route segment
    pub slug: String,

    /// Post title
    pub title: String,

    /// Excerpt, possibly truncated to the configured word budget
    pub excerpt: String,

    /// Publication instant
    pub created_at: DateTime<Utc>,

    /// Human-readable publication date ("January 15, 2024")
    pub display_date: String,
}

/// A post with its full rich-content body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDetail {
    #[serde(flatten)]
    pub summary: ArticleSummary,

    /// Raw rich-content markup, carried through unaltered for the rendering
    /// collaborator to interpret
    pub body_markup: String,
}

/// An image with an absolute URL and real intrinsic dimensions
///
/// Width and height are mandatory; layout code needs them to reserve space
/// and an asset without them fails normalization instead of defaulting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaAsset {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// A start or end date on a work-history entry
///
/// The structured backend returns either a plain label string or a
/// label/machine-date pair; both shapes are carried losslessly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateStamp {
    Structured {
        label: String,
        #[serde(rename = "dateTime")]
        date_time: String,
    },
    Plain(String),
}

/// One role in the home page's work-history list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkHistoryEntry {
    pub company: String,
    pub title: String,
    pub start: DateStamp,
    pub end: DateStamp,
    pub logo: MediaAsset,
}

/// The complete home page view-model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomePageModel {
    pub page_title: String,
    pub main_header: String,
    pub main_subtext: String,

    pub twitter_url: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub instagram_url: String,
    pub youtube_url: String,

    /// Most recent articles, backend order preserved, at most the configured
    /// count (4 by default)
    pub articles: Vec<ArticleSummary>,

    /// Work history, in backend order
    pub resume: Vec<WorkHistoryEntry>,

    /// Carousel images, in backend order
    pub carousel: Vec<MediaAsset>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_stamp_plain_roundtrip() {
        let stamp = DateStamp::Plain("Present".to_string());
        let json = serde_json::to_string(&stamp).unwrap();
        assert_eq!(json, r#""Present""#);
        let back: DateStamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stamp);
    }

    #[test]
    fn test_date_stamp_structured_roundtrip() {
        let stamp = DateStamp::Structured {
            label: "2019".to_string(),
            date_time: "2019-03-01".to_string(),
        };
        let json = serde_json::to_string(&stamp).unwrap();
        let back: DateStamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stamp);
        // The machine date keeps its original field name on the wire
        assert!(json.contains(r#""dateTime":"2019-03-01""#));
    }

    #[test]
    fn test_article_detail_flattens_summary() {
        let detail = ArticleDetail {
            summary: ArticleSummary {
                slug: "hello".to_string(),
                title: "Hello".to_string(),
                excerpt: "Hi".to_string(),
                created_at: "2022-11-12T20:02:13Z".parse().unwrap(),
                display_date: "November 12, 2022".to_string(),
            },
            body_markup: "<p>Hi</p>".to_string(),
        };
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["slug"], "hello");
        assert_eq!(value["body_markup"], "<p>Hi</p>");
    }
}
