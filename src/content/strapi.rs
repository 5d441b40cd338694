//! Strapi-style structured-content backend client
//!
//! Fetches one page record per call. The API wraps everything in a
//! `{ "data": { "attributes": {...} } }` envelope; relations (logo, carousel)
//! add their own nested `data`/`attributes` layers.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Error;

/// Raw home-page record (the `attributes` object)
#[derive(Debug, Clone, Deserialize)]
pub struct RawPageRecord {
    #[serde(rename = "PageTitle")]
    pub page_title: String,
    #[serde(rename = "MainHeader")]
    pub main_header: String,
    #[serde(rename = "MainSubtext")]
    pub main_subtext: String,

    #[serde(rename = "TwitterUrl")]
    pub twitter_url: String,
    #[serde(rename = "GitHubUrl")]
    pub github_url: String,
    #[serde(rename = "LinkedInUrl")]
    pub linkedin_url: String,
    #[serde(rename = "InstagramUrl")]
    pub instagram_url: String,
    #[serde(rename = "YouTubeUrl")]
    pub youtube_url: String,

    #[serde(rename = "Resume", default)]
    pub resume: Vec<RawRole>,
    #[serde(rename = "Carousel", default)]
    pub carousel: RawAssetList,
}

/// One work-history role as the backend returns it
#[derive(Debug, Clone, Deserialize)]
pub struct RawRole {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Start")]
    pub start: RawDateStamp,
    #[serde(rename = "End")]
    pub end: RawDateStamp,
    #[serde(rename = "Logo", default)]
    pub logo: RawAssetRelation,
}

/// Polymorphic start/end value: a bare label or a label/machine-date pair
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDateStamp {
    Structured {
        label: String,
        #[serde(rename = "dateTime")]
        date_time: String,
    },
    Plain(String),
}

/// A to-many media relation (`Carousel`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAssetList {
    #[serde(default)]
    pub data: Option<Vec<RawAssetEntry>>,
}

/// A to-one media relation (`Logo`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAssetRelation {
    #[serde(default)]
    pub data: Option<RawAssetEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAssetEntry {
    pub attributes: RawAssetAttributes,
}

/// Media attributes; everything optional so normalization decides what is
/// fatal instead of the decoder
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAssetAttributes {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Deserialize)]
struct Envelope {
    data: EnvelopeData,
}

#[derive(Deserialize)]
struct EnvelopeData {
    attributes: RawPageRecord,
}

/// Read access to the structured-content backend
#[async_trait]
pub trait PageBackend: Send + Sync {
    /// Fetch one page record by key (`home-page`)
    async fn fetch_page_content(&self, page_key: &str) -> Result<RawPageRecord, Error>;
}

/// `reqwest`-backed structured-content client
pub struct StrapiClient {
    client: reqwest::Client,
    origin: String,
}

impl StrapiClient {
    /// Create a client for the given origin (no trailing slash)
    pub fn new(origin: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            origin: origin.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl PageBackend for StrapiClient {
    async fn fetch_page_content(&self, page_key: &str) -> Result<RawPageRecord, Error> {
        let url = format!(
            "{}/api/{}?populate=Resume.Logo&populate=Avatar&populate=Carousel",
            self.origin, page_key
        );
        tracing::debug!(url = %url, "fetching from structured-content backend");

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(Error::from_response(resp).await);
        }

        let body = resp.text().await?;
        let envelope: Envelope = serde_json::from_str(&body)?;
        Ok(envelope.data.attributes)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A complete envelope covering both date-stamp shapes and a missing
    /// carousel asset field mix
    pub(crate) const SAMPLE_ENVELOPE: &str = r#"{
        "data": {
            "id": 1,
            "attributes": {
                "PageTitle": "Jamie Doe - Developer",
                "MainHeader": "Software engineer, writer.",
                "MainSubtext": "I build things for the web.",
                "TwitterUrl": "https://twitter.com/jamie",
                "GitHubUrl": "https://github.com/jamie",
                "LinkedInUrl": "https://linkedin.com/in/jamie",
                "InstagramUrl": "https://instagram.com/jamie",
                "YouTubeUrl": "https://youtube.com/@jamie",
                "Resume": [
                    {
                        "Company": "Acme",
                        "Title": "Senior Engineer",
                        "Start": "2021",
                        "End": {"label": "Present", "dateTime": "2024-01-01"},
                        "Logo": {
                            "data": {
                                "attributes": {
                                    "url": "/uploads/acme.png",
                                    "width": 150,
                                    "height": 150
                                }
                            }
                        }
                    }
                ],
                "Carousel": {
                    "data": [
                        {
                            "attributes": {
                                "url": "/uploads/photo1.jpg",
                                "width": 800,
                                "height": 900
                            }
                        }
                    ]
                }
            }
        }
    }"#;

    #[test]
    fn test_parse_envelope() {
        let envelope: Envelope = serde_json::from_str(SAMPLE_ENVELOPE).unwrap();
        let record = envelope.data.attributes;
        assert_eq!(record.page_title, "Jamie Doe - Developer");
        assert_eq!(record.resume.len(), 1);

        let role = &record.resume[0];
        assert_eq!(role.company, "Acme");
        assert!(matches!(role.start, RawDateStamp::Plain(ref s) if s == "2021"));
        assert!(matches!(
            role.end,
            RawDateStamp::Structured { ref label, .. } if label == "Present"
        ));

        let carousel = record.carousel.data.unwrap();
        assert_eq!(carousel[0].attributes.url.as_deref(), Some("/uploads/photo1.jpg"));
        assert_eq!(carousel[0].attributes.width, Some(800));
    }

    #[test]
    fn test_parse_without_carousel() {
        let json = r#"{
            "data": {
                "attributes": {
                    "PageTitle": "t", "MainHeader": "h", "MainSubtext": "s",
                    "TwitterUrl": "", "GitHubUrl": "", "LinkedInUrl": "",
                    "InstagramUrl": "", "YouTubeUrl": ""
                }
            }
        }"#;
        let envelope: Envelope = serde_json::from_str(json).unwrap();
        let record = envelope.data.attributes;
        assert!(record.resume.is_empty());
        assert!(record.carousel.data.is_none());
    }

    pub(crate) fn sample_record() -> RawPageRecord {
        let envelope: Envelope = serde_json::from_str(SAMPLE_ENVELOPE).unwrap();
        envelope.data.attributes
    }
}
