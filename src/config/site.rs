//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
///
/// Everything here is non-secret and has a sensible default; the file is
/// optional. Credentials and backend origins live in [`super::Secrets`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Blog backend
    /// Origin of the Ghost-style blog backend (no trailing slash)
    pub ghost_origin: String,

    // Directory
    /// Output directory for frozen page bundles
    pub public_dir: String,

    // Home page
    /// How many recent articles the home page carries
    pub home_article_count: usize,
    /// Excerpt word budget before truncation
    pub excerpt_words: usize,

    // Date / Time format (Moment.js style, like the original site)
    pub date_format: String,

    // Server
    #[serde(default)]
    pub server: ServerConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            ghost_origin: "http://localhost:2368".to_string(),
            public_dir: "public".to_string(),
            home_article_count: 4,
            excerpt_words: 36,
            date_format: "MMMM D, YYYY".to_string(),
            server: ServerConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut config: SiteConfig = serde_yaml::from_str(&content)?;
        config.ghost_origin = config.ghost_origin.trim_end_matches('/').to_string();
        Ok(config)
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}
