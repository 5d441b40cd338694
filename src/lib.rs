//! portico-rs: static site generation core for a headless-CMS portfolio
//!
//! Content lives in two remote backends (a Ghost-style blog API and a
//! Strapi-style structured-page API). Each generation pass fetches both,
//! normalizes the raw records into canonical view-models, and freezes one
//! JSON prop bundle per page for a rendering collaborator to consume.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod relay;
pub mod server;

pub use error::Error;

use anyhow::Result;
use std::path::Path;

/// The main application: configuration plus resolved directories
#[derive(Clone)]
pub struct Portico {
    /// Site configuration (_config.yml, optional)
    pub config: config::SiteConfig,
    /// Environment-provided credentials, required at startup
    pub secrets: config::Secrets,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Portico {
    /// Create an instance from a directory; fails fast when any required
    /// environment variable is missing
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let secrets = config::Secrets::from_env()?;
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            secrets,
            base_dir,
            public_dir,
        })
    }

    /// Run a full generation pass
    pub async fn generate(&self) -> Result<()> {
        commands::generate::run(self).await
    }

    /// Remove the generated output
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
