//! Environment-provided credentials
//!
//! All three values are required at startup. A missing variable is a fatal
//! condition, never a silent default, so a misconfigured deployment fails
//! before any page is generated.

use anyhow::{anyhow, bail, Context, Result};

/// Credentials and backend origins read from the environment
#[derive(Debug, Clone)]
pub struct Secrets {
    /// Origin of the Strapi-style structured-content backend (`STRAPI_API`)
    pub strapi_origin: String,
    /// Content API key for the blog backend (`GHOST_CONTENT_KEY`)
    pub ghost_content_key: String,
    /// Admin API key `id:hexsecret` for the member-signup call (`GHOST_ADMIN_KEY`)
    pub ghost_admin_key: String,
}

impl Secrets {
    /// Read all required values from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any lookup function (tests pass a map)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow!("required environment variable {} is not set", name))
        };

        let secrets = Self {
            strapi_origin: require("STRAPI_API")?.trim_end_matches('/').to_string(),
            ghost_content_key: require("GHOST_CONTENT_KEY")?,
            ghost_admin_key: require("GHOST_ADMIN_KEY")?,
        };
        secrets.admin_key_parts()?;
        Ok(secrets)
    }

    /// Split the admin key into its id and hex-decoded secret
    pub fn admin_key_parts(&self) -> Result<(String, Vec<u8>)> {
        let Some((id, secret)) = self.ghost_admin_key.split_once(':') else {
            bail!("GHOST_ADMIN_KEY must have the form id:secret");
        };
        let secret = hex::decode(secret).context("GHOST_ADMIN_KEY secret is not valid hex")?;
        Ok((id.to_string(), secret))
    }
}
