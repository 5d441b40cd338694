//! Subscription relay
//!
//! Stateless pass-through from the site's newsletter form to the blog
//! backend's member-signup endpoint. Input is validated before any network
//! call, the admin credential is signed per request, and the caller always
//! gets a result: success, a validation error, or a generic relay failure.
//! Backend error detail stays in the logs.

pub mod token;

use async_trait::async_trait;
use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::json;

use crate::error::Error;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Outbound leg of the relay; a trait so validation short-circuits are
/// observable in tests
#[async_trait]
pub trait SignupTransport: Send + Sync {
    /// Forward one member-creation POST with the signed token
    async fn post_member(&self, token: &str, email: &str) -> Result<(), Error>;
}

/// `reqwest`-backed transport hitting the Ghost admin members endpoint
pub struct GhostSignupTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl GhostSignupTransport {
    pub fn new(ghost_origin: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!(
                "{}/ghost/api/admin/members",
                ghost_origin.trim_end_matches('/')
            ),
        }
    }
}

#[async_trait]
impl SignupTransport for GhostSignupTransport {
    async fn post_member(&self, token: &str, email: &str) -> Result<(), Error> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Ghost {}", token))
            .json(&json!({ "members": [{ "email": email }] }))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Error::from_response(resp).await);
        }
        Ok(())
    }
}

/// Forwards subscriptions, signing a short-lived credential per request
pub struct SubscriptionRelay<T> {
    key_id: String,
    secret: Vec<u8>,
    transport: T,
}

impl<T: SignupTransport> SubscriptionRelay<T> {
    /// Create a relay from the admin key's id and hex-decoded secret
    pub fn new(key_id: String, secret: Vec<u8>, transport: T) -> Self {
        Self {
            key_id,
            secret,
            transport,
        }
    }

    /// Validate and forward one subscription
    ///
    /// Validation failures never reach the network. Forwarding failures are
    /// logged with their backend detail and surfaced as the generic `Relay`
    /// error so backend internals never leak to the caller.
    pub async fn submit_subscription(&self, email: &str) -> Result<(), Error> {
        validate_email(email)?;

        let token = token::sign_admin_token(&self.key_id, &self.secret, Utc::now().timestamp());
        match self.transport.post_member(&token, email).await {
            Ok(()) => {
                tracing::info!("subscription forwarded");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "subscription forwarding failed");
                Err(Error::Relay)
            }
        }
    }
}

/// Reject empty or implausible email addresses
fn validate_email(email: &str) -> Result<(), Error> {
    if email.is_empty() {
        return Err(Error::Validation("email is required".to_string()));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(Error::Validation("email is not plausible".to_string()));
    }
    Ok(())
}
