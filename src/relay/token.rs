//! Short-lived signed tokens for the admin member-signup call
//!
//! Ghost admin authentication is a compact HS256 JWT: the admin key's id in
//! the header `kid`, the hex-decoded secret as HMAC key, and a 5-minute
//! validity window scoped to the `/admin/` audience.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use ring::hmac;
use serde_json::json;

/// Validity window in seconds
pub const TOKEN_TTL_SECS: i64 = 300;

/// Audience the token is scoped to
pub const ADMIN_AUDIENCE: &str = "/admin/";

/// Sign an admin token issued at the given unix timestamp
pub fn sign_admin_token(key_id: &str, secret: &[u8], issued_at: i64) -> String {
    let header = json!({
        "alg": "HS256",
        "typ": "JWT",
        "kid": key_id,
    });
    let claims = json!({
        "iat": issued_at,
        "exp": issued_at + TOKEN_TTL_SECS,
        "aud": ADMIN_AUDIENCE,
    });

    let signing_input = format!("{}.{}", encode_segment(&header), encode_segment(&claims));
    let key = hmac::Key::new(hmac::HMAC_SHA256, secret);
    let signature = hmac::sign(&key, signing_input.as_bytes());

    format!(
        "{}.{}",
        signing_input,
        URL_SAFE_NO_PAD.encode(signature.as_ref())
    )
}

fn encode_segment(value: &serde_json::Value) -> String {
    URL_SAFE_NO_PAD.encode(value.to_string())
}
