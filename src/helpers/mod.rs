//! Helper functions for dates and URLs
//!
//! Small pure utilities shared by the normalizer and the remote clients.

pub mod date;
pub mod url;

pub use date::*;
pub use url::*;
