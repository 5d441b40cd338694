//! Configuration module

mod secrets;
mod site;

pub use secrets::Secrets;
pub use site::ServerConfig;
pub use site::SiteConfig;
