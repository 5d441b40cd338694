//! Content module - remote clients, raw records and the normalizer

pub mod ghost;
mod model;
pub mod normalize;
pub mod strapi;

pub use ghost::{BlogBackend, GhostClient, RawPost};
pub use model::{ArticleDetail, ArticleSummary, DateStamp, HomePageModel, MediaAsset, WorkHistoryEntry};
pub use normalize::{resolve_asset_url, Normalizer};
pub use strapi::{PageBackend, RawPageRecord, StrapiClient};
