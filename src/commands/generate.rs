//! Generate frozen page bundles

use anyhow::Result;

use crate::content::{GhostClient, StrapiClient};
use crate::generator::Generator;
use crate::Portico;

/// Run one full generation pass against the live backends
pub async fn run(portico: &Portico) -> Result<()> {
    let blog = GhostClient::new(
        &portico.config.ghost_origin,
        &portico.secrets.ghost_content_key,
    );
    let page = StrapiClient::new(&portico.secrets.strapi_origin);

    // Relative media paths resolve against the structured-content origin
    let generator = Generator::new(
        &portico.config,
        &portico.secrets.strapi_origin,
        &blog,
        &page,
    );

    let report = generator.generate(&portico.public_dir).await?;
    tracing::info!(
        "Generated {} article pages and {} listing entries into {:?}",
        report.article_pages,
        report.listing_articles,
        portico.public_dir
    );

    Ok(())
}
