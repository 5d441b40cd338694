//! List remote content

use anyhow::Result;

use crate::content::{BlogBackend, GhostClient, Normalizer};
use crate::generator::routes;
use crate::Portico;

/// List remote content by type
pub async fn run(portico: &Portico, content_type: &str) -> Result<()> {
    let blog = GhostClient::new(
        &portico.config.ghost_origin,
        &portico.secrets.ghost_content_key,
    );

    match content_type {
        "route" | "routes" => {
            let slugs = routes::enumerate_article_routes(&blog).await?;
            println!("Article routes ({}):", slugs.len());
            for slug in slugs {
                println!("  /article/{}", slug);
            }
        }
        "post" | "posts" => {
            let normalizer = Normalizer::new(
                &portico.secrets.strapi_origin,
                &portico.config.date_format,
                portico.config.excerpt_words,
                portico.config.home_article_count,
            );
            let posts = blog.fetch_post_list().await?;
            println!("Posts ({}):", posts.len());
            for post in posts {
                let summary = normalizer.to_article_summary(&post)?;
                println!("  {} - {} [{}]", summary.display_date, summary.title, summary.slug);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: route, post", content_type);
        }
    }

    Ok(())
}
