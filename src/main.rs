//! CLI entry point for portico-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "portico-rs")]
#[command(version = "0.1.0")]
#[command(about = "Static site generation core for a headless-CMS portfolio", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a generation pass and freeze page bundles
    #[command(alias = "g")]
    Generate,

    /// Serve the generated bundles and the subscription endpoint
    #[command(alias = "s")]
    Server {
        /// Port to listen on (overrides _config.yml)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (overrides _config.yml)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Remove the generated output
    Clean,

    /// List remote content (route, post)
    List {
        /// Type of content to list
        #[arg(default_value = "route")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "portico_rs=debug,info"
    } else {
        "portico_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Generate => {
            let portico = portico_rs::Portico::new(&base_dir)?;
            tracing::info!("Running generation pass...");
            portico.generate().await?;
            println!("Generated successfully!");
        }

        Commands::Server { port, ip } => {
            let portico = portico_rs::Portico::new(&base_dir)?;

            // Generate first so the server has bundles to hand out
            tracing::info!("Running generation pass...");
            portico.generate().await?;

            let ip = ip.unwrap_or_else(|| portico.config.server.ip.clone());
            let port = port.unwrap_or(portico.config.server.port);
            tracing::info!("Starting server at http://{}:{}", ip, port);
            portico_rs::server::start(&portico, &ip, port).await?;
        }

        Commands::Clean => {
            let portico = portico_rs::Portico::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            portico.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let portico = portico_rs::Portico::new(&base_dir)?;
            portico_rs::commands::list::run(&portico, &r#type).await?;
        }

        Commands::Version => {
            println!("portico-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
