//! CLI entry point for ghost-md

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ghost-md")]
#[command(version)]
#[command(about = "Export Ghost posts as Markdown with YAML front-matter", long_about = None)]
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
    /// Fetch all posts and write them as Markdown files
    #[command(alias = "e")]
    Export {
        /// Output directory, relative to the base directory
        #[arg(short, long)]
        output: Option<String>,

        /// Maximum number of files written at once
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Base URL prepended to relative Open Graph images
        #[arg(long)]
        site_url: Option<String>,

        /// Value for the i18nlanguage front-matter key
        #[arg(short, long)]
        language: Option<String>,
    },

    /// List the posts the Content API returns
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Credentials usually live in a local .env outside of CI
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = if cli.debug {
        "ghost_md=debug,info"
    } else {
        "ghost_md=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Export {
            output,
            jobs,
            site_url,
            language,
        } => {
            let mut config = ghost_md::GhostMd::load_config(&base_dir)?;
            if let Some(output) = output {
                config.output_dir = output;
            }
            if jobs.is_some() {
                config.jobs = jobs;
            }
            if site_url.is_some() {
                config.site_url = site_url;
            }
            if let Some(language) = language {
                config.language = language;
            }

            let ghost = ghost_md::GhostMd::with_config(&base_dir, config);
            tracing::info!("Exporting posts to {:?}", ghost.output_dir);
            ghost.export().await?;
        }

        Commands::List => {
            let ghost = ghost_md::GhostMd::new(&base_dir)?;
            ghost.list().await?;
        }

        Commands::Version => {
            println!("ghost-md version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
