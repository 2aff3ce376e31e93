//! CLI entry point for blogfeed

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blogfeed::commands::list::ListFormat;
use blogfeed::FeedOrder;

#[derive(Parser)]
#[command(name = "blogfeed")]
#[command(version)]
#[command(about = "Generate an RSS feed from Markdown blog posts", long_about = None)]
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
    /// Build the feed and write it to the output path
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,

        /// Item order, overriding the config file
        #[arg(long, value_enum)]
        order: Option<FeedOrder>,
    },

    /// Validate post metadata without writing the feed
    Check,

    /// List the posts that would appear in the feed
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Delete the generated feed
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogfeed=debug,info"
    } else {
        "blogfeed=info"
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
        Commands::Generate { watch, order } => {
            let site = blogfeed::Site::new(&base_dir)?;
            tracing::info!("Generating feed from {:?}", site.content_dir);

            blogfeed::commands::generate::run_with_options(&site, order)?;
            println!("Generated {}", site.output_path.display());

            if watch {
                blogfeed::commands::generate::watch(&site, order)?;
            }
        }

        Commands::Check => {
            let site = blogfeed::Site::new(&base_dir)?;
            blogfeed::commands::check::run(&site)?;
        }

        Commands::List { json } => {
            let site = blogfeed::Site::new(&base_dir)?;
            let format = if json { ListFormat::Json } else { ListFormat::Text };
            blogfeed::commands::list::run(&site, format)?;
        }

        Commands::Clean => {
            let site = blogfeed::Site::new(&base_dir)?;
            tracing::info!("Cleaning feed output...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("blogfeed version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
