//! CLI entry point for blogroll

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blogroll::Blog;

#[derive(Parser)]
#[command(name = "blogroll")]
#[command(version)]
#[command(about = "A small static blog generator", long_about = None)]
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
    /// Generate the site into the public directory
    #[command(alias = "b")]
    Build,

    /// Build, serve and rebuild on changes
    #[command(alias = "d")]
    Develop {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Serve only, without watching for changes
        #[arg(long)]
        no_watch: bool,
    },

    /// Remove the public directory
    Clean,

    /// List posts in front page order
    List,

    /// Create a new post
    New {
        /// Title of the new post
        title: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "blogroll=debug,info"
    } else {
        "blogroll=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };
    let blog = Blog::new(&base_dir)?;

    match cli.command {
        Commands::Build => {
            tracing::info!("Building site in {:?}", blog.public_dir);
            blog.build()?;
        }

        Commands::Develop { port, ip, no_watch } => {
            blog.build()?;
            blogroll::server::start(&blog, &ip, port, !no_watch).await?;
        }

        Commands::Clean => {
            blog.clean()?;
        }

        Commands::List => {
            blogroll::commands::list::run(&blog)?;
        }

        Commands::New { title } => {
            let path = blog.new_post(&title)?;
            println!("Created: {}", path.display());
        }
    }

    Ok(())
}
