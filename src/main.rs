//! CLI entry point for devlog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devlog::{commands, server, Devlog};

#[derive(Parser)]
#[command(name = "devlog")]
#[command(version)]
#[command(about = "A minimal static site generator for a developer log", long_about = None)]
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
    /// Build the static site
    #[command(alias = "b")]
    Build,

    /// Build, then serve the output directory
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Rebuild when posts or the config change
        #[arg(short, long)]
        watch: bool,
    },

    /// Build, then publish to GitHub Pages
    Deploy,

    /// Create the posts directory and a default config
    Init,

    /// Create a new numbered post
    New {
        /// Title of the new post
        title: String,

        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,

        /// Mark the post as a draft
        #[arg(long)]
        draft: bool,
    },

    /// List site information
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Delete the output directory
    Clean,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "devlog=debug,info"
    } else {
        "devlog=info"
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
    let devlog = Devlog::new(&base_dir);

    match cli.command {
        Commands::Build => {
            tracing::info!("Building into {:?}", devlog.paths.output_dir);
            devlog.build()?;
        }

        Commands::Serve { port, ip, watch } => {
            devlog.build()?;
            server::start(&devlog, &ip, port, watch).await?;
        }

        Commands::Deploy => {
            commands::deploy::run(&devlog)?;
        }

        Commands::Init => {
            tracing::info!("Initializing devlog in {:?}", base_dir);
            let created = commands::init::init_site(&devlog)?;
            if created.is_empty() {
                println!("Nothing to do: source directory and config already exist");
            }
            for path in created {
                println!("Created: {:?}", path);
            }
        }

        Commands::New { title, tags, draft } => {
            let tags = commands::new::parse_tags(tags.as_deref());
            let path = commands::new::create_post(&devlog, &title, &tags, draft)?;
            println!("Created: {:?}", path);
        }

        Commands::List { r#type } => {
            commands::list::run(&devlog, &r#type)?;
        }

        Commands::Clean => {
            devlog.clean()?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
