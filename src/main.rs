//! CLI entry point for blog-content

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_content::commands;

#[derive(Parser)]
#[command(name = "blog-content")]
#[command(version)]
#[command(about = "Validate and query the content collections of a markdown blog", long_about = None)]
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
    /// Validate all content and report dangling category references
    Check,

    /// List site content
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, draft, category, tag)
        #[arg(default_value = "post")]
        r#type: String,

        /// Show one page of posts (page size from `per_page`)
        #[arg(short, long)]
        page: Option<usize>,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Category id of the new post
        #[arg(short = 'C', long)]
        category: String,

        /// Tag to attach (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Mark the post as a draft
        #[arg(long)]
        draft: bool,

        /// Write an .mdx file instead of .md
        #[arg(long)]
        mdx: bool,

        /// File name (without extension) for the new post
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Print the published, category and tag views as JSON
    Dump {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_content=debug,info"
    } else {
        "blog_content=info"
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
        Commands::Check => {
            let blog = blog_content::Blog::new(&base_dir)?;
            let store = blog.fetch().await?;
            commands::check::run(&store)?;
        }

        Commands::List { r#type, page } => {
            let blog = blog_content::Blog::new(&base_dir)?;
            let store = blog.fetch().await?;
            commands::list::run(&blog, &store, &r#type, page)?;
        }

        Commands::New {
            title,
            category,
            tags,
            draft,
            mdx,
            path,
        } => {
            let blog = blog_content::Blog::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            let file = commands::new::create_post(
                &blog,
                &commands::new::NewPost {
                    title: &title,
                    category: &category,
                    tags: &tags,
                    draft,
                    mdx,
                    path: path.as_deref(),
                },
            )?;
            println!("Created: {}", file.display());
        }

        Commands::Dump { output } => {
            let blog = blog_content::Blog::new(&base_dir)?;
            let store = blog.fetch().await?;
            commands::dump::run(&blog.config, &store, output.as_deref())?;
        }

        Commands::Version => {
            println!("blog-content version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
