use std::{env::current_dir, io::Write, process::exit};

use clap::{Parser, Subcommand};
use color_eyre::{
    Section,
    config::HookBuilder,
    eyre::{self, eyre},
};
use liftlog::{config::Config, render, seed, serve};
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(about = "Serve your training log", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit machine-readable JSON output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default Liftlog.toml into the current directory.
    Init,

    /// Print the display blocks and reading time for a seeded article.
    Render { slug: String },

    /// Seed the catalog and serve the REST API.
    Serve {
        /// Host address to bind (default from Liftlog.toml)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on; when absent, probes upward from the
        /// configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    HookBuilder::default()
        .display_env_section(true)
        .install()
        .expect("Failed to install color-eyre hook");

    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false);
    let filter_layer = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();

    if let Err(err) = entry(cli).await {
        error!("{:#}", err);
        exit(1);
    }
}

async fn entry(cli: Cli) -> eyre::Result<()> {
    match cli.command {
        Commands::Init => {
            let path = current_dir()?.join(liftlog::config::CONFIG_FILE);
            if path.exists() {
                return Err(eyre!("{} already exists", path.display()));
            }
            let mut file = std::fs::File::create(&path)?;
            file.write_all(Config::default().export().as_bytes())?;
            info!("Wrote {}", path.display());
            Ok(())
        }
        Commands::Render { slug } => {
            let catalog = seed::sample_catalog()?;
            let post = catalog
                .blog_post_by_slug(&slug)
                .ok_or_else(|| eyre!("no article with slug `{slug}`"))
                .note("Slugs are listed by `GET /api/blog-posts`")?;

            let blocks = render::blocks(&post.content);
            let minutes = render::reading_time(&post.content);
            if cli.json {
                let output = serde_json::json!({
                    "title": post.title,
                    "readingTimeMinutes": minutes,
                    "blocks": blocks,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{} ({minutes} min read)", post.title);
                for block in &blocks {
                    println!("{block:?}");
                }
            }
            Ok(())
        }
        Commands::Serve { host, port } => {
            let config = Config::load_or_default(current_dir()?)?;
            let host = host.unwrap_or_else(|| config.host().to_string());
            let (port, allow_fallback) = match port {
                Some(port) => (port, false),
                None => (config.port(), true),
            };

            let catalog = seed::sample_catalog().note("Seed data failed validation")?;
            info!(
                "{}: {} articles, {} exercises, {} equipment items",
                config.name(),
                catalog.blog_posts().len(),
                catalog.exercises().len(),
                catalog.equipment().len()
            );
            serve(catalog, &host, port, allow_fallback).await?;
            Ok(())
        }
    }
}
