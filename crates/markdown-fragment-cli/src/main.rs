//! markdown-fragment: converts Markdown into HTML fragments for a static site.
//!
//! Usage:
//!  markdown-fragment render [FILE] [-o OUT]   - Convert one file (stdin when omitted or `-`)
//!  markdown-fragment blog [DIR] [-o OUT]      - Build the post list and one page per post
//!  markdown-fragment init [--posts DIR] [--output OUT] [--force]  - Write a config file

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use markdown_fragment_config::Config;
use markdown_fragment_engine::{
    Options,
    blog::{INDEX_PAGE, render_error, render_post, render_post_list},
    convert_with, io,
};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "markdown-fragment",
    version,
    about = "Convert Markdown into HTML fragments"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a config.toml (default: ~/.config/markdown-fragment/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(flatten)]
    features: FeatureFlags,
}

#[derive(Args)]
struct FeatureFlags {
    /// Treat pipe tables as plain paragraphs
    #[arg(long, global = true)]
    no_tables: bool,

    /// Escape HTML blocks instead of passing them through
    #[arg(long, global = true)]
    no_raw_html: bool,

    /// Leave `![alt](src)` as text followed by a link
    #[arg(long, global = true)]
    no_images: bool,
}

impl FeatureFlags {
    /// Switches off whatever the flags name; never switches anything on.
    fn apply(&self, mut options: Options) -> Options {
        options.tables &= !self.no_tables;
        options.raw_html &= !self.no_raw_html;
        options.images &= !self.no_images;
        options
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single Markdown document
    Render {
        /// Input file (default: stdin)
        file: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build blog pages from a directory with a posts.json manifest
    Blog {
        /// Posts directory (default: posts_path from the config file)
        dir: Option<PathBuf>,

        /// Output directory (default: output_path from the config file, then DIR/_site)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a config file with the given paths and feature flags
    Init {
        /// Posts directory to record as posts_path
        #[arg(long)]
        posts: Option<PathBuf>,

        /// Output directory to record as output_path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { file, output } => {
            let config = load_config(cli.config.as_deref())?;
            let options = cli.features.apply(config.features);
            render(file.as_deref(), output.as_deref(), options)
        }
        Commands::Blog { dir, output } => {
            let config = load_config(cli.config.as_deref())?;
            let options = cli.features.apply(config.features);
            blog(dir, output, &config, options)
        }
        Commands::Init {
            posts,
            output,
            force,
        } => {
            let config = Config {
                posts_path: posts,
                output_path: output,
                features: cli.features.apply(Options::ALL),
            };
            init(&config, cli.config.as_deref(), force)
        }
    }
}

/// Loads `--config PATH` if given, otherwise the default config file.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("Failed to load config file '{}'", path.display()))?,
        None => Config::load().with_context(|| {
            format!(
                "Failed to load config file '{}'",
                Config::config_path().display()
            )
        })?,
    };

    Ok(config.unwrap_or_default())
}

fn init(config: &Config, path: Option<&Path>, force: bool) -> Result<()> {
    let target = path.map_or_else(Config::config_path, Path::to_path_buf);
    if target.exists() && !force {
        bail!(
            "Config file '{}' already exists (use --force to replace it)",
            target.display()
        );
    }

    match path {
        Some(path) => config.save_to_path(path)?,
        None => config.save()?,
    }
    info!("Wrote config to {}", target.display());
    Ok(())
}

fn render(file: Option<&Path>, output: Option<&Path>, options: Options) -> Result<()> {
    let source = match file {
        Some(path) if path != Path::new("-") => io::read_source(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let html = convert_with(&source, options);

    match output {
        Some(path) => {
            io::write_fragment(path, &html)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{html}")?;
        }
    }
    Ok(())
}

fn blog(
    dir: Option<PathBuf>,
    output: Option<PathBuf>,
    config: &Config,
    options: Options,
) -> Result<()> {
    let posts_dir = dir.or_else(|| config.posts_path.clone()).with_context(|| {
        format!(
            "No posts directory given and no posts_path in config file '{}'",
            Config::config_path().display()
        )
    })?;
    let out_dir = output
        .or_else(|| config.output_path.clone())
        .unwrap_or_else(|| posts_dir.join("_site"));

    let index = io::load_post_index(&posts_dir)
        .with_context(|| format!("Failed to load posts from '{}'", posts_dir.display()))?;
    if let Some(post) = index.page_collision() {
        bail!(
            "Post '{}' (file '{}') would overwrite {} or another post's page in '{}'",
            post.title,
            post.file,
            INDEX_PAGE,
            out_dir.display()
        );
    }
    if index.is_empty() {
        warn!("{} lists no posts", posts_dir.join(io::MANIFEST_FILE).display());
    }

    let index_path = out_dir.join(INDEX_PAGE);
    io::write_fragment(&index_path, &render_post_list(index.posts()))
        .with_context(|| format!("Failed to write '{}'", index_path.display()))?;

    for post in index.posts() {
        let page = match io::read_post(&posts_dir, post) {
            Ok(body) => render_post(post, &body, options),
            Err(e) => {
                warn!("Unable to load post '{}': {e}", post.title);
                render_error("Unable to load this post.")
            }
        };

        let page_path = out_dir.join(post.page_path());
        io::write_fragment(&page_path, &page)
            .with_context(|| format!("Failed to write '{}'", page_path.display()))?;
    }

    info!(
        "Wrote {} post page(s) and index to {}",
        index.posts().len(),
        out_dir.display()
    );
    Ok(())
}
