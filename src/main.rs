//! herosearch - Entry Point

use clap::Parser;
use herosearch::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    ResolvedConfig,
};
use herosearch::model::AppError;
use herosearch::view::ShellOptions;
use std::path::PathBuf;
use tracing::info;

/// herosearch - search hero for a media home page, in the terminal
#[derive(Parser, Debug)]
#[command(name = "herosearch")]
#[command(version)]
#[command(about = "Interactive search hero with debounced search, sticky bar and compact expand")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start with this search query
    #[arg(short, long)]
    pub query: Option<String>,

    /// External banner height in pixels
    #[arg(long, value_name = "PX")]
    pub banner: Option<u32>,

    /// Debounce delay in milliseconds
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Fixed viewport width in pixels (default: derived from terminal columns)
    #[arg(long, value_name = "PX", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Show the landing page as if bookmarks exist
    #[arg(long)]
    pub bookmarks: bool,

    /// Show the landing page as if watch history exists
    #[arg(long)]
    pub watching: bool,
}

/// Resolve configuration through the full precedence chain:
/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = load_config_with_precedence(args.config.clone())?;
    let merged = merge_config(config_file);
    let with_env = apply_env_overrides(merged);
    Ok(apply_cli_overrides(with_env, args.debounce_ms, args.banner))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = resolve_config(&args)?;

    herosearch::logging::init(&config.log_file_path).map_err(AppError::from)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    herosearch::view::run_with_options(ShellOptions {
        config,
        initial_query: args.query.unwrap_or_default(),
        fixed_width: args.width,
        has_bookmarks: args.bookmarks,
        has_watching: args.watching,
    })?;

    Ok(())
}
