//! rollcall - Entry Point

use clap::Parser;
use rollcall::config::{self, ResolvedConfig};
use rollcall::model::AppError;
use rollcall::source::RosterSource;
use rollcall::state::PageSize;
use rollcall::view::{ColorConfig, TuiConfig};
use std::path::PathBuf;
use tracing::info;

/// rollcall - browse a roster, select records, and queue bulk messages
#[derive(Parser, Debug)]
#[command(name = "rollcall")]
#[command(version)]
#[command(about = "Terminal roster browser with search, paging, selection and bulk messaging")]
pub struct Args {
    /// Path to a roster file (.json array or .jsonl)
    pub roster: Option<PathBuf>,

    /// Use the built-in demo roster
    #[arg(long)]
    pub demo: bool,

    /// Rows per page (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Start with this search text applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Append composed messages to this JSONL file
    #[arg(long)]
    pub outbox: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = config::load_config_with_precedence(args.config.clone())?;
    let merged = config::merge_config(config_file);
    let with_env = config::apply_env_overrides(merged)?;

    let page_size = args
        .page_size
        .and_then(|rows| PageSize::new(rows as usize));
    Ok(config::apply_cli_overrides(
        with_env,
        page_size,
        args.roster.clone(),
        args.outbox.clone(),
    ))
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let resolved = resolve_config(&args)?;

    rollcall::logging::init(&resolved.log_file_path)?;

    info!(config = ?resolved, "Configuration loaded and resolved");

    let source = RosterSource::select(resolved.roster.clone(), args.demo)?;

    rollcall::view::run_with_config(TuiConfig {
        source,
        page_size: resolved.page_size,
        initial_search: args.search,
        templates: resolved.templates,
        outbox_path: resolved.outbox_path,
        color: ColorConfig::from_env_and_args(args.no_color),
    })?;

    Ok(())
}
