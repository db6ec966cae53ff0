//! Command line and environment configuration

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tui_dispatch_debug::DebugCliArgs;

use crate::api::API_BASE;
use crate::state::DEFAULT_LIST_LIMIT;

/// Environment variable overriding the catalog base URL
pub const BASE_URL_ENV: &str = "POKEDEX_API_URL";

/// Pokedex catalog browser
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse the PokeAPI catalog from the terminal")]
pub struct Args {
    /// Catalog API base URL (default: $POKEDEX_API_URL, then PokeAPI v2)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Number of entries to fetch (minimum 1)
    #[arg(long, default_value_t = DEFAULT_LIST_LIMIT, value_parser = parse_limit)]
    pub limit: usize,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive (e.g. "debug", "pokedex=trace")
    #[arg(long, default_value = "info", value_parser = parse_log_level)]
    pub log_level: String,

    #[command(flatten)]
    pub debug: DebugCliArgs,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub base_url: String,
    pub limit: usize,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl RuntimeConfig {
    pub fn resolve(args: &Args, env_base_url: Option<String>) -> Self {
        Self {
            base_url: resolve_base_url(args.base_url.clone(), env_base_url),
            limit: args.limit,
            log_file: args.log_file.clone(),
            log_level: args.log_level.clone(),
        }
    }
}

/// Flag beats environment beats default; blank values are ignored.
pub fn resolve_base_url(flag: Option<String>, env: Option<String>) -> String {
    flag.into_iter()
        .chain(env)
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .find(|url| !url.is_empty())
        .unwrap_or_else(|| API_BASE.to_string())
}

fn parse_limit(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(value) => Ok(value),
        Err(err) => Err(err.to_string()),
    }
}

fn parse_log_level(raw: &str) -> Result<String, String> {
    EnvFilter::try_new(raw)
        .map(|_| raw.to_string())
        .map_err(|err| format!("invalid log filter '{raw}': {err}"))
}
