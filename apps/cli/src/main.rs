use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use gettext_sheets_core::{find_catalog_files, pull, push, GoogleSheets, SyncConfig};
use log::{debug, info, LevelFilter};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

const CONFIG_FILE: &str = "config.json";
const TOKEN_FILE: &str = "token.json";
const TOKEN_ENV: &str = "GOOGLE_SHEETS_TOKEN";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Action {
    /// Send catalog entries to the spreadsheet
    Push,
    /// Update catalogs from spreadsheet rows
    Pull,
}

/// Synchronize gettext catalogs with a Google spreadsheet.
#[derive(Debug, Parser)]
#[command(name = "gettext-sheets", version)]
struct Cli {
    /// Direction of the sync
    #[arg(value_enum)]
    action: Action,

    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to a token file holding {"access_token": "..."}
    #[arg(long)]
    token: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Deserialize)]
struct Token {
    access_token: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config_path = resolve_config_path(cli.config)?;
    info!("Using configuration from {}", config_path.display());
    let config = SyncConfig::from_json_file(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    let token = resolve_token(cli.token)?;
    let service = GoogleSheets::new(config.spreadsheet_id.clone(), token);

    let files = find_catalog_files(&config.path)
        .with_context(|| format!("failed to scan {}", config.path.display()))?;
    debug!("Found {} catalog files", files.len());
    if files.is_empty() {
        info!("No catalog files found under {}", config.path.display());
        return Ok(());
    }

    match cli.action {
        Action::Push => push(&service, &config, &files)?,
        Action::Pull => pull(&service, &config, &files)?,
    }
    Ok(())
}

/// The configuration file: the `--config` argument if given, otherwise
/// `config.json` in the working directory, otherwise the per-user
/// config directory.
fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    let local = PathBuf::from(CONFIG_FILE);
    if local.is_file() {
        return Ok(local);
    }

    if let Some(base) = dirs::config_dir() {
        let fallback = base.join("gettext-sheets").join(CONFIG_FILE);
        if fallback.is_file() {
            return Ok(fallback);
        }
    }

    bail!("no configuration file found; pass --config or create {CONFIG_FILE}");
}

/// The API access token: a `--token` file if given, the token
/// environment variable, or `token.json` in the working directory.
fn resolve_token(explicit: Option<PathBuf>) -> Result<String> {
    if let Some(path) = explicit {
        return read_token_file(&path);
    }

    if let Ok(token) = env::var(TOKEN_ENV) {
        if !token.is_empty() {
            debug!("Using access token from {TOKEN_ENV}");
            return Ok(token);
        }
    }

    let local = PathBuf::from(TOKEN_FILE);
    if local.is_file() {
        return read_token_file(&local);
    }

    bail!("no access token found; pass --token, set {TOKEN_ENV} or create {TOKEN_FILE}");
}

fn read_token_file(path: &std::path::Path) -> Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let token: Token = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid token file", path.display()))?;
    Ok(token.access_token)
}
