/*
[INPUT]:  CLI arguments, YAML configuration file, TASKFLOW_TOKEN
[OUTPUT]: One task operation against the backend, rendered to the terminal
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or command set
*/

mod cli;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskflow_client::ClientSettings;

use crate::cli::Command;

#[derive(Parser, Debug)]
#[command(name = "taskflow", version, about = "Organize your tasks from the terminal")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: PathBuf,
    /// Session token; overrides the one in the config file
    #[arg(long = "token", env = "TASKFLOW_TOKEN", hide_env_values = true)]
    token: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    info!(config_path = %args.config_path.display(), "starting taskflow");

    let mut settings = load_config(&args.config_path)?;
    if let Some(token) = args.token {
        settings.token = Some(token);
    }
    info!(table = %settings.table, page_size = settings.page_size, "configuration loaded");

    cli::run(settings, args.command).await
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &PathBuf) -> Result<ClientSettings> {
    let path_str = path
        .to_str()
        .context("config path must be valid utf-8")?;
    ClientSettings::from_file(path_str).context("load config")
}
