// crates/edge/src/cli.rs

use crate::error::EdgeError;
use crate::router::{build_router, AppState};
use crate::store::{ContentStore, DirStore};
use chrono::Utc;
use clap::{builder::ValueHint, Parser, Subcommand};
use domain::config::Settings;
use serve::template::ShellEngine;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

pub type Result<T> = std::result::Result<T, EdgeError>;

/// Lumon CLI — Edge Layer
#[tokio::main(flavor = "multi_thread")]
#[tracing::instrument(skip_all)]
pub async fn start() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Start(start) => do_start(start).await,
    };

    result.map_or_else(
        |e| {
            error!("Failed to start Lumon Edge: {}", e);
            ExitCode::FAILURE
        },
        |_| {
            info!("Lumon Edge stopped");
            ExitCode::SUCCESS
        },
    )
}

#[tracing::instrument(skip_all)]
async fn do_start(start: StartCmd) -> Result<()> {
    // parse settings file -> file values first, LUMON__* env overrides second
    let then = Utc::now();
    let settings = load_settings(&start)?;
    info!(
        "Settings parsed in {} milliseconds",
        Utc::now().timestamp_millis() - then.timestamp_millis()
    );

    // load content -> read every document under the content directory
    let then = Utc::now();
    let store = DirStore::load(&settings.store.content_dir)?;
    info!(
        "Content loaded in {} milliseconds",
        Utc::now().timestamp_millis() - then.timestamp_millis()
    );

    // build router and serve
    let state = AppState {
        store: Arc::new(store) as Arc<dyn ContentStore>,
        settings: Arc::new(settings),
        shell: Arc::new(ShellEngine::new()?),
    };
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(start.addr).await?;
    info!("Listening on http://{}", start.addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn load_settings(start: &StartCmd) -> Result<Settings> {
    let cfg = config::Config::builder()
        .add_source(config::File::from(start.settings.as_path()))
        .add_source(config::Environment::with_prefix("LUMON").separator("__"))
        .build()?;
    Ok(cfg.try_deserialize()?)
}

async fn shutdown_signal() {
    // Shutdown on ctrl-c; a failed signal hook means we only stop on kill.
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to install ctrl-c handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[derive(Parser, Debug)]
#[command(name = "lumon", version, about = "Lumon site server command-line tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the Lumon site server using the specified settings file
    Start(StartCmd),
}

#[derive(Parser, Debug)]
pub struct StartCmd {
    /// Settings file (or set LUMON_SETTINGS)
    ///
    /// Must exist and be a readable TOML file.
    #[arg(
        value_name = "SETTINGS",
        env = "LUMON_SETTINGS",
        required = true,
        value_hint = ValueHint::FilePath,
        value_parser = file_must_exist
    )]
    pub settings: PathBuf,

    /// Bind address for the HTTP listener
    #[arg(long, env = "LUMON_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,
}

fn file_must_exist(s: &str) -> std::result::Result<PathBuf, String> {
    let p = PathBuf::from(s);
    if !p.exists() {
        return Err(format!("Not found: {}", p.display()));
    }
    if !p.is_file() {
        return Err(format!("Not a file: {}", p.display()));
    }
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn settings_file_feeds_the_store_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            "[site]\nbase_url = \"https://example.com\"\ntitle = \"Lumon\"\n\n\
             [store]\nproject_id = \"abc123\"\ncontent_dir = \"{}\"",
            dir.path().display()
        )
        .unwrap();

        let start = StartCmd {
            settings: path,
            addr: "127.0.0.1:0".parse().unwrap(),
        };
        let settings = load_settings(&start).unwrap();
        assert_eq!(settings.site.base_url, "https://example.com");
        assert_eq!(settings.store.project_id, "abc123");
        assert_eq!(settings.store.dataset, "production");
    }
}
