//! MapColor HTTP server.
//!
//! Run with: cargo run -p mapcolor-server -- --port 8001
//! Then: curl -H 'content-type: application/json' -d @map.json localhost:8001/solve/backtracking

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use mapcolor::{console, ConfigError, SolverConfig};
use mapcolor_server::{app, AppState};
use owo_colors::OwoColorize;
use tracing::info;

#[derive(Parser)]
#[command(name = "mapcolor-server")]
#[command(version)]
#[command(about = "Graph coloring solver over HTTP")]
struct Cli {
    /// Address to bind
    #[arg(long, env = "MAPCOLOR_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "MAPCOLOR_PORT", default_value_t = 8001)]
    port: u16,

    /// Solver configuration (TOML, or YAML by extension)
    #[arg(long, default_value = mapcolor::CONFIG_FILE)]
    config: PathBuf,
}

fn load_config(path: &Path) -> Result<SolverConfig, ConfigError> {
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "yaml" || ext == "yml");
    let loaded = if is_yaml {
        SolverConfig::from_yaml_file(path)
    } else {
        SolverConfig::load(path)
    };

    match loaded {
        // A missing file means defaults.
        Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            Ok(SolverConfig::default())
        }
        other => other,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    console::init();

    let config = load_config(&cli.config)?;
    info!(
        event = "config_loaded",
        path = %cli.config.display(),
        strategy = %config.default_strategy,
        region_order = %config.region_order,
    );

    let state = Arc::new(AppState::new(config));
    let app = app(state);

    let addr = SocketAddr::new(cli.host, cli.port);
    println!(
        "{} Server listening on {}",
        "▸".bright_green(),
        format!("http://{}", addr).bright_cyan().underline()
    );
    println!(
        "{} Try {}\n",
        "▸".bright_green(),
        format!("http://localhost:{}/health", cli.port)
            .bright_cyan()
            .underline()
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
