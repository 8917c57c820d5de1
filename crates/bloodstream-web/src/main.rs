use std::path::PathBuf;

use anyhow::Result;
use bloodstream_web::config::PortalConfig;
use bloodstream_web::logging::init_logging;
use bloodstream_web::start_server;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bloodstream", version, about = "BloodStream patient registration portal")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, env = "BLOODSTREAM_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind (overrides [server].host)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides [server].port)
    #[arg(short, long)]
    port: Option<u16>,

    /// SQLite database path, or ":memory:" (overrides [database].path)
    #[arg(long)]
    database: Option<String>,

    /// Only accept the eight ABO/Rh blood groups
    #[arg(long)]
    strict_blood_group: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PortalConfig::load(path)?,
        None => PortalConfig::default(),
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(database) = cli.database {
        config.database.path = database;
    }
    if cli.strict_blood_group {
        config.intake.enforce_blood_group_set = true;
    }
    config.validate()?;

    init_logging(&config.logging);
    start_server(config).await
}
