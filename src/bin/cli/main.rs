mod client;
mod commands;
mod output;

use clap::{Parser, Subcommand};
use client::{ClientError, EcoletaClient};
use ecoleta::config;
use output::{OutputConfig, OutputFormat};
use std::error::Error;
use std::process;

/// Command-line client for an Ecoleta server
///
/// Lists the recyclable item categories and registers, shows or searches
/// collection points over the HTTP API.
#[derive(Parser, Debug)]
#[clap(name = "ecoleta-cli", about = "Register and find recycling collection points")]
struct Cli {
    /// Base URL of the Ecoleta server, e.g. http://localhost:3333
    #[clap(long, env = "ECOLETA_URL", global = true)]
    server_url: Option<String>,

    /// Print human-readable tables or raw JSON
    #[clap(long, value_enum, default_value_t = OutputFormat::Human, global = true)]
    format: OutputFormat,

    /// Print only point or item ids
    #[clap(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recyclable item categories a point can collect
    #[command(subcommand)]
    Item(commands::item::ItemCommands),
    /// Collection points
    #[command(subcommand)]
    Point(commands::point::PointCommands),
}

/// Picks the server to talk to: `--server-url`/`ECOLETA_URL`, then
/// `server_url` from the config file, then the local server on the default port
fn resolve_server_url(cli_url: Option<String>) -> String {
    cli_url
        .or_else(|| {
            let dir = config::get_config_dir_path()?;
            config::config_from_file(Some(dir.join("config.toml")))
                .ok()?
                .server_url
        })
        .unwrap_or_else(|| format!("http://localhost:{}", config::DEFAULT_PORT))
}

/// Turns a command failure into the line printed after `Error:`
///
/// Connection failures get a hint that the server is probably not running.
fn describe_error(err: &(dyn Error + 'static)) -> String {
    match err.downcast_ref::<ClientError>() {
        Some(ClientError::Request(source)) if source.is_connect() || source.is_timeout() => {
            format!("Could not connect to server. Is ecoleta running?\n  {}", err)
        }
        _ => err.to_string(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let client = EcoletaClient::new(resolve_server_url(cli.server_url));
    let output_config = OutputConfig {
        format: cli.format,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        Commands::Item(cmd) => commands::item::execute(&client, cmd, &output_config).await,
        Commands::Point(cmd) => commands::point::execute(&client, cmd, &output_config).await,
    };

    if let Err(err) = result {
        eprintln!("Error: {}", describe_error(err.as_ref()));
        process::exit(1);
    }
}
