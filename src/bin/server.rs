use clap::Parser;
use ecoleta::{config, create_app, db, run_migrations, AppState};
use std::{net::SocketAddr, sync::Arc};
use tracing::{info, error};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Installs the global subscriber
///
/// Logs go to stdout and, when a log directory is configured, to a daily
/// rotated JSON file in it. The returned guard flushes the file writer and
/// must be held until shutdown.
fn init_logging(debug: bool, log_dir: Option<&str>) -> Option<WorkerGuard> {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "ecoleta.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}

async fn run(config: config::Config) -> anyhow::Result<()> {
    let pool = db::init_pool(&config.database_url)?;

    {
        let mut conn = pool.get()?;
        run_migrations(&mut conn)?;
    }
    info!("Database ready at {}", config.database_url);

    let state = AppState {
        pool: Arc::new(pool),
        settings: Arc::new(config.settings()),
    };
    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let args = config::CliArgs::parse();
    let config = config::get_config(&args);

    let _guard = init_logging(args.debug, config.log_dir.as_deref());
    info!(
        "Starting ecoleta: database_url={}, port={}, public_url={}",
        config.database_url, config.port, config.public_url
    );

    if let Err(e) = run(config).await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}
