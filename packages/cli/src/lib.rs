use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bookshelf_api::create_router;
use bookshelf_storage::DbState;

pub mod config;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};

/// Install the global tracing subscriber. RUST_LOG takes precedence over the
/// config's debug flag.
pub fn init_tracing(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter())),
        )
        .init();
}

/// Serve the API on an already bound listener
pub async fn serve(listener: TcpListener, db: DbState) -> anyhow::Result<()> {
    let app = create_router(db);
    axum::serve(listener, app).await?;

    Ok(())
}

pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let db = DbState::init_with_path(&config.database_path)
        .await
        .with_context(|| {
            format!(
                "Failed to open database at {}",
                config.database_path.display()
            )
        })?;

    let count = db.book_storage.count_books().await?;
    info!(
        "Using database {} ({} books)",
        config.database_path.display(),
        count
    );

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on http://{}", addr);

    serve(listener, db).await
}
