mod config;

use std::sync::Arc;

use tracing::info;

use chirp_api::{AppStateInner, router};
use chirp_db::Database;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "chirp=debug,chirp_api=debug,chirp_core=debug,chirp_db=info,tower_http=debug"
                    .into()
            }),
        )
        .init();

    let config = Config::from_env()?;

    let db = Database::open(&config.db_path)?;
    let app = router(Arc::new(AppStateInner::new(Arc::new(db))));

    let addr = config.addr()?;
    info!("chirp listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
