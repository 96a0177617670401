use std::net::SocketAddr;
use std::sync::Arc;

use polls::{
    config::{get_config, init_config},
    database::{
        memory::MemoryStore,
        pool::{create_pool, run_migrations},
        postgres::PgStore,
    },
    routes,
    utils::time::{Clock, SystemClock},
    AppState,
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("polls=info,tower_http=info")),
        )
        .init();
    init_config()?;
    let config = get_config()?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let app_state = match &config.database_url {
        Some(database_url) => {
            let pool = create_pool(database_url, config.database_max_connections).await?;
            run_migrations(&pool).await?;
            info!("Connected to database, migrations applied");
            AppState::new(Arc::new(PgStore::new(pool)), clock)
        }
        None => {
            warn!("DATABASE_URL not set, questions are kept in memory only");
            AppState::new(Arc::new(MemoryStore::new()), clock)
        }
    }
    .with_config(config);

    let app = routes::router(app_state);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
