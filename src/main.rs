use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = demitasse::Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        listen_addr = %cfg.listen_addr,
        static_dir = %cfg.static_dir.display(),
        loglevel = %cfg.loglevel,
    );

    if cfg.secret_is_default() {
        warn!("SECRET_KEY is not set; session cookies are protected by the public default secret");
    }

    let storage = demitasse::SiteStorage::connect(&cfg.database_url).await?;
    storage.init_schema().await?;
    storage.seed_defaults().await?;

    tokio::fs::create_dir_all(cfg.upload_dir()).await?;

    let state = demitasse::SiteState::new(storage, &cfg);
    let app = demitasse::site_router(state);

    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
