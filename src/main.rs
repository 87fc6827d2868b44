use campus_api::api::{self, AppState, auth::SessionRegistry};
use campus_api::config::{AppConfig, StorageBackend};
use campus_api::storage::SqliteStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("🚀 Starting Campus API Server");
    info!("📋 Configuration loaded");
    info!("   - Storage: {}", config.storage.backend);
    info!("   - Server: {}:{}", config.server.host, config.server.port);

    let sessions = SessionRegistry::from_config(&config.auth);
    if sessions.is_empty() {
        info!("⚠️  No users configured; every /api endpoint will answer 403");
    } else {
        info!("🔑 {} user session(s) registered", sessions.len());
    }

    // Initialize storage
    let (state, database) = match config.storage.backend {
        StorageBackend::Memory => {
            info!("💾 Using in-memory stores (data is lost on shutdown)");
            (AppState::in_memory(sessions), None)
        }
        StorageBackend::Sqlite => {
            info!("💾 Opening {}", config.storage.database_url);
            let store =
                SqliteStore::connect(&config.storage.database_url, config.storage.max_connections)
                    .await?;
            store.migrate().await?;
            (AppState::with_sqlite(store.clone(), sessions), Some(store))
        }
    };
    info!("✅ Storage ready");

    let app = api::router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints (prefix /api/ucsbdiningcommonsmenuitem, /api/menuitemreview, /api/helprequest):");
    info!("   GET    /health          - Health check");
    info!("   GET    {{prefix}}/all     - List all records (USER)");
    info!("   POST   {{prefix}}/post    - Create a record (ADMIN)");
    info!("   GET    {{prefix}}         - Get one record (USER)");
    info!("   PUT    {{prefix}}         - Update a record (ADMIN)");
    info!("   DELETE {{prefix}}         - Delete a record (ADMIN)");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Flush and release database connections once in-flight requests are done
    if let Some(database) = database {
        info!("💾 Closing database connections...");
        database.close().await;
    }

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
