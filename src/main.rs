use apk_api::{config::Config, db, router, AppState};
use sea_orm_migration::MigratorTrait;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,apk_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration (.env first, then environment)
    let config = Config::from_env().expect("Invalid configuration");

    // Connect to database
    let db = db::connect(&config.database_url, config.database_max_connections)
        .await
        .expect("Failed to connect to database");

    // Run migrations
    if config.run_migrations {
        tracing::info!("Running migrations...");
        migration::Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");
    }

    let app = router(AppState { db });

    // Start server
    let listener = tokio::net::TcpListener::bind((config.host, config.port))
        .await
        .expect("Failed to bind listener");

    tracing::info!("Server listening on {}", listener.local_addr().expect("Listener has no address"));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
