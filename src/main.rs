use std::sync::Arc;

use notes_api::config::{Config, StorageKind};
use notes_api::handlers::rest;
use notes_api::service::NoteService;
use notes_api::store::{FileStore, MemoryStore, NoteStore, PostgresStore};

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Fetch env variables
    let config = Config::from_env().unwrap_or_else(|e| {
        tracing::error!("Invalid configuration: {e}");
        panic!("invalid configuration: {e}");
    });

    // Store creation, per the configured backend
    let store: Arc<dyn NoteStore> = match config.storage {
        StorageKind::Memory => Arc::new(MemoryStore::new()),
        StorageKind::File => {
            let store = FileStore::new(&config.data_dir).await.unwrap_or_else(|e| {
                tracing::error!("Failed to open data directory: {e}");
                panic!("failed to open data directory: {e}");
            });
            Arc::new(store)
        }
        StorageKind::Postgres => {
            let dsn = config
                .database_dsn
                .as_deref()
                .expect("postgres backend selected without a DSN");

            let mut store = PostgresStore::connect(dsn).await.unwrap_or_else(|e| {
                tracing::error!("Failed to establish database connection: {e}");
                panic!("failed to establish database connection: {e}");
            });

            store.migrate().await.unwrap_or_else(|e| {
                tracing::error!("Failed to migrate database: {e}");
                panic!("failed to migrate database: {e}");
            });

            Arc::new(store)
        }
    };

    // Service creation
    let service = Arc::new(NoteService::new(store));

    // Router config
    let app = rest::router(service);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind port {}: {e}", config.port);
            panic!("failed to bind port {}: {e}", config.port);
        });

    // Starting router
    tracing::info!(
        "Started listening on {}",
        listener.local_addr().expect("listener has a local address")
    );
    axum::serve(listener, app)
        .await
        .expect("failed to start server");
}
