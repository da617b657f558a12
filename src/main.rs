use std::sync::Arc;

use memo_api::{config, repository::PostgresMemoRepository, server, service::MemoService};

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    let config = config::load_config().unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {e}");
        panic!("failed to load config: {e}");
    });

    // Repository creation and migration
    let mut repo = PostgresMemoRepository::new(&config.rdb.connection_string())
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to establish database connection: {e}");
            panic!("failed to establish database connection: {e}");
        });

    repo.migrate().await.unwrap_or_else(|e| {
        tracing::error!("Failed to migrate database: {e}");
        panic!("failed to migrate database: {e}");
    });

    // Service creation
    let service = Arc::new(MemoService::new(Arc::new(repo)));

    if let Err(e) = server::run(&config, service).await {
        tracing::error!("Server error: {e}");
        panic!("failed to start server: {e}");
    }
}
