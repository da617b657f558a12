mod embedded;

use embedded::migrations;

use async_trait::async_trait;
use tokio_postgres::{Client, NoTls, Row};

use crate::models::Memo;

/// Store failure, boxed so substitute repositories can produce their
/// own failures.
pub type RepositoryError = Box<dyn std::error::Error + Send + Sync>;

/// Persistence contract for memos. Lookups that match no row yield
/// `Ok(None)`; errors are reserved for store failures.
#[async_trait]
pub trait MemoRepository: Send + Sync {
    async fn create_memo(&self, title: String, content: String) -> Result<Memo, RepositoryError>;

    async fn get_memo_by_id(&self, id: i64) -> Result<Option<Memo>, RepositoryError>;

    /// Returns every memo in the store's natural order, which for this
    /// table is insertion order.
    async fn get_all_memo(&self) -> Result<Vec<Memo>, RepositoryError>;
}

pub struct PostgresMemoRepository {
    client: Client,
}

fn memo_from_row(row: &Row) -> Memo {
    Memo {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        deleted_at: row.get("deleted_at"),
    }
}

impl PostgresMemoRepository {
    pub async fn new(database_dsn: &str) -> Result<Self, tokio_postgres::Error> {
        let (client, con) = tokio_postgres::connect(database_dsn, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    pub async fn migrate(&mut self) -> Result<(), refinery::Error> {
        let migrations_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished!");

        Ok(())
    }
}

#[async_trait]
impl MemoRepository for PostgresMemoRepository {
    async fn create_memo(&self, title: String, content: String) -> Result<Memo, RepositoryError> {
        let row = self
            .client
            .query_one(
                "INSERT INTO memo (title, content, created_at, updated_at) \
                 VALUES ($1, $2, now(), now()) \
                 RETURNING id, title, content, created_at, updated_at, deleted_at",
                &[&title, &content],
            )
            .await?;

        Ok(memo_from_row(&row))
    }

    async fn get_memo_by_id(&self, id: i64) -> Result<Option<Memo>, RepositoryError> {
        let row = self
            .client
            .query_opt(
                "SELECT id, title, content, created_at, updated_at, deleted_at \
                 FROM memo WHERE id = $1",
                &[&id],
            )
            .await?;

        Ok(row.as_ref().map(memo_from_row))
    }

    async fn get_all_memo(&self) -> Result<Vec<Memo>, RepositoryError> {
        let rows = self
            .client
            .query(
                "SELECT id, title, content, created_at, updated_at, deleted_at FROM memo",
                &[],
            )
            .await?;

        Ok(rows.iter().map(memo_from_row).collect())
    }
}
