use async_trait::async_trait;
use tokio_postgres::{Client, NoTls};

use super::{NoteStore, StoreError};
use crate::models::Note;

mod embedded {
    refinery::embed_migrations!("migrations");
}

/// PostgreSQL backend. `id` and `date` come from the database (`BIGSERIAL`
/// and a `now()` default); every statement is parameterized.
pub struct PostgresStore {
    client: Client,
}

impl PostgresStore {
    pub async fn connect(database_dsn: &str) -> Result<Self, StoreError> {
        let (client, con) = tokio_postgres::connect(database_dsn, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    pub async fn migrate(&mut self) -> Result<(), StoreError> {
        let report = embedded::migrations::runner()
            .run_async(&mut self.client)
            .await?;

        for migration in report.applied_migrations() {
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
impl NoteStore for PostgresStore {
    async fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
        let rows = self
            .client
            .query(
                "SELECT id, text, date FROM notes ORDER BY date DESC, id DESC",
                &[],
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Note {
                id: row.get("id"),
                text: row.get("text"),
                date: row.get("date"),
            })
            .collect())
    }

    async fn create_note(&self, text: String) -> Result<Note, StoreError> {
        let row = self
            .client
            .query_one(
                "INSERT INTO notes (text) VALUES ($1) RETURNING id, text, date",
                &[&text],
            )
            .await?;

        Ok(Note {
            id: row.get("id"),
            text: row.get("text"),
            date: row.get("date"),
        })
    }

    async fn delete_note(&self, id: i64) -> Result<bool, StoreError> {
        let rows = self
            .client
            .execute("DELETE FROM notes WHERE id = $1", &[&id])
            .await?;

        Ok(rows == 1)
    }
}
