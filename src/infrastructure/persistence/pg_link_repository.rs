//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink, UserId};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Row mapping for the `short_links` table.
#[derive(sqlx::FromRow)]
struct ShortLinkRow {
    id: i64,
    owner_id: Option<i64>,
    target_url: String,
    code: String,
    created_at: DateTime<Utc>,
    click_count: i64,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(row: ShortLinkRow) -> Self {
        ShortLink {
            id: row.id,
            owner_id: row.owner_id,
            target_url: row.target_url,
            code: row.code,
            created_at: row.created_at,
            click_count: row.click_count,
        }
    }
}

/// PostgreSQL repository for short links.
///
/// Code uniqueness rests on the `short_links_code_key` unique constraint;
/// a violated insert comes back as [`AppError::CodeConflict`] instead of a
/// pre-insert existence check, so concurrent writers cannot both win.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let result = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            INSERT INTO short_links (owner_id, target_url, code)
            VALUES ($1, $2, $3)
            RETURNING id, owner_id, target_url, code, created_at, click_count
            "#,
        )
        .bind(new_link.owner_id)
        .bind(&new_link.target_url)
        .bind(&new_link.code)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => Ok(row.into()),
            Err(e) => {
                if e.as_database_error()
                    .is_some_and(|db| db.is_unique_violation())
                {
                    Err(AppError::CodeConflict {
                        code: new_link.code,
                    })
                } else {
                    Err(e.into())
                }
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, owner_id, target_url, code, created_at, click_count
            FROM short_links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_owner_and_url(
        &self,
        owner: Option<UserId>,
        target_url: &str,
    ) -> Result<Option<ShortLink>, AppError> {
        // IS NOT DISTINCT FROM makes a NULL owner match only anonymous rows.
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, owner_id, target_url, code, created_at, click_count
            FROM short_links
            WHERE owner_id IS NOT DISTINCT FROM $1 AND target_url = $2
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(owner)
        .bind(target_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn increment_clicks(&self, id: i64) -> Result<(), AppError> {
        // Single atomic update; concurrent resolutions of the same link
        // serialize on the row, no read-modify-write in the application.
        let result = sqlx::query("UPDATE short_links SET click_count = click_count + 1 WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound {
                code: id.to_string(),
            });
        }

        Ok(())
    }

    async fn list_recent(
        &self,
        owner: Option<UserId>,
        limit: i64,
    ) -> Result<Vec<ShortLink>, AppError> {
        let rows = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, owner_id, target_url, code, created_at, click_count
            FROM short_links
            WHERE owner_id IS NOT DISTINCT FROM $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(owner)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
