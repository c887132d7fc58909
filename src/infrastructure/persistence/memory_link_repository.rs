//! In-process implementation of the link repository.
//!
//! Backs the integration tests; honors the same contract as the Postgres
//! implementation. Every operation runs under one mutex, so the uniqueness
//! check plus insert is atomic and increments never lose updates.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::entities::{NewShortLink, ShortLink, UserId};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    links: Vec<ShortLink>,
    next_id: i64,
}

/// Mutex-guarded in-memory link store.
#[derive(Default)]
pub struct MemoryLinkRepository {
    inner: Mutex<Inner>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let mut inner = self.inner.lock().await;

        if inner.links.iter().any(|l| l.code == new_link.code) {
            return Err(AppError::CodeConflict {
                code: new_link.code,
            });
        }

        inner.next_id += 1;
        let link = ShortLink {
            id: inner.next_id,
            owner_id: new_link.owner_id,
            target_url: new_link.target_url,
            code: new_link.code,
            created_at: Utc::now(),
            click_count: 0,
        };
        inner.links.push(link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let inner = self.inner.lock().await;
        Ok(inner.links.iter().find(|l| l.code == code).cloned())
    }

    async fn find_by_owner_and_url(
        &self,
        owner: Option<UserId>,
        target_url: &str,
    ) -> Result<Option<ShortLink>, AppError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .links
            .iter()
            .find(|l| l.owner_id == owner && l.target_url == target_url)
            .cloned())
    }

    async fn increment_clicks(&self, id: i64) -> Result<(), AppError> {
        let mut inner = self.inner.lock().await;
        let link = inner
            .links
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(AppError::NotFound {
                code: id.to_string(),
            })?;

        link.click_count += 1;
        Ok(())
    }

    async fn list_recent(
        &self,
        owner: Option<UserId>,
        limit: i64,
    ) -> Result<Vec<ShortLink>, AppError> {
        let inner = self.inner.lock().await;
        let mut links: Vec<ShortLink> = inner
            .links
            .iter()
            .filter(|l| l.owner_id == owner)
            .cloned()
            .collect();

        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        links.truncate(limit.max(0) as usize);

        Ok(links)
    }
}
