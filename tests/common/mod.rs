#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use tinylink::prelude::*;
use tinylink::routes::app_router;

/// In-memory link store mirroring the PostgreSQL repository's semantics.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<Link>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the stored link, bypassing the service layer.
    pub fn snapshot(&self, code: &str) -> Option<Link> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.code == code)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.lock().unwrap();

        if links.iter().any(|l| l.code == new_link.code) {
            return Err(AppError::conflict("Code already exists"));
        }

        let link = Link::new(
            links.len() as i64 + 1,
            new_link.code,
            new_link.url,
            0,
            Utc::now(),
            None,
        );
        links.push(link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.snapshot(code))
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.snapshot(code).is_some())
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let mut links = self.links.lock().unwrap().clone();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(links)
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let mut links = self.links.lock().unwrap();
        let before = links.len();
        links.retain(|l| l.code != code);
        Ok(links.len() < before)
    }

    async fn record_click(&self, code: &str) -> Result<Option<String>, AppError> {
        let mut links = self.links.lock().unwrap();

        Ok(links.iter_mut().find(|l| l.code == code).map(|link| {
            link.clicks += 1;
            link.last_clicked = Some(Utc::now());
            link.url.clone()
        }))
    }

    async fn totals(&self) -> Result<LinkTotals, AppError> {
        let links = self.links.lock().unwrap();
        Ok(LinkTotals {
            links: links.len() as i64,
            clicks: links.iter().map(|l| l.clicks).sum(),
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Store that fails every call, as if the database were unreachable.
pub struct UnreachableLinkRepository;

fn unreachable_error() -> AppError {
    AppError::internal("connection refused (os error 111)")
}

#[async_trait]
impl LinkRepository for UnreachableLinkRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(unreachable_error())
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(unreachable_error())
    }

    async fn exists(&self, _code: &str) -> Result<bool, AppError> {
        Err(unreachable_error())
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        Err(unreachable_error())
    }

    async fn delete(&self, _code: &str) -> Result<bool, AppError> {
        Err(unreachable_error())
    }

    async fn record_click(&self, _code: &str) -> Result<Option<String>, AppError> {
        Err(unreachable_error())
    }

    async fn totals(&self) -> Result<LinkTotals, AppError> {
        Err(unreachable_error())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unreachable_error())
    }
}

/// Builds a test server over the full router backed by an in-memory store.
pub fn create_test_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::new(repo.clone());
    let server = TestServer::new(app_router(state)).unwrap();

    (server, repo)
}

/// Builds a test server whose store is unreachable.
pub fn create_unreachable_server() -> TestServer {
    let state = AppState::new(Arc::new(UnreachableLinkRepository));
    TestServer::new(app_router(state)).unwrap()
}

/// Inserts a link directly into the store.
pub async fn seed_link(repo: &InMemoryLinkRepository, code: &str, url: &str) -> Link {
    repo.create(NewLink {
        code: code.to_string(),
        url: url.to_string(),
    })
    .await
    .unwrap()
}
