//! Link creation, lookup and redirect service.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkTotals, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_valid_code, validate_code};
use crate::utils::url_validator::validate_url;

const LINK_NOT_FOUND: &str = "Link not found";

/// Service for creating, resolving and removing short links.
///
/// The repository is injected at construction; the service holds no other
/// state and is shared between requests behind an `Arc`.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link.
    ///
    /// # Code Selection
    ///
    /// - If `code` is provided (and non-empty), it is validated and checked
    ///   for availability before insert
    /// - Otherwise a random 6-character code is generated, retrying until an
    ///   unused one is found
    ///
    /// The availability check only gives a friendlier early error. The unique
    /// constraint in the store decides races between concurrent creates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or code is malformed.
    /// Returns [`AppError::Conflict`] if the code is already taken.
    pub async fn create_link(&self, url: String, code: Option<String>) -> Result<Link, AppError> {
        validate_url(&url)?;

        let code = match code.filter(|c| !c.is_empty()) {
            Some(custom) => {
                validate_code(&custom)?;

                if self.link_repository.exists(&custom).await? {
                    return Err(AppError::conflict("Code already exists"));
                }

                custom
            }
            None => self.generate_unique_code().await?,
        };

        let link = self.link_repository.create(NewLink { code, url }).await?;

        tracing::info!(code = %link.code, "Link created");

        Ok(link)
    }

    /// Retrieves a link by its short code.
    ///
    /// Malformed codes are reported as not found without a store lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        if !is_valid_code(code) {
            return Err(AppError::not_found(LINK_NOT_FOUND));
        }

        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(LINK_NOT_FOUND))
    }

    /// Lists all links, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Permanently deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if !is_valid_code(code) || !self.link_repository.delete(code).await? {
            return Err(AppError::not_found(LINK_NOT_FOUND));
        }

        tracing::info!(code, "Link deleted");

        Ok(())
    }

    /// Resolves a code for redirect and counts the click.
    ///
    /// Malformed and unknown codes yield the same [`AppError::NotFound`], so
    /// callers cannot tell which codes are merely well-formed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is malformed or unknown.
    pub async fn follow(&self, code: &str) -> Result<String, AppError> {
        if !is_valid_code(code) {
            return Err(AppError::not_found(LINK_NOT_FOUND));
        }

        self.link_repository
            .record_click(code)
            .await?
            .ok_or_else(|| AppError::not_found(LINK_NOT_FOUND))
    }

    /// Returns link and click totals.
    pub async fn totals(&self) -> Result<LinkTotals, AppError> {
        self.link_repository.totals().await
    }

    /// Checks that the underlying store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }

    /// Generates a code that is not in use yet.
    ///
    /// The loop is unbounded: with 62^6 possible codes a collision is rare
    /// until the table holds billions of rows, but an exhausted code space
    /// would spin here forever.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        loop {
            let code = generate_code();

            if !self.link_repository.exists(&code).await? {
                return Ok(code);
            }

            tracing::debug!(%code, "Generated code already in use, retrying");
        }
    }
}
