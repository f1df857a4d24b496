//! Storage collaborators for principals, roles, and menu items.
//!
//! The evaluator and composer never touch a database directly; they run
//! against the [`AuthorityStore`] seam. [`PgAuthorityStore`] backs it with
//! PostgreSQL, [`MemoryAuthorityStore`] with insertion-ordered vectors for
//! tests and embedding.

mod memory;
mod pg;

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::MenuItem;

pub use memory::MemoryAuthorityStore;
pub use pg::PgAuthorityStore;

/// Read interface the access evaluator and tree composer run against.
///
/// Implementations return menu items ordered ascending by `sort_order`
/// with ties in insertion order, and do NOT pre-apply the visibility
/// filter — the composer owns that decision. Role lookups return active
/// roles only.
#[async_trait]
pub trait AuthorityStore: Send + Sync {
    /// Items of `menu` directly under `parent` (`None` = roots).
    async fn items_by_parent(&self, menu: &str, parent: Option<Uuid>) -> Result<Vec<MenuItem>>;

    /// Active role names assigned to a principal.
    async fn principal_roles(&self, principal: Uuid) -> Result<HashSet<String>>;
}

/// Shared stores are stores too, so one instance can back both the role
/// cache and the composer.
#[async_trait]
impl<T: AuthorityStore + ?Sized> AuthorityStore for Arc<T> {
    async fn items_by_parent(&self, menu: &str, parent: Option<Uuid>) -> Result<Vec<MenuItem>> {
        (**self).items_by_parent(menu, parent).await
    }

    async fn principal_roles(&self, principal: Uuid) -> Result<HashSet<String>> {
        (**self).principal_roles(principal).await
    }
}
