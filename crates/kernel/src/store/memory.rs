//! In-memory authority store.

use std::collections::{HashMap, HashSet};

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use super::AuthorityStore;
use crate::models::MenuItem;

/// Insertion-ordered in-memory implementation of [`AuthorityStore`].
///
/// Items are kept in insertion order so that `sort_order` ties resolve
/// the same way the database does (stable original order).
#[derive(Debug, Default)]
pub struct MemoryAuthorityStore {
    items: RwLock<Vec<MenuItem>>,
    roles: RwLock<HashMap<Uuid, HashSet<String>>>,
}

impl MemoryAuthorityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a menu item.
    pub fn insert_item(&self, item: MenuItem) {
        self.items.write().push(item);
    }

    /// Remove a menu item by id.
    pub fn remove_item(&self, id: Uuid) -> bool {
        let mut items = self.items.write();
        let before = items.len();
        items.retain(|item| item.id != id);
        items.len() < before
    }

    /// Replace the role names assigned to a principal.
    pub fn set_principal_roles<I, T>(&self, principal: Uuid, roles: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.roles
            .write()
            .insert(principal, roles.into_iter().map(Into::into).collect());
    }

    /// Number of stored menu items.
    pub fn item_count(&self) -> usize {
        self.items.read().len()
    }
}

#[async_trait]
impl AuthorityStore for MemoryAuthorityStore {
    async fn items_by_parent(&self, menu: &str, parent: Option<Uuid>) -> Result<Vec<MenuItem>> {
        let items = self.items.read();
        let mut level: Vec<MenuItem> = items
            .iter()
            .filter(|item| item.menu == menu && item.parent_id == parent)
            .cloned()
            .collect();
        // Stable: insertion order survives for equal sort weights.
        level.sort_by_key(|item| item.sort_order);
        Ok(level)
    }

    async fn principal_roles(&self, principal: Uuid) -> Result<HashSet<String>> {
        Ok(self
            .roles
            .read()
            .get(&principal)
            .cloned()
            .unwrap_or_default())
    }
}
