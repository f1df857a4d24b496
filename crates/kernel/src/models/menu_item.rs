//! Menu item model: a node in a role-gated navigation tree.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Menu item record.
///
/// Items form a forest per menu machine name (e.g. "main", "admin").
/// The parent chain is assumed acyclic; `sort_order` orders siblings
/// ascending with ties broken by stable store order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier (UUIDv7).
    pub id: Uuid,

    /// Menu machine name this item belongs to.
    pub menu: String,

    /// Display title.
    pub title: String,

    /// Frontend route path.
    pub path: String,

    /// Optional icon name for rendering.
    pub icon: Option<String>,

    /// Optional parent item; `None` marks a root.
    pub parent_id: Option<Uuid>,

    /// Sort weight within the sibling level, ascending.
    pub sort_order: i32,

    /// Hidden items are excluded for every principal, superusers included.
    pub is_visible: bool,

    /// Role names allowed to see this item. Empty means visible to every
    /// admitted principal.
    pub roles: HashSet<String>,

    /// Unix timestamp when created.
    pub created: i64,

    /// Unix timestamp when last changed.
    pub changed: i64,
}

impl MenuItem {
    /// Check whether this item is a tree root.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
