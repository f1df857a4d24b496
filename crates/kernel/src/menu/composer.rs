//! Menu tree composer.
//!
//! Each level is read from the storage collaborator with a fresh query
//! and nothing is cached between calls, so a recomposition always
//! reflects the current table. Parent chains are assumed acyclic; a
//! visited set catches a looping table and fails instead of recursing
//! forever.

use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;

use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{KernelError, KernelResult};
use crate::models::{MenuItem, Principal};
use crate::store::AuthorityStore;

/// A menu item together with its composed children.
///
/// Serializes with the item fields inline and a nested `children` array,
/// which is the shape the frontend consumes directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuTree {
    #[serde(flatten)]
    pub item: MenuItem,
    pub children: Vec<MenuTree>,
}

/// Compose the visible tree of `menu` for a principal.
///
/// Roots are the items with no parent; each included item has its
/// children composed recursively with the same filter and the same
/// principal. An item is included when it is visible and, for
/// non-superusers, when its role set is empty or shares a name with the
/// principal's roles. An item excluded by the role gate hides its entire
/// subtree. Superusers bypass the role gate but not the visibility flag.
///
/// Output is deterministic: siblings come back ascending by `sort_order`
/// with ties left in store order, and recomposing over unchanged data
/// yields a structurally identical tree.
pub async fn compose_tree<S>(
    store: &S,
    menu: &str,
    principal: Option<&Principal>,
) -> KernelResult<Vec<MenuTree>>
where
    S: AuthorityStore + ?Sized,
{
    let mut visited = HashSet::new();
    let forest = compose_level(store, menu, None, principal, &mut visited).await?;
    debug!(menu, roots = forest.len(), "composed menu tree");
    Ok(forest)
}

/// Role filter for a single item.
///
/// An empty role set on the item admits every principal; superusers
/// bypass the gate entirely.
fn role_gate(item: &MenuItem, principal: Option<&Principal>) -> bool {
    if item.roles.is_empty() {
        return true;
    }
    match principal {
        Some(p) if p.is_superuser => true,
        Some(p) => item.roles.iter().any(|name| p.roles.contains(name)),
        None => false,
    }
}

fn compose_level<'a, S>(
    store: &'a S,
    menu: &'a str,
    parent: Option<Uuid>,
    principal: Option<&'a Principal>,
    visited: &'a mut HashSet<Uuid>,
) -> Pin<Box<dyn Future<Output = KernelResult<Vec<MenuTree>>> + Send + 'a>>
where
    S: AuthorityStore + ?Sized,
{
    Box::pin(async move {
        let mut level = store.items_by_parent(menu, parent).await?;
        // The store contract already orders by sort weight; the stable
        // re-sort keeps output deterministic for stores that only
        // guarantee insertion order.
        level.sort_by_key(|item| item.sort_order);

        let mut composed = Vec::new();
        for item in level {
            if !item.is_visible {
                continue;
            }
            if !role_gate(&item, principal) {
                continue;
            }
            if !visited.insert(item.id) {
                warn!(item = %item.id, menu, "parent cycle in menu table");
                return Err(KernelError::Cycle { id: item.id });
            }

            let children = compose_level(store, menu, Some(item.id), principal, visited).await?;
            composed.push(MenuTree { item, children });
        }

        Ok(composed)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn item(roles: &[&str]) -> MenuItem {
        MenuItem {
            id: Uuid::now_v7(),
            menu: "main".to_string(),
            title: "Item".to_string(),
            path: "/item".to_string(),
            icon: None,
            parent_id: None,
            sort_order: 0,
            is_visible: true,
            roles: roles.iter().map(|s| s.to_string()).collect(),
            created: 1000,
            changed: 1000,
        }
    }

    fn principal(roles: &[&str], is_superuser: bool) -> Principal {
        Principal {
            id: Uuid::now_v7(),
            username: "test".to_string(),
            is_superuser,
            is_staff: false,
            is_active: true,
            roles: roles.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn open_item_admits_everyone() {
        let open = item(&[]);
        assert!(role_gate(&open, None));
        assert!(role_gate(&open, Some(&principal(&[], false))));
    }

    #[test]
    fn gated_item_requires_a_shared_role() {
        let gated = item(&["admin"]);
        assert!(!role_gate(&gated, None));
        assert!(!role_gate(&gated, Some(&principal(&["editor"], false))));
        assert!(role_gate(&gated, Some(&principal(&["admin"], false))));
    }

    #[test]
    fn superuser_bypasses_the_gate() {
        let gated = item(&["admin"]);
        assert!(role_gate(&gated, Some(&principal(&[], true))));
    }
}
