//! Toolbox test utilities.
//!
//! Fixture builders for principals and menu items used by kernel tests.
//! Builders return the real kernel types so tests exercise actual
//! behavior rather than mock mirrors.

use std::collections::HashSet;

use toolbox_kernel::models::{ANONYMOUS_PRINCIPAL_ID, MenuItem, Principal};
use uuid::Uuid;

/// Create an authenticated principal with the given role names.
pub fn principal(roles: &[&str]) -> Principal {
    Principal {
        id: Uuid::now_v7(),
        username: "test".to_string(),
        is_superuser: false,
        is_staff: false,
        is_active: true,
        roles: roles.iter().map(|s| s.to_string()).collect(),
    }
}

/// Create the anonymous principal.
pub fn anonymous() -> Principal {
    Principal {
        id: ANONYMOUS_PRINCIPAL_ID,
        username: "anonymous".to_string(),
        is_superuser: false,
        is_staff: false,
        is_active: true,
        roles: HashSet::new(),
    }
}

/// Create a superuser principal.
pub fn superuser() -> Principal {
    Principal {
        is_superuser: true,
        ..principal(&[])
    }
}

/// Create a staff principal.
pub fn staff() -> Principal {
    Principal {
        is_staff: true,
        ..principal(&[])
    }
}

/// Builder-style extensions for [`Principal`] fixtures.
pub trait PrincipalExt: Sized {
    /// Set a custom id.
    fn with_id(self, id: Uuid) -> Self;

    /// Mark the principal as soft-deleted.
    fn inactive(self) -> Self;
}

impl PrincipalExt for Principal {
    fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// Create a visible root menu item with default values.
pub fn menu_item(menu: &str, title: &str) -> MenuItem {
    MenuItem {
        id: Uuid::now_v7(),
        menu: menu.to_string(),
        title: title.to_string(),
        path: format!("/{}", title.to_lowercase()),
        icon: None,
        parent_id: None,
        sort_order: 0,
        is_visible: true,
        roles: HashSet::new(),
        created: 1000,
        changed: 1000,
    }
}

/// Builder-style extensions for [`MenuItem`] fixtures.
pub trait MenuItemExt: Sized {
    /// Set a custom id.
    fn with_id(self, id: Uuid) -> Self;

    /// Attach the item under a parent.
    fn under(self, parent: Uuid) -> Self;

    /// Set the sort weight.
    fn with_sort(self, sort_order: i32) -> Self;

    /// Restrict the item to the given role names.
    fn with_roles(self, roles: &[&str]) -> Self;

    /// Hide the item.
    fn hidden(self) -> Self;
}

impl MenuItemExt for MenuItem {
    fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    fn under(mut self, parent: Uuid) -> Self {
        self.parent_id = Some(parent);
        self
    }

    fn with_sort(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    fn with_roles(mut self, roles: &[&str]) -> Self {
        self.roles = roles.iter().map(|s| s.to_string()).collect();
        self
    }

    fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn principal_builder() {
        let p = principal(&["editor", "author"]);
        assert!(p.is_active);
        assert!(p.has_role("editor"));
        assert!(!p.has_role("admin"));

        let gone = principal(&[]).inactive();
        assert!(!gone.is_active);
    }

    #[test]
    fn anonymous_builder() {
        let p = anonymous();
        assert!(p.is_anonymous());
        assert!(p.roles.is_empty());
    }

    #[test]
    fn superuser_and_staff_builders() {
        assert!(superuser().is_superuser);
        assert!(staff().is_staff);
        assert!(!staff().is_superuser);
    }

    #[test]
    fn menu_item_builder() {
        let parent = Uuid::now_v7();
        let item = menu_item("main", "Admin")
            .under(parent)
            .with_sort(5)
            .with_roles(&["admin"])
            .hidden();

        assert_eq!(item.menu, "main");
        assert_eq!(item.path, "/admin");
        assert_eq!(item.parent_id, Some(parent));
        assert_eq!(item.sort_order, 5);
        assert!(!item.is_visible);
        assert!(item.roles.contains("admin"));
    }
}
