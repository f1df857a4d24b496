//! Domain models: principals, roles, and menu items.

pub mod menu_item;
pub mod principal;
pub mod role;

pub use menu_item::MenuItem;
pub use principal::{ANONYMOUS_PRINCIPAL_ID, Principal};
pub use role::Role;
