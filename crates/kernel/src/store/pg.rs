//! PostgreSQL-backed authority store.

use std::collections::HashSet;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::debug;
use uuid::Uuid;

use super::AuthorityStore;
use crate::config::Config;
use crate::models::{MenuItem, Principal};

/// Postgres implementation of [`AuthorityStore`].
///
/// Queries the `users`, `roles`, `user_roles`, `menu_item`, and
/// `menu_item_roles` tables. Role names on menu items are aggregated in
/// SQL so each level is a single query.
#[derive(Clone)]
pub struct PgAuthorityStore {
    pool: PgPool,
}

/// Flat menu item row; the role-name array is built by the query.
#[derive(sqlx::FromRow)]
struct MenuItemRow {
    id: Uuid,
    menu: String,
    title: String,
    path: String,
    icon: Option<String>,
    parent_id: Option<Uuid>,
    sort_order: i32,
    is_visible: bool,
    roles: Vec<String>,
    created: i64,
    changed: i64,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: row.id,
            menu: row.menu,
            title: row.title,
            path: row.path,
            icon: row.icon,
            parent_id: row.parent_id,
            sort_order: row.sort_order,
            is_visible: row.is_visible,
            roles: row.roles.into_iter().collect(),
            created: row.created,
            changed: row.changed,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PrincipalRow {
    id: Uuid,
    username: String,
    is_superuser: bool,
    is_staff: bool,
    is_active: bool,
}

impl PgAuthorityStore {
    /// Wrap an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect using [`Config`].
    pub async fn connect(config: &Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect(&config.database_url)
            .await
            .context("failed to connect to PostgreSQL")?;

        Ok(Self { pool })
    }

    /// Check if the database connection is healthy.
    pub async fn check_health(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    /// Load a principal with its active role names.
    ///
    /// Returns `None` for unknown ids. This is the lookup the
    /// authentication layer uses after verifying a session or token.
    pub async fn find_principal(&self, id: Uuid) -> Result<Option<Principal>> {
        let row = sqlx::query_as::<_, PrincipalRow>(
            "SELECT id, username, is_superuser, is_staff, is_active FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("failed to fetch principal by id")?;

        let Some(row) = row else {
            return Ok(None);
        };

        let roles = self.principal_roles(row.id).await?;

        Ok(Some(Principal {
            id: row.id,
            username: row.username,
            is_superuser: row.is_superuser,
            is_staff: row.is_staff,
            is_active: row.is_active,
            roles,
        }))
    }
}

#[async_trait]
impl AuthorityStore for PgAuthorityStore {
    async fn items_by_parent(&self, menu: &str, parent: Option<Uuid>) -> Result<Vec<MenuItem>> {
        // Item gates keep inactive role names: a name no principal can
        // hold never matches, it must not widen the gate to everyone.
        let rows = sqlx::query_as::<_, MenuItemRow>(
            r#"
            SELECT i.id, i.menu, i.title, i.path, i.icon, i.parent_id, i.sort_order,
                   i.is_visible, i.created, i.changed,
                   COALESCE(array_agg(r.name) FILTER (WHERE r.name IS NOT NULL), '{}') AS roles
            FROM menu_item i
            LEFT JOIN menu_item_roles ir ON ir.item_id = i.id
            LEFT JOIN roles r ON r.id = ir.role_id
            WHERE i.menu = $1 AND i.parent_id IS NOT DISTINCT FROM $2
            GROUP BY i.id
            ORDER BY i.sort_order ASC, i.id ASC
            "#,
        )
        .bind(menu)
        .bind(parent)
        .fetch_all(&self.pool)
        .await
        .context("failed to fetch menu items by parent")?;

        debug!(menu, parent = ?parent, items = rows.len(), "loaded menu level");

        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    async fn principal_roles(&self, principal: Uuid) -> Result<HashSet<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT r.name
            FROM roles r
            INNER JOIN user_roles ur ON ur.role_id = r.id
            WHERE ur.user_id = $1 AND r.is_active
            "#,
        )
        .bind(principal)
        .fetch_all(&self.pool)
        .await
        .context("failed to fetch principal roles")?;

        Ok(names.into_iter().collect())
    }
}
