//! Role model: a named capability bundle assignable to principals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role record.
///
/// Menu items and route gates reference roles by name; a gate naming a
/// role that no principal holds simply never matches.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Role {
    pub id: Uuid,

    /// Unique role name referenced by gates and menu items.
    pub name: String,

    pub description: Option<String>,

    /// Inactive roles never contribute to a principal's effective role set.
    pub is_active: bool,

    pub created: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn role_serialization() {
        let role = Role {
            id: Uuid::nil(),
            name: "editor".to_string(),
            description: Some("Can edit content".to_string()),
            is_active: true,
            created: Utc::now(),
        };

        let json = serde_json::to_string(&role).unwrap();
        assert!(json.contains("editor"));

        let parsed: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, "editor");
        assert!(parsed.is_active);
    }
}
