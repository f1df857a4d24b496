//! Principal model: the authenticated actor making a request.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Anonymous principal UUID (nil UUID).
pub const ANONYMOUS_PRINCIPAL_ID: Uuid = Uuid::nil();

/// An actor as seen by the access evaluator and tree composer.
///
/// Role names are loaded up front through the storage collaborator, so
/// admission checks stay pure functions over this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub id: Uuid,
    pub username: String,

    /// Superusers bypass every role gate.
    pub is_superuser: bool,

    /// Staff principals pass object-scoped checks for any object.
    pub is_staff: bool,

    /// Soft-delete flag; inactive principals are never admitted.
    pub is_active: bool,

    /// Names of the principal's active roles.
    pub roles: HashSet<String>,
}

impl Principal {
    /// Check if this is the anonymous principal.
    pub fn is_anonymous(&self) -> bool {
        self.id == ANONYMOUS_PRINCIPAL_ID
    }

    /// Check whether the principal holds a role by name.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}
