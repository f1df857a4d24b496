//! Access control: role-gated admission and the role cache.
//!
//! Admission is a pure predicate over a principal and a required role set.
//! "No permission" is a boolean deny, never an error; only storage
//! failures surface as errors, and only from the [`RoleCache`] loading
//! path. [`RoleCache`] keeps effective-role lookups off the storage
//! collaborator for repeated checks against the same principal.

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Result;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use crate::models::Principal;
use crate::store::AuthorityStore;

/// Decide whether a principal is admitted against a required role set.
///
/// - An absent, anonymous, or inactive principal is denied.
/// - Superusers are admitted unconditionally.
/// - An empty requirement admits any authenticated principal.
/// - Otherwise admission requires at least one shared role name (OR
///   semantics across the required set).
///
/// A required role name that exists nowhere simply never matches.
pub fn admit(principal: Option<&Principal>, required: &HashSet<String>) -> bool {
    let Some(principal) = principal else {
        return false;
    };
    if principal.is_anonymous() || !principal.is_active {
        return false;
    }
    if principal.is_superuser {
        return true;
    }
    if required.is_empty() {
        return true;
    }
    required.iter().any(|name| principal.roles.contains(name))
}

/// Capability exposed by objects that belong to a principal.
///
/// Object-scoped admission asks the object for its owner rather than
/// probing for attributes; an object that reports no owner is denied to
/// non-staff principals.
pub trait Ownable {
    /// The owning principal, if the object has one.
    fn owner_id(&self) -> Option<Uuid>;
}

/// A principal owns itself, so profile-style objects that *are* the
/// principal pass the ownership check directly.
impl Ownable for Principal {
    fn owner_id(&self) -> Option<Uuid> {
        Some(self.id)
    }
}

/// Decide whether a principal may act on a specific object.
///
/// Staff principals are admitted for any object; everyone else only for
/// objects they own.
pub fn admit_for_object(principal: &Principal, object: &dyn Ownable) -> bool {
    if principal.is_anonymous() || !principal.is_active {
        return false;
    }
    if principal.is_staff {
        return true;
    }
    object.owner_id() == Some(principal.id)
}

/// Effective-role cache keyed by principal id.
///
/// Sits between callers and the storage collaborator; the evaluator
/// itself stays pure. Invalidate on role-assignment changes.
pub struct RoleCache<S> {
    inner: Arc<RoleCacheInner<S>>,
}

impl<S> Clone for RoleCache<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct RoleCacheInner<S> {
    /// principal_id -> active role names.
    roles: DashMap<Uuid, HashSet<String>>,

    /// Storage collaborator for cache misses.
    store: S,
}

impl<S: AuthorityStore> RoleCache<S> {
    /// Create a cache in front of a store.
    pub fn new(store: S) -> Self {
        Self {
            inner: Arc::new(RoleCacheInner {
                roles: DashMap::new(),
                store,
            }),
        }
    }

    /// Active role names for a principal, loading through the store on a
    /// cache miss.
    pub async fn effective_roles(&self, principal: Uuid) -> Result<HashSet<String>> {
        if let Some(cached) = self.inner.roles.get(&principal) {
            return Ok(cached.clone());
        }

        let roles = self.inner.store.principal_roles(principal).await?;
        debug!(principal = %principal, roles = roles.len(), "cached principal roles");
        self.inner.roles.insert(principal, roles.clone());

        Ok(roles)
    }

    /// Invalidate one principal.
    ///
    /// Call this when the principal's role assignments change.
    pub fn invalidate(&self, principal: Uuid) {
        self.inner.roles.remove(&principal);
    }

    /// Invalidate every principal.
    ///
    /// Call this when a role itself is renamed or deactivated.
    pub fn invalidate_all(&self) {
        self.inner.roles.clear();
    }

    /// Number of cached principals (for monitoring).
    pub fn len(&self) -> usize {
        self.inner.roles.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.roles.is_empty()
    }
}
