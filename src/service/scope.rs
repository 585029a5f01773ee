//! Visibility scope resolution.

use entity::inventory::InventoryVisibility;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        inventory::InventoryRepository, membership::MembershipRepository, user::UserRepository,
    },
    error::Error,
    model::scope::ResolvedScope,
};

/// Resolves who is looking at whose catalog into a [`ResolvedScope`].
///
/// Resolution is the single place where access to a catalog is decided; the
/// query service turns the result into row filters without any further
/// permission checks.
pub struct ScopeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScopeService<'a> {
    /// Creates a new instance of [`ScopeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a catalog request into the slice of placements it may see.
    ///
    /// # Behavior
    /// - No viewer and no owner resolves to [`ResolvedScope::Empty`].
    /// - An anonymous viewer on an owner's catalog sees public material
    ///   only. A named inventory must itself be public or resolution fails
    ///   with [`Error::NotFound`], so a private inventory is
    ///   indistinguishable from a missing one.
    /// - A viewer on their own catalog (no owner named, or the owner is the
    ///   viewer) resolves to [`ResolvedScope::Owned`]. Naming an inventory
    ///   the viewer holds no membership on fails with [`Error::Denied`]; the
    ///   own catalog is the only path allowed to make that distinction.
    /// - A viewer on another user's catalog resolves to
    ///   [`ResolvedScope::Shared`]. A named inventory is reachable through a
    ///   membership, even on a private inventory, or through public
    ///   visibility; anything else fails with [`Error::NotFound`].
    ///
    /// # Arguments
    /// - `viewer_id` - The logged-in viewer, if any
    /// - `owner_username` - Whose catalog is addressed; `None` means the
    ///   viewer's own
    /// - `inventory_slug` - A single inventory within the catalog, if the
    ///   request names one
    ///
    /// # Returns
    /// - `ResolvedScope` - The resolved slice, carrying the inventory and
    ///   membership rows later stages need
    pub async fn resolve(
        &self,
        viewer_id: Option<i32>,
        owner_username: Option<&str>,
        inventory_slug: Option<&str>,
    ) -> Result<ResolvedScope, Error> {
        let user_repo = UserRepository::new(self.db);

        let owner = match owner_username {
            Some(username) => match user_repo.get_by_username(username).await? {
                Some(owner) => Some(owner),
                None => return Err(Error::NotFound(format!("No user named {username} found"))),
            },
            None => None,
        };

        match (viewer_id, owner) {
            (None, None) => Ok(ResolvedScope::Empty),
            (None, Some(owner)) => self.resolve_public(owner.id, inventory_slug).await,
            (Some(viewer_id), None) => self.resolve_owned(viewer_id, inventory_slug).await,
            (Some(viewer_id), Some(owner)) if owner.id == viewer_id => {
                self.resolve_owned(viewer_id, inventory_slug).await
            }
            (Some(viewer_id), Some(owner)) => {
                self.resolve_shared(viewer_id, owner.id, inventory_slug).await
            }
        }
    }

    async fn resolve_owned(
        &self,
        viewer_id: i32,
        inventory_slug: Option<&str>,
    ) -> Result<ResolvedScope, Error> {
        let slug = match inventory_slug {
            Some(slug) => slug,
            None => {
                return Ok(ResolvedScope::Owned {
                    viewer_id,
                    inventory: None,
                    membership: None,
                })
            }
        };

        let inventory_repo = InventoryRepository::new(self.db);
        let membership_repo = MembershipRepository::new(self.db);

        let inventory = match inventory_repo.get_by_slug(viewer_id, slug).await? {
            Some(inventory) => inventory,
            None => return Err(Error::NotFound(format!("No inventory named {slug} found"))),
        };
        let membership = match membership_repo.get(viewer_id, inventory.id).await? {
            Some(membership) => membership,
            None => {
                return Err(Error::Denied(format!(
                    "You do not have access to the inventory named {slug}"
                )))
            }
        };

        Ok(ResolvedScope::Owned {
            viewer_id,
            inventory: Some(inventory),
            membership: Some(membership),
        })
    }

    async fn resolve_public(
        &self,
        owner_id: i32,
        inventory_slug: Option<&str>,
    ) -> Result<ResolvedScope, Error> {
        let slug = match inventory_slug {
            Some(slug) => slug,
            None => {
                return Ok(ResolvedScope::PublicOnly {
                    owner_id,
                    inventory: None,
                })
            }
        };

        let inventory_repo = InventoryRepository::new(self.db);
        let inventory = match inventory_repo.get_by_slug(owner_id, slug).await? {
            Some(inventory) if inventory.visibility == InventoryVisibility::Public => inventory,
            // A private inventory must look exactly like a missing one here.
            _ => return Err(Error::NotFound(format!("No inventory named {slug} found"))),
        };

        Ok(ResolvedScope::PublicOnly {
            owner_id,
            inventory: Some(inventory),
        })
    }

    async fn resolve_shared(
        &self,
        viewer_id: i32,
        owner_id: i32,
        inventory_slug: Option<&str>,
    ) -> Result<ResolvedScope, Error> {
        let slug = match inventory_slug {
            Some(slug) => slug,
            None => {
                return Ok(ResolvedScope::Shared {
                    viewer_id,
                    owner_id,
                    inventory: None,
                    membership: None,
                })
            }
        };

        let inventory_repo = InventoryRepository::new(self.db);
        let membership_repo = MembershipRepository::new(self.db);

        let inventory = match inventory_repo.get_by_slug(owner_id, slug).await? {
            Some(inventory) => inventory,
            None => return Err(Error::NotFound(format!("No inventory named {slug} found"))),
        };
        // A membership reaches the inventory even when it is private.
        let membership = membership_repo.get(viewer_id, inventory.id).await?;
        if membership.is_none() && inventory.visibility != InventoryVisibility::Public {
            return Err(Error::NotFound(format!("No inventory named {slug} found")));
        }

        Ok(ResolvedScope::Shared {
            viewer_id,
            owner_id,
            inventory: Some(inventory),
            membership,
        })
    }
}
