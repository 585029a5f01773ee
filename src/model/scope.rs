//! Resolved visibility scopes.
//!
//! A [`ResolvedScope`] is the outcome of the visibility resolution step: it
//! fixes which slice of the catalog a query may touch before any filter is
//! applied. Filters and sorting only ever narrow a scope, never widen it.

use super::db::{InventoryModel, MembershipModel};

/// The slice of the catalog one request is allowed to see.
///
/// Produced once per request by scope resolution and then handed unchanged to
/// item queries. The optional inventory narrows the scope to one container;
/// the optional membership is the viewer's own row on that container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedScope {
    /// Nothing is visible. Returned for anonymous requests that name no
    /// catalog owner.
    Empty,
    /// The viewer browsing their own catalog: everything they own or hold a
    /// membership on, regardless of visibility flags.
    Owned {
        /// The authenticated viewer, who is also the catalog owner.
        viewer_id: i32,
        /// Set when the request named a single inventory.
        inventory: Option<InventoryModel>,
        /// The viewer's membership on the named inventory.
        membership: Option<MembershipModel>,
    },
    /// An authenticated viewer browsing someone else's catalog: public
    /// material plus every inventory the viewer holds a membership on.
    Shared {
        /// The authenticated viewer.
        viewer_id: i32,
        /// The user whose catalog is being browsed.
        owner_id: i32,
        /// Set when the request named a single inventory.
        inventory: Option<InventoryModel>,
        /// The viewer's membership on the named inventory, when one exists.
        membership: Option<MembershipModel>,
    },
    /// An anonymous viewer browsing an owner's catalog: only publicly exposed
    /// placements inside public inventories.
    PublicOnly {
        /// The user whose catalog is being browsed.
        owner_id: i32,
        /// Set when the request named a single (public) inventory.
        inventory: Option<InventoryModel>,
    },
}

impl ResolvedScope {
    /// Whether this scope can never match any item.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Whether only publicly exposed placements are reachable.
    pub fn public_only(&self) -> bool {
        matches!(self, Self::Empty | Self::PublicOnly { .. })
    }

    /// The authenticated viewer behind this scope, if any.
    pub fn viewer_id(&self) -> Option<i32> {
        match self {
            Self::Owned { viewer_id, .. } | Self::Shared { viewer_id, .. } => Some(*viewer_id),
            Self::Empty | Self::PublicOnly { .. } => None,
        }
    }

    /// The user whose items the scope ranges over, if one is fixed.
    pub fn owner_id(&self) -> Option<i32> {
        match self {
            Self::Owned { viewer_id, .. } => Some(*viewer_id),
            Self::Shared { owner_id, .. } | Self::PublicOnly { owner_id, .. } => Some(*owner_id),
            Self::Empty => None,
        }
    }

    /// The single inventory the scope was narrowed to, if any.
    pub fn inventory(&self) -> Option<&InventoryModel> {
        match self {
            Self::Owned { inventory, .. }
            | Self::Shared { inventory, .. }
            | Self::PublicOnly { inventory, .. } => inventory.as_ref(),
            Self::Empty => None,
        }
    }

    /// The viewer's membership row on the named inventory, if any.
    pub fn membership(&self) -> Option<&MembershipModel> {
        match self {
            Self::Owned { membership, .. } | Self::Shared { membership, .. } => membership.as_ref(),
            Self::Empty | Self::PublicOnly { .. } => None,
        }
    }
}
