//! The single access-level ordering used by memberships and item placements.

use sea_orm::entity::prelude::*;

/// Privilege rungs shared by inventory memberships and item placements.
///
/// The order is total: a smaller stored value means a more privileged level,
/// so `Owner < Collaborator < Viewer < Public` under the derived `Ord`.
/// `Public` is the rung an anonymous visitor occupies; it is never stored on
/// a real membership row, only on item placements to mark them world-visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum AccessLevel {
    #[sea_orm(num_value = 0)]
    Owner,
    #[sea_orm(num_value = 1)]
    Collaborator,
    #[sea_orm(num_value = 2)]
    Viewer,
    #[sea_orm(num_value = 3)]
    Public,
}

impl AccessLevel {
    /// Whether this level may create, edit, or relocate items in an inventory.
    pub fn can_write(self) -> bool {
        matches!(self, Self::Owner | Self::Collaborator)
    }

    /// Whether this level may grant or revoke other users' memberships.
    pub fn can_manage_members(self) -> bool {
        matches!(self, Self::Owner)
    }

    /// Binding level for one (viewer, item) visibility decision.
    ///
    /// An explicit membership and an open placement each grant visibility on
    /// their own; the more permissive of the two binds. Without a membership
    /// only a `Public` placement grants anything, and what it grants is
    /// `Public`-level visibility.
    pub fn effective(membership: Option<Self>, link: Self) -> Option<Self> {
        match membership {
            Some(level) => Some(level.min(link)),
            None => (link == Self::Public).then_some(Self::Public),
        }
    }
}
