//! Membership grants, removals, and invite links.

use entity::access_level::AccessLevel;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    data::{
        inventory::InventoryRepository, membership::MembershipRepository,
        notification::NotificationRepository, user::UserRepository,
    },
    error::Error,
    model::db::{InventoryModel, MembershipModel},
};

/// Grants and revokes inventory memberships and resolves invite links.
///
/// Every grant and join leaves an in-app notification for the affected
/// side, written in the same transaction as the membership row.
pub struct SharingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SharingService<'a> {
    /// Creates a new instance of [`SharingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Grants a user access to an inventory by username.
    ///
    /// # Behavior
    /// - Only the owner can share; a stranger is told the inventory does not
    ///   exist.
    /// - Owner is not a grantable level, and neither is the placement-only
    ///   Public level; the owner's row exists from creation and is unique.
    /// - Granting to a user who already holds a membership updates its
    ///   level instead of duplicating the row.
    /// - The recipient gets a notification from the actor.
    pub async fn add_member(
        &self,
        actor_id: i32,
        inventory_id: i32,
        username: &str,
        level: AccessLevel,
    ) -> Result<MembershipModel, Error> {
        match level {
            AccessLevel::Owner => {
                return Err(Error::Validation(
                    "The owner level cannot be granted".to_string(),
                ))
            }
            AccessLevel::Public => {
                return Err(Error::Validation(
                    "A membership cannot be granted at the public level".to_string(),
                ))
            }
            AccessLevel::Collaborator | AccessLevel::Viewer => {}
        }

        let txn = self.db.begin().await?;
        let inventory_repo = InventoryRepository::new(&txn);
        let membership_repo = MembershipRepository::new(&txn);
        let user_repo = UserRepository::new(&txn);

        let inventory = match inventory_repo.get(inventory_id).await? {
            Some(inventory) => inventory,
            None => {
                return Err(Error::NotFound(format!(
                    "No inventory with id {inventory_id} found"
                )))
            }
        };
        match membership_repo.get(actor_id, inventory.id).await? {
            None => {
                return Err(Error::NotFound(format!(
                    "No inventory with id {inventory_id} found"
                )))
            }
            Some(membership) if !membership.access_level.can_manage_members() => {
                return Err(Error::Denied(
                    "Only the owner can share this inventory".to_string(),
                ))
            }
            Some(_) => {}
        }

        let recipient = match user_repo.get_by_username(username).await? {
            Some(recipient) => recipient,
            None => {
                return Err(Error::NotFound(format!(
                    "No user named {username} found"
                )))
            }
        };
        if recipient.id == inventory.owner_id {
            return Err(Error::Conflict(format!(
                "\"{username}\" already owns this inventory"
            )));
        }

        let membership = match membership_repo.get(recipient.id, inventory.id).await? {
            Some(existing) => membership_repo.update_level(existing, level).await?,
            None => {
                membership_repo
                    .create(recipient.id, inventory.id, level)
                    .await?
            }
        };

        let actor = match user_repo.get(actor_id).await? {
            Some(actor) => actor,
            None => {
                return Err(Error::Db(DbErr::RecordNotFound(format!(
                    "User row missing for id {actor_id}"
                ))))
            }
        };
        let notification_repo = NotificationRepository::new(&txn);
        notification_repo
            .create(
                recipient.id,
                actor_id,
                &format!(
                    "{} shared the inventory \"{}\" with you",
                    actor.username, inventory.name
                ),
            )
            .await?;

        txn.commit().await?;

        Ok(membership)
    }

    /// Revokes a user's membership on an inventory.
    ///
    /// The owner can remove anyone; everyone else can only remove
    /// themselves. The owner's own membership row is not removable.
    pub async fn remove_member(
        &self,
        actor_id: i32,
        inventory_id: i32,
        user_id: i32,
    ) -> Result<(), Error> {
        let membership_repo = MembershipRepository::new(self.db);

        let membership = match membership_repo.get(user_id, inventory_id).await? {
            Some(membership) => membership,
            None => {
                return Err(Error::NotFound(
                    "That user does not have access to this inventory".to_string(),
                ))
            }
        };
        if membership.access_level == AccessLevel::Owner {
            return Err(Error::Validation(
                "The owner's membership cannot be removed".to_string(),
            ));
        }

        if actor_id != user_id {
            let actor_manages = membership_repo
                .get(actor_id, inventory_id)
                .await?
                .is_some_and(|actor| actor.access_level.can_manage_members());
            if !actor_manages {
                return Err(Error::Denied(
                    "Only the owner can remove other members".to_string(),
                ));
            }
        }

        membership_repo.delete(membership.id).await?;

        Ok(())
    }

    /// Joins an inventory through its secret share token.
    ///
    /// # Behavior
    /// - An unknown token is reported as a missing invite link; tokens are
    ///   rotatable, so stale links die silently.
    /// - A user who already holds a membership keeps it unchanged, without
    ///   a second notification to the owner.
    /// - New joiners come in as viewers and the owner is notified.
    ///
    /// # Returns
    /// - The joined inventory together with the caller's membership
    pub async fn join_by_token(
        &self,
        token: &str,
        user_id: i32,
    ) -> Result<(InventoryModel, MembershipModel), Error> {
        let txn = self.db.begin().await?;
        let inventory_repo = InventoryRepository::new(&txn);
        let membership_repo = MembershipRepository::new(&txn);

        let inventory = match inventory_repo.get_by_token(token).await? {
            Some(inventory) => inventory,
            None => {
                return Err(Error::NotFound(
                    "No inventory matches this invite link".to_string(),
                ))
            }
        };

        if let Some(existing) = membership_repo.get(user_id, inventory.id).await? {
            return Ok((inventory, existing));
        }

        let membership = membership_repo
            .create(user_id, inventory.id, AccessLevel::Viewer)
            .await?;

        let user_repo = UserRepository::new(&txn);
        let joiner = match user_repo.get(user_id).await? {
            Some(joiner) => joiner,
            None => {
                return Err(Error::Db(DbErr::RecordNotFound(format!(
                    "User row missing for id {user_id}"
                ))))
            }
        };
        let notification_repo = NotificationRepository::new(&txn);
        notification_repo
            .create(
                inventory.owner_id,
                user_id,
                &format!(
                    "{} joined your inventory \"{}\"",
                    joiner.username, inventory.name
                ),
            )
            .await?;

        txn.commit().await?;

        Ok((inventory, membership))
    }
}
