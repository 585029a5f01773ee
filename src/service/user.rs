//! Account registration, activation, and password recovery.

use entity::access_level::AccessLevel;
use entity::inventory::InventoryVisibility;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        inventory::{InventoryRepository, NewInventory},
        item_type::ItemTypeRepository,
        location::LocationRepository,
        membership::MembershipRepository,
        user::UserRepository,
    },
    error::Error,
    model::db::UserModel,
    service::taxonomy::{SENTINEL_LOCATION_NAME, SENTINEL_TYPE_NAME},
    util::{code, images::ImageStore},
};

/// Registers accounts and walks them through activation and password
/// recovery.
///
/// Password hashing happens upstream; this service only ever sees and
/// stores hashes. Activation and reset links share the user's single
/// ephemeral token column, so issuing either kind invalidates the other.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    images: &'a ImageStore,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection, images: &'a ImageStore) -> Self {
        Self { db, images }
    }

    /// Registers a new, unactivated account.
    ///
    /// # Behavior
    /// - Username and email must be unused; the returned user carries the
    ///   activation token to be mailed out.
    /// - The signup furniture is written in the same transaction: the hidden
    ///   default inventory with its owner membership, and the sentinel item
    ///   type and location.
    /// - The per-user image directory is created after commit, best-effort;
    ///   uploads recreate it on demand.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<UserModel, Error> {
        let username = username.trim();
        if username.is_empty() {
            return Err(Error::Validation("A username is required".to_string()));
        }
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(Error::Validation(
                "A valid email address is required".to_string(),
            ));
        }
        if password_hash.is_empty() {
            return Err(Error::Validation("A password is required".to_string()));
        }

        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        if user_repo.get_by_username(username).await?.is_some() {
            return Err(Error::Conflict("Username taken".to_string()));
        }
        if user_repo.get_by_email(email).await?.is_some() {
            return Err(Error::Conflict("Email taken".to_string()));
        }

        let user = user_repo
            .create(username, email, password_hash, &code::share_token())
            .await?;

        let inventory_repo = InventoryRepository::new(&txn);
        let default_inventory = inventory_repo
            .create(NewInventory {
                name: "default".to_string(),
                slug: "default".to_string(),
                description: String::new(),
                owner_id: user.id,
                visibility: InventoryVisibility::Private,
                token: code::share_token(),
                short_code: code::short_code(),
                is_default: true,
            })
            .await?;
        let membership_repo = MembershipRepository::new(&txn);
        membership_repo
            .create(user.id, default_inventory.id, AccessLevel::Owner)
            .await?;
        let item_type_repo = ItemTypeRepository::new(&txn);
        item_type_repo.create(user.id, SENTINEL_TYPE_NAME).await?;
        let location_repo = LocationRepository::new(&txn);
        location_repo.create(user.id, SENTINEL_LOCATION_NAME).await?;

        txn.commit().await?;

        if let Err(error) = self.images.ensure_user_dir(user.id) {
            tracing::warn!(
                "Failed to create the image directory for user {}: {}",
                user.id, error
            );
        }

        Ok(user)
    }

    /// Activates the account behind an activation token.
    ///
    /// The token is single-use; activation clears it. A token pointing at
    /// an already activated account counts as invalid.
    pub async fn activate(&self, token: &str) -> Result<UserModel, Error> {
        let user_repo = UserRepository::new(self.db);
        let user = match user_repo.get_by_token(token).await? {
            Some(user) => user,
            None => {
                return Err(Error::NotFound(
                    "The activation link is not valid".to_string(),
                ))
            }
        };
        if user.activated {
            return Err(Error::NotFound(
                "The activation link is not valid".to_string(),
            ));
        }

        Ok(user_repo.activate(user).await?)
    }

    /// Issues a password reset token for the account behind an email
    /// address.
    ///
    /// The returned user carries the token to be mailed out; any previous
    /// token is replaced.
    pub async fn start_password_reset(&self, email: &str) -> Result<UserModel, Error> {
        let user_repo = UserRepository::new(self.db);
        let user = match user_repo.get_by_email(email.trim()).await? {
            Some(user) => user,
            None => {
                return Err(Error::NotFound(
                    "No account uses this email address".to_string(),
                ))
            }
        };

        Ok(user_repo.set_token(user, &code::share_token()).await?)
    }

    /// Replaces the password behind a reset token.
    ///
    /// Only activated accounts can reset; the token is cleared with the
    /// password change.
    pub async fn reset_password(
        &self,
        token: &str,
        password_hash: &str,
    ) -> Result<UserModel, Error> {
        if password_hash.is_empty() {
            return Err(Error::Validation("A password is required".to_string()));
        }

        let user_repo = UserRepository::new(self.db);
        let user = match user_repo.get_by_token(token).await? {
            Some(user) => user,
            None => return Err(Error::NotFound("The reset link is not valid".to_string())),
        };
        if !user.activated {
            return Err(Error::Denied(
                "This account has not been activated".to_string(),
            ));
        }

        Ok(user_repo.set_password(user, password_hash).await?)
    }
}
