//! Item creation, editing, deletion, and image bookkeeping.

use entity::access_level::AccessLevel;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        field::{FieldRepository, ItemFieldRepository},
        image::ImageRepository,
        item::{ItemChanges, ItemRepository, NewItem},
        item_type::ItemTypeRepository,
        location::LocationRepository,
        placement::PlacementRepository,
        relation::RelationRepository,
        tag::TagRepository,
    },
    error::Error,
    model::{
        db::{ImageModel, ItemModel},
        item::{DeletionReport, ItemDraft, ItemPatch, ALL_ITEMS},
    },
    service::placement::{owned_item, writable_destination},
    service::taxonomy::{SENTINEL_LOCATION_NAME, SENTINEL_TYPE_NAME},
    util::{code, images::ImageStore},
};

/// Creates, edits, and deletes items, including their tags, custom field
/// values, and image attachments.
pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
    images: &'a ImageStore,
}

impl<'a> ItemService<'a> {
    /// Creates a new instance of [`ItemService`]
    pub fn new(db: &'a DatabaseConnection, images: &'a ImageStore) -> Self {
        Self { db, images }
    }

    /// Creates an item from a draft, homed in the given inventory.
    ///
    /// # Behavior
    /// - The type name is resolved case-insensitively against the actor's
    ///   types and created on demand; a missing type falls back to the
    ///   sentinel `"none"` type, a missing location to the sentinel `"None"`
    ///   location.
    /// - The item's home placement lands in the destination at level
    ///   `Owner`; `None` targets the actor's default inventory.
    /// - Tags and custom fields named in the draft are created on demand.
    ///
    /// # Arguments
    /// - `actor_id` - The acting user, who becomes the item's owner
    /// - `draft` - Name, description, taxonomy, tags, and field values
    /// - `inventory_id` - Where the home placement lands, or `None` for the
    ///   default inventory
    ///
    /// # Returns
    /// - `ItemModel` - The created item, slug and short code assigned
    pub async fn create_item(
        &self,
        actor_id: i32,
        draft: ItemDraft,
        inventory_id: Option<i32>,
    ) -> Result<ItemModel, Error> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(Error::Validation("An item needs a name".to_string()));
        }
        let quantity = draft.quantity.unwrap_or(1);
        if quantity < 0 {
            return Err(Error::Validation(
                "The quantity cannot be negative".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let destination = writable_destination(&txn, actor_id, inventory_id).await?;

        let item_type_repo = ItemTypeRepository::new(&txn);
        let type_name = draft
            .item_type
            .as_deref()
            .map(str::trim)
            .filter(|type_name| !type_name.is_empty())
            .unwrap_or(SENTINEL_TYPE_NAME);
        let item_type = item_type_repo.get_or_create(actor_id, type_name).await?;

        let location_repo = LocationRepository::new(&txn);
        let location_id = match draft.location_id {
            Some(location_id) => {
                let location = match location_repo.get(location_id).await? {
                    Some(location) => location,
                    None => {
                        return Err(Error::NotFound(format!(
                            "No location with id {location_id} found"
                        )))
                    }
                };
                if location.user_id != actor_id {
                    return Err(Error::Denied(format!(
                        "You do not own the location \"{}\"",
                        location.name
                    )));
                }
                location.id
            }
            None => {
                location_repo
                    .get_or_create(actor_id, SENTINEL_LOCATION_NAME)
                    .await?
                    .id
            }
        };

        let item_repo = ItemRepository::new(&txn);
        let item = item_repo
            .create(NewItem {
                name: name.to_string(),
                description: draft.description.unwrap_or_default(),
                quantity,
                item_type_id: item_type.id,
                location_id,
                specific_location: draft.specific_location.unwrap_or_default(),
                user_id: actor_id,
                short_code: code::short_code(),
            })
            .await?;

        let placement_repo = PlacementRepository::new(&txn);
        placement_repo
            .create(destination.id, item.id, AccessLevel::Owner, false)
            .await?;

        let tag_repo = TagRepository::new(&txn);
        for value in draft
            .tags
            .iter()
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
        {
            let tag = tag_repo.get_or_create(actor_id, value).await?;
            tag_repo.attach(item.id, tag.id).await?;
        }

        let field_repo = FieldRepository::new(&txn);
        let item_field_repo = ItemFieldRepository::new(&txn);
        for input in &draft.fields {
            let field_name = input.name.trim();
            if field_name.is_empty() {
                continue;
            }
            let field = field_repo.get_or_create(actor_id, field_name).await?;
            item_field_repo
                .set_value(actor_id, item.id, field.id, &input.value, input.visible)
                .await?;
        }

        txn.commit().await?;

        Ok(item)
    }

    /// Applies a patch to an item the actor owns.
    ///
    /// # Behavior
    /// - `None` fields are left unchanged; a new name re-derives the slug.
    /// - A `Some` tag or field list replaces the item's whole set. Field
    ///   rows missing from the list are deleted, values included.
    ///
    /// # Arguments
    /// - `actor_id` - The acting user, who must own the item
    /// - `item_id` - The item to change
    /// - `patch` - The changes to apply
    ///
    /// # Returns
    /// - `ItemModel` - The updated item
    pub async fn update_item(
        &self,
        actor_id: i32,
        item_id: i32,
        patch: ItemPatch,
    ) -> Result<ItemModel, Error> {
        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                return Err(Error::Validation("An item needs a name".to_string()));
            }
        }
        if let Some(quantity) = patch.quantity {
            if quantity < 0 {
                return Err(Error::Validation(
                    "The quantity cannot be negative".to_string(),
                ));
            }
        }

        let txn = self.db.begin().await?;
        let item = owned_item(&txn, actor_id, item_id).await?;

        let item_type_id = match patch.item_type.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(type_name) => {
                let item_type_repo = ItemTypeRepository::new(&txn);
                Some(item_type_repo.get_or_create(actor_id, type_name).await?.id)
            }
        };
        let location_id = match patch.location_id {
            Some(location_id) => {
                let location_repo = LocationRepository::new(&txn);
                let location = match location_repo.get(location_id).await? {
                    Some(location) => location,
                    None => {
                        return Err(Error::NotFound(format!(
                            "No location with id {location_id} found"
                        )))
                    }
                };
                if location.user_id != actor_id {
                    return Err(Error::Denied(format!(
                        "You do not own the location \"{}\"",
                        location.name
                    )));
                }
                Some(location.id)
            }
            None => None,
        };

        let item_repo = ItemRepository::new(&txn);
        let item = item_repo
            .update(
                item,
                ItemChanges {
                    name: patch.name.map(|name| name.trim().to_string()),
                    description: patch.description,
                    quantity: patch.quantity,
                    item_type_id,
                    location_id,
                    specific_location: patch.specific_location,
                },
            )
            .await?;

        if let Some(tags) = patch.tags {
            let tag_repo = TagRepository::new(&txn);
            tag_repo.detach_all(item.id).await?;
            for value in tags
                .iter()
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
            {
                let tag = tag_repo.get_or_create(actor_id, value).await?;
                tag_repo.attach(item.id, tag.id).await?;
            }
        }

        if let Some(fields) = patch.fields {
            let field_repo = FieldRepository::new(&txn);
            let item_field_repo = ItemFieldRepository::new(&txn);
            let mut kept = Vec::new();
            for input in &fields {
                let field_name = input.name.trim();
                if field_name.is_empty() {
                    continue;
                }
                let field = field_repo.get_or_create(actor_id, field_name).await?;
                item_field_repo
                    .set_value(actor_id, item.id, field.id, &input.value, input.visible)
                    .await?;
                kept.push(field.id);
            }
            item_field_repo.delete_not_in(item.id, &kept).await?;
        }

        txn.commit().await?;

        Ok(item)
    }

    /// Deletes items in bulk, or detaches their links from one inventory.
    ///
    /// # Behavior
    /// - The sentinel [`ALL_ITEMS`] id expands to every item the actor owns,
    ///   narrowed to one inventory when `inventory_id` is set.
    /// - When an inventory is named and the item's row there is a secondary
    ///   link, only that link row is removed and the item survives. In every
    ///   other case the item is deleted outright with its placements,
    ///   relations, tags, field values, and image rows.
    /// - Image files are removed from disk only after the transaction
    ///   commits; failures are logged and counted, never fatal.
    ///
    /// # Arguments
    /// - `actor_id` - The acting user, who must own every targeted item
    /// - `item_ids` - Item ids, or a list containing [`ALL_ITEMS`]
    /// - `inventory_id` - The inventory the deletion was issued from, if any
    ///
    /// # Returns
    /// - `DeletionReport` - How many items were deleted, how many links
    ///   detached, and how many files could not be removed
    pub async fn delete_items(
        &self,
        actor_id: i32,
        item_ids: &[i32],
        inventory_id: Option<i32>,
    ) -> Result<DeletionReport, Error> {
        let txn = self.db.begin().await?;
        let item_repo = ItemRepository::new(&txn);

        let targets = if item_ids.contains(&ALL_ITEMS) {
            match inventory_id {
                Some(inventory_id) => {
                    item_repo
                        .list_ids_for_user_in_inventory(actor_id, inventory_id)
                        .await?
                }
                None => item_repo.list_ids_for_user(actor_id).await?,
            }
        } else {
            item_ids.to_vec()
        };

        let placement_repo = PlacementRepository::new(&txn);
        let relation_repo = RelationRepository::new(&txn);
        let tag_repo = TagRepository::new(&txn);
        let item_field_repo = ItemFieldRepository::new(&txn);
        let image_repo = ImageRepository::new(&txn);

        let mut report = DeletionReport::default();
        let mut removed_files = Vec::new();
        for item_id in targets {
            let item = owned_item(&txn, actor_id, item_id).await?;

            if let Some(inventory_id) = inventory_id {
                if let Some(placement) = placement_repo
                    .get_by_item_and_inventory(item.id, inventory_id)
                    .await?
                {
                    if placement.is_link {
                        placement_repo.delete(placement.id).await?;
                        report.links_detached += 1;
                        continue;
                    }
                }
            }

            relation_repo.delete_for_item(item.id).await?;
            tag_repo.detach_all(item.id).await?;
            item_field_repo.delete_for_item(item.id).await?;
            removed_files.extend(image_repo.delete_for_item(item.id).await?);
            placement_repo.delete_for_item(item.id).await?;
            item_repo.delete(item.id).await?;
            report.items_deleted += 1;
        }

        txn.commit().await?;

        // Files go only once the rows are durably gone.
        report.image_removal_failures = self
            .images
            .remove_all(actor_id, removed_files.iter().map(String::as_str));

        Ok(report)
    }

    /// Designates one of an item's attached images as its primary image, or
    /// clears the designation with `None`.
    pub async fn set_main_image(
        &self,
        actor_id: i32,
        item_id: i32,
        image_id: Option<i32>,
    ) -> Result<ItemModel, Error> {
        let item = owned_item(self.db, actor_id, item_id).await?;
        let item_repo = ItemRepository::new(self.db);

        let image_id = match image_id {
            Some(image_id) => image_id,
            None => return Ok(item_repo.set_main_image(item, None).await?),
        };

        let image_repo = ImageRepository::new(self.db);
        let image = match image_repo.get(image_id).await? {
            Some(image) => image,
            None => return Err(Error::NotFound(format!("No image with id {image_id} found"))),
        };
        if !image_repo.is_attached(item.id, image.id).await? {
            return Err(Error::Validation(
                "The image is not attached to this item".to_string(),
            ));
        }

        Ok(item_repo.set_main_image(item, Some(image.file_name)).await?)
    }

    /// Records uploaded image files and attaches them to an item.
    ///
    /// Byte handling happens before this call; the service only stores the
    /// file names and the join rows.
    pub async fn add_images(
        &self,
        actor_id: i32,
        item_id: i32,
        file_names: &[String],
    ) -> Result<Vec<ImageModel>, Error> {
        let txn = self.db.begin().await?;
        let item = owned_item(&txn, actor_id, item_id).await?;
        let image_repo = ImageRepository::new(&txn);

        let mut images = Vec::new();
        for file_name in file_names
            .iter()
            .map(|file_name| file_name.trim())
            .filter(|file_name| !file_name.is_empty())
        {
            let image = image_repo.create(actor_id, file_name).await?;
            image_repo.attach(item.id, image.id).await?;
            images.push(image);
        }

        txn.commit().await?;

        Ok(images)
    }

    /// Detaches images from an item, deleting rows and files that no other
    /// item still references.
    ///
    /// # Behavior
    /// - Images not attached to the item are skipped and not counted.
    /// - An image still attached elsewhere keeps its row and its file; only
    ///   the last detach removes them.
    /// - The item's primary image designation is cleared when it pointed at
    ///   a detached image.
    ///
    /// # Returns
    /// - `u64` - How many images were detached from the item
    pub async fn remove_images(
        &self,
        actor_id: i32,
        item_id: i32,
        image_ids: &[i32],
    ) -> Result<u64, Error> {
        let txn = self.db.begin().await?;
        let item = owned_item(&txn, actor_id, item_id).await?;
        let item_repo = ItemRepository::new(&txn);
        let image_repo = ImageRepository::new(&txn);

        let mut detached = 0;
        let mut detached_names = Vec::new();
        let mut removed_files = Vec::new();
        for &image_id in image_ids {
            let image = match image_repo.get(image_id).await? {
                Some(image) => image,
                None => {
                    return Err(Error::NotFound(format!(
                        "No image with id {image_id} found"
                    )))
                }
            };
            if image.user_id != actor_id {
                return Err(Error::Denied("You do not own this image".to_string()));
            }
            if image_repo.detach(item.id, image.id).await? == 0 {
                continue;
            }
            detached += 1;
            detached_names.push(image.file_name.clone());
            if image_repo.count_attachments(image.id).await? == 0 {
                removed_files.push(image_repo.delete_row(image).await?);
            }
        }

        let clear_main = item
            .main_image
            .as_deref()
            .is_some_and(|main| detached_names.iter().any(|name| name == main));
        if clear_main {
            item_repo.set_main_image(item, None).await?;
        }

        txn.commit().await?;

        self.images
            .remove_all(actor_id, removed_files.iter().map(String::as_str));

        Ok(detached)
    }
}
