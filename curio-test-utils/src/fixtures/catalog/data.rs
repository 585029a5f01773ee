//! Catalog database insertion utilities.
//!
//! This module provides methods for inserting catalog records into the test
//! database with automatic parent entity creation: an item gets its owner's
//! sentinel type and location created on demand, an inventory gets its owner
//! membership row, and get-or-create semantics avoid duplicate taxonomy rows.

use chrono::Utc;
use entity::access_level::AccessLevel;
use entity::inventory::InventoryVisibility;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter};

use crate::{
    error::TestError,
    fixtures::catalog::CatalogFixtures,
    model::{
        FieldModel, FieldTemplateModel, ImageModel, InventoryModel, ItemFieldModel, ItemModel,
        ItemTypeModel, LocationModel, MembershipModel, PlacementModel, TagModel,
    },
};

impl<'a> CatalogFixtures<'a> {
    /// Insert an inventory owned by `owner_id`, along with the owner's
    /// membership row.
    ///
    /// The slug is derived from the name. If the owner already has an
    /// inventory with that slug, returns the existing record.
    pub async fn insert_mock_inventory(
        &self,
        owner_id: i32,
        name: &str,
        visibility: InventoryVisibility,
    ) -> Result<InventoryModel, TestError> {
        let slug = name.to_lowercase().replace(' ', "-");

        if let Some(existing_inventory) = entity::prelude::Inventory::find()
            .filter(entity::inventory::Column::OwnerId.eq(owner_id))
            .filter(entity::inventory::Column::Slug.eq(&slug))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_inventory);
        }

        let inventory = entity::prelude::Inventory::insert(entity::inventory::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            slug: ActiveValue::Set(slug.clone()),
            description: ActiveValue::Set(String::new()),
            owner_id: ActiveValue::Set(owner_id),
            visibility: ActiveValue::Set(visibility),
            token: ActiveValue::Set(format!("{owner_id}-{slug}-token")),
            short_code: ActiveValue::Set(format!("{owner_id}-{slug}")),
            is_default: ActiveValue::Set(false),
            field_template_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?;

        self.insert_membership(owner_id, inventory.id, AccessLevel::Owner)
            .await?;

        Ok(inventory)
    }

    /// Insert a membership row, or update the level of an existing one.
    pub async fn insert_membership(
        &self,
        user_id: i32,
        inventory_id: i32,
        access_level: AccessLevel,
    ) -> Result<MembershipModel, TestError> {
        if let Some(existing_membership) = entity::prelude::Membership::find()
            .filter(entity::membership::Column::UserId.eq(user_id))
            .filter(entity::membership::Column::InventoryId.eq(inventory_id))
            .one(&self.setup.db)
            .await?
        {
            let mut membership_am = existing_membership.into_active_model();
            membership_am.access_level = ActiveValue::Set(access_level);
            return Ok(membership_am.update(&self.setup.db).await?);
        }

        Ok(
            entity::prelude::Membership::insert(entity::membership::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                inventory_id: ActiveValue::Set(inventory_id),
                access_level: ActiveValue::Set(access_level),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an item type for `user_id`, returning the existing row when one
    /// with the same name already exists.
    pub async fn insert_mock_item_type(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<ItemTypeModel, TestError> {
        if let Some(existing_type) = entity::prelude::ItemType::find()
            .filter(entity::item_type::Column::UserId.eq(user_id))
            .filter(entity::item_type::Column::Name.eq(name))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_type);
        }

        Ok(
            entity::prelude::ItemType::insert(entity::item_type::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                user_id: ActiveValue::Set(user_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a location for `user_id`, returning the existing row when one
    /// with the same name already exists.
    pub async fn insert_mock_location(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<LocationModel, TestError> {
        if let Some(existing_location) = entity::prelude::Location::find()
            .filter(entity::location::Column::UserId.eq(user_id))
            .filter(entity::location::Column::Name.eq(name))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_location);
        }

        Ok(
            entity::prelude::Location::insert(entity::location::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                user_id: ActiveValue::Set(user_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an item owned by `user_id`, creating the owner's sentinel type
    /// and location on demand. The slug is assigned from the generated id.
    pub async fn insert_mock_item(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<ItemModel, TestError> {
        let item_type = self.insert_mock_item_type(user_id, "none").await?;
        let location = self.insert_mock_location(user_id, "None").await?;

        let item = entity::prelude::Item::insert(entity::item::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            slug: ActiveValue::Set(String::new()),
            description: ActiveValue::Set(String::new()),
            quantity: ActiveValue::Set(1),
            item_type_id: ActiveValue::Set(item_type.id),
            location_id: ActiveValue::Set(location.id),
            specific_location: ActiveValue::Set(String::new()),
            user_id: ActiveValue::Set(user_id),
            main_image: ActiveValue::Set(None),
            short_code: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?;

        let slug = format!("{}-{}", item.id, name.to_lowercase().replace(' ', "-"));
        let short_code = format!("i{}sc", item.id);
        let mut item_am = item.into_active_model();
        item_am.slug = ActiveValue::Set(slug);
        item_am.short_code = ActiveValue::Set(short_code);

        Ok(item_am.update(&self.setup.db).await?)
    }

    /// Insert an item owned by `user_id` with its home placement in
    /// `inventory_id` at level `Owner`.
    pub async fn insert_mock_item_in(
        &self,
        user_id: i32,
        inventory_id: i32,
        name: &str,
    ) -> Result<(ItemModel, PlacementModel), TestError> {
        let item = self.insert_mock_item(user_id, name).await?;
        let placement = self
            .insert_placement(inventory_id, item.id, AccessLevel::Owner, false)
            .await?;

        Ok((item, placement))
    }

    /// Insert a placement row joining `item_id` into `inventory_id`.
    pub async fn insert_placement(
        &self,
        inventory_id: i32,
        item_id: i32,
        access_level: AccessLevel,
        is_link: bool,
    ) -> Result<PlacementModel, TestError> {
        Ok(
            entity::prelude::InventoryItem::insert(entity::inventory_item::ActiveModel {
                inventory_id: ActiveValue::Set(inventory_id),
                item_id: ActiveValue::Set(item_id),
                access_level: ActiveValue::Set(access_level),
                is_link: ActiveValue::Set(is_link),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a tag for `user_id`, returning the existing row when the value
    /// is already taken.
    pub async fn insert_mock_tag(&self, user_id: i32, value: &str) -> Result<TagModel, TestError> {
        if let Some(existing_tag) = entity::prelude::Tag::find()
            .filter(entity::tag::Column::UserId.eq(user_id))
            .filter(entity::tag::Column::Value.eq(value))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_tag);
        }

        Ok(entity::prelude::Tag::insert(entity::tag::ActiveModel {
            value: ActiveValue::Set(value.to_string()),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Attach a tag to an item.
    pub async fn tag_item(&self, item_id: i32, tag_id: i32) -> Result<(), TestError> {
        entity::prelude::ItemTag::insert(entity::item_tag::ActiveModel {
            item_id: ActiveValue::Set(item_id),
            tag_id: ActiveValue::Set(tag_id),
        })
        .exec(&self.setup.db)
        .await?;

        Ok(())
    }

    /// Insert both rows of a symmetric item relation.
    pub async fn relate_pair(&self, item_id: i32, related_item_id: i32) -> Result<(), TestError> {
        entity::prelude::RelatedItem::insert_many([
            entity::related_item::ActiveModel {
                item_id: ActiveValue::Set(item_id),
                related_item_id: ActiveValue::Set(related_item_id),
            },
            entity::related_item::ActiveModel {
                item_id: ActiveValue::Set(related_item_id),
                related_item_id: ActiveValue::Set(item_id),
            },
        ])
        .exec(&self.setup.db)
        .await?;

        Ok(())
    }

    /// Insert a custom field definition for `user_id`, returning the existing
    /// row when the slug is already taken.
    pub async fn insert_mock_field(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<FieldModel, TestError> {
        let slug = name.to_lowercase().replace(' ', "-");

        if let Some(existing_field) = entity::prelude::Field::find()
            .filter(entity::field::Column::UserId.eq(user_id))
            .filter(entity::field::Column::Slug.eq(&slug))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_field);
        }

        Ok(entity::prelude::Field::insert(entity::field::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            slug: ActiveValue::Set(slug),
            kind: ActiveValue::Set("text".to_string()),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a custom field value on an item.
    pub async fn set_item_field(
        &self,
        item_id: i32,
        field_id: i32,
        user_id: i32,
        value: &str,
        visible: bool,
    ) -> Result<ItemFieldModel, TestError> {
        Ok(
            entity::prelude::ItemField::insert(entity::item_field::ActiveModel {
                field_id: ActiveValue::Set(field_id),
                item_id: ActiveValue::Set(item_id),
                value: ActiveValue::Set(value.to_string()),
                visible: ActiveValue::Set(visible),
                user_id: ActiveValue::Set(user_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a field template with the given fields, in order.
    pub async fn insert_mock_template(
        &self,
        user_id: i32,
        name: &str,
        field_ids: &[i32],
    ) -> Result<FieldTemplateModel, TestError> {
        let template =
            entity::prelude::FieldTemplate::insert(entity::field_template::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                user_id: ActiveValue::Set(user_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?;

        for (position, field_id) in field_ids.iter().enumerate() {
            entity::prelude::TemplateField::insert(entity::template_field::ActiveModel {
                template_id: ActiveValue::Set(template.id),
                field_id: ActiveValue::Set(*field_id),
                position: ActiveValue::Set(position as i32),
            })
            .exec(&self.setup.db)
            .await?;
        }

        Ok(template)
    }

    /// Insert an image record and attach it to an item.
    pub async fn insert_mock_image(
        &self,
        user_id: i32,
        item_id: i32,
        file_name: &str,
    ) -> Result<ImageModel, TestError> {
        let image = entity::prelude::Image::insert(entity::image::ActiveModel {
            file_name: ActiveValue::Set(file_name.to_string()),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?;

        entity::prelude::ItemImage::insert(entity::item_image::ActiveModel {
            item_id: ActiveValue::Set(item_id),
            image_id: ActiveValue::Set(image.id),
        })
        .exec(&self.setup.db)
        .await?;

        Ok(image)
    }

    /// Attach an existing image to a further item.
    pub async fn attach_image(&self, item_id: i32, image_id: i32) -> Result<(), TestError> {
        entity::prelude::ItemImage::insert(entity::item_image::ActiveModel {
            item_id: ActiveValue::Set(item_id),
            image_id: ActiveValue::Set(image_id),
        })
        .exec(&self.setup.db)
        .await?;

        Ok(())
    }
}
