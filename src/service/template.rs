//! Custom field definitions and field templates.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        field::{FieldRepository, ItemFieldRepository},
        inventory::InventoryRepository,
        item::ItemRepository,
        placement::PlacementRepository,
        template::TemplateRepository,
    },
    error::Error,
    model::db::{FieldModel, FieldTemplateModel},
    util::text,
};

/// Manages custom field definitions and the templates that bundle them.
///
/// Attaching a template to an inventory drives which field rows are visible
/// on the items placed there; values are never destroyed by template
/// changes, only hidden.
pub struct TemplateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TemplateService<'a> {
    /// Creates a new instance of [`TemplateService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a field definition for the actor.
    ///
    /// The slug is derived from the name and doubles as the field's search
    /// modifier, so it must be unique among the actor's fields.
    pub async fn create_field(&self, actor_id: i32, name: &str) -> Result<FieldModel, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("A field needs a name".to_string()));
        }
        let slug = text::slugify(name);
        if slug.is_empty() {
            return Err(Error::Validation(
                "The name needs at least one letter or digit".to_string(),
            ));
        }

        let field_repo = FieldRepository::new(self.db);
        if field_repo.get_by_slug(actor_id, &slug).await?.is_some() {
            return Err(Error::Conflict(format!(
                "You already have a field named \"{name}\""
            )));
        }

        Ok(field_repo.create(actor_id, name).await?)
    }

    /// Lists the actor's field definitions in name order.
    pub async fn list_fields(&self, actor_id: i32) -> Result<Vec<FieldModel>, Error> {
        let field_repo = FieldRepository::new(self.db);

        Ok(field_repo.list_for_user(actor_id).await?)
    }

    /// Renames a field the actor owns, re-deriving its slug.
    pub async fn rename_field(
        &self,
        actor_id: i32,
        field_id: i32,
        name: &str,
    ) -> Result<FieldModel, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("A field needs a name".to_string()));
        }
        let slug = text::slugify(name);
        if slug.is_empty() {
            return Err(Error::Validation(
                "The name needs at least one letter or digit".to_string(),
            ));
        }

        let field_repo = FieldRepository::new(self.db);
        let field = match field_repo.get(field_id).await? {
            Some(field) => field,
            None => {
                return Err(Error::NotFound(format!(
                    "No field with id {field_id} found"
                )))
            }
        };
        if field.user_id != actor_id {
            return Err(Error::Denied("You do not own this field".to_string()));
        }
        if let Some(existing) = field_repo.get_by_slug(actor_id, &slug).await? {
            if existing.id != field.id {
                return Err(Error::Conflict(format!(
                    "You already have a field named \"{name}\""
                )));
            }
        }

        Ok(field_repo.rename(field, name).await?)
    }

    /// Deletes a field definition together with its values everywhere.
    ///
    /// # Behavior
    /// - Every item_field row carrying the field is removed.
    /// - The field is dropped from every template that bundles it.
    ///
    /// # Returns
    /// - `u64` - How many item values were removed
    pub async fn delete_field(&self, actor_id: i32, field_id: i32) -> Result<u64, Error> {
        let txn = self.db.begin().await?;
        let field_repo = FieldRepository::new(&txn);

        let field = match field_repo.get(field_id).await? {
            Some(field) => field,
            None => {
                return Err(Error::NotFound(format!(
                    "No field with id {field_id} found"
                )))
            }
        };
        if field.user_id != actor_id {
            return Err(Error::Denied("You do not own this field".to_string()));
        }

        let item_field_repo = ItemFieldRepository::new(&txn);
        let values_removed = item_field_repo.delete_for_field(field.id).await?;
        let template_repo = TemplateRepository::new(&txn);
        template_repo.remove_field_everywhere(field.id).await?;
        field_repo.delete(field.id).await?;

        txn.commit().await?;

        Ok(values_removed)
    }

    /// Creates a template bundling the given fields, in order.
    ///
    /// Every field must belong to the actor.
    pub async fn create_template(
        &self,
        actor_id: i32,
        name: &str,
        field_ids: &[i32],
    ) -> Result<FieldTemplateModel, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("A template needs a name".to_string()));
        }

        let txn = self.db.begin().await?;
        let field_repo = FieldRepository::new(&txn);
        for &field_id in field_ids {
            match field_repo.get(field_id).await? {
                Some(field) if field.user_id == actor_id => {}
                Some(_) => {
                    return Err(Error::Denied("You do not own this field".to_string()));
                }
                None => {
                    return Err(Error::NotFound(format!(
                        "No field with id {field_id} found"
                    )))
                }
            }
        }

        let template_repo = TemplateRepository::new(&txn);
        let template = template_repo.create(actor_id, name).await?;
        template_repo.set_fields(template.id, field_ids).await?;

        txn.commit().await?;

        Ok(template)
    }

    /// Lists the actor's templates in name order.
    pub async fn list_templates(&self, actor_id: i32) -> Result<Vec<FieldTemplateModel>, Error> {
        let template_repo = TemplateRepository::new(self.db);

        Ok(template_repo.list_for_user(actor_id).await?)
    }

    /// Renames a template the actor owns.
    pub async fn rename_template(
        &self,
        actor_id: i32,
        template_id: i32,
        name: &str,
    ) -> Result<FieldTemplateModel, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("A template needs a name".to_string()));
        }

        let template_repo = TemplateRepository::new(self.db);
        let template = self.owned_template(&template_repo, actor_id, template_id).await?;

        Ok(template_repo.rename(template, name).await?)
    }

    /// Replaces a template's field set, keeping the given order.
    pub async fn set_template_fields(
        &self,
        actor_id: i32,
        template_id: i32,
        field_ids: &[i32],
    ) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let template_repo = TemplateRepository::new(&txn);

        let template = self.owned_template(&template_repo, actor_id, template_id).await?;
        let field_repo = FieldRepository::new(&txn);
        for &field_id in field_ids {
            match field_repo.get(field_id).await? {
                Some(field) if field.user_id == actor_id => {}
                Some(_) => {
                    return Err(Error::Denied("You do not own this field".to_string()));
                }
                None => {
                    return Err(Error::NotFound(format!(
                        "No field with id {field_id} found"
                    )))
                }
            }
        }
        template_repo.set_fields(template.id, field_ids).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Deletes a template, detaching it from every inventory first.
    ///
    /// # Returns
    /// - `u64` - How many inventories had the template attached
    pub async fn delete_template(&self, actor_id: i32, template_id: i32) -> Result<u64, Error> {
        let txn = self.db.begin().await?;
        let template_repo = TemplateRepository::new(&txn);

        let template = self.owned_template(&template_repo, actor_id, template_id).await?;

        let inventory_repo = InventoryRepository::new(&txn);
        let detached = inventory_repo.detach_template_everywhere(template.id).await?;
        template_repo.delete(template.id).await?;

        txn.commit().await?;

        Ok(detached)
    }

    /// Attaches a template to an inventory and propagates it to the items
    /// placed there.
    ///
    /// # Behavior
    /// - The actor must own both the inventory and the template.
    /// - Every item currently placed in the inventory, links included, gets
    ///   a visible row for each template field; missing rows are created
    ///   blank.
    /// - Rows for fields outside the template are hidden, keeping their
    ///   values.
    ///
    /// # Returns
    /// - `u64` - How many items were brought in line with the template
    pub async fn attach(
        &self,
        actor_id: i32,
        inventory_id: i32,
        template_id: i32,
    ) -> Result<u64, Error> {
        let txn = self.db.begin().await?;
        let inventory_repo = InventoryRepository::new(&txn);
        let template_repo = TemplateRepository::new(&txn);

        let inventory = match inventory_repo.get(inventory_id).await? {
            Some(inventory) => inventory,
            None => {
                return Err(Error::NotFound(format!(
                    "No inventory with id {inventory_id} found"
                )))
            }
        };
        if inventory.owner_id != actor_id {
            return Err(Error::Denied(
                "Only the owner can attach a template".to_string(),
            ));
        }
        let template = self.owned_template(&template_repo, actor_id, template_id).await?;

        let inventory = inventory_repo
            .set_field_template(inventory, Some(template.id))
            .await?;

        let field_ids = template_repo.list_field_ids(template.id).await?;
        let placement_repo = PlacementRepository::new(&txn);
        let item_repo = ItemRepository::new(&txn);
        let item_field_repo = ItemFieldRepository::new(&txn);

        let mut touched = 0;
        for item_id in placement_repo.list_item_ids(inventory.id).await? {
            let item = match item_repo.get(item_id).await? {
                Some(item) => item,
                None => continue,
            };
            for &field_id in &field_ids {
                if item_field_repo.get(item.id, field_id).await?.is_none() {
                    item_field_repo
                        .set_value(item.user_id, item.id, field_id, "", true)
                        .await?;
                }
            }
            item_field_repo.set_visibility(item.id, &field_ids, true).await?;
            item_field_repo.hide_not_in(item.id, &field_ids).await?;
            touched += 1;
        }

        txn.commit().await?;

        Ok(touched)
    }

    /// Detaches the template from an inventory.
    ///
    /// Owner-only. Field rows and their visibility flags stay as they are;
    /// only the reference goes away.
    pub async fn detach(&self, actor_id: i32, inventory_id: i32) -> Result<(), Error> {
        let inventory_repo = InventoryRepository::new(self.db);
        let inventory = match inventory_repo.get(inventory_id).await? {
            Some(inventory) => inventory,
            None => {
                return Err(Error::NotFound(format!(
                    "No inventory with id {inventory_id} found"
                )))
            }
        };
        if inventory.owner_id != actor_id {
            return Err(Error::Denied(
                "Only the owner can detach a template".to_string(),
            ));
        }

        inventory_repo.set_field_template(inventory, None).await?;

        Ok(())
    }

    async fn owned_template<C: sea_orm::ConnectionTrait>(
        &self,
        template_repo: &TemplateRepository<'_, C>,
        actor_id: i32,
        template_id: i32,
    ) -> Result<FieldTemplateModel, Error> {
        let template = match template_repo.get(template_id).await? {
            Some(template) => template,
            None => {
                return Err(Error::NotFound(format!(
                    "No template with id {template_id} found"
                )))
            }
        };
        if template.user_id != actor_id {
            return Err(Error::Denied("You do not own this template".to_string()));
        }

        Ok(template)
    }
}
