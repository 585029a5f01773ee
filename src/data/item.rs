use chrono::Utc;
use entity::access_level::AccessLevel;
use entity::inventory::InventoryVisibility;
use migration::Expr;
use sea_orm::{
    sea_query::{Func, SelectStatement, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, ExprTrait, IntoActiveModel, IntoSimpleExpr, JoinType, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, RelationTrait, Select, SelectModel, Selector,
};

use crate::model::{
    db::ItemModel,
    item::{ItemKey, ItemRow, ItemSort, SortDirection, DEFAULT_PAGE_LENGTH},
};
use crate::util::text::slugify;

/// Column values for a new item row. The slug is derived from the generated
/// id plus the name, so it is assigned inside [`ItemRepository::create`].
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub item_type_id: i32,
    pub location_id: i32,
    pub specific_location: String,
    pub user_id: i32,
    pub short_code: String,
}

/// Column changes for an existing item; `None` fields are left as-is. A new
/// name re-derives the slug.
#[derive(Default)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub item_type_id: Option<i32>,
    pub location_id: Option<i32>,
    pub specific_location: Option<String>,
}

/// The placement rows an item listing is allowed to range over. Produced
/// from a resolved scope by the query service; every variant only ever
/// narrows the join of items against their placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeFilter {
    /// The viewer's own catalog: home placements of items the viewer owns or
    /// that sit in inventories the viewer holds a membership on.
    HomeRows {
        viewer_id: i32,
    },
    /// One inventory's placements, already access-checked by the resolver.
    /// With `public_rows_only` the viewer has no membership and sees just
    /// the publicly exposed rows.
    Inventory {
        inventory_id: i32,
        public_rows_only: bool,
    },
    /// An owner's catalog for a viewer with no memberships: publicly exposed
    /// placements inside public inventories only.
    OwnerPublic {
        owner_id: i32,
    },
    /// An owner's catalog for a logged-in viewer: public material plus every
    /// inventory the viewer holds a membership on.
    OwnerPublicOrMember {
        owner_id: i32,
        viewer_id: i32,
    },
}

/// Fully resolved input for an item listing: the scope, narrowed by
/// attribute, tag, and text predicates, with ordering and paging.
///
/// Tag values and field slugs have already been resolved to ids by the
/// service layer; unknown tags were dropped there.
#[derive(Debug, Clone)]
pub struct ItemSearchCriteria {
    pub scope: ScopeFilter,
    pub item_type_id: Option<i32>,
    pub location_id: Option<i32>,
    pub specific_location: Option<String>,
    pub tag_ids: Vec<i32>,
    pub text: Option<String>,
    pub location_text: Option<String>,
    pub type_text: Option<String>,
    pub field_value: Option<(i32, String)>,
    pub sort: ItemSort,
    pub direction: SortDirection,
    pub offset: u64,
    pub limit: u64,
}

impl ItemSearchCriteria {
    /// Criteria matching everything in `scope`, unsorted beyond the default
    /// name ordering, first page.
    pub fn within(scope: ScopeFilter) -> Self {
        Self {
            scope,
            item_type_id: None,
            location_id: None,
            specific_location: None,
            tag_ids: Vec::new(),
            text: None,
            location_text: None,
            type_text: None,
            field_value: None,
            sort: ItemSort::Name,
            direction: SortDirection::Ascending,
            offset: 0,
            limit: DEFAULT_PAGE_LENGTH,
        }
    }
}

pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    /// Creates a new instance of [`ItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an item and assigns its `"{id}-{slugified name}"` slug from
    /// the generated id
    pub async fn create(&self, new: NewItem) -> Result<ItemModel, DbErr> {
        let item = entity::item::ActiveModel {
            name: ActiveValue::Set(new.name),
            slug: ActiveValue::Set(String::new()),
            description: ActiveValue::Set(new.description),
            quantity: ActiveValue::Set(new.quantity),
            item_type_id: ActiveValue::Set(new.item_type_id),
            location_id: ActiveValue::Set(new.location_id),
            specific_location: ActiveValue::Set(new.specific_location),
            user_id: ActiveValue::Set(new.user_id),
            main_image: ActiveValue::Set(None),
            short_code: ActiveValue::Set(new.short_code),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        let item = item.insert(self.db).await?;

        let slug = format!("{}-{}", item.id, slugify(&item.name));
        let mut item_am = item.into_active_model();
        item_am.slug = ActiveValue::Set(slug);

        item_am.update(self.db).await
    }

    pub async fn get(&self, item_id: i32) -> Result<Option<ItemModel>, DbErr> {
        entity::prelude::Item::find_by_id(item_id).one(self.db).await
    }

    /// Lists the ids of every item a user owns
    pub async fn list_ids_for_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Item::find()
            .filter(entity::item::Column::UserId.eq(user_id))
            .select_only()
            .column(entity::item::Column::Id)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Lists the ids of every item a user owns that is placed in the given
    /// inventory
    pub async fn list_ids_for_user_in_inventory(
        &self,
        user_id: i32,
        inventory_id: i32,
    ) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Item::find()
            .join(JoinType::InnerJoin, entity::item::Relation::Placements.def())
            .filter(entity::item::Column::UserId.eq(user_id))
            .filter(entity::inventory_item::Column::InventoryId.eq(inventory_id))
            .select_only()
            .column(entity::item::Column::Id)
            .into_tuple()
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        item: ItemModel,
        changes: ItemChanges,
    ) -> Result<ItemModel, DbErr> {
        let item_id = item.id;
        let mut item_am = item.into_active_model();
        if let Some(name) = changes.name {
            item_am.slug = ActiveValue::Set(format!("{}-{}", item_id, slugify(&name)));
            item_am.name = ActiveValue::Set(name);
        }
        if let Some(description) = changes.description {
            item_am.description = ActiveValue::Set(description);
        }
        if let Some(quantity) = changes.quantity {
            item_am.quantity = ActiveValue::Set(quantity);
        }
        if let Some(item_type_id) = changes.item_type_id {
            item_am.item_type_id = ActiveValue::Set(item_type_id);
        }
        if let Some(location_id) = changes.location_id {
            item_am.location_id = ActiveValue::Set(location_id);
        }
        if let Some(specific_location) = changes.specific_location {
            item_am.specific_location = ActiveValue::Set(specific_location);
        }
        item_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        item_am.update(self.db).await
    }

    pub async fn set_main_image(
        &self,
        item: ItemModel,
        main_image: Option<String>,
    ) -> Result<ItemModel, DbErr> {
        let mut item_am = item.into_active_model();
        item_am.main_image = ActiveValue::Set(main_image);
        item_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        item_am.update(self.db).await
    }

    /// Re-points every item of `user_id` using `from_type_id` to
    /// `to_type_id`, returning how many rows changed
    pub async fn reassign_item_type(
        &self,
        user_id: i32,
        from_type_id: i32,
        to_type_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Item::update_many()
            .col_expr(entity::item::Column::ItemTypeId, Expr::value(to_type_id))
            .filter(entity::item::Column::UserId.eq(user_id))
            .filter(entity::item::Column::ItemTypeId.eq(from_type_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Re-points every item of `user_id` using `from_location_id` to
    /// `to_location_id`, returning how many rows changed
    pub async fn reassign_location(
        &self,
        user_id: i32,
        from_location_id: i32,
        to_location_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Item::update_many()
            .col_expr(entity::item::Column::LocationId, Expr::value(to_location_id))
            .filter(entity::item::Column::UserId.eq(user_id))
            .filter(entity::item::Column::LocationId.eq(from_location_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes an item row
    ///
    /// Returns OK regardless of the item existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, item_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Item::delete_by_id(item_id).exec(self.db).await
    }

    /// Runs an item listing: one [`ItemRow`] per placement matched by the
    /// criteria's scope and predicates, ordered and paged
    pub async fn search(&self, criteria: &ItemSearchCriteria) -> Result<Vec<ItemRow>, DbErr> {
        let select = Self::filtered(criteria);

        let order = match criteria.direction {
            SortDirection::Ascending => Order::Asc,
            SortDirection::Descending => Order::Desc,
        };
        let select = match criteria.sort {
            ItemSort::Name => select.order_by(entity::item::Column::Name, order),
            ItemSort::TypeName => select.order_by(entity::item_type::Column::Name, order),
            ItemSort::LocationName => select.order_by(entity::location::Column::Name, order),
        };

        Self::project(select.offset(criteria.offset).limit(criteria.limit))
            .all(self.db)
            .await
    }

    /// Counts the placements matched by the criteria's scope and predicates,
    /// ignoring paging
    pub async fn count(&self, criteria: &ItemSearchCriteria) -> Result<u64, DbErr> {
        Self::filtered(criteria).count(self.db).await
    }

    /// Finds a single item by id or slug, applying the same scope predicate
    /// as a listing; when the item is placed more than once within the
    /// scope, the home row wins
    pub async fn find_row(
        &self,
        scope: ScopeFilter,
        key: ItemKey<'_>,
    ) -> Result<Option<ItemRow>, DbErr> {
        let select = Self::apply_scope(Self::base_joins(), scope);
        let select = match key {
            ItemKey::Id(item_id) => select.filter(entity::item::Column::Id.eq(item_id)),
            ItemKey::Slug(slug) => select.filter(entity::item::Column::Slug.eq(slug)),
        };

        Self::project(select.order_by_asc(entity::inventory_item::Column::IsLink))
            .one(self.db)
            .await
    }

    fn filtered(criteria: &ItemSearchCriteria) -> Select<entity::item::Entity> {
        let mut select = Self::apply_scope(Self::base_joins(), criteria.scope);

        if let Some(item_type_id) = criteria.item_type_id {
            select = select.filter(entity::item::Column::ItemTypeId.eq(item_type_id));
        }
        if let Some(location_id) = criteria.location_id {
            select = select.filter(entity::item::Column::LocationId.eq(location_id));
        }
        if let Some(needle) = &criteria.specific_location {
            select = select.filter(ilike(entity::item::Column::SpecificLocation, needle));
        }
        // Conjunctive: each tag narrows the result on its own.
        for tag_id in &criteria.tag_ids {
            select = select.filter(
                entity::item::Column::Id.in_subquery(
                    entity::prelude::ItemTag::find()
                        .select_only()
                        .column(entity::item_tag::Column::ItemId)
                        .filter(entity::item_tag::Column::TagId.eq(*tag_id))
                        .into_query(),
                ),
            );
        }
        if let Some(needle) = &criteria.text {
            select = select.filter(
                Condition::any()
                    .add(ilike(entity::item::Column::Name, needle))
                    .add(ilike(entity::item::Column::Description, needle)),
            );
        }
        if let Some(needle) = &criteria.location_text {
            select = select.filter(
                Condition::any()
                    .add(ilike(entity::location::Column::Name, needle))
                    .add(ilike(entity::item::Column::SpecificLocation, needle)),
            );
        }
        if let Some(needle) = &criteria.type_text {
            select = select.filter(ilike(entity::item_type::Column::Name, needle));
        }
        if let Some((field_id, needle)) = &criteria.field_value {
            select = select.filter(
                entity::item::Column::Id.in_subquery(
                    entity::prelude::ItemField::find()
                        .select_only()
                        .column(entity::item_field::Column::ItemId)
                        .filter(entity::item_field::Column::FieldId.eq(*field_id))
                        .filter(ilike(entity::item_field::Column::Value, needle))
                        .into_query(),
                ),
            );
        }

        select
    }

    fn base_joins() -> Select<entity::item::Entity> {
        entity::prelude::Item::find()
            .join(JoinType::InnerJoin, entity::item::Relation::ItemType.def())
            .join(JoinType::InnerJoin, entity::item::Relation::Location.def())
            .join(JoinType::InnerJoin, entity::item::Relation::Placements.def())
            .join(
                JoinType::InnerJoin,
                entity::inventory_item::Relation::Inventory.def(),
            )
    }

    fn apply_scope(
        select: Select<entity::item::Entity>,
        scope: ScopeFilter,
    ) -> Select<entity::item::Entity> {
        match scope {
            ScopeFilter::HomeRows { viewer_id } => select
                .filter(entity::inventory_item::Column::IsLink.eq(false))
                .filter(
                    Condition::any()
                        .add(entity::item::Column::UserId.eq(viewer_id))
                        .add(
                            entity::inventory_item::Column::InventoryId
                                .in_subquery(member_inventories(viewer_id)),
                        ),
                ),
            ScopeFilter::Inventory {
                inventory_id,
                public_rows_only,
            } => {
                let select =
                    select.filter(entity::inventory_item::Column::InventoryId.eq(inventory_id));
                if public_rows_only {
                    select.filter(
                        entity::inventory_item::Column::AccessLevel.eq(AccessLevel::Public),
                    )
                } else {
                    select
                }
            }
            ScopeFilter::OwnerPublic { owner_id } => select
                .filter(entity::item::Column::UserId.eq(owner_id))
                .filter(public_placement()),
            ScopeFilter::OwnerPublicOrMember {
                owner_id,
                viewer_id,
            } => select
                .filter(entity::item::Column::UserId.eq(owner_id))
                .filter(
                    Condition::any().add(public_placement()).add(
                        entity::inventory_item::Column::InventoryId
                            .in_subquery(member_inventories(viewer_id)),
                    ),
                ),
        }
    }

    fn project(select: Select<entity::item::Entity>) -> Selector<SelectModel<ItemRow>> {
        select
            .select_only()
            .columns([
                entity::item::Column::Id,
                entity::item::Column::Name,
                entity::item::Column::Slug,
                entity::item::Column::Description,
                entity::item::Column::Quantity,
                entity::item::Column::ItemTypeId,
                entity::item::Column::LocationId,
                entity::item::Column::SpecificLocation,
                entity::item::Column::UserId,
                entity::item::Column::MainImage,
                entity::item::Column::ShortCode,
                entity::item::Column::CreatedAt,
            ])
            .column_as(entity::item_type::Column::Name, "type_name")
            .column_as(entity::location::Column::Name, "location_name")
            .column(entity::inventory_item::Column::AccessLevel)
            .column(entity::inventory_item::Column::IsLink)
            .into_model::<ItemRow>()
    }
}

/// Ids of the inventories `user_id` holds a membership on.
fn member_inventories(user_id: i32) -> SelectStatement {
    entity::prelude::Membership::find()
        .select_only()
        .column(entity::membership::Column::InventoryId)
        .filter(entity::membership::Column::UserId.eq(user_id))
        .into_query()
}

/// A placement reachable without any membership: the row itself is exposed
/// as `Public` and its inventory is public.
fn public_placement() -> Condition {
    Condition::all()
        .add(entity::inventory_item::Column::AccessLevel.eq(AccessLevel::Public))
        .add(entity::inventory::Column::Visibility.eq(InventoryVisibility::Public))
}

/// Case-insensitive substring predicate.
fn ilike<T: ColumnTrait + IntoSimpleExpr>(column: T, needle: &str) -> SimpleExpr {
    Expr::expr(Func::lower(column.into_simple_expr()))
        .like(format!("%{}%", needle.to_lowercase()))
}
