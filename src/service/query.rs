//! Item listings and lookups within a resolved scope.

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        field::FieldRepository,
        item::{ItemRepository, ItemSearchCriteria, ScopeFilter},
        tag::TagRepository,
    },
    error::Error,
    model::{
        item::{ItemKey, ItemQuery, ItemRow, SearchTerm},
        scope::ResolvedScope,
    },
};

/// Runs item listings and lookups against a [`ResolvedScope`].
///
/// The scope fixes which placement rows are reachable; everything in an
/// [`ItemQuery`] only narrows that slice further.
pub struct ItemQueryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemQueryService<'a> {
    /// Creates a new instance of [`ItemQueryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists one page of the items visible in the scope.
    ///
    /// # Behavior
    /// - An empty scope yields an empty page without touching the database.
    /// - The search string dispatches on its modifier prefix; a `tags:`
    ///   search joins the query's own tag filter conjunctively.
    /// - Tag values the catalog owner never used are dropped. A field
    ///   modifier naming a slug the owner has no field for matches nothing.
    ///
    /// # Arguments
    /// - `scope` - The resolved visibility scope
    /// - `query` - Filters, ordering, and paging
    ///
    /// # Returns
    /// - `Vec<ItemRow>` - The requested page, joined with type and location
    ///   names and the access metadata of the reaching placement
    pub async fn query(
        &self,
        scope: &ResolvedScope,
        query: &ItemQuery,
    ) -> Result<Vec<ItemRow>, Error> {
        let criteria = match self.criteria(scope, query).await? {
            Some(criteria) => criteria,
            None => return Ok(Vec::new()),
        };

        let item_repo = ItemRepository::new(self.db);

        Ok(item_repo.search(&criteria).await?)
    }

    /// Counts every item the query would match, ignoring paging.
    pub async fn count(&self, scope: &ResolvedScope, query: &ItemQuery) -> Result<u64, Error> {
        let criteria = match self.criteria(scope, query).await? {
            Some(criteria) => criteria,
            None => return Ok(0),
        };

        let item_repo = ItemRepository::new(self.db);

        Ok(item_repo.count(&criteria).await?)
    }

    /// Finds a single item by id or slug, if the scope can reach it.
    ///
    /// When the scope reaches the item through more than one placement the
    /// home row wins, so a link never masks where the item really lives.
    pub async fn find_item(
        &self,
        scope: &ResolvedScope,
        key: ItemKey<'_>,
    ) -> Result<Option<ItemRow>, Error> {
        let filter = match scope_filter(scope) {
            Some(filter) => filter,
            None => return Ok(None),
        };

        let item_repo = ItemRepository::new(self.db);

        Ok(item_repo.find_row(filter, key).await?)
    }

    /// Resolves a query against a scope into executable search criteria.
    ///
    /// `None` means the combination can never match: the scope is empty, or
    /// a field search names a slug the owner has no field for.
    async fn criteria(
        &self,
        scope: &ResolvedScope,
        query: &ItemQuery,
    ) -> Result<Option<ItemSearchCriteria>, Error> {
        let filter = match scope_filter(scope) {
            Some(filter) => filter,
            None => return Ok(None),
        };
        let owner_id = match scope.owner_id() {
            Some(owner_id) => owner_id,
            None => return Ok(None),
        };

        let (offset, limit) = query.page_window();
        let mut criteria = ItemSearchCriteria {
            item_type_id: query.item_type_id,
            location_id: query.location_id,
            specific_location: query.specific_location.clone(),
            sort: query.sort,
            direction: query.direction,
            offset,
            limit,
            ..ItemSearchCriteria::within(filter)
        };

        let mut tag_values = query.tags.clone();
        match query.search.as_deref().map(str::trim) {
            None | Some("") => {}
            Some(raw) => match SearchTerm::parse(raw) {
                SearchTerm::FreeText(text) => criteria.text = Some(text),
                SearchTerm::Location(text) => criteria.location_text = Some(text),
                SearchTerm::TypeName(text) => criteria.type_text = Some(text),
                SearchTerm::Tags(values) => tag_values.extend(values),
                SearchTerm::Field { slug, value } => {
                    let field_repo = FieldRepository::new(self.db);
                    match field_repo.get_by_slug(owner_id, &slug).await? {
                        Some(field) => criteria.field_value = Some((field.id, value)),
                        None => return Ok(None),
                    }
                }
            },
        }

        if !tag_values.is_empty() {
            let tag_repo = TagRepository::new(self.db);
            criteria.tag_ids = tag_repo.get_ids_by_values(owner_id, &tag_values).await?;
        }

        Ok(Some(criteria))
    }
}

/// Maps a resolved scope onto the placement filter item queries run under.
///
/// `None` stands for the empty scope, which matches nothing.
fn scope_filter(scope: &ResolvedScope) -> Option<ScopeFilter> {
    match scope {
        ResolvedScope::Empty => None,
        ResolvedScope::Owned {
            viewer_id,
            inventory: None,
            ..
        } => Some(ScopeFilter::HomeRows {
            viewer_id: *viewer_id,
        }),
        ResolvedScope::Owned {
            inventory: Some(inventory),
            ..
        } => Some(ScopeFilter::Inventory {
            inventory_id: inventory.id,
            public_rows_only: false,
        }),
        ResolvedScope::Shared {
            inventory: Some(inventory),
            membership,
            ..
        } => Some(ScopeFilter::Inventory {
            inventory_id: inventory.id,
            public_rows_only: membership.is_none(),
        }),
        ResolvedScope::Shared {
            viewer_id,
            owner_id,
            inventory: None,
            ..
        } => Some(ScopeFilter::OwnerPublicOrMember {
            owner_id: *owner_id,
            viewer_id: *viewer_id,
        }),
        ResolvedScope::PublicOnly {
            inventory: Some(inventory),
            ..
        } => Some(ScopeFilter::Inventory {
            inventory_id: inventory.id,
            public_rows_only: true,
        }),
        ResolvedScope::PublicOnly {
            owner_id,
            inventory: None,
        } => Some(ScopeFilter::OwnerPublic {
            owner_id: *owner_id,
        }),
    }
}
