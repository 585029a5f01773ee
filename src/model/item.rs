//! Item query inputs and result rows.

use chrono::NaiveDateTime;
use entity::access_level::AccessLevel;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use crate::util::text::parse_tag_list;

/// Sentinel item id meaning "every item reachable in the caller's scope".
///
/// Accepted by bulk deletion in place of a concrete id list.
pub const ALL_ITEMS: i32 = -1;

/// Page length applied when a query specifies none.
pub const DEFAULT_PAGE_LENGTH: u64 = 50;

/// One item as returned by catalog queries: the item's own columns joined
/// with its resolved type name, location name, and the access metadata of the
/// placement the query reached it through.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct ItemRow {
    /// Item id.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// URL slug, `"{id}-{slugified name}"`.
    pub slug: String,
    /// Free-text description.
    pub description: String,
    /// How many of the object the owner holds.
    pub quantity: i32,
    /// Classification id.
    pub item_type_id: i32,
    /// Default location id.
    pub location_id: i32,
    /// Free-text refinement of the location.
    pub specific_location: String,
    /// Owning user id.
    pub user_id: i32,
    /// File name of the designated primary image, if any.
    pub main_image: Option<String>,
    /// Short random code for compact URLs.
    pub short_code: String,
    /// When the item was created.
    pub created_at: NaiveDateTime,
    /// Resolved name of the item's type.
    pub type_name: String,
    /// Resolved name of the item's default location.
    pub location_name: String,
    /// Exposure of the placement this row was reached through.
    pub access_level: AccessLevel,
    /// Whether that placement is a secondary link rather than the home row.
    pub is_link: bool,
}

/// Key for single-item lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKey<'a> {
    /// Lookup by primary key.
    Id(i32),
    /// Lookup by unique slug.
    Slug(&'a str),
}

/// Sort column for item listings, addressed by table column index from the
/// presentation layer: 0 is the name column, 1 the type column, 2 the
/// location column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemSort {
    /// Order by item name.
    #[default]
    Name,
    /// Order by resolved type name.
    TypeName,
    /// Order by resolved location name.
    LocationName,
}

impl ItemSort {
    /// Maps a listing column index onto a sort column; unknown indexes fall
    /// back to the name column.
    pub fn from_column_index(index: u32) -> Self {
        match index {
            1 => Self::TypeName,
            2 => Self::LocationName,
            _ => Self::Name,
        }
    }
}

/// Sort direction for item listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

/// Filter, ordering, and paging input for an item listing.
///
/// Every field only narrows the result; the visible slice itself is fixed by
/// the resolved scope before any of these apply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemQuery {
    /// Restrict to one item type.
    pub item_type_id: Option<i32>,
    /// Restrict to one default location.
    pub location_id: Option<i32>,
    /// Substring match on the free-text location refinement.
    pub specific_location: Option<String>,
    /// Conjunctive tag filter: every listed tag must be attached. Tag values
    /// with no matching tag row are ignored.
    pub tags: Vec<String>,
    /// Search string, optionally carrying a modifier prefix; see
    /// [`SearchTerm`].
    pub search: Option<String>,
    /// Sort column.
    pub sort: ItemSort,
    /// Sort direction.
    pub direction: SortDirection,
    /// Zero-based index of the first requested row.
    pub start: u64,
    /// Page length; defaults to [`DEFAULT_PAGE_LENGTH`].
    pub length: Option<u64>,
}

impl ItemQuery {
    /// Resolves the paging fields into an `(offset, limit)` pair, snapping
    /// the offset to a whole page boundary.
    pub fn page_window(&self) -> (u64, u64) {
        let length = match self.length {
            Some(length) if length > 0 => length,
            _ => DEFAULT_PAGE_LENGTH,
        };
        let page = self.start / length;
        (page * length, length)
    }
}

/// A parsed search string.
///
/// A leading `modifier:` dispatches the search to a dedicated predicate;
/// anything else is a case-insensitive substring match over item names and
/// descriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTerm {
    /// Substring match over item name or description.
    FreeText(String),
    /// `location:` match over location names and specific locations.
    Location(String),
    /// `tags:` conjunctive tag filter.
    Tags(Vec<String>),
    /// `type:` match over type names.
    TypeName(String),
    /// Any other `slug:` prefix: substring match over the values of the
    /// custom field with that slug.
    Field {
        /// Slug of the custom field to search.
        slug: String,
        /// Substring to look for in its values.
        value: String,
    },
}

impl SearchTerm {
    /// Parses a raw search string into its dispatch form.
    ///
    /// The modifier must be a single word in front of a colon; search strings
    /// whose prefix contains whitespace are plain free text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Some((prefix, rest)) = trimmed.split_once(':') {
            let prefix = prefix.trim();
            let rest = rest.trim();
            if !prefix.is_empty() && !prefix.contains(char::is_whitespace) {
                return match prefix.to_ascii_lowercase().as_str() {
                    "location" => Self::Location(rest.to_string()),
                    "tags" => Self::Tags(parse_tag_list(rest)),
                    "type" => Self::TypeName(rest.to_string()),
                    slug => Self::Field {
                        slug: slug.to_string(),
                        value: rest.to_string(),
                    },
                };
            }
        }
        Self::FreeText(trimmed.to_string())
    }
}

/// Input for creating an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemDraft {
    /// Display name; required.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Quantity held; defaults to 1.
    pub quantity: Option<i32>,
    /// Type name, resolved case-insensitively against the owner's types and
    /// created on demand; defaults to the sentinel `"none"` type.
    pub item_type: Option<String>,
    /// Default location id; defaults to the owner's sentinel location.
    pub location_id: Option<i32>,
    /// Free-text refinement of the location.
    pub specific_location: Option<String>,
    /// Tag values to attach, created on demand per owner.
    pub tags: Vec<String>,
    /// Custom field values to set.
    pub fields: Vec<FieldValueInput>,
}

/// Input for updating an item. `None` fields are left unchanged; a `Some`
/// tag or field list replaces the item's whole set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemPatch {
    /// New display name; the slug is re-derived on rename.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New quantity.
    pub quantity: Option<i32>,
    /// New type name, resolved like [`ItemDraft::item_type`].
    pub item_type: Option<String>,
    /// New default location id.
    pub location_id: Option<i32>,
    /// New free-text location refinement.
    pub specific_location: Option<String>,
    /// Replacement tag set; an empty list clears all tags.
    pub tags: Option<Vec<String>>,
    /// Replacement custom field values.
    pub fields: Option<Vec<FieldValueInput>>,
}

/// One custom field value on an item, addressed by the field's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValueInput {
    /// Field display name; the field row is resolved by its slug and created
    /// on demand.
    pub name: String,
    /// Value to store.
    pub value: String,
    /// Whether the value shows up on the item page.
    pub visible: bool,
}

impl FieldValueInput {
    /// A visible field value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            visible: true,
        }
    }
}

/// Outcome of a bulk deletion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeletionReport {
    /// Items fully deleted, including their placements and attachments.
    pub items_deleted: u64,
    /// Secondary links removed while the item itself survived elsewhere.
    pub links_detached: u64,
    /// Image files that could not be removed from disk; already logged.
    pub image_removal_failures: u64,
}

impl DeletionReport {
    /// Rows the caller asked to delete that were acted on.
    pub fn affected(&self) -> u64 {
        self.items_deleted + self.links_detached
    }
}
