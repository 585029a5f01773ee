use super::*;

/// Expect home rows of owned items plus home rows in member inventories
#[tokio::test]
async fn home_scope_spans_owned_and_member_inventories() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let william = test.user().insert_mock_account("william").await?;
    let redra = test.user().insert_mock_account("redra").await?;
    test.catalog()
        .insert_mock_item_in(william.user.id, william.default_inventory.id, "Anvil")
        .await?;
    let garage = test
        .catalog()
        .insert_mock_inventory(william.user.id, "Garage", InventoryVisibility::Private)
        .await?;
    test.catalog()
        .insert_mock_item_in(william.user.id, garage.id, "Bench Vise")
        .await?;
    let loaners = test
        .catalog()
        .insert_mock_inventory(redra.user.id, "Loaners", InventoryVisibility::Private)
        .await?;
    test.catalog()
        .insert_membership(william.user.id, loaners.id, AccessLevel::Viewer)
        .await?;
    test.catalog()
        .insert_mock_item_in(redra.user.id, loaners.id, "Crowbar")
        .await?;
    test.catalog()
        .insert_mock_item_in(redra.user.id, redra.default_inventory.id, "Drill Press")
        .await?;

    let item_repository = ItemRepository::new(&test.db);
    let result = item_repository
        .search(&ItemSearchCriteria::within(ScopeFilter::HomeRows {
            viewer_id: william.user.id,
        }))
        .await;

    assert!(result.is_ok());
    let rows = result.unwrap();
    let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["Anvil", "Bench Vise", "Crowbar"]);

    Ok(())
}

/// Expect link rows to stay out of the home scope
#[tokio::test]
async fn home_scope_skips_link_rows() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let william = test.user().insert_mock_account("william").await?;
    let garage = test
        .catalog()
        .insert_mock_inventory(william.user.id, "Garage", InventoryVisibility::Private)
        .await?;
    let (item, _) = test
        .catalog()
        .insert_mock_item_in(william.user.id, william.default_inventory.id, "Anvil")
        .await?;
    test.catalog()
        .insert_placement(garage.id, item.id, AccessLevel::Owner, true)
        .await?;

    let item_repository = ItemRepository::new(&test.db);
    let result = item_repository
        .search(&ItemSearchCriteria::within(ScopeFilter::HomeRows {
            viewer_id: william.user.id,
        }))
        .await;

    assert!(result.is_ok());
    let rows = result.unwrap();
    assert_eq!(rows.len(), 1);
    assert!(!rows[0].is_link);

    Ok(())
}

/// Expect the inventory scope to honor the public-rows-only restriction
#[tokio::test]
async fn inventory_scope_restricts_to_public_rows() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let william = test.user().insert_mock_account("william").await?;
    let garage = test
        .catalog()
        .insert_mock_inventory(william.user.id, "Garage", InventoryVisibility::Private)
        .await?;
    test.catalog()
        .insert_mock_item_in(william.user.id, garage.id, "Hammer")
        .await?;
    let saw = test
        .catalog()
        .insert_mock_item(william.user.id, "Table Saw")
        .await?;
    test.catalog()
        .insert_placement(garage.id, saw.id, AccessLevel::Public, false)
        .await?;

    let item_repository = ItemRepository::new(&test.db);
    let every_row = item_repository
        .search(&ItemSearchCriteria::within(ScopeFilter::Inventory {
            inventory_id: garage.id,
            public_rows_only: false,
        }))
        .await?;
    let public_rows = item_repository
        .search(&ItemSearchCriteria::within(ScopeFilter::Inventory {
            inventory_id: garage.id,
            public_rows_only: true,
        }))
        .await?;

    assert_eq!(every_row.len(), 2);
    assert_eq!(public_rows.len(), 1);
    assert_eq!(public_rows[0].name, "Table Saw");
    assert_eq!(public_rows[0].access_level, AccessLevel::Public);

    Ok(())
}

/// Expect the anonymous owner scope to require both a public row and a
/// public inventory
#[tokio::test]
async fn owner_public_scope_needs_public_row_in_public_inventory() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let william = test.user().insert_mock_account("william").await?;
    let showcase = test
        .catalog()
        .insert_mock_inventory(william.user.id, "Showcase", InventoryVisibility::Public)
        .await?;
    let stash = test
        .catalog()
        .insert_mock_inventory(william.user.id, "Stash", InventoryVisibility::Private)
        .await?;
    let clock = test
        .catalog()
        .insert_mock_item(william.user.id, "Display Clock")
        .await?;
    test.catalog()
        .insert_placement(showcase.id, clock.id, AccessLevel::Public, false)
        .await?;
    test.catalog()
        .insert_mock_item_in(william.user.id, showcase.id, "Hidden Radio")
        .await?;
    let ledger = test
        .catalog()
        .insert_mock_item(william.user.id, "Ledger")
        .await?;
    test.catalog()
        .insert_placement(stash.id, ledger.id, AccessLevel::Public, false)
        .await?;

    let item_repository = ItemRepository::new(&test.db);
    let result = item_repository
        .search(&ItemSearchCriteria::within(ScopeFilter::OwnerPublic {
            owner_id: william.user.id,
        }))
        .await;

    assert!(result.is_ok());
    let rows = result.unwrap();
    let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["Display Clock"]);

    Ok(())
}

/// Expect the member owner scope to add member inventories on top of public
/// material, limited to items of the owner
#[tokio::test]
async fn owner_member_scope_adds_member_inventories() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let william = test.user().insert_mock_account("william").await?;
    let redra = test.user().insert_mock_account("redra").await?;
    let loaners = test
        .catalog()
        .insert_mock_inventory(redra.user.id, "Loaners", InventoryVisibility::Private)
        .await?;
    test.catalog()
        .insert_membership(william.user.id, loaners.id, AccessLevel::Viewer)
        .await?;
    test.catalog()
        .insert_mock_item_in(redra.user.id, loaners.id, "Crowbar")
        .await?;
    let showcase = test
        .catalog()
        .insert_mock_inventory(redra.user.id, "Showcase", InventoryVisibility::Public)
        .await?;
    let clock = test
        .catalog()
        .insert_mock_item(redra.user.id, "Display Clock")
        .await?;
    test.catalog()
        .insert_placement(showcase.id, clock.id, AccessLevel::Public, false)
        .await?;
    test.catalog()
        .insert_mock_item_in(redra.user.id, redra.default_inventory.id, "Drill Press")
        .await?;
    // William's own item linked into the member inventory is not part of
    // Redra's catalog.
    let (borrowed, _) = test
        .catalog()
        .insert_mock_item_in(william.user.id, william.default_inventory.id, "Borrowed Saw")
        .await?;
    test.catalog()
        .insert_placement(loaners.id, borrowed.id, AccessLevel::Owner, true)
        .await?;

    let item_repository = ItemRepository::new(&test.db);
    let result = item_repository
        .search(&ItemSearchCriteria::within(
            ScopeFilter::OwnerPublicOrMember {
                owner_id: redra.user.id,
                viewer_id: william.user.id,
            },
        ))
        .await;

    assert!(result.is_ok());
    let rows = result.unwrap();
    let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["Crowbar", "Display Clock"]);

    Ok(())
}

/// Expect every requested tag attached, not any
#[tokio::test]
async fn tags_filter_is_conjunctive() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let william = test.user().insert_mock_account("william").await?;
    let (abbey, _) = test
        .catalog()
        .insert_mock_item_in(william.user.id, william.default_inventory.id, "Abbey Road")
        .await?;
    let (brains, _) = test
        .catalog()
        .insert_mock_item_in(william.user.id, william.default_inventory.id, "Bad Brains")
        .await?;
    let vinyl = test.catalog().insert_mock_tag(william.user.id, "vinyl").await?;
    let rare = test.catalog().insert_mock_tag(william.user.id, "rare").await?;
    test.catalog().tag_item(abbey.id, vinyl.id).await?;
    test.catalog().tag_item(abbey.id, rare.id).await?;
    test.catalog().tag_item(brains.id, vinyl.id).await?;

    let item_repository = ItemRepository::new(&test.db);
    let result = item_repository
        .search(&ItemSearchCriteria {
            tag_ids: vec![vinyl.id, rare.id],
            ..ItemSearchCriteria::within(ScopeFilter::HomeRows {
                viewer_id: william.user.id,
            })
        })
        .await;

    assert!(result.is_ok());
    let rows = result.unwrap();
    let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["Abbey Road"]);

    Ok(())
}

/// Expect free text to match names and descriptions ignoring case
#[tokio::test]
async fn free_text_matches_name_or_description() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let william = test.user().insert_mock_account("william").await?;
    test.catalog()
        .insert_mock_item_in(william.user.id, william.default_inventory.id, "Cordless Drill")
        .await?;
    let (stand, _) = test
        .catalog()
        .insert_mock_item_in(william.user.id, william.default_inventory.id, "Shop Stand")
        .await?;
    test.catalog()
        .insert_mock_item_in(william.user.id, william.default_inventory.id, "Workbench")
        .await?;

    let item_repository = ItemRepository::new(&test.db);
    item_repository
        .update(
            stand,
            ItemChanges {
                description: Some("holds the drill press".to_string()),
                ..Default::default()
            },
        )
        .await?;

    let result = item_repository
        .search(&ItemSearchCriteria {
            text: Some("DRILL".to_string()),
            ..ItemSearchCriteria::within(ScopeFilter::HomeRows {
                viewer_id: william.user.id,
            })
        })
        .await;

    assert!(result.is_ok());
    let rows = result.unwrap();
    let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["Cordless Drill", "Shop Stand"]);

    Ok(())
}

/// Expect ordering by the requested column and a paged slice
#[tokio::test]
async fn orders_and_pages_rows() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let william = test.user().insert_mock_account("william").await?;
    for name in ["Anvil", "Banjo", "Crate"] {
        test.catalog()
            .insert_mock_item_in(william.user.id, william.default_inventory.id, name)
            .await?;
    }

    let item_repository = ItemRepository::new(&test.db);
    let result = item_repository
        .search(&ItemSearchCriteria {
            sort: ItemSort::Name,
            direction: SortDirection::Descending,
            offset: 1,
            limit: 1,
            ..ItemSearchCriteria::within(ScopeFilter::HomeRows {
                viewer_id: william.user.id,
            })
        })
        .await;

    assert!(result.is_ok());
    let rows = result.unwrap();
    let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["Banjo"]);

    Ok(())
}
