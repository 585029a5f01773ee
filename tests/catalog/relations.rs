//! Tests for the symmetry of item relations.
//!
//! Relating two items must make each visible from the other, and breaking
//! the relation from either side must remove both directions at once.

use curio::{data::relation::RelationRepository, service::relation::RelationService};
use curio_test_utils::prelude::*;

/// Tests that a relation is visible from both items.
///
/// Verifies that relating A to B also relates B to A without a second call.
///
/// Expected: each item lists the other as related
#[tokio::test]
async fn relating_works_in_both_directions() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let account = test.user().insert_mock_account("freya").await?;
    let (banjo, _) = test
        .catalog()
        .insert_mock_item_in(account.user.id, account.default_inventory.id, "Banjo")
        .await?;
    let (case, _) = test
        .catalog()
        .insert_mock_item_in(account.user.id, account.default_inventory.id, "Banjo Case")
        .await?;

    let relation_service = RelationService::new(&test.db);
    let related_to_banjo = relation_service
        .relate(account.user.id, banjo.id, case.id)
        .await?;

    let relation_repo = RelationRepository::new(&test.db);
    let related_to_case = relation_repo.list_related_ids(case.id).await?;
    assert_eq!(related_to_banjo, vec![case.id]);
    assert_eq!(related_to_case, vec![banjo.id]);

    Ok(())
}

/// Tests breaking a relation from the far side.
///
/// Relates A to B, then unrelates naming B first. The removal must clear
/// both directions regardless of which side issued it.
///
/// Expected: neither item lists the other afterwards
#[tokio::test]
async fn unrelating_from_either_side_clears_both() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let account = test.user().insert_mock_account("freya").await?;
    let (banjo, _) = test
        .catalog()
        .insert_mock_item_in(account.user.id, account.default_inventory.id, "Banjo")
        .await?;
    let (case, _) = test
        .catalog()
        .insert_mock_item_in(account.user.id, account.default_inventory.id, "Banjo Case")
        .await?;

    let relation_service = RelationService::new(&test.db);
    relation_service
        .relate(account.user.id, banjo.id, case.id)
        .await?;
    let related_to_case = relation_service
        .unrelate(account.user.id, case.id, banjo.id)
        .await?;

    let relation_repo = RelationRepository::new(&test.db);
    let related_to_banjo = relation_repo.list_related_ids(banjo.id).await?;
    assert!(related_to_case.is_empty());
    assert!(related_to_banjo.is_empty());

    Ok(())
}
