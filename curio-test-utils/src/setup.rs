use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Sets up an in-memory database with the full catalog schema: users,
/// taxonomy, inventories, items, placements, and every join table, created
/// in foreign key dependency order.
#[macro_export]
macro_rules! test_setup_with_catalog_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::ItemType),
                schema.create_table_from_entity(entity::prelude::Location),
                schema.create_table_from_entity(entity::prelude::Field),
                schema.create_table_from_entity(entity::prelude::FieldTemplate),
                schema.create_table_from_entity(entity::prelude::TemplateField),
                schema.create_table_from_entity(entity::prelude::Inventory),
                schema.create_table_from_entity(entity::prelude::Membership),
                schema.create_table_from_entity(entity::prelude::Item),
                schema.create_table_from_entity(entity::prelude::InventoryItem),
                schema.create_table_from_entity(entity::prelude::Tag),
                schema.create_table_from_entity(entity::prelude::ItemTag),
                schema.create_table_from_entity(entity::prelude::RelatedItem),
                schema.create_table_from_entity(entity::prelude::ItemField),
                schema.create_table_from_entity(entity::prelude::Image),
                schema.create_table_from_entity(entity::prelude::ItemImage),
                schema.create_table_from_entity(entity::prelude::Notification),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
