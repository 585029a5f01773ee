use crate::TestSetup;

pub mod data;
pub mod factory;

impl TestSetup {
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
