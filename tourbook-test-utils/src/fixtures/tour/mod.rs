pub mod factory;
pub mod mockito;

use crate::TestContext;

impl TestContext {
    pub fn tour<'a>(&'a mut self) -> TourFixtures<'a> {
        TourFixtures { context: self }
    }
}

pub struct TourFixtures<'a> {
    context: &'a mut TestContext,
}
