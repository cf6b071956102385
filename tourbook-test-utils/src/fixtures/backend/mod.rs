pub mod mockito;

use crate::TestContext;

impl TestContext {
    pub fn backend<'a>(&'a mut self) -> BackendFixtures<'a> {
        BackendFixtures { context: self }
    }
}

pub struct BackendFixtures<'a> {
    context: &'a mut TestContext,
}
