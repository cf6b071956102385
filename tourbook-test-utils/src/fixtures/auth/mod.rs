pub mod factory;
pub mod mockito;

use crate::TestContext;

impl TestContext {
    pub fn auth<'a>(&'a mut self) -> AuthFixtures<'a> {
        AuthFixtures { context: self }
    }
}

pub struct AuthFixtures<'a> {
    context: &'a mut TestContext,
}
