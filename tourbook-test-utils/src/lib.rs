pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::{auth::factory as auth_factory, tour::factory},
        TestBuilder, TestContext, TestError,
    };
}
