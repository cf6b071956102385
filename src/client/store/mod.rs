pub mod session;
pub mod tour;
