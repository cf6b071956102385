//! Data transfer objects shared by the client and the server.

pub mod api;
pub mod session;
pub mod tour;
