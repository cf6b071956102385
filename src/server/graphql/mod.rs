//! GraphQL client for the tour catalogue backend.
//!
//! The client is built once at startup and handed to services through the application state.
//! Every operation passes through an ordered chain of links before and after the HTTP
//! transport: request links may add headers, error links report failures.

pub mod client;
pub mod link;
pub mod operation;
pub mod response;

pub use client::GraphqlClient;
pub use operation::Operation;
