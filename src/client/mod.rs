//! Browser application: the tour list page, the sign-in menu and the stores behind them.

pub mod app;
pub mod components;
pub mod router;
pub mod routes;
pub mod store;
pub mod util;

pub use app::App;
