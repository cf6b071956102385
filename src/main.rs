#![allow(non_snake_case)]

mod client;

use tourbook::model;

#[cfg(feature = "server")]
use tourbook::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(var = %e.var(), "Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        tracing::info!(
            backend_url = %config.backend_url,
            graphql_url = %config.graphql_url,
            require_session = config.proxy_require_session,
            "Starting server"
        );

        let state = match startup::build_app_state(config) {
            Ok(state) => state,
            Err(e) => {
                tracing::error!("Startup error: {}", e);
                std::process::exit(1);
            }
        };

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes().with_state(state);
        router = router.merge(server_routes);

        Ok(router)
    })
}
