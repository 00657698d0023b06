use crate::config::ServerConfig;
use crate::store::{rooms, Store};
use astra::Server;

mod config;
mod domain;
mod errors;
mod handlers;
mod logging;
mod responses;
mod router;
mod store;
mod templates;


fn main() {
    // 1️⃣ Read configuration from the environment
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logger(config.log_format);

    // 2️⃣ Build the in-memory store with the room catalog
    let store = match Store::seeded() {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "failed to seed catalog");
            std::process::exit(1);
        }
    };
    let room_count = rooms::list_all(&store).map(|r| r.len()).unwrap_or_default();
    tracing::info!(rooms = room_count, "catalog seeded");

    // 3️⃣ Start the server
    tracing::info!(workers = config.max_workers, "Starting server at http://{}", config.addr);
    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    // 4️⃣ Serve requests, passing the store handle into the closure
    let result = server.serve(move |req, _info| router::serve(req, &store));

    if let Err(e) = result {
        tracing::error!(error = %e, "Server ended with error");
        std::process::exit(1);
    }

    tracing::info!("Server shut down cleanly.");
}
