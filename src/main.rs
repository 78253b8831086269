use crate::app::App;
use crate::config::Config;
use crate::db::{init_db, Database};
use crate::router::handle;
use crate::sources::{build_source, load_dataset};
use crate::state::DirectoryState;
use astra::Server;
use std::sync::Arc;

mod app;
mod config;
mod db;
mod domain;
mod errors;
mod forms;
mod i18n;
mod requests;
mod responses;
mod router;
mod sources;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Configuration, then logging at the configured default level
    let cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            env_logger::init();
            log::error!("❌ {e}");
            std::process::exit(1);
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cfg.log_filter)).init();

    let addr = match cfg.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            log::error!("❌ {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Submissions database
    let db = Database::new(&cfg.db_path);
    if let Err(e) = init_db(&db, &cfg.schema_path) {
        log::error!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    // 3️⃣ First load happens before binding; a failure still serves an empty directory
    let source = match build_source(&cfg) {
        Ok(source) => source,
        Err(e) => {
            log::error!("❌ Business source misconfigured: {e}");
            std::process::exit(1);
        }
    };
    let directory = Arc::new(DirectoryState::new(load_dataset(source.as_ref())));

    let workers = cfg.max_workers;
    let app = App {
        config: cfg,
        db,
        directory,
        source,
    };

    // 4️⃣ Serve requests
    log::info!("Starting server at http://{addr}");
    let server = Server::bind(&addr).max_workers(workers);

    let result = server.serve(move |req: astra::Request, _info| {
        let target = format!("{} {}", req.method(), req.uri().path());
        match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => {
                match &err {
                    errors::ServerError::NotFound | errors::ServerError::BadRequest(_) => {
                        log::warn!("{target}: {err}")
                    }
                    _ => log::error!("{target}: {err}"),
                }
                templates::html_error_response(err)
            }
        }
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
