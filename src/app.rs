// src/app.rs
use crate::config::Config;
use crate::db::Database;
use crate::sources::BusinessSource;
use crate::state::DirectoryState;
use std::sync::Arc;

/// Everything a request handler can reach. Shared by all astra workers.
pub struct App {
    pub config: Config,
    pub db: Database,
    pub directory: Arc<DirectoryState>,
    pub source: Arc<dyn BusinessSource>,
}
