use crate::app::App;
use crate::config::Config;
use crate::db::{init_db, Database};
use crate::domain::{Business, Dataset};
use crate::sources::{BusinessSource, EmbeddedSource, LoadOutcome, LoadStatus, SourceError};
use crate::state::DirectoryState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

static DB_SEQ: AtomicU64 = AtomicU64::new(0);

/// Fresh database in the temp dir using the production schema
pub fn make_db() -> Database {
    let path = std::env::temp_dir().join(format!(
        "vyapar_test_{}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        DB_SEQ.fetch_add(1, Ordering::SeqCst)
    ));
    let db = Database::new(path);
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

/// Serves a fixed record list, or fails every load.
pub struct FixedSource(pub Result<Vec<Business>, String>);

impl BusinessSource for FixedSource {
    fn name(&self) -> &str {
        "fixed"
    }

    fn load(&self) -> Result<Vec<Business>, SourceError> {
        self.0.clone().map_err(SourceError::Network)
    }
}

fn app_from(source: Arc<dyn BusinessSource>) -> App {
    let outcome = crate::sources::load_dataset(source.as_ref());
    App {
        config: Config::default(),
        db: make_db(),
        directory: Arc::new(DirectoryState::new(outcome)),
        source,
    }
}

/// App over the bundled sample directory.
pub fn sample_app() -> App {
    app_from(Arc::new(EmbeddedSource::bundled()))
}

pub fn app_with(records: Vec<Business>) -> App {
    app_from(Arc::new(FixedSource(Ok(records))))
}

/// App whose only load failed.
pub fn failed_app() -> App {
    let app = app_from(Arc::new(FixedSource(Err("connection refused".into()))));
    assert!(app.directory.current().status.is_failed());
    app
}

/// App whose snapshot is given directly.
pub fn app_with_outcome(dataset: Dataset, status: LoadStatus) -> App {
    let mut app = sample_app();
    app.directory = Arc::new(DirectoryState::new(LoadOutcome { dataset, status }));
    app
}

pub fn qs(pairs: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("Cookie", cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn post(uri: &str, content_type: &str, body: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
