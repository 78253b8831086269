// src/config.rs
use crate::errors::ServerError;
use crate::i18n::Lang;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "directory.toml";

const GOOGLE_FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSdE3kVjS_o42jsoEg23Wy4-wQqBZBqVKgpFAK5IuJX1-LizXw/viewform?usp=header";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bind_addr: String,
    pub max_workers: usize,
    pub db_path: String,
    pub schema_path: String,
    /// Default `env_logger` filter; `RUST_LOG` wins when set.
    pub log_filter: String,
    pub source: SourceConfig,
    pub approval: ApprovalConfig,
    /// Alias -> sheet header overrides, merged over the built-in table.
    pub columns: BTreeMap<String, String>,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Embedded,
    SheetJson,
    SheetCsv,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,
    pub url: Option<String>,
    pub timeout_secs: u64,
    pub max_attempts: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApprovalConfig {
    pub column_alias: String,
    pub value: String,
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub search_debounce_ms: u64,
    pub notification_ttl_ms: u64,
    pub featured_limit: usize,
    pub sort_by_district_category: bool,
    pub registration_form_url: String,
    pub country_code: String,
    pub default_lang: Lang,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            max_workers: 8,
            db_path: "vyapar.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            log_filter: "info".to_string(),
            source: SourceConfig::default(),
            approval: ApprovalConfig::default(),
            columns: BTreeMap::new(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Embedded,
            url: None,
            timeout_secs: 30,
            max_attempts: 3,
        }
    }
}

impl Default for ApprovalConfig {
    fn default() -> Self {
        Self {
            column_alias: "approved".to_string(),
            value: "true".to_string(),
            case_sensitive: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: 300,
            notification_ttl_ms: 5000,
            featured_limit: 6,
            sort_by_district_category: false,
            registration_form_url: GOOGLE_FORM_URL.to_string(),
            country_code: "91".to_string(),
            default_lang: Lang::Hindi,
        }
    }
}

impl Config {
    /// Reads `VYAPAR_CONFIG` (or `directory.toml`), then applies env overrides.
    /// A missing file is not an error: defaults are used.
    pub fn load() -> Result<Self, ServerError> {
        let path = std::env::var("VYAPAR_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());

        let mut cfg = if Path::new(&path).exists() {
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| ServerError::Config(format!("read {path} failed: {e}")))?;
            Self::from_toml_str(&raw)?
        } else {
            Self::default()
        };

        cfg.apply_overrides(|key| std::env::var(key).ok());
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ServerError> {
        toml::from_str(raw).map_err(|e| ServerError::Config(format!("invalid TOML: {e}")))
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("VYAPAR_ADDR") {
            self.bind_addr = addr;
        }
        if let Some(db) = lookup("VYAPAR_DB") {
            self.db_path = db;
        }
        if let Some(url) = lookup("VYAPAR_SOURCE_URL") {
            self.source.url = Some(url);
        }
        if let Some(kind) = lookup("VYAPAR_SOURCE") {
            match kind.trim() {
                "embedded" => self.source.kind = SourceKind::Embedded,
                "sheet_json" => self.source.kind = SourceKind::SheetJson,
                "sheet_csv" => self.source.kind = SourceKind::SheetCsv,
                other => log::warn!("ignoring unknown VYAPAR_SOURCE value {other:?}"),
            }
        }
    }

    pub fn validate(&self) -> Result<(), ServerError> {
        self.bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ServerError::Config(format!("bind_addr {:?}: {e}", self.bind_addr)))?;

        if self.max_workers == 0 {
            return Err(ServerError::Config("max_workers must be at least 1".into()));
        }
        if self.source.max_attempts == 0 {
            return Err(ServerError::Config("source.max_attempts must be at least 1".into()));
        }

        if self.source.kind != SourceKind::Embedded {
            let url = self
                .source
                .url
                .as_deref()
                .ok_or_else(|| ServerError::Config("source.url is required for sheet sources".into()))?;
            url::Url::parse(url)
                .map_err(|e| ServerError::Config(format!("source.url {url:?}: {e}")))?;
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        self.bind_addr
            .parse()
            .map_err(|e| ServerError::Config(format!("bind_addr {:?}: {e}", self.bind_addr)))
    }
}
