pub mod columns;
mod embedded;
mod sheet;
mod source_error;

pub use columns::{ApprovalRule, ColumnMap};
pub use embedded::EmbeddedSource;
pub use sheet::{SheetClient, SheetCsvSource, SheetJsonSource};
pub use source_error::SourceError;

use crate::config::{Config, SourceKind};
use crate::domain::{Business, Dataset};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Where the directory comes from. Exactly one is configured per process.
pub trait BusinessSource: Send + Sync {
    fn name(&self) -> &str;

    /// Canonical records in source order.
    fn load(&self) -> Result<Vec<Business>, SourceError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded { count: usize },
    Failed { reason: String },
}

impl LoadStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadStatus::Failed { .. })
    }
}

#[derive(Debug)]
pub struct LoadOutcome {
    pub dataset: Dataset,
    pub status: LoadStatus,
}

/// Runs one load. A failure yields an empty dataset, never stale or sample data.
pub fn load_dataset(source: &dyn BusinessSource) -> LoadOutcome {
    let start = Instant::now();

    match source.load() {
        Ok(records) => {
            let dataset = Dataset::new(records);
            log::info!(
                "loaded {} businesses from {} in {:?}",
                dataset.len(),
                source.name(),
                start.elapsed()
            );
            if dataset.is_empty() {
                log::warn!("{} returned no displayable businesses", source.name());
            }
            LoadOutcome {
                status: LoadStatus::Loaded { count: dataset.len() },
                dataset,
            }
        }
        Err(e) => {
            log::error!("loading businesses from {} failed: {e}", source.name());
            LoadOutcome {
                dataset: Dataset::empty(),
                status: LoadStatus::Failed { reason: e.to_string() },
            }
        }
    }
}

/// Builds the single source named in config.
pub fn build_source(cfg: &Config) -> Result<Arc<dyn BusinessSource>, SourceError> {
    if cfg.source.kind == SourceKind::Embedded {
        return Ok(Arc::new(EmbeddedSource::bundled()));
    }

    let url = cfg
        .source
        .url
        .clone()
        .ok_or_else(|| SourceError::Config("source.url is required for sheet sources".into()))?;
    let client = SheetClient::new(Duration::from_secs(cfg.source.timeout_secs), cfg.source.max_attempts)?;
    let columns = ColumnMap::with_overrides(&cfg.columns)?;
    let approval = ApprovalRule::from_config(&cfg.approval)?;

    Ok(match cfg.source.kind {
        SourceKind::SheetCsv => Arc::new(SheetCsvSource {
            url,
            client,
            columns,
            approval,
        }),
        _ => Arc::new(SheetJsonSource {
            url,
            client,
            columns,
            approval,
        }),
    })
}
