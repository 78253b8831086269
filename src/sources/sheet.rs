// src/sources/sheet.rs
use crate::domain::Business;
use crate::sources::columns::{normalize_rows, ApprovalRule, ColumnMap, RawRow};
use crate::sources::{BusinessSource, SourceError};
use rand::Rng;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::{Duration, Instant};

const USER_AGENT: &str = concat!("vyapar-directory/", env!("CARGO_PKG_VERSION"));
const MAX_BACKOFF_SECS: u64 = 10;
const JITTER_MAX_MS: u64 = 1000;

/// Blocking HTTP fetch with bounded retries.
pub struct SheetClient {
    client: Client,
    max_attempts: u64,
}

impl SheetClient {
    pub fn new(timeout: Duration, max_attempts: u64) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            max_attempts: max_attempts.max(1),
        })
    }

    pub fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        let mut last_err = None;

        for attempt in 1..=self.max_attempts {
            let start = Instant::now();

            match self.try_fetch_text(url) {
                Ok(text) => {
                    log::info!("fetched {url} on attempt {attempt} in {:?}", start.elapsed());
                    return Ok(text);
                }
                Err(e) => {
                    log::warn!("fetch attempt {attempt} for {url} failed in {:?}: {e}", start.elapsed());
                    last_err = Some(e);

                    if attempt < self.max_attempts {
                        let base = std::cmp::min(2 * attempt, MAX_BACKOFF_SECS);
                        let jitter = rand::thread_rng().gen_range(0..=JITTER_MAX_MS);
                        std::thread::sleep(Duration::from_secs(base) + Duration::from_millis(jitter));
                    }
                }
            }
        }

        Err(last_err.unwrap_or_else(|| SourceError::Network("retry loop made no attempts".into())))
    }

    fn try_fetch_text(&self, url: &str) -> Result<String, SourceError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        resp.text().map_err(|e| SourceError::Network(e.to_string()))
    }
}

/// Decodes the spreadsheet-to-JSON proxy payload: an array of header->cell objects.
pub fn parse_json_rows(text: &str) -> Result<Vec<RawRow>, SourceError> {
    let data: Value = serde_json::from_str(text).map_err(|e| SourceError::JsonParse(e.to_string()))?;

    let arr = match data {
        Value::Array(arr) => arr,
        Value::Object(obj) => {
            let detail = obj
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("expected an array of rows");
            return Err(SourceError::UnexpectedShape(detail.to_string()));
        }
        _ => return Err(SourceError::UnexpectedShape("expected an array of rows".into())),
    };

    arr.into_iter()
        .enumerate()
        .map(|(i, v)| match v {
            Value::Object(obj) => Ok(obj
                .into_iter()
                .filter_map(|(k, v)| cell_text(v).map(|t| (k.trim().to_string(), t)))
                .collect()),
            _ => Err(SourceError::UnexpectedShape(format!("row {i} is not an object"))),
        })
        .collect()
}

fn cell_text(v: Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Decodes a published CSV export; the first record is the header row.
pub fn parse_csv_rows(text: &str) -> Result<Vec<RawRow>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| SourceError::CsvParse(e.to_string()))?
        .iter()
        .map(|h| h.trim().trim_start_matches('\u{feff}').to_string())
        .collect();

    if headers.iter().all(String::is_empty) {
        return Err(SourceError::UnexpectedShape("csv header row is empty".into()));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| SourceError::CsvParse(e.to_string()))?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

pub struct SheetJsonSource {
    pub url: String,
    pub client: SheetClient,
    pub columns: ColumnMap,
    pub approval: ApprovalRule,
}

impl BusinessSource for SheetJsonSource {
    fn name(&self) -> &str {
        "sheet_json"
    }

    fn load(&self) -> Result<Vec<Business>, SourceError> {
        let text = self.client.fetch_text(&self.url)?;
        let rows = parse_json_rows(&text)?;
        Ok(normalize_rows(rows, &self.columns, &self.approval))
    }
}

pub struct SheetCsvSource {
    pub url: String,
    pub client: SheetClient,
    pub columns: ColumnMap,
    pub approval: ApprovalRule,
}

impl BusinessSource for SheetCsvSource {
    fn name(&self) -> &str {
        "sheet_csv"
    }

    fn load(&self) -> Result<Vec<Business>, SourceError> {
        let text = self.client.fetch_text(&self.url)?;
        let rows = parse_csv_rows(&text)?;
        Ok(normalize_rows(rows, &self.columns, &self.approval))
    }
}
