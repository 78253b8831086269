use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Sheet responded with HTTP {0}")]
    Status(u16),
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    #[error("CSV parse error: {0}")]
    CsvParse(String),
    #[error("Unexpected data shape: {0}")]
    UnexpectedShape(String),
    #[error("Source config error: {0}")]
    Config(String),
}
