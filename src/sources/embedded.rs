use crate::domain::Business;
use crate::sources::{BusinessSource, SourceError};

const BUNDLED: &str = include_str!("../../data/businesses.json");

/// Records compiled into the binary. Treated as already approved.
pub struct EmbeddedSource {
    json: &'static str,
}

impl EmbeddedSource {
    pub fn bundled() -> Self {
        Self { json: BUNDLED }
    }

    #[cfg(test)]
    pub fn from_json(json: &'static str) -> Self {
        Self { json }
    }
}

impl BusinessSource for EmbeddedSource {
    fn name(&self) -> &str {
        "embedded"
    }

    fn load(&self) -> Result<Vec<Business>, SourceError> {
        serde_json::from_str(self.json).map_err(|e| SourceError::JsonParse(e.to_string()))
    }
}
