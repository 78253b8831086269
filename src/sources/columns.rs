// src/sources/columns.rs
//
// Maps spreadsheet rows onto `Business`. The header strings come straight from
// the Google Form and change whenever the form is edited, so they live in a
// table keyed by short aliases and can be overridden from config.

use crate::config::ApprovalConfig;
use crate::domain::Business;
use crate::sources::SourceError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashMap};

/// One sheet row: trimmed header -> cell text.
pub type RawRow = HashMap<String, String>;

const DEFAULT_STATE: &str = "Gujarat";
const DRIVE_ID_MIN_LEN: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    BusinessName,
    OwnerName,
    Category,
    District,
    Pincode,
    Mobile,
    Whatsapp,
    Email,
    Address,
    Description,
    Photo,
    Website,
    Featured,
    Approved,
    Timestamp,
}

impl Column {
    pub const ALL: [Column; 15] = [
        Column::BusinessName,
        Column::OwnerName,
        Column::Category,
        Column::District,
        Column::Pincode,
        Column::Mobile,
        Column::Whatsapp,
        Column::Email,
        Column::Address,
        Column::Description,
        Column::Photo,
        Column::Website,
        Column::Featured,
        Column::Approved,
        Column::Timestamp,
    ];

    pub fn alias(self) -> &'static str {
        match self {
            Column::BusinessName => "business_name",
            Column::OwnerName => "owner_name",
            Column::Category => "category",
            Column::District => "district",
            Column::Pincode => "pincode",
            Column::Mobile => "mobile",
            Column::Whatsapp => "whatsapp",
            Column::Email => "email",
            Column::Address => "address",
            Column::Description => "description",
            Column::Photo => "photo",
            Column::Website => "website",
            Column::Featured => "featured",
            Column::Approved => "approved",
            Column::Timestamp => "timestamp",
        }
    }

    pub fn from_alias(alias: &str) -> Option<Self> {
        Column::ALL.into_iter().find(|c| c.alias() == alias.trim())
    }

    /// Header text in the published "Form Responses 1" sheet.
    /// Whatsapp, email, website and featured have no form question yet.
    fn default_header(self) -> Option<&'static str> {
        Some(match self {
            Column::BusinessName => "🔹 3. व्यवसाय / दुकान का नाम / Business Name ✅ Required",
            Column::OwnerName => "🔹 1. पूरा नाम / Full Name ✅ Required",
            Column::Category => "🔹 4. व्यवसाय की श्रेणी / Business Category ✅ Required",
            Column::District => "🔹 6. जिला / District ✅ Required",
            Column::Pincode => "🔹 7. पिनकोड / Pincode ✅ Required",
            Column::Mobile => "🔹 2. मोबाइल नंबर / Mobile Number ✅ Required",
            Column::Address => {
                "🔹 8. पूरा व्यापार-व्यवसायिक पता / Full Business-Proffession Address ✅ Required"
            }
            Column::Description => {
                "🔹 10. व्यवसाय का संक्षिप्त विवरण / Brief Description about your Business ✅ Required"
            }
            Column::Photo => "Photo Link",
            Column::Approved => "✅ Approved?",
            Column::Timestamp => "Timestamp",
            Column::Whatsapp | Column::Email | Column::Website | Column::Featured => return None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ColumnMap {
    headers: HashMap<Column, String>,
}

impl Default for ColumnMap {
    fn default() -> Self {
        let headers = Column::ALL
            .into_iter()
            .filter_map(|c| c.default_header().map(|h| (c, h.to_string())))
            .collect();
        Self { headers }
    }
}

impl ColumnMap {
    /// Built-in headers with `overrides` (alias -> header) applied on top.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Result<Self, SourceError> {
        let mut map = Self::default();
        for (alias, header) in overrides {
            let column = Column::from_alias(alias)
                .ok_or_else(|| SourceError::Config(format!("unknown column alias {alias:?}")))?;
            map.headers.insert(column, header.trim().to_string());
        }
        Ok(map)
    }

    pub fn header(&self, column: Column) -> Option<&str> {
        self.headers.get(&column).map(String::as_str)
    }

    /// Trimmed, non-empty cell text for `column`.
    pub fn cell<'r>(&self, row: &'r RawRow, column: Column) -> Option<&'r str> {
        let header = self.header(column)?;
        row.get(header)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

/// Rows must carry this value in the approval column to be published.
#[derive(Debug, Clone)]
pub struct ApprovalRule {
    pub column: Column,
    pub value: String,
    pub case_sensitive: bool,
}

impl ApprovalRule {
    pub fn from_config(cfg: &ApprovalConfig) -> Result<Self, SourceError> {
        let column = Column::from_alias(&cfg.column_alias).ok_or_else(|| {
            SourceError::Config(format!("unknown approval column alias {:?}", cfg.column_alias))
        })?;
        Ok(Self {
            column,
            value: cfg.value.trim().to_string(),
            case_sensitive: cfg.case_sensitive,
        })
    }

    pub fn is_approved(&self, row: &RawRow, columns: &ColumnMap) -> bool {
        match columns.cell(row, self.column) {
            Some(v) if self.case_sensitive => v == self.value,
            Some(v) => v.eq_ignore_ascii_case(&self.value),
            None => false,
        }
    }
}

impl Default for ApprovalRule {
    fn default() -> Self {
        Self {
            column: Column::Approved,
            value: "true".to_string(),
            case_sensitive: false,
        }
    }
}

/// Rewrites a Google Drive share link to its direct-view form.
/// Links without a recognizable file id are returned unchanged.
pub fn drive_image_url(link: &str) -> String {
    let file_id = link
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .find(|part| part.len() >= DRIVE_ID_MIN_LEN);

    match file_id {
        Some(id) => format!("https://drive.google.com/uc?export=view&id={id}"),
        None => link.to_string(),
    }
}

/// URL-safe id derived from the fields that identify a submission.
pub fn row_id(timestamp: &str, business_name: &str, mobile: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(timestamp.as_bytes());
    hasher.update(b"|");
    hasher.update(business_name.as_bytes());
    hasher.update(b"|");
    hasher.update(mobile.as_bytes());
    let digest = hasher.finalize();
    URL_SAFE_NO_PAD.encode(&digest[..9])
}

fn truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "true" | "yes" | "1" | "y")
}

/// Applies the approval gate and the column mapping. Output keeps row order.
pub fn normalize_rows(rows: Vec<RawRow>, columns: &ColumnMap, approval: &ApprovalRule) -> Vec<Business> {
    let mut out = Vec::with_capacity(rows.len());
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (index, row) in rows.iter().enumerate() {
        if !approval.is_approved(row, columns) {
            log::debug!("row {index}: not approved, skipping");
            continue;
        }

        let Some(business_name) = columns.cell(row, Column::BusinessName) else {
            log::debug!("row {index}: missing business name, skipping");
            continue;
        };
        let owner_name = columns.cell(row, Column::OwnerName).unwrap_or_default();
        let mobile = columns.cell(row, Column::Mobile);
        let timestamp = columns.cell(row, Column::Timestamp);

        let base_id = row_id(timestamp.unwrap_or_default(), business_name, mobile.unwrap_or_default());
        let n = seen.entry(base_id.clone()).or_insert(0);
        *n += 1;
        let id = if *n == 1 { base_id } else { format!("{base_id}-{n}") };

        let owned = |c: Column| columns.cell(row, c).map(str::to_string);

        out.push(Business {
            id,
            business_name: business_name.to_string(),
            owner_name: owner_name.to_string(),
            category: owned(Column::Category).unwrap_or_default(),
            district: owned(Column::District).unwrap_or_default(),
            pincode: owned(Column::Pincode).unwrap_or_default(),
            phone: mobile.map(str::to_string),
            whatsapp: owned(Column::Whatsapp).or_else(|| mobile.map(str::to_string)),
            email: owned(Column::Email),
            address: owned(Column::Address),
            description: owned(Column::Description),
            image: columns.cell(row, Column::Photo).map(drive_image_url),
            website: owned(Column::Website),
            featured: columns.cell(row, Column::Featured).map(truthy).unwrap_or(false),
            state: Some(DEFAULT_STATE.to_string()),
            submitted_at: timestamp.map(str::to_string),
        });
    }

    out
}

#[cfg(test)]
pub(crate) fn form_row(pairs: &[(Column, &str)]) -> RawRow {
    let map = ColumnMap::default();
    pairs
        .iter()
        .filter_map(|(c, v)| map.header(*c).map(|h| (h.to_string(), v.to_string())))
        .collect()
}
