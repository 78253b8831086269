// src/domain/business.rs

use crate::domain::facets::Facets;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Characters left as-is in an id path segment.
const ID_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// One directory entry, after the source adapter has normalized it.
/// Optional display fields are `None` rather than empty strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    #[serde(deserialize_with = "id_from_str_or_int")]
    pub id: String,
    pub business_name: String,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub pincode: String,

    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "businessImage")]
    pub image: Option<String>,
    #[serde(default)]
    pub website: Option<String>,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub state: Option<String>,
    /// Raw form timestamp for sheet-backed records.
    #[serde(default)]
    pub submitted_at: Option<String>,
}

impl Business {
    /// Records need both names for a card to make sense.
    /// `/business/{id}` with the id percent-encoded as one path segment.
    pub fn profile_path(&self) -> String {
        format!("/business/{}", utf8_percent_encode(&self.id, ID_SEGMENT))
    }

    pub fn is_displayable(&self) -> bool {
        !self.business_name.trim().is_empty() && !self.owner_name.trim().is_empty()
    }

    /// Turns blank optional strings into `None` so templates only test `is_some`.
    pub fn tidy(mut self) -> Self {
        for field in [
            &mut self.phone,
            &mut self.whatsapp,
            &mut self.email,
            &mut self.address,
            &mut self.description,
            &mut self.image,
            &mut self.website,
            &mut self.state,
            &mut self.submitted_at,
        ] {
            if field.as_deref().map(|s| s.trim().is_empty()).unwrap_or(false) {
                *field = None;
            }
        }
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Str(String),
}

fn id_from_str_or_int<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Int(n) => n.to_string(),
        RawId::Str(s) => s.trim().to_string(),
    })
}

/// Immutable snapshot of the directory. Replaced as a whole on reload,
/// so the facets and the id index can never drift from the records.
#[derive(Debug, Default)]
pub struct Dataset {
    businesses: Vec<Business>,
    facets: Facets,
    by_id: HashMap<String, usize>,
}

impl Dataset {
    /// Keeps source order. Drops undisplayable records and any later record
    /// that reuses an id already taken in this snapshot.
    pub fn new(records: Vec<Business>) -> Self {
        let mut businesses = Vec::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());

        for record in records {
            let record = record.tidy();
            if !record.is_displayable() {
                log::debug!("dropping record {:?}: missing business or owner name", record.id);
                continue;
            }
            if by_id.contains_key(&record.id) {
                log::warn!("dropping record with duplicate id {:?}", record.id);
                continue;
            }
            by_id.insert(record.id.clone(), businesses.len());
            businesses.push(record);
        }

        let facets = Facets::from_businesses(&businesses);

        Self {
            businesses,
            facets,
            by_id,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn get(&self, id: &str) -> Option<&Business> {
        self.by_id.get(id).map(|&i| &self.businesses[i])
    }

    pub fn len(&self) -> usize {
        self.businesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn sample(id: &str, name: &str, district: &str, category: &str, pincode: &str) -> Business {
    Business {
        id: id.to_string(),
        business_name: name.to_string(),
        owner_name: format!("{name} owner"),
        category: category.to_string(),
        district: district.to_string(),
        pincode: pincode.to_string(),
        phone: None,
        whatsapp: None,
        email: None,
        address: None,
        description: None,
        image: None,
        website: None,
        featured: false,
        state: None,
        submitted_at: None,
    }
}
