// src/domain/filter.rs

use crate::domain::business::Business;
use std::collections::HashMap;

/// Active filter criteria. An empty field places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    pub text: String,
    pub district: String,
    pub category: String,
    pub pincode: String,
}

impl FilterQuery {
    /// Reads `q`, `district`, `category` and `pincode` from decoded query params.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let get = |k: &str| params.get(k).map(|v| v.trim().to_string()).unwrap_or_default();
        Self {
            text: get("q"),
            district: get("district"),
            category: get("category"),
            pincode: get("pincode"),
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.district.is_empty()
            && self.category.is_empty()
            && self.pincode.is_empty()
    }

    /// Non-empty criteria as query pairs, in a fixed order.
    pub fn to_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("q", self.text.as_str()),
            ("district", self.district.as_str()),
            ("category", self.category.as_str()),
            ("pincode", self.pincode.as_str()),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .collect()
    }
}

/// Lower-cased needle computed once per filter pass.
struct Matcher<'q> {
    needle: String,
    query: &'q FilterQuery,
}

impl<'q> Matcher<'q> {
    fn new(query: &'q FilterQuery) -> Self {
        Self {
            needle: query.text.to_lowercase(),
            query,
        }
    }

    fn matches(&self, b: &Business) -> bool {
        self.text_matches(b)
            && (self.query.district.is_empty() || b.district == self.query.district)
            && (self.query.category.is_empty() || b.category == self.query.category)
            && (self.query.pincode.is_empty() || b.pincode.contains(self.query.pincode.as_str()))
    }

    fn text_matches(&self, b: &Business) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let hit = |s: &str| s.to_lowercase().contains(&self.needle);
        hit(b.business_name.as_str())
            || hit(b.owner_name.as_str())
            || b.description.as_deref().map(hit).unwrap_or(false)
    }
}

/// Returns the matching subset in dataset order. Never mutates `businesses`.
pub fn filter_businesses<'a>(businesses: &'a [Business], query: &FilterQuery) -> Vec<&'a Business> {
    let matcher = Matcher::new(query);
    businesses.iter().filter(|b| matcher.matches(b)).collect()
}

/// Optional tie-break ordering; the sort is stable so equal keys keep dataset order.
pub fn sort_by_district_category(subset: &mut [&Business]) {
    subset.sort_by(|a, b| {
        a.district
            .cmp(&b.district)
            .then_with(|| a.category.cmp(&b.category))
    });
}

/// Promoted entries, derived on every call.
pub fn featured_businesses(businesses: &[Business], limit: usize) -> Vec<&Business> {
    businesses.iter().filter(|b| b.featured).take(limit).collect()
}
