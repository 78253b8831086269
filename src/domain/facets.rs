// src/domain/facets.rs

use crate::domain::business::Business;
use std::collections::BTreeSet;

/// Distinct, sorted option lists for the filter controls.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Facets {
    pub districts: Vec<String>,
    pub categories: Vec<String>,
    pub pincodes: Vec<String>,
}

impl Facets {
    pub fn from_businesses(businesses: &[Business]) -> Self {
        let mut districts = BTreeSet::new();
        let mut categories = BTreeSet::new();
        let mut pincodes = BTreeSet::new();

        for b in businesses {
            insert_non_blank(&mut districts, &b.district);
            insert_non_blank(&mut categories, &b.category);
            insert_non_blank(&mut pincodes, &b.pincode);
        }

        Self {
            districts: districts.into_iter().collect(),
            categories: categories.into_iter().collect(),
            pincodes: pincodes.into_iter().collect(),
        }
    }
}

fn insert_non_blank(set: &mut BTreeSet<String>, value: &str) {
    if !value.trim().is_empty() {
        set.insert(value.to_string());
    }
}
