// src/domain/view.rs

use crate::domain::business::Business;

/// Presentation container for the results. Changes only on an explicit toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    /// Unknown or missing values fall back to the grid.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("list") => ViewMode::List,
            _ => ViewMode::Grid,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    #[cfg(test)]
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

/// The last computed subset plus how to present it.
#[derive(Debug, Clone)]
pub struct ResultsView<'a> {
    pub businesses: Vec<&'a Business>,
    pub mode: ViewMode,
}

impl<'a> ResultsView<'a> {
    pub fn new(businesses: Vec<&'a Business>, mode: ViewMode) -> Self {
        Self { businesses, mode }
    }

    /// Same subset, other container. The filter is not consulted.
    pub fn with_mode(self, mode: ViewMode) -> Self {
        Self { mode, ..self }
    }

    pub fn count(&self) -> usize {
        self.businesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }

    pub fn grid_visible(&self) -> bool {
        !self.is_empty() && self.mode == ViewMode::Grid
    }

    pub fn list_visible(&self) -> bool {
        !self.is_empty() && self.mode == ViewMode::List
    }
}
