//! Shared query parameter types for list handlers.

use folio_core::catalog::{CategorySelection, FilterState};
use folio_core::pagination::{clamp_page, clamp_per_page};
use folio_core::types::DbId;
use serde::Deserialize;

/// `?page=&per_page=&category_id=&featured=&search=` for project and
/// achievement listings.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub category_id: Option<DbId>,
    #[serde(default)]
    pub featured: bool,
    pub search: Option<String>,
}

impl ListParams {
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            search: self.search.clone().unwrap_or_default(),
            category: CategorySelection::from(self.category_id),
            featured_only: self.featured,
        }
    }

    /// `(page, per_page)` clamped to valid bounds.
    pub fn page(&self) -> (u32, u32) {
        (clamp_page(self.page), clamp_per_page(self.per_page))
    }
}
