//! Product filter engine: narrows the catalog to the first matching alternative.
//!
//! DESIGN
//! ======
//! Filters are plain intersections applied in a fixed sequence (name query,
//! cheap marker, biodegradable keywords, material type) over the catalog in
//! source order. The result is the first surviving row; there is no ranking.
//!
//! TRADE-OFFS
//! ==========
//! "Cheapest only" is a literal substring test for `cheap` in the price range,
//! not a numeric comparison. Rows with purely numeric price ranges never pass
//! it, even when they are inexpensive.

use serde::{Deserialize, Deserializer};

use crate::dataset::{ALL_MATERIALS, ProductRecord, ProductTable};

/// Marker a price range must contain to pass the "cheapest only" filter.
pub const CHEAP_MARKER: &str = "cheap";

/// Benefit keywords that mark a product as biodegradable (any one suffices).
pub const BIODEGRADABLE_KEYWORDS: [&str; 4] = ["bio", "compost", "plant", "natural"];

// =============================================================================
// CRITERIA
// =============================================================================

/// Material type selection. `All` disables the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MaterialFilter {
    #[default]
    All,
    Only(String),
}

impl MaterialFilter {
    /// Interpret a dropdown choice; the literal `All` is the wildcard.
    #[must_use]
    pub fn from_choice(choice: &str) -> Self {
        if choice == ALL_MATERIALS { Self::All } else { Self::Only(choice.to_owned()) }
    }

    #[must_use]
    pub fn as_choice(&self) -> &str {
        match self {
            Self::All => ALL_MATERIALS,
            Self::Only(m) => m,
        }
    }

    /// Exact, case-sensitive comparison, unlike the other filters.
    fn admits(&self, material_type: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(m) => m == material_type,
        }
    }
}

impl<'de> Deserialize<'de> for MaterialFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let choice = String::deserialize(deserializer)?;
        Ok(Self::from_choice(&choice))
    }
}

/// Active filters for one search action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilterCriteria {
    /// Product name substring; empty matches every row.
    #[serde(default, rename = "q")]
    pub query: String,
    #[serde(default)]
    pub cheapest_only: bool,
    #[serde(default)]
    pub biodegradable_only: bool,
    #[serde(default)]
    pub material: MaterialFilter,
}

impl FilterCriteria {
    #[cfg(test)]
    #[must_use]
    pub fn query(query: impl Into<String>) -> Self {
        Self { query: query.into(), ..Self::default() }
    }

    /// Whether `row` survives every active filter.
    #[must_use]
    pub fn admits(&self, row: &ProductRecord) -> bool {
        matches_query(row, &self.query)
            && (!self.cheapest_only || is_cheap(row))
            && (!self.biodegradable_only || is_biodegradable(row))
            && self.material.admits(&row.material_type)
    }
}

// =============================================================================
// SEARCH
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    Found { product: &'a ProductRecord },
    NotFound,
}

impl<'a> SearchOutcome<'a> {
    #[must_use]
    pub fn product(self) -> Option<&'a ProductRecord> {
        match self {
            Self::Found { product } => Some(product),
            Self::NotFound => None,
        }
    }
}

/// Every row surviving `criteria`, in source order.
pub fn candidates<'a>(table: &'a ProductTable, criteria: &FilterCriteria) -> impl Iterator<Item = &'a ProductRecord> {
    table.rows().iter().filter(move |row| criteria.admits(row))
}

/// Return the first row surviving `criteria`, or `NotFound`.
#[must_use]
pub fn search<'a>(table: &'a ProductTable, criteria: &FilterCriteria) -> SearchOutcome<'a> {
    match candidates(table, criteria).next() {
        Some(product) => SearchOutcome::Found { product },
        None => SearchOutcome::NotFound,
    }
}

// =============================================================================
// PREDICATES
// =============================================================================

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches_query(row: &ProductRecord, query: &str) -> bool {
    query.is_empty() || contains_ignore_case(&row.product_name, query)
}

fn is_cheap(row: &ProductRecord) -> bool {
    contains_ignore_case(&row.price_range, CHEAP_MARKER)
}

fn is_biodegradable(row: &ProductRecord) -> bool {
    let benefit = row.benefit.to_lowercase();
    BIODEGRADABLE_KEYWORDS.iter().any(|k| benefit.contains(k))
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
