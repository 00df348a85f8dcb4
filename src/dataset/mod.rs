//! Catalog and FAQ tables, loaded once from CSV.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup uses this module to read the product catalog and the chatbot FAQ
//! table into memory before accepting HTTP traffic. Both tables are immutable
//! afterwards and shared behind an `Arc` by every request.
//!
//! ERROR HANDLING
//! ==============
//! Any missing file, missing column, or undecodable row is reported as
//! `DatasetUnavailable`. The caller treats that as fatal: an empty table is
//! never substituted for a broken one.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::OnceCell;
use tracing::{info, warn};

/// Synthetic wildcard prepended to the material type choices.
pub const ALL_MATERIALS: &str = "All";

pub const PRODUCT_COLUMNS: [&str; 7] = [
    "Product Name",
    "Sustainable Alternative",
    "Material Type",
    "Price Range",
    "Vendor",
    "Benefit",
    "SDG Alignment",
];

pub const FAQ_COLUMNS: [&str; 2] = ["Question Keywords", "Answer"];

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DatasetUnavailable {
    #[error("dataset unavailable: cannot read {resource}: {source}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset unavailable: {resource} is missing required column '{column}'")]
    MissingColumn { resource: String, column: &'static str },
    #[error("dataset unavailable: {resource} is malformed: {source}")]
    Malformed {
        resource: String,
        #[source]
        source: csv::Error,
    },
    #[error("dataset unavailable: {resource} row {row} has an empty product name")]
    EmptyProductName { resource: String, row: usize },
}

// =============================================================================
// RECORDS
// =============================================================================

/// One row of the product catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Sustainable Alternative")]
    pub sustainable_alternative: String,
    #[serde(rename = "Material Type")]
    pub material_type: String,
    #[serde(rename = "Price Range")]
    pub price_range: String,
    #[serde(rename = "Vendor")]
    pub vendor: String,
    #[serde(rename = "Benefit")]
    pub benefit: String,
    /// `None` means "not applicable".
    #[serde(rename = "SDG Alignment", default)]
    pub sdg_alignment: Option<String>,
}

impl ProductRecord {
    /// SDG alignment as displayed, `N/A` when absent.
    #[must_use]
    pub fn sdg_alignment_or_na(&self) -> &str {
        self.sdg_alignment.as_deref().unwrap_or("N/A")
    }
}

/// One row of the FAQ table. Keywords are trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqRecord {
    pub keywords: Vec<String>,
    pub answer: String,
}

impl FaqRecord {
    /// Build a record from the raw comma-separated keyword cell.
    #[must_use]
    pub fn new(raw_keywords: &str, answer: impl Into<String>) -> Self {
        let keywords = raw_keywords
            .split(',')
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords, answer: answer.into() }
    }
}

#[derive(Deserialize)]
struct RawFaqRow {
    #[serde(rename = "Question Keywords")]
    keywords: String,
    #[serde(rename = "Answer")]
    answer: String,
}

// =============================================================================
// TABLES
// =============================================================================

/// Product catalog in source row order.
#[derive(Debug, Clone, Default)]
pub struct ProductTable {
    rows: Vec<ProductRecord>,
    material_types: Vec<String>,
}

impl ProductTable {
    /// Build a table from records, deriving the material types in first-seen order.
    #[must_use]
    pub fn new(rows: Vec<ProductRecord>) -> Self {
        let mut material_types: Vec<String> = Vec::new();
        for row in &rows {
            if !material_types.contains(&row.material_type) {
                material_types.push(row.material_type.clone());
            }
        }
        Self { rows, material_types }
    }

    /// Parse a catalog from CSV text.
    ///
    /// # Errors
    ///
    /// Returns `DatasetUnavailable` if a required column is missing, a row
    /// cannot be decoded, or a row has an empty product name.
    pub fn from_reader<R: Read>(resource: &str, reader: R) -> Result<Self, DatasetUnavailable> {
        let mut csv_reader = csv_reader(reader);
        require_columns(resource, &mut csv_reader, &PRODUCT_COLUMNS)?;

        let mut rows = Vec::new();
        for (idx, record) in csv_reader.deserialize::<ProductRecord>().enumerate() {
            let mut record = record.map_err(|source| malformed(resource, source))?;
            if record.product_name.trim().is_empty() {
                return Err(DatasetUnavailable::EmptyProductName { resource: resource.to_owned(), row: idx + 1 });
            }
            if record.sdg_alignment.as_deref().is_some_and(|s| s.trim().is_empty()) {
                record.sdg_alignment = None;
            }
            rows.push(record);
        }

        Ok(Self::new(rows))
    }

    #[must_use]
    pub fn rows(&self) -> &[ProductRecord] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Material type choices: `All` followed by each distinct value in first-seen order.
    pub fn distinct_material_types(&self) -> impl Iterator<Item = &str> {
        std::iter::once(ALL_MATERIALS).chain(self.material_types.iter().map(String::as_str))
    }

    /// Whether `choice` is a valid material type selection.
    #[must_use]
    pub fn has_material_type(&self, choice: &str) -> bool {
        choice == ALL_MATERIALS || self.material_types.iter().any(|m| m == choice)
    }
}

/// FAQ table in source row order.
#[derive(Debug, Clone, Default)]
pub struct FaqTable {
    rows: Vec<FaqRecord>,
}

impl FaqTable {
    #[must_use]
    pub fn new(rows: Vec<FaqRecord>) -> Self {
        Self { rows }
    }

    /// Parse an FAQ table from CSV text.
    ///
    /// Rows whose keyword cell yields no terms are kept but can never match.
    ///
    /// # Errors
    ///
    /// Returns `DatasetUnavailable` if a required column is missing or a row
    /// cannot be decoded.
    pub fn from_reader<R: Read>(resource: &str, reader: R) -> Result<Self, DatasetUnavailable> {
        let mut csv_reader = csv_reader(reader);
        require_columns(resource, &mut csv_reader, &FAQ_COLUMNS)?;

        let mut rows = Vec::new();
        for (idx, raw) in csv_reader.deserialize::<RawFaqRow>().enumerate() {
            let raw = raw.map_err(|source| malformed(resource, source))?;
            let record = FaqRecord::new(&raw.keywords, raw.answer);
            if record.keywords.is_empty() {
                warn!(resource, row = idx + 1, "faq row has no keywords and can never match");
            }
            rows.push(record);
        }

        Ok(Self::new(rows))
    }

    #[must_use]
    pub fn rows(&self) -> &[FaqRecord] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader)
}

fn require_columns<R: Read>(
    resource: &str,
    reader: &mut csv::Reader<R>,
    columns: &[&'static str],
) -> Result<(), DatasetUnavailable> {
    let headers = reader.headers().map_err(|source| malformed(resource, source))?;
    for &column in columns {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetUnavailable::MissingColumn { resource: resource.to_owned(), column });
        }
    }
    Ok(())
}

fn malformed(resource: &str, source: csv::Error) -> DatasetUnavailable {
    DatasetUnavailable::Malformed { resource: resource.to_owned(), source }
}

// =============================================================================
// LOADER
// =============================================================================

/// Both tables, immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub products: ProductTable,
    pub faq: FaqTable,
}

/// Loads the dataset from disk at most once and caches the result.
pub struct DatasetLoader {
    catalog_path: PathBuf,
    faq_path: PathBuf,
    cache: OnceCell<Arc<Dataset>>,
}

impl DatasetLoader {
    #[must_use]
    pub fn new(catalog_path: impl Into<PathBuf>, faq_path: impl Into<PathBuf>) -> Self {
        Self { catalog_path: catalog_path.into(), faq_path: faq_path.into(), cache: OnceCell::new() }
    }

    /// Load both tables, or return the cached dataset from an earlier call.
    ///
    /// A failed load is not cached; the next call tries again.
    ///
    /// # Errors
    ///
    /// Returns `DatasetUnavailable` if either resource is missing or malformed.
    pub async fn load(&self) -> Result<Arc<Dataset>, DatasetUnavailable> {
        let dataset = self
            .cache
            .get_or_try_init(|| async {
                let products = ProductTable::from_reader(&display(&self.catalog_path), open(&self.catalog_path)?)?;
                let faq = FaqTable::from_reader(&display(&self.faq_path), open(&self.faq_path)?)?;
                info!(
                    products = products.len(),
                    material_types = products.material_types.len(),
                    faq_rows = faq.len(),
                    "dataset loaded"
                );
                Ok::<_, DatasetUnavailable>(Arc::new(Dataset { products, faq }))
            })
            .await?;
        Ok(Arc::clone(dataset))
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

fn open(path: &Path) -> Result<File, DatasetUnavailable> {
    File::open(path).map_err(|source| DatasetUnavailable::Io { resource: display(path), source })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
