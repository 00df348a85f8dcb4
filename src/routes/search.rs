//! Product search routes.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use crate::dataset::ProductRecord;
use crate::services::catalog::{self, FilterCriteria};
use crate::state::AppState;

pub const NOT_FOUND_MESSAGE: &str = "No matching alternative found in database.";
pub const NOT_FOUND_HINT: &str = "Try terms like: bottle, straw, bag, film, cutlery, toothbrush, etc.";

/// Product as shown to the user; SDG alignment reads `N/A` when absent.
#[derive(Debug, Serialize)]
pub struct ProductView {
    pub product_name: String,
    pub sustainable_alternative: String,
    pub material_type: String,
    pub price_range: String,
    pub vendor: String,
    pub benefit: String,
    pub sdg_alignment: String,
}

impl From<&ProductRecord> for ProductView {
    fn from(row: &ProductRecord) -> Self {
        Self {
            product_name: row.product_name.clone(),
            sustainable_alternative: row.sustainable_alternative.clone(),
            material_type: row.material_type.clone(),
            price_range: row.price_range.clone(),
            vendor: row.vendor.clone(),
            benefit: row.benefit.clone(),
            sdg_alignment: row.sdg_alignment_or_na().to_owned(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchResponse {
    Found { product: ProductView },
    NotFound { message: &'static str, hint: &'static str },
}

#[derive(Debug, Serialize)]
pub struct MaterialsResponse {
    pub materials: Vec<String>,
}

/// `GET /api/materials`: material type choices, `All` first.
pub async fn materials(State(state): State<AppState>) -> Json<MaterialsResponse> {
    let materials = state.dataset.products.distinct_material_types().map(str::to_owned).collect();
    Json(MaterialsResponse { materials })
}

/// `GET /api/search`: first catalog row matching the query and filters.
pub async fn search(
    State(state): State<AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> Result<Json<SearchResponse>, StatusCode> {
    let products = &state.dataset.products;
    if !products.has_material_type(criteria.material.as_choice()) {
        return Err(StatusCode::BAD_REQUEST);
    }

    let response = match catalog::search(products, &criteria).product() {
        Some(product) => SearchResponse::Found { product: product.into() },
        None => SearchResponse::NotFound { message: NOT_FOUND_MESSAGE, hint: NOT_FOUND_HINT },
    };
    Ok(Json(response))
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
