use super::*;
use crate::services::catalog::MaterialFilter;
use crate::state::test_helpers;

fn body(response: Json<SearchResponse>) -> serde_json::Value {
    serde_json::to_value(response.0).unwrap()
}

#[tokio::test]
async fn materials_lists_all_first() {
    let state = test_helpers::test_app_state();
    let Json(response) = materials(State(state)).await;
    assert_eq!(response.materials, ["All", "Glass", "Bamboo", "Jute", "Paper"]);
}

#[tokio::test]
async fn search_found_returns_product() {
    let state = test_helpers::test_app_state();
    let criteria = FilterCriteria { query: "bottle".into(), cheapest_only: true, ..FilterCriteria::default() };
    let json = body(search(State(state), Query(criteria)).await.unwrap());

    assert_eq!(json["status"], "found");
    assert_eq!(json["product"]["product_name"], "Plastic Bottle");
    assert_eq!(json["product"]["sustainable_alternative"], "Glass Bottle");
    assert_eq!(json["product"]["vendor"], "GreenEarth Ltd");
    assert_eq!(json["product"]["sdg_alignment"], "SDG 12");
}

#[tokio::test]
async fn search_renders_missing_sdg_as_na() {
    let state = test_helpers::test_app_state();
    let json = body(search(State(state), Query(FilterCriteria::query("straw"))).await.unwrap());
    assert_eq!(json["product"]["sdg_alignment"], "N/A");
}

#[tokio::test]
async fn search_not_found_is_ok_with_hint() {
    let state = test_helpers::test_app_state();
    let criteria =
        FilterCriteria { query: "bottle".into(), material: MaterialFilter::from_choice("Jute"), ..FilterCriteria::default() };
    let json = body(search(State(state), Query(criteria)).await.unwrap());

    assert_eq!(json["status"], "not_found");
    assert_eq!(json["message"], NOT_FOUND_MESSAGE);
    assert_eq!(json["hint"], NOT_FOUND_HINT);
}

#[tokio::test]
async fn search_unknown_material_is_bad_request() {
    let state = test_helpers::test_app_state();
    let criteria = FilterCriteria { material: MaterialFilter::from_choice("Metal"), ..FilterCriteria::default() };
    let err = search(State(state), Query(criteria)).await.unwrap_err();
    assert_eq!(err, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_empty_criteria_returns_first_row() {
    let state = test_helpers::test_app_state();
    let json = body(search(State(state), Query(FilterCriteria::default())).await.unwrap());
    assert_eq!(json["product"]["product_name"], "Plastic Bottle");
}

#[test]
fn product_view_copies_every_field() {
    let mut row = test_helpers::dummy_product("Cup", "Paper Cup");
    row.sdg_alignment = Some("SDG 13".into());
    let view = ProductView::from(&row);
    assert_eq!(view.product_name, "Cup");
    assert_eq!(view.sustainable_alternative, "Paper Cup");
    assert_eq!(view.material_type, "Paper");
    assert_eq!(view.price_range, "Cheap");
    assert_eq!(view.vendor, "EcoCraft");
    assert_eq!(view.benefit, "Reusable");
    assert_eq!(view.sdg_alignment, "SDG 13");
}
