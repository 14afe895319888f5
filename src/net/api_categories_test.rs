use super::*;

#[test]
fn category_endpoint_formats_expected_path() {
    assert_eq!(category_endpoint(7), "/api/categories/categories/7/");
}

#[test]
fn collection_path_matches_backend_route() {
    assert_eq!(CATEGORIES_PATH, "/api/categories/categories/");
}
