//! Tests for pagination module

use super::*;
use crate::types::RestaurantSummary;
use serde_json::json;
use url::Url;

#[test]
fn test_page_deserialize_full_envelope() {
    let page: Page<RestaurantSummary> = serde_json::from_value(json!({
        "count": 12,
        "results": [
            {"id": 1, "nome": "Alpha"},
            {"id": 2, "nome": "Beta"}
        ],
        "next": "http://localhost:8000/api/v1/restaurantes/?page=3&search=a",
        "previous": "http://localhost:8000/api/v1/restaurantes/?search=a"
    }))
    .unwrap();

    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[1].name, "Beta");
    assert_eq!(
        page.next.as_ref().map(Url::as_str),
        Some("http://localhost:8000/api/v1/restaurantes/?page=3&search=a")
    );
    assert_eq!(
        page.previous.as_ref().map(Url::as_str),
        Some("http://localhost:8000/api/v1/restaurantes/?search=a")
    );
}

#[test]
fn test_page_deserialize_null_cursors() {
    let page: Page<RestaurantSummary> = serde_json::from_value(json!({
        "results": [],
        "next": null,
        "previous": null
    }))
    .unwrap();

    assert!(page.results.is_empty());
    assert!(page.next.is_none());
    assert!(page.previous.is_none());
}

#[test]
fn test_page_deserialize_missing_cursors() {
    let page: Page<RestaurantSummary> =
        serde_json::from_value(json!({"results": [{"id": 3, "nome": "Gamma"}]})).unwrap();

    assert_eq!(page.results[0].id, 3);
    assert!(page.next.is_none());
}

#[test]
fn test_page_rejects_relative_cursor() {
    let result = serde_json::from_value::<Page<RestaurantSummary>>(json!({
        "results": [],
        "next": "?page=2",
        "previous": null
    }));
    assert!(result.is_err());
}

#[test]
fn test_page_rejects_missing_results() {
    let result = serde_json::from_value::<Page<RestaurantSummary>>(json!({"next": null}));
    assert!(result.is_err());
}

#[test]
fn test_page_empty_cursors_are_absent() {
    let page: Page<RestaurantSummary> = serde_json::from_value(json!({
        "results": [{"id": 1, "nome": "A"}],
        "next": "",
        "previous": ""
    }))
    .unwrap();

    assert_eq!(page.results, vec![RestaurantSummary::new(1, "A")]);
    assert!(page.next.is_none());
    assert!(page.previous.is_none());
}

#[test]
fn test_page_empty_next_with_real_previous() {
    let page: Page<RestaurantSummary> = serde_json::from_value(json!({
        "results": [],
        "next": "",
        "previous": "http://api.test/r/?page=1"
    }))
    .unwrap();

    assert!(page.next.is_none());
    assert_eq!(
        page.previous.as_ref().map(Url::as_str),
        Some("http://api.test/r/?page=1")
    );
}

#[test]
fn test_direction_labels() {
    assert_eq!(Direction::Next.label(), "Próxima página");
    assert_eq!(Direction::Previous.label(), "Página anterior");
}
