//! Tests for the restaurant list view

use super::*;
use crate::error::{Error, Result};
use crate::pagination::Page;
use crate::types::{RacePolicy, RestaurantSummary, SearchParameters, SortOrder};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use url::Url;

const ENDPOINT: &str = "http://api.test/api/v1/restaurantes/";

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

fn restaurant(id: u64, name: &str) -> RestaurantSummary {
    RestaurantSummary::new(id, name)
}

/// Scripted page source. URLs without a script fail with 404; URLs with a
/// gate block until the gate is opened.
#[derive(Default)]
struct FakeSource {
    pages: Mutex<HashMap<String, Option<Page<RestaurantSummary>>>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    calls: Mutex<Vec<(String, SearchParameters)>>,
}

impl FakeSource {
    fn serve(&self, url: &str, page: Page<RestaurantSummary>) {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), Some(page));
    }

    fn fail(&self, url: &str) {
        self.pages.lock().unwrap().insert(url.to_string(), None);
    }

    fn gate(&self, url: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates
            .lock()
            .unwrap()
            .insert(url.to_string(), Arc::clone(&gate));
        gate
    }

    fn calls(&self) -> Vec<(String, SearchParameters)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for FakeSource {
    async fn fetch_page(
        &self,
        url: &Url,
        params: &SearchParameters,
    ) -> Result<Page<RestaurantSummary>> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), params.clone()));

        let gate = self.gates.lock().unwrap().get(url.as_str()).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        match self.pages.lock().unwrap().get(url.as_str()) {
            Some(Some(page)) => Ok(page.clone()),
            Some(None) => Err(Error::http_status(500, "boom")),
            None => Err(Error::http_status(404, "")),
        }
    }
}

fn view_with(source: &Arc<FakeSource>) -> (RestaurantListView, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let view = RestaurantListView::new(url(ENDPOINT), Arc::clone(source) as Arc<dyn PageSource>)
        .with_diagnostics(Arc::clone(&sink) as Arc<dyn DiagnosticSink>);
    (view, sink)
}

#[tokio::test]
async fn test_mount_issues_one_unfiltered_request() {
    let source = Arc::new(FakeSource::default());
    source.serve(ENDPOINT, Page::new(vec![restaurant(1, "Alpha")]));
    let (view, sink) = view_with(&source);

    view.mount().await.unwrap();

    assert_eq!(
        source.calls(),
        vec![(ENDPOINT.to_string(), SearchParameters::none())]
    );
    assert_eq!(view.snapshot().await.restaurants, vec![restaurant(1, "Alpha")]);
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_page_with_next_only() {
    let u1 = "http://api.test/api/v1/restaurantes/?page=2";
    let source = Arc::new(FakeSource::default());
    source.serve(
        ENDPOINT,
        Page::new(vec![restaurant(1, "A"), restaurant(2, "B")]).with_next(url(u1)),
    );
    let (view, _sink) = view_with(&source);

    view.mount().await.unwrap();
    let state = view.snapshot().await;

    assert_eq!(state.restaurants, vec![restaurant(1, "A"), restaurant(2, "B")]);
    assert!(!state.is_enabled(crate::pagination::Direction::Previous));
    assert!(state.is_enabled(crate::pagination::Direction::Next));
    assert_eq!(state.next.as_ref().map(Url::as_str), Some(u1));
}

#[tokio::test]
async fn test_next_follows_cursor_verbatim() {
    let u1 = "http://api.test/api/v1/restaurantes/?page=2&search=pizza";
    let source = Arc::new(FakeSource::default());
    source.serve(ENDPOINT, Page::new(vec![restaurant(1, "A")]).with_next(url(u1)));
    source.serve(
        u1,
        Page::new(vec![restaurant(3, "C")]).with_previous(url(ENDPOINT)),
    );
    let (view, _sink) = view_with(&source);
    view.mount().await.unwrap();

    view.next().await.expect("next enabled").await.unwrap();

    let calls = source.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1], (u1.to_string(), SearchParameters::none()));

    let state = view.snapshot().await;
    assert_eq!(state.restaurants, vec![restaurant(3, "C")]);
    assert!(state.next.is_none());
    assert_eq!(state.previous.as_ref().map(Url::as_str), Some(ENDPOINT));
}

#[tokio::test]
async fn test_previous_follows_cursor() {
    let u2 = "http://api.test/api/v1/restaurantes/?page=2";
    let source = Arc::new(FakeSource::default());
    source.serve(ENDPOINT, Page::new(vec![restaurant(1, "A")]).with_next(url(u2)));
    source.serve(
        u2,
        Page::new(vec![restaurant(2, "B")]).with_previous(url(ENDPOINT)),
    );
    let (view, _sink) = view_with(&source);
    view.mount().await.unwrap();
    view.next().await.unwrap().await.unwrap();

    view.previous().await.expect("previous enabled").await.unwrap();

    assert_eq!(source.calls()[2].0, ENDPOINT);
    assert_eq!(view.snapshot().await.restaurants, vec![restaurant(1, "A")]);
}

#[tokio::test]
async fn test_disabled_controls_issue_no_request() {
    let source = Arc::new(FakeSource::default());
    source.serve(ENDPOINT, Page::new(vec![restaurant(1, "A")]));
    let (view, _sink) = view_with(&source);
    view.mount().await.unwrap();

    assert!(view.next().await.is_none());
    assert!(view.previous().await.is_none());
    assert_eq!(source.calls().len(), 1);
}

#[tokio::test]
async fn test_submit_search_with_ordering_only() {
    let source = Arc::new(FakeSource::default());
    source.serve(ENDPOINT, Page::new(vec![restaurant(1, "A")]));
    let (view, _sink) = view_with(&source);

    view.set_ordering(SortOrder::Id).await;
    view.submit_search().await.await.unwrap();

    assert_eq!(
        source.calls(),
        vec![(
            ENDPOINT.to_string(),
            SearchParameters {
                search: None,
                ordering: Some(SortOrder::Id),
            }
        )]
    );
}

#[tokio::test]
async fn test_submit_search_targets_endpoint_even_when_paged() {
    let u2 = "http://api.test/api/v1/restaurantes/?page=2";
    let source = Arc::new(FakeSource::default());
    source.serve(ENDPOINT, Page::new(vec![restaurant(1, "A")]).with_next(url(u2)));
    source.serve(
        u2,
        Page::new(vec![restaurant(2, "B")]).with_previous(url(ENDPOINT)),
    );
    let (view, _sink) = view_with(&source);
    view.mount().await.unwrap();
    view.next().await.unwrap().await.unwrap();

    view.set_search("pizza").await;
    view.set_ordering(SortOrder::Name).await;
    view.submit_search().await.await.unwrap();

    let calls = source.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(
        calls[2],
        (
            ENDPOINT.to_string(),
            SearchParameters {
                search: Some("pizza".to_string()),
                ordering: Some(SortOrder::Name),
            }
        )
    );
}

#[tokio::test]
async fn test_form_inputs_issue_no_request() {
    let source = Arc::new(FakeSource::default());
    let (view, _sink) = view_with(&source);

    view.set_search("sushi").await;
    view.set_ordering(SortOrder::Name).await;

    assert!(source.calls().is_empty());
    let state = view.snapshot().await;
    assert_eq!(state.search, "sushi");
    assert_eq!(state.ordering, SortOrder::Name);
}

#[tokio::test]
async fn test_failed_load_leaves_state_untouched() {
    let u2 = "http://api.test/api/v1/restaurantes/?page=2";
    let source = Arc::new(FakeSource::default());
    source.serve(ENDPOINT, Page::new(vec![restaurant(1, "A")]).with_next(url(u2)));
    source.fail(u2);
    let (view, sink) = view_with(&source);
    view.mount().await.unwrap();
    view.set_search("typed but not submitted").await;
    let before = view.snapshot().await;

    view.next().await.unwrap().await.unwrap();

    assert_eq!(view.snapshot().await, before);
    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].url.as_str(), u2);
    assert!(entries[0].message.contains("HTTP 500"));
}

#[tokio::test]
async fn test_last_arrival_wins_applies_stale_response() {
    let slow = "http://api.test/api/v1/restaurantes/?page=1";
    let fast = "http://api.test/api/v1/restaurantes/?page=3";
    let source = Arc::new(FakeSource::default());
    source.serve(slow, Page::new(vec![restaurant(1, "Stale")]));
    source.serve(fast, Page::new(vec![restaurant(3, "Fresh")]));
    let slow_gate = source.gate(slow);
    let fast_gate = source.gate(fast);
    let (view, _sink) = view_with(&source);

    let first = view.load_page(url(slow), SearchParameters::none());
    let second = view.load_page(url(fast), SearchParameters::none());

    fast_gate.notify_one();
    second.await.unwrap();
    assert_eq!(view.snapshot().await.restaurants, vec![restaurant(3, "Fresh")]);

    slow_gate.notify_one();
    first.await.unwrap();
    assert_eq!(view.snapshot().await.restaurants, vec![restaurant(1, "Stale")]);
}

#[tokio::test]
async fn test_latest_request_wins_discards_stale_response() {
    let slow = "http://api.test/api/v1/restaurantes/?page=1";
    let fast = "http://api.test/api/v1/restaurantes/?page=3";
    let source = Arc::new(FakeSource::default());
    source.serve(slow, Page::new(vec![restaurant(1, "Stale")]));
    source.serve(fast, Page::new(vec![restaurant(3, "Fresh")]));
    let slow_gate = source.gate(slow);
    let fast_gate = source.gate(fast);
    let (view, sink) = view_with(&source);
    let view = view.with_race_policy(RacePolicy::LatestRequestWins);

    let first = view.load_page(url(slow), SearchParameters::none());
    let second = view.load_page(url(fast), SearchParameters::none());

    fast_gate.notify_one();
    second.await.unwrap();
    slow_gate.notify_one();
    first.await.unwrap();

    assert_eq!(view.snapshot().await.restaurants, vec![restaurant(3, "Fresh")]);
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_revision_bumps_only_on_applied_pages() {
    let u2 = "http://api.test/api/v1/restaurantes/?page=2";
    let source = Arc::new(FakeSource::default());
    source.serve(ENDPOINT, Page::new(vec![restaurant(1, "A")]).with_next(url(u2)));
    source.fail(u2);
    let (view, _sink) = view_with(&source);
    let revision = view.subscribe();

    view.mount().await.unwrap();
    assert_eq!(*revision.borrow(), 1);

    view.next().await.unwrap().await.unwrap();
    assert_eq!(*revision.borrow(), 1);
}

#[test]
fn test_recording_sink() {
    let sink = RecordingSink::new();
    assert!(sink.is_empty());

    sink.report(&url(ENDPOINT), &Error::Timeout { timeout_ms: 30 });

    assert_eq!(sink.len(), 1);
    assert_eq!(
        sink.entries()[0],
        Diagnostic {
            url: url(ENDPOINT),
            message: "Request timeout after 30ms".to_string(),
        }
    );
}

#[test]
fn test_view_debug() {
    let source = Arc::new(FakeSource::default());
    let (view, _sink) = view_with(&source);
    let debug = format!("{view:?}");
    assert!(debug.contains("RestaurantListView"));
    assert!(debug.contains(ENDPOINT));
}
