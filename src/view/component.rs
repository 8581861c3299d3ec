//! The restaurant list view component

use super::diagnostics::{DiagnosticSink, TracingSink};
use super::loader::PageSource;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::Direction;
use crate::state::ViewState;
use crate::types::{RacePolicy, SearchParameters, SortOrder};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use url::Url;

/// Paginated, searchable restaurant list.
///
/// Cloning yields another handle to the same view; all clones share one
/// `ViewState`.
#[derive(Clone)]
pub struct RestaurantListView {
    endpoint: Url,
    source: Arc<dyn PageSource>,
    diagnostics: Arc<dyn DiagnosticSink>,
    policy: RacePolicy,
    state: Arc<RwLock<ViewState>>,
    /// Sequence number of the most recently issued load
    issued: Arc<AtomicU64>,
    /// Bumped after every applied page
    revision: Arc<watch::Sender<u64>>,
}

impl RestaurantListView {
    /// Create a view over `endpoint`, fetching through `source`
    pub fn new(endpoint: Url, source: Arc<dyn PageSource>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            endpoint,
            source,
            diagnostics: Arc::new(TracingSink),
            policy: RacePolicy::default(),
            state: Arc::new(RwLock::new(ViewState::new())),
            issued: Arc::new(AtomicU64::new(0)),
            revision: Arc::new(revision),
        }
    }

    /// Create a view backed by an HTTP client built from `config`
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let endpoint = config.endpoint_url()?;
        let client = HttpClient::with_config(config.http_client_config())?;
        Ok(Self::new(endpoint, Arc::new(client)).with_race_policy(config.race_policy))
    }

    /// Send failure reports to `sink`
    #[must_use]
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Resolve overlapping loads with `policy`
    #[must_use]
    pub fn with_race_policy(mut self, policy: RacePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Canonical first-page endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Active race policy
    pub fn race_policy(&self) -> RacePolicy {
        self.policy
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> ViewState {
        self.state.read().await.clone()
    }

    /// Watch the revision counter; it changes whenever a page is applied
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Load the unfiltered first page
    pub fn mount(&self) -> JoinHandle<()> {
        self.load_page(self.endpoint.clone(), SearchParameters::none())
    }

    /// Update the search box; issues no request
    pub async fn set_search(&self, search: impl Into<String>) {
        self.state.write().await.search = search.into();
    }

    /// Update the ordering selector; issues no request
    pub async fn set_ordering(&self, ordering: SortOrder) {
        self.state.write().await.ordering = ordering;
    }

    /// Submit the search form.
    ///
    /// Loads the canonical endpoint with the non-empty form fields. Cursors
    /// are not cleared here; the un-cursored request yields page one.
    pub async fn submit_search(&self) -> JoinHandle<()> {
        let params = self.state.read().await.search_parameters();
        info!(
            "Searching: search={:?}, ordering={:?}",
            params.search, params.ordering
        );
        self.load_page(self.endpoint.clone(), params)
    }

    /// Follow the forward cursor; `None` when the control is disabled
    pub async fn next(&self) -> Option<JoinHandle<()>> {
        self.navigate(Direction::Next).await
    }

    /// Follow the backward cursor; `None` when the control is disabled
    pub async fn previous(&self) -> Option<JoinHandle<()>> {
        self.navigate(Direction::Previous).await
    }

    /// Follow the cursor for `direction` verbatim
    pub async fn navigate(&self, direction: Direction) -> Option<JoinHandle<()>> {
        let cursor = self.state.read().await.cursor(direction).cloned();
        match cursor {
            Some(url) => Some(self.load_page(url, SearchParameters::none())),
            None => {
                debug!("'{}' is disabled, no request issued", direction.label());
                None
            }
        }
    }

    /// Spawn one load of `url`.
    ///
    /// On success the displayed page is replaced; on failure one diagnostic
    /// is reported and the state is untouched. Nothing is cancelled or
    /// retried.
    pub fn load_page(&self, url: Url, params: SearchParameters) -> JoinHandle<()> {
        let sequence = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Issuing load #{} for {}", sequence, url);

        let view = self.clone();
        tokio::spawn(async move { view.run_load(sequence, url, params).await })
    }

    async fn run_load(&self, sequence: u64, url: Url, params: SearchParameters) {
        let page = match self.source.fetch_page(&url, &params).await {
            Ok(page) => page,
            Err(err) => {
                self.diagnostics.report(&url, &err);
                return;
            }
        };

        let mut state = self.state.write().await;

        if self.policy == RacePolicy::LatestRequestWins {
            let latest = self.issued.load(Ordering::SeqCst);
            if sequence != latest {
                debug!(
                    "Discarding stale load #{} for {} (latest is #{})",
                    sequence, url, latest
                );
                return;
            }
        }

        info!(
            "Loaded {} restaurants from {} (next: {}, previous: {})",
            page.results.len(),
            url,
            page.next.is_some(),
            page.previous.is_some()
        );
        state.apply_page(page);
        drop(state);

        self.revision.send_modify(|revision| *revision += 1);
    }
}

impl std::fmt::Debug for RestaurantListView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestaurantListView")
            .field("endpoint", &self.endpoint.as_str())
            .field("policy", &self.policy)
            .field("issued", &self.issued.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
