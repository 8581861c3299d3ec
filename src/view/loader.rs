//! Page sources

use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::Page;
use crate::types::{RestaurantSummary, SearchParameters};
use async_trait::async_trait;
use url::Url;

/// Something that can fetch one page of restaurants
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page at `url`, attaching `params` as query parameters.
    ///
    /// Empty parameters leave `url` exactly as given.
    async fn fetch_page(
        &self,
        url: &Url,
        params: &SearchParameters,
    ) -> Result<Page<RestaurantSummary>>;
}

#[async_trait]
impl PageSource for HttpClient {
    async fn fetch_page(
        &self,
        url: &Url,
        params: &SearchParameters,
    ) -> Result<Page<RestaurantSummary>> {
        let config = params
            .to_query()
            .into_iter()
            .fold(RequestConfig::new(), |config, (key, value)| {
                config.query(key, value)
            });
        self.get_json_with_config(url.as_str(), config).await
    }
}
