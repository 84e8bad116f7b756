use contracts::domain::a001_standard::StandardRecord;
use contracts::shared::catalog::{parse_catalog, CatalogError};
use contracts::shared::config::CatalogConfig;
use gloo_net::http::Request;

/// Fetch the catalog data file once, bypassing HTTP caches
pub async fn fetch_catalog(config: &CatalogConfig) -> Result<Vec<StandardRecord>, CatalogError> {
    let cache_buster = js_sys::Date::now() as i64;
    let url = config.request_url(cache_buster);
    log::debug!("Fetching catalog from {}", url);

    let response = Request::get(&url)
        .header("Cache-Control", "no-cache, no-store, must-revalidate")
        .header("Pragma", "no-cache")
        .send()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(CatalogError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;

    parse_catalog(&body)
}
