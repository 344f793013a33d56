//! One-shot retrieval of the remote navigation list.

use thiserror::Error;

use super::{NavConfig, NavItem};

#[derive(Debug, Error)]
pub enum NavError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("malformed navigation list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Parse an endpoint body. A `null` body counts as an empty list.
pub fn parse_nav_body(body: &str) -> Result<Vec<NavItem>, NavError> {
    let items: Option<Vec<NavItem>> = serde_json::from_str(body)?;
    Ok(items.unwrap_or_default())
}

/// Single GET against `endpoint`. Non-2xx statuses are errors.
pub async fn fetch_nav_items(
    client: &reqwest::Client,
    endpoint: &str,
) -> Result<Vec<NavItem>, NavError> {
    let body = client
        .get(endpoint)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    parse_nav_body(&body)
}

/// Remote entries for the navbar. Any failure is logged and yields an
/// empty list so only the seeded entries render.
pub async fn load_remote_items(config: &NavConfig) -> Vec<NavItem> {
    let Some(endpoint) = config.endpoint() else {
        tracing::debug!("no navigation endpoint configured; skipping fetch");
        return Vec::new();
    };

    let client = reqwest::Client::new();
    match fetch_nav_items(&client, &endpoint).await {
        Ok(items) => {
            tracing::debug!(count = items.len(), "loaded navigation entries");
            items
        }
        Err(err) => {
            tracing::error!("Navbar fetch error: {err}");
            Vec::new()
        }
    }
}
