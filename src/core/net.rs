//! The single GET path every upstream goes through.

use reqwest::header::{CONTENT_TYPE, REFERER};
use url::Url;

use crate::core::{
    AuError,
    client::{AuClient, CacheMode, SourceKind},
};

/// A decoded response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    /// Body text; undecodable bytes are replaced with U+FFFD.
    pub body: String,
    /// The `Content-Type` header, or empty when absent. Cached alongside the body and
    /// checked by the JSON spot source.
    pub content_type: String,
}

/// GET `url` with the client's UA, its per-request timeout and an optional `Referer`.
///
/// Non-2xx responses become [`AuError::Status`]. Successful bodies are written to the
/// cache (when enabled and `cache_mode` allows) under `kind`'s TTL.
pub(crate) async fn fetch(
    client: &AuClient,
    url: &Url,
    referer: Option<&str>,
    kind: SourceKind,
    cache_mode: CacheMode,
) -> Result<Fetched, AuError> {
    if cache_mode == CacheMode::Use
        && let Some((body, content_type)) = client.cache_get(url).await
    {
        tracing::trace!(%url, "served from cache");
        return Ok(Fetched { body, content_type });
    }

    let mut req = client
        .http()
        .get(url.clone())
        .timeout(client.timeout());
    if let Some(r) = referer {
        req = req.header(REFERER, r);
    }

    let resp = req.send().await?;
    if !resp.status().is_success() {
        return Err(AuError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = resp.bytes().await?;
    let body = String::from_utf8_lossy(&bytes).into_owned();

    if cache_mode != CacheMode::Bypass {
        client.cache_put(url, kind, &body, &content_type).await;
    }

    Ok(Fetched { body, content_type })
}
