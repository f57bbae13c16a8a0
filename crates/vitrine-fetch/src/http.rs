//! HTTP source: one GET against the deployed site.
//!
//! `http` and `https` (rustls with the webpki root store). The client is
//! built per request since the index is fetched exactly once per process.

use crate::error::LoadError;
use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper::{header, Request, Uri};
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::{client::legacy::Client, rt::TokioExecutor};

const USER_AGENT: &str = concat!("vitrine/", env!("CARGO_PKG_VERSION"));

/// GET `url` and return the response body. Non-2xx statuses are errors.
pub async fn get(url: &str) -> Result<Bytes, LoadError> {
    let uri: Uri = url.parse().map_err(|source| LoadError::InvalidUri {
        url: url.to_string(),
        source,
    })?;

    match uri.scheme_str() {
        Some("http" | "https") => {}
        other => {
            return Err(LoadError::UnsupportedScheme {
                scheme: other.unwrap_or_default().to_string(),
            })
        }
    }

    let connector = HttpsConnectorBuilder::new()
        .with_webpki_roots()
        .https_or_http()
        .enable_http1()
        .build();
    let client: Client<_, Empty<Bytes>> = Client::builder(TokioExecutor::new()).build(connector);
    let req = Request::get(uri.clone())
        .header(header::USER_AGENT, USER_AGENT)
        .header(header::ACCEPT, "application/json")
        .body(Empty::new())
        .map_err(|source| LoadError::Build { uri: url.to_string(), source })?;

    tracing::debug!(%uri, "http: GET search index");
    let res = client.request(req).await.map_err(|source| LoadError::Request {
        uri: url.to_string(),
        source,
    })?;

    let status = res.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            uri: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = res
        .into_body()
        .collect()
        .await
        .map_err(|source| LoadError::Body { uri: url.to_string(), source })?
        .to_bytes();
    tracing::debug!(%uri, bytes = body.len(), "http: search index received");
    Ok(body)
}
