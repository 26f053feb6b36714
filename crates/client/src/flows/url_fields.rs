//! Endpoint field derivation from form input.
//!
//! The add/edit form offers two ways to describe where an endpoint lives:
//! a single URL, or discrete scheme/host/port/path fields. A URL, when
//! present, always wins. Every derived field stays raw text until payload
//! construction decides how an unparseable port is sent.

use url::Url;

use crate::flows::SourceForm;
use crate::models::Endpoint;

/// Connection fields for an endpoint, as raw form text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointFields {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub path: Option<String>,
}

impl EndpointFields {
    /// The port as a number, if the raw text parses as one.
    ///
    /// Create payloads omit a `None`; update payloads serialize it as an
    /// explicit null. That asymmetry lives in the payload types, not here.
    pub fn numeric_port(&self) -> Option<u16> {
        self.port.as_deref().and_then(|p| p.parse().ok())
    }
}

/// Decompose a URL into endpoint fields.
///
/// A well-formed URL yields its scheme, hostname, port (empty text when the
/// URL carries none), and path. An empty or unparseable URL yields no
/// fields at all; the failure is logged and the caller proceeds with the
/// empty set.
pub fn parse_url(url: &str) -> EndpointFields {
    if url.is_empty() {
        return EndpointFields::default();
    }

    match Url::parse(url) {
        Ok(parsed) => EndpointFields {
            scheme: Some(parsed.scheme().to_string()),
            host: parsed.host_str().map(|h| h.to_string()),
            port: Some(
                parsed
                    .port()
                    .map(|p| p.to_string())
                    .unwrap_or_default(),
            ),
            path: Some(parsed.path().to_string()),
        },
        Err(err) => {
            tracing::debug!(%err, url, "could not parse endpoint URL, leaving fields empty");
            EndpointFields::default()
        }
    }
}

/// Pick endpoint fields from a form.
///
/// If there's a URL in the form, parse and use it, else use the individual
/// fields (scheme, host, port, path).
pub fn url_or_host(form: &SourceForm) -> EndpointFields {
    match form.url.as_deref() {
        Some(url) if !url.is_empty() => parse_url(url),
        _ => EndpointFields {
            scheme: form.scheme.clone(),
            host: form.host.clone(),
            port: form.port.clone(),
            path: form.path.clone(),
        },
    }
}

/// Reassemble a display URL from stored endpoint fields.
///
/// This is the inverse of [`parse_url`] as far as the edit form cares:
/// a missing scheme is shown as https, a missing port is simply omitted.
pub fn endpoint_url(endpoint: &Endpoint) -> String {
    let scheme = endpoint.scheme.as_deref().unwrap_or("https");
    let host = endpoint.host.as_deref().unwrap_or("");
    let mut url = format!("{scheme}://{host}");
    if let Some(port) = endpoint.port {
        url.push_str(&format!(":{port}"));
    }
    if let Some(path) = endpoint.path.as_deref() {
        url.push_str(path);
    }
    url
}
