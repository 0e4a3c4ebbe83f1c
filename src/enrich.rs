//! External reference lookup for enrichment notes.

use log::debug;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Default Wikipedia opensearch endpoint.
pub const DEFAULT_WIKIPEDIA_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors surfaced by a reference lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The lookup request could not be completed.
    #[error("reference lookup request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The lookup service answered with something unexpected.
    #[error("malformed lookup response: {0}")]
    MalformedResponse(String),
}

/// An external reference-lookup service.
///
/// `Ok(Some(url))` when the term resolves to a reference URL, `Ok(None)`
/// when the service has no result for it, `Err` when the lookup itself
/// fails. [`NoteService`](crate::service::NoteService) resolves the
/// lookup fully before entering the exclusive section, so
/// implementations are free to block on the network.
pub trait ReferenceLookup {
    fn lookup(&self, term: &str) -> Result<Option<String>, LookupError>;
}

/// Looks up article URLs through the Wikipedia opensearch API.
pub struct WikipediaLookup {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl WikipediaLookup {
    /// Creates a lookup against the default Wikipedia endpoint.
    pub fn new() -> Result<Self, LookupError> {
        Self::with_endpoint(DEFAULT_WIKIPEDIA_ENDPOINT)
    }

    /// Creates a lookup against a custom opensearch endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, LookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

impl ReferenceLookup for WikipediaLookup {
    fn lookup(&self, term: &str) -> Result<Option<String>, LookupError> {
        let url = format!(
            "{}?action=opensearch&search={}&limit=1&namespace=0&format=json",
            self.endpoint,
            urlencoding::encode(term)
        );
        debug!("querying reference lookup for \"{term}\"");

        let response = self.client.get(&url).send()?.error_for_status()?;
        let body: Value = response.json()?;
        parse_opensearch(&body)
    }
}

/// Extracts the first article URL from an opensearch response.
///
/// The response is a four-element array: search term, titles,
/// descriptions, URLs. An empty URL list means the term has no article.
fn parse_opensearch(body: &Value) -> Result<Option<String>, LookupError> {
    let elements = body
        .as_array()
        .ok_or_else(|| LookupError::MalformedResponse("expected a JSON array".into()))?;

    if elements.len() < 4 {
        return Err(LookupError::MalformedResponse(format!(
            "expected 4 response elements, got {}",
            elements.len()
        )));
    }

    let urls = elements[3]
        .as_array()
        .ok_or_else(|| LookupError::MalformedResponse("URL list is not an array".into()))?;

    match urls.first() {
        None => Ok(None),
        Some(url) => url
            .as_str()
            .map(|u| Some(u.to_string()))
            .ok_or_else(|| LookupError::MalformedResponse("result URL is not a string".into())),
    }
}
