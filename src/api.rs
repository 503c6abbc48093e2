//! Client for the Algolia Hacker News search API
//!
//! One endpoint, one request shape: `GET <endpoint><query>` returning a JSON
//! body whose `hits` array holds the matching stories in server ranking order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default search endpoint. The committed query is appended directly.
pub const API_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search?query=";

/// One story from the index. Identity is `id` (Algolia's `objectID`);
/// everything else is display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    #[serde(rename = "objectID")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Absent for text-only posts (Ask HN etc.)
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub num_comments: Option<u32>,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Response envelope. Fields other than `hits` (pagination, facets, timing)
/// are ignored.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<Story>,
}

/// Build the request URL for a query. This string doubles as the fetch
/// trigger: a fetch runs only when the committed value of it changes.
pub fn search_url(endpoint: &str, query: &str) -> String {
    format!("{}{}", endpoint, query)
}

/// Blocking HTTP client for the search endpoint.
///
/// Deliberately no timeout: an unanswered request stays in flight rather
/// than being failed over locally (see `fetch` module docs).
pub struct SearchClient {
    client: reqwest::blocking::Client,
}

impl SearchClient {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("hnsearch/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self { client }
    }

    /// Perform a single GET and decode the hits. Non-2xx status and
    /// transport failures both surface as `HnSearchError::Http`.
    pub fn fetch(&self, url: &str) -> Result<Vec<Story>> {
        let response = self.client.get(url).send()?.error_for_status()?;
        let body: SearchResponse = response.json()?;
        Ok(body.hits)
    }
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new()
    }
}
