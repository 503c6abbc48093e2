//! hnsearch - Terminal search client for the Hacker News article index
//!
//! Fetches stories for a query from the Algolia Hacker News API, keeps the
//! result list and its request lifecycle in a small state machine, and lets
//! the user dismiss stories locally without re-fetching. The last query is
//! persisted across sessions and resumed at startup.
//!
//! # Components
//!
//! - **Persisted value store**: key/value slot surviving restarts
//! - **Result-set state machine**: fetched list + loading/error flags
//! - **Fetch orchestrator**: one background request per committed query
//! - **Query commit controller**: typed text vs. submitted query
//! - **TUI**: ratatui front end reading state and forwarding intents
//!
//! # Example
//!
//! ```no_run
//! use hnsearch::{search_url, SearchClient, API_ENDPOINT};
//!
//! fn main() -> hnsearch::Result<()> {
//!     let client = SearchClient::new();
//!     let stories = client.fetch(&search_url(API_ENDPOINT, "rust"))?;
//!
//!     for story in &stories {
//!         println!("{} ({} points)", story.title, story.points.unwrap_or(0));
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use chrono::{DateTime, Utc};

pub mod api;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod query;
pub mod store;
pub mod stories;
pub mod tui;

// Re-export main types
pub use api::{search_url, SearchClient, SearchResponse, Story, API_ENDPOINT};
pub use error::{HnSearchError, Result};
pub use fetch::{FetchMessage, Fetcher};
pub use query::QueryController;
pub use stories::{StoriesEvent, StoriesState};
pub use store::ValueStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Format a story's age as a compact human-readable string
pub fn format_age(created_at: Option<DateTime<Utc>>) -> String {
    let created_at = match created_at {
        Some(t) => t,
        None => return String::new(),
    };

    let seconds = (Utc::now() - created_at).num_seconds().max(0);
    match seconds {
        s if s < 60 => format!("{}s", s),
        s if s < 3600 => format!("{}m", s / 60),
        s if s < 86_400 => format!("{}h", s / 3600),
        s if s < 31_536_000 => format!("{}d", s / 86_400),
        s => format!("{}y", s / 31_536_000),
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Search endpoint; the committed query is appended to it
    pub endpoint: String,
    /// Store key the query is persisted under
    pub search_key: String,
    /// Query used when nothing is persisted yet
    pub default_query: String,
    /// Store file override; `None` uses `ValueStore::default_path()`
    pub store_path: Option<PathBuf>,
    /// Maximum results printed by a one-shot search
    pub max_results: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: API_ENDPOINT.to_string(),
            search_key: "search".to_string(),
            default_query: "React".to_string(),
            store_path: None,
            max_results: 20,
        }
    }
}
