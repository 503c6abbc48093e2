//! Query commit controller
//!
//! Separates the text the user is typing from the query actually sent to
//! the network. Every edit updates and persists the live query; only
//! [`QueryController::commit`] derives a new fetch trigger, so a reload
//! resumes with the last typed text while the trigger tracks the last
//! submitted one.

use crate::api::search_url;
use crate::store::ValueStore;

pub struct QueryController {
    store: ValueStore,
    key: String,
    endpoint: String,
    query: String,
    trigger: String,
}

impl QueryController {
    /// Resume the persisted query (or `default_query` on first run) and
    /// derive the startup trigger from it, so the initial fetch uses the
    /// resumed text.
    pub fn new(store: ValueStore, endpoint: &str, key: &str, default_query: &str) -> Self {
        let query = store.get(key, default_query);
        let trigger = search_url(endpoint, &query);
        Self {
            store,
            key: key.to_string(),
            endpoint: endpoint.to_string(),
            query,
            trigger,
        }
    }

    /// Live (possibly uncommitted) query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Committed request target. Changes only through [`commit`].
    ///
    /// [`commit`]: QueryController::commit
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Insert a character at a byte position. `pos` must be a char boundary.
    pub fn insert(&mut self, pos: usize, ch: char) {
        self.query.insert(pos, ch);
        self.persist();
    }

    /// Remove the character starting at a byte position. `pos` must be a
    /// char boundary inside the string.
    pub fn remove(&mut self, pos: usize) {
        self.query.remove(pos);
        self.persist();
    }

    pub fn set(&mut self, text: &str) {
        self.query = text.to_string();
        self.persist();
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.persist();
    }

    /// Derive the trigger from the current text. Returns whether it changed;
    /// re-submitting the same query is not an edge and starts no fetch.
    pub fn commit(&mut self) -> bool {
        let next = search_url(&self.endpoint, &self.query);
        if next == self.trigger {
            return false;
        }
        self.trigger = next;
        true
    }

    fn persist(&mut self) {
        self.store.set(&self.key, &self.query);
    }
}
