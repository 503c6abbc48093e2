//! Result-set state machine
//!
//! A single owner holds the fetched story list and the request lifecycle
//! flags; every mutation goes through [`StoriesState::apply`]. The state is
//! flags on one struct rather than an exclusive enum because the story list
//! must survive the error transition: a failed refresh keeps showing the
//! last successful results.

use crate::api::Story;

/// Events the state machine accepts. All transitions are total; no event
/// can fail or panic.
#[derive(Debug, Clone)]
pub enum StoriesEvent {
    /// A fetch was started.
    FetchInit,
    /// A fetch resolved; the payload replaces the list wholesale.
    FetchSuccess(Vec<Story>),
    /// A fetch failed; the list is left untouched.
    FetchFailure,
    /// Locally dismiss one story by id. Never triggers a refetch.
    Remove(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoriesState {
    /// Server ranking order, stable under removal.
    pub stories: Vec<Story>,
    pub is_loading: bool,
    pub is_error: bool,
}

impl StoriesState {
    pub fn apply(&mut self, event: StoriesEvent) {
        match event {
            StoriesEvent::FetchInit => {
                self.is_loading = true;
                self.is_error = false;
            }
            StoriesEvent::FetchSuccess(stories) => {
                self.is_loading = false;
                self.is_error = false;
                self.stories = stories;
            }
            StoriesEvent::FetchFailure => {
                self.is_loading = false;
                self.is_error = true;
            }
            StoriesEvent::Remove(id) => {
                self.stories.retain(|story| story.id != id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str, title: &str) -> Story {
        Story {
            id: id.to_string(),
            title: title.to_string(),
            url: None,
            author: "test".to_string(),
            num_comments: Some(0),
            points: Some(0),
            created_at: None,
        }
    }

    #[test]
    fn init_sets_loading_clears_error_keeps_stories() {
        let mut state = StoriesState {
            stories: vec![story("1", "React")],
            is_loading: false,
            is_error: true,
        };
        state.apply(StoriesEvent::FetchInit);
        assert!(state.is_loading);
        assert!(!state.is_error);
        assert_eq!(state.stories.len(), 1);
    }

    #[test]
    fn init_is_idempotent() {
        let mut once = StoriesState {
            stories: vec![story("1", "React")],
            is_loading: false,
            is_error: true,
        };
        let mut twice = once.clone();
        once.apply(StoriesEvent::FetchInit);
        twice.apply(StoriesEvent::FetchInit);
        twice.apply(StoriesEvent::FetchInit);
        assert_eq!(once, twice);
    }

    #[test]
    fn success_replaces_stories_wholesale() {
        let mut state = StoriesState {
            stories: vec![story("1", "old")],
            is_loading: true,
            is_error: true,
        };
        state.apply(StoriesEvent::FetchSuccess(vec![
            story("2", "new-a"),
            story("3", "new-b"),
        ]));
        assert!(!state.is_loading);
        assert!(!state.is_error);
        let ids: Vec<&str> = state.stories.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);
    }

    #[test]
    fn failure_preserves_stale_stories() {
        let mut state = StoriesState::default();
        state.apply(StoriesEvent::FetchSuccess(vec![
            story("a", "A"),
            story("b", "B"),
        ]));
        state.apply(StoriesEvent::FetchInit);
        state.apply(StoriesEvent::FetchFailure);
        assert!(!state.is_loading);
        assert!(state.is_error);
        let ids: Vec<&str> = state.stories.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn remove_excludes_id_and_keeps_order() {
        let mut state = StoriesState::default();
        state.apply(StoriesEvent::FetchSuccess(vec![
            story("a", "A"),
            story("b", "B"),
            story("c", "C"),
        ]));
        state.apply(StoriesEvent::Remove("b".to_string()));
        let ids: Vec<&str> = state.stories.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert!(!state.is_loading);
        assert!(!state.is_error);
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut state = StoriesState::default();
        state.apply(StoriesEvent::FetchSuccess(vec![story("a", "A")]));
        let before = state.clone();
        state.apply(StoriesEvent::Remove("zzz".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn full_lifecycle_scenario() {
        let mut state = StoriesState::default();
        assert_eq!(state, StoriesState::default());

        state.apply(StoriesEvent::FetchInit);
        assert!(state.is_loading);
        assert!(!state.is_error);
        assert!(state.stories.is_empty());

        state.apply(StoriesEvent::FetchSuccess(vec![story("1", "React")]));
        assert!(!state.is_loading);
        assert!(!state.is_error);
        assert_eq!(state.stories.len(), 1);

        state.apply(StoriesEvent::Remove("1".to_string()));
        assert!(state.stories.is_empty());
        assert!(!state.is_loading);
        assert!(!state.is_error);
    }
}
