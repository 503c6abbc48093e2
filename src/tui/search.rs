//! Search input state for the TUI: cursor and focus only. The text itself
//! lives in [`QueryController`](crate::QueryController) so that every edit
//! persists.

pub struct SearchState {
    /// Byte position of the cursor within the query text
    pub cursor_pos: usize,
    pub focused: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            cursor_pos: 0,
            focused: true,
        }
    }
}

impl SearchState {
    /// Move the cursor one character left, respecting char boundaries.
    pub fn move_left(&mut self, text: &str) {
        if self.cursor_pos > 0 {
            self.cursor_pos = prev_boundary(text, self.cursor_pos);
        }
    }

    /// Move the cursor one character right, respecting char boundaries.
    pub fn move_right(&mut self, text: &str) {
        if self.cursor_pos < text.len() {
            self.cursor_pos = text[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self, text: &str) {
        self.cursor_pos = text.len();
    }
}

/// Check if a story title matches the live query text.
/// Case-insensitive substring; untitled stories never match.
pub fn matches_query(title: &str, query: &str) -> bool {
    !title.is_empty() && title.to_lowercase().contains(&query.to_lowercase())
}

/// Byte index of the character boundary preceding `pos`.
pub fn prev_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_moves_across_multibyte_chars() {
        let text = "aéb"; // 'é' is two bytes
        let mut search = SearchState::default();
        search.move_end(text);
        assert_eq!(search.cursor_pos, 4);
        search.move_left(text);
        assert_eq!(search.cursor_pos, 3);
        search.move_left(text);
        assert_eq!(search.cursor_pos, 1);
        search.move_left(text);
        assert_eq!(search.cursor_pos, 0);
        search.move_left(text);
        assert_eq!(search.cursor_pos, 0);
        search.move_right(text);
        assert_eq!(search.cursor_pos, 1);
        search.move_right(text);
        assert_eq!(search.cursor_pos, 3);
    }

    #[test]
    fn matches_query_is_case_insensitive_substring() {
        assert!(matches_query("React hooks explained", "react"));
        assert!(matches_query("Why Rust?", "RUST"));
        assert!(!matches_query("Vue stuff", "react"));
        // Empty query matches every titled story.
        assert!(matches_query("anything", ""));
    }

    #[test]
    fn untitled_stories_never_match() {
        assert!(!matches_query("", ""));
        assert!(!matches_query("", "react"));
    }

    #[test]
    fn prev_boundary_clamps_at_start() {
        assert_eq!(prev_boundary("abc", 1), 0);
        assert_eq!(prev_boundary("abc", 0), 0);
    }
}
