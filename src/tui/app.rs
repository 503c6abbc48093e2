use crate::fetch::{FetchMessage, Fetcher};
use crate::logging;
use crate::query::QueryController;
use crate::stories::{StoriesEvent, StoriesState};
use crate::store::ValueStore;
use crate::tui::search::{matches_query, prev_boundary, SearchState};
use crate::tui::table::TableState;
use crate::tui::ui;
use crate::AppConfig;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use std::time::{Duration, Instant};

pub struct App {
    // Core state
    pub stories: StoriesState,
    pub query: QueryController,
    fetcher: Fetcher,

    // Sub-states
    pub search: SearchState,
    pub table: TableState,

    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let store = ValueStore::open(
            config
                .store_path
                .clone()
                .unwrap_or_else(ValueStore::default_path),
        );
        let query = QueryController::new(
            store,
            &config.endpoint,
            &config.search_key,
            &config.default_query,
        );

        let mut search = SearchState::default();
        search.cursor_pos = query.query().len();

        Self {
            stories: StoriesState::default(),
            query,
            fetcher: Fetcher::new(),
            search,
            table: TableState::default(),
            should_quit: false,
        }
    }

    /// Indices into the fetched list of the stories the live (possibly
    /// uncommitted) query text matches. Typing narrows this view without
    /// touching the network; the fetched list itself is untouched.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.stories
            .stories
            .iter()
            .enumerate()
            .filter(|(_, story)| matches_query(&story.title, self.query.query()))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn run(
        &mut self,
        terminal: &mut Terminal<impl Backend<Error = std::io::Error>>,
    ) -> crate::Result<()> {
        let tick_rate = Duration::from_millis(50);
        let mut last_tick = Instant::now();

        loop {
            // The startup trigger and every committed query land here: a
            // changed trigger starts exactly one fetch.
            if self.fetcher.sync(self.query.trigger()) {
                self.stories.apply(StoriesEvent::FetchInit);
            }

            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(Event::Key(key)) = event::read() {
                    self.handle_key(key);
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.process_messages();
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Drain fetch completions and feed them to the state machine.
    /// Completions apply in arrival order; see the `fetch` module docs for
    /// the overlapping-request race this implies.
    fn process_messages(&mut self) {
        while let Some(msg) = self.fetcher.try_recv() {
            match msg {
                FetchMessage::Loaded(stories) => {
                    self.stories.apply(StoriesEvent::FetchSuccess(stories));
                    self.table.reset(self.visible_indices().len());
                }
                FetchMessage::Failed(err) => {
                    logging::warn("APP", &format!("fetch failed: {}", err));
                    self.stories.apply(StoriesEvent::FetchFailure);
                }
            }
        }
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.search.focused && !self.query.query().is_empty() {
                    self.query.clear();
                    self.search.cursor_pos = 0;
                } else if self.search.focused {
                    self.search.focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            KeyCode::Enter => {
                self.submit();
                return;
            }
            _ => {}
        }

        if self.search.focused {
            self.handle_search_key(key);
        } else {
            self.handle_table_key(key);
        }
    }

    /// Commit the live query. An empty query is refused here, at the UI
    /// boundary, matching a disabled submit control.
    fn submit(&mut self) {
        if self.query.query().is_empty() {
            return;
        }
        if self.query.commit() {
            // The next loop iteration picks up the new trigger.
            self.search.focused = false;
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                self.query.insert(self.search.cursor_pos, c);
                self.search.cursor_pos += c.len_utf8();
            }
            KeyCode::Backspace => {
                if self.search.cursor_pos > 0 {
                    let prev = prev_boundary(self.query.query(), self.search.cursor_pos);
                    self.query.remove(prev);
                    self.search.cursor_pos = prev;
                }
            }
            KeyCode::Delete => {
                if self.search.cursor_pos < self.query.query().len() {
                    self.query.remove(self.search.cursor_pos);
                }
            }
            KeyCode::Left => self.search.move_left(self.query.query()),
            KeyCode::Right => self.search.move_right(self.query.query()),
            KeyCode::Home => self.search.move_home(),
            KeyCode::End => self.search.move_end(self.query.query()),
            KeyCode::Tab | KeyCode::Down => {
                self.search.focused = false;
            }
            _ => {}
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        let total = self.visible_indices().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.table.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.table.select_next(total),
            KeyCode::PageUp => self.table.page_up(),
            KeyCode::PageDown => self.table.page_down(total),
            KeyCode::Home => self.table.select_first(),
            KeyCode::End => self.table.select_last(total),

            KeyCode::Char('d') | KeyCode::Delete => self.dismiss_selected(),

            KeyCode::Tab | KeyCode::Char('/') => {
                self.search.focused = true;
            }

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.focused = true;
                let end = self.query.query().len();
                self.query.insert(end, c);
                self.search.cursor_pos = self.query.query().len();
            }

            _ => {}
        }
    }

    /// Remove the selected story locally. No network round-trip. The
    /// selection indexes the filtered view, so it is mapped back to the
    /// fetched list before removing.
    fn dismiss_selected(&mut self) {
        let visible = self.visible_indices();
        let Some(selected) = self.table.selected else {
            return;
        };
        let Some(&index) = visible.get(selected) else {
            return;
        };
        let id = self.stories.stories[index].id.clone();
        self.stories.apply(StoriesEvent::Remove(id));
        self.table.clamp(self.visible_indices().len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Story;
    use tempfile::tempdir;

    fn test_app(dir: &tempfile::TempDir) -> App {
        let config = AppConfig {
            endpoint: "http://127.0.0.1:0/?query=".to_string(),
            store_path: Some(dir.path().join("state.json")),
            ..Default::default()
        };
        App::new(&config)
    }

    fn story(id: &str) -> Story {
        titled(id, &format!("story {}", id))
    }

    fn titled(id: &str, title: &str) -> Story {
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

    fn buffer_text(terminal: &Terminal<ratatui::backend::TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_edits_and_persists_without_committing() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir);
        let trigger_before = app.query.trigger().to_string();

        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.query.query(), "Reacts");
        assert_eq!(app.query.trigger(), trigger_before);
    }

    #[test]
    fn enter_on_empty_query_is_refused() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir);
        app.query.clear();
        app.search.cursor_pos = 0;
        let trigger_before = app.query.trigger().to_string();

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.query.trigger(), trigger_before);
    }

    #[test]
    fn enter_commits_the_typed_query() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir);
        app.query.set("Redux");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.query.trigger(), "http://127.0.0.1:0/?query=Redux");
        assert!(!app.search.focused);
    }

    #[test]
    fn dismiss_removes_selected_and_clamps_selection() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir);
        app.query.clear();
        app.stories.apply(StoriesEvent::FetchSuccess(vec![
            story("a"),
            story("b"),
            story("c"),
        ]));
        app.table.reset(3);
        app.search.focused = false;
        app.table.select_last(3);

        app.handle_key(key(KeyCode::Char('d')));
        let ids: Vec<&str> = app.stories.stories.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(app.table.selected, Some(1));
        assert!(!app.stories.is_loading);
        assert!(!app.stories.is_error);
    }

    #[test]
    fn live_query_narrows_the_visible_view_without_mutating_the_list() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir);
        app.stories.apply(StoriesEvent::FetchSuccess(vec![
            titled("1", "React hooks"),
            titled("2", "Vue stuff"),
            titled("3", "React native"),
            titled("4", ""),
        ]));

        app.query.set("react");
        assert_eq!(app.visible_indices(), [0, 2]);

        // The empty query shows every titled story; the untitled one stays
        // hidden and the fetched list itself is untouched.
        app.query.clear();
        assert_eq!(app.visible_indices(), [0, 1, 2]);
        assert_eq!(app.stories.stories.len(), 4);
    }

    #[test]
    fn dismiss_maps_selection_through_the_filtered_view() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir);
        app.stories.apply(StoriesEvent::FetchSuccess(vec![
            titled("1", "React hooks"),
            titled("2", "Vue stuff"),
            titled("3", "React native"),
        ]));
        app.query.set("react");
        app.table.reset(2);
        app.search.focused = false;

        // Second visible row is "React native", not "Vue stuff".
        app.table.select_next(2);
        app.handle_key(key(KeyCode::Char('d')));

        let ids: Vec<&str> = app.stories.stories.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert_eq!(app.visible_indices(), [0]);
    }

    #[test]
    fn rendered_list_is_filtered_by_live_query() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir);
        app.query.set("React");
        app.stories.apply(StoriesEvent::FetchSuccess(vec![
            titled("1", "React hooks"),
            titled("2", "Vue stuff"),
        ]));
        app.table.reset(app.visible_indices().len());

        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| crate::tui::ui::draw(frame, &mut app))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("React hooks"));
        assert!(!text.contains("Vue stuff"));
    }

    #[test]
    fn escape_clears_then_unfocuses_then_quits() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir);
        assert!(app.search.focused);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.query.query(), "");
        assert!(app.search.focused);

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.search.focused);

        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
