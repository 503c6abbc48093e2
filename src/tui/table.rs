/// Story table display state
pub struct TableState {
    pub selected: Option<usize>,
    pub scroll_offset: usize,
    pub visible_rows: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            selected: None,
            scroll_offset: 0,
            visible_rows: 20,
        }
    }
}

impl TableState {
    pub fn select_next(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => (i + 1).min(total - 1),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_prev(&mut self) {
        let i = match self.selected {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn page_down(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let jump = self.visible_rows.saturating_sub(1);
        let i = match self.selected {
            Some(i) => (i + jump).min(total - 1),
            None => jump.min(total - 1),
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn page_up(&mut self) {
        let jump = self.visible_rows.saturating_sub(1);
        let i = match self.selected {
            Some(i) => i.saturating_sub(jump),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_first(&mut self) {
        self.selected = Some(0);
        self.scroll_offset = 0;
    }

    pub fn select_last(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.selected = Some(total - 1);
        self.ensure_visible(total - 1);
    }

    /// Reset selection for a freshly replaced list.
    pub fn reset(&mut self, total: usize) {
        self.selected = if total == 0 { None } else { Some(0) };
        self.scroll_offset = 0;
    }

    /// Keep the selection valid after a row was removed.
    pub fn clamp(&mut self, total: usize) {
        if total == 0 {
            self.selected = None;
            self.scroll_offset = 0;
            return;
        }
        if let Some(i) = self.selected {
            let i = i.min(total - 1);
            self.selected = Some(i);
            self.ensure_visible(i);
        }
    }

    fn ensure_visible(&mut self, index: usize) {
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if self.visible_rows > 0 && index >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = index - self.visible_rows + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_stays_in_bounds() {
        let mut table = TableState::default();
        table.select_prev();
        assert_eq!(table.selected, Some(0));
        table.select_next(3);
        table.select_next(3);
        table.select_next(3);
        assert_eq!(table.selected, Some(2));
        table.select_last(3);
        assert_eq!(table.selected, Some(2));
    }

    #[test]
    fn clamp_after_removal() {
        let mut table = TableState::default();
        table.reset(3);
        table.select_last(3);
        assert_eq!(table.selected, Some(2));

        // Last row dismissed: selection slides up.
        table.clamp(2);
        assert_eq!(table.selected, Some(1));

        // Everything dismissed: no selection.
        table.clamp(0);
        assert_eq!(table.selected, None);
        assert_eq!(table.scroll_offset, 0);
    }

    #[test]
    fn scrolling_follows_selection() {
        let mut table = TableState {
            visible_rows: 5,
            ..Default::default()
        };
        table.reset(100);
        for _ in 0..10 {
            table.select_next(100);
        }
        assert_eq!(table.selected, Some(10));
        assert_eq!(table.scroll_offset, 6);
        table.select_first();
        assert_eq!(table.scroll_offset, 0);
    }
}
