use crate::tui::app::App;
use crate::tui::colors;
use crate::{format_age, Story};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use unicode_width::UnicodeWidthStr;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Story table
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // The view is narrowed by the live query on every render; typing can
    // shrink it, so the selection is re-clamped here.
    let visible = app.visible_indices();
    app.table.clamp(visible.len());

    draw_search_bar(frame, app, chunks[0]);
    draw_table(frame, app, &visible, chunks[1]);
    draw_status_bar(frame, app, visible.len(), chunks[2]);

    // Show cursor in the search bar when it has focus
    if app.search.focused {
        let typed_width = UnicodeWidthStr::width(&app.query.query()[..app.search.cursor_pos]);
        // Border (1) + leading space (1)
        let cursor_x = chunks[0].x + 2 + typed_width as u16;
        let cursor_y = chunks[0].y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.search.focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search Hacker News ");

    let paragraph = Paragraph::new(format!(" {}", app.query.query()))
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn draw_table(frame: &mut Frame, app: &mut App, visible: &[usize], area: Rect) {
    // Visible rows: area height minus borders and header
    app.table.visible_rows = area.height.saturating_sub(3) as usize;

    let header = Row::new(vec![
        Cell::from("Points"),
        Cell::from("Title"),
        Cell::from("Kind"),
        Cell::from("Author"),
        Cell::from("Age"),
        Cell::from("Comments"),
    ])
    .style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let start = app.table.scroll_offset.min(visible.len());
    let end = (start + app.table.visible_rows).min(visible.len());

    let rows: Vec<Row> = visible[start..end]
        .iter()
        .enumerate()
        .map(|(i, &index)| {
            let row = story_row(&app.stories.stories[index]);
            if Some(start + i) == app.table.selected {
                row.style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Min(24),
            Constraint::Length(6),
            Constraint::Length(14),
            Constraint::Length(4),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(table, area);
}

fn story_row(story: &Story) -> Row<'_> {
    let points = story.points.unwrap_or(0);
    let comments = story.num_comments.unwrap_or(0);

    let title = match story.url.as_deref() {
        Some(url) => format!("{}  ({})", story.title, colors::display_host(url)),
        None => story.title.clone(),
    };

    Row::new(vec![
        Cell::from(format!("{:>5}", points))
            .style(Style::default().fg(colors::points_color(points))),
        Cell::from(title),
        Cell::from(colors::kind_label(&story.title, story.url.as_deref()))
            .style(Style::default().fg(Color::DarkGray)),
        Cell::from(story.author.as_str()).style(Style::default().fg(Color::Green)),
        Cell::from(format_age(story.created_at)).style(Style::default().fg(Color::DarkGray)),
        Cell::from(format!("{:>6}", comments))
            .style(Style::default().fg(colors::comments_color(comments))),
    ])
}

fn draw_status_bar(frame: &mut Frame, app: &App, visible: usize, area: Rect) {
    let line = if app.stories.is_loading {
        Line::from(Span::styled(
            " Loading...",
            Style::default().fg(Color::Yellow),
        ))
    } else if app.stories.is_error {
        Line::from(Span::styled(
            " Something went wrong fetching stories.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                format!(" {} of {} stories ", visible, app.stories.stories.len()),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                "| Enter: search  d: dismiss  Tab: focus  Esc: quit",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    };

    frame.render_widget(Paragraph::new(line), area);
}
