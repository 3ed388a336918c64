//! UI rendering for the TUI.
//!
//! Provides layout and widget rendering using ratatui.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use ticklist_store::{Filter, IdGenerator, PersistenceAdapter, Stats, Task};

use crate::app::App;

/// Legend text for keyboard shortcuts while browsing the list.
const LEGEND_NORMAL: &str = " [a] Add  [j/k] Move  [Space] Toggle  [d] Delete  [Tab/1-3] Filter  [q] Quit ";

/// Legend text while typing a new task.
const LEGEND_EDITING: &str = " [Enter] Add task  [Esc] Cancel ";

/// Placeholder shown in an empty, unfocused input line.
const INPUT_PLACEHOLDER: &str = "Press 'a' to add a task";

/// Draw the entire UI.
pub fn draw<A, G>(frame: &mut Frame, app: &App<A, G>)
where
    A: PersistenceAdapter,
    G: IdGenerator,
{
    let chunks = create_main_layout(frame.area());
    let stats = app.stats();

    draw_header(frame, chunks[0]);
    draw_input(frame, chunks[1], app);
    draw_stats(frame, chunks[2], &stats);
    draw_filter_tabs(frame, chunks[3], app.filter());
    draw_task_list(frame, chunks[4], app);
    draw_footer(frame, chunks[5], &stats);
    draw_legend(frame, chunks[6], app.input_mode().is_editing());
}

/// Split the screen top to bottom: header, input, stats, filter tabs,
/// task list, completion footer and legend.
fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Input line
            Constraint::Length(3), // Stat boxes
            Constraint::Length(3), // Filter tabs
            Constraint::Min(0),    // Task list
            Constraint::Length(1), // Completion footer
            Constraint::Length(1), // Legend bar
        ])
        .split(area)
        .to_vec()
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Ticklist ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("keep track of what's next", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(header, area);
}

/// Draw the new-task input line, placing the cursor while editing.
fn draw_input<A, G>(frame: &mut Frame, area: Rect, app: &App<A, G>)
where
    A: PersistenceAdapter,
    G: IdGenerator,
{
    let editing = app.input_mode().is_editing();

    let border_color = if editing { Color::Yellow } else { Color::Cyan };
    let block = Block::default()
        .title(" New task ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let input_width = Span::raw(app.input()).width();
    let (scroll, cursor) = input_view(input_width, area.width.saturating_sub(2));

    let paragraph = if editing || !app.input().is_empty() {
        Paragraph::new(app.input())
            .style(Style::default().fg(Color::White))
            .scroll((0, scroll))
    } else {
        Paragraph::new(INPUT_PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(paragraph.block(block), area);

    if editing {
        frame.set_cursor_position((area.x + 1 + cursor, area.y + 1));
    }
}

/// Horizontal scroll and cursor column for input `input_width` display
/// columns wide, shown in a line `inner_width` columns wide.
///
/// The cursor sits just after the text; once the text no longer fits it
/// scrolls left so the cursor stays in the last column.
fn input_view(input_width: usize, inner_width: u16) -> (u16, u16) {
    let inner = usize::from(inner_width.max(1));
    let scroll = (input_width + 1).saturating_sub(inner);
    let cursor = input_width - scroll;
    (
        u16::try_from(scroll).unwrap_or(u16::MAX),
        u16::try_from(cursor).unwrap_or(u16::MAX),
    )
}

/// Draw the Total / Active / Completed boxes side by side.
fn draw_stats(frame: &mut Frame, area: Rect, stats: &Stats) {
    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let entries = [
        ("Total", stats.total, Color::White),
        ("Active", stats.active, Color::Yellow),
        ("Completed", stats.completed, Color::Green),
    ];

    for (rect, (title, count, color)) in boxes.iter().zip(entries) {
        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let value = Paragraph::new(count.to_string())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(block);
        frame.render_widget(value, *rect);
    }
}

/// Draw the filter tab bar.
fn draw_filter_tabs(frame: &mut Frame, area: Rect, active: Filter) {
    let titles: Vec<Line> = Filter::ALL.iter().map(|f| Line::from(f.label())).collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .select(active.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Draw the filtered tasks, or the filter's empty message.
///
/// Scrolls so the selected task stays in view.
fn draw_task_list<A, G>(frame: &mut Frame, area: Rect, app: &App<A, G>)
where
    A: PersistenceAdapter,
    G: IdGenerator,
{
    let block = Block::default()
        .title(" Tasks ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let tasks = app.visible_tasks();
    if tasks.is_empty() {
        let paragraph = Paragraph::new(app.filter().empty_message())
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, area);
        return;
    }

    let lines: Vec<Line> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| render_task_line(task, i == app.selected_index()))
        .collect();

    let inner_height = usize::from(area.height.saturating_sub(2)).max(1);
    let offset = app.selected_index().saturating_sub(inner_height - 1);
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);

    let list = Paragraph::new(lines).block(block).scroll((offset, 0));
    frame.render_widget(list, area);
}

/// Render a single task as a styled line.
fn render_task_line(task: &Task, is_selected: bool) -> Line<'static> {
    let marker = if task.is_completed() { "[x]" } else { "[ ]" };
    let text = format!(
        "{} {}  {}",
        marker,
        task.text(),
        task.created_at().format("%Y-%m-%d")
    );

    let style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
            .bg(Color::DarkGray)
    } else if task.is_completed() {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(Span::styled(text, style))
}

/// Draw the completion message once anything is completed.
fn draw_footer(frame: &mut Frame, area: Rect, stats: &Stats) {
    if let Some(message) = stats.completion_message() {
        let footer = Paragraph::new(format!(" {}", message)).style(Style::default().fg(Color::Green));
        frame.render_widget(footer, area);
    }
}

/// Draw the legend bar at the bottom.
fn draw_legend(frame: &mut Frame, area: Rect, editing: bool) {
    let text = if editing { LEGEND_EDITING } else { LEGEND_NORMAL };
    let legend = Paragraph::new(text).style(Style::default().fg(Color::Black).bg(Color::Cyan));

    frame.render_widget(legend, area);
}
