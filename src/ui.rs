//! The UI renders the page state into something visible and scrollable.
//!
//! A fixed navigation bar sits above the scrolling page body, with a help bar below. The link
//! for the active section is highlighted; on narrow terminals the links collapse into a menu.

use crate::app_state::AppState;
use crate::reveal::Phase;
use crate::section::SectionId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use std::time::Instant;

const NAV_HEIGHT: u16 = 3;
const HELP_HEIGHT: u16 = 3;

fn split(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),  // Navigation
            Constraint::Min(0),              // Page
            Constraint::Length(HELP_HEIGHT), // Help
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

#[must_use]
/// Area the scrolling page occupies inside a terminal of size `area`.
pub fn body_area(area: Rect) -> Rect {
    split(area)[1]
}

/// Renders navigation, the visible slice of the page and the help bar.
pub fn draw(f: &mut Frame, app: &AppState, now: Instant) {
    let [nav, body, help] = split(f.area());

    draw_nav(f, app, nav);
    draw_body(f, app, body, now);
    if app.is_compact() && app.menu_open {
        draw_menu(f, app, body);
    }
    draw_help(f, app, help);
}

fn link_style(app: &AppState, section: SectionId) -> Style {
    let mut style = if section == app.active_section() {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    if section.index() == app.focused_link {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

fn draw_nav(f: &mut Frame, app: &AppState, area: Rect) {
    let brand = Span::styled(
        app.content().name,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let mut spans = vec![brand, Span::raw("    ")];
    if app.is_compact() {
        let icon = if app.menu_open { "✕ Close" } else { "☰ Menu" };
        spans.push(Span::styled(icon, Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            format!("  · {}", app.active_section().label()),
            Style::default().fg(Color::Cyan),
        ));
    } else {
        for (i, section) in SectionId::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(section.label(), link_style(app, section)));
        }
    }

    let nav = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(nav, area);
}

fn dimmed(line: &Line<'static>) -> Line<'static> {
    line.spans
        .iter()
        .map(|span| Span::styled(span.content.clone(), Style::default().fg(Color::DarkGray)))
        .collect::<Vec<_>>()
        .into()
}

fn draw_body(f: &mut Frame, app: &AppState, area: Rect, now: Instant) {
    let layout = app.layout();
    let top = usize::try_from(app.viewport().top_row()).unwrap_or(usize::MAX);
    let lines: Vec<Line> = layout
        .rows()
        .iter()
        .enumerate()
        .skip(top)
        .take(usize::from(area.height))
        .map(|(row, line)| match app.row_phase(row, now) {
            Phase::Hidden => Line::default(),
            Phase::Entering(progress) if progress < 0.5 => dimmed(line),
            Phase::Entering(_) | Phase::Shown => line.clone(),
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

fn draw_menu(f: &mut Frame, app: &AppState, body: Rect) {
    let height = u16::try_from(SectionId::ALL.len()).unwrap_or(u16::MAX) + 2;
    let area = Rect {
        x: body.x,
        y: body.y,
        width: body.width.min(24),
        height: body.height.min(height),
    };

    let items: Vec<ListItem> = SectionId::ALL
        .into_iter()
        .map(|section| {
            let style = if section.index() == app.focused_link {
                link_style(app, section).add_modifier(Modifier::REVERSED)
            } else {
                link_style(app, section)
            };
            ListItem::new(format!(" {}", section.label())).style(style)
        })
        .collect();

    let menu = List::new(items).block(Block::default().borders(Borders::ALL).title("Menu"));
    f.render_widget(Clear, area);
    f.render_widget(menu, area);
}

fn draw_help(f: &mut Frame, app: &AppState, area: Rect) {
    let help = if let Some(ref msg) = app.message {
        msg.clone()
    } else if app.is_compact() {
        "↑/↓: Scroll | m: Menu | Tab: Next link | Enter: Go | q: Quit".to_string()
    } else {
        "↑/↓/PgUp/PgDn: Scroll | 1-6: Jump | Tab/Enter: Follow link | Home/End | q: Quit"
            .to_string()
    };

    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, area);
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
