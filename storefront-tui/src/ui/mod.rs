//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.

pub mod cart;
pub mod home;
pub mod pagination;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};
use crate::app::{AppState, Tab};

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Tab bar
            Constraint::Min(5),      // Active view
            Constraint::Length(1),   // Key hints
        ])
        .split(area);
    
    render_tab_bar(frame, chunks[0], state);
    
    match state.active_tab {
        Tab::Home => home::render(frame, chunks[1], state),
        Tab::Cart => cart::render(frame, chunks[1], state),
    }
    
    render_hints(frame, chunks[2], state);
    
    if state.help_visible {
        render_help_overlay(frame, area, state);
    }
}

/// Apply `style` only when colors are enabled
pub(crate) fn styled(state: &AppState, style: Style) -> Style {
    if state.config.colors_enabled {
        style
    } else {
        Style::default()
    }
}

fn render_tab_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = Tab::ALL.iter().map(|tab| Line::from(tab.title())).collect();
    
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Storefront "))
        .select(state.active_tab.index())
        .highlight_style(
            styled(state, Style::default().fg(Color::Yellow)).add_modifier(Modifier::BOLD),
        );
    
    frame.render_widget(tabs, area);
}

fn render_hints(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = match state.active_tab {
        Tab::Home => "↑/↓: Select | Enter: Add to Cart | ←/→ 1-9: Page | Tab: Cart | F1: Help | q: Quit",
        Tab::Cart => "↑/↓: Select | Enter/d: Remove | Tab: Home | F1: Help | q: Quit",
    };
    
    let line = Line::from(Span::styled(hints, styled(state, Style::default().fg(Color::Gray))));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 60, area);
    
    let help_text = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q        - Quit"),
        Line::from("  F1       - Toggle help"),
        Line::from("  Tab      - Switch tab"),
        Line::from("  h / F2   - Home"),
        Line::from("  c / F3   - Cart"),
        Line::from("  ↑ ↓      - Move selection"),
        Line::from(""),
        Line::from("Home:"),
        Line::from("  Enter/a  - Add to cart"),
        Line::from("  ← →      - Previous / next page"),
        Line::from("  1-9      - Go to page"),
        Line::from(""),
        Line::from("Cart:"),
        Line::from("  Enter/d  - Remove item"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];
    
    let help = Paragraph::new(help_text)
        .block(Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(styled(state, Style::default().fg(Color::Cyan))))
        .wrap(Wrap { trim: false });
    
    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
