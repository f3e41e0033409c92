//! Page buttons

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use crate::app::AppState;
use super::styled;

/// One `[n]` button per page, the current page highlighted
///
/// An empty catalog has no buttons.
pub fn page_buttons(state: &AppState) -> Line<'static> {
    let catalog = &state.home.catalog;
    let mut spans = Vec::with_capacity(catalog.page_numbers.len() * 2);
    
    for &page in &catalog.page_numbers {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        let label = format!("[{}]", page);
        if page == catalog.current_page {
            spans.push(Span::styled(
                label,
                styled(state, Style::default().fg(Color::Black).bg(Color::Yellow))
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw(label));
        }
    }
    
    Line::from(spans)
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    frame.render_widget(Paragraph::new(page_buttons(state)), area);
}
