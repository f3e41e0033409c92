//! Cart tab

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use crate::app::AppState;
use super::styled;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Cart ")
        .borders(Borders::ALL);
    
    let entries = &state.cart.snapshot.entries;
    if entries.is_empty() {
        frame.render_widget(Paragraph::new("Your cart is empty.").block(block), area);
        return;
    }
    
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::raw(entry.title.clone()),
                Span::raw("  "),
                Span::styled("[Remove]", styled(state, Style::default().fg(Color::Red))),
            ]))
        })
        .collect();
    
    let mut list_state = ListState::default().with_selected(Some(state.cart.selected));
    
    let list = List::new(items)
        .block(block)
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));
    
    frame.render_stateful_widget(list, area, &mut list_state);
}
