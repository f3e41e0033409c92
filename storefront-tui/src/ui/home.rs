//! Home tab: current catalog page with add-to-cart

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use libstorefront::service::FetchStatus;
use crate::app::AppState;
use super::{pagination, styled};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Catalog of Items ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),      // Products
            Constraint::Length(1),   // Status message
            Constraint::Length(1),   // Cart count
            Constraint::Length(1),   // Page buttons
        ])
        .split(inner);
    
    render_products(frame, chunks[0], state);
    
    let message = state.cart.snapshot.message.as_deref().unwrap_or("");
    frame.render_widget(
        Paragraph::new(Span::styled(message, styled(state, Style::default().fg(Color::Green)))),
        chunks[1],
    );
    
    frame.render_widget(
        Paragraph::new(format!("Items in Cart: {}", state.cart_count())),
        chunks[2],
    );
    
    pagination::render(frame, chunks[3], state);
}

fn render_products(frame: &mut Frame, area: Rect, state: &AppState) {
    let catalog = &state.home.catalog;
    
    if catalog.status == FetchStatus::Pending {
        let hint = Span::styled("Loading catalog...", styled(state, Style::default().fg(Color::Yellow)));
        frame.render_widget(Paragraph::new(hint), area);
        return;
    }
    
    let items: Vec<ListItem> = catalog
        .current_items
        .iter()
        .map(|product| {
            ListItem::new(Line::from(vec![
                Span::raw(product.title.clone()),
                Span::raw("  "),
                Span::styled("[Add to Cart]", styled(state, Style::default().fg(Color::Cyan))),
            ]))
        })
        .collect();
    
    let mut list_state = ListState::default();
    if !items.is_empty() {
        list_state.select(Some(state.home.selected));
    }
    
    let list = List::new(items)
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));
    
    frame.render_stateful_widget(list, area, &mut list_state);
}
