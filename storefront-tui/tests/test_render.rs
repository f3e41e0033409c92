//! Test rendering against an in-memory terminal
//!
//! Draws full frames with ratatui's TestBackend and checks the visible text.

use libstorefront::service::{CartSnapshot, CatalogSnapshot, FetchStatus, ITEM_ADDED_MESSAGE};
use libstorefront::Product;
use ratatui::{backend::TestBackend, Terminal};
use storefront_tui::app::{reduce, Action, AppState, Tab};
use storefront_tui::ui;

fn draw(state: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    terminal.draw(|frame| ui::render(frame, state)).unwrap();
    
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn loaded(items: Vec<Product>, pages: Vec<usize>, total: usize) -> AppState {
    reduce(AppState::new(), Action::CatalogChanged(CatalogSnapshot {
        current_items: items,
        page_numbers: pages,
        current_page: 1,
        total_items: total,
        status: FetchStatus::Loaded,
    }))
}

#[test]
fn test_home_lists_current_page() {
    let state = loaded(vec![Product::new(1, "Shirt"), Product::new(2, "Hat")], vec![1], 2);
    let screen = draw(&state);
    
    assert!(screen.contains("Catalog of Items"));
    assert!(screen.contains("Shirt"));
    assert!(screen.contains("Hat"));
    assert!(screen.contains("Add to Cart"));
    assert!(screen.contains("Items in Cart: 0"));
    assert!(screen.contains("[1]"));
}

#[test]
fn test_home_shows_message_and_count() {
    let state = loaded(vec![Product::new(1, "Shirt")], vec![1], 1);
    let state = reduce(state, Action::CartChanged(CartSnapshot {
        entries: vec![Product::new(1, "Shirt"), Product::new(1, "Shirt")],
        message: Some(ITEM_ADDED_MESSAGE.to_string()),
    }));
    let screen = draw(&state);
    
    assert!(screen.contains("Item added to cart"));
    assert!(screen.contains("Items in Cart: 2"));
}

#[test]
fn test_home_with_failed_fetch_renders_no_rows() {
    let state = reduce(AppState::new(), Action::CatalogChanged(CatalogSnapshot {
        status: FetchStatus::Failed,
        ..Default::default()
    }));
    let screen = draw(&state);
    
    assert!(screen.contains("Catalog of Items"));
    assert!(screen.contains("Items in Cart: 0"));
    assert!(!screen.contains("Add to Cart]"));
    assert!(!screen.contains("[1]"));
    assert!(!screen.contains("Loading catalog"));
}

#[test]
fn test_home_while_loading() {
    let screen = draw(&AppState::new());
    assert!(screen.contains("Loading catalog..."));
}

#[test]
fn test_out_of_range_page_renders_empty() {
    let state = reduce(AppState::new(), Action::CatalogChanged(CatalogSnapshot {
        current_items: Vec::new(),
        page_numbers: vec![1, 2],
        current_page: 9,
        total_items: 8,
        status: FetchStatus::Loaded,
    }));
    let screen = draw(&state);
    
    assert!(screen.contains("[1] [2]"));
    assert!(!screen.contains("Add to Cart]"));
}

#[test]
fn test_empty_cart_message() {
    let state = reduce(AppState::new(), Action::SwitchTab(Tab::Cart));
    let screen = draw(&state);
    
    assert!(screen.contains("Your cart is empty."));
    assert!(!screen.contains("Catalog of Items"));
}

#[test]
fn test_cart_lists_entries_with_remove() {
    let state = reduce(AppState::new(), Action::SwitchTab(Tab::Cart));
    let state = reduce(state, Action::CartChanged(CartSnapshot {
        entries: vec![Product::new(3, "Jacket"), Product::new(4, "Boots")],
        message: None,
    }));
    let screen = draw(&state);
    
    assert!(screen.contains("Jacket"));
    assert!(screen.contains("Boots"));
    assert!(screen.contains("[Remove]"));
    assert!(!screen.contains("Your cart is empty."));
}

#[test]
fn test_help_overlay() {
    let state = reduce(AppState::new(), Action::ShowHelp);
    let screen = draw(&state);
    
    assert!(screen.contains("Keyboard Shortcuts"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let state = loaded(vec![Product::new(1, "Shirt")], vec![1], 1);
    let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
    terminal.draw(|frame| ui::render(frame, &state)).unwrap();
}
