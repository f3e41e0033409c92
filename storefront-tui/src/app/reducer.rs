//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`, with no I/O. Store mutations pass through
//! unchanged here; the event loop hands them to the service layer.

use super::actions::{Action, Tab};
use super::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => match resolve_key(&state, key) {
            Some(action) => reduce(state, action),
            None => state,
        },
        Action::Tick => state,
        Action::Resize(_, _) => state, // Terminal auto-handles resize
        
        // === Navigation ===
        Action::SwitchTab(tab) => AppState {
            active_tab: tab,
            ..state
        },
        
        Action::ToggleTab => AppState {
            active_tab: state.active_tab.other(),
            ..state
        },
        
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },
        
        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },
        
        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },
        
        Action::SelectNext => move_cursor(state, 1),
        Action::SelectPrevious => move_cursor(state, -1),
        
        // === Store mutations ===
        Action::AddToCart(_) | Action::RemoveFromCart(_) => state,
        
        Action::SelectPage(_) => {
            let mut state = state;
            state.home.selected = 0;
            state
        }
        
        // === Store notifications ===
        Action::CatalogChanged(catalog) => {
            let mut state = state;
            state.home.selected = clamp(state.home.selected, catalog.current_items.len());
            state.home.catalog = catalog;
            state
        }
        
        Action::CartChanged(snapshot) => {
            let mut state = state;
            state.cart.selected = clamp(state.cart.selected, snapshot.entries.len());
            state.cart.snapshot = snapshot;
            state
        }
    }
}

fn clamp(selected: usize, len: usize) -> usize {
    selected.min(len.saturating_sub(1))
}

fn move_cursor(mut state: AppState, delta: isize) -> AppState {
    let len = state.active_row_count();
    let cursor = match state.active_tab {
        Tab::Home => &mut state.home.selected,
        Tab::Cart => &mut state.cart.selected,
    };
    *cursor = clamp(cursor.saturating_add_signed(delta), len);
    state
}

/// Map a key press to the action it stands for in the current state
///
/// This is where keybindings are defined. Returns `None` for keys that do
/// nothing here.
pub fn resolve_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return Some(Action::Quit),
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Some(Action::Quit),
        
        (KeyCode::F(1), _) => {
            return Some(if state.help_visible { Action::HideHelp } else { Action::ShowHelp });
        }
        (KeyCode::Esc, _) if state.help_visible => return Some(Action::HideHelp),
        _ => {}
    }
    
    // Help overlay swallows everything else
    if state.help_visible {
        return None;
    }
    
    match (key.code, key.modifiers) {
        (KeyCode::Tab, _) => return Some(Action::ToggleTab),
        (KeyCode::F(2), _) | (KeyCode::Char('h'), KeyModifiers::NONE) => {
            return Some(Action::SwitchTab(Tab::Home));
        }
        (KeyCode::F(3), _) | (KeyCode::Char('c'), KeyModifiers::NONE) => {
            return Some(Action::SwitchTab(Tab::Cart));
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            return Some(Action::SelectNext);
        }
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            return Some(Action::SelectPrevious);
        }
        _ => {}
    }
    
    match state.active_tab {
        Tab::Home => resolve_home_key(state, key),
        Tab::Cart => resolve_cart_key(state, key),
    }
}

fn resolve_home_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('a') => {
            state.selected_product().cloned().map(Action::AddToCart)
        }
        KeyCode::Left => state.previous_page_button().map(Action::SelectPage),
        KeyCode::Right => state.next_page_button().map(Action::SelectPage),
        KeyCode::Char(c) => {
            // Digits only reach pages that have a button
            let page = c.to_digit(10)? as usize;
            state
                .home
                .catalog
                .page_numbers
                .contains(&page)
                .then_some(Action::SelectPage(page))
        }
        _ => None,
    }
}

fn resolve_cart_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Delete | KeyCode::Char('d') => state
            .selected_cart_entry()
            .map(|entry| Action::RemoveFromCart(entry.id)),
        _ => None,
    }
}
