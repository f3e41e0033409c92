//! Event handling infrastructure
//!
//! Polls the terminal for keyboard and resize events, producing a tick
//! whenever the poll times out so the event loop can drain store events.

use std::time::Duration;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use crate::app::Action;

/// TUI events that can be dispatched
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Keyboard input
    Key(KeyEvent),
    
    /// Terminal resize
    Resize(u16, u16),
    
    /// Periodic tick
    Tick,
}

impl From<TuiEvent> for Action {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Key(key) => Action::Key(key),
            TuiEvent::Resize(w, h) => Action::Resize(w, h),
            TuiEvent::Tick => Action::Tick,
        }
    }
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }
    
    /// Poll for the next event, blocking up to tick_rate duration
    ///
    /// A timeout yields `Tick`. Key releases and repeats are reported as
    /// ticks too, so one physical press is one action on every platform.
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(TuiEvent::Key(key)),
                CrosstermEvent::Resize(w, h) => Ok(TuiEvent::Resize(w, h)),
                _ => Ok(TuiEvent::Tick),
            }
        } else {
            Ok(TuiEvent::Tick)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    
    #[test]
    fn test_event_handler_creation() {
        let handler = EventHandler::new(100);
        assert_eq!(handler.tick_rate, Duration::from_millis(100));
    }
    
    #[test]
    fn test_events_convert_to_actions() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(matches!(Action::from(TuiEvent::Key(key)), Action::Key(_)));
        assert!(matches!(Action::from(TuiEvent::Resize(80, 24)), Action::Resize(80, 24)));
        assert!(matches!(Action::from(TuiEvent::Tick), Action::Tick));
    }
}
