//! Terminal management
//!
//! Raw mode and the alternate screen are entered on setup and always left
//! again, including when the program panics.

use std::io::{self, Stdout};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use crate::error::Result;

/// Terminal type alias
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Setup terminal for TUI rendering
///
/// - Enables raw mode (no line buffering, no echo)
/// - Enters alternate screen
/// - Hides the cursor (the views draw their own selection marker)
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    
    Ok(terminal)
}

/// Restore terminal to normal mode
pub fn restore_terminal(mut terminal: Tui) -> Result<()> {
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    disable_raw_mode()?;
    
    Ok(())
}

/// Install panic hook to restore terminal on panic
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        
        original_hook(panic_info);
    }));
}
