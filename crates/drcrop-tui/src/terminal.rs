//! Terminal setup and restoration

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use drcrop_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(std::io::stdout(), DisableBracketedPaste);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enter the alternate screen with bracketed paste on, so dropped files
/// arrive as a single paste event
pub fn init() -> Result<ratatui::DefaultTerminal> {
    let terminal = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = execute!(std::io::stdout(), EnableBracketedPaste) {
        // Typing a path still works without it
        warn!("Bracketed paste unavailable: {}", e);
    }
    Ok(terminal)
}

pub fn restore() {
    if let Err(e) = execute!(std::io::stdout(), DisableBracketedPaste) {
        debug!("Failed to disable bracketed paste: {}", e);
    }
    ratatui::restore();
}
