//! Entering and leaving TUI mode.
//!
//! Used by [`TerminalManager`](super::TerminalManager) and by the panic hook.

use crossterm::{
    cursor::Show,
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter the alternate screen and enable mouse capture.
///
/// Mouse capture is needed for palette clicks, hover styling and the
/// scroll wheel.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture)
}

/// Ask the terminal to disambiguate escape codes.
///
/// Lets a lone Esc arrive immediately instead of waiting to see whether an
/// escape sequence follows. Returns `false` on terminals without support.
pub fn push_keyboard_enhancements<W: Write>(writer: &mut W) -> bool {
    execute!(
        writer,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
    )
    .is_ok()
}

pub fn pop_keyboard_enhancements<W: Write>(writer: &mut W) -> bool {
    execute!(writer, PopKeyboardEnhancementFlags).is_ok()
}

/// Leave TUI mode and restore the terminal.
///
/// Safe to call more than once. Errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen);

    // Some terminals (Ghostty, Kitty) only honour the reset after leaving
    // the alternate screen. CSI = 0 u clears every enhancement flag.
    let _ = write!(writer, "\x1b[=0u");
    let _ = writer.flush();

    let _ = execute!(writer, Show);
}

/// Best-effort restore used from the panic hook.
pub fn emergency_restore() {
    let mut stdout = io::stdout();
    pop_keyboard_enhancements(&mut stdout);
    leave_tui_mode(&mut stdout);
}
