//! Panic hook that gives the user their terminal back.

use super::setup::emergency_restore;
use std::panic;

/// Install a hook that restores the terminal before the panic message
/// is printed.
///
/// Call this before creating the [`TerminalManager`](super::TerminalManager).
///
/// ```no_run
/// folio::terminal::setup_panic_hook();
/// ```
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!("panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
