//! Terminal setup and restoration

use ratatui::DefaultTerminal;

/// Enter the alternate screen, with a panic hook that leaves it again
pub fn init() -> DefaultTerminal {
    install_panic_hook();
    ratatui::init()
}

pub fn restore() {
    ratatui::restore();
}

/// Install a panic hook that restores the terminal and logs the panic
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        tracing::error!("Editor panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
