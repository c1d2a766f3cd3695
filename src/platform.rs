//! Platform-specific shortcut display

/// Submit shortcut display
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Add person shortcut display
/// - macOS: "Cmd+N"
/// - Linux/Windows: "Ctrl+N"
#[cfg(target_os = "macos")]
pub const ADD_SHORTCUT: &str = "Cmd+N";

#[cfg(not(target_os = "macos"))]
pub const ADD_SHORTCUT: &str = "Ctrl+N";

/// Remove person shortcut display
#[cfg(target_os = "macos")]
pub const REMOVE_SHORTCUT: &str = "Cmd+D";

#[cfg(not(target_os = "macos"))]
pub const REMOVE_SHORTCUT: &str = "Ctrl+D";

/// Modifier accepted for the add/remove shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: crossterm::event::KeyModifiers = crossterm::event::KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: crossterm::event::KeyModifiers =
    crossterm::event::KeyModifiers::CONTROL;
