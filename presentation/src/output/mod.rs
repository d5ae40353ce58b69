//! Output formatting

pub mod console;

/// Disable colored output for the rest of the process.
///
/// Enabling leaves the terminal detection of `colored` in place.
pub fn set_color_enabled(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}
