//! TTY detection and color support logic

use std::io::IsTerminal;

/// Determine if colors should be used based on environment and TTY status
pub fn should_use_colors() -> bool {
    // NO_COLOR wins over everything (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
        if val != "0" {
            return true;
        }
    }

    if let Ok(val) = std::env::var("CLICOLOR") {
        if val == "0" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}
