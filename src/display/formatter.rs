//! Status line formatting using termimad

use std::path::Path;

use termimad::crossterm::style::Color;
use termimad::MadSkin;

use crate::display::terminal::should_use_colors;

/// Print `message 'path'`, highlighting the path when colors are enabled
pub fn print_status(message: &str, path: &Path) {
    println!("{}", format_status(message, path, should_use_colors()));
}

fn format_status(message: &str, path: &Path, colored: bool) -> String {
    let quoted = format!("'{}'", path.display());
    if colored {
        // Styled directly so markdown characters in the path stay literal
        let skin = path_skin();
        format!("{} {}", message, skin.inline_code.apply_to(quoted))
    } else {
        format!("{} {}", message, quoted)
    }
}

/// Skin that renders inline code as a bright yellow path
fn path_skin() -> MadSkin {
    let mut skin = MadSkin::no_style();
    skin.inline_code.set_fg(Color::AnsiValue(11));
    skin
}
