//! Terminal output for model summaries.
//!
//! Ollama replies are usually Markdown-ish (headings, bullet lists), so
//! on a color-capable TTY the summary is rendered with termimad. Piped
//! or NO_COLOR output falls back to the raw text.

use std::io::IsTerminal;

use termimad::MadSkin;

/// Print a model summary, rendered when the terminal supports it
pub fn print_summary(text: &str) {
    if use_colors() {
        skin().print_text(text);
    } else {
        println!("{}", text);
    }
}

fn skin() -> MadSkin {
    use termimad::crossterm::style::{Attribute, Color::*};

    let mut skin = MadSkin::default();
    skin.headers[0].set_fg(Cyan);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[1].set_fg(Cyan);
    skin.bullet.set_fg(Yellow);
    skin.bold.add_attr(Attribute::Bold);
    skin
}

/// Color gate: NO_COLOR wins, then CLICOLOR_FORCE, then CLICOLOR=0,
/// then TTY detection (https://no-color.org/)
fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    match std::env::var("CLICOLOR_FORCE") {
        Ok(val) if val != "0" => return true,
        _ => {}
    }
    if std::env::var("CLICOLOR").as_deref() == Ok("0") {
        return false;
    }
    std::io::stdout().is_terminal()
}
