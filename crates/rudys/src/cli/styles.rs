//! Styles for the Rudy's CLI.
//!
//! Renderers ask for styles by meaning (`id`, `muted`, `aisle`), never by
//! color, so the palette can change in one place. `console` drops the escape
//! codes on its own when stdout is not a terminal.

use console::Style;

pub fn title() -> Style {
    Style::new().bold()
}

pub fn muted() -> Style {
    Style::new().color256(244)
}

pub fn id() -> Style {
    Style::new().color256(136)
}

/// Where an item sits: aisle and section.
pub fn aisle() -> Style {
    Style::new().cyan().bold()
}

pub fn price() -> Style {
    Style::new().green()
}

pub fn distance() -> Style {
    Style::new().magenta()
}

pub fn highlight() -> Style {
    Style::new().black().on_yellow()
}

pub fn success() -> Style {
    Style::new().green()
}

pub fn warning() -> Style {
    Style::new().yellow().bold()
}
