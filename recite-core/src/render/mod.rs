//! Markup rendering
//!
//! Renderers are pure: they take tokens or paragraphs plus a resolved style and
//! return HTML. Style validation happens once, in [`StyleConfig::resolve`].

mod html;
mod style;

pub use html::{
    escape_html, grid_characters, label_stylesheet, render_grid, render_label,
    render_paragraphs, render_section, render_tokens, wrap_document, GridOptions,
};
pub use style::{
    defaults, font_size_for, is_valid_color, parse_border_thickness, ResolvedStyle,
    StyleConfig, StyleWarning, FONT_WEIGHTS,
};
