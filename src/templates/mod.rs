//! HTML templates and styling for the enhancement server.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constants for the browser panel
//! - `components` - Base page template and escaping
//! - `browser` - Notebook Browser panel rendering

mod browser;
mod components;
mod styles;

pub use browser::{render_browser, render_panel};
pub use components::{base_html, html_escape};
pub use styles::STYLE;
