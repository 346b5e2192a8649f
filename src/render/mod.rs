//! Rendering module for converting books to output formats.

mod html;
mod json;
mod options;
mod stats;

pub use html::{render_page, to_html};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use stats::BookStats;
