//! Non-interactive renderers.

pub mod text;

pub use text::{TextOptions, render_page};
