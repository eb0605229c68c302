//! CLI command handlers.
//!
//! Handlers are invoked by main.rs with fully resolved configuration, so
//! they can be exercised from tests without parsing arguments.

mod config;
mod render;
mod view;

pub use config::{run_config_init, run_config_path, run_config_schema, run_config_show};
pub use render::{RenderConfig, parse_filter_arg, render_document, run_render};
pub use view::{ViewConfig, build_app, run_view};
