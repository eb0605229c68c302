//! Shared utilities.

mod collate;
mod text;

pub use collate::natural_cmp;
pub use text::{display_width, pad_to_width, truncate_str};
