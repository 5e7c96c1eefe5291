//! # QuillFS
//!
//! Small file-system helpers for generating text and JSON files.
//!
//! QuillFS wraps `std::fs` with errors that always name the path involved,
//! and layers a directive composer on top: an ordered list of
//! [`Directive`]s is rendered line by line and appended to an open
//! [`FileHandle`]. All operations are synchronous and fail on the first
//! error without rolling back what was already written.

mod compose;
mod error;
mod handle;
mod json;
mod log;
mod meta;
mod read;
mod write;

pub use error::*;
pub use handle::*;
pub use json::add_json_extension;
pub use log::init_tracing;
pub use quill_domain::{
    indent, render_directives, ComposeConfig, Directive, FileSpec, LineEnding,
};

pub struct QuillFS;
