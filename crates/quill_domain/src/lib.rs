mod config;
mod directive;
mod file_spec;

pub use config::*;
pub use directive::*;
pub use file_spec::*;
