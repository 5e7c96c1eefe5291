use std::path::PathBuf;

use derive_setters::Setters;
use serde::{Deserialize, Serialize};

use crate::Directive;

/// Declarative description of a file that can be built in a single call.
#[derive(Debug, Clone, PartialEq, Eq, Setters, Serialize, Deserialize)]
#[setters(into)]
pub struct FileSpec {
    pub name: String,
    pub dir: PathBuf,
    pub directives: Vec<Directive>,
}

impl FileSpec {
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self { name: name.into(), dir: dir.into(), directives: Vec::new() }
    }

    pub fn add_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    /// Location of the file on disk: `dir` joined with `name`.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }
}
