use derive_setters::Setters;
use serde::{Deserialize, Serialize};

use crate::ComposeConfig;

/// One line of text destined for a generated file.
///
/// A directive is rendered as `indent` spaces followed by `content`. Every
/// directive except the last one in a batch is terminated by a line break,
/// and `leading_blank_line` places an extra line break in front of the
/// indentation so that the content sits below an empty line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Setters, Serialize, Deserialize)]
pub struct Directive {
    #[setters(into)]
    pub content: String,
    pub indent: usize,
    pub leading_blank_line: bool,
}

impl Directive {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into(), ..Default::default() }
    }

    /// Renders the directive into the exact text to append.
    pub fn render(&self, is_last: bool, config: &ComposeConfig) -> String {
        let line_break = config.line_ending.as_str();
        let mut line = indent(self.indent);
        line.push_str(&self.content);

        if !is_last {
            line.push_str(line_break);
        }

        if self.leading_blank_line {
            line.insert_str(0, line_break);
        }

        line
    }
}

/// Returns a string of exactly `count` spaces.
pub fn indent(count: usize) -> String {
    " ".repeat(count)
}

/// Renders a batch of directives, treating the final element by position as
/// the last one. The result is byte-for-byte what appending each directive in
/// order would produce.
pub fn render_directives(directives: &[Directive], config: &ComposeConfig) -> String {
    let total = directives.len();
    directives
        .iter()
        .enumerate()
        .map(|(i, directive)| directive.render(i + 1 == total, config))
        .collect()
}
