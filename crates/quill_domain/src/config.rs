use derive_setters::Setters;
use serde::{Deserialize, Serialize};

const DEFAULT_JSON_INDENT: usize = 2;

/// Line terminator used wherever a directive needs a line break.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Setters, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeConfig {
    /// Line break appended after non-final directives and prepended to
    /// directives that ask for a blank line above them.
    pub line_ending: LineEnding,

    /// Number of spaces per nesting level when writing JSON files
    pub json_indent: usize,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self { line_ending: LineEnding::default(), json_indent: DEFAULT_JSON_INDENT }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = ComposeConfig::default();
        assert_eq!(config.line_ending, LineEnding::Lf);
        assert_eq!(config.json_indent, 2);
    }

    #[test]
    fn test_line_ending_as_str() {
        assert_eq!(LineEnding::Lf.as_str(), "\n");
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: ComposeConfig = serde_json::from_str(r#"{"line_ending":"crlf"}"#).unwrap();
        let expected = ComposeConfig::default().line_ending(LineEnding::CrLf);
        assert_eq!(config, expected);
    }
}
