pub mod selector_scanner;

pub use selector_scanner::SelectorScanner;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// How input text is turned into identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Class names matched as `.name {`
    Stylesheet,
    /// One identifier per line
    List,
}

impl ExtractionMode {
    /// Infer the mode from a file name: a `.css` suffix means stylesheet.
    pub fn from_path(path: &Path) -> Self {
        if path.to_string_lossy().ends_with(".css") {
            ExtractionMode::Stylesheet
        } else {
            ExtractionMode::List
        }
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionMode::Stylesheet => write!(f, "stylesheet"),
            ExtractionMode::List => write!(f, "list"),
        }
    }
}

/// Split on `\n` only. Lines are kept verbatim, including a trailing empty one.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

pub fn extract_identifiers(
    text: &str,
    mode: ExtractionMode,
    scanner: &SelectorScanner,
) -> Vec<String> {
    match mode {
        ExtractionMode::Stylesheet => scanner.scan(text),
        ExtractionMode::List => split_lines(text),
    }
}
