use crate::error::Result;
use regex::Regex;

/// Selector body: the shortest run of non-newline characters followed by an
/// optional whitespace character and an opening brace. Only the run is
/// captured; the scanner never consumes the trailing `\s?{`.
///
/// Whitespace includes the ASCII separators U+001C..U+001F, which the
/// `regex` crate's `\s` leaves out.
const SELECTOR_BODY: &str = r"\A(.*?)[\s\x1C-\x1F]?\{";
const NON_EMPTY_SELECTOR_BODY: &str = r"\A(.+?)[\s\x1C-\x1F]?\{";

/// Pulls class names out of stylesheet text by pattern matching `.name {`.
///
/// This is a lexical scan, not a CSS parse. Every position directly preceded
/// by a `.` is a candidate start; matches never overlap and are reported left
/// to right. Since neither the dot nor the brace belongs to a match, a dot
/// ending one match can open the next one, and empty names are possible
/// (`.{`).
pub struct SelectorScanner {
    body: Regex,
    non_empty_body: Regex,
}

impl SelectorScanner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            body: Regex::new(SELECTOR_BODY)?,
            non_empty_body: Regex::new(NON_EMPTY_SELECTOR_BODY)?,
        })
    }

    pub fn scan(&self, text: &str) -> Vec<String> {
        let mut names = Vec::new();
        let mut next = candidate_after(text, 0);
        let mut allow_empty = true;

        while let Some(start) = next {
            let body = if allow_empty {
                &self.body
            } else {
                &self.non_empty_body
            };

            match body.captures(&text[start..]).and_then(|caps| caps.get(1)) {
                Some(name) if name.as_str().is_empty() => {
                    names.push(String::new());
                    // Retry the same start, but an empty match may not repeat there
                    allow_empty = false;
                    next = Some(start);
                }
                Some(name) => {
                    names.push(name.as_str().to_string());
                    let end = start + name.end();
                    allow_empty = true;
                    next = if text[..end].ends_with('.') {
                        Some(end)
                    } else {
                        candidate_after(text, end)
                    };
                }
                None => {
                    allow_empty = true;
                    next = candidate_after(text, start);
                }
            }
        }

        names
    }
}

/// Byte offset just past the first `.` at or after `from`.
fn candidate_after(text: &str, from: usize) -> Option<usize> {
    text[from..].find('.').map(|offset| from + offset + 1)
}
