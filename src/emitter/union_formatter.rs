use serde::{Deserialize, Serialize};

pub const DEFAULT_WRAP_EVERY: usize = 25;

const SEPARATOR: &str = " | ";
const TERMINATOR: &str = ";";

/// Decides which fragment receives the terminating `;`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminatorPolicy {
    /// The fragment at the final position.
    #[default]
    Position,
    /// The fragment whose value first occurs at the final position. A value
    /// that also appears earlier never qualifies, so such lists end with a
    /// dangling separator. Kept for output compatibility with older runs.
    FirstOccurrence,
}

/// Renders identifiers as `'a' | 'b' | 'c';`, breaking the line after
/// every `wrap_every` fragments.
#[derive(Debug, Clone)]
pub struct UnionFormatter {
    wrap_every: usize,
    policy: TerminatorPolicy,
}

impl UnionFormatter {
    pub fn new() -> Self {
        Self {
            wrap_every: DEFAULT_WRAP_EVERY,
            policy: TerminatorPolicy::default(),
        }
    }

    pub fn with_wrap_every(mut self, wrap_every: usize) -> Self {
        self.wrap_every = wrap_every.max(1);
        self
    }

    pub fn with_policy(mut self, policy: TerminatorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn format(&self, identifiers: &[String]) -> String {
        let mut output = String::new();
        let mut on_line = 0;

        for (index, identifier) in identifiers.iter().enumerate() {
            output.push('\'');
            output.push_str(identifier);
            output.push('\'');
            output.push_str(if self.is_last(identifiers, index) {
                TERMINATOR
            } else {
                SEPARATOR
            });

            on_line += 1;
            if on_line == self.wrap_every {
                output.push('\n');
                on_line = 0;
            }
        }

        output
    }

    fn is_last(&self, identifiers: &[String], index: usize) -> bool {
        let last = identifiers.len() - 1;
        match self.policy {
            TerminatorPolicy::Position => index == last,
            TerminatorPolicy::FirstOccurrence => {
                let value = &identifiers[index];
                identifiers.iter().position(|other| other == value) == Some(last)
            }
        }
    }
}

impl Default for UnionFormatter {
    fn default() -> Self {
        Self::new()
    }
}
