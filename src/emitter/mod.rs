pub mod union_formatter;

pub use union_formatter::{TerminatorPolicy, UnionFormatter, DEFAULT_WRAP_EVERY};
