//! Boundary glue around the engine: the line-oriented stdin format and the
//! human-readable path/matrix rendering. One-based vertex numbering exists
//! only in this layer; the engine itself is zero-based throughout.

pub mod format;
pub mod parser;

pub use format::Formatter;
pub use parser::{read_cases, TestCase};
