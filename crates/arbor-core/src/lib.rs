#![forbid(unsafe_code)]

//! CoNLL-U parser + stanza model (headless).
//!
//! Design goals:
//! - tolerant line-level parsing: anything that is not a token or metadata
//!   record is skipped, never a fatal error
//! - strict stanza-level validation: a sentence without a unique root is
//!   reported per stanza, siblings are unaffected
//! - deterministic, serializable models

pub mod error;
pub mod fields;
pub mod line;
pub mod stanza;
pub mod tree;

pub use error::{Error, Result};
pub use fields::{Field, FieldError, FieldSelection};
pub use line::{Line, MetaLine, WordLine, classify_line};
pub use stanza::{Deprel, Stanza, split_stanzas};
pub use tree::{DepTree, build_deptree};

#[cfg(test)]
mod tests;
