//! Grammatical context for the .proto definition language
//!
//! The scanner is lexical, but several token kinds are grammatical:
//! whether `Foo` is a definition, a type reference, an enum member, or a
//! plain identifier depends on where it sits. This module holds the
//! reserved-word vocabulary and the rolling statement window that answers
//! those questions without building a parse tree.

pub mod classifier;
pub mod keywords;

pub use classifier::{classify_word, observe, BlockKind, StatementContext};
pub use keywords::{classify_word_type, is_reserved_keyword, reserved_keywords, Keyword, WordType};
