//! Token system for .proto lexical scanning
//!
//! Converts raw line text into classified [`Token`] spans. Unlike a
//! compiler token stream, the output here is per line and gap-free: every
//! character of the scanned line belongs to exactly one token, so an
//! editor can colorize the whole line from one scan result.
//!
//! ## Key components
//!
//! - **[`CodeType`]** - closed set of semantic classifications
//! - **[`Token`]** - immutable classified span (line, column, length, text)
//! - **[`TokenDiagnostic`]** - message + offset payload for malformed spans
//!
//! Error spans are ordinary tokens with `kind == CodeType::Error` and an
//! attached diagnostic; the scanner never aborts on malformed input.

pub mod token;

pub use token::{CodeType, Token, TokenDiagnostic};
