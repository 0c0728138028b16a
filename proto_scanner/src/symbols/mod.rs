//! Symbol discovery and definition/reference resolution
//!
//! Whether an identifier is a *definition* (a name being introduced) or a
//! *reference* (a field type naming another message) is a function of
//! grammatical position plus a scoped lookup in the per-document
//! [`SymbolTable`]. The table is rebuilt from a whole-document pass on
//! every edit; cross-reference correctness depends on the whole file, so
//! no incremental maintenance is attempted.

pub mod table;

pub use table::{SymbolClass, SymbolEntry, SymbolKind, SymbolTable};
