// Internal modules
pub mod braces;
pub mod config;
pub mod document;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod symbols;
pub mod tokens;
pub mod wordlist;

// Re-export key types for library consumers
pub use document::{DocumentError, ProtoDocument};
pub use lexical::{LineScan, LineScanner, LineState, ScanState, StateTracker};
pub use tokens::{CodeType, Token, TokenDiagnostic};

// Re-export symbol types for quick-info consumers
pub use symbols::{SymbolClass, SymbolEntry, SymbolKind, SymbolTable};
