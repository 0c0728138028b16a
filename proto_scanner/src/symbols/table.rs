//! Symbol table for definition/reference resolution
//!
//! Accumulates names declared in a document (messages, enums, services,
//! fields) together with the `{ }` nesting depth they were declared at.
//! The table is rebuilt from the whole document on every edit; lookups
//! prefer the innermost enclosing block and fall back outward.
use crate::config::compile_time::symbols::*;
use crate::grammar::keywords::Keyword;
use crate::log_warning;
use crate::logging::codes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What kind of construct a declared name introduces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
    Message,
    Enum,
    Service,
    Field,
}

impl SymbolKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Enum => "enum",
            Self::Service => "service",
            Self::Field => "field",
        }
    }

    /// Map a symbol-declaring command keyword to the declared kind
    pub fn from_command(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Message => Some(Self::Message),
            Keyword::Enum => Some(Self::Enum),
            Keyword::Service => Some(Self::Service),
            _ => None,
        }
    }
}

/// One declared name with its declaring position and scope depth
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub name: String,
    pub declaring_line: usize,
    pub block_depth: usize,
    pub kind: SymbolKind,
}

impl SymbolEntry {
    pub fn new(name: impl Into<String>, declaring_line: usize, block_depth: usize, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            declaring_line,
            block_depth,
            kind,
        }
    }
}

/// Result of classifying one identifier occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    /// The occurrence introduces the name
    Definition,
    /// The occurrence uses a declared (or assumed-imported) name
    Reference,
    /// Neither; plain identifier
    Plain,
}

/// Per-document table of declared names, keyed by name with all
/// declaration scopes retained for innermost-first lookup.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: HashMap<String, Vec<SymbolEntry>>,
    count: usize,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a declared name. Returns false (and keeps the table
    /// unchanged) when a limit would be exceeded; scanning continues
    /// without the entry.
    pub fn insert(&mut self, entry: SymbolEntry) -> bool {
        if self.count >= MAX_SYMBOLS {
            log_warning!(codes::symbols::SYMBOL_LIMIT,
                "Symbol table full; further declarations ignored",
                "limit" => MAX_SYMBOLS,
                "name" => entry.name.as_str()
            );
            return false;
        }
        if entry.name.len() > MAX_SYMBOL_NAME_LENGTH {
            log_warning!(codes::symbols::NAME_TOO_LONG,
                "Declared name exceeds maximum length; ignored",
                "length" => entry.name.len(),
                "limit" => MAX_SYMBOL_NAME_LENGTH
            );
            return false;
        }

        self.entries.entry(entry.name.clone()).or_default().push(entry);
        self.count += 1;
        true
    }

    /// Look up a name visible from `block_depth`, preferring the innermost
    /// enclosing declaration, then falling back to outer/global scope.
    pub fn lookup(&self, name: &str, block_depth: usize) -> Option<&SymbolEntry> {
        let candidates = self.entries.get(name)?;
        candidates
            .iter()
            .filter(|e| e.block_depth <= block_depth)
            .max_by_key(|e| e.block_depth)
            .or_else(|| candidates.first())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All declarations of a name, any scope
    pub fn declarations(&self, name: &str) -> &[SymbolEntry] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.count = 0;
    }

    /// Iterate all entries (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.entries.values().flatten()
    }

    /// Classify an identifier occupying a field-type slot. Unresolved
    /// names are still references: forward declarations and imported
    /// types are legitimate and cross-file resolution is out of lexical
    /// scope, so the scanner never fails closed here.
    pub fn resolve_reference(&self, name: &str, block_depth: usize) -> SymbolClass {
        if self.lookup(name, block_depth).is_none() {
            crate::log_debug!(codes::symbols::UNRESOLVED_REFERENCE,
                "Type reference not declared in this document",
                "name" => name,
                "depth" => block_depth
            );
        }
        SymbolClass::Reference
    }

    /// Pure classification query for one identifier occurrence:
    /// position after a symbol-declaring command is a definition, a
    /// field-type slot (after a field rule or scalar type) is a
    /// reference, anything else is plain.
    pub fn classify_occurrence(
        &self,
        name: &str,
        block_depth: usize,
        preceding: Option<Keyword>,
    ) -> SymbolClass {
        match preceding {
            Some(kw) if kw.declares_symbol() => SymbolClass::Definition,
            Some(kw) if kw.is_field_rule() || kw.is_scalar_type() => {
                self.resolve_reference(name, block_depth)
            }
            _ => SymbolClass::Plain,
        }
    }
}
