//! Whole-document scan orchestration
//!
//! [`ProtoDocument`] owns the line buffer, the per-line token cache, the
//! per-boundary state snapshots, and the symbol table. Edits are applied
//! per line; a changed line is rescanned and the change propagates
//! forward only while the outgoing state at each boundary actually
//! differs from the snapshot on record, so a one-line edit deep inside a
//! large file usually rescans one line.
//!
//! The symbol table is rebuilt from the whole document after every edit.
//! Reference classification is optimistic and does not read the table, so
//! the rebuild never forces a second token pass.
use crate::config::runtime::ScannerPreferences;
use crate::lexical::{LineScanner, ScanMetrics, ScanState, StateTracker};
use crate::logging::codes;
use crate::symbols::{SymbolEntry, SymbolTable};
use crate::tokens::Token;
use crate::log_success;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("line {line} out of range (document has {line_count} lines)")]
    LineOutOfRange { line: usize, line_count: usize },
}

/// A scanned .proto document: line text, cached tokens, boundary states,
/// and the document-wide symbol table.
#[derive(Debug, Default)]
pub struct ProtoDocument {
    lines: Vec<String>,
    tokens: Vec<Vec<Token>>,
    line_definitions: Vec<Vec<SymbolEntry>>,
    tracker: StateTracker,
    symbols: SymbolTable,
    scanner: LineScanner,
    metrics: ScanMetrics,
}

impl ProtoDocument {
    pub fn new(preferences: ScannerPreferences) -> Self {
        Self {
            scanner: LineScanner::new(preferences),
            tracker: StateTracker::new(),
            ..Default::default()
        }
    }

    /// Build a document from full source text and scan it
    pub fn from_text(text: &str, preferences: ScannerPreferences) -> Self {
        let mut document = Self::new(preferences);
        document.set_text(text);
        document
    }

    /// Replace the whole document and rescan from scratch
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_owned).collect();
        self.tokens = vec![Vec::new(); self.lines.len()];
        self.line_definitions = vec![Vec::new(); self.lines.len()];
        self.tracker.reset();
        self.metrics.reset();
        self.rescan_from(0, false);
        self.rebuild_symbols();

        if self.scanner.preferences().log_token_statistics {
            log_success!(codes::success::SCAN_COMPLETE,
                "Document scanned",
                "lines" => self.metrics.lines_scanned,
                "tokens" => self.metrics.tokens_emitted,
                "errors" => self.metrics.error_tokens
            );
        }
    }

    /// Replace one line's text and rescan it, propagating forward only
    /// while the boundary state keeps changing
    pub fn update_line(&mut self, line: usize, text: &str) -> Result<(), DocumentError> {
        self.check_line(line)?;
        self.lines[line] = text.to_owned();
        self.rescan_from(line, true);
        self.rebuild_symbols();
        Ok(())
    }

    /// Insert a new line before `line` (`line == line_count` appends)
    pub fn insert_line(&mut self, line: usize, text: &str) -> Result<(), DocumentError> {
        if line > self.lines.len() {
            return Err(DocumentError::LineOutOfRange {
                line,
                line_count: self.lines.len(),
            });
        }
        self.lines.insert(line, text.to_owned());
        self.tokens.insert(line, Vec::new());
        self.line_definitions.insert(line, Vec::new());
        // Line indices below the insertion shift, so cached tokens there
        // carry stale line numbers and cannot be reused
        self.tracker.truncate_after(line);
        self.rescan_from(line, false);
        self.rebuild_symbols();
        Ok(())
    }

    /// Remove a line
    pub fn remove_line(&mut self, line: usize) -> Result<(), DocumentError> {
        self.check_line(line)?;
        self.lines.remove(line);
        self.tokens.remove(line);
        self.line_definitions.remove(line);
        self.tracker.truncate_after(line);
        self.rescan_from(line, false);
        self.rebuild_symbols();
        Ok(())
    }

    /// Cached tokens for one line
    pub fn tokens(&self, line: usize) -> Result<&[Token], DocumentError> {
        self.check_line(line)?;
        Ok(&self.tokens[line])
    }

    pub fn line_text(&self, line: usize) -> Result<&str, DocumentError> {
        self.check_line(line)?;
        Ok(&self.lines[line])
    }

    /// State snapshot entering a line
    pub fn state_entering(&self, line: usize) -> ScanState {
        self.tracker.state_entering(line)
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn metrics(&self) -> &ScanMetrics {
        &self.metrics
    }

    fn check_line(&self, line: usize) -> Result<(), DocumentError> {
        if line >= self.lines.len() {
            return Err(DocumentError::LineOutOfRange {
                line,
                line_count: self.lines.len(),
            });
        }
        Ok(())
    }

    /// Forward sweep from `start`. With `allow_early_exit`, the sweep
    /// stops at the first boundary whose outgoing state matches the
    /// snapshot already on record (every later line would rescan
    /// identically).
    fn rescan_from(&mut self, start: usize, allow_early_exit: bool) {
        let detailed = self.scanner.preferences().collect_detailed_metrics;
        for i in start..self.lines.len() {
            let incoming = self.tracker.state_entering(i);
            let scan = self.scanner.scan(i, &self.lines[i], &incoming, &self.symbols);
            if detailed {
                self.metrics.record_line(&scan);
            }
            self.tokens[i] = scan.tokens;
            self.line_definitions[i] = scan.definitions;
            let changed = self.tracker.record_outgoing(i, scan.outgoing);
            if allow_early_exit && !changed {
                break;
            }
        }
    }

    /// Rebuild the symbol table from the per-line definitions collected
    /// during scanning
    fn rebuild_symbols(&mut self) {
        self.symbols.clear();
        for defs in &self.line_definitions {
            for entry in defs {
                self.symbols.insert(entry.clone());
            }
        }
        log_success!(codes::success::SYMBOLS_REBUILT,
            "Symbol table rebuilt",
            "symbols" => self.symbols.len()
        );
    }
}
