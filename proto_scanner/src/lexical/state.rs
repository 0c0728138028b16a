//! Cross-line scan state
//!
//! A line cannot be scanned in isolation: it may start inside a block
//! comment opened lines earlier, and identifier classification depends on
//! the statement in flight. [`ScanState`] bundles both halves; the
//! document keeps one snapshot per line boundary so an edit rescans only
//! the lines whose incoming state actually changed.
use crate::grammar::StatementContext;
use serde::{Deserialize, Serialize};

/// Purely lexical carry-over at a line boundary
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineState {
    /// Inside a `/* ... */` comment that has not yet closed
    pub in_block_comment: bool,
    /// Quote character of a string continued from a previous line.
    ///
    /// String literals do not span lines in this language, so the scanner
    /// itself never sets this at end of line. It is honored on input for
    /// completeness of the state model; a line entered with an open quote
    /// is consumed as string text up to the closing quote.
    pub open_quote: Option<char>,
}

impl LineState {
    pub fn clean() -> Self {
        Self::default()
    }

    pub fn is_clean(&self) -> bool {
        !self.in_block_comment && self.open_quote.is_none()
    }
}

/// Complete state entering (or leaving) a line: the lexical carry-over
/// plus the grammatical statement window.
///
/// Equality comparison is what makes incremental rescans terminate early:
/// when a rescanned line's outgoing state equals the snapshot already on
/// record, no later line can observe any difference.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScanState {
    pub line: LineState,
    pub context: StatementContext,
}

impl ScanState {
    pub fn initial() -> Self {
        Self::default()
    }
}

/// Per-line-boundary snapshots of [`ScanState`] for a document.
///
/// `states[i]` is the state entering line `i`; index `line_count` holds
/// the state after the final line.
#[derive(Debug, Clone, Default)]
pub struct StateTracker {
    states: Vec<ScanState>,
}

impl StateTracker {
    pub fn new() -> Self {
        Self {
            states: vec![ScanState::initial()],
        }
    }

    /// Discard all snapshots and restart from a clean document
    pub fn reset(&mut self) {
        self.states.clear();
        self.states.push(ScanState::initial());
    }

    /// State entering `line`, or the initial state when no snapshot has
    /// been recorded that far yet
    pub fn state_entering(&self, line: usize) -> ScanState {
        self.states.get(line).cloned().unwrap_or_default()
    }

    /// Record the state leaving `line`. Returns true when the snapshot
    /// changed, meaning the following line must be rescanned.
    pub fn record_outgoing(&mut self, line: usize, state: ScanState) -> bool {
        let slot = line + 1;
        if slot < self.states.len() {
            if self.states[slot] == state {
                return false;
            }
            self.states[slot] = state;
            return true;
        }
        // Fill any gap with defaults so the slot indexes stay aligned
        while self.states.len() < slot {
            self.states.push(ScanState::initial());
        }
        self.states.push(state);
        true
    }

    /// Drop snapshots past the state entering `line` (used when lines are
    /// inserted or removed and the tail must be recomputed)
    pub fn truncate_after(&mut self, line: usize) {
        self.states.truncate(line + 1);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
