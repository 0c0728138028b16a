//! Line-oriented lexical scanning
//!
//! The scanning unit is the line: [`LineScanner::scan`] takes one line of
//! text plus the [`ScanState`] entering it and returns the gap-free token
//! covering for that line plus the state leaving it. The document layer
//! owns the per-line state snapshots ([`StateTracker`]) and decides which
//! lines an edit forces to rescan.

pub mod scanner;
pub mod state;

pub use scanner::{LineScan, LineScanner, ScanMetrics};
pub use state::{LineState, ScanState, StateTracker};
