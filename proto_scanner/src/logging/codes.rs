//! Diagnostic codes and their metadata
//!
//! Single source of truth for every code the scanner logs, with category,
//! severity, and description looked up from one table. Every condition
//! here is recoverable: the scanner always collects and continues.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Wrapper for both diagnostic and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    High = 0,
    Medium = 1,
    Low = 2,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Metadata for one code
#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub description: &'static str,
}

/// Lexical diagnostic codes
pub mod lexical {
    use super::Code;

    pub const UNTERMINATED_STRING: Code = Code::new("L001");
    pub const INVALID_ESCAPE: Code = Code::new("L002");
    pub const MALFORMED_NUMBER: Code = Code::new("L003");
    pub const UNRECOGNIZED_CHARACTER: Code = Code::new("L004");
    pub const LINE_TOO_LONG: Code = Code::new("L005");
    pub const TOKEN_LIMIT: Code = Code::new("L006");
}

/// Symbol table diagnostic codes
pub mod symbols {
    use super::Code;

    pub const SYMBOL_LIMIT: Code = Code::new("S001");
    pub const NAME_TOO_LONG: Code = Code::new("S002");
    pub const UNRESOLVED_REFERENCE: Code = Code::new("S003");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZED: Code = Code::new("OK000");
    pub const SCAN_COMPLETE: Code = Code::new("OK001");
    pub const SYMBOLS_REBUILT: Code = Code::new("OK002");
}

fn metadata_table() -> &'static HashMap<&'static str, CodeMetadata> {
    static TABLE: OnceLock<HashMap<&'static str, CodeMetadata>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let entries = [
            CodeMetadata {
                code: "L001",
                category: "Lexical",
                severity: Severity::Medium,
                description: "String literal not closed before end of line",
            },
            CodeMetadata {
                code: "L002",
                category: "Lexical",
                severity: Severity::Low,
                description: "Unrecognized escape sequence in string literal",
            },
            CodeMetadata {
                code: "L003",
                category: "Lexical",
                severity: Severity::Low,
                description: "Numeric literal with invalid digits or suffix",
            },
            CodeMetadata {
                code: "L004",
                category: "Lexical",
                severity: Severity::Low,
                description: "Character matches no token pattern",
            },
            CodeMetadata {
                code: "L005",
                category: "Lexical",
                severity: Severity::Medium,
                description: "Line longer than the maximum scannable length",
            },
            CodeMetadata {
                code: "L006",
                category: "Lexical",
                severity: Severity::Medium,
                description: "Line produced more tokens than the per-line limit",
            },
            CodeMetadata {
                code: "S001",
                category: "Symbols",
                severity: Severity::Medium,
                description: "Symbol table capacity reached",
            },
            CodeMetadata {
                code: "S002",
                category: "Symbols",
                severity: Severity::Low,
                description: "Declared name longer than the maximum symbol length",
            },
            CodeMetadata {
                code: "S003",
                category: "Symbols",
                severity: Severity::Low,
                description: "Type reference not declared in this document",
            },
            CodeMetadata {
                code: "OK000",
                category: "Success",
                severity: Severity::Low,
                description: "Logging system initialized",
            },
            CodeMetadata {
                code: "OK001",
                category: "Success",
                severity: Severity::Low,
                description: "Whole-document scan completed",
            },
            CodeMetadata {
                code: "OK002",
                category: "Success",
                severity: Severity::Low,
                description: "Symbol table rebuilt",
            },
        ];
        entries.into_iter().map(|m| (m.code, m)).collect()
    })
}

pub fn get_metadata(code: &str) -> Option<&'static CodeMetadata> {
    metadata_table().get(code)
}

pub fn get_description(code: &str) -> &'static str {
    get_metadata(code).map_or("Unknown code", |m| m.description)
}

pub fn get_category(code: &str) -> &'static str {
    get_metadata(code).map_or("Unknown", |m| m.category)
}

pub fn get_severity(code: &str) -> Severity {
    get_metadata(code).map_or(Severity::Low, |m| m.severity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_constants_have_metadata() {
        let all = [
            lexical::UNTERMINATED_STRING,
            lexical::INVALID_ESCAPE,
            lexical::MALFORMED_NUMBER,
            lexical::UNRECOGNIZED_CHARACTER,
            lexical::LINE_TOO_LONG,
            lexical::TOKEN_LIMIT,
            symbols::SYMBOL_LIMIT,
            symbols::NAME_TOO_LONG,
            symbols::UNRESOLVED_REFERENCE,
            success::SYSTEM_INITIALIZED,
            success::SCAN_COMPLETE,
            success::SYMBOLS_REBUILT,
        ];
        for code in all {
            assert_ne!(get_description(code.as_str()), "Unknown code", "{code}");
        }
    }

    #[test]
    fn test_unknown_code_defaults() {
        assert_eq!(get_description("Z999"), "Unknown code");
        assert_eq!(get_category("Z999"), "Unknown");
        assert_eq!(get_severity("Z999"), Severity::Low);
    }

    #[test]
    fn test_categories() {
        assert_eq!(get_category("L001"), "Lexical");
        assert_eq!(get_category("S001"), "Symbols");
        assert_eq!(get_category("OK001"), "Success");
    }
}
