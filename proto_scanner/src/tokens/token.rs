//! Token data model for classified .proto source spans
//!
//! Every scanned lexeme becomes a [`Token`] carrying its line, column span,
//! raw text, and semantic [`CodeType`]. Malformed spans carry an attached
//! [`TokenDiagnostic`] instead of being a separate type - a token is an
//! error token exactly when its diagnostic is present.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic classification of a scanned span.
///
/// Each value maps to exactly one rendering/interaction treatment in the
/// consuming editor; ordering carries no meaning beyond distinctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeType {
    /// Whitespace, punctuation, and anything with no richer classification
    Text,
    /// Reserved word that is not a field rule or top-level command
    Keyword,
    /// Line or block comment span
    Comment,
    /// Plain identifier (field names, option names, unclassified words)
    Identifier,
    /// String literal including its quotes
    String,
    /// Integer, float, or hex literal
    Number,
    /// Enum member name inside an `enum { }` body
    Enums,
    /// Declared name (message/enum/service being introduced)
    SymDef,
    /// Use of a declared or imported name in a type slot
    SymRef,
    /// `required`, `optional`, or `repeated`
    FieldRule,
    /// Keyword introducing a file-level construct (`message`, `package`, ...)
    TopLevelCmd,
    /// Component of a `package` clause
    Namespace,
    /// Malformed span; carries a [`TokenDiagnostic`]
    Error,
}

impl CodeType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Keyword => "keyword",
            Self::Comment => "comment",
            Self::Identifier => "identifier",
            Self::String => "string",
            Self::Number => "number",
            Self::Enums => "enum-member",
            Self::SymDef => "symbol-definition",
            Self::SymRef => "symbol-reference",
            Self::FieldRule => "field-rule",
            Self::TopLevelCmd => "top-level-command",
            Self::Namespace => "namespace",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Diagnostic payload attached to an error token.
///
/// `offset` locates the offending character relative to the token's own
/// `position`, so a squiggle can point at the exact bad spot inside the
/// matched region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDiagnostic {
    pub message: String,
    pub offset: usize,
}

impl TokenDiagnostic {
    pub fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }
}

/// A classified span of one source line.
///
/// Immutable once constructed. `position` and `length` are character
/// columns within the containing line; `length` always equals the
/// character count of `text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Line index within the document (0-based)
    pub line: usize,
    /// Starting column within the line (0-based, characters)
    pub position: usize,
    /// Span length in characters
    pub length: usize,
    /// The raw matched text
    pub text: String,
    /// Semantic classification
    pub kind: CodeType,
    /// Present exactly when `kind == CodeType::Error`
    pub diagnostic: Option<TokenDiagnostic>,
}

impl Token {
    /// Create a token for a well-formed span
    pub fn new(line: usize, position: usize, text: impl Into<String>, kind: CodeType) -> Self {
        let text = text.into();
        let length = text.chars().count();
        Self {
            line,
            position,
            length,
            text,
            kind,
            diagnostic: None,
        }
    }

    /// Create an error token with a diagnostic message and an offset
    /// (relative to `position`) locating the bad character
    pub fn error(
        line: usize,
        position: usize,
        text: impl Into<String>,
        message: impl Into<String>,
        offset: usize,
    ) -> Self {
        let text = text.into();
        let length = text.chars().count();
        Self {
            line,
            position,
            length,
            text,
            kind: CodeType::Error,
            diagnostic: Some(TokenDiagnostic::new(message, offset)),
        }
    }

    /// Column just past the end of this token
    pub fn end(&self) -> usize {
        self.position + self.length
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, CodeType::Error)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.kind, CodeType::Comment)
    }

    /// Whitespace-only `Text` span (emitted to keep line coverage gap-free)
    pub fn is_whitespace(&self) -> bool {
        self.kind == CodeType::Text && self.text.chars().all(char::is_whitespace)
    }

    /// Tokens that participate in the statement context window.
    /// Whitespace and comments never influence classification.
    pub fn is_significant(&self) -> bool {
        !self.is_whitespace() && !self.is_comment()
    }

    /// Check whether this token is a single punctuation character
    pub fn is_punctuation(&self, ch: char) -> bool {
        self.kind == CodeType::Text && self.length == 1 && self.text.chars().next() == Some(ch)
    }

    pub fn diagnostic(&self) -> Option<&TokenDiagnostic> {
        self.diagnostic.as_ref()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}+{} {} {:?}",
            self.line, self.position, self.length, self.kind, self.text
        )
    }
}
