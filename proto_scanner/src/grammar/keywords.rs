//! Reserved-word vocabulary of the Protocol Buffer definition language
//!
//! Three word classes matter to classification: field rules (`required`,
//! `optional`, `repeated`), top-level commands (`message`, `package`, ...),
//! and the remaining reserved words (scalar types, booleans, modifiers).
//! Everything else is an identifier, disambiguated by grammatical context.
use serde::{Deserialize, Serialize};

/// All reserved words of the .proto language recognized by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    // === TOP-LEVEL COMMANDS ===
    Syntax,
    Package,
    Import,
    Option,
    Message,
    Enum,
    Service,
    Extend,
    Oneof,
    Rpc,

    // === FIELD RULES ===
    Required,
    Optional,
    Repeated,

    // === SCALAR TYPES ===
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    String,
    Bytes,

    // === BOOLEAN LITERALS ===
    True,
    False,

    // === MODIFIERS AND MISC RESERVED WORDS ===
    Map,
    Returns,
    Stream,
    Reserved,
    Extensions,
    To,
    Max,
    Group,
    Public,
    Weak,
    Default,
}

impl Keyword {
    /// Get the exact string representation as it appears in .proto source
    pub const fn as_str(self) -> &'static str {
        match self {
            // Top-level commands
            Self::Syntax => "syntax",
            Self::Package => "package",
            Self::Import => "import",
            Self::Option => "option",
            Self::Message => "message",
            Self::Enum => "enum",
            Self::Service => "service",
            Self::Extend => "extend",
            Self::Oneof => "oneof",
            Self::Rpc => "rpc",

            // Field rules
            Self::Required => "required",
            Self::Optional => "optional",
            Self::Repeated => "repeated",

            // Scalar types
            Self::Double => "double",
            Self::Float => "float",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Sint32 => "sint32",
            Self::Sint64 => "sint64",
            Self::Fixed32 => "fixed32",
            Self::Fixed64 => "fixed64",
            Self::Sfixed32 => "sfixed32",
            Self::Sfixed64 => "sfixed64",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Bytes => "bytes",

            // Boolean literals
            Self::True => "true",
            Self::False => "false",

            // Modifiers and misc
            Self::Map => "map",
            Self::Returns => "returns",
            Self::Stream => "stream",
            Self::Reserved => "reserved",
            Self::Extensions => "extensions",
            Self::To => "to",
            Self::Max => "max",
            Self::Group => "group",
            Self::Public => "public",
            Self::Weak => "weak",
            Self::Default => "default",
        }
    }

    /// Parse keyword from a word with exact case matching
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "syntax" => Some(Self::Syntax),
            "package" => Some(Self::Package),
            "import" => Some(Self::Import),
            "option" => Some(Self::Option),
            "message" => Some(Self::Message),
            "enum" => Some(Self::Enum),
            "service" => Some(Self::Service),
            "extend" => Some(Self::Extend),
            "oneof" => Some(Self::Oneof),
            "rpc" => Some(Self::Rpc),

            "required" => Some(Self::Required),
            "optional" => Some(Self::Optional),
            "repeated" => Some(Self::Repeated),

            "double" => Some(Self::Double),
            "float" => Some(Self::Float),
            "int32" => Some(Self::Int32),
            "int64" => Some(Self::Int64),
            "uint32" => Some(Self::Uint32),
            "uint64" => Some(Self::Uint64),
            "sint32" => Some(Self::Sint32),
            "sint64" => Some(Self::Sint64),
            "fixed32" => Some(Self::Fixed32),
            "fixed64" => Some(Self::Fixed64),
            "sfixed32" => Some(Self::Sfixed32),
            "sfixed64" => Some(Self::Sfixed64),
            "bool" => Some(Self::Bool),
            "string" => Some(Self::String),
            "bytes" => Some(Self::Bytes),

            "true" => Some(Self::True),
            "false" => Some(Self::False),

            "map" => Some(Self::Map),
            "returns" => Some(Self::Returns),
            "stream" => Some(Self::Stream),
            "reserved" => Some(Self::Reserved),
            "extensions" => Some(Self::Extensions),
            "to" => Some(Self::To),
            "max" => Some(Self::Max),
            "group" => Some(Self::Group),
            "public" => Some(Self::Public),
            "weak" => Some(Self::Weak),
            "default" => Some(Self::Default),

            _ => None,
        }
    }

    /// `required`, `optional`, `repeated`
    pub const fn is_field_rule(self) -> bool {
        matches!(self, Self::Required | Self::Optional | Self::Repeated)
    }

    /// Keywords that introduce a file-level construct
    pub const fn is_top_level_command(self) -> bool {
        matches!(
            self,
            Self::Syntax
                | Self::Package
                | Self::Import
                | Self::Option
                | Self::Message
                | Self::Enum
                | Self::Service
                | Self::Extend
                | Self::Oneof
                | Self::Rpc
        )
    }

    /// Built-in field types
    pub const fn is_scalar_type(self) -> bool {
        matches!(
            self,
            Self::Double
                | Self::Float
                | Self::Int32
                | Self::Int64
                | Self::Uint32
                | Self::Uint64
                | Self::Sint32
                | Self::Sint64
                | Self::Fixed32
                | Self::Fixed64
                | Self::Sfixed32
                | Self::Sfixed64
                | Self::Bool
                | Self::String
                | Self::Bytes
        )
    }

    pub const fn is_boolean_literal(self) -> bool {
        matches!(self, Self::True | Self::False)
    }

    /// Commands whose following identifier declares a new named symbol
    pub const fn declares_symbol(self) -> bool {
        matches!(self, Self::Message | Self::Enum | Self::Service)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Word classification driving the grammar classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordType {
    /// `required` / `optional` / `repeated` (becomes `CodeType::FieldRule`)
    FieldRule,
    /// File-level construct introducer (becomes `CodeType::TopLevelCmd`)
    TopLevelCommand,
    /// Any other reserved word (becomes `CodeType::Keyword`)
    Reserved,
    /// Not reserved; definition/reference resolution applies
    Identifier,
}

/// Unified classification: field rules vs commands vs reserved vs identifiers
pub fn classify_word_type(word: &str) -> WordType {
    match Keyword::from_str(word) {
        Some(kw) if kw.is_field_rule() => WordType::FieldRule,
        Some(kw) if kw.is_top_level_command() => WordType::TopLevelCommand,
        Some(_) => WordType::Reserved,
        None => WordType::Identifier,
    }
}

/// Complete list of reserved words (used by the word-list provider)
pub fn reserved_keywords() -> &'static [&'static str] {
    &[
        // Top-level commands
        "syntax", "package", "import", "option", "message", "enum", "service", "extend", "oneof",
        "rpc", // Field rules
        "required", "optional", "repeated", // Scalar types
        "double", "float", "int32", "int64", "uint32", "uint64", "sint32", "sint64", "fixed32",
        "fixed64", "sfixed32", "sfixed64", "bool", "string", "bytes",
        // Boolean literals
        "true", "false", // Modifiers and misc
        "map", "returns", "stream", "reserved", "extensions", "to", "max", "group", "public",
        "weak", "default",
    ]
}

/// Check if a word is reserved
pub fn is_reserved_keyword(s: &str) -> bool {
    Keyword::from_str(s).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_reserved_words() {
        for &word in reserved_keywords() {
            let kw = Keyword::from_str(word).expect(word);
            assert_eq!(kw.as_str(), word);
        }
    }

    #[test]
    fn test_word_type_partitions() {
        assert_eq!(classify_word_type("repeated"), WordType::FieldRule);
        assert_eq!(classify_word_type("message"), WordType::TopLevelCommand);
        assert_eq!(classify_word_type("int32"), WordType::Reserved);
        assert_eq!(classify_word_type("map"), WordType::Reserved);
        assert_eq!(classify_word_type("MyMessage"), WordType::Identifier);
    }

    #[test]
    fn test_case_sensitive_matching() {
        assert!(Keyword::from_str("Message").is_none());
        assert!(Keyword::from_str("MESSAGE").is_none());
        assert!(Keyword::from_str("message").is_some());
    }

    #[test]
    fn test_symbol_declaring_commands() {
        assert!(Keyword::Message.declares_symbol());
        assert!(Keyword::Enum.declares_symbol());
        assert!(Keyword::Service.declares_symbol());
        assert!(!Keyword::Oneof.declares_symbol());
        assert!(!Keyword::Import.declares_symbol());
    }
}
