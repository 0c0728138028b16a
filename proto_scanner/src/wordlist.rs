//! Keyword word list with hover descriptions
//!
//! Backs quick-info style features: given a reserved word, return a short
//! human-readable description. Built once on first use.
use crate::grammar::reserved_keywords;
use std::collections::HashMap;
use std::sync::OnceLock;

static DESCRIPTIONS: &[(&str, &str)] = &[
    ("syntax", "Declares the .proto syntax version for this file"),
    ("package", "Declares the namespace all definitions in this file belong to"),
    ("import", "Makes definitions from another .proto file available"),
    ("option", "Sets a file, message, field, or service level option"),
    ("message", "Defines a structured message type"),
    ("enum", "Defines an enumeration type"),
    ("service", "Defines an RPC service interface"),
    ("extend", "Adds fields to a previously defined message"),
    ("oneof", "Groups fields of which at most one may be set"),
    ("rpc", "Defines one method of a service"),
    ("required", "Field rule: the field must be present (proto2)"),
    ("optional", "Field rule: the field may be omitted"),
    ("repeated", "Field rule: the field may occur any number of times"),
    ("double", "64-bit floating point scalar type"),
    ("float", "32-bit floating point scalar type"),
    ("int32", "32-bit signed integer, variable-length encoded"),
    ("int64", "64-bit signed integer, variable-length encoded"),
    ("uint32", "32-bit unsigned integer, variable-length encoded"),
    ("uint64", "64-bit unsigned integer, variable-length encoded"),
    ("sint32", "32-bit signed integer, zigzag encoded"),
    ("sint64", "64-bit signed integer, zigzag encoded"),
    ("fixed32", "32-bit unsigned integer, fixed-width encoded"),
    ("fixed64", "64-bit unsigned integer, fixed-width encoded"),
    ("sfixed32", "32-bit signed integer, fixed-width encoded"),
    ("sfixed64", "64-bit signed integer, fixed-width encoded"),
    ("bool", "Boolean scalar type"),
    ("string", "UTF-8 text scalar type"),
    ("bytes", "Arbitrary byte sequence scalar type"),
    ("true", "Boolean literal"),
    ("false", "Boolean literal"),
    ("map", "Declares an associative map field: map<key_type, value_type>"),
    ("returns", "Separates an rpc method's request and response types"),
    ("stream", "Marks an rpc request or response as streamed"),
    ("reserved", "Reserves field numbers or names against reuse"),
    ("extensions", "Declares a field number range open for extension (proto2)"),
    ("to", "Range separator in reserved and extensions declarations"),
    ("max", "Upper bound marker in field number ranges"),
    ("group", "Defines an inline nested message field (proto2, deprecated)"),
    ("public", "Re-exports an import to this file's importers"),
    ("weak", "Marks an import as weak (tolerates absence)"),
    ("default", "Sets a field's default value in brackets (proto2)"),
];

fn table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| DESCRIPTIONS.iter().copied().collect())
}

/// Description of a reserved word, or `None` for non-keywords
pub fn description(word: &str) -> Option<&'static str> {
    table().get(word).copied()
}

/// All reserved words with their descriptions, in stable declaration order
pub fn entries() -> &'static [(&'static str, &'static str)] {
    DESCRIPTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_has_a_description() {
        for &word in reserved_keywords() {
            assert!(description(word).is_some(), "missing description: {word}");
        }
    }

    #[test]
    fn test_every_description_is_a_keyword() {
        for &(word, _) in entries() {
            assert!(
                crate::grammar::is_reserved_keyword(word),
                "description for non-keyword: {word}"
            );
        }
    }

    #[test]
    fn test_non_keyword_has_no_description() {
        assert_eq!(description("MyMessage"), None);
        assert_eq!(description("Message"), None);
    }
}
