//! Context-sensitive classification of identifier-shaped lexemes
//!
//! No parse tree is built. Classification runs off a small rolling window
//! of recent significant tokens on the current logical statement
//! ([`StatementContext`]), which is cheap to carry across line boundaries
//! and resilient to the syntactically invalid, in-progress text an editor
//! sees on every keystroke. The window resets at each `;`, `{`, and `}`.
use crate::config::compile_time::symbols::MAX_BLOCK_DEPTH;
use crate::grammar::keywords::{self, Keyword, WordType};
use crate::log_warning;
use crate::symbols::{SymbolKind, SymbolTable};
use crate::tokens::{CodeType, Token};
use serde::{Deserialize, Serialize};

/// What kind of `{ }` body the scanner is currently inside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    Message,
    Enum,
    Service,
    Oneof,
    Extend,
    Group,
    /// Body opened by a construct we do not track (tolerated, not rejected)
    Other,
}

impl BlockKind {
    fn from_command(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Message => Some(Self::Message),
            Keyword::Enum => Some(Self::Enum),
            Keyword::Service => Some(Self::Service),
            Keyword::Oneof => Some(Self::Oneof),
            Keyword::Extend => Some(Self::Extend),
            _ => None,
        }
    }
}

/// Rolling classification window for the current logical statement, plus
/// the block-kind stack that survives statement boundaries.
///
/// This is the grammar half of the cross-line scan state: two lines of the
/// same statement (`message\nFoo {`) classify identically to the one-line
/// form because the context carries over.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatementContext {
    blocks: Vec<BlockKind>,
    last_command: Option<Keyword>,
    pending_block: Option<BlockKind>,
    pending_definition: Option<SymbolKind>,
    statement_started: bool,
    prev_kind: Option<CodeType>,
    prev_text: Option<String>,
    in_map_type: bool,
}

impl StatementContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current `{ }` nesting depth
    pub fn depth(&self) -> usize {
        self.blocks.len()
    }

    pub fn current_block(&self) -> Option<BlockKind> {
        self.blocks.last().copied()
    }

    /// Bodies whose statements are field declarations
    fn in_message_body(&self) -> bool {
        matches!(
            self.current_block(),
            Some(BlockKind::Message | BlockKind::Oneof | BlockKind::Extend | BlockKind::Group)
        )
    }

    fn in_enum_body(&self) -> bool {
        matches!(self.current_block(), Some(BlockKind::Enum))
    }

    fn prev_is(&self, text: &str) -> bool {
        self.prev_text.as_deref() == Some(text)
    }

    /// Does the next identifier occupy a field-type slot?
    fn is_type_slot(&self) -> bool {
        if self.in_message_body() {
            // `Foo bar = 1;` - leading identifier of a field statement
            if !self.statement_started {
                return true;
            }
            // `repeated Foo bar = 1;`
            if self.prev_kind == Some(CodeType::FieldRule) {
                return true;
            }
            // `map<string, Foo>` type arguments
            if self.in_map_type && (self.prev_is("<") || self.prev_is(",")) {
                return true;
            }
            return false;
        }
        // `rpc Call (Request) returns (stream Response)`
        if matches!(self.current_block(), Some(BlockKind::Service))
            && self.last_command == Some(Keyword::Rpc)
        {
            return self.prev_is("(") || self.prev_is("stream");
        }
        // `extend Existing {` names an already-declared message
        self.last_command == Some(Keyword::Extend) && self.prev_kind == Some(CodeType::TopLevelCmd)
    }

    /// Does the next identifier name the field being declared?
    fn is_field_name_slot(&self) -> bool {
        if !self.in_message_body() {
            return false;
        }
        match self.prev_kind {
            // `Foo bar`, `OtherMessage value`
            Some(CodeType::SymRef) => true,
            // `int32 count`
            Some(CodeType::Keyword) => self
                .prev_text
                .as_deref()
                .and_then(Keyword::from_str)
                .is_some_and(Keyword::is_scalar_type),
            // `map<string, int32> pairs`
            Some(CodeType::Text) => self.prev_is(">"),
            _ => false,
        }
    }

    fn reset_statement(&mut self) {
        self.last_command = None;
        self.pending_block = None;
        self.pending_definition = None;
        self.statement_started = false;
        self.prev_kind = None;
        self.prev_text = None;
        self.in_map_type = false;
    }
}

/// Classify an identifier-shaped lexeme given the current statement
/// context and the document's symbol table.
///
/// Returns the token kind plus, when the occurrence declares a name, the
/// symbol kind to record in the table (`SymDef` declarations and field
/// names in field-name slots).
pub fn classify_word(
    word: &str,
    ctx: &StatementContext,
    symbols: &SymbolTable,
) -> (CodeType, Option<SymbolKind>) {
    match keywords::classify_word_type(word) {
        WordType::FieldRule => (CodeType::FieldRule, None),
        WordType::TopLevelCommand => (CodeType::TopLevelCmd, None),
        WordType::Reserved => (CodeType::Keyword, None),
        WordType::Identifier => resolve_identifier(word, ctx, symbols),
    }
}

fn resolve_identifier(
    word: &str,
    ctx: &StatementContext,
    symbols: &SymbolTable,
) -> (CodeType, Option<SymbolKind>) {
    // Name being introduced right after `message` / `enum` / `service`
    if let Some(kind) = ctx.pending_definition {
        return (CodeType::SymDef, Some(kind));
    }
    // `package com.example.project;` - the whole dotted sequence
    if ctx.last_command == Some(Keyword::Package) {
        return (CodeType::Namespace, None);
    }
    // Enum members get their own treatment, distinct from definitions
    if ctx.in_enum_body() && !ctx.statement_started {
        return (CodeType::Enums, None);
    }
    if ctx.is_type_slot() {
        // Unresolved names stay references; the table logs the miss
        symbols.resolve_reference(word, ctx.depth());
        return (CodeType::SymRef, None);
    }
    if ctx.is_field_name_slot() {
        return (CodeType::Identifier, Some(SymbolKind::Field));
    }
    (CodeType::Identifier, None)
}

/// Feed an emitted token back into the statement window.
///
/// Whitespace and comments never influence classification. Statement
/// boundaries (`;`, `{`, `}`) reset the window; `{` and `}` additionally
/// maintain the block-kind stack.
pub fn observe(token: &Token, ctx: &mut StatementContext) {
    if !token.is_significant() {
        return;
    }

    match token.kind {
        CodeType::TopLevelCmd => {
            if let Some(kw) = Keyword::from_str(&token.text) {
                ctx.last_command = Some(kw);
                ctx.pending_definition = SymbolKind::from_command(kw);
                ctx.pending_block = BlockKind::from_command(kw);
            }
        }
        CodeType::SymDef => {
            // Definition slot consumed; `message Foo Bar` does not make
            // two definitions
            ctx.pending_definition = None;
        }
        CodeType::Keyword => match token.text.as_str() {
            "map" => ctx.in_map_type = true,
            "group" => ctx.pending_block = Some(BlockKind::Group),
            _ => {}
        },
        CodeType::Text => match token.text.as_str() {
            "{" => {
                let kind = ctx.pending_block.take().unwrap_or(BlockKind::Other);
                if ctx.blocks.len() < MAX_BLOCK_DEPTH {
                    ctx.blocks.push(kind);
                } else {
                    log_warning!("Block nesting exceeds tracked depth",
                        "limit" => MAX_BLOCK_DEPTH
                    );
                }
                ctx.reset_statement();
                return;
            }
            "}" => {
                ctx.blocks.pop();
                ctx.reset_statement();
                return;
            }
            ";" => {
                ctx.reset_statement();
                return;
            }
            ">" => ctx.in_map_type = false,
            _ => {}
        },
        _ => {}
    }

    ctx.prev_kind = Some(token.kind);
    ctx.prev_text = Some(token.text.clone());
    ctx.statement_started = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(ctx: &mut StatementContext, symbols: &SymbolTable, words: &[&str]) -> Vec<CodeType> {
        let mut kinds = Vec::new();
        for word in words {
            let kind = if word.chars().next().is_some_and(|c| c.is_alphabetic() || c == '_') {
                classify_word(word, ctx, symbols).0
            } else {
                CodeType::Text
            };
            let token = Token::new(0, 0, *word, kind);
            observe(&token, ctx);
            kinds.push(kind);
        }
        kinds
    }

    #[test]
    fn test_message_declaration_sequence() {
        let mut ctx = StatementContext::new();
        let symbols = SymbolTable::new();

        let kinds = feed(&mut ctx, &symbols, &["message", "Foo", "{"]);
        assert_eq!(
            kinds,
            vec![CodeType::TopLevelCmd, CodeType::SymDef, CodeType::Text]
        );
        assert_eq!(ctx.current_block(), Some(BlockKind::Message));
        assert_eq!(ctx.depth(), 1);
    }

    #[test]
    fn test_field_statement_in_message_body() {
        let mut ctx = StatementContext::new();
        let symbols = SymbolTable::new();
        feed(&mut ctx, &symbols, &["message", "Outer", "{"]);

        let kinds = feed(&mut ctx, &symbols, &["Foo", "bar", "=", ";"]);
        assert_eq!(kinds[0], CodeType::SymRef);
        assert_eq!(kinds[1], CodeType::Identifier);
    }

    #[test]
    fn test_field_rule_then_scalar_type() {
        let mut ctx = StatementContext::new();
        let symbols = SymbolTable::new();
        feed(&mut ctx, &symbols, &["message", "Outer", "{"]);

        let kinds = feed(&mut ctx, &symbols, &["repeated", "int32", "counts", ";"]);
        assert_eq!(kinds[0], CodeType::FieldRule);
        assert_eq!(kinds[1], CodeType::Keyword);
        assert_eq!(kinds[2], CodeType::Identifier);
    }

    #[test]
    fn test_field_name_after_type_records_field_symbol() {
        let mut ctx = StatementContext::new();
        let symbols = SymbolTable::new();
        feed(&mut ctx, &symbols, &["message", "Outer", "{"]);
        feed(&mut ctx, &symbols, &["Foo"]);

        let (kind, recorded) = classify_word("bar", &ctx, &symbols);
        assert_eq!(kind, CodeType::Identifier);
        assert_eq!(recorded, Some(SymbolKind::Field));
    }

    #[test]
    fn test_package_clause_is_namespace() {
        let mut ctx = StatementContext::new();
        let symbols = SymbolTable::new();

        let kinds = feed(&mut ctx, &symbols, &["package", "com", ".", "example", ";"]);
        assert_eq!(kinds[1], CodeType::Namespace);
        assert_eq!(kinds[3], CodeType::Namespace);

        // Statement ended; the next identifier is not namespace anymore
        let (kind, _) = classify_word("stray", &ctx, &symbols);
        assert_eq!(kind, CodeType::Identifier);
    }

    #[test]
    fn test_enum_members() {
        let mut ctx = StatementContext::new();
        let symbols = SymbolTable::new();
        feed(&mut ctx, &symbols, &["enum", "Color", "{"]);

        let kinds = feed(&mut ctx, &symbols, &["RED", "=", ";", "GREEN"]);
        assert_eq!(kinds[0], CodeType::Enums);
        assert_eq!(kinds[3], CodeType::Enums);
    }

    #[test]
    fn test_option_inside_enum_is_not_a_member() {
        let mut ctx = StatementContext::new();
        let symbols = SymbolTable::new();
        feed(&mut ctx, &symbols, &["enum", "Color", "{"]);

        let kinds = feed(&mut ctx, &symbols, &["option", "allow_alias"]);
        assert_eq!(kinds[0], CodeType::TopLevelCmd);
        assert_eq!(kinds[1], CodeType::Identifier);
    }

    #[test]
    fn test_map_value_type_is_reference() {
        let mut ctx = StatementContext::new();
        let symbols = SymbolTable::new();
        feed(&mut ctx, &symbols, &["message", "Outer", "{"]);

        let kinds = feed(
            &mut ctx,
            &symbols,
            &["map", "<", "string", ",", "Foo", ">", "pairs", ";"],
        );
        assert_eq!(kinds[0], CodeType::Keyword);
        assert_eq!(kinds[2], CodeType::Keyword);
        assert_eq!(kinds[4], CodeType::SymRef);
        assert_eq!(kinds[6], CodeType::Identifier);
    }

    #[test]
    fn test_rpc_parameter_types_are_references() {
        let mut ctx = StatementContext::new();
        let symbols = SymbolTable::new();
        feed(&mut ctx, &symbols, &["service", "Search", "{"]);

        let kinds = feed(
            &mut ctx,
            &symbols,
            &["rpc", "Find", "(", "Request", ")", "returns", "(", "stream", "Response", ")", ";"],
        );
        assert_eq!(kinds[0], CodeType::TopLevelCmd);
        assert_eq!(kinds[1], CodeType::Identifier);
        assert_eq!(kinds[3], CodeType::SymRef);
        assert_eq!(kinds[5], CodeType::Keyword);
        assert_eq!(kinds[8], CodeType::SymRef);
    }

    #[test]
    fn test_extend_target_is_reference() {
        let mut ctx = StatementContext::new();
        let symbols = SymbolTable::new();

        let kinds = feed(&mut ctx, &symbols, &["extend", "Existing", "{"]);
        assert_eq!(kinds[1], CodeType::SymRef);
        assert_eq!(ctx.current_block(), Some(BlockKind::Extend));
    }

    #[test]
    fn test_nested_blocks_unwind() {
        let mut ctx = StatementContext::new();
        let symbols = SymbolTable::new();
        feed(&mut ctx, &symbols, &["message", "A", "{"]);
        feed(&mut ctx, &symbols, &["message", "B", "{"]);
        assert_eq!(ctx.depth(), 2);

        feed(&mut ctx, &symbols, &["}"]);
        assert_eq!(ctx.depth(), 1);
        assert_eq!(ctx.current_block(), Some(BlockKind::Message));

        feed(&mut ctx, &symbols, &["}"]);
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn test_unmatched_close_brace_tolerated() {
        let mut ctx = StatementContext::new();
        let symbols = SymbolTable::new();
        feed(&mut ctx, &symbols, &["}"]);
        assert_eq!(ctx.depth(), 0);
    }
}
