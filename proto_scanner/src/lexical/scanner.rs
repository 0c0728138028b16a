//! Line-oriented lexical scanner for .proto source
//!
//! One call scans one line given the state entering it and produces the
//! tokens covering that line plus the state leaving it. Coverage is
//! gap-free: every character of the line lands in exactly one token, with
//! whitespace runs and punctuation emitted as `Text` spans.
//!
//! Match priority at each position, first hit wins:
//!
//! 1. block-comment continuation (incoming state)
//! 2. string continuation (incoming state)
//! 3. `//` line comment
//! 4. `/*` block comment
//! 5. string literal
//! 6. numeric literal
//! 7. word (keyword or identifier, context-classified)
//! 8. whitespace run
//! 9. known punctuation
//! 10. single-character error token (guaranteed forward progress)
//!
//! Malformed input never aborts a scan; it becomes an error token with an
//! attached diagnostic and scanning continues at the next character.
use crate::config::compile_time::scanner::{MAX_LINE_LENGTH, MAX_TOKENS_PER_LINE};
use crate::config::runtime::ScannerPreferences;
use crate::grammar;
use crate::lexical::state::ScanState;
use crate::logging::codes;
use crate::log_warning;
use crate::symbols::{SymbolEntry, SymbolTable};
use crate::tokens::{CodeType, Token};

/// Punctuation characters emitted as single-character `Text` tokens
const PUNCTUATION: &[char] = &[
    '{', '}', '(', ')', '[', ']', '<', '>', '=', ';', ',', '.', ':', '-', '+',
];

/// Result of scanning one line
#[derive(Debug, Clone)]
pub struct LineScan {
    /// Tokens covering the line, in order, gap-free
    pub tokens: Vec<Token>,
    /// State entering the following line
    pub outgoing: ScanState,
    /// Names declared on this line (fed to the symbol table rebuild)
    pub definitions: Vec<SymbolEntry>,
}

/// Running counters over scanned lines
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanMetrics {
    pub lines_scanned: usize,
    pub tokens_emitted: usize,
    pub keyword_tokens: usize,
    pub identifier_tokens: usize,
    pub error_tokens: usize,
    pub comment_tokens: usize,
}

impl ScanMetrics {
    pub fn record_line(&mut self, scan: &LineScan) {
        self.lines_scanned += 1;
        self.tokens_emitted += scan.tokens.len();
        for token in &scan.tokens {
            match token.kind {
                CodeType::Keyword | CodeType::FieldRule | CodeType::TopLevelCmd => {
                    self.keyword_tokens += 1
                }
                CodeType::Identifier
                | CodeType::SymDef
                | CodeType::SymRef
                | CodeType::Enums
                | CodeType::Namespace => self.identifier_tokens += 1,
                CodeType::Error => self.error_tokens += 1,
                CodeType::Comment => self.comment_tokens += 1,
                _ => {}
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The per-line scanner. Stateless between calls; all carry-over lives in
/// the [`ScanState`] passed in and returned.
#[derive(Debug, Clone, Default)]
pub struct LineScanner {
    preferences: ScannerPreferences,
}

impl LineScanner {
    pub fn new(preferences: ScannerPreferences) -> Self {
        Self { preferences }
    }

    pub fn preferences(&self) -> &ScannerPreferences {
        &self.preferences
    }

    /// Scan one line. `incoming` is the state left by the previous line
    /// (or the initial state for line 0); `symbols` is the document's
    /// symbol table used for reference resolution.
    pub fn scan(
        &self,
        line_index: usize,
        text: &str,
        incoming: &ScanState,
        symbols: &SymbolTable,
    ) -> LineScan {
        let chars: Vec<char> = text.chars().collect();

        if chars.len() > MAX_LINE_LENGTH {
            log_warning!(codes::lexical::LINE_TOO_LONG,
                "Line exceeds maximum scannable length; emitted unclassified",
                "line" => line_index,
                "length" => chars.len(),
                "limit" => MAX_LINE_LENGTH
            );
            return LineScan {
                tokens: vec![Token::new(line_index, 0, text, CodeType::Text)],
                outgoing: incoming.clone(),
                definitions: Vec::new(),
            };
        }

        let mut state = incoming.clone();
        let mut tokens: Vec<Token> = Vec::new();
        let mut definitions: Vec<SymbolEntry> = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            if tokens.len() >= MAX_TOKENS_PER_LINE {
                log_warning!(codes::lexical::TOKEN_LIMIT,
                    "Token limit reached; remainder of line emitted unclassified",
                    "line" => line_index,
                    "limit" => MAX_TOKENS_PER_LINE
                );
                let rest: String = chars[pos..].iter().collect();
                tokens.push(Token::new(line_index, pos, rest, CodeType::Text));
                break;
            }

            let (token, next) = if state.line.in_block_comment {
                self.continue_block_comment(line_index, &chars, pos, &mut state)
            } else if let Some(quote) = state.line.open_quote {
                self.continue_string(line_index, &chars, pos, quote, &mut state)
            } else {
                self.next_token(line_index, &chars, pos, &mut state, symbols, &mut definitions)
            };

            debug_assert!(next > pos, "scanner must always advance");
            grammar::observe(&token, &mut state.context);
            if self.preferences.emit_whitespace_tokens || !token.is_whitespace() {
                tokens.push(token);
            }
            pos = next;
        }

        // Strings never span lines; anything unterminated was already
        // reported as an error token on this line
        state.line.open_quote = None;

        LineScan {
            tokens,
            outgoing: state,
            definitions,
        }
    }

    /// Diagnostic message text, optionally suffixed with the position of
    /// the offending character
    fn diagnose(&self, base: &str, line: usize, column: usize) -> String {
        if self.preferences.include_position_in_messages {
            format!("{base} (line {line}, column {column})")
        } else {
            base.to_string()
        }
    }

    fn next_token(
        &self,
        line: usize,
        chars: &[char],
        pos: usize,
        state: &mut ScanState,
        symbols: &SymbolTable,
        definitions: &mut Vec<SymbolEntry>,
    ) -> (Token, usize) {
        let ch = chars[pos];
        let next_ch = chars.get(pos + 1).copied();

        if ch == '/' && next_ch == Some('/') {
            let text: String = chars[pos..].iter().collect();
            return (Token::new(line, pos, text, CodeType::Comment), chars.len());
        }
        if ch == '/' && next_ch == Some('*') {
            return self.open_block_comment(line, chars, pos, state);
        }
        if ch == '"' || ch == '\'' {
            return self.lex_string(line, chars, pos, ch);
        }
        if ch.is_ascii_digit()
            || (ch == '.' && next_ch.is_some_and(|c| c.is_ascii_digit()))
        {
            return self.lex_number(line, chars, pos);
        }
        if is_word_start(ch) {
            return self.lex_word(line, chars, pos, state, symbols, definitions);
        }
        if ch.is_whitespace() {
            let mut end = pos + 1;
            while end < chars.len() && chars[end].is_whitespace() {
                end += 1;
            }
            let text: String = chars[pos..end].iter().collect();
            return (Token::new(line, pos, text, CodeType::Text), end);
        }
        if PUNCTUATION.contains(&ch) || ch == '/' {
            return (Token::new(line, pos, ch, CodeType::Text), pos + 1);
        }

        // Unrecognized character: one-character error token, then resume.
        // Consuming exactly one character guarantees forward progress.
        log_warning!(codes::lexical::UNRECOGNIZED_CHARACTER,
            "Unrecognized character",
            "line" => line,
            "column" => pos
        );
        (
            Token::error(
                line,
                pos,
                ch,
                self.diagnose("unrecognized character", line, pos),
                0,
            ),
            pos + 1,
        )
    }

    /// Line begins inside a block comment opened on an earlier line
    fn continue_block_comment(
        &self,
        line: usize,
        chars: &[char],
        pos: usize,
        state: &mut ScanState,
    ) -> (Token, usize) {
        match find_comment_close(chars, pos) {
            Some(end) => {
                state.line.in_block_comment = false;
                let text: String = chars[pos..end].iter().collect();
                (Token::new(line, pos, text, CodeType::Comment), end)
            }
            None => {
                let text: String = chars[pos..].iter().collect();
                (Token::new(line, pos, text, CodeType::Comment), chars.len())
            }
        }
    }

    fn open_block_comment(
        &self,
        line: usize,
        chars: &[char],
        pos: usize,
        state: &mut ScanState,
    ) -> (Token, usize) {
        match find_comment_close(chars, pos + 2) {
            Some(end) => {
                let text: String = chars[pos..end].iter().collect();
                (Token::new(line, pos, text, CodeType::Comment), end)
            }
            None => {
                state.line.in_block_comment = true;
                let text: String = chars[pos..].iter().collect();
                (Token::new(line, pos, text, CodeType::Comment), chars.len())
            }
        }
    }

    /// Honor an open quote carried in on the incoming state: consume up to
    /// the closing quote (or end of line, reported as unterminated)
    fn continue_string(
        &self,
        line: usize,
        chars: &[char],
        pos: usize,
        quote: char,
        state: &mut ScanState,
    ) -> (Token, usize) {
        let mut i = pos;
        while i < chars.len() && chars[i] != quote {
            i += 1;
        }
        if i < chars.len() {
            state.line.open_quote = None;
            let text: String = chars[pos..=i].iter().collect();
            (Token::new(line, pos, text, CodeType::String), i + 1)
        } else {
            state.line.open_quote = None;
            let text: String = chars[pos..].iter().collect();
            (
                Token::error(
                    line,
                    pos,
                    text,
                    self.diagnose("unterminated string literal", line, pos),
                    0,
                ),
                chars.len(),
            )
        }
    }

    fn lex_string(&self, line: usize, chars: &[char], start: usize, quote: char) -> (Token, usize) {
        let mut i = start + 1;
        let mut bad_escape: Option<usize> = None;
        let mut terminated = false;

        while i < chars.len() {
            let ch = chars[i];
            if ch == quote {
                i += 1;
                terminated = true;
                break;
            }
            if ch == '\\' {
                let (valid, consumed) = check_escape(chars, i);
                if !valid && bad_escape.is_none() {
                    bad_escape = Some(i - start);
                }
                i += consumed;
            } else {
                i += 1;
            }
        }

        let text: String = chars[start..i].iter().collect();
        if !terminated {
            log_warning!(codes::lexical::UNTERMINATED_STRING,
                "Unterminated string literal",
                "line" => line,
                "column" => start
            );
            return (
                Token::error(
                    line,
                    start,
                    text,
                    self.diagnose("unterminated string literal", line, start),
                    0,
                ),
                i,
            );
        }
        if let Some(offset) = bad_escape {
            log_warning!(codes::lexical::INVALID_ESCAPE,
                "Invalid escape sequence in string literal",
                "line" => line,
                "column" => start + offset
            );
            return (
                Token::error(
                    line,
                    start,
                    text,
                    self.diagnose("invalid escape sequence", line, start + offset),
                    offset,
                ),
                i,
            );
        }
        (Token::new(line, start, text, CodeType::String), i)
    }

    fn lex_number(&self, line: usize, chars: &[char], start: usize) -> (Token, usize) {
        let mut i = start;
        let mut bad: Option<usize> = None;

        if chars[i] == '0' && matches!(chars.get(i + 1), Some('x') | Some('X')) {
            i += 2;
            let digits_start = i;
            while i < chars.len() && chars[i].is_ascii_hexdigit() {
                i += 1;
            }
            if i == digits_start {
                bad = Some(i - start);
            }
        } else {
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if matches!(chars.get(i), Some('.')) {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            if matches!(chars.get(i), Some('e') | Some('E')) {
                let exponent_at = i;
                i += 1;
                if matches!(chars.get(i), Some('+') | Some('-')) {
                    i += 1;
                }
                let digits_start = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                if i == digits_start {
                    bad = Some(exponent_at - start);
                }
            }
        }

        // A literal running straight into word characters is one malformed
        // token, not a number followed by an identifier
        if i < chars.len() && is_word_continue(chars[i]) {
            bad.get_or_insert(i - start);
            while i < chars.len() && (is_word_continue(chars[i]) || chars[i] == '.') {
                i += 1;
            }
        }

        let text: String = chars[start..i].iter().collect();
        match bad {
            Some(offset) => {
                log_warning!(codes::lexical::MALFORMED_NUMBER,
                    "Malformed numeric literal",
                    "line" => line,
                    "column" => start
                );
                (
                    Token::error(
                        line,
                        start,
                        text,
                        self.diagnose("malformed numeric literal", line, start + offset),
                        offset,
                    ),
                    i,
                )
            }
            None => (Token::new(line, start, text, CodeType::Number), i),
        }
    }

    fn lex_word(
        &self,
        line: usize,
        chars: &[char],
        start: usize,
        state: &mut ScanState,
        symbols: &SymbolTable,
        definitions: &mut Vec<SymbolEntry>,
    ) -> (Token, usize) {
        let mut end = start + 1;
        while end < chars.len() && is_word_continue(chars[end]) {
            end += 1;
        }
        let word: String = chars[start..end].iter().collect();

        let (kind, declared) = grammar::classify_word(&word, &state.context, symbols);
        if let Some(symbol_kind) = declared {
            definitions.push(SymbolEntry::new(
                word.clone(),
                line,
                state.context.depth(),
                symbol_kind,
            ));
        }
        (Token::new(line, start, word, kind), end)
    }
}

fn is_word_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

fn is_word_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Index just past a `*/` at or after `from`, if the comment closes on
/// this line
fn find_comment_close(chars: &[char], from: usize) -> Option<usize> {
    let mut i = from;
    while i + 1 < chars.len() {
        if chars[i] == '*' && chars[i + 1] == '/' {
            return Some(i + 2);
        }
        i += 1;
    }
    None
}

/// One `\\`-escape starting at `at`. Returns validity plus the number of
/// characters the escape occupies.
fn check_escape(chars: &[char], at: usize) -> (bool, usize) {
    let Some(&next) = chars.get(at + 1) else {
        // Backslash at end of line escapes nothing
        return (false, 1);
    };
    match next {
        'n' | 'r' | 't' | '\\' | '\'' | '"' | 'a' | 'b' | 'f' | 'v' | '?' => (true, 2),
        'x' | 'X' => {
            let mut len = 2;
            while len < 4 && chars.get(at + len).is_some_and(char::is_ascii_hexdigit) {
                len += 1;
            }
            (len > 2, len)
        }
        'u' => {
            let mut len = 2;
            while len < 6 && chars.get(at + len).is_some_and(char::is_ascii_hexdigit) {
                len += 1;
            }
            (len == 6, len)
        }
        '0'..='7' => {
            let mut len = 2;
            while len < 4 && chars.get(at + len).is_some_and(|c| ('0'..='7').contains(c)) {
                len += 1;
            }
            (true, len)
        }
        _ => (false, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::state::LineState;
    use assert_matches::assert_matches;

    fn scan_line(text: &str) -> LineScan {
        let scanner = LineScanner::default();
        scanner.scan(0, text, &ScanState::initial(), &SymbolTable::new())
    }

    fn scan_with(text: &str, incoming: &ScanState) -> LineScan {
        let scanner = LineScanner::default();
        scanner.scan(0, text, incoming, &SymbolTable::new())
    }

    fn assert_gap_free(text: &str, tokens: &[Token]) {
        let mut expected = 0;
        for token in tokens {
            assert_eq!(token.position, expected, "gap before {token}");
            expected = token.end();
        }
        assert_eq!(expected, text.chars().count(), "line not fully covered");
    }

    #[test]
    fn test_gap_free_coverage() {
        let lines = [
            "message SearchRequest {",
            "  required string query = 1; // trailing",
            "  \u{3053}\u{3093} = \"mixed \u{00e9}\"; /* multi-byte */",
            "   ",
            "",
            "@@@ bad input !!! \"unterminated",
        ];
        for line in lines {
            let scan = scan_line(line);
            assert_gap_free(line, &scan.tokens);
        }
    }

    #[test]
    fn test_idempotent_rescan() {
        let scanner = LineScanner::default();
        let symbols = SymbolTable::new();
        let incoming = ScanState::initial();
        let first = scanner.scan(2, "optional int32 page_number = 2;", &incoming, &symbols);
        let second = scanner.scan(2, "optional int32 page_number = 2;", &incoming, &symbols);
        assert_eq!(first.tokens, second.tokens);
        assert_eq!(first.outgoing, second.outgoing);
    }

    #[test]
    fn test_line_comment_runs_to_end() {
        let scan = scan_line("syntax = \"proto2\"; // the whole rest /* not a block */");
        let comment = scan.tokens.last().unwrap();
        assert_eq!(comment.kind, CodeType::Comment);
        assert!(comment.text.starts_with("//"));
        assert!(scan.outgoing.line.is_clean());
    }

    #[test]
    fn test_block_comment_same_line() {
        let scan = scan_line("message /* inline */ Foo");
        let kinds: Vec<_> = scan
            .tokens
            .iter()
            .filter(|t| t.is_significant() || t.is_comment())
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![CodeType::TopLevelCmd, CodeType::Comment, CodeType::SymDef]
        );
        assert!(!scan.outgoing.line.in_block_comment);
    }

    #[test]
    fn test_block_comment_opens_state() {
        let scan = scan_line("message Foo { /* starts here");
        assert!(scan.outgoing.line.in_block_comment);

        let second = scan_with("still inside */ int32 a", &scan.outgoing);
        assert!(!second.outgoing.line.in_block_comment);
        assert_eq!(second.tokens[0].kind, CodeType::Comment);
        assert_eq!(second.tokens[0].text, "still inside */");
    }

    #[test]
    fn test_block_comment_spans_whole_middle_line() {
        let first = scan_line("/* opens");
        let middle = scan_with("entirely inside the comment", &first.outgoing);
        assert_eq!(middle.tokens.len(), 1);
        assert_eq!(middle.tokens[0].kind, CodeType::Comment);
        assert!(middle.outgoing.line.in_block_comment);
    }

    #[test]
    fn test_comment_does_not_disturb_statement_context() {
        let first = scan_line("message /* note");
        let second = scan_with("more note */ Foo {", &first.outgoing);
        let symdef = second
            .tokens
            .iter()
            .find(|t| t.kind == CodeType::SymDef)
            .unwrap();
        assert_eq!(symdef.text, "Foo");
    }

    #[test]
    fn test_string_literal() {
        let scan = scan_line("import \"other.proto\";");
        let string = scan
            .tokens
            .iter()
            .find(|t| t.kind == CodeType::String)
            .unwrap();
        assert_eq!(string.text, "\"other.proto\"");
    }

    #[test]
    fn test_unterminated_string_is_error_and_state_not_carried() {
        let scan = scan_line("option note = \"never closed");
        let error = scan.tokens.last().unwrap();
        assert!(error.is_error());
        assert_matches!(
            error.diagnostic(),
            Some(d) if d.message.contains("unterminated") && d.offset == 0
        );
        // Single-line string policy: the open quote must not leak forward
        assert_eq!(scan.outgoing.line.open_quote, None);
    }

    #[test]
    fn test_incoming_open_quote_is_honored() {
        let incoming = ScanState {
            line: LineState {
                in_block_comment: false,
                open_quote: Some('"'),
            },
            context: Default::default(),
        };
        let scan = scan_with("tail of string\" rest", &incoming);
        assert_eq!(scan.tokens[0].kind, CodeType::String);
        assert_eq!(scan.tokens[0].text, "tail of string\"");
        assert_eq!(scan.outgoing.line.open_quote, None);
    }

    #[test]
    fn test_invalid_escape_reports_offset() {
        let scan = scan_line("option x = \"ab\\q\";");
        let error = scan.tokens.iter().find(|t| t.is_error()).unwrap();
        assert_matches!(
            error.diagnostic(),
            Some(d) if d.message.contains("escape") && d.offset == 3
        );
    }

    #[test]
    fn test_valid_escapes_accepted() {
        for literal in ["\"a\\n\\t\\\\\"", "\"\\x41\"", "\"\\u0041\"", "\"\\012\""] {
            let text = format!("option x = {literal};");
            let scan = scan_line(&text);
            assert!(
                scan.tokens.iter().all(|t| !t.is_error()),
                "rejected {literal}"
            );
        }
    }

    #[test]
    fn test_number_forms() {
        for (source, expected) in [
            ("1", "1"),
            ("42", "42"),
            ("0x1F", "0x1F"),
            ("3.14", "3.14"),
            ("1e10", "1e10"),
            ("2.5e-3", "2.5e-3"),
            (".5", ".5"),
        ] {
            let text = format!("option x = {source};");
            let scan = scan_line(&text);
            let number = scan
                .tokens
                .iter()
                .find(|t| t.kind == CodeType::Number)
                .unwrap_or_else(|| panic!("no number in {text}"));
            assert_eq!(number.text, expected);
        }
    }

    #[test]
    fn test_malformed_number_is_one_error_token() {
        let scan = scan_line("option x = 12abc;");
        let error = scan.tokens.iter().find(|t| t.is_error()).unwrap();
        assert_eq!(error.text, "12abc");
        assert_matches!(error.diagnostic(), Some(d) if d.offset == 2);
    }

    #[test]
    fn test_hex_without_digits_is_error() {
        let scan = scan_line("option x = 0x;");
        let error = scan.tokens.iter().find(|t| t.is_error()).unwrap();
        assert_eq!(error.text, "0x");
    }

    #[test]
    fn test_unrecognized_character_recovers() {
        let scan = scan_line("message @ Foo");
        assert_gap_free("message @ Foo", &scan.tokens);
        let error = scan.tokens.iter().find(|t| t.is_error()).unwrap();
        assert_eq!(error.text, "@");
        assert_eq!(error.length, 1);
        // Scanning resumed: the identifier after the bad character is intact
        assert!(scan.tokens.iter().any(|t| t.text == "Foo"));
    }

    #[test]
    fn test_definition_and_reference_classification() {
        let scanner = LineScanner::default();
        let symbols = SymbolTable::new();

        let first = scanner.scan(0, "message Foo {", &ScanState::initial(), &symbols);
        let symdef = first.tokens.iter().find(|t| t.text == "Foo").unwrap();
        assert_eq!(symdef.kind, CodeType::SymDef);
        assert_eq!(first.definitions.len(), 1);
        assert_eq!(first.definitions[0].name, "Foo");

        let second = scanner.scan(1, "  Foo bar = 1;", &first.outgoing, &symbols);
        let symref = second.tokens.iter().find(|t| t.text == "Foo").unwrap();
        assert_eq!(symref.kind, CodeType::SymRef);
        let field = second.tokens.iter().find(|t| t.text == "bar").unwrap();
        assert_eq!(field.kind, CodeType::Identifier);
    }

    #[test]
    fn test_field_rule_and_keyword_kinds() {
        let scanner = LineScanner::default();
        let symbols = SymbolTable::new();
        let first = scanner.scan(0, "message M {", &ScanState::initial(), &symbols);
        let scan = scanner.scan(1, "required string name = 1;", &first.outgoing, &symbols);

        let kinds: Vec<_> = scan
            .tokens
            .iter()
            .filter(|t| t.is_significant())
            .map(|t| (t.text.as_str(), t.kind))
            .collect();
        assert_eq!(kinds[0], ("required", CodeType::FieldRule));
        assert_eq!(kinds[1], ("string", CodeType::Keyword));
        assert_eq!(kinds[2], ("name", CodeType::Identifier));
        assert_eq!(kinds[3], ("=", CodeType::Text));
        assert_eq!(kinds[4], ("1", CodeType::Number));
        assert_eq!(kinds[5], (";", CodeType::Text));
    }

    #[test]
    fn test_whitespace_tokens_suppressed_by_preference() {
        let preferences = ScannerPreferences {
            emit_whitespace_tokens: false,
            ..Default::default()
        };
        let scanner = LineScanner::new(preferences);
        let scan = scanner.scan(0, "  message  Foo", &ScanState::initial(), &SymbolTable::new());
        assert!(scan.tokens.iter().all(|t| !t.is_whitespace()));
        assert_eq!(scan.tokens.len(), 2);
    }

    #[test]
    fn test_position_appended_to_messages_when_enabled() {
        let preferences = ScannerPreferences {
            include_position_in_messages: true,
            ..Default::default()
        };
        let scanner = LineScanner::new(preferences);
        let scan = scanner.scan(3, "option x = \"open", &ScanState::initial(), &SymbolTable::new());
        let error = scan.tokens.iter().find(|t| t.is_error()).unwrap();
        let message = &error.diagnostic().unwrap().message;
        assert!(message.contains("line 3"), "{message}");
    }

    #[test]
    fn test_metrics_accumulate() {
        let mut metrics = ScanMetrics::default();
        metrics.record_line(&scan_line("message Foo { // note"));
        metrics.record_line(&scan_line("@"));
        assert_eq!(metrics.lines_scanned, 2);
        assert_eq!(metrics.error_tokens, 1);
        assert_eq!(metrics.comment_tokens, 1);
    }
}
