//! Lexer for trace programs
//!
//! Handles tokenization of the tracer's JavaScript subset:
//! - Keywords (`var`, `if`, `else`, `true`, `false`, `null`)
//! - Identifiers, numbers and single/double quoted strings
//! - Punctuation (`( ) [ ] { } , ; . = -`)
//! - `//` line comments and `/* */` block comments

pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::CompileError;
use tracefg_core::lang::punctuation::{self, PunctuationId};

/// Lexer for trace source code.
///
/// Whitespace (including newlines) is insignificant; statements are terminated by `;` or `}`.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    /// Open `(`, `[` and `{` not yet closed
    bracket_depth: usize,
    tokens: Vec<Token>,
    errors: Vec<CompileError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            bracket_depth: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns a vector of tokens on success, or a vector of errors on failure.
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<CompileError>> {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(self.current_pos, self.current_pos),
        ));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            ' ' | '\t' | '\r' | '\n' => {}

            '/' if self.match_char('/') => self.skip_line_comment(),
            '/' if self.match_char('*') => self.skip_block_comment(start),

            '\'' | '"' => self.scan_string(start, c),

            '0'..='9' => self.scan_number(start),
            '.' if self.peek().is_some_and(|n| n.is_ascii_digit()) => self.scan_number(start),

            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => match punctuation::from_char(c) {
                Some(id) => self.scan_punctuation(id, start),
                None => self.errors.push(CompileError::new(
                    format!("Unexpected character '{}'", c),
                    Span::new(start, self.current_pos),
                )),
            },
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    fn scan_punctuation(&mut self, id: PunctuationId, start: usize) {
        match id {
            PunctuationId::LParen | PunctuationId::LBracket | PunctuationId::LBrace => {
                self.bracket_depth += 1;
            }
            PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace => {
                if self.bracket_depth == 0 {
                    self.errors.push(CompileError::new(
                        "Unmatched closing bracket".to_string(),
                        Span::new(start, self.current_pos),
                    ));
                } else {
                    self.bracket_depth -= 1;
                }
            }
            _ => {}
        }
        self.add_token(TokenKind::Punctuation(id), start);
    }

    // ========================================================================
    // Comments
    // ========================================================================

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self, start: usize) {
        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return;
                }
                Some(_) => {}
                None => {
                    self.errors.push(CompileError::new(
                        "Unterminated block comment".to_string(),
                        Span::new(start, self.current_pos),
                    ));
                    return;
                }
            }
        }
    }

    // ========================================================================
    // Literals
    // ========================================================================

    fn scan_string(&mut self, start: usize, quote: char) {
        let mut value = String::new();
        loop {
            match self.advance() {
                Some(c) if c == quote => break,
                Some('\\') => match self.advance() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('r') => value.push('\r'),
                    Some('0') => value.push('\0'),
                    Some(other) => value.push(other),
                    None => {
                        self.unterminated_string(start);
                        return;
                    }
                },
                Some('\n') | None => {
                    self.unterminated_string(start);
                    return;
                }
                Some(c) => value.push(c),
            }
        }
        self.add_token(TokenKind::String(value), start);
    }

    fn unterminated_string(&mut self, start: usize) {
        self.errors.push(
            CompileError::new(
                "Unterminated string literal".to_string(),
                Span::new(start, self.current_pos),
            )
            .with_hint("String literals cannot span lines"),
        );
    }

    fn scan_number(&mut self, start: usize) {
        self.consume_digits();
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.consume_digits();
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            let exponent_follows = match self.peek_next() {
                Some(c) if c.is_ascii_digit() => true,
                Some('+' | '-') => self.source[self.current_pos..]
                    .chars()
                    .nth(2)
                    .is_some_and(|c| c.is_ascii_digit()),
                _ => false,
            };
            if exponent_follows {
                self.advance();
                if matches!(self.peek(), Some('+' | '-')) {
                    self.advance();
                }
                self.consume_digits();
            }
        }

        let text = &self.source[start..self.current_pos];
        match text.parse::<f64>() {
            Ok(value) => self.add_token(TokenKind::Number(value), start),
            Err(_) => self.errors.push(CompileError::new(
                format!("Invalid number literal '{}'", text),
                Span::new(start, self.current_pos),
            )),
        }
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start);
        } else {
            self.add_token(TokenKind::Ident(spelling.to_string()), start);
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tracefg_core::lang::keywords::KeywordId;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_punctuation_registry_parity() {
        for p in punctuation::PUNCTUATION {
            let source = match p.id {
                PunctuationId::LParen | PunctuationId::RParen => "()",
                PunctuationId::LBracket | PunctuationId::RBracket => "[]",
                PunctuationId::LBrace | PunctuationId::RBrace => "{}",
                _ => p.canonical,
            };
            let tokens = lex(source).unwrap_or_else(|errs| panic!("lex({:?}) failed: {:?}", source, errs));
            assert!(
                tokens.iter().any(|t| t.kind.is_punctuation(p.id)),
                "{:?} not produced by {:?}",
                p.id,
                source
            );
        }
    }

    #[test]
    fn test_tracer_declaration() {
        let tokens = kinds("var ab0 = random('wrapped_flip',[0.5,JSON.parse('null')]);");
        assert_eq!(tokens[0], TokenKind::Keyword(KeywordId::Var));
        assert_eq!(tokens[1], TokenKind::Ident("ab0".into()));
        assert_eq!(tokens[2], TokenKind::Punctuation(PunctuationId::Eq));
        assert_eq!(tokens[3], TokenKind::Ident("random".into()));
        assert_eq!(tokens[5], TokenKind::String("wrapped_flip".into()));
        assert_eq!(tokens[8], TokenKind::Number(0.5));
        assert_eq!(tokens.last(), Some(&TokenKind::Eof));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(kinds("12")[0], TokenKind::Number(12.0));
        assert_eq!(kinds("0.25")[0], TokenKind::Number(0.25));
        assert_eq!(kinds(".5")[0], TokenKind::Number(0.5));
        assert_eq!(kinds("1e3")[0], TokenKind::Number(1000.0));
        assert_eq!(kinds("2.5E-1")[0], TokenKind::Number(0.25));
    }

    #[test]
    fn test_member_access_after_number_is_not_a_fraction() {
        let tokens = kinds("x.y");
        assert_eq!(tokens[1], TokenKind::Punctuation(PunctuationId::Dot));
    }

    #[test]
    fn test_comments_are_skipped() {
        let tokens = kinds("// header\nvar /* inline */ x = 1;");
        assert_eq!(tokens[0], TokenKind::Keyword(KeywordId::Var));
        assert_eq!(tokens[1], TokenKind::Ident("x".into()));
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(kinds(r#""a\"b""#)[0], TokenKind::String("a\"b".into()));
        assert_eq!(kinds(r"'it\'s'")[0], TokenKind::String("it's".into()));
    }

    #[test]
    fn test_unterminated_string_is_error() {
        let errs = lex("'abc").unwrap_err();
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message.contains("Unterminated string"));
    }

    #[test]
    fn test_unmatched_closing_bracket_is_error() {
        let errs = lex("x)").unwrap_err();
        assert!(errs[0].message.contains("Unmatched closing bracket"));
    }

    #[test]
    fn test_unexpected_character() {
        let errs = lex("var x = 1 + 2;").unwrap_err();
        assert!(errs[0].message.contains("Unexpected character '+'"));
        assert_eq!(errs[0].span, Span::new(10, 11));
    }

    #[test]
    fn test_dispatcher_token_stream() {
        let described: Vec<String> = kinds("var ab0 = random('wrapped_flip',[0.5,null]);")
            .iter()
            .map(TokenKind::describe)
            .collect();
        insta::assert_snapshot!(described.join("\n"), @r"
        keyword 'var'
        identifier 'ab0'
        '='
        identifier 'random'
        '('
        string literal
        ','
        '['
        number 0.5
        ','
        keyword 'null'
        ']'
        ')'
        ';'
        end of input
        ");
    }

    #[test]
    fn test_keyword_alias_let() {
        assert_eq!(kinds("let")[0], TokenKind::Keyword(KeywordId::Var));
    }
}
