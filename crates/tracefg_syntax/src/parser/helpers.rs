/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords and punctuation
/// - Statement terminators and error recovery (`synchronize`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.pos.min(last)]
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[self.pos.saturating_sub(1)]
    }

    /// Span of the most recently consumed token.
    fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1) {
            Some(i) => self.tokens[i].span,
            None => self.current_span(),
        }
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> Result<Span, CompileError> {
        if self.check_punct(id) {
            Ok(self.advance().span)
        } else {
            Err(self.error_here(msg))
        }
    }

    fn expect_ident(&mut self, msg: &str) -> Result<Spanned<Ident>, CompileError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                let span = self.advance().span;
                Ok(Spanned::new(name, span))
            }
            _ => Err(self.error_here(msg)),
        }
    }

    /// Build a syntax error at the current token: `"{msg}, found {token}"`.
    fn error_here(&self, msg: &str) -> CompileError {
        CompileError::syntax(
            format!("{}, found {}", msg, self.peek().kind.describe()),
            self.current_span(),
        )
    }

    /// Consume the `;` ending a statement.
    ///
    /// The terminator may be omitted before `}` and at end of input (the tracer's trailing query line is often
    /// written without one).
    fn expect_terminator(&mut self) -> Result<(), CompileError> {
        if self.match_punct(PunctuationId::Semicolon) {
            return Ok(());
        }
        if self.is_at_end() || self.check_punct(PunctuationId::RBrace) {
            return Ok(());
        }
        Err(self.error_here("Expected ';' after statement").with_hint("Terminate each statement with ';'"))
    }

    fn skip_empty_statements(&mut self) {
        while self.match_punct(PunctuationId::Semicolon) {}
    }

    /// Skip tokens until just after a `;`, or until a `}` / `var` / `if` that can resume parsing.
    fn synchronize(&mut self) {
        self.advance();
        while !self.is_at_end() {
            if self.tokens[self.pos - 1].kind.is_punctuation(PunctuationId::Semicolon) {
                return;
            }
            if self.check_punct(PunctuationId::RBrace)
                || self.check_keyword(KeywordId::Var)
                || self.check_keyword(KeywordId::If)
            {
                return;
            }
            self.advance();
        }
    }
}
