/// Expression parsing.
///
/// The trace subset has no binary operators: every computation is a call. Precedence therefore only separates
/// unary minus from postfix calls and member access (`-f(x)` negates the call result).
impl<'a> Parser<'a> {
    fn expression(&mut self) -> Result<Spanned<Expr>, CompileError> {
        self.unary()
    }

    fn unary(&mut self) -> Result<Spanned<Expr>, CompileError> {
        if self.check_punct(PunctuationId::Minus) {
            let start = self.advance().span;
            let operand = self.unary()?;
            let span = start.merge(operand.span);
            // Fold `-<number>` into the literal so `-2.5` reads as a constant downstream.
            let node = match operand.node {
                Expr::Literal(Literal::Number(n)) => Expr::Literal(Literal::Number(-n)),
                other => Expr::Neg(Box::new(Spanned::new(other, operand.span))),
            };
            return Ok(Spanned::new(node, span));
        }
        self.postfix()
    }

    fn postfix(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let mut expr = self.primary()?;
        loop {
            if self.match_punct(PunctuationId::LParen) {
                let args = self.comma_list(PunctuationId::RParen, "Expected ')' after arguments")?;
                let span = expr.span.merge(self.previous_span());
                expr = Spanned::new(
                    Expr::Call(CallExpr {
                        callee: Box::new(expr),
                        args,
                    }),
                    span,
                );
            } else if self.match_punct(PunctuationId::Dot) {
                let property = self.expect_ident("Expected property name after '.'")?;
                let span = expr.span.merge(property.span);
                expr = Spanned::new(
                    Expr::Member(MemberExpr {
                        object: Box::new(expr),
                        property: property.node,
                    }),
                    span,
                );
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn primary(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let token = self.peek().clone();
        let node = match token.kind {
            TokenKind::Ident(name) => Expr::Ident(name),
            TokenKind::Number(n) => Expr::Literal(Literal::Number(n)),
            TokenKind::String(s) => Expr::Literal(Literal::Str(s)),
            TokenKind::Keyword(KeywordId::True) => Expr::Literal(Literal::Bool(true)),
            TokenKind::Keyword(KeywordId::False) => Expr::Literal(Literal::Bool(false)),
            TokenKind::Keyword(KeywordId::Null) => Expr::Literal(Literal::Null),
            TokenKind::Punctuation(PunctuationId::LBracket) => {
                self.advance();
                let items = self.comma_list(PunctuationId::RBracket, "Expected ']' after array elements")?;
                return Ok(Spanned::new(Expr::Array(items), token.span.merge(self.previous_span())));
            }
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let inner = self.expression()?;
                let end = self.expect_punct(PunctuationId::RParen, "Expected ')' after expression")?;
                return Ok(Spanned::new(inner.node, token.span.merge(end)));
            }
            _ => return Err(self.error_here("Expected expression")),
        };
        self.advance();
        Ok(Spanned::new(node, token.span))
    }

    /// Parse `expr ("," expr)* ","?` up to and including the `close` delimiter.
    fn comma_list(&mut self, close: PunctuationId, msg: &str) -> Result<Vec<Spanned<Expr>>, CompileError> {
        let mut items = Vec::new();
        while !self.check_punct(close) {
            items.push(self.expression()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(close, msg)?;
        Ok(items)
    }
}
