/// Statement parsing.
///
/// Covers `var` declarations, `if`/`else`, `{ ... }` blocks and expression statements.
impl<'a> Parser<'a> {
    fn statement(&mut self) -> Result<Spanned<Statement>, CompileError> {
        if self.check_keyword(KeywordId::Var) {
            self.var_decl()
        } else if self.check_keyword(KeywordId::If) {
            self.if_stmt()
        } else if self.check_punct(PunctuationId::LBrace) {
            self.block()
        } else if self.check_punct(PunctuationId::Semicolon) {
            let span = self.advance().span;
            Ok(Spanned::new(Statement::Block(Vec::new()), span))
        } else if self.check_punct(PunctuationId::RBrace) || self.is_at_end() {
            Err(self.error_here("Expected statement"))
        } else {
            self.expr_stmt()
        }
    }

    /// `var name (= init)? ;`
    fn var_decl(&mut self) -> Result<Spanned<Statement>, CompileError> {
        let start = self.advance().span;
        let name = self.expect_ident("Expected variable name after 'var'")?;
        let init = if self.match_punct(PunctuationId::Eq) {
            Some(self.expression()?)
        } else {
            None
        };
        let end = init.as_ref().map_or(name.span, |e| e.span);
        self.expect_terminator()?;
        Ok(Spanned::new(Statement::Var(VarDecl { name, init }), start.merge(end)))
    }

    /// `if ( test ) stmt (else stmt)?`
    fn if_stmt(&mut self) -> Result<Spanned<Statement>, CompileError> {
        let start = self.advance().span;
        self.expect_punct(PunctuationId::LParen, "Expected '(' after 'if'")?;
        let test = self.expression()?;
        self.expect_punct(PunctuationId::RParen, "Expected ')' after condition")?;
        let consequent = Box::new(self.statement()?);
        let mut end = consequent.span;
        let alternate = if self.match_keyword(KeywordId::Else) {
            let alt = self.statement()?;
            end = alt.span;
            Some(Box::new(alt))
        } else {
            None
        };
        Ok(Spanned::new(
            Statement::If(IfStmt {
                test,
                consequent,
                alternate,
            }),
            start.merge(end),
        ))
    }

    /// `{ stmt* }` with statement-level error recovery inside the block.
    fn block(&mut self) -> Result<Spanned<Statement>, CompileError> {
        let start = self.advance().span;
        let mut statements = Vec::new();

        self.skip_empty_statements();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            match self.statement() {
                Ok(stmt) => statements.push(stmt),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize();
                }
            }
            self.skip_empty_statements();
        }

        let end = self.expect_punct(PunctuationId::RBrace, "Expected '}' to close block")?;
        Ok(Spanned::new(Statement::Block(statements), start.merge(end)))
    }

    fn expr_stmt(&mut self) -> Result<Spanned<Statement>, CompileError> {
        let expr = self.expression()?;
        let span = expr.span;
        self.expect_terminator()?;
        Ok(Spanned::new(Statement::Expr(expr), span))
    }
}
