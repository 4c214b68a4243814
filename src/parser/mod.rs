//! Recursive-descent parser with single-token lookahead over an indexed
//! token vector.

mod loader;

pub use loader::{load_program, parse_repl_line};

use std::rc::Rc;

use crate::ast::{Definition, ExprRef, Expression, Primitive, Type};
use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};
use crate::loc::Loc;

/// A top-level node as produced directly by the grammar, before `use`
/// directives have been resolved into spliced sub-programs (that resolution
/// needs file IO and a loaded-files set, so it lives in `loader`, not here).
#[derive(Debug, Clone)]
pub enum RawNode {
    Expression(Expression),
    Def(Definition),
    Use { path: String, loc: Loc },
}

pub struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> &Token {
        let tok = &self.tokens[self.pos];
        if !matches!(tok.kind, TokenKind::Eof) {
            self.pos += 1;
        }
        tok
    }

    fn expect_ident(&mut self) -> Result<(String, Loc), ParseError> {
        let tok = self.advance().clone();
        match tok.kind {
            TokenKind::Ident(name) => Ok((name, tok.loc)),
            other => Err(ParseError::expected("identifier", &other.to_string(), tok.loc)),
        }
    }

    fn expect_kind(&mut self, expected: &TokenKind) -> Result<Loc, ParseError> {
        let tok = self.advance().clone();
        if std::mem::discriminant(&tok.kind) == std::mem::discriminant(expected) {
            Ok(tok.loc)
        } else {
            Err(ParseError::expected(
                &expected.to_string(),
                &tok.kind.to_string(),
                tok.loc,
            ))
        }
    }

    /// `program := (node)*`, stopping at `Eof`. `use` directives are left
    /// unresolved as `RawNode::Use` for the loader to splice.
    pub fn parse_program(&mut self) -> Result<Vec<RawNode>, ParseError> {
        let mut nodes = Vec::new();
        while !matches!(self.current().kind, TokenKind::Eof) {
            nodes.push(self.parse_node()?);
        }
        Ok(nodes)
    }

    fn parse_node(&mut self) -> Result<RawNode, ParseError> {
        match &self.current().kind {
            TokenKind::Ident(name) if name == "use" => self.parse_use(),
            TokenKind::Ident(_) => self.parse_definition(),
            TokenKind::Str(_) | TokenKind::Float(_) | TokenKind::Backslash | TokenKind::LParen => {
                Ok(RawNode::Expression(self.parse_expression()?))
            }
            other => {
                let loc = self.current().loc.clone();
                Err(ParseError {
                    message: format!("syntax error: unexpected token {other}"),
                    loc,
                })
            }
        }
    }

    fn parse_use(&mut self) -> Result<RawNode, ParseError> {
        let loc = self.advance().loc.clone();
        let tok = self.advance().clone();
        match tok.kind {
            TokenKind::Str(path) => Ok(RawNode::Use { path, loc }),
            other => Err(ParseError::expected("string", &other.to_string(), tok.loc)),
        }
    }

    /// `def := IDENT ':' type '=' expression`.
    fn parse_definition(&mut self) -> Result<RawNode, ParseError> {
        let (name, loc) = self.expect_ident()?;
        self.expect_kind(&TokenKind::Colon)?;
        let declared_type = self.parse_type()?;
        self.expect_kind(&TokenKind::Equal)?;
        let body = Rc::new(self.parse_expression()?);
        Ok(RawNode::Def(Definition {
            name,
            declared_type,
            body,
            loc,
        }))
    }

    /// `type := primitive ('->' primitive)*`.
    fn parse_type(&mut self) -> Result<Type, ParseError> {
        let mut primitives = vec![self.parse_primitive()?];
        while matches!(self.current().kind, TokenKind::Arrow) {
            self.advance();
            primitives.push(self.parse_primitive()?);
        }
        Ok(Type::from_primitives(primitives))
    }

    fn parse_primitive(&mut self) -> Result<Primitive, ParseError> {
        let (name, _) = self.expect_ident()?;
        Ok(Primitive::from_name(&name))
    }

    /// `expression := IDENT | STRING | FLOAT | lambda | apply`.
    fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let tok = self.current().clone();
        match tok.kind {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Expression::Ident { name, loc: tok.loc })
            }
            TokenKind::Str(raw) => {
                self.advance();
                Ok(Expression::StrLit {
                    value: crate::builtins::escape::unescape(&raw),
                    loc: tok.loc,
                })
            }
            TokenKind::Float(value) => {
                self.advance();
                Ok(Expression::FloatLit { value, loc: tok.loc })
            }
            TokenKind::Backslash => self.parse_lambda(),
            TokenKind::LParen => self.parse_apply(),
            other => Err(ParseError {
                message: format!("syntax error: unexpected token {other}"),
                loc: tok.loc,
            }),
        }
    }

    /// `lambda := '\' IDENT ':' type '.' expression`.
    fn parse_lambda(&mut self) -> Result<Expression, ParseError> {
        let loc = self.expect_kind(&TokenKind::Backslash)?;
        let (param, _) = self.expect_ident()?;
        self.expect_kind(&TokenKind::Colon)?;
        let param_type = self.parse_type()?;
        self.expect_kind(&TokenKind::Dot)?;
        let body = Rc::new(self.parse_expression()?);
        Ok(Expression::Lambda {
            param,
            param_type,
            body,
            loc,
        })
    }

    /// `apply := '(' IDENT expression* ')'`.
    fn parse_apply(&mut self) -> Result<Expression, ParseError> {
        let loc = self.expect_kind(&TokenKind::LParen)?;
        let (callee, callee_loc) = self.expect_ident()?;
        let mut args: Vec<ExprRef> = Vec::new();
        while !matches!(self.current().kind, TokenKind::RParen) {
            args.push(Rc::new(self.parse_expression()?));
        }
        self.expect_kind(&TokenKind::RParen)?;
        Ok(Expression::Apply {
            callee,
            callee_loc,
            args,
            loc,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn raw_nodes(src: &str) -> Vec<RawNode> {
        let tokens = Lexer::from_repl(src).lex().unwrap();
        Parser::new(&tokens).parse_program().unwrap()
    }

    #[test]
    fn parses_a_definition_with_arrow_type() {
        let nodes = raw_nodes("sq : Float -> Float = \\x : Float . (mul x x)");
        assert_eq!(nodes.len(), 1);
        match &nodes[0] {
            RawNode::Def(def) => {
                assert_eq!(def.name, "sq");
                assert_eq!(
                    def.declared_type,
                    Type::Compound {
                        left: Primitive::Float,
                        right: Box::new(Type::Primitive(Primitive::Float)),
                    }
                );
            }
            other => panic!("expected a def, got {other:?}"),
        }
    }

    #[test]
    fn parses_nested_application() {
        let nodes = raw_nodes("(add (mul 2 3) 1)");
        assert_eq!(nodes.len(), 1);
        match &nodes[0] {
            RawNode::Expression(Expression::Apply { callee, args, .. }) => {
                assert_eq!(callee, "add");
                assert_eq!(args.len(), 2);
            }
            other => panic!("expected an application, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_identifier_callee() {
        let tokens = Lexer::from_repl("(1 2)").lex().unwrap();
        assert!(Parser::new(&tokens).parse_program().is_err());
    }

    #[test]
    fn parses_use_directive_as_raw_node() {
        let nodes = raw_nodes(r#"use "lib.tl""#);
        assert!(matches!(nodes[0], RawNode::Use { .. }));
    }
}
