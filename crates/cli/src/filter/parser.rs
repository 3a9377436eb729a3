// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for tag expressions.
//!
//! Recursive descent over a flat token list:
//!
//! ```text
//! or   := and ( "||" and )*
//! and  := not ( "&&" not )*
//! not  := "!" not | atom
//! atom := tag | "(" or ")"
//! ```

use crate::error::{Error, Result};

use super::expr::{strip_hash, TagExpr};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Tag(String),
    And,
    Or,
    Not,
    Open,
    Close,
}

/// Parse a tag expression.
///
/// # Examples
///
/// ```ignore
/// let expr = parse_tag_expr("work && (meeting || #call)")?;
/// ```
///
/// # Errors
///
/// Returns an error naming the offending position if the expression is
/// empty, unbalanced, or has a dangling operator.
pub fn parse_tag_expr(input: &str) -> Result<TagExpr> {
    if input.trim().is_empty() {
        return Err(Error::TagExprEmpty);
    }

    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_or()?;

    match parser.tokens.get(parser.pos) {
        None => Ok(expr),
        Some((position, token)) => Err(Error::TagExprSyntax {
            position: *position,
            reason: format!("unexpected {}", describe(token)),
        }),
    }
}

/// Split input into tokens, remembering the byte offset of each.
fn tokenize(input: &str) -> Result<Vec<(usize, Token)>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        match c {
            c if c.is_whitespace() => {}
            '(' => tokens.push((idx, Token::Open)),
            ')' => tokens.push((idx, Token::Close)),
            '!' => tokens.push((idx, Token::Not)),
            '&' | '|' => {
                if chars.next_if(|&(_, next)| next == c).is_none() {
                    return Err(Error::TagExprSyntax {
                        position: idx,
                        reason: format!("expected '{c}{c}'"),
                    });
                }
                tokens.push((idx, if c == '&' { Token::And } else { Token::Or }));
            }
            _ => {
                let mut tag = String::from(c);
                while let Some((_, next)) = chars.next_if(|&(_, next)| !is_delimiter(next)) {
                    tag.push(next);
                }
                let name = strip_hash(&tag);
                if name.is_empty() {
                    return Err(Error::TagExprSyntax {
                        position: idx,
                        reason: "'#' must be followed by a tag".to_string(),
                    });
                }
                tokens.push((idx, Token::Tag(name.to_string())));
            }
        }
    }

    Ok(tokens)
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | '!' | '&' | '|')
}

fn describe(token: &Token) -> String {
    match token {
        Token::Tag(tag) => format!("tag '{tag}'"),
        Token::And => "'&&'".to_string(),
        Token::Or => "'||'".to_string(),
        Token::Not => "'!'".to_string(),
        Token::Open => "'('".to_string(),
        Token::Close => "')'".to_string(),
    }
}

struct Parser {
    tokens: Vec<(usize, Token)>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(_, t)| t)
    }

    /// Position for errors: the current token, or the end of input.
    fn position(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|(p, _)| *p)
            .unwrap_or(0)
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn parse_or(&mut self) -> Result<TagExpr> {
        let mut expr = self.parse_and()?;
        while self.eat(&Token::Or) {
            expr = TagExpr::or(expr, self.parse_and()?);
        }
        Ok(expr)
    }

    fn parse_and(&mut self) -> Result<TagExpr> {
        let mut expr = self.parse_not()?;
        while self.eat(&Token::And) {
            expr = TagExpr::and(expr, self.parse_not()?);
        }
        Ok(expr)
    }

    fn parse_not(&mut self) -> Result<TagExpr> {
        if self.eat(&Token::Not) {
            return Ok(TagExpr::not(self.parse_not()?));
        }
        self.parse_atom()
    }

    fn parse_atom(&mut self) -> Result<TagExpr> {
        let position = self.position();
        match self.tokens.get(self.pos).map(|(_, t)| t.clone()) {
            Some(Token::Tag(tag)) => {
                self.pos += 1;
                Ok(TagExpr::Tag(tag))
            }
            Some(Token::Open) => {
                self.pos += 1;
                let expr = self.parse_or()?;
                if !self.eat(&Token::Close) {
                    return Err(Error::TagExprSyntax {
                        position: self.position(),
                        reason: "expected ')'".to_string(),
                    });
                }
                Ok(expr)
            }
            Some(other) => Err(Error::TagExprSyntax {
                position,
                reason: format!("expected a tag, found {}", describe(&other)),
            }),
            None => Err(Error::TagExprSyntax {
                position,
                reason: "expected a tag, found end of expression".to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
