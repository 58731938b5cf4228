use std::iter::Peekable;
use std::slice;

use log::debug;

use crate::expression::{Expression, Operator};
use crate::parser::errors::ParseError;
use crate::parser::token::{Token, tokenize};
use crate::utils::validate_expression_text;

/// Parse one equation side into an [`Expression`] tree.
///
/// The character set is validated before tokenization, so this is the safety
/// boundary that replaces unrestricted code evaluation: only the closed
/// grammar below is accepted and nothing else.
///
/// ```text
/// expr   := term (('+' | '-') term)*
/// term   := factor (('*' | '/') factor)*
/// factor := '-'? NUMBER | '(' expr ')'
/// ```
///
/// The sign belongs to the number literal, so negative puzzle numbers render
/// and re-parse like any others; `-` applies to nothing else.
///
/// # Errors
///
/// Returns an error on empty input, disallowed characters, a dangling
/// operator, an unmatched parenthesis, or trailing tokens.
pub fn parse(text: &str) -> Result<Expression, ParseError> {
    debug!("Parsing expression text: '{}'", text);

    validate_expression_text(text)?;
    let tokens = tokenize(text)?;
    Parser::new(&tokens).parse()
}

/// A recursive descent parser (`LL(1)`) over the token stream. Additive and
/// multiplicative chains are folded iteratively so they stay
/// left-associative.
struct Parser<'a> {
    tokens: Peekable<slice::Iter<'a, Token>>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens: tokens.iter().peekable(),
        }
    }

    fn parse(mut self) -> Result<Expression, ParseError> {
        let expr = self.expression()?;

        match self.tokens.next() {
            None => Ok(expr),
            Some(Token::CloseParen) => Err(ParseError::UnmatchedParenthesis),
            Some(token) => Err(ParseError::UnexpectedToken(token.to_string())),
        }
    }

    fn peek_operator(&mut self, precedence: u8) -> Option<Operator> {
        match self.tokens.peek() {
            Some(&&Token::Operator(op)) if op.precedence() == precedence => Some(op),
            _ => None,
        }
    }

    fn expression(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.term()?;

        while let Some(op) = self.peek_operator(1) {
            self.tokens.next();
            let right = self.term()?;
            left = Expression::binary(op, left, right);
        }

        Ok(left)
    }

    fn term(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.factor()?;

        while let Some(op) = self.peek_operator(2) {
            self.tokens.next();
            let right = self.factor()?;
            left = Expression::binary(op, left, right);
        }

        Ok(left)
    }

    fn factor(&mut self) -> Result<Expression, ParseError> {
        match self.tokens.next() {
            Some(Token::Number(n)) => Ok(Expression::Number(*n)),
            Some(&Token::Operator(Operator::Sub)) => match self.tokens.next() {
                Some(Token::Number(n)) => Ok(Expression::Number(-*n)),
                Some(token) => Err(ParseError::UnexpectedToken(token.to_string())),
                None => Err(ParseError::UnexpectedEndOfInput),
            },
            Some(Token::OpenParen) => {
                let expr = self.expression()?;
                match self.tokens.next() {
                    Some(Token::CloseParen) => Ok(expr),
                    Some(token) => Err(ParseError::UnexpectedToken(token.to_string())),
                    None => Err(ParseError::UnmatchedParenthesis),
                }
            }
            Some(token) => Err(ParseError::UnexpectedToken(token.to_string())),
            None => Err(ParseError::UnexpectedEndOfInput),
        }
    }
}
