use std::fmt;

use log::debug;

use crate::expression::Operator;
use crate::parser::errors::ParseError;
use crate::utils::UtilsError;

/// A lexical unit of one equation side. The equality marker never appears
/// here; the checker splits on it before parsing begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    OpenParen,
    CloseParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
        }
    }
}

/// Scan `text` left to right into tokens; whitespace is insignificant.
///
/// The caller has already validated the character set, so anything outside
/// the expression alphabet still maps to the same disallowed-character error
/// rather than slipping through.
///
/// # Errors
///
/// Returns an error for characters outside the alphabet or for number
/// literals that do not scan as a numeric value.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(index, c)) = chars.peek() {
        match c {
            _ if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Token::OpenParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::CloseParen);
            }
            '+' => {
                chars.next();
                tokens.push(Token::Operator(Operator::Add));
            }
            '-' => {
                chars.next();
                tokens.push(Token::Operator(Operator::Sub));
            }
            '*' => {
                chars.next();
                tokens.push(Token::Operator(Operator::Mul));
            }
            '/' => {
                chars.next();
                tokens.push(Token::Operator(Operator::Div));
            }
            _ if c.is_ascii_digit() || c == '.' => {
                let mut literal = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        literal.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidNumber(literal.clone()))?;
                tokens.push(Token::Number(value));
            }
            character => {
                return Err(UtilsError::DisallowedCharacter { character, index }.into());
            }
        }
    }

    debug!("Tokenized '{}' into {} tokens", text, tokens.len());
    Ok(tokens)
}
