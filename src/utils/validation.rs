use log::{debug, warn};

use crate::utils::errors::UtilsError;

fn is_expression_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')')
}

fn validate_charset<P>(text: &str, allowed: P) -> Result<(), UtilsError>
where
    P: Fn(char) -> bool,
{
    if text.trim().is_empty() {
        warn!("Input is empty");
        return Err(UtilsError::EmptyInput);
    }

    match text.char_indices().find(|&(_, c)| !allowed(c)) {
        Some((index, character)) => {
            warn!(
                "Input contains disallowed character '{}' at index {}",
                character, index
            );
            Err(UtilsError::DisallowedCharacter { character, index })
        }
        None => Ok(()),
    }
}

/// Check that `text` contains only the closed expression alphabet: digits,
/// decimal point, whitespace, the four operator symbols, and parentheses.
///
/// This runs before tokenization so that no non-arithmetic text can ever
/// reach evaluation.
///
/// # Errors
///
/// Returns an error if the text is empty or contains any other character.
pub fn validate_expression_text(text: &str) -> Result<(), UtilsError> {
    debug!("Validating expression text: '{}'", text);
    validate_charset(text, is_expression_char)
}

/// Like [`validate_expression_text`] but additionally admitting `=`, the only
/// extra character a full equation may carry.
///
/// # Errors
///
/// Returns an error if the text is empty or contains any other character.
pub fn validate_equation_text(text: &str) -> Result<(), UtilsError> {
    debug!("Validating equation text: '{}'", text);
    validate_charset(text, |c| is_expression_char(c) || c == '=')
}
