use log::debug;

/// Extract every number literal from `text`, left to right, ignoring all
/// other characters. A `-` immediately adjacent to the digits signs the
/// literal. Used by the game driver to confirm the player's equation uses
/// exactly the generated numbers.
pub fn extract_numbers(text: &str) -> Vec<f64> {
    let mut numbers = Vec::new();
    let mut literal = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_ascii_digit() || c == '.' {
            literal.push(c);
            continue;
        }
        if !literal.is_empty() {
            if let Ok(value) = literal.parse::<f64>() {
                numbers.push(value);
            }
            literal.clear();
        }
        if c == '-' && matches!(chars.peek(), Some(d) if d.is_ascii_digit() || *d == '.') {
            literal.push('-');
        }
    }
    if !literal.is_empty()
        && let Ok(value) = literal.parse::<f64>()
    {
        numbers.push(value);
    }

    debug!("Extracted {} numbers from '{}'", numbers.len(), text);
    numbers
}

/// Check that the number literals in `text` are exactly the given multiset,
/// with matching multiplicity and regardless of order.
pub fn uses_exact_multiset(text: &str, numbers: &[f64]) -> bool {
    let mut found = extract_numbers(text);
    let mut expected = numbers.to_vec();
    found.sort_by(f64::total_cmp);
    expected.sort_by(f64::total_cmp);
    found == expected
}
