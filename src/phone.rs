use super::*;

/// Longest value the field ever shows. Everything past it is cut.
const MAX_FORMATTED_LEN: usize = 17;

/// Rebuilds the phone field's display text from its full current content.
///
/// The formatter is forward-only: it ignores cursor position and always
/// reconstructs the canonical `+252 61 DDDDDDDD` grouping from the digit
/// subsequence, so edits in the middle of the value can reflow in
/// surprising ways.
pub fn format_phone_input(value: &str) -> String {
    let mut value: String = value
        .chars()
        .filter(|ch| ch.is_ascii_digit() || ch.is_whitespace() || *ch == '+')
        .collect();

    // A plus sign is only meaningful at the very front.
    if value.contains('+') && !value.starts_with('+') {
        value.retain(|ch| ch != '+');
        value.insert(0, '+');
    }

    let digits: String = value.chars().filter(char::is_ascii_digit).collect();

    let mut formatted = String::new();
    if digits.is_empty() {
        return formatted;
    }

    if digits.starts_with("252") {
        formatted.push_str("+252");
        if digits.len() > 3 {
            formatted.push(' ');
            formatted.push_str(&digits[3..digits.len().min(5)]);
            if digits.len() > 5 {
                formatted.push(' ');
                formatted.push_str(&digits[5..digits.len().min(13)]);
            }
        }
    } else {
        // Whatever the user typed, the country code is fixed.
        formatted.push_str("+252");
        formatted.push(' ');
        formatted.push_str(&digits[..digits.len().min(2)]);
        if digits.len() > 2 {
            formatted.push(' ');
            formatted.push_str(&digits[2..digits.len().min(10)]);
        }
    }

    if formatted.len() > MAX_FORMATTED_LEN {
        formatted.truncate(MAX_FORMATTED_LEN);
    }
    formatted
}
