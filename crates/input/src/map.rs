//! Mapping typed responses to game inputs.

/// The letter in a single-letter response, uppercased.
///
/// Anything other than exactly one ASCII letter maps to `None`.
pub fn parse_letter(response: &str) -> Option<char> {
    let mut chars = response.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphabetic() => Some(ch.to_ascii_uppercase()),
        _ => None,
    }
}

/// Whether a response to a yes/no menu means yes.
pub fn is_affirmative(response: &str) -> bool {
    matches!(response.to_uppercase().as_str(), "Y" | "YES")
}
