/// Maps every ASCII alphanumeric character to its uppercase form and every
/// other character to a single space. The output has one character per input
/// character.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                ' '
            }
        })
        .collect()
}

pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}
