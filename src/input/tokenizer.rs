/// Characters that separate arguments: space, tab, carriage return,
/// newline, and bell.
const DELIMITERS: &[char] = &[' ', '\t', '\r', '\n', '\u{7}'];

/// Split a raw input line into argument tokens.
///
/// Tokens borrow from `line`. Runs of delimiters collapse, so no empty
/// tokens are produced and a line of nothing but delimiters yields an
/// empty sequence.
pub fn split_line(line: &str) -> Vec<&str> {
    line.split(DELIMITERS)
        .filter(|token| !token.is_empty())
        .collect()
}
