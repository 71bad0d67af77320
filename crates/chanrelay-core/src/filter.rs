//! Line extraction for relayed posts.

/// Line prefixes that mark a line as worth relaying.
pub const RELEVANT_PREFIXES: [&str; 2] = ["Ca:", "User:"];

/// `true` when the line, once surrounding whitespace is removed, starts with one
/// of [`RELEVANT_PREFIXES`]. Case-sensitive.
pub fn is_relevant_line(line: &str) -> bool {
    let line = line.trim();
    RELEVANT_PREFIXES.iter().any(|p| line.starts_with(p))
}

/// Keep only the relevant lines of `text` (trimmed, original order, `\n`-joined).
///
/// When nothing matches the input is returned untouched, not an empty string.
pub fn extract(text: &str) -> String {
    let kept: Vec<&str> = text
        .split('\n')
        .filter(|line| is_relevant_line(line))
        .map(str::trim)
        .collect();

    if kept.is_empty() {
        return text.to_string();
    }
    kept.join("\n")
}
