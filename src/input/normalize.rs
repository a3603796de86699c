// src/input/normalize.rs

/// Turns pasted free text into the ordered list of page labels.
///
/// Lines are split on `\n` or `\r\n`, trimmed, and blank lines dropped.
/// Order and duplicates are kept.
pub fn normalize(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Text form of an already-normalized label list.
pub fn join_labels(labels: &[String]) -> String {
    labels.join("\n")
}
