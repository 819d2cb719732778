/// Normalize plain text the way the upstream page cleaner does: every line
/// trimmed, blank lines dropped, lines joined with `\n`.
///
/// Markup stripping happens before this point and is not handled here.
pub fn normalize_text(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
