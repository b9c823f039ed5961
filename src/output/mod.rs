// Output formatting: terminal display for the `analyze` command.

pub mod terminal;

/// Shorten user text for log lines: the first `max_chars` characters, plus
/// "..." when anything was cut.
///
/// Counts chars rather than bytes, since UGC is full of accents and emoji
/// and a byte cut could land inside one.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let preview: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{preview}...")
    } else {
        preview
    }
}
