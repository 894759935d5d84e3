//! Markdown code fence removal for model replies

const FENCE: &str = "```";

/// Strip one optional leading fence (with an optional language tag such as
/// `json`) and one optional trailing fence, trimming whitespace around the
/// result. Fence markers anywhere else in the text are preserved.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        text = strip_language_tag(rest);
    }

    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest;
    }

    text.trim()
}

/// A run of tag characters counts as a language tag only when whitespace or
/// the end of the text follows it; otherwise it is content.
fn strip_language_tag(rest: &str) -> &str {
    let tag_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(rest.len());

    match rest[tag_len..].chars().next() {
        None => "",
        Some(c) if c.is_whitespace() => &rest[tag_len..],
        Some(_) => rest,
    }
}
