//! Minimal escaping applied to user-supplied text before prompt interpolation.

/// Replaces `<` with `&lt;` and `>` with `&gt;`.
///
/// Only angle brackets are touched; quotes and ampersands pass through.
pub fn sanitize_user_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}
