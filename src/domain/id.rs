//! Todo ID generation
//!
//! All IDs use the format: `{8-char-hex}-todo-{slug}`
//! Example: `0194f2ab-todo-buy-groceries`

/// Generate a todo ID from a title
pub fn generate_id(title: &str) -> String {
    // The leading hex of a v7 uuid is the millisecond timestamp, constant
    // for long stretches; the trailing hex is random, so take that
    let uuid = uuid::Uuid::now_v7().simple().to_string();
    let hex_prefix = &uuid[uuid.len() - 8..];
    let slug = slugify(title);
    if slug.is_empty() {
        format!("{}-todo", hex_prefix)
    } else {
        format!("{}-todo-{}", hex_prefix, slug)
    }
}

/// Slugify a title for use in IDs
fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        // Strip apostrophes entirely, replace other non-alphanumeric with hyphens
        .filter_map(|c| {
            if c.is_alphanumeric() {
                Some(c)
            } else if c == '\'' || c == '\u{2019}' || c == '\u{2018}' {
                None
            } else {
                Some('-')
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .take(6)
        .collect::<Vec<_>>()
        .join("-")
}
