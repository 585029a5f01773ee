//! Text helpers for slugs and tag lists.

/// Lowercases and dash-joins `text` into a URL-safe slug.
///
/// Runs of whitespace, dashes, and underscores collapse into a single dash;
/// everything else non-alphanumeric is dropped.
pub fn slugify(text: &str) -> String {
    let mut out = String::new();
    let mut prev_dash = false;
    for c in text.chars().flat_map(|c| c.to_lowercase()) {
        if c.is_ascii_alphanumeric() {
            out.push(c);
            prev_dash = false;
        } else if (c.is_whitespace() || c == '-' || c == '_') && !prev_dash {
            out.push('-');
            prev_dash = true;
        }
    }
    out.trim_matches('-').to_string()
}

/// Splits a comma-separated tag list into trimmed values.
///
/// A backslash escapes the next character, so `a\,b` yields the single tag
/// `a,b`. Empty entries vanish; values are otherwise kept verbatim, spaces
/// included.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for c in raw.chars() {
        if escaped {
            current.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == ',' {
            push_tag(&mut tags, &mut current);
        } else {
            current.push(c);
        }
    }
    push_tag(&mut tags, &mut current);

    tags
}

fn push_tag(tags: &mut Vec<String>, current: &mut String) {
    let value = current.trim();
    if !value.is_empty() {
        tags.push(value.to_string());
    }
    current.clear();
}
