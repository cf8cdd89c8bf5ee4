//! Candidate extraction from source content.
//!
//! Scans markup-ish text for `class` attributes, tokenizes their values,
//! and validates each candidate against the class-name grammar. This is
//! the only stage that rejects input outright; everything that survives
//! is handed to the pipeline, where unmatchable names just produce no
//! CSS.

use std::collections::HashSet;

/// Collect class-name candidates from text, in first-seen order.
///
/// Recognized attribute forms: `class="…"`, `class='…'`, `class={…}`,
/// ``class=`…` `` and the same with `className`. Template placeholders
/// (`${…}` and bare `{…}`) are discarded token-wise.
///
/// # Examples
///
/// ```
/// use zephyr_parse::extract_classes;
///
/// let html = r#"<div class="flex p-4"><span class='p-4 hover:underline'/></div>"#;
/// assert_eq!(extract_classes(html), vec!["flex", "p-4", "hover:underline"]);
/// ```
pub fn extract_classes(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for (at, _) in text.match_indices("class") {
        if at > 0 {
            let prev = bytes[at - 1];
            if prev.is_ascii_alphanumeric() || prev == b'-' || prev == b'_' {
                continue;
            }
        }
        let mut cursor = at + "class".len();
        if text[cursor..].starts_with("Name") {
            cursor += "Name".len();
        }
        while cursor < bytes.len() && bytes[cursor] == b' ' {
            cursor += 1;
        }
        if cursor >= bytes.len() || bytes[cursor] != b'=' {
            continue;
        }
        cursor += 1;
        while cursor < bytes.len() && bytes[cursor] == b' ' {
            cursor += 1;
        }
        if cursor >= bytes.len() {
            break;
        }

        let value = match bytes[cursor] {
            b'"' => read_until(text, cursor + 1, '"'),
            b'\'' => read_until(text, cursor + 1, '\''),
            b'`' => read_until(text, cursor + 1, '`'),
            b'{' => read_braced(text, cursor),
            _ => None,
        };
        let Some(value) = value else { continue };
        let value = strip_wrapping_quotes(value);

        for candidate in split_class_list(value) {
            if candidate.contains(['$', '{', '}', '<', '>']) {
                continue;
            }
            if !is_valid_class(candidate) {
                continue;
            }
            if seen.insert(candidate.to_string()) {
                out.push(candidate.to_string());
            }
        }
    }

    log::trace!("extracted {} class candidates", out.len());
    out
}

/// Split an attribute value on whitespace, keeping bracket groups whole
/// so grouped notations like `p[2 4]` survive as one candidate.
pub fn split_class_list(list: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0u32;
    let mut start = None;
    for (i, c) in list.char_indices() {
        if c.is_whitespace() && depth == 0 {
            if let Some(s) = start.take() {
                out.push(&list[s..i]);
            }
            continue;
        }
        if start.is_none() {
            start = Some(i);
        }
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    if let Some(s) = start {
        out.push(&list[s..]);
    }
    out
}

/// Validate a candidate against the class-name grammar: optional `!` and
/// `-` modifiers, colon-chained variant segments, and at most one
/// bracket group.
pub fn is_valid_class(candidate: &str) -> bool {
    let mut rest = candidate;
    if let Some(r) = rest.strip_prefix('!') {
        rest = r;
    }
    if let Some(r) = rest.strip_prefix('-') {
        rest = r;
    }
    if rest.is_empty() || rest.starts_with(':') || rest.ends_with(':') {
        return false;
    }

    let mut depth = 0u32;
    let mut groups = 0u32;
    let mut word = false;
    for c in rest.chars() {
        if depth > 0 {
            match c {
                ']' => depth = 0,
                '[' | '"' | '\'' | '`' | '{' | '}' => return false,
                c => word |= c.is_ascii_alphanumeric(),
            }
            continue;
        }
        match c {
            '[' => {
                if groups > 0 {
                    return false;
                }
                depth = 1;
                groups = 1;
            }
            ']' => return false,
            c if c.is_ascii_alphanumeric() => word = true,
            '-' | '_' | ':' | '.' | '/' => {}
            _ => return false,
        }
    }
    depth == 0 && word
}

fn read_until(text: &str, start: usize, close: char) -> Option<&str> {
    let end = text[start..].find(close)?;
    Some(&text[start..start + end])
}

/// Read a `{…}` expression, honoring nested braces, and return the inner
/// text.
fn read_braced(text: &str, open: usize) -> Option<&str> {
    let mut depth = 0u32;
    for (i, c) in text[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[open + 1..open + i]);
                }
            }
            _ => {}
        }
    }
    None
}

fn strip_wrapping_quotes(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\'', '`'] {
        if let Some(stripped) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return stripped;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_double_quoted() {
        let found = extract_classes(r#"<div class="flex p-4 flex">"#);
        assert_eq!(found, vec!["flex", "p-4"]);
    }

    #[test]
    fn extract_single_quoted_and_jsx() {
        let found = extract_classes(r#"<a class='underline'/><b className="font-bold">"#);
        assert_eq!(found, vec!["underline", "font-bold"]);
    }

    #[test]
    fn extract_braced_template() {
        let found = extract_classes(r#"<div className={`p-2 ${active} m-2`}>"#);
        assert_eq!(found, vec!["p-2", "m-2"]);
    }

    #[test]
    fn extract_skips_other_attributes() {
        let found = extract_classes(r#"<div data-class="zzz" class="flex">"#);
        assert_eq!(found, vec!["flex"]);
    }

    #[test]
    fn extract_keeps_bracket_groups_whole() {
        let found = extract_classes(r#"<div class="p[2 4] m-1">"#);
        assert_eq!(found, vec!["p[2 4]", "m-1"]);
    }

    #[test]
    fn extract_rejects_malformed_candidates() {
        let found = extract_classes(r#"<div class="ok-1 [unclosed half]bad: :bad">"#);
        assert_eq!(found, vec!["ok-1"]);
    }

    #[test]
    fn valid_class_grammar() {
        assert!(is_valid_class("p-4"));
        assert!(is_valid_class("sm:hover:bg-blue-500/50"));
        assert!(is_valid_class("!-m-4"));
        assert!(is_valid_class("w-[100px]"));
        assert!(is_valid_class("[mask-type:alpha]"));
        assert!(is_valid_class("w-1/2"));

        assert!(!is_valid_class(""));
        assert!(!is_valid_class("!"));
        assert!(!is_valid_class("p-4:"));
        assert!(!is_valid_class(":p-4"));
        assert!(!is_valid_class("a[b][c]"));
        assert!(!is_valid_class("a]b"));
        assert!(!is_valid_class("p 4"));
        assert!(!is_valid_class("---"));
    }
}
