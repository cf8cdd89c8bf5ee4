//! Compact grouped-notation expansion.
//!
//! `p[2 4 hover:6]` is shorthand for `p-2 p-4 hover:p-6`. The expander
//! rewrites such groups into canonical class strings before they reach
//! the lexer; each produced string re-enters the pipeline on its own.
//! A single-term colon form (`w:full` → `w-full`) is gated separately.

use phf::{phf_map, phf_set, Map, Set};

/// Composed `prefix-term` names with a shorter spelling.
static ALIASES: Map<&'static str, &'static str> = phf_map! {
    "jc-start" => "justify-start",
    "jc-end" => "justify-end",
    "jc-center" => "justify-center",
    "jc-between" => "justify-between",
    "jc-around" => "justify-around",
    "jc-evenly" => "justify-evenly",
    "ai-start" => "items-start",
    "ai-end" => "items-end",
    "ai-center" => "items-center",
    "ai-baseline" => "items-baseline",
    "ai-stretch" => "items-stretch",
};

/// Terms that complete `flex-` directly (directions, wrap modes, growth
/// keywords).
static FLEX_TERMS: Set<&'static str> = phf_set! {
    "row",
    "row-reverse",
    "col",
    "col-reverse",
    "wrap",
    "wrap-reverse",
    "nowrap",
    "1",
    "auto",
    "initial",
    "none",
    "grow",
    "shrink",
};

/// Width/height keywords that are theme-adjacent rather than raw lengths.
static SIZE_KEYWORDS: Set<&'static str> = phf_set! {
    "full",
    "screen",
    "auto",
    "min",
    "max",
    "fit",
    "px",
};

/// Prefixes the single-term colon form recognizes. Variant names must
/// never appear here, otherwise `hover:flex` would be rewritten.
static COLON_PREFIXES: Set<&'static str> = phf_set! {
    "w", "h", "m", "p",
    "mt", "mr", "mb", "ml", "mx", "my",
    "pt", "pr", "pb", "pl", "px", "py",
    "text", "bg", "font", "gap", "z",
    "flex", "grid", "border", "rounded", "shadow",
    "opacity", "leading", "tracking", "duration",
    "scale", "rotate", "jc", "ai",
};

/// Gates for the two compact notations.
#[derive(Clone, Copy, Debug, Default)]
pub struct Expander {
    bracket: bool,
    colon: bool,
}

impl Expander {
    pub fn new(bracket: bool, colon: bool) -> Self {
        Self { bracket, colon }
    }

    /// Expand one candidate into canonical class strings.
    ///
    /// Returns `None` when the candidate is not a grouped form (or the
    /// matching gate is off) and should be parsed as written. Arbitrary
    /// values (`w-[100px]`) and arbitrary properties (`[color:red]`) are
    /// never treated as groups.
    pub fn expand(&self, candidate: &str) -> Option<Vec<String>> {
        if self.bracket {
            if let Some(expanded) = expand_bracket(candidate) {
                return Some(expanded);
            }
        }
        if self.colon {
            if let Some(expanded) = expand_colon(candidate) {
                return Some(vec![expanded]);
            }
        }
        None
    }
}

/// `variants:prefix[term term …]` → one class per term.
fn expand_bracket(candidate: &str) -> Option<Vec<String>> {
    if !candidate.ends_with(']') {
        return None;
    }
    let open = candidate.find('[')?;
    if open == 0 || open + 1 == candidate.len() - 1 {
        return None;
    }
    // A dash before the bracket means an arbitrary value, not a group.
    if candidate.as_bytes()[open - 1] == b'-' {
        return None;
    }

    let head = &candidate[..open];
    let inner = &candidate[open + 1..candidate.len() - 1];
    let mut segments: Vec<&str> = head.split(':').collect();
    let prefix = segments.pop()?;
    if prefix.is_empty() || segments.iter().any(|s| s.is_empty()) {
        return None;
    }

    let (prefix, group_negative) = match prefix.strip_prefix('-') {
        Some(positive) if !positive.is_empty() => (positive, true),
        _ => (prefix, false),
    };

    let outer = segments
        .iter()
        .map(|s| format!("{s}:"))
        .collect::<String>();

    let mut expanded = Vec::new();
    for term in inner.split_whitespace() {
        expanded.push(expand_term(prefix, term, &outer, group_negative));
    }
    if expanded.is_empty() {
        return None;
    }
    Some(expanded)
}

/// `prefix:value` → a single canonical class.
fn expand_colon(candidate: &str) -> Option<String> {
    if candidate.contains('[') || candidate.ends_with(':') {
        return None;
    }
    let (head, value) = candidate.rsplit_once(':')?;
    let (outer, prefix) = match head.rsplit_once(':') {
        Some((outer, prefix)) => (format!("{outer}:"), prefix),
        None => (String::new(), head),
    };
    let (prefix, negative) = match prefix.strip_prefix('-') {
        Some(positive) => (positive, true),
        None => (prefix, false),
    };
    if !COLON_PREFIXES.contains(prefix) {
        return None;
    }
    Some(compose(prefix, value, &outer, negative))
}

fn expand_term(prefix: &str, term: &str, outer: &str, group_negative: bool) -> String {
    let (term, important) = match term.strip_suffix('!') {
        Some(rest) if !rest.is_empty() => (rest, true),
        _ => (term, false),
    };

    // Nested variants apply to this term only: `p[2 hover:4]`.
    let mut nested = String::new();
    let mut term = term;
    while let Some((variant, rest)) = term.split_once(':') {
        if variant.is_empty() || rest.is_empty() {
            break;
        }
        nested.push_str(variant);
        nested.push(':');
        term = rest;
    }

    let (term, negative) = match term.strip_prefix('-') {
        Some(positive) if !positive.is_empty() => (positive, true),
        _ => (term, group_negative),
    };

    let mut out = String::new();
    if important {
        out.push('!');
    }
    out.push_str(outer);
    out.push_str(&nested);
    if negative {
        out.push('-');
    }
    out.push_str(&map_term(prefix, term));
    out
}

/// Map one term through the alias and per-prefix semantic tables, falling
/// back to `prefix-term`, or `prefix-[term]` for raw values.
fn map_term(prefix: &str, term: &str) -> String {
    let composed = format!("{prefix}-{term}");
    if let Some(alias) = ALIASES.get(composed.as_str()) {
        return (*alias).to_string();
    }
    match prefix {
        "flex" if FLEX_TERMS.contains(term) => composed,
        "grid" => {
            // A bare track count means columns.
            if term.bytes().all(|b| b.is_ascii_digit()) {
                format!("grid-cols-{term}")
            } else {
                composed
            }
        }
        "w" | "h" | "min-w" | "max-w" | "min-h" | "max-h" if SIZE_KEYWORDS.contains(term) => {
            composed
        }
        _ if looks_like_raw_value(term) => format!("{prefix}-[{term}]"),
        _ => composed,
    }
}

/// Raw CSS values get bracket-wrapped instead of pretending to be theme
/// keys: lengths with units, percentages, hex colors, functions.
fn looks_like_raw_value(term: &str) -> bool {
    if term.starts_with('#') || term.contains('(') || term.contains('%') {
        return true;
    }
    let mut chars = term.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => {
            // Plain numbers and fractions stay theme keys.
            !term
                .bytes()
                .all(|b| b.is_ascii_digit() || b == b'.' || b == b'/')
        }
        _ => false,
    }
}

fn compose(prefix: &str, value: &str, outer: &str, negative: bool) -> String {
    let mut out = String::new();
    out.push_str(outer);
    if negative {
        out.push('-');
    }
    out.push_str(&map_term(prefix, value));
    out
}
