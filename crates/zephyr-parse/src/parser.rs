//! Class-name lexer.
//!
//! Splits a utility class name into variants, utility key, value, and
//! modifier flags. Parsing is total: malformed input degrades into a
//! best-effort token instead of failing, and anything the rule table
//! cannot place simply produces no CSS later on.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::tables::{COLOR_UTILITIES, COMPOUND_PREFIXES, WHOLE_CLASSES};
use crate::token::ParsedClass;

/// Parse a class name into a token.
///
/// Deterministic and total. Split priority, highest first:
///
/// 1. one leading `!` sets `important` (a second `!` stays in the text);
/// 2. `[prop:value]` is an arbitrary property, no variants possible;
/// 3. `name-[…]` carves the bracketed value out before the variant
///    split, so values may contain colons (`bg-[url(http://…)]`);
/// 4. whole-name utilities (`inline-flex`, `divide-x`) keep no value;
/// 5. compound prefixes (`grid-cols`, `scroll-mt`) split after the
///    longest known prefix;
/// 6. a leading `-` re-enters the split and carries onto the value;
/// 7. `color-shade/NN` keeps the alpha suffix inside the value for the
///    color-bearing utilities; `N/M` fractions stay verbatim;
/// 8. everything else splits at the last dash.
///
/// # Examples
///
/// ```
/// use zephyr_parse::parse_class;
///
/// let token = parse_class("sm:hover:p-4");
/// assert_eq!(token.variants, vec!["sm", "hover"]);
/// assert_eq!(token.utility, "p");
/// assert_eq!(token.value.as_deref(), Some("4"));
/// ```
pub fn parse_class(raw: &str) -> ParsedClass {
    let (body, important) = match raw.strip_prefix('!') {
        Some(rest) => (rest, true),
        None => (raw, false),
    };

    // Arbitrary property: the whole name is a single bracket group.
    if let Some(inner) = body.strip_prefix('[').and_then(|b| b.strip_suffix(']')) {
        if let Some((prop, value)) = inner.split_once(':') {
            if !prop.is_empty() && !value.is_empty() {
                return ParsedClass {
                    raw: raw.to_string(),
                    variants: Vec::new(),
                    utility: prop.to_string(),
                    value: Some(value.to_string()),
                    important,
                    arbitrary: true,
                };
            }
        }
    }

    // Arbitrary value: carved out before the variant split because the
    // bracket content may itself contain colons.
    if body.ends_with(']') && !body.starts_with('[') {
        if let Some(open) = body.find("-[") {
            let head = &body[..open];
            let inner = &body[open + 2..body.len() - 1];
            if !head.is_empty() && !head.contains('[') && !inner.is_empty() {
                let mut variants: Vec<String> = head.split(':').map(str::to_string).collect();
                let utility = variants.pop().unwrap_or_default();
                if !utility.is_empty() && !variants.iter().any(String::is_empty) {
                    let (utility, value) = match utility.strip_prefix('-') {
                        Some(positive) if !positive.is_empty() => {
                            (positive.to_string(), format!("-{inner}"))
                        }
                        _ => (utility, inner.to_string()),
                    };
                    return ParsedClass {
                        raw: raw.to_string(),
                        variants,
                        utility,
                        value: Some(value),
                        important,
                        arbitrary: true,
                    };
                }
            }
        }
    }

    let mut variants: Vec<String> = body.split(':').map(str::to_string).collect();
    let candidate = variants.pop().unwrap_or_default();
    let (utility, value, arbitrary) = split_candidate(&candidate);

    ParsedClass {
        raw: raw.to_string(),
        variants,
        utility,
        value,
        important,
        arbitrary,
    }
}

/// Split the utility+value text at its highest-priority boundary.
fn split_candidate(candidate: &str) -> (String, Option<String>, bool) {
    if candidate.is_empty() || WHOLE_CLASSES.contains(candidate) {
        return (candidate.to_string(), None, false);
    }

    // Arbitrary value reached directly, without colons in the brackets.
    if candidate.ends_with(']') && !candidate.starts_with('[') {
        if let Some(open) = candidate.find("-[") {
            let head = &candidate[..open];
            let inner = &candidate[open + 2..candidate.len() - 1];
            if !head.is_empty() && !head.contains('[') && !inner.is_empty() {
                let (utility, value) = match head.strip_prefix('-') {
                    Some(positive) if !positive.is_empty() => {
                        (positive.to_string(), format!("-{inner}"))
                    }
                    _ => (head.to_string(), inner.to_string()),
                };
                return (utility, Some(value), true);
            }
        }
    }

    // Compound prefixes, longest match first: walk the dashes from the
    // right so `scroll-mt` beats `scroll-m`.
    let mut end = candidate.len();
    while let Some(i) = candidate[..end].rfind('-') {
        let prefix = &candidate[..i];
        if COMPOUND_PREFIXES.contains(prefix) {
            return (prefix.to_string(), Some(candidate[i + 1..].to_string()), false);
        }
        end = i;
    }

    // Negative value: split the positive text, then carry the sign onto
    // the value so theme lookup sees the bare key.
    if let Some(positive) = candidate.strip_prefix('-') {
        if !positive.is_empty() {
            let (utility, value, arbitrary) = split_candidate(positive);
            if let Some(v) = value {
                return (utility, Some(format!("-{v}")), arbitrary);
            }
            return (candidate.to_string(), None, false);
        }
    }

    if let Some((left, right)) = candidate.rsplit_once('/') {
        if !right.is_empty() && right.bytes().all(|b| b.is_ascii_digit()) {
            // Opacity modifier, only on the color-bearing utilities.
            for util in COLOR_UTILITIES {
                if let Some(rest) = left.strip_prefix(util).and_then(|r| r.strip_prefix('-')) {
                    if !rest.is_empty() {
                        return (util.to_string(), Some(format!("{rest}/{right}")), false);
                    }
                }
            }
            // Fraction: both sides integers, kept verbatim for rule time.
            if let Some((utility, num)) = left.rsplit_once('-') {
                if !utility.is_empty()
                    && !num.is_empty()
                    && num.bytes().all(|b| b.is_ascii_digit())
                {
                    return (utility.to_string(), Some(format!("{num}/{right}")), false);
                }
            }
        }
    }

    match candidate.rsplit_once('-') {
        Some((utility, value)) if !utility.is_empty() => {
            (utility.to_string(), Some(value.to_string()), false)
        }
        _ => (candidate.to_string(), None, false),
    }
}

/// A parsing session with a memo cache.
///
/// Identical raw strings always parse to identical tokens, so a session
/// keeps a raw → token map and clones out of it on repeat lookups. The
/// cache belongs to the session; independent sessions never share parse
/// state.
#[derive(Debug, Default)]
pub struct Parser {
    cache: RefCell<HashMap<String, ParsedClass>>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse through the cache.
    pub fn parse(&self, raw: &str) -> ParsedClass {
        if let Some(token) = self.cache.borrow().get(raw) {
            return token.clone();
        }
        let token = parse_class(raw);
        self.cache
            .borrow_mut()
            .insert(raw.to_string(), token.clone());
        token
    }

    /// Number of distinct class names parsed so far.
    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(raw: &str) -> (Vec<String>, String, Option<String>) {
        let t = parse_class(raw);
        (t.variants, t.utility, t.value)
    }

    #[test]
    fn parse_simple_value() {
        let (variants, utility, value) = parts("p-4");
        assert!(variants.is_empty());
        assert_eq!(utility, "p");
        assert_eq!(value.as_deref(), Some("4"));
    }

    #[test]
    fn parse_no_value() {
        let (_, utility, value) = parts("flex");
        assert_eq!(utility, "flex");
        assert_eq!(value, None);
    }

    #[test]
    fn parse_important() {
        let t = parse_class("!p-4");
        assert!(t.important);
        assert_eq!(t.utility, "p");
        assert_eq!(t.value.as_deref(), Some("4"));
    }

    #[test]
    fn parse_double_important_keeps_second() {
        let t = parse_class("!!p-4");
        assert!(t.important);
        assert_eq!(t.utility, "!p");
    }

    #[test]
    fn parse_variant_chain_in_order() {
        let (variants, utility, _) = parts("sm:hover:bg-blue-500");
        assert_eq!(variants, vec!["sm", "hover"]);
        assert_eq!(utility, "bg-blue");
    }

    #[test]
    fn parse_whole_name() {
        let (_, utility, value) = parts("inline-flex");
        assert_eq!(utility, "inline-flex");
        assert_eq!(value, None);
    }

    #[test]
    fn parse_whole_name_behind_variant() {
        let (variants, utility, value) = parts("md:flex-col-reverse");
        assert_eq!(variants, vec!["md"]);
        assert_eq!(utility, "flex-col-reverse");
        assert_eq!(value, None);
    }

    #[test]
    fn parse_arbitrary_value() {
        let t = parse_class("w-[100px]");
        assert!(t.arbitrary);
        assert_eq!(t.utility, "w");
        assert_eq!(t.value.as_deref(), Some("100px"));
    }

    #[test]
    fn parse_arbitrary_value_with_colons() {
        let t = parse_class("hover:bg-[url(http://example.com/a.png)]");
        assert!(t.arbitrary);
        assert_eq!(t.variants, vec!["hover"]);
        assert_eq!(t.utility, "bg");
        assert_eq!(t.value.as_deref(), Some("url(http://example.com/a.png)"));
    }

    #[test]
    fn parse_arbitrary_property() {
        let t = parse_class("[mask-type:alpha]");
        assert!(t.arbitrary);
        assert!(t.variants.is_empty());
        assert_eq!(t.utility, "mask-type");
        assert_eq!(t.value.as_deref(), Some("alpha"));
    }

    #[test]
    fn parse_compound_prefix() {
        let (_, utility, value) = parts("grid-cols-3");
        assert_eq!(utility, "grid-cols");
        assert_eq!(value.as_deref(), Some("3"));
    }

    #[test]
    fn parse_longest_compound_prefix_wins() {
        let (_, utility, value) = parts("scroll-mt-4");
        assert_eq!(utility, "scroll-mt");
        assert_eq!(value.as_deref(), Some("4"));
    }

    #[test]
    fn parse_compound_prefix_with_dashed_value() {
        let (_, utility, value) = parts("max-w-screen-sm");
        assert_eq!(utility, "max-w");
        assert_eq!(value.as_deref(), Some("screen-sm"));
    }

    #[test]
    fn parse_divide_whole_and_valued() {
        let (_, utility, value) = parts("divide-x");
        assert_eq!(utility, "divide-x");
        assert_eq!(value, None);

        let (_, utility, value) = parts("divide-y-2");
        assert_eq!(utility, "divide-y");
        assert_eq!(value.as_deref(), Some("2"));
    }

    #[test]
    fn parse_negative_value() {
        let (_, utility, value) = parts("-m-4");
        assert_eq!(utility, "m");
        assert_eq!(value.as_deref(), Some("-4"));
    }

    #[test]
    fn parse_negative_compound_fraction() {
        let (_, utility, value) = parts("-translate-x-1/2");
        assert_eq!(utility, "translate-x");
        assert_eq!(value.as_deref(), Some("-1/2"));
    }

    #[test]
    fn parse_negative_arbitrary() {
        let t = parse_class("-translate-y-[10px]");
        assert!(t.arbitrary);
        assert_eq!(t.utility, "translate-y");
        assert_eq!(t.value.as_deref(), Some("-10px"));
    }

    #[test]
    fn parse_opacity_modifier() {
        let (_, utility, value) = parts("bg-blue-500/50");
        assert_eq!(utility, "bg");
        assert_eq!(value.as_deref(), Some("blue-500/50"));
    }

    #[test]
    fn parse_opacity_only_for_color_utilities() {
        // `w` is not color-bearing, so the slash reads as a fraction.
        let (_, utility, value) = parts("w-1/3");
        assert_eq!(utility, "w");
        assert_eq!(value.as_deref(), Some("1/3"));
    }

    #[test]
    fn parse_fraction_verbatim() {
        let (_, utility, value) = parts("translate-x-1/2");
        assert_eq!(utility, "translate-x");
        assert_eq!(value.as_deref(), Some("1/2"));
    }

    #[test]
    fn parse_color_shade_splits_at_last_dash() {
        let (_, utility, value) = parts("bg-gray-500");
        assert_eq!(utility, "bg-gray");
        assert_eq!(value.as_deref(), Some("500"));
    }

    #[test]
    fn parse_is_deterministic() {
        assert_eq!(parse_class("sm:!-m-4"), parse_class("sm:!-m-4"));
    }

    #[test]
    fn parser_cache_returns_identical_tokens() {
        let parser = Parser::new();
        let first = parser.parse("hover:bg-blue-500/50");
        let second = parser.parse("hover:bg-blue-500/50");
        assert_eq!(first, second);
        assert_eq!(parser.cached(), 1);
    }
}
