//! Ordered CSS accumulation and serialization.
//!
//! Rules land in buckets keyed by media query, in first-seen order, and
//! merge by exact selector: a property seen again under the same selector
//! overwrites the earlier value in place, so repeated generation is
//! idempotent and later declarations win without reordering anything.

use crate::preflight::Preflight;

/// One selector and its declarations, in first-seen property order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule {
    pub selector: String,
    pub properties: Vec<(String, String)>,
}

#[derive(Debug, Clone, Default)]
struct Bucket {
    media: Option<String>,
    rules: Vec<CssRule>,
}

/// The accumulating stylesheet a generator writes into.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    buckets: Vec<Bucket>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records declarations under a selector, creating or merging as needed.
    ///
    /// A child selector starting with `:` attaches directly to the base
    /// selector; any other child selector is attached with a space.
    pub fn record(
        &mut self,
        selector: &str,
        properties: Vec<(String, String)>,
        media: Option<&str>,
        child: Option<&str>,
    ) {
        if properties.is_empty() {
            return;
        }
        let selector = match child {
            Some(child) if child.starts_with(':') => format!("{selector}{child}"),
            Some(child) => format!("{selector} {child}"),
            None => selector.to_string(),
        };

        let bucket = match self.buckets.iter_mut().position(|b| b.media.as_deref() == media) {
            Some(index) => &mut self.buckets[index],
            None => {
                self.buckets.push(Bucket {
                    media: media.map(str::to_string),
                    rules: Vec::new(),
                });
                self.buckets.last_mut().unwrap()
            }
        };

        match bucket.rules.iter_mut().find(|rule| rule.selector == selector) {
            Some(rule) => {
                for (property, value) in properties {
                    match rule.properties.iter_mut().find(|(p, _)| *p == property) {
                        Some(slot) => slot.1 = value,
                        None => rule.properties.push((property, value)),
                    }
                }
            }
            None => bucket.rules.push(CssRule { selector, properties }),
        }
    }

    /// Drops everything accumulated so far.
    pub fn reset(&mut self) {
        self.buckets.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|bucket| bucket.rules.is_empty())
    }

    /// Number of distinct selectors across all buckets.
    pub fn rule_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.rules.len()).sum()
    }

    /// Serializes the sheet: optional preflights, then the plain bucket,
    /// then each media bucket in first-seen order.
    pub fn serialize(
        &self,
        preflights: &[Box<dyn Preflight>],
        include_preflight: bool,
        minify: bool,
    ) -> String {
        let mut sections: Vec<String> = Vec::new();

        if include_preflight {
            for preflight in preflights {
                let css = preflight.get_css();
                if minify {
                    sections.push(minify_block(&css));
                } else {
                    sections.push(css.trim_end().to_string());
                }
            }
        }

        for bucket in self.plain_buckets() {
            for rule in &bucket.rules {
                sections.push(format_rule(rule, 0, minify));
            }
        }

        for bucket in &self.buckets {
            let Some(media) = &bucket.media else { continue };
            if bucket.rules.is_empty() {
                continue;
            }
            if minify {
                let inner: String = bucket
                    .rules
                    .iter()
                    .map(|rule| format_rule(rule, 0, true))
                    .collect();
                sections.push(format!("{media}{{{inner}}}"));
            } else {
                let inner = bucket
                    .rules
                    .iter()
                    .map(|rule| format_rule(rule, 1, false))
                    .collect::<Vec<_>>()
                    .join("\n");
                sections.push(format!("{media} {{\n{inner}\n}}"));
            }
        }

        if minify {
            sections.concat()
        } else {
            sections.join("\n")
        }
    }

    fn plain_buckets(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter().filter(|bucket| bucket.media.is_none())
    }
}

fn format_rule(rule: &CssRule, depth: usize, minify: bool) -> String {
    if minify {
        let body = rule
            .properties
            .iter()
            .map(|(p, v)| format!("{p}:{v}"))
            .collect::<Vec<_>>()
            .join(";");
        return format!("{}{{{body}}}", rule.selector);
    }
    let indent = "  ".repeat(depth);
    let mut block = format!("{indent}{} {{\n", rule.selector);
    for (property, value) in &rule.properties {
        block.push_str(&format!("{indent}  {property}: {value};\n"));
    }
    block.push_str(&format!("{indent}}}"));
    block
}

/// Collapses whitespace in a raw CSS block for minified output.
fn minify_block(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut pending_space = false;
    for c in css.chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            let after_punct = matches!(out.chars().last(), Some('{' | '}' | ';' | ':' | ','));
            let before_punct = matches!(c, '{' | '}' | ';' | ',');
            if !after_punct && !before_punct {
                out.push(' ');
            }
            pending_space = false;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(p, v)| (p.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn merging_overwrites_in_place() {
        let mut sheet = StyleSheet::new();
        sheet.record(".a", props(&[("color", "red"), ("margin", "0")]), None, None);
        sheet.record(".a", props(&[("color", "blue")]), None, None);

        assert_eq!(
            sheet.serialize(&[], false, true),
            ".a{color:blue;margin:0}"
        );
    }

    #[test]
    fn buckets_keep_first_seen_order_with_plain_rules_first() {
        let mut sheet = StyleSheet::new();
        sheet.record(".sm", props(&[("display", "flex")]), Some("@media (min-width: 640px)"), None);
        sheet.record(".a", props(&[("color", "red")]), None, None);
        sheet.record(".lg", props(&[("display", "grid")]), Some("@media (min-width: 1024px)"), None);

        assert_eq!(
            sheet.serialize(&[], false, true),
            ".a{color:red}\
             @media (min-width: 640px){.sm{display:flex}}\
             @media (min-width: 1024px){.lg{display:grid}}"
        );
    }

    #[test]
    fn pretty_output_shapes() {
        let mut sheet = StyleSheet::new();
        sheet.record(".a", props(&[("color", "red"), ("margin", "0")]), None, None);
        sheet.record(".b", props(&[("display", "flex")]), Some("@media print"), None);

        let css = sheet.serialize(&[], false, false);
        assert_eq!(
            css,
            ".a {\n  color: red;\n  margin: 0;\n}\n\
             @media print {\n  .b {\n    display: flex;\n  }\n}"
        );
    }

    #[test]
    fn child_selectors_attach_by_kind() {
        let mut sheet = StyleSheet::new();
        sheet.record(".x", props(&[("color", "gray")]), None, Some("::placeholder"));
        sheet.record(
            ".y",
            props(&[("margin-left", "1rem")]),
            None,
            Some("> :not([hidden]) ~ :not([hidden])"),
        );

        let css = sheet.serialize(&[], false, true);
        assert!(css.contains(".x::placeholder{"));
        assert!(css.contains(".y > :not([hidden]) ~ :not([hidden]){"));
    }

    #[test]
    fn reset_clears_all_buckets() {
        let mut sheet = StyleSheet::new();
        sheet.record(".a", props(&[("color", "red")]), None, None);
        assert!(!sheet.is_empty());
        sheet.reset();
        assert!(sheet.is_empty());
        assert_eq!(sheet.serialize(&[], false, true), "");
    }

    #[test]
    fn minified_block_collapses_whitespace() {
        let raw = "html {\n  line-height: 1.5;\n}\nbody {\n  margin: 0;\n}";
        assert_eq!(
            minify_block(raw),
            "html{line-height:1.5}body{margin:0}"
        );
    }
}
