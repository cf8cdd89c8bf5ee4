//! The structured token produced by the class-name lexer.

/// A utility class name, decomposed.
///
/// Produced by [`parse_class`](crate::parse_class); every downstream stage
/// (rule matching, variant composition) works off this shape and never
/// re-inspects the raw string except to build the final selector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParsedClass {
    /// The class name exactly as written, including variants and modifiers.
    pub raw: String,
    /// Variant chain in written order, outermost first: `sm:hover:p-4`
    /// carries `["sm", "hover"]`.
    pub variants: Vec<String>,
    /// The utility key the rule table dispatches on.
    pub utility: String,
    /// The value part, when the utility carries one. Negative values keep
    /// their leading `-`; fractions stay verbatim (`"1/3"`).
    pub value: Option<String>,
    /// `true` when the name carried a leading `!` modifier.
    pub important: bool,
    /// `true` for bracketed arbitrary values (`w-[100px]`) and arbitrary
    /// properties (`[mask-type:alpha]`).
    pub arbitrary: bool,
}

impl ParsedClass {
    /// The class text after the given dispatch key, rejoined with dashes.
    ///
    /// The lexer splits at the last dash, so a color class like
    /// `bg-gray-500` arrives as utility `bg-gray`, value `500`. A rule
    /// keyed on `bg` calls `tail("bg")` to recover `gray-500`.
    pub fn tail(&self, key: &str) -> Option<String> {
        let after = self.utility.strip_prefix(key)?;
        let after = if after.is_empty() {
            after
        } else {
            // Only split at a segment boundary; `bg` must not strip `bgx-1`.
            after.strip_prefix('-')?
        };
        match (&self.value, after.is_empty()) {
            (None, true) => None,
            (None, false) => Some(after.to_string()),
            (Some(v), true) => Some(v.clone()),
            (Some(v), false) => Some(format!("{after}-{v}")),
        }
    }

    /// First dash-separated segment of the utility key.
    pub fn key(&self) -> &str {
        self.utility.split('-').next().unwrap_or(&self.utility)
    }
}

#[cfg(test)]
mod tests {
    use crate::parse_class;

    #[test]
    fn tail_rejoins_color_shade() {
        let token = parse_class("bg-gray-500");
        assert_eq!(token.utility, "bg-gray");
        assert_eq!(token.tail("bg").as_deref(), Some("gray-500"));
    }

    #[test]
    fn tail_without_value() {
        let token = parse_class("rounded");
        assert_eq!(token.tail("rounded"), None);
    }

    #[test]
    fn tail_with_exact_key() {
        let token = parse_class("p-4");
        assert_eq!(token.tail("p").as_deref(), Some("4"));
    }

    #[test]
    fn key_is_first_segment() {
        let token = parse_class("grid-cols-3");
        assert_eq!(token.key(), "grid");
        assert_eq!(token.utility, "grid-cols");
    }
}
