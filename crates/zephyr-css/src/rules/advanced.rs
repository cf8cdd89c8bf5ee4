//! Arbitrary-property classes and the SVG color utilities.

use zephyr_parse::ParsedClass;

use super::RuleOutput;
use crate::theme::Theme;
use crate::value;

/// `[property:value]` classes emit their declaration verbatim, bypassing
/// the rule table entirely.
pub(super) fn arbitrary_property(token: &ParsedClass) -> Option<RuleOutput> {
    if !token.arbitrary {
        return None;
    }
    let body = token.raw.strip_prefix('!').unwrap_or(&token.raw);
    if !body.starts_with('[') {
        return None;
    }
    Some(RuleOutput::single(&token.utility, token.value.clone()?))
}

pub(super) fn resolve(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    match token.key() {
        "fill" => colored("fill", token, theme),
        "stroke" => stroke(token, theme),
        _ => None,
    }
}

fn stroke(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    if let Some(value) = token.value.as_deref() {
        if !token.arbitrary && !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
            return Some(RuleOutput::single("stroke-width", value));
        }
    }
    colored("stroke", token, theme)
}

fn colored(property: &str, token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    let rest = token.tail(token.key())?;
    let color = if token.arbitrary {
        value::looks_like_color(&rest).then_some(rest)?
    } else {
        value::color(theme, &rest)?
    };
    Some(RuleOutput::single(property, color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use zephyr_parse::parse_class;

    fn one(class: &str) -> (String, String) {
        let token = parse_class(class);
        let output = arbitrary_property(&token)
            .or_else(|| resolve(&token, &Theme::standard()))
            .unwrap();
        output.properties.into_iter().next().unwrap()
    }

    #[test]
    fn arbitrary_properties_pass_through() {
        assert_eq!(one("[mask-type:alpha]"), ("mask-type".into(), "alpha".into()));
        assert_eq!(
            one("[--brand-color:#bada55]"),
            ("--brand-color".into(), "#bada55".into())
        );
    }

    #[test]
    fn arbitrary_values_are_not_arbitrary_properties() {
        let token = parse_class("w-[100px]");
        assert!(arbitrary_property(&token).is_none());
    }

    #[test]
    fn svg_colors_and_widths() {
        assert_eq!(one("fill-current"), ("fill".into(), "currentColor".into()));
        assert_eq!(one("stroke-blue-500"), ("stroke".into(), "#3b82f6".into()));
        assert_eq!(one("stroke-2"), ("stroke-width".into(), "2".into()));
    }
}
