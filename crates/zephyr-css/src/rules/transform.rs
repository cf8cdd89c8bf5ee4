//! Transform utilities, emitted as concrete `transform` functions.

use zephyr_parse::ParsedClass;

use super::RuleOutput;
use crate::theme::Theme;
use crate::value;

pub(super) fn resolve(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    let raw_value = token.value.as_deref();
    match token.utility.as_str() {
        "translate-x" => translate("translateX", token, theme),
        "translate-y" => translate("translateY", token, theme),
        "rotate" => angled("rotate", token, raw_value?),
        "skew-x" => angled("skewX", token, raw_value?),
        "skew-y" => angled("skewY", token, raw_value?),
        "scale" => scale("scale", token, raw_value?),
        "scale-x" => scale("scaleX", token, raw_value?),
        "scale-y" => scale("scaleY", token, raw_value?),
        "transform" if raw_value == Some("none") => {
            Some(RuleOutput::single("transform", "none"))
        }
        _ => origin(token),
    }
}

fn translate(function: &str, token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    let distance = value::spacing(theme, token.value.as_deref()?);
    Some(RuleOutput::single("transform", format!("{function}({distance})")))
}

fn angled(function: &str, token: &ParsedClass, value: &str) -> Option<RuleOutput> {
    if token.arbitrary {
        return Some(RuleOutput::single("transform", format!("{function}({value})")));
    }
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(RuleOutput::single("transform", format!("{function}({value}deg)")))
}

fn scale(function: &str, token: &ParsedClass, value: &str) -> Option<RuleOutput> {
    if token.arbitrary {
        return Some(RuleOutput::single("transform", format!("{function}({value})")));
    }
    let factor = value::percent_to_unit(value)?;
    Some(RuleOutput::single("transform", format!("{function}({factor})")))
}

fn origin(token: &ParsedClass) -> Option<RuleOutput> {
    let rest = token.tail("origin")?;
    matches!(
        rest.as_str(),
        "center"
            | "top"
            | "top-right"
            | "right"
            | "bottom-right"
            | "bottom"
            | "bottom-left"
            | "left"
            | "top-left"
    )
    .then(|| RuleOutput::single("transform-origin", rest.replace('-', " ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use zephyr_parse::parse_class;

    fn one(class: &str) -> (String, String) {
        let output = resolve(&parse_class(class), &Theme::standard()).unwrap();
        output.properties.into_iter().next().unwrap()
    }

    #[test]
    fn translations_ride_the_spacing_scale() {
        assert_eq!(one("translate-x-4"), ("transform".into(), "translateX(1rem)".into()));
        assert_eq!(
            one("-translate-x-1/2"),
            ("transform".into(), "translateX(-50%)".into())
        );
        assert_eq!(
            one("translate-y-[17px]"),
            ("transform".into(), "translateY(17px)".into())
        );
    }

    #[test]
    fn rotation_and_skew_append_degrees() {
        assert_eq!(one("rotate-45"), ("transform".into(), "rotate(45deg)".into()));
        assert_eq!(one("-rotate-90"), ("transform".into(), "rotate(-90deg)".into()));
        assert_eq!(one("skew-x-6"), ("transform".into(), "skewX(6deg)".into()));
    }

    #[test]
    fn scaling_is_a_unit_factor() {
        assert_eq!(one("scale-110"), ("transform".into(), "scale(1.1)".into()));
        assert_eq!(one("scale-x-90"), ("transform".into(), "scaleX(0.9)".into()));
    }

    #[test]
    fn origins_rejoin_their_tails() {
        assert_eq!(one("origin-center"), ("transform-origin".into(), "center".into()));
        assert_eq!(
            one("origin-top-right"),
            ("transform-origin".into(), "top right".into())
        );
    }
}
