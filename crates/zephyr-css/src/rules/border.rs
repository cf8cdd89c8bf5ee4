//! Border utilities: widths, styles, colors, radius, dividers, rings, and
//! outlines.

use zephyr_parse::ParsedClass;

use super::spacing::BETWEEN_CHILDREN;
use super::RuleOutput;
use crate::theme::Theme;
use crate::value;

const RING_DEFAULT_COLOR: &str = "rgb(59 130 246 / 0.5)";

pub(super) fn resolve(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    match token.key() {
        "border" => border(token, theme),
        "rounded" => rounded(token, theme),
        "divide" => divide(token, theme),
        "ring" => ring(token, theme),
        "outline" => outline(token),
        _ => None,
    }
}

/// How a border fragment resolves once the side prefix is stripped.
enum BorderSpec {
    Width(String),
    Style(String),
    Color(String),
}

fn border(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    let rest = token.tail("border")?;
    let (side, spec) = split_side(&rest, &["t", "r", "b", "l", "x", "y"]);
    let stems: &[&str] = match side {
        "" => &["border"],
        "t" => &["border-top"],
        "r" => &["border-right"],
        "b" => &["border-bottom"],
        "l" => &["border-left"],
        "x" => &["border-left", "border-right"],
        _ => &["border-top", "border-bottom"],
    };

    let resolved = if token.arbitrary {
        if spec.as_bytes().first().is_some_and(|b| b.is_ascii_digit()) {
            BorderSpec::Width(spec)
        } else {
            BorderSpec::Color(spec)
        }
    } else if spec.is_empty() {
        BorderSpec::Width("1px".to_string())
    } else if spec.bytes().all(|b| b.is_ascii_digit()) {
        BorderSpec::Width(format!("{spec}px"))
    } else if is_border_style(&spec) {
        BorderSpec::Style(spec)
    } else {
        BorderSpec::Color(value::color(theme, &spec)?)
    };

    let (suffix, resolved) = match resolved {
        BorderSpec::Width(v) => ("width", v),
        BorderSpec::Style(v) => ("style", v),
        BorderSpec::Color(v) => ("color", v),
    };
    let mut output = RuleOutput::new();
    for stem in stems {
        output.push(&format!("{stem}-{suffix}"), resolved.clone());
    }
    Some(output)
}

fn rounded(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    let rest = token.tail("rounded").unwrap_or_default();
    let (side, key) = split_side(&rest, &["t", "r", "b", "l", "tl", "tr", "br", "bl"]);
    let corners: &[&str] = match side {
        "" => &["border-radius"],
        "t" => &["border-top-left-radius", "border-top-right-radius"],
        "r" => &["border-top-right-radius", "border-bottom-right-radius"],
        "b" => &["border-bottom-right-radius", "border-bottom-left-radius"],
        "l" => &["border-top-left-radius", "border-bottom-left-radius"],
        "tl" => &["border-top-left-radius"],
        "tr" => &["border-top-right-radius"],
        "br" => &["border-bottom-right-radius"],
        _ => &["border-bottom-left-radius"],
    };

    let radius = if token.arbitrary {
        key
    } else {
        let lookup = if key.is_empty() { "DEFAULT" } else { &key };
        match theme.border_radius.get(lookup) {
            Some(hit) => hit.clone(),
            None if key.is_empty() => return None,
            None => key,
        }
    };

    let mut output = RuleOutput::new();
    for corner in corners {
        output.push(corner, radius.clone());
    }
    Some(output)
}

fn divide(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    match token.utility.as_str() {
        "divide-x" => {
            let width = divider_width(token.value.as_deref())?;
            let mut output = RuleOutput::single("--zp-divide-x-reverse", "0");
            output.push(
                "border-right-width",
                format!("calc({width} * var(--zp-divide-x-reverse))"),
            );
            output.push(
                "border-left-width",
                format!("calc({width} * calc(1 - var(--zp-divide-x-reverse)))"),
            );
            Some(output.with_child(BETWEEN_CHILDREN))
        }
        "divide-y" => {
            let width = divider_width(token.value.as_deref())?;
            let mut output = RuleOutput::single("--zp-divide-y-reverse", "0");
            output.push(
                "border-top-width",
                format!("calc({width} * calc(1 - var(--zp-divide-y-reverse)))"),
            );
            output.push(
                "border-bottom-width",
                format!("calc({width} * var(--zp-divide-y-reverse))"),
            );
            Some(output.with_child(BETWEEN_CHILDREN))
        }
        "divide-x-reverse" => Some(
            RuleOutput::single("--zp-divide-x-reverse", "1").with_child(BETWEEN_CHILDREN),
        ),
        "divide-y-reverse" => Some(
            RuleOutput::single("--zp-divide-y-reverse", "1").with_child(BETWEEN_CHILDREN),
        ),
        _ => {
            let rest = token.tail("divide")?;
            if is_border_style(&rest) {
                return Some(
                    RuleOutput::single("border-style", rest).with_child(BETWEEN_CHILDREN),
                );
            }
            let color = if token.arbitrary {
                rest
            } else {
                value::color(theme, &rest)?
            };
            Some(RuleOutput::single("border-color", color).with_child(BETWEEN_CHILDREN))
        }
    }
}

fn divider_width(value: Option<&str>) -> Option<String> {
    match value {
        None => Some("1px".to_string()),
        Some(digits) if digits.bytes().all(|b| b.is_ascii_digit()) && !digits.is_empty() => {
            Some(format!("{digits}px"))
        }
        Some(_) => None,
    }
}

fn ring(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    let rest = token.tail("ring").unwrap_or_default();
    // Offset composition needs shadow layering, which rings here do not do.
    if rest.starts_with("offset") {
        return None;
    }
    let shadow = |width: &str, color: &str| format!("0 0 0 {width} {color}");
    let resolved = if rest.is_empty() {
        shadow("3px", RING_DEFAULT_COLOR)
    } else if rest.bytes().all(|b| b.is_ascii_digit()) {
        shadow(&format!("{rest}px"), RING_DEFAULT_COLOR)
    } else if token.arbitrary {
        shadow("3px", &rest)
    } else {
        shadow("3px", &value::color(theme, &rest)?)
    };
    Some(RuleOutput::single("box-shadow", resolved))
}

fn outline(token: &ParsedClass) -> Option<RuleOutput> {
    if token.utility == "outline-offset" {
        let digits = token.value.as_deref()?;
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return Some(RuleOutput::single("outline-offset", format!("{digits}px")));
        }
        return None;
    }
    if token.arbitrary {
        return Some(RuleOutput::single("outline-color", token.value.clone()?));
    }
    match token.value.as_deref()? {
        "none" => Some(RuleOutput::fixed(&[
            ("outline", "2px solid transparent"),
            ("outline-offset", "2px"),
        ])),
        "white" => Some(RuleOutput::fixed(&[
            ("outline", "2px dotted white"),
            ("outline-offset", "2px"),
        ])),
        "black" => Some(RuleOutput::fixed(&[
            ("outline", "2px dotted black"),
            ("outline-offset", "2px"),
        ])),
        _ => None,
    }
}

fn is_border_style(fragment: &str) -> bool {
    matches!(fragment, "solid" | "dashed" | "dotted" | "double" | "none")
}

/// Splits an optional side prefix off a fragment: `t-2` becomes `("t", "2")`
/// while `gray-500` stays `("", "gray-500")`.
fn split_side<'a>(rest: &str, sides: &[&'a str]) -> (&'a str, String) {
    if let Some((head, tail)) = rest.split_once('-') {
        if let Some(side) = sides.iter().find(|s| **s == head) {
            return (side, tail.to_string());
        }
    }
    if let Some(side) = sides.iter().find(|s| **s == rest) {
        return (side, String::new());
    }
    ("", rest.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use zephyr_parse::parse_class;

    fn resolve_class(class: &str) -> Option<RuleOutput> {
        resolve(&parse_class(class), &Theme::standard())
    }

    fn one(class: &str) -> (String, String) {
        resolve_class(class).unwrap().properties.into_iter().next().unwrap()
    }

    #[test]
    fn border_sides_widths_styles_colors() {
        assert_eq!(one("border-t"), ("border-top-width".into(), "1px".into()));
        assert_eq!(one("border-2"), ("border-width".into(), "2px".into()));
        assert_eq!(one("border-t-2"), ("border-top-width".into(), "2px".into()));
        assert_eq!(one("border-dashed"), ("border-style".into(), "dashed".into()));
        assert_eq!(
            one("border-gray-200"),
            ("border-color".into(), "#e5e7eb".into())
        );

        let axis = resolve_class("border-x-4").unwrap();
        assert_eq!(
            axis.properties,
            vec![
                ("border-left-width".into(), "4px".into()),
                ("border-right-width".into(), "4px".into()),
            ]
        );
    }

    #[test]
    fn rounded_corners() {
        assert_eq!(one("rounded"), ("border-radius".into(), "0.25rem".into()));
        assert_eq!(one("rounded-lg"), ("border-radius".into(), "0.5rem".into()));
        assert_eq!(one("rounded-full"), ("border-radius".into(), "9999px".into()));

        let top = resolve_class("rounded-t-lg").unwrap();
        assert_eq!(
            top.properties,
            vec![
                ("border-top-left-radius".into(), "0.5rem".into()),
                ("border-top-right-radius".into(), "0.5rem".into()),
            ]
        );

        assert_eq!(
            one("rounded-tl"),
            ("border-top-left-radius".into(), "0.25rem".into())
        );
        assert_eq!(one("rounded-[12px]"), ("border-radius".into(), "12px".into()));
    }

    #[test]
    fn dividers_target_children() {
        let divide = resolve_class("divide-y").unwrap();
        assert_eq!(divide.child_selector.as_deref(), Some(BETWEEN_CHILDREN));
        assert_eq!(
            divide.properties[1],
            (
                "border-top-width".into(),
                "calc(1px * calc(1 - var(--zp-divide-y-reverse)))".into()
            )
        );

        let color = resolve_class("divide-gray-200").unwrap();
        assert_eq!(
            color.properties,
            vec![("border-color".into(), "#e5e7eb".into())]
        );
        assert_eq!(color.child_selector.as_deref(), Some(BETWEEN_CHILDREN));
    }

    #[test]
    fn rings_build_concrete_shadows() {
        assert_eq!(
            one("ring"),
            (
                "box-shadow".into(),
                "0 0 0 3px rgb(59 130 246 / 0.5)".into()
            )
        );
        assert_eq!(
            one("ring-4"),
            (
                "box-shadow".into(),
                "0 0 0 4px rgb(59 130 246 / 0.5)".into()
            )
        );
        assert_eq!(
            one("ring-red-500"),
            ("box-shadow".into(), "0 0 0 3px #ef4444".into())
        );
    }

    #[test]
    fn outlines() {
        let none = resolve_class("outline-none").unwrap();
        assert_eq!(
            none.properties,
            vec![
                ("outline".into(), "2px solid transparent".into()),
                ("outline-offset".into(), "2px".into()),
            ]
        );
        assert_eq!(one("outline-offset-4"), ("outline-offset".into(), "4px".into()));
    }
}
