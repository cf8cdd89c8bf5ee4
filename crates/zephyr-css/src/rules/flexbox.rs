//! Flexbox and box-alignment utilities.

use zephyr_parse::ParsedClass;

use super::RuleOutput;
use crate::theme::Theme;
use crate::value;

pub(super) fn resolve(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    let value = token.value.as_deref();
    match token.utility.as_str() {
        "flex" => flex(token, value?),
        "flex-grow" => digits(value?).map(|v| RuleOutput::single("flex-grow", v)),
        "flex-shrink" => digits(value?).map(|v| RuleOutput::single("flex-shrink", v)),
        "order" => order(value?),
        "justify" => distributed(value?).map(|v| RuleOutput::single("justify-content", v)),
        "justify-items" => {
            keyword(value?, &["start", "end", "center", "stretch"], "justify-items")
        }
        "justify-self" => keyword(
            value?,
            &["auto", "start", "end", "center", "stretch"],
            "justify-self",
        ),
        "items" => aligned(value?).map(|v| RuleOutput::single("align-items", v)),
        "self" => aligned(value?).map(|v| RuleOutput::single("align-self", v)),
        "content" => content(token, value?),
        "place-content" => {
            placed(value?).map(|v| RuleOutput::single("place-content", v))
        }
        "place-items" => keyword(
            value?,
            &["start", "end", "center", "stretch"],
            "place-items",
        ),
        "place-self" => keyword(
            value?,
            &["auto", "start", "end", "center", "stretch"],
            "place-self",
        ),
        "gap" => Some(RuleOutput::single("gap", value::spacing(theme, value?))),
        "gap-x" => Some(RuleOutput::single("column-gap", value::spacing(theme, value?))),
        "gap-y" => Some(RuleOutput::single("row-gap", value::spacing(theme, value?))),
        _ => None,
    }
}

fn flex(token: &ParsedClass, value: &str) -> Option<RuleOutput> {
    let resolved = match value {
        _ if token.arbitrary => value,
        "1" => "1 1 0%",
        "auto" => "1 1 auto",
        "initial" => "0 1 auto",
        "none" => "none",
        _ => return None,
    };
    Some(RuleOutput::single("flex", resolved))
}

fn order(value: &str) -> Option<RuleOutput> {
    let resolved = match value {
        "first" => "-9999".to_string(),
        "last" => "9999".to_string(),
        "none" => "0".to_string(),
        _ => {
            let digits = value.strip_prefix('-').unwrap_or(value);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            value.to_string()
        }
    };
    Some(RuleOutput::single("order", resolved))
}

/// Main-axis distribution keywords, with the `flex-`/`space-` spellings
/// restored.
fn distributed(value: &str) -> Option<&'static str> {
    Some(match value {
        "start" => "flex-start",
        "end" => "flex-end",
        "center" => "center",
        "between" => "space-between",
        "around" => "space-around",
        "evenly" => "space-evenly",
        _ => return None,
    })
}

fn aligned(value: &str) -> Option<&'static str> {
    Some(match value {
        "auto" => "auto",
        "start" => "flex-start",
        "end" => "flex-end",
        "center" => "center",
        "baseline" => "baseline",
        "stretch" => "stretch",
        _ => return None,
    })
}

fn placed(value: &str) -> Option<&'static str> {
    Some(match value {
        "start" => "start",
        "end" => "end",
        "center" => "center",
        "between" => "space-between",
        "around" => "space-around",
        "evenly" => "space-evenly",
        "stretch" => "stretch",
        _ => return None,
    })
}

fn content(token: &ParsedClass, value: &str) -> Option<RuleOutput> {
    if token.arbitrary {
        return Some(RuleOutput::single("content", value));
    }
    if value == "none" {
        return Some(RuleOutput::single("content", "none"));
    }
    distributed(value).map(|v| RuleOutput::single("align-content", v))
}

fn digits(value: &str) -> Option<&str> {
    (!value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())).then_some(value)
}

fn keyword(value: &str, allowed: &[&str], property: &str) -> Option<RuleOutput> {
    allowed
        .contains(&value)
        .then(|| RuleOutput::single(property, value))
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
    fn flex_shorthands() {
        assert_eq!(one("flex-1"), ("flex".into(), "1 1 0%".into()));
        assert_eq!(one("flex-none"), ("flex".into(), "none".into()));
        assert_eq!(one("flex-[2_2_0%]"), ("flex".into(), "2_2_0%".into()));
    }

    #[test]
    fn alignment_keywords_expand() {
        assert_eq!(one("justify-between"), ("justify-content".into(), "space-between".into()));
        assert_eq!(one("items-center"), ("align-items".into(), "center".into()));
        assert_eq!(one("self-start"), ("align-self".into(), "flex-start".into()));
        assert_eq!(one("content-around"), ("align-content".into(), "space-around".into()));
        assert_eq!(one("place-content-evenly"), ("place-content".into(), "space-evenly".into()));
    }

    #[test]
    fn order_accepts_keywords_and_signed_numbers() {
        assert_eq!(one("order-first"), ("order".into(), "-9999".into()));
        assert_eq!(one("order-3"), ("order".into(), "3".into()));
        assert_eq!(one("-order-1"), ("order".into(), "-1".into()));
        assert!(resolve(&parse_class("order-middle"), &Theme::standard()).is_none());
    }

    #[test]
    fn gaps_use_the_spacing_scale() {
        assert_eq!(one("gap-4"), ("gap".into(), "1rem".into()));
        assert_eq!(one("gap-x-2"), ("column-gap".into(), "0.5rem".into()));
        assert_eq!(one("gap-y-px"), ("row-gap".into(), "1px".into()));
    }
}
