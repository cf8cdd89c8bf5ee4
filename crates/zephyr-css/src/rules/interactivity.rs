//! Interactivity utilities: cursor, selection, scrolling, and input accents.

use zephyr_parse::ParsedClass;

use super::RuleOutput;
use crate::theme::Theme;
use crate::value;

pub(super) fn resolve(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    match token.key() {
        "cursor" => cursor(token),
        "select" => keyword_rule(token.value.as_deref()?, &["none", "text", "all", "auto"], "user-select"),
        "pointer" => {
            if token.utility != "pointer-events" {
                return None;
            }
            keyword_rule(token.value.as_deref()?, &["none", "auto"], "pointer-events")
        }
        "resize" => resize(token),
        "appearance" => {
            (token.value.as_deref() == Some("none"))
                .then(|| RuleOutput::single("appearance", "none"))
        }
        "scroll" => scroll(token, theme),
        "caret" => colored("caret-color", token, theme),
        "accent" => {
            if token.value.as_deref() == Some("auto") {
                return Some(RuleOutput::single("accent-color", "auto"));
            }
            colored("accent-color", token, theme)
        }
        "touch" => touch(token),
        "will" => will_change(token),
        _ => None,
    }
}

fn cursor(token: &ParsedClass) -> Option<RuleOutput> {
    let rest = token.tail("cursor")?;
    if token.arbitrary {
        return Some(RuleOutput::single("cursor", rest));
    }
    matches!(
        rest.as_str(),
        "auto"
            | "default"
            | "pointer"
            | "wait"
            | "text"
            | "move"
            | "help"
            | "none"
            | "progress"
            | "cell"
            | "crosshair"
            | "grab"
            | "grabbing"
            | "not-allowed"
    )
    .then(|| RuleOutput::single("cursor", rest))
}

fn resize(token: &ParsedClass) -> Option<RuleOutput> {
    let resolved = match token.value.as_deref() {
        None => "both",
        Some("none") => "none",
        Some("y") => "vertical",
        Some("x") => "horizontal",
        Some(_) => return None,
    };
    Some(RuleOutput::single("resize", resolved))
}

fn scroll(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    let sides: &[&str] = match token.utility.as_str() {
        "scroll" => {
            let value = token.value.as_deref()?;
            return keyword_rule(value, &["auto", "smooth"], "scroll-behavior");
        }
        "scroll-m" => &["scroll-margin"],
        "scroll-mx" => &["scroll-margin-left", "scroll-margin-right"],
        "scroll-my" => &["scroll-margin-top", "scroll-margin-bottom"],
        "scroll-mt" => &["scroll-margin-top"],
        "scroll-mr" => &["scroll-margin-right"],
        "scroll-mb" => &["scroll-margin-bottom"],
        "scroll-ml" => &["scroll-margin-left"],
        "scroll-p" => &["scroll-padding"],
        "scroll-px" => &["scroll-padding-left", "scroll-padding-right"],
        "scroll-py" => &["scroll-padding-top", "scroll-padding-bottom"],
        "scroll-pt" => &["scroll-padding-top"],
        "scroll-pr" => &["scroll-padding-right"],
        "scroll-pb" => &["scroll-padding-bottom"],
        "scroll-pl" => &["scroll-padding-left"],
        _ => return None,
    };
    let resolved = value::spacing(theme, token.value.as_deref()?);
    let mut output = RuleOutput::new();
    for side in sides {
        output.push(side, resolved.clone());
    }
    Some(output)
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

fn touch(token: &ParsedClass) -> Option<RuleOutput> {
    let rest = token.tail("touch")?;
    matches!(
        rest.as_str(),
        "auto"
            | "none"
            | "manipulation"
            | "pan-x"
            | "pan-y"
            | "pan-left"
            | "pan-right"
            | "pan-up"
            | "pan-down"
            | "pinch-zoom"
    )
    .then(|| RuleOutput::single("touch-action", rest))
}

fn will_change(token: &ParsedClass) -> Option<RuleOutput> {
    if token.utility != "will-change" {
        return None;
    }
    let resolved = match token.value.as_deref()? {
        "auto" => "auto",
        "scroll" => "scroll-position",
        "contents" => "contents",
        "transform" => "transform",
        _ => return None,
    };
    Some(RuleOutput::single("will-change", resolved))
}

fn keyword_rule(value: &str, allowed: &[&str], property: &str) -> Option<RuleOutput> {
    allowed
        .contains(&value)
        .then(|| RuleOutput::single(property, value))
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
    fn cursors_accept_multi_segment_keywords() {
        assert_eq!(one("cursor-pointer"), ("cursor".into(), "pointer".into()));
        assert_eq!(one("cursor-not-allowed"), ("cursor".into(), "not-allowed".into()));
        assert_eq!(
            one("cursor-[url(hand.cur),_pointer]"),
            ("cursor".into(), "url(hand.cur),_pointer".into())
        );
    }

    #[test]
    fn scroll_margins_and_behavior() {
        assert_eq!(one("scroll-smooth"), ("scroll-behavior".into(), "smooth".into()));
        assert_eq!(one("scroll-mt-4"), ("scroll-margin-top".into(), "1rem".into()));

        let axis = resolve_class("scroll-px-2").unwrap();
        assert_eq!(axis.properties.len(), 2);
        assert_eq!(
            axis.properties[0],
            ("scroll-padding-left".into(), "0.5rem".into())
        );
    }

    #[test]
    fn accents_and_carets_are_colors() {
        assert_eq!(one("caret-blue-500"), ("caret-color".into(), "#3b82f6".into()));
        assert_eq!(one("accent-auto"), ("accent-color".into(), "auto".into()));
        assert_eq!(one("accent-pink-500"), ("accent-color".into(), "#ec4899".into()));
    }

    #[test]
    fn pointer_events_and_touch() {
        assert_eq!(one("pointer-events-none"), ("pointer-events".into(), "none".into()));
        assert_eq!(one("touch-pan-x"), ("touch-action".into(), "pan-x".into()));
        assert_eq!(one("will-change-scroll"), ("will-change".into(), "scroll-position".into()));
    }

    #[test]
    fn resize_defaults_to_both_axes() {
        assert_eq!(one("resize"), ("resize".into(), "both".into()));
        assert_eq!(one("resize-y"), ("resize".into(), "vertical".into()));
    }
}
