//! The overloaded `bg-*` namespace: attachment, clip, position, repeat,
//! size, and color.

use zephyr_parse::ParsedClass;

use super::RuleOutput;
use crate::theme::Theme;
use crate::value;

pub(super) fn resolve(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    let rest = token.tail("bg")?;

    if token.arbitrary {
        let property = if rest.starts_with("url(") || rest.contains("gradient(") {
            "background-image"
        } else {
            "background-color"
        };
        return Some(RuleOutput::single(property, rest));
    }

    let fixed = match rest.as_str() {
        "fixed" | "local" | "scroll" => Some(("background-attachment", rest.clone())),
        "clip-border" => Some(("background-clip", "border-box".into())),
        "clip-padding" => Some(("background-clip", "padding-box".into())),
        "clip-content" => Some(("background-clip", "content-box".into())),
        "clip-text" => Some(("background-clip", "text".into())),
        "top" | "bottom" | "center" | "left" | "right" | "left-top" | "left-bottom"
        | "right-top" | "right-bottom" => {
            Some(("background-position", rest.replace('-', " ")))
        }
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" => {
            Some(("background-repeat", rest.clone()))
        }
        "repeat-round" => Some(("background-repeat", "round".into())),
        "repeat-space" => Some(("background-repeat", "space".into())),
        "auto" | "cover" | "contain" => Some(("background-size", rest.clone())),
        "none" => Some(("background-image", "none".into())),
        _ => None,
    };
    if let Some((property, value)) = fixed {
        return Some(RuleOutput::single(property, value));
    }

    value::color(theme, &rest).map(|color| RuleOutput::single("background-color", color))
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
    fn colors_resolve_last() {
        assert_eq!(one("bg-gray-500"), ("background-color".into(), "#6b7280".into()));
        assert_eq!(one("bg-white"), ("background-color".into(), "#ffffff".into()));
        assert_eq!(
            one("bg-blue-500/50"),
            ("background-color".into(), "rgb(59 130 246 / 0.5)".into())
        );
    }

    #[test]
    fn keywords_win_over_color_lookup() {
        assert_eq!(one("bg-fixed"), ("background-attachment".into(), "fixed".into()));
        assert_eq!(one("bg-left-top"), ("background-position".into(), "left top".into()));
        assert_eq!(one("bg-no-repeat"), ("background-repeat".into(), "no-repeat".into()));
        assert_eq!(one("bg-clip-text"), ("background-clip".into(), "text".into()));
        assert_eq!(one("bg-cover"), ("background-size".into(), "cover".into()));
        assert_eq!(one("bg-none"), ("background-image".into(), "none".into()));
    }

    #[test]
    fn arbitrary_values_pick_a_property_by_shape() {
        assert_eq!(one("bg-[#bada55]"), ("background-color".into(), "#bada55".into()));
        assert_eq!(
            one("bg-[url('/hero.png')]"),
            ("background-image".into(), "url('/hero.png')".into())
        );
    }

    #[test]
    fn unknown_fragments_stay_silent() {
        assert!(resolve(&parse_class("bg-mystery"), &Theme::standard()).is_none());
    }
}
