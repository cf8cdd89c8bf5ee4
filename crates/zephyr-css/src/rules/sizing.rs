//! Width and height utilities, including the min/max families.

use phf::phf_map;
use zephyr_parse::ParsedClass;

use super::RuleOutput;
use crate::theme::Theme;
use crate::value;

static MAX_WIDTHS: phf::Map<&'static str, &'static str> = phf_map! {
    "0" => "0rem",
    "none" => "none",
    "xs" => "20rem",
    "sm" => "24rem",
    "md" => "28rem",
    "lg" => "32rem",
    "xl" => "36rem",
    "2xl" => "42rem",
    "3xl" => "48rem",
    "4xl" => "56rem",
    "5xl" => "64rem",
    "6xl" => "72rem",
    "7xl" => "80rem",
    "full" => "100%",
    "min" => "min-content",
    "max" => "max-content",
    "fit" => "fit-content",
    "prose" => "65ch",
};

pub(super) fn resolve(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    let value = token.value.as_deref()?;
    match token.utility.as_str() {
        "w" => Some(RuleOutput::single("width", axis(theme, value, "100vw"))),
        "h" => Some(RuleOutput::single("height", axis(theme, value, "100vh"))),
        "min-w" => Some(RuleOutput::single("min-width", axis(theme, value, "100vw"))),
        "min-h" => Some(RuleOutput::single("min-height", axis(theme, value, "100vh"))),
        "max-h" => Some(RuleOutput::single("max-height", axis(theme, value, "100vh"))),
        "max-w" => Some(RuleOutput::single("max-width", max_width(theme, value))),
        _ => None,
    }
}

/// Resolves a width/height fragment: fixed keywords first, then the
/// spacing scale with fraction and literal fallback.
fn axis(theme: &Theme, fragment: &str, screen: &str) -> String {
    match fragment {
        "auto" => "auto".to_string(),
        "full" => "100%".to_string(),
        "screen" => screen.to_string(),
        "min" => "min-content".to_string(),
        "max" => "max-content".to_string(),
        "fit" => "fit-content".to_string(),
        _ => value::spacing(theme, fragment),
    }
}

fn max_width(theme: &Theme, fragment: &str) -> String {
    if let Some(fixed) = MAX_WIDTHS.get(fragment) {
        return fixed.to_string();
    }
    if let Some(name) = fragment.strip_prefix("screen-") {
        if let Some(width) = theme.screen(name) {
            return width.to_string();
        }
    }
    value::spacing(theme, fragment)
}
