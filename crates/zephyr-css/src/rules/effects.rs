//! Shadows, opacity, filters, blend modes, transitions, and animation.

use phf::phf_map;
use zephyr_parse::ParsedClass;

use super::RuleOutput;
use crate::theme::Theme;
use crate::value;

static BLURS: phf::Map<&'static str, &'static str> = phf_map! {
    "0" => "blur(0)",
    "none" => "blur(0)",
    "sm" => "blur(4px)",
    "md" => "blur(12px)",
    "lg" => "blur(16px)",
    "xl" => "blur(24px)",
    "2xl" => "blur(40px)",
    "3xl" => "blur(64px)",
};

static DROP_SHADOWS: phf::Map<&'static str, &'static str> = phf_map! {
    "sm" => "drop-shadow(0 1px 1px rgb(0 0 0 / 0.05))",
    "md" => "drop-shadow(0 4px 3px rgb(0 0 0 / 0.07)) drop-shadow(0 2px 2px rgb(0 0 0 / 0.06))",
    "lg" => "drop-shadow(0 10px 8px rgb(0 0 0 / 0.04)) drop-shadow(0 4px 3px rgb(0 0 0 / 0.1))",
    "xl" => "drop-shadow(0 20px 13px rgb(0 0 0 / 0.03)) drop-shadow(0 8px 5px rgb(0 0 0 / 0.08))",
    "2xl" => "drop-shadow(0 25px 25px rgb(0 0 0 / 0.15))",
    "none" => "drop-shadow(0 0 #0000)",
};

const TIMING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
const TRANSITION_DEFAULT: &str = "color, background-color, border-color, \
text-decoration-color, fill, stroke, opacity, box-shadow, transform, filter, backdrop-filter";
const TRANSITION_COLORS: &str =
    "color, background-color, border-color, text-decoration-color, fill, stroke";

pub(super) fn resolve(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    let value = token.value.as_deref();
    match token.utility.as_str() {
        "shadow" => shadow(token, theme),
        "opacity" => opacity(token, value?),
        "blur" => blur(token, value),
        "brightness" => scaled_filter("brightness", value?),
        "contrast" => scaled_filter("contrast", value?),
        "saturate" => scaled_filter("saturate", value?),
        "grayscale" => toggle_filter("grayscale", value),
        "invert" => toggle_filter("invert", value),
        "sepia" => toggle_filter("sepia", value),
        "drop-shadow" => DROP_SHADOWS
            .get(value?)
            .map(|v| RuleOutput::single("filter", *v)),
        "mix-blend" => blend(value?),
        "transition" => transition(token, value),
        "duration" => timed("transition-duration", token, value?),
        "delay" => timed("transition-delay", token, value?),
        "ease" => easing(value?),
        "animate" => animate(value?),
        _ => None,
    }
}

fn shadow(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    if token.arbitrary {
        return Some(RuleOutput::single("box-shadow", token.value.clone()?));
    }
    let key = token.value.as_deref().unwrap_or("DEFAULT");
    theme
        .box_shadow
        .get(key)
        .map(|v| RuleOutput::single("box-shadow", v.clone()))
}

fn opacity(token: &ParsedClass, value: &str) -> Option<RuleOutput> {
    if token.arbitrary {
        return Some(RuleOutput::single("opacity", value));
    }
    value::percent_to_unit(value).map(|v| RuleOutput::single("opacity", v))
}

fn blur(token: &ParsedClass, value: Option<&str>) -> Option<RuleOutput> {
    if token.arbitrary {
        return Some(RuleOutput::single("filter", format!("blur({})", value?)));
    }
    let resolved = match value {
        None => "blur(8px)",
        Some(key) => BLURS.get(key)?,
    };
    Some(RuleOutput::single("filter", resolved))
}

fn scaled_filter(name: &str, value: &str) -> Option<RuleOutput> {
    let amount = value::percent_to_unit(value)?;
    Some(RuleOutput::single("filter", format!("{name}({amount})")))
}

fn toggle_filter(name: &str, value: Option<&str>) -> Option<RuleOutput> {
    let amount = match value {
        None => "1",
        Some("0") => "0",
        Some(_) => return None,
    };
    Some(RuleOutput::single("filter", format!("{name}({amount})")))
}

fn blend(value: &str) -> Option<RuleOutput> {
    matches!(
        value,
        "normal"
            | "multiply"
            | "screen"
            | "overlay"
            | "darken"
            | "lighten"
            | "color-dodge"
            | "color-burn"
            | "hard-light"
            | "soft-light"
            | "difference"
            | "exclusion"
            | "hue"
            | "saturation"
            | "color"
            | "luminosity"
    )
    .then(|| RuleOutput::single("mix-blend-mode", value))
}

fn transition(token: &ParsedClass, value: Option<&str>) -> Option<RuleOutput> {
    let property = match value {
        None => TRANSITION_DEFAULT,
        Some("all") => "all",
        Some("colors") => TRANSITION_COLORS,
        Some("opacity") => "opacity",
        Some("shadow") => "box-shadow",
        Some("transform") => "transform",
        Some("none") => {
            return Some(RuleOutput::single("transition-property", "none"));
        }
        Some(other) if token.arbitrary => other,
        Some(_) => return None,
    };
    let mut output = RuleOutput::single("transition-property", property);
    output.push("transition-timing-function", TIMING);
    output.push("transition-duration", "150ms");
    Some(output)
}

fn timed(property: &str, token: &ParsedClass, value: &str) -> Option<RuleOutput> {
    if token.arbitrary {
        return Some(RuleOutput::single(property, value));
    }
    (!value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()))
        .then(|| RuleOutput::single(property, format!("{value}ms")))
}

fn easing(value: &str) -> Option<RuleOutput> {
    let resolved = match value {
        "linear" => "linear",
        "in" => "cubic-bezier(0.4, 0, 1, 1)",
        "out" => "cubic-bezier(0, 0, 0.2, 1)",
        "in-out" => TIMING,
        _ => return None,
    };
    Some(RuleOutput::single("transition-timing-function", resolved))
}

fn animate(value: &str) -> Option<RuleOutput> {
    let resolved = match value {
        "none" => "none",
        "spin" => "spin 1s linear infinite",
        "ping" => "ping 1s cubic-bezier(0, 0, 0.2, 1) infinite",
        "pulse" => "pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite",
        "bounce" => "bounce 1s infinite",
        _ => return None,
    };
    Some(RuleOutput::single("animation", resolved))
}
