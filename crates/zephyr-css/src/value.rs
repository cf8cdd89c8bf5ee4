//! Value resolution shared by the rule handlers.
//!
//! Class-name fragments become CSS values here: theme lookups with literal
//! fallback, negative propagation, fraction-to-percent conversion, and
//! alpha-modified colors.

use std::collections::HashMap;

use crate::theme::Theme;

/// Resolves a fragment against a scale map.
///
/// Lookup order for a positive fragment: the map itself, then fraction
/// conversion, then the fragment verbatim. A leading `-` is stripped before
/// lookup and re-applied to the resolved value; a fragment that resolves to
/// nothing passes through untouched, so `-13px` stays `-13px`.
pub(crate) fn scaled(map: &HashMap<String, String>, fragment: &str) -> String {
    if let Some(positive) = fragment.strip_prefix('-') {
        if let Some(resolved) = lookup(map, positive) {
            return format!("-{resolved}");
        }
        return fragment.to_string();
    }
    lookup(map, fragment).unwrap_or_else(|| fragment.to_string())
}

/// [`scaled`] against the theme's spacing table.
pub(crate) fn spacing(theme: &Theme, fragment: &str) -> String {
    scaled(&theme.spacing, fragment)
}

fn lookup(map: &HashMap<String, String>, fragment: &str) -> Option<String> {
    if let Some(hit) = map.get(fragment) {
        return Some(hit.clone());
    }
    fraction_percent(fragment)
}

/// Converts `N/M` into a percentage, formatted the way a double prints.
///
/// `1/3` becomes `33.33333333333333%`.
pub(crate) fn fraction_percent(fragment: &str) -> Option<String> {
    let (numerator, denominator) = fragment.split_once('/')?;
    if numerator.is_empty()
        || denominator.is_empty()
        || !numerator.bytes().all(|b| b.is_ascii_digit())
        || !denominator.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let n: f64 = numerator.parse().ok()?;
    let d: f64 = denominator.parse().ok()?;
    if d == 0.0 {
        return None;
    }
    Some(format!("{}%", n / d * 100.0))
}

/// Formats a `0..=100` integer as a unit-interval alpha or opacity value.
pub(crate) fn percent_to_unit(percent: &str) -> Option<String> {
    if percent.is_empty() || !percent.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: f64 = percent.parse().ok()?;
    Some(format!("{}", n / 100.0))
}

/// Applies an alpha modifier to a hex color, producing `rgb(R G B / A)`.
///
/// Returns `None` when the color is not hex, in which case callers fall back
/// to the unmodified color.
pub(crate) fn alpha_color(color: &str, percent: &str) -> Option<String> {
    let (r, g, b) = hex_rgb(color)?;
    let alpha = percent_to_unit(percent)?;
    Some(format!("rgb({r} {g} {b} / {alpha})"))
}

/// Parses `#rgb` and `#rrggbb` into channel bytes.
fn hex_rgb(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some((r * 17, g * 17, b * 17))
        }
        6 => Some((
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        )),
        _ => None,
    }
}

/// Resolves a color fragment, honoring an optional `/NN` alpha modifier.
pub(crate) fn color(theme: &Theme, fragment: &str) -> Option<String> {
    if let Some((token, percent)) = fragment.rsplit_once('/') {
        if percent.bytes().all(|b| b.is_ascii_digit()) && !percent.is_empty() {
            let base = theme.color(token)?;
            return Some(alpha_color(&base, percent).unwrap_or(base));
        }
    }
    theme.color(fragment)
}

/// Whether an arbitrary value reads as a color.
pub(crate) fn looks_like_color(value: &str) -> bool {
    value.starts_with('#')
        || value.starts_with("rgb(")
        || value.starts_with("rgba(")
        || value.starts_with("hsl(")
        || value.starts_with("hsla(")
        || value == "currentColor"
}
