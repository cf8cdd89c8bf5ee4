//! Variant composition.
//!
//! A parsed class and its variant chain become a concrete CSS selector and
//! an optional media query here. Pseudo variants append to the selector in
//! chain order, ancestor/sibling prefixes occupy a single slot where the
//! last one wins, and the first media-capable variant picks the bucket.

use phf::phf_map;
use zephyr_parse::ParsedClass;

use crate::config::VariantGates;
use crate::theme::Theme;

/// Where a rule lands: its selector and the media bucket, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub selector: String,
    pub media: Option<String>,
}

/// Variants appended to the class selector as pseudo-classes or
/// pseudo-elements.
static SUFFIXES: phf::Map<&'static str, &'static str> = phf_map! {
    "hover" => ":hover",
    "focus" => ":focus",
    "active" => ":active",
    "visited" => ":visited",
    "disabled" => ":disabled",
    "focus-within" => ":focus-within",
    "focus-visible" => ":focus-visible",
    "checked" => ":checked",
    "required" => ":required",
    "empty" => ":empty",
    "first" => ":first-child",
    "last" => ":last-child",
    "odd" => ":nth-child(odd)",
    "even" => ":nth-child(even)",
    "first-letter" => "::first-letter",
    "first-line" => "::first-line",
    "before" => "::before",
    "after" => "::after",
    "placeholder" => "::placeholder",
    "selection" => "::selection",
    "marker" => "::marker",
    "file" => "::file-selector-button",
};

/// Variants prepended to the selector as an ancestor or sibling context.
static PREFIXES: phf::Map<&'static str, &'static str> = phf_map! {
    "group-hover" => ".group:hover ",
    "group-focus" => ".group:focus ",
    "group-active" => ".group:active ",
    "peer-hover" => ".peer:hover ~ ",
    "peer-focus" => ".peer:focus ~ ",
    "peer-checked" => ".peer:checked ~ ",
    "dark" => ".dark ",
    "rtl" => "[dir=\"rtl\"] ",
    "ltr" => "[dir=\"ltr\"] ",
};

fn prefix_gate(variant: &str) -> VariantGates {
    if variant.starts_with("group-") {
        VariantGates::GROUP
    } else if variant.starts_with("peer-") {
        VariantGates::PEER
    } else if variant == "dark" {
        VariantGates::DARK
    } else {
        VariantGates::DIRECTION
    }
}

fn media_query(variant: &str, theme: &Theme, gates: VariantGates) -> Option<String> {
    if let Some(width) = theme.screen(variant) {
        return gates
            .contains(VariantGates::RESPONSIVE)
            .then(|| format!("@media (min-width: {width})"));
    }
    let (gate, query) = match variant {
        "print" => (VariantGates::PRINT, "@media print"),
        "motion-safe" => (
            VariantGates::MOTION,
            "@media (prefers-reduced-motion: no-preference)",
        ),
        "motion-reduce" => (
            VariantGates::MOTION,
            "@media (prefers-reduced-motion: reduce)",
        ),
        "contrast-more" => (VariantGates::CONTRAST, "@media (prefers-contrast: more)"),
        "contrast-less" => (VariantGates::CONTRAST, "@media (prefers-contrast: less)"),
        _ => return None,
    };
    gates.contains(gate).then(|| query.to_string())
}

/// Escapes a class name for use in a selector.
///
/// Every ASCII character outside `[A-Za-z0-9_-]` is backslash-escaped;
/// non-ASCII characters pass through.
pub fn escape_class(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii() && !c.is_ascii_alphanumeric() && c != '-' && c != '_' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Computes the selector and media bucket for a parsed class.
///
/// Unknown variants are ignored. Variants whose family is gated off
/// contribute nothing but do not stop later variants from resolving.
pub fn compose(token: &ParsedClass, theme: &Theme, gates: VariantGates) -> Placement {
    let mut suffixes = String::new();
    let mut prefix: Option<&'static str> = None;
    let mut media: Option<String> = None;

    for variant in &token.variants {
        if let Some(suffix) = SUFFIXES.get(variant.as_str()) {
            if gates.contains(VariantGates::PSEUDO) {
                suffixes.push_str(suffix);
            }
            continue;
        }
        if let Some(replacement) = PREFIXES.get(variant.as_str()) {
            if gates.contains(prefix_gate(variant)) {
                if let Some(previous) = prefix {
                    log::trace!("variant prefix {variant:?} replaces {previous:?}");
                }
                prefix = Some(replacement);
            }
            continue;
        }
        if media.is_none() {
            media = media_query(variant, theme, gates);
        }
    }

    let mut selector = String::new();
    if let Some(prefix) = prefix {
        selector.push_str(prefix);
    }
    selector.push('.');
    selector.push_str(&escape_class(&token.raw));
    selector.push_str(&suffixes);

    Placement { selector, media }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zephyr_parse::parse_class;

    fn place(class: &str) -> Placement {
        compose(&parse_class(class), &Theme::standard(), VariantGates::default())
    }

    #[test]
    fn plain_class_escapes_only() {
        assert_eq!(place("p-4").selector, ".p-4");
        assert_eq!(place("w-1/2").selector, ".w-1\\/2");
        assert_eq!(place("w-1.5").selector, ".w-1\\.5");
        assert_eq!(place("!p-4").selector, ".\\!p-4");
    }

    #[test]
    fn pseudo_suffixes_accumulate_in_order() {
        let placement = place("hover:bg-blue-500");
        assert_eq!(placement.selector, ".hover\\:bg-blue-500:hover");
        assert_eq!(placement.media, None);

        let stacked = place("focus:hover:underline");
        assert_eq!(stacked.selector, ".focus\\:hover\\:underline:focus:hover");
    }

    #[test]
    fn responsive_variant_picks_media_bucket() {
        let placement = place("sm:flex");
        assert_eq!(placement.selector, ".sm\\:flex");
        assert_eq!(placement.media.as_deref(), Some("@media (min-width: 640px)"));
    }

    #[test]
    fn first_media_variant_wins() {
        let placement = place("sm:print:block");
        assert_eq!(placement.media.as_deref(), Some("@media (min-width: 640px)"));

        let reversed = place("print:sm:block");
        assert_eq!(reversed.media.as_deref(), Some("@media print"));
    }

    #[test]
    fn prefix_slot_keeps_the_last_prefix() {
        let placement = place("dark:group-hover:underline");
        assert_eq!(
            placement.selector,
            ".group:hover .dark\\:group-hover\\:underline"
        );
    }

    #[test]
    fn gated_families_are_inert() {
        let gates = VariantGates::all() - VariantGates::RESPONSIVE;
        let token = parse_class("sm:print:block");
        let placement = compose(&token, &Theme::standard(), gates);
        assert_eq!(placement.media.as_deref(), Some("@media print"));

        let no_pseudo = VariantGates::all() - VariantGates::PSEUDO;
        let hover = compose(&parse_class("hover:underline"), &Theme::standard(), no_pseudo);
        assert_eq!(hover.selector, ".hover\\:underline");
    }

    #[test]
    fn direction_and_dark_prefixes() {
        assert_eq!(place("rtl:text-left").selector, "[dir=\"rtl\"] .rtl\\:text-left");
        assert_eq!(place("dark:bg-gray-800").selector, ".dark .dark\\:bg-gray-800");
    }
}
