//! Layout utilities: aspect ratio, container, columns, floats, overflow,
//! positioning offsets, and z-index.

use zephyr_parse::ParsedClass;

use super::RuleOutput;
use crate::theme::Theme;
use crate::value;

pub(super) fn resolve(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    let value = token.value.as_deref();
    match token.utility.as_str() {
        "aspect" => aspect(token, value?),
        "container" if value.is_none() => Some(container(token, theme)),
        "columns" => columns(token, value?),
        "break" => word_break(value?),
        "break-before" | "break-inside" | "break-after" => {
            page_break(&token.utility, value?)
        }
        "float" => keyword(value?, &["left", "right", "none"], "float"),
        "clear" => keyword(value?, &["left", "right", "both", "none"], "clear"),
        "inset" => Some(edges(&["top", "right", "bottom", "left"], theme, value?)),
        "inset-x" => Some(edges(&["left", "right"], theme, value?)),
        "inset-y" => Some(edges(&["top", "bottom"], theme, value?)),
        "top" | "right" | "bottom" | "left" => {
            Some(RuleOutput::single(&token.utility, value::spacing(theme, value?)))
        }
        "z" => z_index(value?),
        "overflow" | "overflow-x" | "overflow-y" => {
            keyword(value?, &["auto", "hidden", "visible", "scroll", "clip"], &token.utility)
        }
        "overscroll" => overscroll("overscroll-behavior", value?),
        "overscroll-x" => overscroll("overscroll-behavior-x", value?),
        "overscroll-y" => overscroll("overscroll-behavior-y", value?),
        _ => object(token, theme),
    }
}

fn aspect(token: &ParsedClass, value: &str) -> Option<RuleOutput> {
    let ratio = match value {
        _ if token.arbitrary => value,
        "auto" => "auto",
        "square" => "1 / 1",
        "video" => "16 / 9",
        _ => return None,
    };
    Some(RuleOutput::single("aspect-ratio", ratio))
}

/// `container` is the one rule that reads the variant chain: under a
/// breakpoint variant it caps its width at that breakpoint.
fn container(token: &ParsedClass, theme: &Theme) -> RuleOutput {
    let mut output = RuleOutput::single("width", "100%");
    if let Some(width) = token.variants.iter().find_map(|v| theme.screen(v)) {
        output.push("max-width", width);
    }
    output
}

fn columns(token: &ParsedClass, value: &str) -> Option<RuleOutput> {
    if token.arbitrary || value == "auto" || value.bytes().all(|b| b.is_ascii_digit()) {
        return Some(RuleOutput::single("columns", value));
    }
    None
}

fn word_break(value: &str) -> Option<RuleOutput> {
    match value {
        "normal" => Some(RuleOutput::fixed(&[
            ("overflow-wrap", "normal"),
            ("word-break", "normal"),
        ])),
        "words" => Some(RuleOutput::single("overflow-wrap", "break-word")),
        "all" => Some(RuleOutput::single("word-break", "break-all")),
        _ => None,
    }
}

fn page_break(utility: &str, value: &str) -> Option<RuleOutput> {
    let allowed = [
        "auto",
        "avoid",
        "all",
        "avoid-page",
        "page",
        "left",
        "right",
        "column",
    ];
    // break-inside accepts a narrower set.
    let inside = ["auto", "avoid", "avoid-page", "avoid-column"];
    let ok = if utility == "break-inside" {
        inside.contains(&value)
    } else {
        allowed.contains(&value)
    };
    ok.then(|| RuleOutput::single(utility, value))
}

fn z_index(value: &str) -> Option<RuleOutput> {
    let digits = value.strip_prefix('-').unwrap_or(value);
    if value == "auto" || (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())) {
        return Some(RuleOutput::single("z-index", value));
    }
    None
}

fn overscroll(property: &str, value: &str) -> Option<RuleOutput> {
    keyword(value, &["auto", "contain", "none"], property)
}

fn edges(sides: &[&str], theme: &Theme, value: &str) -> RuleOutput {
    let resolved = value::spacing(theme, value);
    let mut output = RuleOutput::new();
    for side in sides {
        output.push(side, resolved.clone());
    }
    output
}

fn keyword(value: &str, allowed: &[&str], property: &str) -> Option<RuleOutput> {
    allowed
        .contains(&value)
        .then(|| RuleOutput::single(property, value))
}

/// `object-*` spans two properties, so it keys off the rejoined tail.
fn object(token: &ParsedClass, _theme: &Theme) -> Option<RuleOutput> {
    let rest = token.tail("object")?;
    if token.arbitrary {
        return Some(RuleOutput::single("object-position", rest));
    }
    match rest.as_str() {
        "contain" | "cover" | "fill" | "none" | "scale-down" => {
            Some(RuleOutput::single("object-fit", rest))
        }
        "top" | "bottom" | "center" | "left" | "right" | "left-top" | "left-bottom"
        | "right-top" | "right-bottom" => {
            Some(RuleOutput::single("object-position", rest.replace('-', " ")))
        }
        _ => None,
    }
}
