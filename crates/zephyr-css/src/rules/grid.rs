//! Grid utilities: template tracks, spans, flow, and auto sizing.

use zephyr_parse::ParsedClass;

use super::RuleOutput;

pub(super) fn resolve(token: &ParsedClass) -> Option<RuleOutput> {
    let value = token.value.as_deref();
    match token.utility.as_str() {
        "grid-cols" => tracks(token, value?, "grid-template-columns"),
        "grid-rows" => tracks(token, value?, "grid-template-rows"),
        "grid-flow" => flow(value?),
        "col" if value == Some("auto") => Some(RuleOutput::single("grid-column", "auto")),
        "row" if value == Some("auto") => Some(RuleOutput::single("grid-row", "auto")),
        "col-span" => span(value?, "grid-column"),
        "row-span" => span(value?, "grid-row"),
        "col-start" => line(value?, "grid-column-start"),
        "col-end" => line(value?, "grid-column-end"),
        "row-start" => line(value?, "grid-row-start"),
        "row-end" => line(value?, "grid-row-end"),
        "auto-cols" => auto_tracks(token, value?, "grid-auto-columns"),
        "auto-rows" => auto_tracks(token, value?, "grid-auto-rows"),
        _ => None,
    }
}

fn tracks(token: &ParsedClass, value: &str, property: &str) -> Option<RuleOutput> {
    if token.arbitrary {
        return Some(RuleOutput::single(property, value));
    }
    if value == "none" {
        return Some(RuleOutput::single(property, "none"));
    }
    let count: u32 = value.parse().ok()?;
    Some(RuleOutput::single(
        property,
        format!("repeat({count}, minmax(0, 1fr))"),
    ))
}

fn flow(value: &str) -> Option<RuleOutput> {
    let resolved = match value {
        "row" => "row",
        "col" => "column",
        "row-dense" => "row dense",
        "col-dense" => "column dense",
        _ => return None,
    };
    Some(RuleOutput::single("grid-auto-flow", resolved))
}

fn span(value: &str, property: &str) -> Option<RuleOutput> {
    if value == "full" {
        return Some(RuleOutput::single(property, "1 / -1"));
    }
    let count: u32 = value.parse().ok()?;
    Some(RuleOutput::single(property, format!("span {count} / span {count}")))
}

fn line(value: &str, property: &str) -> Option<RuleOutput> {
    if value == "auto" {
        return Some(RuleOutput::single(property, "auto"));
    }
    let signed = value.strip_prefix('-').unwrap_or(value);
    if signed.is_empty() || !signed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(RuleOutput::single(property, value))
}

fn auto_tracks(token: &ParsedClass, value: &str, property: &str) -> Option<RuleOutput> {
    let resolved = match value {
        _ if token.arbitrary => value,
        "auto" => "auto",
        "min" => "min-content",
        "max" => "max-content",
        "fr" => "minmax(0, 1fr)",
        _ => return None,
    };
    Some(RuleOutput::single(property, resolved))
}
