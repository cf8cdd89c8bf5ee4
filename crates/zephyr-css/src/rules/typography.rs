//! Typography utilities.
//!
//! The `text-*` family is the classic overloaded namespace: alignment
//! keywords, font sizes, and colors all live under one prefix and are told
//! apart by what the fragment resolves against, in that order.

use phf::phf_map;
use zephyr_parse::ParsedClass;

use super::RuleOutput;
use crate::theme::Theme;
use crate::value;

static FONT_WEIGHTS: phf::Map<&'static str, &'static str> = phf_map! {
    "thin" => "100",
    "extralight" => "200",
    "light" => "300",
    "normal" => "400",
    "medium" => "500",
    "semibold" => "600",
    "bold" => "700",
    "extrabold" => "800",
    "black" => "900",
};

static LINE_HEIGHTS: phf::Map<&'static str, &'static str> = phf_map! {
    "none" => "1",
    "tight" => "1.25",
    "snug" => "1.375",
    "normal" => "1.5",
    "relaxed" => "1.625",
    "loose" => "2",
};

static LETTER_SPACINGS: phf::Map<&'static str, &'static str> = phf_map! {
    "tighter" => "-0.05em",
    "tight" => "-0.025em",
    "normal" => "0em",
    "wide" => "0.025em",
    "wider" => "0.05em",
    "widest" => "0.1em",
};

pub(super) fn resolve(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    match token.key() {
        "font" => font(token, theme),
        "text" => text(token, theme),
        "placeholder" => placeholder(token, theme),
        "leading" => leading(token, theme),
        "tracking" => tracking(token),
        "whitespace" => whitespace(token),
        "indent" => Some(RuleOutput::single(
            "text-indent",
            value::spacing(theme, &token.tail("indent")?),
        )),
        "align" => vertical_align(token),
        "list" => list(token),
        _ => None,
    }
}

fn font(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    let rest = token.tail("font")?;
    if token.arbitrary {
        return Some(RuleOutput::single("font-family", rest));
    }
    if let Some(stack) = theme.font_family.get(&rest) {
        return Some(RuleOutput::single("font-family", stack.join(", ")));
    }
    FONT_WEIGHTS
        .get(rest.as_str())
        .map(|weight| RuleOutput::single("font-weight", *weight))
}

fn text(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    let rest = token.tail("text")?;
    if token.arbitrary {
        if value::looks_like_color(&rest) {
            return Some(RuleOutput::single("color", rest));
        }
        return Some(RuleOutput::single("font-size", rest));
    }
    if matches!(
        rest.as_str(),
        "left" | "center" | "right" | "justify" | "start" | "end"
    ) {
        return Some(RuleOutput::single("text-align", rest));
    }
    if let Some(size) = theme.font_size.get(&rest) {
        let mut output = RuleOutput::single("font-size", size.size.clone());
        if let Some(line_height) = &size.line_height {
            output.push("line-height", line_height.clone());
        }
        return Some(output);
    }
    value::color(theme, &rest).map(|color| RuleOutput::single("color", color))
}

fn placeholder(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    let rest = token.tail("placeholder")?;
    let color = if token.arbitrary {
        value::looks_like_color(&rest).then_some(rest)?
    } else {
        value::color(theme, &rest)?
    };
    Some(RuleOutput::single("color", color).with_child("::placeholder"))
}

fn leading(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    let rest = token.tail("leading")?;
    if token.arbitrary {
        return Some(RuleOutput::single("line-height", rest));
    }
    if let Some(fixed) = LINE_HEIGHTS.get(rest.as_str()) {
        return Some(RuleOutput::single("line-height", *fixed));
    }
    Some(RuleOutput::single("line-height", value::spacing(theme, &rest)))
}

fn tracking(token: &ParsedClass) -> Option<RuleOutput> {
    let rest = token.tail("tracking")?;
    if token.arbitrary {
        return Some(RuleOutput::single("letter-spacing", rest));
    }
    LETTER_SPACINGS
        .get(rest.as_str())
        .map(|spacing| RuleOutput::single("letter-spacing", *spacing))
}

fn whitespace(token: &ParsedClass) -> Option<RuleOutput> {
    let rest = token.tail("whitespace")?;
    matches!(
        rest.as_str(),
        "normal" | "nowrap" | "pre" | "pre-line" | "pre-wrap"
    )
    .then(|| RuleOutput::single("white-space", rest))
}

fn vertical_align(token: &ParsedClass) -> Option<RuleOutput> {
    let rest = token.tail("align")?;
    matches!(
        rest.as_str(),
        "baseline" | "top" | "middle" | "bottom" | "text-top" | "text-bottom" | "sub" | "super"
    )
    .then(|| RuleOutput::single("vertical-align", rest))
}

fn list(token: &ParsedClass) -> Option<RuleOutput> {
    let rest = token.tail("list")?;
    match rest.as_str() {
        "none" | "disc" | "decimal" => Some(RuleOutput::single("list-style-type", rest)),
        "inside" | "outside" => Some(RuleOutput::single("list-style-position", rest)),
        _ => None,
    }
}
