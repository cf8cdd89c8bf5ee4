//! The built-in rule table.
//!
//! Matching happens in three tiers. Arbitrary-property classes short-circuit
//! first. Classes with no value part are looked up in a static table of
//! fixed declarations. Everything else dispatches on the first segment of
//! the utility name to a domain module, which inspects the full token.
//!
//! A rule that does not recognize its input returns `None` and the class
//! silently produces no CSS, matching the forgiving posture of the rest of
//! the pipeline.

mod advanced;
mod background;
mod border;
mod effects;
mod flexbox;
mod grid;
mod interactivity;
mod layout;
mod sizing;
mod spacing;
mod transform;
mod typography;

use phf::phf_map;
use zephyr_parse::ParsedClass;

use crate::theme::Theme;

/// Declarations produced by a matched rule, plus an optional child selector
/// the declarations apply to instead of the class element itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleOutput {
    pub properties: Vec<(String, String)>,
    pub child_selector: Option<String>,
}

impl RuleOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single declaration.
    pub fn single(property: &str, value: impl Into<String>) -> Self {
        Self {
            properties: vec![(property.to_string(), value.into())],
            child_selector: None,
        }
    }

    /// A fixed set of declarations.
    pub fn fixed(pairs: &[(&str, &str)]) -> Self {
        Self {
            properties: pairs
                .iter()
                .map(|(p, v)| (p.to_string(), v.to_string()))
                .collect(),
            child_selector: None,
        }
    }

    pub fn push(&mut self, property: &str, value: impl Into<String>) {
        self.properties.push((property.to_string(), value.into()));
    }

    /// Redirects the declarations to a child selector.
    pub fn with_child(mut self, child: impl Into<String>) -> Self {
        self.child_selector = Some(child.into());
        self
    }
}

/// Resolves a parsed class against the rule table.
pub fn evaluate(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    if let Some(output) = advanced::arbitrary_property(token) {
        return Some(output);
    }

    if token.value.is_none() && !token.arbitrary {
        if let Some(pairs) = STATIC_RULES.get(token.utility.as_str()) {
            return Some(RuleOutput::fixed(pairs));
        }
    }

    match token.key() {
        "aspect" | "container" | "columns" | "break" | "float" | "clear" | "object"
        | "overflow" | "overscroll" | "inset" | "top" | "right" | "bottom" | "left" | "z" => {
            layout::resolve(token, theme)
        }
        "flex" | "order" | "justify" | "items" | "self" | "content" | "place" | "gap" => {
            flexbox::resolve(token, theme)
        }
        "grid" | "col" | "row" | "auto" => grid::resolve(token),
        "p" | "px" | "py" | "pt" | "pr" | "pb" | "pl" | "m" | "mx" | "my" | "mt" | "mr"
        | "mb" | "ml" | "space" => spacing::resolve(token, theme),
        "w" | "h" | "min" | "max" => sizing::resolve(token, theme),
        "font" | "text" | "placeholder" | "leading" | "tracking" | "whitespace" | "indent"
        | "align" | "list" => typography::resolve(token, theme),
        "bg" => background::resolve(token, theme),
        "border" | "rounded" | "divide" | "ring" | "outline" => border::resolve(token, theme),
        "shadow" | "opacity" | "blur" | "brightness" | "contrast" | "grayscale" | "invert"
        | "saturate" | "sepia" | "drop" | "mix" | "transition" | "duration" | "delay"
        | "ease" | "animate" => effects::resolve(token, theme),
        "translate" | "rotate" | "scale" | "skew" | "origin" | "transform" => {
            transform::resolve(token, theme)
        }
        "cursor" | "select" | "pointer" | "resize" | "appearance" | "scroll" | "caret"
        | "accent" | "touch" | "will" => interactivity::resolve(token, theme),
        "fill" | "stroke" => advanced::resolve(token, theme),
        _ => None,
    }
}

/// Classes whose declarations are fixed and carry no value part.
static STATIC_RULES: phf::Map<&'static str, &'static [(&'static str, &'static str)]> = phf_map! {
    // Display.
    "block" => &[("display", "block")],
    "inline-block" => &[("display", "inline-block")],
    "inline" => &[("display", "inline")],
    "flex" => &[("display", "flex")],
    "inline-flex" => &[("display", "inline-flex")],
    "grid" => &[("display", "grid")],
    "inline-grid" => &[("display", "inline-grid")],
    "table" => &[("display", "table")],
    "inline-table" => &[("display", "inline-table")],
    "table-caption" => &[("display", "table-caption")],
    "table-cell" => &[("display", "table-cell")],
    "table-column" => &[("display", "table-column")],
    "table-column-group" => &[("display", "table-column-group")],
    "table-footer-group" => &[("display", "table-footer-group")],
    "table-header-group" => &[("display", "table-header-group")],
    "table-row" => &[("display", "table-row")],
    "table-row-group" => &[("display", "table-row-group")],
    "flow-root" => &[("display", "flow-root")],
    "contents" => &[("display", "contents")],
    "list-item" => &[("display", "list-item")],
    "hidden" => &[("display", "none")],

    // Position and visibility.
    "static" => &[("position", "static")],
    "fixed" => &[("position", "fixed")],
    "absolute" => &[("position", "absolute")],
    "relative" => &[("position", "relative")],
    "sticky" => &[("position", "sticky")],
    "visible" => &[("visibility", "visible")],
    "invisible" => &[("visibility", "hidden")],
    "collapse" => &[("visibility", "collapse")],
    "isolate" => &[("isolation", "isolate")],
    "isolation-auto" => &[("isolation", "auto")],

    // Flex shorthands.
    "flex-row" => &[("flex-direction", "row")],
    "flex-row-reverse" => &[("flex-direction", "row-reverse")],
    "flex-col" => &[("flex-direction", "column")],
    "flex-col-reverse" => &[("flex-direction", "column-reverse")],
    "flex-wrap" => &[("flex-wrap", "wrap")],
    "flex-wrap-reverse" => &[("flex-wrap", "wrap-reverse")],
    "flex-nowrap" => &[("flex-wrap", "nowrap")],
    "flex-grow" => &[("flex-grow", "1")],
    "flex-shrink" => &[("flex-shrink", "1")],

    // Box sizing.
    "box-border" => &[("box-sizing", "border-box")],
    "box-content" => &[("box-sizing", "content-box")],

    // Borders.
    "border" => &[("border-width", "1px")],

    // Typography.
    "italic" => &[("font-style", "italic")],
    "not-italic" => &[("font-style", "normal")],
    "underline" => &[("text-decoration", "underline")],
    "overline" => &[("text-decoration", "overline")],
    "line-through" => &[("text-decoration", "line-through")],
    "no-underline" => &[("text-decoration", "none")],
    "uppercase" => &[("text-transform", "uppercase")],
    "lowercase" => &[("text-transform", "lowercase")],
    "capitalize" => &[("text-transform", "capitalize")],
    "normal-case" => &[("text-transform", "none")],
    "antialiased" => &[
        ("-webkit-font-smoothing", "antialiased"),
        ("-moz-osx-font-smoothing", "grayscale"),
    ],
    "subpixel-antialiased" => &[
        ("-webkit-font-smoothing", "auto"),
        ("-moz-osx-font-smoothing", "auto"),
    ],
    "truncate" => &[
        ("overflow", "hidden"),
        ("text-overflow", "ellipsis"),
        ("white-space", "nowrap"),
    ],

    // Filters.
    "drop-shadow" => &[(
        "filter",
        "drop-shadow(0 1px 2px rgb(0 0 0 / 0.1)) drop-shadow(0 1px 1px rgb(0 0 0 / 0.06))",
    )],

    // Accessibility.
    "sr-only" => &[
        ("position", "absolute"),
        ("width", "1px"),
        ("height", "1px"),
        ("padding", "0"),
        ("margin", "-1px"),
        ("overflow", "hidden"),
        ("clip", "rect(0, 0, 0, 0)"),
        ("white-space", "nowrap"),
        ("border-width", "0"),
    ],
    "not-sr-only" => &[
        ("position", "static"),
        ("width", "auto"),
        ("height", "auto"),
        ("padding", "0"),
        ("margin", "0"),
        ("overflow", "visible"),
        ("clip", "auto"),
        ("white-space", "normal"),
    ],
};
