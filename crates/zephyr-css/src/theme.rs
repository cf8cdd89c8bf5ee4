//! Theme tables consulted during value resolution.
//!
//! A [`Theme`] is a set of plain lookup maps. Rules resolve class-name
//! fragments against these maps and fall back to the literal fragment when a
//! lookup misses, so a theme never needs to be exhaustive.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::palette;

/// A named color: either a single value or a map of shades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorValue {
    /// One value, used for colors like `white` or `transparent`.
    Single(String),
    /// Shade keys (`"50"` through `"900"`) mapped to values.
    Shades(HashMap<String, String>),
}

impl ColorValue {
    /// Builds a shaded color from `(shade, value)` pairs.
    pub fn shades<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self::Shades(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

/// A font size together with the line height it is paired with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSize {
    pub size: String,
    pub line_height: Option<String>,
}

impl FontSize {
    pub fn new(size: impl Into<String>, line_height: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            line_height: Some(line_height.into()),
        }
    }

    /// A size with no paired line height.
    pub fn bare(size: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            line_height: None,
        }
    }
}

/// The lookup tables a rule set is bound to.
///
/// An empty `Theme` is a valid overlay; [`Theme::merge`] folds one theme
/// over another, which is how user configuration, presets, and the built-in
/// defaults are combined.
///
/// # Examples
///
/// ```rust
/// use zephyr_css::{ColorValue, Theme};
///
/// let mut theme = Theme::standard();
/// let mut overlay = Theme::default();
/// overlay
///     .colors
///     .insert("brand".into(), ColorValue::shades([("500", "#123456")]));
/// theme.merge(overlay);
///
/// assert_eq!(theme.color("brand-500"), Some("#123456".to_string()));
/// assert_eq!(theme.color("blue-500"), Some("#3b82f6".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    pub colors: HashMap<String, ColorValue>,
    pub spacing: HashMap<String, String>,
    pub font_size: HashMap<String, FontSize>,
    pub font_family: HashMap<String, Vec<String>>,
    pub screens: HashMap<String, String>,
    pub border_radius: HashMap<String, String>,
    pub box_shadow: HashMap<String, String>,
}

impl Theme {
    /// The built-in default theme.
    pub fn standard() -> Self {
        DEFAULT_THEME.clone()
    }

    /// Resolves a color token such as `blue-500` or `white`.
    ///
    /// A token that names a single color resolves directly. Otherwise the
    /// token is split at its last dash into a family and a shade, so custom
    /// family names may themselves contain dashes.
    pub fn color(&self, token: &str) -> Option<String> {
        if let Some(ColorValue::Single(value)) = self.colors.get(token) {
            return Some(value.clone());
        }
        let (family, shade) = token.rsplit_once('-')?;
        match self.colors.get(family)? {
            ColorValue::Shades(shades) => shades.get(shade).cloned(),
            ColorValue::Single(_) => None,
        }
    }

    /// Resolves a breakpoint name to its minimum width.
    pub fn screen(&self, name: &str) -> Option<&str> {
        self.screens.get(name).map(String::as_str)
    }

    /// Folds `overlay` over this theme.
    ///
    /// Shaded colors merge shade-by-shade; every other value replaces the
    /// entry under the same key.
    pub fn merge(&mut self, overlay: Theme) {
        for (name, value) in overlay.colors {
            match (self.colors.get_mut(&name), value) {
                (Some(ColorValue::Shades(existing)), ColorValue::Shades(incoming)) => {
                    existing.extend(incoming);
                }
                (_, value) => {
                    self.colors.insert(name, value);
                }
            }
        }
        self.spacing.extend(overlay.spacing);
        self.font_size.extend(overlay.font_size);
        self.font_family.extend(overlay.font_family);
        self.screens.extend(overlay.screens);
        self.border_radius.extend(overlay.border_radius);
        self.box_shadow.extend(overlay.box_shadow);
    }
}

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(|| {
    let mut colors = HashMap::new();
    for (name, value) in palette::SINGLE_COLORS {
        colors.insert(name.to_string(), ColorValue::Single(value.to_string()));
    }
    for (family, shades) in palette::COLOR_FAMILIES {
        colors.insert(family.to_string(), ColorValue::shades(shades.iter().copied()));
    }

    let spacing = to_map(palette::SPACING);

    let mut font_size = HashMap::new();
    for (key, size, line_height) in palette::FONT_SIZES {
        font_size.insert(key.to_string(), FontSize::new(*size, *line_height));
    }

    let mut font_family = HashMap::new();
    for (key, stack) in palette::FONT_FAMILIES {
        font_family.insert(
            key.to_string(),
            stack.iter().map(|name| name.to_string()).collect(),
        );
    }

    Theme {
        colors,
        spacing,
        font_size,
        font_family,
        screens: to_map(palette::SCREENS),
        border_radius: to_map(palette::BORDER_RADIUS),
        box_shadow: to_map(palette::BOX_SHADOWS),
    }
});

fn to_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
