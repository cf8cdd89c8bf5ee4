//! Generator configuration.
//!
//! [`Config`] is the user-facing surface: theme overlays, presets, custom
//! rules, shortcuts, variant gates, safelist, blocklist, and preflights.
//! [`Config::build`] folds it into a [`ResolvedConfig`], the immutable form
//! a [`crate::Generator`] runs against.

use std::collections::HashMap;

use bitflags::bitflags;
use regex::{Captures, Regex};
use zephyr_parse::Expander;

use crate::error::ZephyrError;
use crate::preflight::{Preflight, StaticPreflight};
use crate::rules::RuleOutput;
use crate::theme::Theme;

bitflags! {
    /// Which variant families the composer is allowed to translate.
    ///
    /// A disabled family makes its variants inert: they are still parsed
    /// and still participate in the selector-independent parts of the
    /// pipeline, but contribute no selector or media output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zephyr_css::VariantGates;
    ///
    /// let gates = VariantGates::default();
    /// assert!(gates.contains(VariantGates::RESPONSIVE));
    ///
    /// let no_dark = VariantGates::all() - VariantGates::DARK;
    /// assert!(!no_dark.contains(VariantGates::DARK));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct VariantGates: u16 {
        /// Pseudo-class and pseudo-element suffixes such as `hover` and `before`.
        const PSEUDO = 1 << 0;
        /// `group-*` ancestor variants.
        const GROUP = 1 << 1;
        /// `peer-*` sibling variants.
        const PEER = 1 << 2;
        /// The `dark` ancestor variant.
        const DARK = 1 << 3;
        /// `rtl` and `ltr` direction variants.
        const DIRECTION = 1 << 4;
        /// Breakpoint variants from the theme's screens table.
        const RESPONSIVE = 1 << 5;
        /// The `print` media variant.
        const PRINT = 1 << 6;
        /// `motion-safe` and `motion-reduce` media variants.
        const MOTION = 1 << 7;
        /// `contrast-more` and `contrast-less` media variants.
        const CONTRAST = 1 << 8;
    }
}

impl Default for VariantGates {
    fn default() -> Self {
        Self::all()
    }
}

/// The handler side of a [`CustomRule`].
pub type RuleHandler = Box<dyn Fn(&Captures<'_>) -> Option<RuleOutput> + Send + Sync>;

/// A user-defined rule matched against the raw class name.
///
/// Custom rules run before the built-in table, in declaration order, so
/// they can override built-in utilities outright.
pub struct CustomRule {
    pub(crate) pattern: Regex,
    pub(crate) handler: RuleHandler,
}

impl CustomRule {
    /// Compiles `pattern` and pairs it with `handler`.
    ///
    /// The handler receives the capture groups of the match and returns the
    /// declarations to emit. Returning `None` is reported as
    /// [`ZephyrError::CustomRuleNoOutput`] rather than ignored, since a
    /// matching pattern that emits nothing is a configuration bug.
    pub fn new(
        pattern: &str,
        handler: impl Fn(&Captures<'_>) -> Option<RuleOutput> + Send + Sync + 'static,
    ) -> Result<Self, ZephyrError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            handler: Box::new(handler),
        })
    }
}

impl std::fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomRule")
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

/// A shortcut expansion: one name standing for several utilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortcut {
    /// A whitespace-separated class string, e.g. `"px-4 py-2 rounded"`.
    Inline(String),
    /// An explicit list of class names.
    List(Vec<String>),
}

impl Shortcut {
    pub fn inline(classes: impl Into<String>) -> Self {
        Self::Inline(classes.into())
    }

    pub fn list<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(classes.into_iter().map(Into::into).collect())
    }

    /// The constituent class names, in order.
    pub fn classes(&self) -> Vec<&str> {
        match self {
            Self::Inline(raw) => raw.split_whitespace().collect(),
            Self::List(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

/// A reusable bundle of theme values layered beneath user configuration.
#[derive(Debug, Clone, Default)]
pub struct Preset {
    pub name: String,
    pub theme: Theme,
}

impl Preset {
    pub fn new(name: impl Into<String>, theme: Theme) -> Self {
        Self {
            name: name.into(),
            theme,
        }
    }
}

/// User-facing configuration for a [`crate::Generator`].
pub struct Config {
    /// Theme values folded over presets and the built-in defaults.
    pub theme: Theme,
    /// Presets, applied in order beneath [`Config::theme`].
    pub presets: Vec<Preset>,
    /// Custom rules, consulted before the built-in table.
    pub rules: Vec<CustomRule>,
    /// Shortcut names mapped to their expansions.
    pub shortcuts: HashMap<String, Shortcut>,
    /// Variant families the composer may translate.
    pub variants: VariantGates,
    /// Class names generated unconditionally at construction time.
    pub safelist: Vec<String>,
    /// Class names that never produce output. A single `*` acts as a
    /// wildcard.
    pub blocklist: Vec<String>,
    /// Extra preflights appended after the base preflight.
    pub preflights: Vec<Box<dyn Preflight>>,
    /// Whether the built-in reset/keyframes preflight is included.
    pub base_preflight: bool,
    /// Whether `utility[a b c]` grouped notation is expanded.
    pub expand_bracket_groups: bool,
    /// Whether `prefix:term` colon notation is expanded.
    pub expand_colon_groups: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            presets: Vec::new(),
            rules: Vec::new(),
            shortcuts: HashMap::new(),
            variants: VariantGates::default(),
            safelist: Vec::new(),
            blocklist: Vec::new(),
            preflights: Vec::new(),
            base_preflight: true,
            expand_bracket_groups: false,
            expand_colon_groups: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.presets.push(preset);
        self
    }

    pub fn with_rule(mut self, rule: CustomRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_shortcut(mut self, name: impl Into<String>, shortcut: Shortcut) -> Self {
        self.shortcuts.insert(name.into(), shortcut);
        self
    }

    pub fn with_variants(mut self, gates: VariantGates) -> Self {
        self.variants = gates;
        self
    }

    pub fn with_safelist<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.safelist.extend(classes.into_iter().map(Into::into));
        self
    }

    pub fn with_blocklist<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocklist.extend(classes.into_iter().map(Into::into));
        self
    }

    pub fn with_preflight(mut self, preflight: impl Preflight + 'static) -> Self {
        self.preflights.push(Box::new(preflight));
        self
    }

    pub fn without_base_preflight(mut self) -> Self {
        self.base_preflight = false;
        self
    }

    pub fn with_group_expansion(mut self) -> Self {
        self.expand_bracket_groups = true;
        self.expand_colon_groups = true;
        self
    }

    /// Resolves this configuration into its runtime form.
    ///
    /// Theme layering happens here: built-in defaults, then presets in
    /// order, then [`Config::theme`] on top. Blocklist globs are compiled
    /// and invalid ones are rejected.
    pub fn build(self) -> Result<ResolvedConfig, ZephyrError> {
        let mut theme = Theme::standard();
        for preset in self.presets {
            log::debug!("applying preset {:?}", preset.name);
            theme.merge(preset.theme);
        }
        theme.merge(self.theme);

        let blocklist = self
            .blocklist
            .into_iter()
            .map(BlockPattern::compile)
            .collect::<Result<Vec<_>, _>>()?;

        let mut preflights: Vec<Box<dyn Preflight>> = Vec::new();
        if self.base_preflight {
            preflights.push(Box::new(StaticPreflight::base()));
        }
        preflights.extend(self.preflights);

        Ok(ResolvedConfig {
            theme,
            rules: self.rules,
            shortcuts: self.shortcuts,
            variants: self.variants,
            safelist: self.safelist,
            blocklist,
            preflights,
            expander: Expander::new(self.expand_bracket_groups, self.expand_colon_groups),
        })
    }
}

/// A compiled blocklist entry.
#[derive(Debug)]
enum BlockPattern {
    Exact(String),
    Glob(Regex),
}

impl BlockPattern {
    fn compile(entry: String) -> Result<Self, ZephyrError> {
        if entry.contains('*') {
            let pattern = format!("^{}$", regex::escape(&entry).replace("\\*", ".*"));
            Ok(Self::Glob(Regex::new(&pattern)?))
        } else {
            Ok(Self::Exact(entry))
        }
    }

    fn matches(&self, class: &str) -> bool {
        match self {
            Self::Exact(name) => name == class,
            Self::Glob(pattern) => pattern.is_match(class),
        }
    }
}

/// The immutable runtime form of a [`Config`].
pub struct ResolvedConfig {
    pub(crate) theme: Theme,
    pub(crate) rules: Vec<CustomRule>,
    pub(crate) shortcuts: HashMap<String, Shortcut>,
    pub(crate) variants: VariantGates,
    pub(crate) safelist: Vec<String>,
    blocklist: Vec<BlockPattern>,
    pub(crate) preflights: Vec<Box<dyn Preflight>>,
    pub(crate) expander: Expander,
}

impl ResolvedConfig {
    /// Whether a class name is suppressed by the blocklist.
    pub fn is_blocked(&self, class: &str) -> bool {
        self.blocklist.iter().any(|pattern| pattern.matches(class))
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocklist_matches_exact_and_glob() {
        let config = Config::new()
            .with_blocklist(["float-left", "bg-red-*"])
            .build()
            .unwrap();

        assert!(config.is_blocked("float-left"));
        assert!(config.is_blocked("bg-red-500"));
        assert!(!config.is_blocked("float-right"));
        assert!(!config.is_blocked("bg-reddish"));
        assert!(!config.is_blocked("xbg-red-500"));
    }

    #[test]
    fn glob_compilation_escapes_regex_metacharacters() {
        let config = Config::new().with_blocklist(["w-1/2", "p-*"]).build().unwrap();
        assert!(config.is_blocked("w-1/2"));
        assert!(config.is_blocked("p-anything"));
        assert!(!config.is_blocked("w-102"));
    }

    #[test]
    fn presets_layer_beneath_user_theme() {
        let mut preset_theme = Theme::default();
        preset_theme.screens.insert("sm".into(), "500px".into());
        preset_theme.screens.insert("md".into(), "700px".into());

        let mut user_theme = Theme::default();
        user_theme.screens.insert("sm".into(), "600px".into());

        let config = Config::new()
            .with_preset(Preset::new("narrow", preset_theme))
            .with_theme(user_theme)
            .build()
            .unwrap();

        assert_eq!(config.theme().screen("sm"), Some("600px"));
        assert_eq!(config.theme().screen("md"), Some("700px"));
        assert_eq!(config.theme().screen("lg"), Some("1024px"));
    }

    #[test]
    fn shortcut_classes_split_inline_strings() {
        let inline = Shortcut::inline("px-4  py-2\trounded");
        assert_eq!(inline.classes(), vec!["px-4", "py-2", "rounded"]);

        let list = Shortcut::list(["flex", "items-center"]);
        assert_eq!(list.classes(), vec!["flex", "items-center"]);
    }
}
