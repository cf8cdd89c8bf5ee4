//! # Zephyr - A Utility-First CSS Engine
//!
//! Zephyr generates CSS on demand from utility class names. Feed it the
//! class strings that appear in your markup and it produces exactly the
//! rules they need, merged, ordered, and ready to serve.
//!
//! The work happens in two crates re-exported here:
//!
//! - `zephyr-parse` lexes class names (`!sm:hover:bg-blue-500/50`) into
//!   structured tokens and extracts candidates from source text
//! - `zephyr-css` resolves tokens against a themed rule table and
//!   assembles the resulting stylesheet
//!
//! ## Quick Start
//!
//! ```rust
//! use zephyr::{Config, Generator, Shortcut};
//!
//! let config = Config::new()
//!     .with_shortcut("btn", Shortcut::inline("px-4 py-2 rounded"));
//! let mut generator = Generator::new(config).unwrap();
//!
//! generator.generate_all(["btn", "hover:bg-blue-500", "sm:flex"]).unwrap();
//! let css = generator.to_css(false, false);
//!
//! assert!(css.contains(".hover\\:bg-blue-500:hover"));
//! assert!(css.contains("@media (min-width: 640px)"));
//! ```

pub use zephyr_css::{
    compose, escape_class, ColorValue, Config, CssRule, CustomRule, FontSize, Generator,
    Placement, Preflight, Preset, ResolvedConfig, RuleHandler, RuleOutput, Shortcut,
    StaticPreflight, StyleSheet, Theme, VariantGates, ZephyrError,
};
pub use zephyr_parse::{
    extract_classes, is_valid_class, parse_class, split_class_list, Expander, ParsedClass, Parser,
};
