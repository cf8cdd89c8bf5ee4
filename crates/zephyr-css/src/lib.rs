//! # Zephyr CSS - Utility Class Rule Engine
//!
//! This crate turns utility class names into CSS. Parsed classes are
//! matched against a built-in rule table bound to a theme, variants become
//! selectors and media buckets, and everything accumulates in an ordered
//! stylesheet that serializes pretty or minified.
//!
//! ## Quick Start
//!
//! ```rust
//! use zephyr_css::{Config, Generator};
//!
//! let mut generator = Generator::new(Config::new()).unwrap();
//! generator.generate_all(["flex", "p-4", "bg-gray-500"]).unwrap();
//!
//! let css = generator.to_css(false, true);
//! assert_eq!(
//!     css,
//!     ".flex{display:flex}.p-4{padding:1rem}.bg-gray-500{background-color:#6b7280}"
//! );
//! ```
//!
//! ## Supported Features
//!
//! - The core utility families: layout, flexbox, grid, spacing, sizing,
//!   typography, backgrounds, borders, effects, transforms, interactivity
//! - Variant chains (`sm:hover:bg-blue-500`) with pseudo, ancestor,
//!   direction, and media variants
//! - `!` important markers, negative values, fractions, alpha modifiers,
//!   and arbitrary values/properties in square brackets
//! - Theme overlays with presets, shortcuts, custom regex rules, safelist
//!   and blocklist, and pluggable preflights
//!
//! ## Modules
//!
//! - [`config`]: Configuration, presets, custom rules, variant gates
//! - [`error`]: Error types
//! - [`generator`]: The generation session
//! - [`preflight`]: Raw CSS prepended to output
//! - [`rules`]: The built-in rule table
//! - [`sheet`]: Ordered accumulation and serialization
//! - [`theme`]: Theme tables and merging
//! - [`variants`]: Selector composition

pub mod config;
pub mod error;
pub mod generator;
mod palette;
pub mod preflight;
pub mod rules;
pub mod sheet;
pub mod theme;
mod value;
pub mod variants;

pub use config::{Config, CustomRule, Preset, ResolvedConfig, RuleHandler, Shortcut, VariantGates};
pub use error::ZephyrError;
pub use generator::Generator;
pub use preflight::{Preflight, StaticPreflight};
pub use rules::RuleOutput;
pub use sheet::{CssRule, StyleSheet};
pub use theme::{ColorValue, FontSize, Theme};
pub use variants::{compose, escape_class, Placement};
