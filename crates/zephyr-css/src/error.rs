//! Error types for CSS generation.
//!
//! The generation pipeline is deliberately forgiving: unknown classes,
//! missing theme entries, and blocked names all degrade silently. Only
//! configuration mistakes are surfaced as errors.

use thiserror::Error;

/// Errors that can occur while configuring or running a [`crate::Generator`].
///
/// # Examples
///
/// ```rust
/// use zephyr_css::{Config, Generator, Shortcut, ZephyrError};
///
/// let config = Config::new()
///     .with_shortcut("a", Shortcut::inline("b"))
///     .with_shortcut("b", Shortcut::inline("a"));
/// let mut generator = Generator::new(config).unwrap();
///
/// let result = generator.generate("a");
/// assert!(matches!(result, Err(ZephyrError::ShortcutCycle { .. })));
/// ```
#[derive(Error, Debug)]
pub enum ZephyrError {
    /// A shortcut expansion re-entered a name that is still being expanded.
    ///
    /// The chain lists the shortcut names in the order they were entered,
    /// ending with the name that closed the cycle.
    #[error("shortcut cycle while expanding {name:?}: {}", chain.join(" -> "))]
    ShortcutCycle { name: String, chain: Vec<String> },

    /// A custom rule pattern matched a class name but its handler
    /// produced no declarations.
    #[error("custom rule {pattern:?} matched {class:?} but produced no output")]
    CustomRuleNoOutput { class: String, pattern: String },

    /// A custom rule or blocklist entry contained an invalid pattern.
    #[error("invalid rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
