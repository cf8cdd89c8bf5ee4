//! # Zephyr Parse - Utility Class Lexer
//!
//! The front end of the zephyr engine: turns utility class names like
//! `sm:hover:bg-blue-500/50` into structured tokens, expands the compact
//! grouped notation (`p[2 4]`), and extracts candidate names from source
//! content.
//!
//! Parsing is total and deterministic. A malformed name still yields a
//! token; deciding whether that token means anything is the rule table's
//! job, one crate up.
//!
//! ## Quick Start
//!
//! ```rust
//! use zephyr_parse::{parse_class, Parser};
//!
//! let token = parse_class("!sm:hover:bg-blue-500/50");
//! assert!(token.important);
//! assert_eq!(token.variants, vec!["sm", "hover"]);
//! assert_eq!(token.utility, "bg");
//! assert_eq!(token.value.as_deref(), Some("blue-500/50"));
//!
//! // Sessions memoize: repeated names parse once.
//! let parser = Parser::new();
//! assert_eq!(parser.parse("p-4"), parser.parse("p-4"));
//! ```
//!
//! ## Modules
//!
//! - [`token`] - the [`ParsedClass`] shape
//! - [`parser`] - the lexer and the caching [`Parser`] session
//! - [`tables`] - static whole-name / compound-prefix / color tables
//! - [`expand`] - grouped and colon notation expansion
//! - [`extract`] - `class` attribute scanning and grammar validation

pub mod expand;
pub mod extract;
pub mod parser;
pub mod tables;
pub mod token;

pub use expand::Expander;
pub use extract::{extract_classes, is_valid_class, split_class_list};
pub use parser::{parse_class, Parser};
pub use token::ParsedClass;
