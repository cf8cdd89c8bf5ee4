//! The generation session.
//!
//! A [`Generator`] owns a parser with its memo cache, a resolved
//! configuration, the accumulating stylesheet, and the set of class names
//! it has already processed. Feeding it the same class twice is free and
//! changes nothing, which is what makes interleaved scanning of many
//! sources deterministic.

use std::collections::HashMap;

use zephyr_parse::{extract_classes, ParsedClass, Parser};

use crate::config::{Config, ResolvedConfig};
use crate::error::ZephyrError;
use crate::rules::{self, RuleOutput};
use crate::sheet::StyleSheet;
use crate::theme::Theme;
use crate::variants;

pub struct Generator {
    parser: Parser,
    config: ResolvedConfig,
    sheet: StyleSheet,
    /// Classes already processed, mapped to whether they produced CSS.
    seen: HashMap<String, bool>,
}

impl Generator {
    /// Builds the configuration and seeds the safelist.
    pub fn new(config: Config) -> Result<Self, ZephyrError> {
        Self::from_resolved(config.build()?)
    }

    pub fn from_resolved(config: ResolvedConfig) -> Result<Self, ZephyrError> {
        let mut generator = Self {
            parser: Parser::new(),
            config,
            sheet: StyleSheet::new(),
            seen: HashMap::new(),
        };
        generator.apply_safelist()?;
        Ok(generator)
    }

    /// Feeds every safelist entry through generation as a literal
    /// candidate. Entries that match nothing are silently skipped, like any
    /// other unknown class.
    pub fn apply_safelist(&mut self) -> Result<usize, ZephyrError> {
        let entries = self.config.safelist.clone();
        let mut count = 0;
        for entry in &entries {
            if self.generate(entry)? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Processes one class name.
    ///
    /// Returns whether the class produces CSS. Repeated calls with the
    /// same name are no-ops that return the original answer.
    pub fn generate(&mut self, class: &str) -> Result<bool, ZephyrError> {
        let mut active = Vec::new();
        self.generate_inner(class, &mut active)
    }

    /// Processes a batch, returning how many classes produced CSS.
    pub fn generate_all<'a>(
        &mut self,
        classes: impl IntoIterator<Item = &'a str>,
    ) -> Result<usize, ZephyrError> {
        let mut count = 0;
        for class in classes {
            if self.generate(class)? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Extracts class candidates from markup-like source text and
    /// processes them all.
    pub fn scan(&mut self, source: &str) -> Result<usize, ZephyrError> {
        let classes = extract_classes(source);
        self.generate_all(classes.iter().map(String::as_str))
    }

    fn generate_inner(&mut self, class: &str, active: &mut Vec<String>) -> Result<bool, ZephyrError> {
        if let Some(expanded) = self.config.expander.expand(class) {
            let mut any = false;
            for item in expanded {
                any |= self.generate_inner(&item, active)?;
            }
            return Ok(any);
        }

        if active.iter().any(|name| name == class) {
            let mut chain = active.clone();
            chain.push(class.to_string());
            return Err(ZephyrError::ShortcutCycle {
                name: class.to_string(),
                chain,
            });
        }

        if let Some(known) = self.seen.get(class) {
            return Ok(*known);
        }

        if self.config.is_blocked(class) {
            log::debug!("blocked class {class:?}");
            self.seen.insert(class.to_string(), false);
            return Ok(false);
        }

        let token = self.parser.parse(class);

        let mut custom: Option<Result<RuleOutput, ZephyrError>> = None;
        for rule in &self.config.rules {
            if let Some(captures) = rule.pattern.captures(class) {
                custom = Some(match (rule.handler)(&captures) {
                    Some(output) => Ok(output),
                    None => Err(ZephyrError::CustomRuleNoOutput {
                        class: class.to_string(),
                        pattern: rule.pattern.as_str().to_string(),
                    }),
                });
                break;
            }
        }
        if let Some(result) = custom {
            let output = result?;
            self.emit(&token, output);
            self.seen.insert(class.to_string(), true);
            return Ok(true);
        }

        if let Some(shortcut) = self.config.shortcuts.get(class) {
            let items: Vec<String> = shortcut
                .classes()
                .into_iter()
                .map(str::to_string)
                .collect();
            active.push(class.to_string());
            let mut any = false;
            for item in &items {
                any |= self.generate_inner(item, active)?;
            }
            active.pop();
            self.seen.insert(class.to_string(), any);
            return Ok(any);
        }

        if let Some(output) = rules::evaluate(&token, &self.config.theme) {
            self.emit(&token, output);
            self.seen.insert(class.to_string(), true);
            return Ok(true);
        }

        log::debug!("no rule matched {class:?}");
        self.seen.insert(class.to_string(), false);
        Ok(false)
    }

    fn emit(&mut self, token: &ParsedClass, output: RuleOutput) {
        let mut properties = output.properties;
        if token.important {
            for (_, value) in &mut properties {
                value.push_str(" !important");
            }
        }
        let placement = variants::compose(token, &self.config.theme, self.config.variants);
        log::trace!(
            "{:?} -> {} declaration(s) at {:?}",
            token.raw,
            properties.len(),
            placement.selector
        );
        self.sheet.record(
            &placement.selector,
            properties,
            placement.media.as_deref(),
            output.child_selector.as_deref(),
        );
    }

    /// Serializes everything generated so far.
    pub fn to_css(&self, include_preflight: bool, minify: bool) -> String {
        self.sheet
            .serialize(&self.config.preflights, include_preflight, minify)
    }

    /// Class names processed so far, in no particular order.
    pub fn seen(&self) -> impl Iterator<Item = &str> {
        self.seen.keys().map(String::as_str)
    }

    pub fn was_seen(&self, class: &str) -> bool {
        self.seen.contains_key(class)
    }

    /// Clears the accumulated CSS and the seen set.
    ///
    /// The parse cache survives a reset. Safelist entries are applied at
    /// construction, so call [`Generator::apply_safelist`] again if they
    /// should reappear.
    pub fn reset(&mut self) {
        self.sheet.reset();
        self.seen.clear();
    }

    pub fn theme(&self) -> &Theme {
        &self.config.theme
    }

    pub fn sheet(&self) -> &StyleSheet {
        &self.sheet
    }
}
