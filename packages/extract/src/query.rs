//! Query programs.
//!
//! A query program tells the [`SelectorEngine`](crate::selector::SelectorEngine)
//! how to turn an HTML page into the element stream the receivers expect.
//! Programs are TOML documents made of nested `[[element]]` rules:
//!
//! ```toml
//! [[element]]
//! name = "temperature"
//! selector = ".section.higher .temp"
//!
//! [[element]]
//! name = "forecast"
//! selector = ".wsection .wdata tr"
//!
//!   [[element.element]]
//!   name = "icon"
//!   selector = "img.png"
//!   attribute = "src"
//!   capture = '([^/]+)\.png$'
//! ```
//!
//! Rules run in program order. For every node a rule matches, the engine
//! emits `enter(name)`, then either the nested rules (scoped to the node)
//! or a single text value, then `exit`.

use std::path::Path;

use serde::Deserialize;

use crate::QueryError;

/// A parsed query program.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryProgram {
    /// Top-level rules in evaluation order.
    #[serde(default, rename = "element")]
    pub elements: Vec<ElementRule>,
}

/// One rule of a [`QueryProgram`].
#[derive(Debug, Clone, Deserialize)]
pub struct ElementRule {
    /// Element name emitted for each match.
    pub name: String,
    /// CSS selector, evaluated relative to the enclosing match.
    pub selector: String,
    /// Take the text value from this attribute instead of the node text.
    #[serde(default)]
    pub attribute: Option<String>,
    /// Narrow the text value to the first capture group of this regex.
    /// Nodes whose value does not match emit no text.
    #[serde(default)]
    pub capture: Option<String>,
    /// Nested rules. A rule with children emits no text of its own.
    #[serde(default, rename = "element")]
    pub children: Vec<ElementRule>,
}

impl QueryProgram {
    /// Parses a program from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Toml`] if the source is not valid TOML and
    /// [`QueryError::Program`] if the program has no rules or a rule has an
    /// empty name or selector.
    pub fn parse(source: &str) -> Result<Self, QueryError> {
        let program: Self = toml::from_str(source)?;
        if program.elements.is_empty() {
            return Err(QueryError::Program("query program has no rules".to_owned()));
        }
        validate_rules(&program.elements)?;
        Ok(program)
    }

    /// Reads and parses a program file.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Io`] if the file cannot be read, otherwise the
    /// errors of [`QueryProgram::parse`].
    pub fn load(path: &Path) -> Result<Self, QueryError> {
        log::debug!("Loading query program {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::parse(&source)
    }
}

fn validate_rules(rules: &[ElementRule]) -> Result<(), QueryError> {
    for rule in rules {
        if rule.name.trim().is_empty() {
            return Err(QueryError::Program(format!(
                "rule with selector '{}' has an empty name",
                rule.selector
            )));
        }
        if rule.selector.trim().is_empty() {
            return Err(QueryError::Program(format!(
                "rule '{}' has an empty selector",
                rule.name
            )));
        }
        validate_rules(&rule.children)?;
    }
    Ok(())
}
