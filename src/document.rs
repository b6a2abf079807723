use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::block::Block;
use crate::converter::{ConvertError, Converter};

#[derive(Debug, Error)]
pub enum RuleSourceError {
    #[error("Failed to read rule file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse rule file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// A named rule whose description is an HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rule {
    pub name: String,
    pub markup: String,
}

impl Rule {
    pub fn new(name: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markup: markup.into(),
        }
    }
}

/// Rules for one document, as stored on disk:
///
/// ```toml
/// [[rules]]
/// name = "SQL queries should not be built from user input"
/// markup = "<p>...</p>"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl RuleSet {
    pub fn load(path: &Path) -> Result<Self, RuleSourceError> {
        let content = fs::read_to_string(path).map_err(|source| RuleSourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let set: RuleSet = toml::from_str(&content).map_err(|source| RuleSourceError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("loaded {} rules from {}", set.rules.len(), path.display());
        Ok(set)
    }

    pub fn sort_by_name(&mut self) {
        self.rules.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

/// A recoverable conversion problem, attributed to the rule it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub rule: String,
    pub error: ConvertError,
}

/// The converted body of one document.
#[derive(Debug, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
    pub issues: Vec<Issue>,
}

impl Document {
    /// Convert rules in the order given: a title per rule, then its blocks.
    ///
    /// Problems in one rule are recorded and never stop the rest.
    pub fn from_rules(rules: &[Rule]) -> Self {
        let mut converter = Converter::new();
        let mut issues = Vec::new();

        for rule in rules {
            converter.push_title(&rule.name);
            for error in converter.convert_markup(&rule.markup) {
                warn!("rule {:?}: {error}", rule.name);
                issues.push(Issue {
                    rule: rule.name.clone(),
                    error,
                });
            }
        }

        info!(
            "converted {} rules into {} blocks ({} issues)",
            rules.len(),
            converter.blocks().len(),
            issues.len()
        );

        Document {
            blocks: converter.into_blocks(),
            issues,
        }
    }
}
