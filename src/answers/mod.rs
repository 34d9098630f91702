//! Answer and option sets
//!
//! The option set is fixed for a whole invocation: it comes from an options
//! file (a stored profile or defaults) overlaid with `--set` flags. The answer
//! set is built fresh for every wizard run, one question at a time.

use crate::question::Question;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the options file looked up in the platform config directory
pub const OPTIONS_FILE: &str = "options.yaml";

/// Values resolved during a single wizard run, keyed by answer name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: BTreeMap<String, String>,
}

impl AnswerSet {
    /// Create an empty answer set
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an answer
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether an answer has been resolved
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Record an answer, replacing any previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The answers whose question is flagged for profile storage.
    ///
    /// Secrets (PAT, keys, passwords) are never flagged, so they never
    /// leave the run.
    pub fn storable(&self, questions: &[Question]) -> AnswerSet {
        let mut stored = AnswerSet::new();
        for q in questions.iter().filter(|q| q.store) {
            if let Some(value) = self.get(q.name) {
                stored.insert(q.name, value);
            }
        }
        stored
    }
}

impl FromIterator<(String, String)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Values supplied before the run starts. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionSet {
    values: BTreeMap<String, String>,
}

impl OptionSet {
    /// Create an empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for assembling options before a run
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Look up an option
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether an option was supplied
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Load options from a YAML or JSON file.
    ///
    /// Scalar values of any type are accepted and stored as strings, so
    /// `installDep: true` and `installDep: "true"` mean the same thing.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path.extension().is_some_and(|e| e == "json");

        let raw: BTreeMap<String, serde_yaml::Value> = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        let mut values = BTreeMap::new();
        for (key, value) in raw {
            let text = match value {
                serde_yaml::Value::Null => continue,
                serde_yaml::Value::Bool(b) => b.to_string(),
                serde_yaml::Value::Number(n) => n.to_string(),
                serde_yaml::Value::String(s) => s,
                _ => {
                    return Err(Error::InvalidOption(format!(
                        "{key} in {} must be a scalar",
                        path.display()
                    )));
                }
            };
            values.insert(key, text);
        }

        debug!("Loaded {} option(s) from {:?}", values.len(), path);
        Ok(Self { values })
    }

    /// Overlay `key=value` pairs on top of these options
    pub fn merge_pairs<S: AsRef<str>>(mut self, pairs: &[S]) -> Result<Self> {
        for pair in pairs {
            let (key, value) = parse_pair(pair.as_ref())?;
            self.values.insert(key.to_string(), value.to_string());
        }
        Ok(self)
    }
}

/// Split a `key=value` flag
pub fn parse_pair(pair: &str) -> Result<(&str, &str)> {
    match pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(Error::InvalidOption(format!(
            "expected key=value, got '{pair}'"
        ))),
    }
}

/// Default options file in the platform config directory, if one exists
pub fn default_options_path() -> Option<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "pipewiz")?;
    let path = dirs.config_dir().join(OPTIONS_FILE);
    path.exists().then_some(path)
}

/// Load an answer file (YAML or JSON) into an answer set
pub fn load_answers(path: &Path) -> Result<AnswerSet> {
    let options = OptionSet::load(path)?;
    Ok(options.values.into_iter().collect())
}
