//! Question - The descriptor record a prompting engine consumes
//!
//! A question is plain data plus a few function pointers. Nothing here keeps
//! state: defaults, messages and visibility are all computed from the answer
//! and option sets passed in.

pub mod rules;
pub mod validate;

use crate::{AnswerSet, OptionSet, Result};
use serde::{Deserialize, Serialize};

/// Visibility rule: decides whether a question is asked
pub type WhenFn = fn(&AnswerSet, &OptionSet) -> Visibility;

/// Validator: `Err(Error::Validation)` means ask again
pub type ValidateFn = fn(&str) -> Result<()>;

/// Normalizes raw input before it is validated and stored
pub type FilterFn = fn(&str) -> String;

/// How the engine should collect the value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Single line of free text
    Input,
    /// Masked secret
    Password,
    /// One value from a list of choices
    List,
}

/// Outcome of a visibility rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", content = "value", rename_all = "snake_case")]
pub enum Visibility {
    /// Not applicable, or already answered
    Skip,
    /// Supplied as an option: copy into the answers, don't ask
    CarryForward(String),
    /// Ask the user
    Prompt,
}

impl Visibility {
    pub fn is_prompt(&self) -> bool {
        matches!(self, Visibility::Prompt)
    }
}

/// Prompt text shown to the user
#[derive(Clone, Copy)]
pub enum Message {
    Static(&'static str),
    Computed(fn(&AnswerSet, &OptionSet) -> String),
}

impl Message {
    pub fn render(&self, answers: &AnswerSet, options: &OptionSet) -> String {
        match self {
            Message::Static(text) => (*text).to_string(),
            Message::Computed(f) => f(answers, options),
        }
    }
}

/// Default value offered to the user
#[derive(Clone, Copy)]
pub enum DefaultValue {
    Literal(&'static str),
    Computed(fn(&AnswerSet, &OptionSet) -> Option<String>),
}

impl DefaultValue {
    pub fn resolve(&self, answers: &AnswerSet, options: &OptionSet) -> Option<String> {
        match self {
            DefaultValue::Literal(value) => Some((*value).to_string()),
            DefaultValue::Computed(f) => f(answers, options),
        }
    }
}

/// One entry of a list question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// What the user sees
    pub name: String,
    /// What ends up in the answers
    pub value: String,
}

impl Choice {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Lists that must be fetched from a remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteList {
    /// Build agent queues on the server
    AgentQueues,
    /// Azure subscriptions visible to the account
    AzureSubscriptions,
}

impl std::fmt::Display for RemoteList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteList::AgentQueues => write!(f, "agent queues"),
            RemoteList::AzureSubscriptions => write!(f, "Azure subscriptions"),
        }
    }
}

/// Where a list question gets its choices
#[derive(Clone, Copy)]
pub enum ChoiceSource {
    /// Computed locally from the answers so far
    Static(fn(&AnswerSet, &OptionSet) -> Vec<Choice>),
    /// Fetched through a [`crate::ChoiceProvider`]
    Remote(RemoteList),
}

/// A question descriptor
#[derive(Clone)]
pub struct Question {
    /// Catalog key, unique across the catalog
    pub id: &'static str,
    /// Answer key. Two descriptors may write the same answer.
    pub name: &'static str,
    pub kind: InputKind,
    pub message: Message,
    pub default: Option<DefaultValue>,
    pub choices: Option<ChoiceSource>,
    pub validate: Option<ValidateFn>,
    pub filter: Option<FilterFn>,
    /// Persist the resolved value into the profile store
    pub store: bool,
    pub when: WhenFn,
}

impl Question {
    /// Start a descriptor; the remaining fields are filled in with the builders
    pub fn new(id: &'static str, name: &'static str, kind: InputKind, when: WhenFn) -> Self {
        Self {
            id,
            name,
            kind,
            message: Message::Static(""),
            default: None,
            choices: None,
            validate: None,
            filter: None,
            store: false,
            when,
        }
    }

    pub fn message(mut self, text: &'static str) -> Self {
        self.message = Message::Static(text);
        self
    }

    pub fn message_fn(mut self, f: fn(&AnswerSet, &OptionSet) -> String) -> Self {
        self.message = Message::Computed(f);
        self
    }

    pub fn default_value(mut self, value: &'static str) -> Self {
        self.default = Some(DefaultValue::Literal(value));
        self
    }

    pub fn default_fn(mut self, f: fn(&AnswerSet, &OptionSet) -> Option<String>) -> Self {
        self.default = Some(DefaultValue::Computed(f));
        self
    }

    pub fn choices(mut self, f: fn(&AnswerSet, &OptionSet) -> Vec<Choice>) -> Self {
        self.choices = Some(ChoiceSource::Static(f));
        self
    }

    pub fn remote_choices(mut self, list: RemoteList) -> Self {
        self.choices = Some(ChoiceSource::Remote(list));
        self
    }

    pub fn validate(mut self, f: ValidateFn) -> Self {
        self.validate = Some(f);
        self
    }

    pub fn filter(mut self, f: FilterFn) -> Self {
        self.filter = Some(f);
        self
    }

    pub fn store(mut self) -> Self {
        self.store = true;
        self
    }

    /// Evaluate the visibility rule.
    ///
    /// A carried-forward value goes through the filter, so an option lands in
    /// the answers in the same shape as typed input.
    pub fn visibility(&self, answers: &AnswerSet, options: &OptionSet) -> Visibility {
        match (self.when)(answers, options) {
            Visibility::CarryForward(raw) => {
                let value = self.normalize(&raw);
                if answers.get(self.name) == Some(value.as_str()) {
                    Visibility::Skip
                } else {
                    Visibility::CarryForward(value)
                }
            }
            other => other,
        }
    }

    /// Apply the filter, if any
    pub fn normalize(&self, raw: &str) -> String {
        match self.filter {
            Some(filter) => filter(raw),
            None => raw.to_string(),
        }
    }

    /// Apply the filter and validator to raw input
    pub fn check(&self, raw: &str) -> Result<String> {
        let value = self.normalize(raw);
        if let Some(validate) = self.validate {
            validate(&value)?;
        }
        Ok(value)
    }
}

impl std::fmt::Debug for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Question")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

/// Shared prelude of every visibility rule.
///
/// An option always wins and is carried into the answers; an answer that is
/// already present is never asked again. `None` means the question is still
/// open and the caller's gate decides.
pub fn settled(name: &str, answers: &AnswerSet, options: &OptionSet) -> Option<Visibility> {
    if let Some(value) = options.get(name) {
        if answers.get(name) == Some(value) {
            return Some(Visibility::Skip);
        }
        return Some(Visibility::CarryForward(value.to_string()));
    }
    if answers.contains(name) {
        return Some(Visibility::Skip);
    }
    None
}

/// Turn a gate into a visibility for an open question
pub fn gate(open: bool) -> Visibility {
    if open {
        Visibility::Prompt
    } else {
        Visibility::Skip
    }
}
