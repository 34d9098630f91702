//! Pipewiz - Question catalog for a CI/CD project scaffolding wizard
//!
//! This library provides the declarative questions a scaffolding wizard asks
//! before generating a project, and the rules that decide which of them
//! apply given the answers collected so far and the options supplied up front.
//!
//! ## Core Concepts
//!
//! - **Question**: A passive descriptor - name, input kind, default, choices,
//!   validator and a visibility rule
//! - **Option Set**: Values supplied on the command line or from a stored
//!   profile; never prompted for
//! - **Answer Set**: Values resolved during a single run, built in question order
//! - **Visibility**: What a question's rule decides - prompt, skip, or carry an
//!   option forward into the answers
//!
//! ## Flows
//!
//! - **Profile**: add, list or delete a server profile
//! - **App**: the full project scaffold
//! - **Git / Azure / Docker / K8s**: the narrower sub-generators

pub mod answers;
pub mod catalog;
pub mod cli;
pub mod engine;
pub mod question;

pub use answers::{AnswerSet, OptionSet};
pub use catalog::{Flow, QuestionId};
pub use engine::{AnswerFile, ChoiceProvider, OfflineChoices, PlanStep, Prompter, Wizard};
pub use question::{Choice, ChoiceSource, DefaultValue, InputKind, Message, Question, Visibility};

/// Result type for pipewiz operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pipewiz operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Unknown flow: {0}. Use profile, app, git, azure, docker, or k8s.")]
    UnknownFlow(String),

    #[error("No answer supplied for '{0}'")]
    MissingAnswer(String),

    #[error("'{value}' is not a valid choice for '{question}'")]
    InvalidChoice { question: String, value: String },

    #[error("Choice provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),
}
