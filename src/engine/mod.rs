//! Engine - Walks a flow's questions in order and resolves the answers
//!
//! Questions are evaluated strictly one at a time. Each visibility rule sees
//! every answer resolved before it, carry-forwards included, and nothing
//! after it. Collecting input and fetching remote lists happen behind the
//! [`Prompter`] and [`ChoiceProvider`] traits.

use crate::question::{Choice, ChoiceSource, InputKind, Question, RemoteList, Visibility};
use crate::{AnswerSet, Error, OptionSet, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Everything a prompter needs to ask one question
#[derive(Debug, Clone)]
pub struct PromptRequest<'a> {
    pub question: &'a Question,
    /// Rendered prompt text
    pub message: String,
    pub default: Option<String>,
    /// Empty for free-text questions, or when a remote list was unavailable
    pub choices: Vec<Choice>,
}

/// Collects raw input for a visible question
pub trait Prompter {
    /// Return the raw value for the question.
    ///
    /// Returning an error ends the run; this is how an exhausted or aborted
    /// prompter stops the re-ask loop.
    fn ask(&mut self, request: &PromptRequest<'_>) -> Result<String>;

    /// Called when the last value was rejected, before asking again
    fn rejected(&mut self, question: &Question, error: &Error) {
        let _ = (question, error);
    }
}

/// Fetches lists that live on a remote service
pub trait ChoiceProvider {
    fn fetch(
        &self,
        list: RemoteList,
        answers: &AnswerSet,
        options: &OptionSet,
    ) -> Result<Vec<Choice>>;
}

/// Provider with no remote access. Remote list questions fall back to free text.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineChoices;

impl ChoiceProvider for OfflineChoices {
    fn fetch(&self, list: RemoteList, _: &AnswerSet, _: &OptionSet) -> Result<Vec<Choice>> {
        Err(Error::ProviderUnavailable(list.to_string()))
    }
}

/// Answers every question from a pre-filled answer set.
///
/// Used for non-interactive runs. A visible question with no entry fails
/// with [`Error::MissingAnswer`]; a rejected value is not retried.
#[derive(Debug, Clone)]
pub struct AnswerFile {
    answers: AnswerSet,
    /// Fall back to the question's default when no entry exists
    pub use_defaults: bool,
    last_rejected: Option<String>,
}

impl AnswerFile {
    pub fn new(answers: AnswerSet) -> Self {
        Self {
            answers,
            use_defaults: false,
            last_rejected: None,
        }
    }

    pub fn with_defaults(mut self) -> Self {
        self.use_defaults = true;
        self
    }
}

impl Prompter for AnswerFile {
    fn ask(&mut self, request: &PromptRequest<'_>) -> Result<String> {
        let name = request.question.name;
        if let Some(message) = self.last_rejected.take() {
            return Err(Error::Validation(format!("{name}: {message}")));
        }
        if let Some(value) = self.answers.get(name) {
            return Ok(value.to_string());
        }
        if self.use_defaults {
            if let Some(default) = &request.default {
                return Ok(default.clone());
            }
        }
        Err(Error::MissingAnswer(name.to_string()))
    }

    fn rejected(&mut self, _: &Question, error: &Error) {
        self.last_rejected = Some(match error {
            Error::Validation(message) => message.clone(),
            other => other.to_string(),
        });
    }
}

/// One row of a dry run
#[derive(Debug, Clone, Serialize)]
pub struct PlanStep {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: InputKind,
    pub visibility: Visibility,
}

/// Sequential evaluator over an ordered list of questions
pub struct Wizard {
    questions: Vec<Question>,
    options: OptionSet,
}

impl Wizard {
    /// Create a wizard over questions in evaluation order
    pub fn new(questions: Vec<Question>, options: OptionSet) -> Self {
        Self { questions, options }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Decide visibility for every question without asking anything.
    ///
    /// Carry-forwards are applied to a working copy of `answers` so later
    /// rules see them. Prompted questions stay unanswered.
    pub fn plan(&self, answers: &AnswerSet) -> Vec<PlanStep> {
        let mut working = answers.clone();
        let mut steps = Vec::with_capacity(self.questions.len());

        for question in &self.questions {
            let visibility = question.visibility(&working, &self.options);
            if let Visibility::CarryForward(value) = &visibility {
                working.insert(question.name, value.clone());
            }
            debug!("{} -> {:?}", question.id, visibility);
            steps.push(PlanStep {
                id: question.id,
                name: question.name,
                kind: question.kind,
                visibility,
            });
        }

        steps
    }

    /// Resolve every visible question, starting from an empty answer set
    pub fn run(
        &self,
        prompter: &mut dyn Prompter,
        provider: &dyn ChoiceProvider,
    ) -> Result<AnswerSet> {
        self.resume(AnswerSet::new(), prompter, provider)
    }

    /// Resolve every visible question on top of answers already collected
    pub fn resume(
        &self,
        mut answers: AnswerSet,
        prompter: &mut dyn Prompter,
        provider: &dyn ChoiceProvider,
    ) -> Result<AnswerSet> {
        for question in &self.questions {
            match question.visibility(&answers, &self.options) {
                Visibility::Skip => {
                    debug!("Skipping {}", question.id);
                }
                Visibility::CarryForward(value) => {
                    debug!("Carrying {} forward from options", question.name);
                    answers.insert(question.name, value);
                }
                Visibility::Prompt => {
                    let value = self.ask(question, &answers, prompter, provider)?;
                    answers.insert(question.name, value);
                }
            }
        }

        Ok(answers)
    }

    fn ask(
        &self,
        question: &Question,
        answers: &AnswerSet,
        prompter: &mut dyn Prompter,
        provider: &dyn ChoiceProvider,
    ) -> Result<String> {
        let choices = self.choices(question, answers, provider)?;
        let request = PromptRequest {
            question,
            message: question.message.render(answers, &self.options),
            default: question.default.and_then(|d| d.resolve(answers, &self.options)),
            choices,
        };

        loop {
            let raw = prompter.ask(&request)?;
            match accept(&request, &raw) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("Rejected value for {}: {}", question.id, e);
                    prompter.rejected(question, &e);
                }
            }
        }
    }

    fn choices(
        &self,
        question: &Question,
        answers: &AnswerSet,
        provider: &dyn ChoiceProvider,
    ) -> Result<Vec<Choice>> {
        match question.choices {
            None => Ok(Vec::new()),
            Some(ChoiceSource::Static(f)) => Ok(f(answers, &self.options)),
            Some(ChoiceSource::Remote(list)) => {
                info!("Getting {}...", list);
                match provider.fetch(list, answers, &self.options) {
                    Ok(choices) => Ok(choices),
                    Err(Error::ProviderUnavailable(reason)) => {
                        warn!("Could not list {}: {}; accepting free text", list, reason);
                        Ok(Vec::new())
                    }
                    Err(e) => Err(e),
                }
            }
        }
    }
}

/// Filter, validate, and check list membership for one raw value
fn accept(request: &PromptRequest<'_>, raw: &str) -> Result<String> {
    let value = request.question.check(raw)?;
    if request.question.kind == InputKind::List
        && !request.choices.is_empty()
        && !request.choices.iter().any(|c| c.value == value)
    {
        return Err(Error::InvalidChoice {
            question: request.question.id.to_string(),
            value,
        });
    }
    Ok(value)
}
