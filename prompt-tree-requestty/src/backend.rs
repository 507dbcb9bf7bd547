//! Requestty implementation of the prompt-tree collaborator traits.

use prompt_tree::{
    AnswerValue, Answers, Confirmer, LeafAsker, LeafQuestion, OutputSink, SurveyError, WidgetKind,
};
use requestty::{Answer, Question};
use thiserror::Error;
use tracing::debug;

/// Error type for the Requestty backend.
#[derive(Debug, Error)]
pub enum RequesttyError {
    /// User cancelled the survey (e.g., pressed Ctrl+C).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An error occurred during prompting.
    #[error("Prompt error: {0}")]
    PromptError(String),

    /// Unexpected answer type received.
    #[error("Unexpected answer type: expected {expected}, got {got}")]
    UnexpectedAnswerType { expected: String, got: String },
}

impl From<requestty::ErrorKind> for RequesttyError {
    fn from(err: requestty::ErrorKind) -> Self {
        match err {
            requestty::ErrorKind::Interrupted => Self::Cancelled,
            _ => Self::PromptError(err.to_string()),
        }
    }
}

impl From<RequesttyError> for SurveyError {
    fn from(err: RequesttyError) -> Self {
        match err {
            RequesttyError::Cancelled => SurveyError::Cancelled,
            other => SurveyError::backend(other),
        }
    }
}

/// Requestty backend for interactive CLI prompts.
///
/// This backend uses the `requestty` library to present questions
/// to the user in a command-line interface.
#[derive(Debug, Default, Clone)]
pub struct RequesttyBackend;

impl RequesttyBackend {
    /// Create a new Requestty backend.
    pub const fn new() -> Self {
        Self
    }

    fn ask_widget(
        &self,
        widget: WidgetKind,
        question: &LeafQuestion,
    ) -> Result<AnswerValue, RequesttyError> {
        let name = question.name.as_str();
        let message = question.message.as_str();
        let default = question.default.as_ref();

        let prompt = match widget {
            WidgetKind::Text | WidgetKind::Path => {
                let mut q = Question::input(name).message(message);
                if let Some(default) = default.and_then(AnswerValue::as_str) {
                    q = q.default(default);
                }
                q.build()
            }
            WidgetKind::Password => Question::password(name).message(message).mask('*').build(),
            WidgetKind::Editor => {
                let mut q = Question::editor(name).message(message);
                if let Some(default) = default.and_then(AnswerValue::as_str) {
                    q = q.default(default);
                }
                q.build()
            }
            WidgetKind::Confirm => Question::confirm(name)
                .message(message)
                .default(default.and_then(AnswerValue::as_bool).unwrap_or(true))
                .build(),
            WidgetKind::Int => {
                let mut q = Question::int(name).message(message);
                if let Some(default) = default.and_then(AnswerValue::as_int) {
                    q = q.default(default);
                }
                q.build()
            }
            WidgetKind::Float => {
                let mut q = Question::float(name).message(message);
                if let Some(default) = default.and_then(float_default) {
                    q = q.default(default);
                }
                q.build()
            }
            // No fuzzy picker in requestty, autocomplete falls back to a plain list
            WidgetKind::Select | WidgetKind::Autocomplete => {
                let mut q = Question::select(name)
                    .message(message)
                    .choices(question.choices.clone());
                if let Some(default) = question.default_choice() {
                    q = q.default(default);
                }
                q.build()
            }
            WidgetKind::RawSelect => {
                let mut q = Question::raw_select(name)
                    .message(message)
                    .choices(question.choices.clone());
                if let Some(default) = question.default_choice() {
                    q = q.default(default);
                }
                q.build()
            }
            WidgetKind::Checkbox => {
                let choices: Vec<(String, bool)> = question
                    .choices
                    .iter()
                    .cloned()
                    .zip(question.default_checked())
                    .collect();
                Question::multi_select(name)
                    .message(message)
                    .choices_with_default(choices)
                    .build()
            }
        };

        let answer = requestty::prompt_one(prompt)?;
        into_value(widget, answer)
    }
}

/// Convert a requestty answer into the value the widget promises.
fn into_value(widget: WidgetKind, answer: Answer) -> Result<AnswerValue, RequesttyError> {
    let value = match (widget, answer) {
        (_, Answer::String(s)) => AnswerValue::String(s),
        (WidgetKind::Int, Answer::Int(i)) => AnswerValue::Int(i),
        (WidgetKind::Float, Answer::Float(f)) => AnswerValue::Float(f),
        (WidgetKind::Confirm, Answer::Bool(b)) => AnswerValue::Bool(b),
        (_, Answer::ListItem(item)) => AnswerValue::String(item.text),
        (_, Answer::ListItems(items)) => AnswerValue::List(
            items
                .into_iter()
                .map(|item| AnswerValue::String(item.text))
                .collect(),
        ),
        (widget, other) => {
            return Err(RequesttyError::UnexpectedAnswerType {
                expected: widget.tag().to_string(),
                got: format!("{other:?}"),
            });
        }
    };
    Ok(value)
}

fn float_default(value: &AnswerValue) -> Option<f64> {
    value.as_float().or_else(|| value.as_int().map(|i| i as f64))
}

impl LeafAsker for RequesttyBackend {
    fn ask(
        &self,
        question: &LeafQuestion,
        answers: &Answers,
    ) -> Result<Option<AnswerValue>, SurveyError> {
        let widget = question.widget()?;
        if !question.is_visible(answers) {
            debug!(path = %question.path, "question hidden by its when predicate");
            return Ok(None);
        }

        let value = self.ask_widget(widget, question)?;
        Ok(Some(question.apply_filter(value)))
    }
}

impl Confirmer for RequesttyBackend {
    fn confirm(&self, message: &str) -> Result<bool, SurveyError> {
        let q = Question::confirm("continue")
            .message(message)
            .default(true)
            .build();

        match requestty::prompt_one(q).map_err(RequesttyError::from)? {
            Answer::Bool(b) => Ok(b),
            other => Err(RequesttyError::UnexpectedAnswerType {
                expected: "Bool".to_string(),
                got: format!("{other:?}"),
            }
            .into()),
        }
    }
}

impl OutputSink for RequesttyBackend {
    fn display(&self, message: &str, _style: Option<&str>) {
        println!("{message}");
    }
}
