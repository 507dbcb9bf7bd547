//! Dialoguer implementation of the prompt-tree collaborator traits.

use console::Style;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Editor, FuzzySelect, Input, MultiSelect, Password, Select};
use prompt_tree::{
    AnswerValue, Answers, Confirmer, LeafAsker, LeafQuestion, OutputSink, SurveyError, WidgetKind,
};
use thiserror::Error;
use tracing::debug;

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the survey (e.g., pressed Ctrl+C or Escape).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(dialoguer::Error),
}

impl From<dialoguer::Error> for DialoguerError {
    fn from(err: dialoguer::Error) -> Self {
        if is_cancelled(&err) {
            Self::Cancelled
        } else {
            Self::Dialoguer(err)
        }
    }
}

impl From<DialoguerError> for SurveyError {
    fn from(err: DialoguerError) -> Self {
        match err {
            DialoguerError::Cancelled => SurveyError::Cancelled,
            other => SurveyError::backend(other),
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

/// Dialoguer backend for interactive CLI prompts.
///
/// Asks ordinary questions, confirms repeats and prints display nodes in the
/// terminal, with a colorful theme by default.
#[derive(Debug, Default, Clone)]
pub struct DialoguerBackend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    fn ask_widget(
        &self,
        widget: WidgetKind,
        question: &LeafQuestion,
    ) -> Result<AnswerValue, DialoguerError> {
        let default = question.default.as_ref();
        match widget {
            WidgetKind::Text | WidgetKind::Path => {
                self.ask_text(&question.message, default.and_then(AnswerValue::as_str))
            }
            WidgetKind::Password => self.ask_password(&question.message),
            WidgetKind::Confirm => self.ask_confirm(
                &question.message,
                default.and_then(AnswerValue::as_bool).unwrap_or(true),
            ),
            WidgetKind::Int => {
                self.ask_int(&question.message, default.and_then(AnswerValue::as_int))
            }
            WidgetKind::Float => self.ask_float(&question.message, default.and_then(float_default)),
            WidgetKind::Editor => {
                self.ask_editor(&question.message, default.and_then(AnswerValue::as_str))
            }
            WidgetKind::Select => self.ask_select(question, false),
            WidgetKind::RawSelect => self.ask_select(question, true),
            WidgetKind::Autocomplete => self.ask_fuzzy(question),
            WidgetKind::Checkbox => self.ask_checkbox(question),
        }
    }

    fn ask_text(&self, prompt: &str, default: Option<&str>) -> Result<AnswerValue, DialoguerError> {
        let theme = self.theme();
        let mut builder = Input::<String>::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(default) = default {
            builder = builder.default(default.to_string());
        }
        Ok(AnswerValue::String(builder.interact_text()?))
    }

    fn ask_password(&self, prompt: &str) -> Result<AnswerValue, DialoguerError> {
        let theme = self.theme();
        let value = Password::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .interact()?;
        Ok(AnswerValue::String(value))
    }

    fn ask_confirm(&self, prompt: &str, default: bool) -> Result<AnswerValue, DialoguerError> {
        Ok(AnswerValue::Bool(self.confirm_with(prompt, default)?))
    }

    fn confirm_with(&self, prompt: &str, default: bool) -> Result<bool, DialoguerError> {
        let theme = self.theme();
        Ok(Confirm::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    fn ask_int(&self, prompt: &str, default: Option<i64>) -> Result<AnswerValue, DialoguerError> {
        let theme = self.theme();
        let mut builder = Input::<i64>::with_theme(theme.as_ref()).with_prompt(prompt);
        if let Some(default) = default {
            builder = builder.default(default);
        }
        Ok(AnswerValue::Int(builder.interact_text()?))
    }

    fn ask_float(&self, prompt: &str, default: Option<f64>) -> Result<AnswerValue, DialoguerError> {
        let theme = self.theme();
        let mut builder = Input::<f64>::with_theme(theme.as_ref()).with_prompt(prompt);
        if let Some(default) = default {
            builder = builder.default(default);
        }
        Ok(AnswerValue::Float(builder.interact_text()?))
    }

    fn ask_editor(
        &self,
        prompt: &str,
        default: Option<&str>,
    ) -> Result<AnswerValue, DialoguerError> {
        println!("{prompt}");

        // An aborted edit counts as an empty answer
        let text = Editor::new().edit(default.unwrap_or(""))?;
        Ok(AnswerValue::String(text.unwrap_or_default()))
    }

    fn ask_select(
        &self,
        question: &LeafQuestion,
        numbered: bool,
    ) -> Result<AnswerValue, DialoguerError> {
        let items: Vec<String> = if numbered {
            question
                .choices
                .iter()
                .enumerate()
                .map(|(i, choice)| format!("{}) {choice}", i + 1))
                .collect()
        } else {
            question.choices.clone()
        };

        let theme = self.theme();
        let mut builder = Select::with_theme(theme.as_ref())
            .with_prompt(&question.message)
            .items(&items);
        if let Some(default) = question.default_choice() {
            builder = builder.default(default);
        }
        let index = builder.interact()?;
        Ok(chosen(question, index))
    }

    fn ask_fuzzy(&self, question: &LeafQuestion) -> Result<AnswerValue, DialoguerError> {
        let theme = self.theme();
        let mut builder = FuzzySelect::with_theme(theme.as_ref())
            .with_prompt(&question.message)
            .items(&question.choices);
        if let Some(default) = question.default_choice() {
            builder = builder.default(default);
        }
        let index = builder.interact()?;
        Ok(chosen(question, index))
    }

    fn ask_checkbox(&self, question: &LeafQuestion) -> Result<AnswerValue, DialoguerError> {
        let defaults = question.default_checked();
        let theme = self.theme();
        let indices = MultiSelect::with_theme(theme.as_ref())
            .with_prompt(&question.message)
            .items(&question.choices)
            .defaults(&defaults)
            .interact()?;

        Ok(AnswerValue::List(
            indices
                .into_iter()
                .map(|index| chosen(question, index))
                .collect(),
        ))
    }
}

fn chosen(question: &LeafQuestion, index: usize) -> AnswerValue {
    question
        .choices
        .get(index)
        .cloned()
        .map_or(AnswerValue::None, AnswerValue::String)
}

fn float_default(value: &AnswerValue) -> Option<f64> {
    value.as_float().or_else(|| value.as_int().map(|i| i as f64))
}

impl LeafAsker for DialoguerBackend {
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

impl Confirmer for DialoguerBackend {
    fn confirm(&self, message: &str) -> Result<bool, SurveyError> {
        Ok(self.confirm_with(message, true)?)
    }
}

impl OutputSink for DialoguerBackend {
    fn display(&self, message: &str, style: Option<&str>) {
        match style {
            Some(style) if self.colorful => {
                println!("{}", Style::from_dotted_str(style).apply_to(message));
            }
            _ => println!("{message}"),
        }
    }
}
