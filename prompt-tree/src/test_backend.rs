//! Test backend for resolving question trees without user interaction.
//!
//! `TestBackend` replays scripted answers in the order questions are asked,
//! and records every prompt it was shown. This is useful for testing trees
//! and the resolver itself.
//!
//! # Example
//!
//! ```rust
//! use prompt_tree::{QuestionSpec, Resolver, TestBackend};
//!
//! let questions = vec![
//!     QuestionSpec::text("host", "Host:"),
//!     QuestionSpec::int("port", "Port:"),
//! ];
//!
//! let backend = TestBackend::new().with_answer("localhost").with_answer(8080);
//! let answers = Resolver::new(&backend).resolve(&questions, None).unwrap();
//!
//! assert_eq!(answers.get_string("host").unwrap(), "localhost");
//! assert_eq!(answers.get_int("port").unwrap(), 8080);
//! assert_eq!(backend.asked_names(), vec!["host", "port"]);
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::{
    AnswerValue, Answers, Confirmer, LeafAsker, LeafQuestion, OutputSink, SurveyError,
};

/// One scripted reply to an ordinary question.
#[derive(Debug, Clone)]
enum Step {
    Answer(AnswerValue),
    AcceptDefault,
    Interrupt,
}

/// One scripted reply to a continuation prompt.
#[derive(Debug, Clone, Copy)]
enum Confirmation {
    Answer(bool),
    Interrupt,
}

/// A backend that replays pre-configured answers.
///
/// Answers and confirmations are consumed in order. Questions hidden by their
/// `when` predicate consume nothing. Filters are applied to scripted answers
/// the same way an interactive backend applies them to typed ones.
#[derive(Debug, Default)]
pub struct TestBackend {
    answers: RefCell<VecDeque<Step>>,
    confirmations: RefCell<VecDeque<Confirmation>>,
    asked: RefCell<Vec<(String, String)>>,
    confirm_prompts: RefCell<Vec<String>>,
    displayed: RefCell<Vec<String>>,
}

/// Error type for TestBackend.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("No scripted answer left for question '{name}' ({message})")]
    MissingAnswer { name: String, message: String },

    #[error("No scripted confirmation left for prompt '{0}'")]
    MissingConfirmation(String),

    #[error("Question '{0}' has no default to accept")]
    MissingDefault(String),
}

impl TestBackend {
    /// Create a new empty test backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer to the next ordinary question.
    pub fn with_answer(self, value: impl Into<AnswerValue>) -> Self {
        self.answers
            .borrow_mut()
            .push_back(Step::Answer(value.into()));
        self
    }

    /// Queue several answers at once.
    pub fn with_answers<I, V>(self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<AnswerValue>,
    {
        self.answers
            .borrow_mut()
            .extend(values.into_iter().map(|value| Step::Answer(value.into())));
        self
    }

    /// Accept the question's default, as if the user just pressed enter.
    pub fn with_default_answer(self) -> Self {
        self.answers.borrow_mut().push_back(Step::AcceptDefault);
        self
    }

    /// Cancel the survey at the next ordinary question.
    pub fn with_interrupt(self) -> Self {
        self.answers.borrow_mut().push_back(Step::Interrupt);
        self
    }

    /// Queue the reply to the next continuation prompt.
    pub fn with_confirmation(self, yes: bool) -> Self {
        self.confirmations
            .borrow_mut()
            .push_back(Confirmation::Answer(yes));
        self
    }

    pub fn with_confirmations(self, replies: impl IntoIterator<Item = bool>) -> Self {
        self.confirmations
            .borrow_mut()
            .extend(replies.into_iter().map(Confirmation::Answer));
        self
    }

    /// Cancel the survey at the next continuation prompt.
    pub fn with_confirm_interrupt(self) -> Self {
        self.confirmations
            .borrow_mut()
            .push_back(Confirmation::Interrupt);
        self
    }

    /// Messages of the ordinary questions asked so far.
    pub fn asked_messages(&self) -> Vec<String> {
        self.asked
            .borrow()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// Names of the ordinary questions asked so far.
    pub fn asked_names(&self) -> Vec<String> {
        self.asked
            .borrow()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Continuation prompts shown so far.
    pub fn confirm_prompts(&self) -> Vec<String> {
        self.confirm_prompts.borrow().clone()
    }

    /// Messages displayed so far, prelude and epilogue included.
    pub fn displayed(&self) -> Vec<String> {
        self.displayed.borrow().clone()
    }

    /// Scripted answers not consumed yet.
    pub fn remaining_answers(&self) -> usize {
        self.answers.borrow().len()
    }

    pub fn remaining_confirmations(&self) -> usize {
        self.confirmations.borrow().len()
    }
}

impl LeafAsker for TestBackend {
    fn ask(
        &self,
        question: &LeafQuestion,
        answers: &Answers,
    ) -> Result<Option<AnswerValue>, SurveyError> {
        question.widget()?;
        if !question.is_visible(answers) {
            return Ok(None);
        }

        self.asked
            .borrow_mut()
            .push((question.name.clone(), question.message.clone()));

        let step = self.answers.borrow_mut().pop_front();
        let value = match step {
            Some(Step::Answer(value)) => value,
            Some(Step::AcceptDefault) => question.default.clone().ok_or_else(|| {
                SurveyError::backend(TestBackendError::MissingDefault(question.name.clone()))
            })?,
            Some(Step::Interrupt) => return Err(SurveyError::Cancelled),
            None => {
                return Err(SurveyError::backend(TestBackendError::MissingAnswer {
                    name: question.name.clone(),
                    message: question.message.clone(),
                }));
            }
        };
        Ok(Some(question.apply_filter(value)))
    }
}

impl Confirmer for TestBackend {
    fn confirm(&self, message: &str) -> Result<bool, SurveyError> {
        self.confirm_prompts.borrow_mut().push(message.to_string());
        match self.confirmations.borrow_mut().pop_front() {
            Some(Confirmation::Answer(yes)) => Ok(yes),
            Some(Confirmation::Interrupt) => Err(SurveyError::Cancelled),
            None => Err(SurveyError::backend(TestBackendError::MissingConfirmation(
                message.to_string(),
            ))),
        }
    }
}

impl OutputSink for TestBackend {
    fn display(&self, message: &str, _style: Option<&str>) {
        self.displayed.borrow_mut().push(message.to_string());
    }
}
