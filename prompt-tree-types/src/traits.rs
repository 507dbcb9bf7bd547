use crate::{AnswerValue, Answers, LeafQuestion, SurveyError};

/// Asks a single ordinary question.
///
/// Implementations must honour `question.when` (return `Ok(None)` without
/// prompting when it is false) and `question.filter` (transform the value
/// before returning it). They must fail with a `ConfigError` before prompting
/// when the `type` tag is not one of their widgets.
pub trait LeafAsker {
    /// Ask the question and return its answer, or `None` if it was skipped.
    ///
    /// # Arguments
    /// * `question` - The stripped question configuration
    /// * `answers` - All answers collected so far in the current scope
    fn ask(
        &self,
        question: &LeafQuestion,
        answers: &Answers,
    ) -> Result<Option<AnswerValue>, SurveyError>;
}

/// Asks a yes/no question, used to decide whether a repeat continues.
pub trait Confirmer {
    fn confirm(&self, message: &str) -> Result<bool, SurveyError>;
}

/// Shows a static message.
pub trait OutputSink {
    /// Display `message`, optionally styled (e.g. `"bold.red"`).
    fn display(&self, message: &str, style: Option<&str>);
}

/// A backend providing all three collaborators of the resolver.
///
/// Implemented automatically for every type implementing the three traits.
pub trait PromptBackend: LeafAsker + Confirmer + OutputSink {}

impl<T: LeafAsker + Confirmer + OutputSink + ?Sized> PromptBackend for T {}
