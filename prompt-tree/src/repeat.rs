//! Asking the same question several times.

use prompt_tree_types::{AnswerValue, Answers, NodePath, QuestionSpec, RepeatMode, SurveyError};
use tracing::debug;

use crate::Resolver;

impl Resolver<'_> {
    /// Collect a list of values for `name` by asking `spec` repeatedly.
    ///
    /// The first ask always uses `message`. Exact counts use `repeat_prompt`
    /// as the prompt of later asks; bounded and open-ended repeats use it as
    /// the continuation question instead, falling back to `message` and then
    /// to a generic question naming `name`. The list replaces whatever was
    /// stored under `name` before.
    pub(crate) fn resolve_repeated(
        &self,
        spec: &QuestionSpec,
        name: &str,
        mode: RepeatMode,
        path: &NodePath,
        answers: &mut Answers,
    ) -> Result<(), SurveyError> {
        let limit = repeat_limit(mode, spec.repeat_max);
        let continue_prompt = spec
            .repeat_prompt
            .clone()
            .or_else(|| spec.message.clone())
            .unwrap_or_else(|| format!("Add another value for {name}?"));

        let mut values = Vec::new();
        loop {
            let once = single_shot(spec, mode, values.len());
            let iteration = path.child(&values.len().to_string());
            let Some(value) = self.ask_once(&once, &iteration, answers)? else {
                debug!(%path, collected = values.len(), "repeated question was skipped");
                break;
            };
            values.push(value);

            if limit.is_some_and(|limit| values.len() >= limit) {
                debug!(%path, collected = values.len(), "repeat limit reached");
                break;
            }
            if !matches!(mode, RepeatMode::Exactly(_))
                && !self.confirmer.confirm(&continue_prompt)?
            {
                debug!(%path, collected = values.len(), "user declined another value");
                break;
            }
        }

        if !values.is_empty() {
            answers.insert(name, AnswerValue::List(values));
        }
        Ok(())
    }
}

/// The most values a repeat may collect, if bounded.
fn repeat_limit(mode: RepeatMode, max: Option<usize>) -> Option<usize> {
    let bound = match mode {
        RepeatMode::Exactly(n) | RepeatMode::UpTo(n) => Some(n),
        RepeatMode::UntilDeclined => None,
    };
    match (bound, max) {
        (Some(bound), Some(max)) => Some(bound.min(max)),
        (bound, max) => bound.or(max),
    }
}

/// Working copy of `spec` for one iteration, with the repeat controls removed.
fn single_shot(spec: &QuestionSpec, mode: RepeatMode, asked: usize) -> QuestionSpec {
    let mut once = QuestionSpec {
        conditional: None,
        repeat: None,
        repeat_prompt: None,
        repeat_max: None,
        ..spec.clone()
    };
    if asked > 0
        && matches!(mode, RepeatMode::Exactly(_))
        && let Some(prompt) = &spec.repeat_prompt
    {
        once.message = Some(prompt.clone());
    }
    once
}
