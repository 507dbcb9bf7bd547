use prompt_tree_types::{Answers, PromptBackend, QuestionSpec, SurveyError};
use tracing::debug;

use crate::Resolver;

/// A question tree together with the messages around it.
///
/// # Example
///
/// ```rust
/// use prompt_tree::{QuestionSpec, SurveyTree, TestBackend};
///
/// let tree = SurveyTree::new(vec![
///     QuestionSpec::text("name", "What is your name?"),
///     QuestionSpec::confirm("student", "Are you a student?"),
/// ])
/// .with_prelude("Welcome!");
///
/// let backend = TestBackend::new().with_answer("Alice").with_answer(false);
/// let answers = tree.run(&backend).unwrap();
///
/// assert_eq!(answers.get_string("name").unwrap(), "Alice");
/// assert_eq!(backend.displayed(), vec!["Welcome!".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SurveyTree {
    /// Optional message shown before the first question.
    pub prelude: Option<String>,

    /// The top-level questions, asked in order.
    pub questions: Vec<QuestionSpec>,

    /// Optional message shown after the last question.
    pub epilogue: Option<String>,

    /// Answers the run starts from. Never modified by a run.
    pub answers: Option<Answers>,
}

impl SurveyTree {
    pub fn new(questions: Vec<QuestionSpec>) -> Self {
        Self {
            questions,
            ..Self::default()
        }
    }

    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Start every run from a copy of `answers`.
    pub fn with_answers(mut self, answers: Answers) -> Self {
        self.answers = Some(answers);
        self
    }

    /// Append a top-level question.
    pub fn with_question(mut self, question: QuestionSpec) -> Self {
        self.questions.push(question);
        self
    }

    pub fn questions(&self) -> &[QuestionSpec] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Resolve the whole tree through `backend`.
    ///
    /// The epilogue is only shown when every question resolved.
    pub fn run<B: PromptBackend>(&self, backend: &B) -> Result<Answers, SurveyError> {
        debug!(questions = self.questions.len(), "running survey");
        if let Some(prelude) = &self.prelude {
            backend.display(prelude, None);
        }

        let answers = Resolver::new(backend).resolve(&self.questions, self.answers.as_ref())?;

        if let Some(epilogue) = &self.epilogue {
            backend.display(epilogue, None);
        }
        debug!(answers = answers.len(), "survey complete");
        Ok(answers)
    }
}

impl From<Vec<QuestionSpec>> for SurveyTree {
    fn from(questions: Vec<QuestionSpec>) -> Self {
        Self::new(questions)
    }
}

impl From<QuestionSpec> for SurveyTree {
    fn from(question: QuestionSpec) -> Self {
        Self::new(vec![question])
    }
}

/// Resolve `questions` through `backend`, starting from a copy of `seed`.
///
/// Shorthand for building a [`SurveyTree`] and running it. A seed passed here
/// takes precedence over one already set on the tree.
pub fn resolve<B: PromptBackend>(
    backend: &B,
    questions: impl Into<SurveyTree>,
    seed: Option<&Answers>,
) -> Result<Answers, SurveyError> {
    let mut tree = questions.into();
    if let Some(seed) = seed {
        tree.answers = Some(seed.clone());
    }
    tree.run(backend)
}
