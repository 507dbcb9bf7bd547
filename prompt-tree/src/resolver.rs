//! The recursive resolution engine.

use prompt_tree_types::{
    AnswerValue, Answers, Conditional, ConfigError, Confirmer, LeafAsker, LeafQuestion, NodePath,
    OutputSink, PromptBackend, QuestionSpec, SurveyError,
};
use tracing::{debug, warn};

use crate::validate::{Composite, Node, Shape, classify, classify_once};

/// Walks a question tree, asking every node through its collaborators.
///
/// The resolver owns no state besides references to the collaborators; the
/// answer store is passed explicitly through every call.
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    pub(crate) asker: &'a dyn LeafAsker,
    pub(crate) confirmer: &'a dyn Confirmer,
    pub(crate) sink: &'a dyn OutputSink,
}

impl<'a> Resolver<'a> {
    /// Create a resolver using one backend for every collaborator.
    pub fn new<B: PromptBackend>(backend: &'a B) -> Self {
        Self {
            asker: backend,
            confirmer: backend,
            sink: backend,
        }
    }

    /// Create a resolver from separate collaborators.
    pub fn from_parts(
        asker: &'a dyn LeafAsker,
        confirmer: &'a dyn Confirmer,
        sink: &'a dyn OutputSink,
    ) -> Self {
        Self {
            asker,
            confirmer,
            sink,
        }
    }

    /// Resolve `questions` in order, starting from a copy of `seed`.
    ///
    /// The seed is never modified. On error, the answers collected so far are
    /// dropped.
    pub fn resolve(
        &self,
        questions: &[QuestionSpec],
        seed: Option<&Answers>,
    ) -> Result<Answers, SurveyError> {
        let mut answers = seed.cloned().unwrap_or_default();
        self.resolve_into(questions, &NodePath::root(), &mut answers)?;
        Ok(answers)
    }

    /// Resolve a sequence of sibling questions into `answers`.
    pub(crate) fn resolve_into(
        &self,
        questions: &[QuestionSpec],
        scope: &NodePath,
        answers: &mut Answers,
    ) -> Result<(), SurveyError> {
        for (index, spec) in questions.iter().enumerate() {
            let path = scope.node(spec.name.as_deref(), index);
            self.resolve_node(spec, &path, answers)?;
        }
        Ok(())
    }

    fn resolve_node(
        &self,
        spec: &QuestionSpec,
        path: &NodePath,
        answers: &mut Answers,
    ) -> Result<(), SurveyError> {
        let shape = match classify(spec, path)? {
            Node::Repeated { name, mode } => {
                debug!(%path, ?mode, "resolving repeated question");
                ignored_conditional(spec, path, "repeated");
                return self.resolve_repeated(spec, name, mode, path, answers);
            }
            Node::Single(shape) => shape,
        };

        let name = shape.name();
        let ordinary = matches!(shape, Shape::Ordinary { .. });
        if !ordinary {
            ignored_conditional(spec, path, "composite or display");
        }

        let value = self.ask_shape(spec, shape, path, answers)?;
        // A question hidden by `when` gates on `None`, whatever is stored under its name
        let gate = match (ordinary, &spec.conditional) {
            (true, Some(conditional)) => {
                Some((conditional, value.clone().unwrap_or(AnswerValue::None)))
            }
            _ => None,
        };
        if let (Some(name), Some(value)) = (name, value) {
            answers.insert(name, value);
        }

        if let Some((conditional, gate)) = gate {
            self.resolve_conditional(conditional, &gate, path, answers)?;
        }
        Ok(())
    }

    /// Ask a node once, ignoring any repeat, and return the value to store under its name.
    pub(crate) fn ask_once(
        &self,
        spec: &QuestionSpec,
        path: &NodePath,
        answers: &Answers,
    ) -> Result<Option<AnswerValue>, SurveyError> {
        let shape = classify_once(spec, path)?;
        self.ask_shape(spec, shape, path, answers)
    }

    fn ask_shape(
        &self,
        spec: &QuestionSpec,
        shape: Shape<'_>,
        path: &NodePath,
        answers: &Answers,
    ) -> Result<Option<AnswerValue>, SurveyError> {
        match shape {
            Shape::Composite { kind, nested, .. } => {
                debug!(%path, ?kind, "resolving composite question");
                self.resolve_composite(kind, nested, path).map(Some)
            }
            Shape::Display { name, message } => {
                debug!(%path, "displaying message");
                self.sink.display(message, spec.style.as_deref());
                Ok(name.map(|_| AnswerValue::None))
            }
            Shape::Ordinary { name, tag, message } => {
                debug!(%path, tag, "asking question");
                let question = leaf_question(spec, path, name, tag, message);
                self.asker.ask(&question, answers)
            }
        }
    }

    /// Resolve `nested` into a fresh store and fold it into one value.
    fn resolve_composite(
        &self,
        kind: Composite,
        nested: &[QuestionSpec],
        path: &NodePath,
    ) -> Result<AnswerValue, SurveyError> {
        let mut scope = Answers::new();
        self.resolve_into(nested, path, &mut scope)?;
        Ok(match kind {
            Composite::List => AnswerValue::List(scope.into_values()),
            Composite::Dict => AnswerValue::Map(scope),
        })
    }

    /// Resolve a conditional branch into the enclosing store.
    ///
    /// `gate` is the value the gating question produced in this run. Branch
    /// nodes share the gating question's scope; their paths are nested under
    /// the gating question only to keep diagnostics readable.
    fn resolve_conditional(
        &self,
        conditional: &Conditional,
        gate: &AnswerValue,
        path: &NodePath,
        answers: &mut Answers,
    ) -> Result<(), SurveyError> {
        let take = conditional
            .condition
            .evaluate(gate)
            .map_err(|source| ConfigError::Condition {
                path: path.clone(),
                source,
            })?;

        debug!(%path, take, "evaluated conditional branch");
        if take {
            self.resolve_into(&conditional.nested, path, answers)?;
        }
        Ok(())
    }
}

/// Strip the resolver's control fields, keeping what the leaf asker needs.
fn leaf_question(
    spec: &QuestionSpec,
    path: &NodePath,
    name: &str,
    tag: &str,
    message: &str,
) -> LeafQuestion {
    LeafQuestion {
        choices: spec.choices.clone(),
        default: spec.default.clone(),
        when: spec.when.clone(),
        filter: spec.filter.clone(),
        ..LeafQuestion::new(path.clone(), name, tag, message)
    }
}

fn ignored_conditional(spec: &QuestionSpec, path: &NodePath, role: &str) {
    if spec.conditional.is_some() {
        warn!(
            %path,
            role,
            "conditional branch is only evaluated on ordinary questions, ignoring it"
        );
    }
}
