use std::fmt;
use std::sync::Arc;

use crate::{AnswerValue, Answers, Filter, When};

/// The `type` tag of a question, as seen by the resolver.
///
/// Only `list`, `dict` and `print` mean something to the resolver. Every other
/// tag is forwarded untouched to the leaf asker, which owns the set of widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Group of questions whose answers are folded into a list.
    List,

    /// Group of questions whose answers are folded into a nested mapping.
    Dict,

    /// Display-only node, shows its message and collects nothing.
    Print,

    /// Ordinary question handled by the leaf asker (`text`, `confirm`, ...).
    Delegate(String),
}

impl QuestionKind {
    /// Classify a `type` tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "list" => Self::List,
            "dict" => Self::Dict,
            "print" => Self::Print,
            other => Self::Delegate(other.to_string()),
        }
    }

    /// The `type` tag this kind was built from.
    pub fn tag(&self) -> &str {
        match self {
            Self::List => "list",
            Self::Dict => "dict",
            Self::Print => "print",
            Self::Delegate(tag) => tag,
        }
    }
}

impl From<&str> for QuestionKind {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

/// What a conditional branch compares the gating answer against.
#[derive(Clone)]
pub enum Condition {
    /// Branch is taken when the stored answer equals this value.
    Literal(AnswerValue),

    /// Branch is taken when the predicate returns `true` for the stored answer.
    ///
    /// An `Err` is fatal for the whole resolution.
    Predicate(Arc<dyn Fn(&AnswerValue) -> anyhow::Result<bool> + Send + Sync>),
}

impl Condition {
    /// Compare the stored answer against a literal value.
    pub fn equals(value: impl Into<AnswerValue>) -> Self {
        Self::Literal(value.into())
    }

    /// Gate the branch on an infallible predicate.
    pub fn predicate(f: impl Fn(&AnswerValue) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Arc::new(move |value| Ok(f(value))))
    }

    /// Gate the branch on a predicate that may fail.
    pub fn try_predicate(
        f: impl Fn(&AnswerValue) -> anyhow::Result<bool> + Send + Sync + 'static,
    ) -> Self {
        Self::Predicate(Arc::new(f))
    }

    /// Decide whether the branch should run for the given stored answer.
    pub fn evaluate(&self, value: &AnswerValue) -> anyhow::Result<bool> {
        match self {
            Self::Literal(expected) => Ok(expected == value),
            Self::Predicate(f) => f(value),
        }
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Predicate(_) => f.write_str("Predicate(<fn>)"),
        }
    }
}

impl From<AnswerValue> for Condition {
    fn from(value: AnswerValue) -> Self {
        Self::Literal(value)
    }
}

impl From<bool> for Condition {
    fn from(value: bool) -> Self {
        Self::Literal(value.into())
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        Self::Literal(value.into())
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        Self::Literal(value.into())
    }
}

impl From<i64> for Condition {
    fn from(value: i64) -> Self {
        Self::Literal(value.into())
    }
}

impl From<i32> for Condition {
    fn from(value: i32) -> Self {
        Self::Literal(value.into())
    }
}

/// A branch of questions asked after the gating question, in the same scope.
#[derive(Debug, Clone)]
pub struct Conditional {
    pub condition: Condition,
    pub nested: Vec<QuestionSpec>,
}

impl Conditional {
    pub fn new(condition: impl Into<Condition>, nested: Vec<QuestionSpec>) -> Self {
        Self {
            condition: condition.into(),
            nested,
        }
    }
}

/// How many times a question is asked.
///
/// * `Count(n)` with `n > 0`: exactly `n` times.
/// * `Count(-n)`: up to `n` times, confirming before every ask after the first.
/// * `Flag(true)`: until the user declines to continue.
/// * `Flag(false)`: asked once, as if no repeat was configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Count(i64),
    Flag(bool),
}

/// A validated repeat configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatMode {
    /// Ask exactly this many times, no confirmation.
    Exactly(usize),

    /// Ask once, then confirm before each further ask, up to this many values.
    UpTo(usize),

    /// Ask once, then confirm before each further ask, without a bound.
    UntilDeclined,
}

impl Repeat {
    /// Check if this setting turns the node into a repeated one.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Flag(false))
    }

    /// Interpret the setting.
    ///
    /// Returns `Ok(None)` for `Flag(false)`, and an explanation for values
    /// that can not be turned into a count.
    pub fn mode(&self) -> Result<Option<RepeatMode>, &'static str> {
        match *self {
            Self::Flag(false) => Ok(None),
            Self::Flag(true) => Ok(Some(RepeatMode::UntilDeclined)),
            Self::Count(0) => Err("count must be a positive or negative integer, not 0"),
            Self::Count(n) => {
                let bound = usize::try_from(n.unsigned_abs()).map_err(|_| "count is too large")?;
                if n > 0 {
                    Ok(Some(RepeatMode::Exactly(bound)))
                } else {
                    Ok(Some(RepeatMode::UpTo(bound)))
                }
            }
        }
    }
}

impl From<i64> for Repeat {
    fn from(n: i64) -> Self {
        Self::Count(n)
    }
}

impl From<i32> for Repeat {
    fn from(n: i32) -> Self {
        Self::Count(i64::from(n))
    }
}

impl From<bool> for Repeat {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

/// One node of a question tree.
///
/// Every field is optional so that trees can be assembled freely; the
/// resolver checks the shape of each node right before it is asked.
#[derive(Debug, Clone, Default)]
pub struct QuestionSpec {
    /// Key of the answer in the enclosing scope.
    pub name: Option<String>,

    /// The `type` tag.
    pub kind: Option<QuestionKind>,

    /// The prompt text shown to the user.
    pub message: Option<String>,

    /// Children of a `list` or `dict` composite.
    pub nested: Vec<QuestionSpec>,

    /// Branch asked after this question, gated on its answer.
    pub conditional: Option<Conditional>,

    pub repeat: Option<Repeat>,

    /// Continuation prompt for bounded repeats, prompt text of later asks for exact ones.
    pub repeat_prompt: Option<String>,

    /// Hard cap on the number of collected values.
    pub repeat_max: Option<usize>,

    /// Choices for select-like widgets.
    pub choices: Vec<String>,

    /// Pre-filled answer.
    pub default: Option<AnswerValue>,

    /// Whether the leaf asker shows the question at all.
    pub when: Option<When>,

    /// Transform applied by the leaf asker before the answer is stored.
    pub filter: Option<Filter>,

    /// Style of a display node, e.g. `"bold.red"`.
    pub style: Option<String>,
}

impl QuestionSpec {
    /// Create a question of the given `type` tag.
    pub fn new(tag: &str) -> Self {
        Self {
            kind: Some(QuestionKind::from_tag(tag)),
            ..Self::default()
        }
    }

    /// Create a named ordinary question of the given `type` tag.
    pub fn ask(tag: &str, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(tag).with_name(name).with_message(message)
    }

    /// Single-line text question.
    pub fn text(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ask("text", name, message)
    }

    /// Yes/no question.
    pub fn confirm(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ask("confirm", name, message)
    }

    /// Masked text question.
    pub fn password(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ask("password", name, message)
    }

    /// Integer question.
    pub fn int(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ask("int", name, message)
    }

    /// Pick one of `choices`.
    pub fn select<I, S>(name: impl Into<String>, message: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ask("select", name, message).with_choices(choices)
    }

    /// Pick any number of `choices`.
    pub fn checkbox<I, S>(name: impl Into<String>, message: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ask("checkbox", name, message).with_choices(choices)
    }

    /// Composite whose children's answers become a list, in declared order.
    pub fn list(name: impl Into<String>, nested: Vec<QuestionSpec>) -> Self {
        Self::new("list").with_name(name).with_nested(nested)
    }

    /// Composite whose children's answers become a nested mapping.
    pub fn dict(name: impl Into<String>, nested: Vec<QuestionSpec>) -> Self {
        Self::new("dict").with_name(name).with_nested(nested)
    }

    /// Display node.
    pub fn print(message: impl Into<String>) -> Self {
        Self::new("print").with_message(message)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_nested(mut self, nested: Vec<QuestionSpec>) -> Self {
        self.nested = nested;
        self
    }

    /// Ask `nested` right after this question when its answer satisfies `condition`.
    pub fn with_conditional(
        mut self,
        condition: impl Into<Condition>,
        nested: Vec<QuestionSpec>,
    ) -> Self {
        self.conditional = Some(Conditional::new(condition, nested));
        self
    }

    pub fn with_repeat(mut self, repeat: impl Into<Repeat>) -> Self {
        self.repeat = Some(repeat.into());
        self
    }

    pub fn with_repeat_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.repeat_prompt = Some(prompt.into());
        self
    }

    pub fn with_repeat_max(mut self, max: usize) -> Self {
        self.repeat_max = Some(max);
        self
    }

    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_default(mut self, default: impl Into<AnswerValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Only show the question when `f` returns `true` for the answers so far.
    pub fn with_when(mut self, f: impl Fn(&Answers) -> bool + Send + Sync + 'static) -> Self {
        self.when = Some(When::new(f));
        self
    }

    /// Transform the answer before it is stored.
    pub fn with_filter(
        mut self,
        f: impl Fn(AnswerValue) -> AnswerValue + Send + Sync + 'static,
    ) -> Self {
        self.filter = Some(Filter::new(f));
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Whether this node asks more than once.
    pub fn is_repeated(&self) -> bool {
        self.repeat.is_some_and(|repeat| repeat.is_enabled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_tag() {
        assert_eq!(QuestionKind::from_tag("list"), QuestionKind::List);
        assert_eq!(QuestionKind::from_tag("dict"), QuestionKind::Dict);
        assert_eq!(QuestionKind::from_tag("print"), QuestionKind::Print);
        assert_eq!(
            QuestionKind::from_tag(" dict"),
            QuestionKind::Delegate(" dict".to_string())
        );
        assert_eq!(QuestionKind::from_tag("checkbox").tag(), "checkbox");
    }

    #[test]
    fn repeat_modes() {
        assert_eq!(Repeat::Count(3).mode(), Ok(Some(RepeatMode::Exactly(3))));
        assert_eq!(Repeat::Count(-3).mode(), Ok(Some(RepeatMode::UpTo(3))));
        assert_eq!(Repeat::Flag(true).mode(), Ok(Some(RepeatMode::UntilDeclined)));
        assert_eq!(Repeat::Flag(false).mode(), Ok(None));
        assert!(Repeat::Count(0).mode().is_err());
    }

    #[test]
    fn disabled_repeats() {
        assert!(!QuestionSpec::text("a", "A?").with_repeat(false).is_repeated());
        assert!(!QuestionSpec::text("a", "A?").is_repeated());
        assert!(QuestionSpec::text("a", "A?").with_repeat(-2).is_repeated());
    }

    #[test]
    fn literal_condition_compares_by_equality() {
        let condition = Condition::from(true);
        assert!(condition.evaluate(&AnswerValue::Bool(true)).unwrap());
        assert!(!condition.evaluate(&AnswerValue::Bool(false)).unwrap());
        assert!(!condition.evaluate(&AnswerValue::from("true")).unwrap());
    }

    #[test]
    fn predicate_condition() {
        let condition = Condition::predicate(|value| value.as_str() == Some("yes"));
        assert!(condition.evaluate(&"yes".into()).unwrap());
        assert!(!condition.evaluate(&"no".into()).unwrap());

        let failing = Condition::try_predicate(|_| anyhow::bail!("bad input"));
        assert!(failing.evaluate(&AnswerValue::None).is_err());
    }

    #[test]
    fn builders() {
        let spec = QuestionSpec::dict(
            "book",
            vec![
                QuestionSpec::text("title", "Title?"),
                QuestionSpec::text("author", "Author?"),
            ],
        )
        .with_repeat(-3)
        .with_repeat_prompt("Another book?");

        assert_eq!(spec.kind, Some(QuestionKind::Dict));
        assert_eq!(spec.nested.len(), 2);
        assert_eq!(spec.repeat, Some(Repeat::Count(-3)));
        assert!(spec.message.is_none());
    }
}
