use std::fmt;
use std::sync::Arc;

use crate::{AnswerValue, Answers, ConfigError, NodePath};

/// Predicate deciding whether a question is shown, given the answers so far.
#[derive(Clone)]
pub struct When(Arc<dyn Fn(&Answers) -> bool + Send + Sync>);

impl When {
    pub fn new(f: impl Fn(&Answers) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn check(&self, answers: &Answers) -> bool {
        (self.0)(answers)
    }
}

impl fmt::Debug for When {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("When(<fn>)")
    }
}

/// Transform applied to an answer before it is stored.
#[derive(Clone)]
pub struct Filter(Arc<dyn Fn(AnswerValue) -> AnswerValue + Send + Sync>);

impl Filter {
    pub fn new(f: impl Fn(AnswerValue) -> AnswerValue + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn apply(&self, value: AnswerValue) -> AnswerValue {
        (self.0)(value)
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Filter(<fn>)")
    }
}

/// The widgets a leaf asker knows how to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// Single-line text input.
    Text,
    /// Masked text input.
    Password,
    /// Yes/no question.
    Confirm,
    /// Pick one choice from a list.
    Select,
    /// Pick one choice by its number.
    RawSelect,
    /// Pick any number of choices.
    Checkbox,
    /// Pick one choice, filtered by typing.
    Autocomplete,
    /// File system path, entered as text.
    Path,
    /// Integer input.
    Int,
    /// Floating-point input.
    Float,
    /// Multi-line text in an external editor.
    Editor,
}

impl WidgetKind {
    /// Look up a widget by its `type` tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "text" | "input" => Self::Text,
            "password" => Self::Password,
            "confirm" => Self::Confirm,
            "select" => Self::Select,
            "rawselect" => Self::RawSelect,
            "checkbox" => Self::Checkbox,
            "autocomplete" => Self::Autocomplete,
            "path" => Self::Path,
            "int" => Self::Int,
            "float" => Self::Float,
            "editor" => Self::Editor,
            _ => return None,
        };
        Some(kind)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Confirm => "confirm",
            Self::Select => "select",
            Self::RawSelect => "rawselect",
            Self::Checkbox => "checkbox",
            Self::Autocomplete => "autocomplete",
            Self::Path => "path",
            Self::Int => "int",
            Self::Float => "float",
            Self::Editor => "editor",
        }
    }

    /// Whether the widget picks from a list of choices.
    pub fn needs_choices(&self) -> bool {
        matches!(
            self,
            Self::Select | Self::RawSelect | Self::Checkbox | Self::Autocomplete
        )
    }
}

/// An ordinary question, stripped of everything the resolver handles itself.
///
/// This is what a `LeafAsker` receives. The asker is responsible for honouring
/// `when` and `filter`; `is_visible` and `apply_filter` implement both.
#[derive(Debug, Clone)]
pub struct LeafQuestion {
    /// Location in the tree, for diagnostics.
    pub path: NodePath,
    pub name: String,
    /// The `type` tag, forwarded verbatim.
    pub tag: String,
    pub message: String,
    pub choices: Vec<String>,
    pub default: Option<AnswerValue>,
    pub when: Option<When>,
    pub filter: Option<Filter>,
}

impl LeafQuestion {
    pub fn new(
        path: NodePath,
        name: impl Into<String>,
        tag: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path,
            name: name.into(),
            tag: tag.into(),
            message: message.into(),
            choices: Vec::new(),
            default: None,
            when: None,
            filter: None,
        }
    }

    /// Resolve the widget for this question, checking that it is usable.
    pub fn widget(&self) -> Result<WidgetKind, ConfigError> {
        let Some(kind) = WidgetKind::from_tag(&self.tag) else {
            return Err(ConfigError::UnknownType {
                path: self.path.clone(),
                tag: self.tag.clone(),
            });
        };
        if kind.needs_choices() && self.choices.is_empty() {
            return Err(ConfigError::MissingChoices {
                path: self.path.clone(),
                kind: kind.tag(),
            });
        }
        Ok(kind)
    }

    /// Whether the question should be shown, given the answers so far.
    pub fn is_visible(&self, answers: &Answers) -> bool {
        self.when.as_ref().is_none_or(|when| when.check(answers))
    }

    /// Apply the configured filter, if any.
    pub fn apply_filter(&self, value: AnswerValue) -> AnswerValue {
        match &self.filter {
            Some(filter) => filter.apply(value),
            None => value,
        }
    }

    /// Index of the default choice, for select-like widgets.
    pub fn default_choice(&self) -> Option<usize> {
        let default = self.default.as_ref()?.as_str()?;
        self.choices.iter().position(|choice| choice == default)
    }

    /// Which choices start out checked, for checkbox widgets.
    pub fn default_checked(&self) -> Vec<bool> {
        let checked: Vec<&str> = match &self.default {
            Some(AnswerValue::String(s)) => vec![s.as_str()],
            Some(value) => value
                .as_list()
                .unwrap_or_default()
                .iter()
                .filter_map(AnswerValue::as_str)
                .collect(),
            None => Vec::new(),
        };
        self.choices
            .iter()
            .map(|choice| checked.contains(&choice.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(tag: &str) -> LeafQuestion {
        LeafQuestion::new(NodePath::new("q"), "q", tag, "Question?")
    }

    #[test]
    fn unknown_widget_is_a_config_error() {
        let err = question("mytype").widget().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownType { ref tag, .. } if tag == "mytype"));
    }

    #[test]
    fn select_needs_choices() {
        assert!(matches!(
            question("select").widget(),
            Err(ConfigError::MissingChoices { kind: "select", .. })
        ));

        let mut q = question("select");
        q.choices = vec!["a".into(), "b".into()];
        assert_eq!(q.widget().unwrap(), WidgetKind::Select);
    }

    #[test]
    fn when_and_filter() {
        let mut q = question("text");
        assert!(q.is_visible(&Answers::new()));

        q.when = Some(When::new(|answers| answers.get_bool("fries").unwrap_or(false)));
        q.filter = Some(Filter::new(|value| match value {
            AnswerValue::String(s) => AnswerValue::String(s.to_uppercase()),
            other => other,
        }));

        let mut answers = Answers::new();
        assert!(!q.is_visible(&answers));
        answers.insert("fries", true);
        assert!(q.is_visible(&answers));
        assert_eq!(q.apply_filter("mustard".into()), AnswerValue::from("MUSTARD"));
    }

    #[test]
    fn default_choices() {
        let mut q = question("checkbox");
        q.choices = vec!["mustard".into(), "mayonnaise".into(), "green chiles".into()];
        q.default = Some(vec!["green chiles", "mustard"].into());
        assert_eq!(q.default_checked(), vec![true, false, true]);

        q.default = Some("mayonnaise".into());
        assert_eq!(q.default_choice(), Some(1));
    }
}
