use crate::Answers;

/// A single value stored in `Answers`.
///
/// Leaf widgets produce the scalar variants; the resolver produces `List`
/// (repeats, `list` composites) and `Map` (`dict` composites).
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
    /// The "no value" marker left behind by a named display node.
    None,

    /// A string value (from text, password, path, editor and select questions).
    String(String),

    /// An integer value (from int questions).
    Int(i64),

    /// A floating-point value (from float questions).
    Float(f64),

    /// A boolean value (from confirm questions).
    Bool(bool),

    /// An ordered sequence (checkbox selections, `list` composites, repeats).
    List(Vec<AnswerValue>),

    /// A nested answer mapping (`dict` composites).
    Map(Answers),
}

impl AnswerValue {
    /// Check if this is the "no value" marker.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as a list.
    pub fn as_list(&self) -> Option<&[AnswerValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get this value as a nested answer mapping.
    pub fn as_map(&self) -> Option<&Answers> {
        match self {
            Self::Map(answers) => Some(answers),
            _ => None,
        }
    }

    /// Loose truthiness, used by `when` predicates written against any value kind.
    ///
    /// `None`, `false`, zero, and empty strings, lists and maps are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::None => false,
            Self::String(s) => !s.is_empty(),
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::Bool(b) => *b,
            Self::List(items) => !items.is_empty(),
            Self::Map(answers) => !answers.is_empty(),
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::String(_) => "String",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::Bool(_) => "Bool",
            Self::List(_) => "List",
            Self::Map(_) => "Map",
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<i64> for AnswerValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for AnswerValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for AnswerValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Answers> for AnswerValue {
    fn from(answers: Answers) -> Self {
        Self::Map(answers)
    }
}

impl<T: Into<AnswerValue>> From<Vec<T>> for AnswerValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
