use indexmap::IndexMap;

use crate::AnswerValue;

/// Error type for typed answer access.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for name: {0}")]
    MissingName(String),

    #[error("Type mismatch for '{name}': expected {expected}, got {actual}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// The answer store: an insertion-ordered mapping from question name to value.
///
/// Names are unique within one store. Inserting an existing name overwrites
/// its value in place, so the entry keeps the position of its first write.
/// Nested `dict` composites are stored as `AnswerValue::Map` values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    values: IndexMap<String, AnswerValue>,
}

impl Answers {
    /// Create a new empty answer store.
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }

    /// Insert an answer, returning the value it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AnswerValue>,
    ) -> Option<AnswerValue> {
        self.values.insert(name.into(), value.into())
    }

    /// Get the answer stored under `name`.
    pub fn get(&self, name: &str) -> Option<&AnswerValue> {
        self.values.get(name)
    }

    /// Check if an answer exists under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterate over all name-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterate over the names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterate over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &AnswerValue> {
        self.values.values()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge another store into this one. Later entries overwrite earlier ones.
    pub fn extend(&mut self, other: Answers) {
        self.values.extend(other.values);
    }

    /// Consume the store, keeping only the values in insertion order.
    pub fn into_values(self) -> Vec<AnswerValue> {
        self.values.into_values().collect()
    }

    // === Convenience accessors ===

    /// Get a string answer.
    pub fn get_string(&self, name: &str) -> Result<&str, AnswerError> {
        match self.get(name) {
            Some(AnswerValue::String(s)) => Ok(s),
            Some(other) => Err(mismatch(name, "String", other)),
            None => Err(AnswerError::MissingName(name.to_string())),
        }
    }

    /// Get an integer answer.
    pub fn get_int(&self, name: &str) -> Result<i64, AnswerError> {
        match self.get(name) {
            Some(AnswerValue::Int(i)) => Ok(*i),
            Some(other) => Err(mismatch(name, "Int", other)),
            None => Err(AnswerError::MissingName(name.to_string())),
        }
    }

    /// Get a float answer.
    pub fn get_float(&self, name: &str) -> Result<f64, AnswerError> {
        match self.get(name) {
            Some(AnswerValue::Float(f)) => Ok(*f),
            Some(other) => Err(mismatch(name, "Float", other)),
            None => Err(AnswerError::MissingName(name.to_string())),
        }
    }

    /// Get a boolean answer.
    pub fn get_bool(&self, name: &str) -> Result<bool, AnswerError> {
        match self.get(name) {
            Some(AnswerValue::Bool(b)) => Ok(*b),
            Some(other) => Err(mismatch(name, "Bool", other)),
            None => Err(AnswerError::MissingName(name.to_string())),
        }
    }

    /// Get a list answer.
    pub fn get_list(&self, name: &str) -> Result<&[AnswerValue], AnswerError> {
        match self.get(name) {
            Some(AnswerValue::List(items)) => Ok(items),
            Some(other) => Err(mismatch(name, "List", other)),
            None => Err(AnswerError::MissingName(name.to_string())),
        }
    }

    /// Get a nested answer mapping.
    pub fn get_map(&self, name: &str) -> Result<&Answers, AnswerError> {
        match self.get(name) {
            Some(AnswerValue::Map(answers)) => Ok(answers),
            Some(other) => Err(mismatch(name, "Map", other)),
            None => Err(AnswerError::MissingName(name.to_string())),
        }
    }
}

fn mismatch(name: &str, expected: &'static str, actual: &AnswerValue) -> AnswerError {
    AnswerError::TypeMismatch {
        name: name.to_string(),
        expected,
        actual: actual.type_name(),
    }
}

impl<K, V> FromIterator<(K, V)> for Answers
where
    K: Into<String>,
    V: Into<AnswerValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = Answers::new();
        for (name, value) in iter {
            answers.insert(name, value);
        }
        answers
    }
}

impl IntoIterator for Answers {
    type Item = (String, AnswerValue);
    type IntoIter = indexmap::map::IntoIter<String, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = (&'a String, &'a AnswerValue);
    type IntoIter = indexmap::map::Iter<'a, String, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
