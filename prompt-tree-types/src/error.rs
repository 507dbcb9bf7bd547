use crate::NodePath;

/// A question tree whose static shape is invalid.
///
/// Raised before any prompt is shown for the offending node.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Question '{0}' is missing a name")]
    MissingName(NodePath),

    #[error("Question '{0}' is missing a message")]
    MissingMessage(NodePath),

    #[error("Question '{0}' is missing a type")]
    MissingType(NodePath),

    #[error("Question '{path}' of type '{kind}' requires nested questions")]
    MissingNested { path: NodePath, kind: &'static str },

    #[error("Question '{path}' of type '{kind}' requires choices")]
    MissingChoices { path: NodePath, kind: &'static str },

    #[error("Question '{path}' has unknown type '{tag}'")]
    UnknownType { path: NodePath, tag: String },

    #[error("Question '{path}' has invalid repeat value {value}: {reason}")]
    InvalidRepeat {
        path: NodePath,
        value: String,
        reason: &'static str,
    },

    #[error("Question '{0}' has repeat_max 0, it must be a positive integer")]
    InvalidRepeatMax(NodePath),

    #[error("Problem in conditional check of '{path}' question: {source}")]
    Condition {
        path: NodePath,
        #[source]
        source: anyhow::Error,
    },
}

impl ConfigError {
    /// The node this error is about.
    pub fn path(&self) -> &NodePath {
        match self {
            Self::MissingName(path)
            | Self::MissingMessage(path)
            | Self::MissingType(path)
            | Self::InvalidRepeatMax(path) => path,
            Self::MissingNested { path, .. }
            | Self::MissingChoices { path, .. }
            | Self::UnknownType { path, .. }
            | Self::InvalidRepeat { path, .. }
            | Self::Condition { path, .. } => path,
        }
    }
}

/// Error type for resolving a question tree.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// The question tree is malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// User cancelled the survey (Ctrl+C, Escape, etc.)
    #[error("Survey cancelled by user")]
    Cancelled,

    /// Backend-specific failure (I/O, terminal errors, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl SurveyError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if this error reports a malformed question tree.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// The configuration error, if this is one.
    pub fn as_config(&self) -> Option<&ConfigError> {
        match self {
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_node() {
        let err = ConfigError::MissingNested {
            path: NodePath::new("toppings"),
            kind: "dict",
        };
        assert_eq!(
            err.to_string(),
            "Question 'toppings' of type 'dict' requires nested questions"
        );
        assert_eq!(err.path().as_str(), "toppings");
    }

    #[test]
    fn condition_error_keeps_source() {
        let err = ConfigError::Condition {
            path: NodePath::new("burger"),
            source: anyhow::anyhow!("boom"),
        };
        assert_eq!(
            err.to_string(),
            "Problem in conditional check of 'burger' question: boom"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn survey_error_kinds() {
        let err = SurveyError::from(ConfigError::MissingName(NodePath::root()));
        assert!(err.is_config());
        assert!(!err.is_cancelled());
        assert!(SurveyError::Cancelled.is_cancelled());
        assert_eq!(SurveyError::Cancelled.to_string(), "Survey cancelled by user");
    }
}
