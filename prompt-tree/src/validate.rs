//! Structural checks and classification of a single tree node.

use prompt_tree_types::{ConfigError, NodePath, QuestionKind, QuestionSpec, RepeatMode};

/// How the resolver handles one node, once its shape has been checked.
#[derive(Debug)]
pub(crate) enum Node<'s> {
    Repeated { name: &'s str, mode: RepeatMode },
    Single(Shape<'s>),
}

/// A node asked a single time.
#[derive(Debug)]
pub(crate) enum Shape<'s> {
    Composite {
        name: &'s str,
        kind: Composite,
        nested: &'s [QuestionSpec],
    },
    Display {
        name: Option<&'s str>,
        message: &'s str,
    },
    Ordinary {
        name: &'s str,
        tag: &'s str,
        message: &'s str,
    },
}

impl<'s> Shape<'s> {
    /// The name the node's value is stored under, if any.
    pub(crate) fn name(&self) -> Option<&'s str> {
        match self {
            Self::Composite { name, .. } | Self::Ordinary { name, .. } => Some(*name),
            Self::Display { name, .. } => *name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Composite {
    List,
    Dict,
}

impl Composite {
    fn tag(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Dict => "dict",
        }
    }
}

/// Check the node's shape and decide how to resolve it.
///
/// Repeated nodes are also checked as single-shot nodes, so that a broken
/// repeated node fails before its first ask.
pub(crate) fn classify<'s>(
    spec: &'s QuestionSpec,
    path: &NodePath,
) -> Result<Node<'s>, ConfigError> {
    if spec.repeat_max == Some(0) {
        return Err(ConfigError::InvalidRepeatMax(path.clone()));
    }

    if let Some(repeat) = spec.repeat {
        let mode = repeat.mode().map_err(|reason| ConfigError::InvalidRepeat {
            path: path.clone(),
            value: repeat.to_string(),
            reason,
        })?;
        if let Some(mode) = mode {
            let name = required_name(spec, path)?;
            classify_once(spec, path)?;
            return Ok(Node::Repeated { name, mode });
        }
    }

    classify_once(spec, path).map(Node::Single)
}

/// Classify the node as if it had no repeat configured.
pub(crate) fn classify_once<'s>(
    spec: &'s QuestionSpec,
    path: &NodePath,
) -> Result<Shape<'s>, ConfigError> {
    let Some(kind) = &spec.kind else {
        return Err(ConfigError::MissingType(path.clone()));
    };

    match kind {
        QuestionKind::List => composite(spec, path, Composite::List),
        QuestionKind::Dict => composite(spec, path, Composite::Dict),
        QuestionKind::Print => Ok(Shape::Display {
            name: spec.name.as_deref().filter(|name| !name.is_empty()),
            message: required_message(spec, path)?,
        }),
        QuestionKind::Delegate(tag) => Ok(Shape::Ordinary {
            name: required_name(spec, path)?,
            tag,
            message: required_message(spec, path)?,
        }),
    }
}

fn composite<'s>(
    spec: &'s QuestionSpec,
    path: &NodePath,
    kind: Composite,
) -> Result<Shape<'s>, ConfigError> {
    let name = required_name(spec, path)?;
    if spec.nested.is_empty() {
        return Err(ConfigError::MissingNested {
            path: path.clone(),
            kind: kind.tag(),
        });
    }
    Ok(Shape::Composite {
        name,
        kind,
        nested: &spec.nested,
    })
}

fn required_name<'s>(spec: &'s QuestionSpec, path: &NodePath) -> Result<&'s str, ConfigError> {
    match spec.name.as_deref() {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(ConfigError::MissingName(path.clone())),
    }
}

fn required_message<'s>(
    spec: &'s QuestionSpec,
    path: &NodePath,
) -> Result<&'s str, ConfigError> {
    match spec.message.as_deref() {
        Some(message) if !message.is_empty() => Ok(message),
        _ => Err(ConfigError::MissingMessage(path.clone())),
    }
}
