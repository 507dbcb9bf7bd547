//! Core types for the prompt-tree crate.
//!
//! This crate provides the foundational types for describing question trees:
//! - `QuestionSpec` and `QuestionKind` - Nodes of a tree and their types
//! - `Conditional`, `Condition` and `Repeat` - Branching and repetition controls
//! - `Answers` and `AnswerValue` - The ordered answer store
//! - `LeafQuestion` and `WidgetKind` - What a leaf asker receives
//! - `LeafAsker`, `Confirmer` and `OutputSink` traits - For implementing backends

mod node_path;
pub use node_path::NodePath;

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::{AnswerError, Answers};

mod leaf;
pub use leaf::{Filter, LeafQuestion, When, WidgetKind};

mod question;
pub use question::{Condition, Conditional, QuestionKind, QuestionSpec, Repeat, RepeatMode};

mod error;
pub use error::{ConfigError, SurveyError};

mod traits;
pub use traits::{Confirmer, LeafAsker, OutputSink, PromptBackend};
