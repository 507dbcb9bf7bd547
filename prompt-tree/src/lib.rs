//! # prompt-tree
//!
//! Resolve nested, conditional and repeated question trees into a single
//! ordered answer map. Backend-agnostic.
//!
//! A tree is a list of [`QuestionSpec`] nodes. Each node is one of:
//! - an ordinary question, handed to a [`LeafAsker`]
//! - a `list` or `dict` composite, whose nested questions are resolved in a
//!   fresh scope and folded into one value
//! - a `print` node, shown through an [`OutputSink`]
//!
//! Any node can be repeated, and ordinary questions can gate a conditional
//! branch on their answer.
//!
//! ## Usage
//!
//! ```rust
//! use prompt_tree::{QuestionSpec, SurveyTree, TestBackend};
//!
//! let tree = SurveyTree::new(vec![
//!     QuestionSpec::confirm("hungry", "Are you hungry?")
//!         .with_conditional(true, vec![QuestionSpec::text("food", "What do you want?")]),
//!     QuestionSpec::text("books", "Name a book you like:")
//!         .with_repeat(-3)
//!         .with_repeat_prompt("Add another book?"),
//! ]);
//!
//! let backend = TestBackend::new()
//!     .with_answer(true)
//!     .with_answer("pizza")
//!     .with_answer("Dune")
//!     .with_confirmation(false);
//!
//! let answers = tree.run(&backend).unwrap();
//! assert_eq!(answers.get_string("food").unwrap(), "pizza");
//! assert_eq!(answers.get_list("books").unwrap().len(), 1);
//! ```
//!
//! ## Repeats
//!
//! - `repeat: n` with `n > 0` - ask exactly `n` times
//! - `repeat: -n` - ask once, then up to `n - 1` more times while the user confirms
//! - `repeat: true` - ask until the user declines
//! - `repeat_max` - hard cap for every mode
//!
//! ## Backends
//!
//! Backends are separate crates that implement [`LeafAsker`], [`Confirmer`]
//! and [`OutputSink`]:
//! - `prompt-tree-dialoguer` - CLI prompts via dialoguer
//! - `prompt-tree-requestty` - CLI prompts via requestty

// Re-export all types from prompt-tree-types
pub use prompt_tree_types::*;

mod repeat;
mod resolver;
mod validate;

mod survey;
pub use resolver::Resolver;
pub use survey::{SurveyTree, resolve};

// Test backend for resolving trees without user interaction
mod test_backend;
pub use test_backend::{TestBackend, TestBackendError};
