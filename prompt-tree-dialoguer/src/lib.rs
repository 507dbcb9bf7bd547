//! # prompt-tree-dialoguer
//!
//! Dialoguer backend for prompt-tree.
//!
//! This crate asks the ordinary questions of a question tree using the
//! `dialoguer` library. Questions are presented step-by-step in a classic CLI
//! wizard style; repeats are confirmed with a yes/no prompt and display nodes
//! are printed with their `console` style.
//!
//! ## Example
//!
//! ```rust,no_run
//! use prompt_tree::{QuestionSpec, SurveyTree};
//! use prompt_tree_dialoguer::DialoguerBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let tree = SurveyTree::new(vec![
//!         QuestionSpec::text("name", "What is your name?"),
//!         QuestionSpec::int("age", "How old are you?"),
//!     ]);
//!
//!     let answers = tree.run(&DialoguerBackend::new())?;
//!     println!("{answers:#?}");
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerBackend, DialoguerError};
