//! # prompt-tree-requestty
//!
//! Requestty backend for prompt-tree.
//!
//! This crate asks the ordinary questions of a question tree using the
//! `requestty` library. Questions are presented step-by-step in a classic
//! CLI wizard style.
//!
//! # Example
//!
//! ```no_run
//! use prompt_tree::{QuestionSpec, resolve};
//! use prompt_tree_requestty::RequesttyBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let question = QuestionSpec::confirm("more", "Ask more questions?")
//!         .with_conditional(true, vec![QuestionSpec::text("text", "Enter some text:")]);
//!
//!     let answers = resolve(&RequesttyBackend::new(), question, None)?;
//!     println!("{answers:#?}");
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::RequesttyBackend;
pub use backend::RequesttyError;
