//! The full burger order, every node kind in one tree.
//!
//! Run with: cargo run -p prompt-tree-dialoguer --example burger_order
//!
//! Set `RUST_LOG=prompt_tree=debug` to follow the resolver.

use example_trees::{BURGER_PRELUDE, burger_order};
use prompt_tree::SurveyTree;
use prompt_tree_dialoguer::DialoguerBackend;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let tree = SurveyTree::new(burger_order()).with_prelude(BURGER_PRELUDE);
    let answers = tree.run(&DialoguerBackend::new())?;
    println!("{answers:#?}");
    Ok(())
}
