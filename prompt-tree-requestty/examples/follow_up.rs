//! Conditional branches: a yes/no gate and a select that can overwrite itself.
//!
//! Run with: cargo run -p prompt-tree-requestty --example follow_up

use example_trees::{ask_more_questions, pick_a_door};
use prompt_tree::Resolver;
use prompt_tree_requestty::RequesttyBackend;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let backend = RequesttyBackend::new();
    let resolver = Resolver::new(&backend);

    let answers = resolver.resolve(&[ask_more_questions()], None)?;
    println!("{answers:#?}");

    // Start from the first answers, the seed itself stays untouched
    let answers = resolver.resolve(&pick_a_door(), Some(&answers))?;
    println!("{answers:#?}");
    Ok(())
}
