//! Repeated composites: a list of books, each a `[title, author]` pair.
//!
//! Run with: cargo run -p prompt-tree-requestty --example book_catalog

use example_trees::{BookShape, book_catalog};
use prompt_tree::SurveyTree;
use prompt_tree_requestty::RequesttyBackend;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let tree = SurveyTree::from(book_catalog(BookShape::List, -3))
        .with_prelude("Tell me about up to three books.")
        .with_epilogue("Thanks!");

    let answers = tree.run(&RequesttyBackend::new())?;
    for (i, book) in answers.get_list("books")?.iter().enumerate() {
        println!("{}. {book:?}", i + 1);
    }
    Ok(())
}
