//! The three repeat modes, one after the other.
//!
//! Run with: cargo run -p prompt-tree-dialoguer --example favorite_books

use example_trees::{
    BookShape, book_catalog, books_until_declined, exactly_three_books, up_to_books,
};
use prompt_tree::resolve;
use prompt_tree_dialoguer::DialoguerBackend;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let backend = DialoguerBackend::new();
    let trees = [
        ("Ask for exactly 3 values (repeat = 3)", exactly_three_books()),
        ("Ask for up to 2 values (repeat = -2)", up_to_books(2)),
        ("Ask until you decline, at most 5 times", books_until_declined(5)),
        ("Title and author, up to 3 books", book_catalog(BookShape::Dict, -3)),
    ];

    for (title, question) in trees {
        println!("{title}");
        let answers = resolve(&backend, question, None)?;
        println!("{answers:#?}");
    }
    Ok(())
}
