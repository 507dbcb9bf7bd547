//! The same book question under every repeat mode.

use prompt_tree_types::QuestionSpec;

/// How each collected book is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookShape {
    /// `["Dune", "Frank Herbert"]`
    List,
    /// `{title: "Dune", author: "Frank Herbert"}`
    Dict,
}

/// Ask for exactly three book names; the second and third ask say "another".
pub fn exactly_three_books() -> QuestionSpec {
    QuestionSpec::text("books", "Name of a book you like:")
        .with_repeat(3)
        .with_repeat_prompt("Name of another book you like:")
}

/// Ask for at least one and at most `max` book names.
pub fn up_to_books(max: i64) -> QuestionSpec {
    QuestionSpec::text("books", "Name of a book you like:")
        .with_repeat(-max)
        .with_repeat_prompt("Enter another book?")
}

/// Keep asking until the user declines, never more than `cap` times.
pub fn books_until_declined(cap: usize) -> QuestionSpec {
    QuestionSpec::text("books", "Name of a book you like:")
        .with_repeat(true)
        .with_repeat_max(cap)
}

/// Title and author of several books, each folded into a list or a dict.
pub fn book_catalog(shape: BookShape, repeat: i64) -> QuestionSpec {
    let nested = vec![
        QuestionSpec::text("title", "What's the title?"),
        QuestionSpec::text("author", "Who's the author?"),
    ];
    let catalog = match shape {
        BookShape::List => QuestionSpec::list("books", nested),
        BookShape::Dict => QuestionSpec::dict("books", nested),
    };
    catalog
        .with_repeat(repeat)
        .with_repeat_prompt("Enter another book?")
}
