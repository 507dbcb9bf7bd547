pub mod account_setup;
pub mod burger_order;
pub mod favorite_books;
pub mod follow_up;

// Re-export account_setup trees
pub use account_setup::{ACCOUNT_EPILOGUE, ACCOUNT_PRELUDE, account_setup};

// Re-export burger_order trees
pub use burger_order::{BURGER_PRELUDE, burger_order, toppings};

// Re-export favorite_books trees
pub use favorite_books::{
    BookShape, book_catalog, books_until_declined, exactly_three_books, up_to_books,
};

// Re-export follow_up trees
pub use follow_up::{ask_more_questions, pick_a_door};
