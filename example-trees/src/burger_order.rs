use prompt_tree_types::{AnswerValue, Condition, QuestionSpec};

pub const BURGER_PRELUDE: &str = "Welcome to the burger stand!";

/// The full order: every node kind, nested three levels deep.
///
/// Ordering a burger opens a branch with side dishes and a `toppings` dict.
/// Answering yes to the books question asks for up to three books, each a
/// `[title, author]` list, replacing the yes/no answer under `books`.
pub fn burger_order() -> Vec<QuestionSpec> {
    vec![
        QuestionSpec::confirm("burger", "Would you like to order a burger?").with_conditional(
            true,
            vec![
                QuestionSpec::confirm("fries", "Would you like fries with that?"),
                QuestionSpec::confirm("chili-fries", "Would you like chili on your fries?")
                    .with_when(|answers| answers.get_bool("fries").unwrap_or(false)),
                QuestionSpec::confirm("onion-rings", "Would you like onion rings?")
                    .with_when(|answers| !answers.get_bool("fries").unwrap_or(false)),
                toppings(),
            ],
        ),
        QuestionSpec::confirm(
            "books",
            "Would you like to tell me about some of your favorite books?",
        )
        .with_conditional(
            Condition::predicate(AnswerValue::is_truthy),
            vec![
                QuestionSpec::list(
                    "books",
                    vec![
                        QuestionSpec::text("book-title", "What's the title?"),
                        QuestionSpec::text("book-author", "Who's the author?"),
                    ],
                )
                .with_repeat(-3)
                .with_repeat_prompt("Add another book?"),
            ],
        ),
    ]
}

/// Condiments plus a nested dict of extras.
pub fn toppings() -> QuestionSpec {
    QuestionSpec::dict(
        "toppings",
        vec![
            QuestionSpec::print("Toppings & Special Requests").with_style("bold.italic.red"),
            QuestionSpec::checkbox(
                "condiments",
                "Select your condiments:",
                ["mustard", "mayonnaise", "green chiles"],
            ),
            QuestionSpec::dict(
                "extras",
                vec![
                    QuestionSpec::text("special_requests", "List any special requests: ")
                        .with_filter(|value| match value {
                            AnswerValue::String(s) => AnswerValue::String(s.to_uppercase()),
                            other => other,
                        }),
                    QuestionSpec::text("allergies", "If you have a food allergy, list it here:")
                        .with_repeat(2)
                        .with_repeat_prompt("If you have another food allergy, list it here:"),
                ],
            ),
        ],
    )
}
