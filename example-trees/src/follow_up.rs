use prompt_tree_types::{AnswerValue, Condition, QuestionSpec};

/// A yes/no question that unlocks two more text questions.
pub fn ask_more_questions() -> QuestionSpec {
    QuestionSpec::confirm("ask_more_questions", "Ask more questions?").with_conditional(
        true,
        vec![
            QuestionSpec::text("question2", "Enter some text:"),
            QuestionSpec::text("question3", "Enter some more text:"),
        ],
    )
}

/// Branching on a select answer, where one branch overwrites the door itself.
pub fn pick_a_door() -> Vec<QuestionSpec> {
    vec![
        QuestionSpec::select("door", "Which door do you open?", ["red", "green", "blue"])
            .with_default("green")
            .with_conditional(
                Condition::predicate(|door: &AnswerValue| door.as_str() != Some("green")),
                vec![
                    QuestionSpec::print("The door is locked.").with_style("yellow"),
                    QuestionSpec::select("door", "Pick another door:", ["green", "window"]),
                ],
            ),
        QuestionSpec::print("You step through.")
            .with_name("entered")
            .with_style("bold.green"),
    ]
}
