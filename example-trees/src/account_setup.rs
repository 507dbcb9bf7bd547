use prompt_tree_types::{AnswerValue, QuestionSpec};

pub const ACCOUNT_PRELUDE: &str = "Let's set up your account.";
pub const ACCOUNT_EPILOGUE: &str = "All done, welcome aboard!";

/// Every ordinary widget the interactive backends support.
pub fn account_setup() -> Vec<QuestionSpec> {
    vec![
        QuestionSpec::text("username", "Username:").with_filter(|value| match value {
            AnswerValue::String(s) => AnswerValue::String(s.trim().to_lowercase()),
            other => other,
        }),
        QuestionSpec::password("password", "Password:"),
        QuestionSpec::int("age", "How old are you?").with_default(30),
        QuestionSpec::ask("float", "height", "Height in meters:").with_default(1.75),
        QuestionSpec::ask("rawselect", "plan", "Which plan?")
            .with_choices(["free", "pro", "team"])
            .with_default("free"),
        QuestionSpec::ask("autocomplete", "timezone", "Timezone:").with_choices([
            "UTC",
            "Europe/Berlin",
            "America/New_York",
            "Asia/Tokyo",
        ]),
        QuestionSpec::ask("path", "home", "Project directory:").with_default("."),
        QuestionSpec::confirm("bio_wanted", "Write a short bio?").with_conditional(
            true,
            vec![QuestionSpec::ask("editor", "bio", "Tell us about yourself")],
        ),
        QuestionSpec::dict(
            "notifications",
            vec![
                QuestionSpec::checkbox(
                    "channels",
                    "Where should we notify you?",
                    ["email", "sms", "push"],
                )
                .with_default(vec!["email"]),
                QuestionSpec::int("digest_hours", "Digest interval in hours:")
                    .with_when(|answers| {
                        answers
                            .get_list("channels")
                            .is_ok_and(|channels| !channels.is_empty())
                    }),
            ],
        ),
    ]
}
