//! Integration tests for the resolver

use prompt_tree::{
    AnswerValue, Answers, Condition, ConfigError, QuestionSpec, Resolver, SurveyError,
    SurveyTree, TestBackend, resolve,
};

fn map<V: Into<AnswerValue>>(entries: Vec<(&str, V)>) -> Answers {
    entries.into_iter().collect()
}

fn title_and_author() -> Vec<QuestionSpec> {
    vec![
        QuestionSpec::text("title", "What's the title?"),
        QuestionSpec::text("author", "Who's the author?"),
    ]
}

fn run(questions: &[QuestionSpec], backend: &TestBackend) -> Result<Answers, SurveyError> {
    Resolver::new(backend).resolve(questions, None)
}

#[test]
fn test_ordinary_questions_in_order() {
    let questions = vec![
        QuestionSpec::text("name", "What is your name?"),
        QuestionSpec::int("age", "How old are you?"),
        QuestionSpec::confirm("student", "Are you a student?"),
    ];
    let backend = TestBackend::new()
        .with_answer("Alice")
        .with_answer(30)
        .with_answer(true);

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(
        answers.names().collect::<Vec<_>>(),
        vec!["name", "age", "student"]
    );
    assert_eq!(answers.get_string("name").unwrap(), "Alice");
    assert_eq!(answers.get_int("age").unwrap(), 30);
    assert!(answers.get_bool("student").unwrap());
}

#[test]
fn test_reused_name_overwrites_in_place() {
    let questions = vec![
        QuestionSpec::text("a", "First a:"),
        QuestionSpec::text("b", "Then b:"),
        QuestionSpec::text("a", "Second a:"),
    ];
    let backend = TestBackend::new().with_answers(["X", "Y", "Z"]);

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(answers.len(), 2);
    assert_eq!(answers.names().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(answers.get_string("a").unwrap(), "Z");
}

#[test]
fn test_dict_composite() {
    let questions = vec![QuestionSpec::dict("dict_values", title_and_author())];
    let backend = TestBackend::new().with_answers(["Dune", "Frank Herbert"]);

    let answers = run(&questions, &backend).unwrap();

    let expected = map(vec![(
        "dict_values",
        map(vec![("title", "Dune"), ("author", "Frank Herbert")]),
    )]);
    assert_eq!(answers, expected);
}

#[test]
fn test_list_composite() {
    let questions = vec![QuestionSpec::list("list_values", title_and_author())];
    let backend = TestBackend::new().with_answers(["Dune", "Frank Herbert"]);

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(
        answers.get("list_values"),
        Some(&AnswerValue::from(vec!["Dune", "Frank Herbert"]))
    );
}

#[test]
fn test_composite_children_are_isolated() {
    let questions = vec![
        QuestionSpec::text("title", "Outer title:"),
        QuestionSpec::dict("book", title_and_author()),
    ];
    let backend = TestBackend::new().with_answers(["Outer", "Dune", "Frank Herbert"]);

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(answers.get_string("title").unwrap(), "Outer");
    assert!(!answers.contains("author"));
    assert_eq!(
        answers.get_map("book").unwrap().get_string("title").unwrap(),
        "Dune"
    );
}

#[test]
fn test_composite_children_only_see_their_own_scope() {
    let questions = vec![
        QuestionSpec::confirm("vip", "Are you a VIP?"),
        QuestionSpec::dict(
            "order",
            vec![
                QuestionSpec::text("drink", "Drink:"),
                QuestionSpec::text("champagne", "Which champagne?")
                    .with_when(|answers| answers.get_bool("vip").unwrap_or(false)),
            ],
        ),
    ];
    let backend = TestBackend::new().with_answer(true).with_answer("water");

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(
        answers.get("order"),
        Some(&AnswerValue::Map(map(vec![("drink", "water")])))
    );
    assert_eq!(backend.asked_names(), vec!["vip", "drink"]);
}

#[test]
fn test_exact_repeat() {
    let questions = vec![
        QuestionSpec::text("books", "Name of a book you like:")
            .with_repeat(3)
            .with_repeat_prompt("Name of another book you like:"),
    ];
    let backend = TestBackend::new().with_answers(["A", "B", "C"]);

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(
        answers.get("books"),
        Some(&AnswerValue::from(vec!["A", "B", "C"]))
    );
    assert!(backend.confirm_prompts().is_empty());
    assert_eq!(
        backend.asked_messages(),
        vec![
            "Name of a book you like:",
            "Name of another book you like:",
            "Name of another book you like:",
        ]
    );
}

#[test]
fn test_exact_repeat_without_prompt_reuses_message() {
    let questions = vec![QuestionSpec::text("allergies", "Allergy:").with_repeat(2)];
    let backend = TestBackend::new().with_answers(["gluten", "dairy"]);

    run(&questions, &backend).unwrap();

    assert_eq!(backend.asked_messages(), vec!["Allergy:", "Allergy:"]);
}

#[test]
fn test_bounded_repeat_stops_when_declined() {
    let questions = vec![
        QuestionSpec::text("books", "Book?")
            .with_repeat(-3)
            .with_repeat_prompt("Enter another book?"),
    ];
    let backend = TestBackend::new()
        .with_answers(["A", "B", "C"])
        .with_confirmations([true, false]);

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(answers.get_list("books").unwrap().len(), 2);
    assert_eq!(
        backend.confirm_prompts(),
        vec!["Enter another book?", "Enter another book?"]
    );
    assert_eq!(backend.remaining_answers(), 1);
}

#[test]
fn test_bounded_repeat_stops_at_bound() {
    let questions = vec![QuestionSpec::text("books", "Book?").with_repeat(-3)];
    let backend = TestBackend::new()
        .with_answers(["A", "B", "C"])
        .with_confirmations([true, true, true]);

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(
        answers.get("books"),
        Some(&AnswerValue::from(vec!["A", "B", "C"]))
    );
    assert_eq!(backend.confirm_prompts().len(), 2);
    assert_eq!(backend.remaining_confirmations(), 1);
}

#[test]
fn test_bounded_repeat_declined_at_once() {
    let questions = vec![QuestionSpec::text("books", "Book?").with_repeat(-3)];
    let backend = TestBackend::new()
        .with_answer("A")
        .with_confirmation(false);

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(answers.get("books"), Some(&AnswerValue::from(vec!["A"])));
    assert_eq!(backend.confirm_prompts(), vec!["Book?"]);
}

#[test]
fn test_repeated_composite_without_message_uses_generic_prompt() {
    let questions = vec![QuestionSpec::dict("books", title_and_author()).with_repeat(true)];
    let backend = TestBackend::new()
        .with_answers(["Dune", "Frank Herbert"])
        .with_confirmation(false);

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(answers.get_list("books").unwrap().len(), 1);
    assert_eq!(
        backend.confirm_prompts(),
        vec!["Add another value for books?"]
    );
}

#[test]
fn test_bound_of_one_never_confirms() {
    let questions = vec![QuestionSpec::text("books", "Book?").with_repeat(-1)];
    let backend = TestBackend::new().with_answer("A");

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(answers.get_list("books").unwrap().len(), 1);
    assert!(backend.confirm_prompts().is_empty());
}

#[test]
fn test_unbounded_repeat_until_declined() {
    let questions = vec![QuestionSpec::text("tags", "Tag:").with_repeat(true)];
    let backend = TestBackend::new()
        .with_answers(["a", "b", "c", "d"])
        .with_confirmations([true, true, true, false]);

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(answers.get_list("tags").unwrap().len(), 4);
}

#[test]
fn test_repeat_max_caps_every_mode() {
    let unbounded = vec![
        QuestionSpec::text("tags", "Tag:")
            .with_repeat(true)
            .with_repeat_max(2),
    ];
    let backend = TestBackend::new()
        .with_answers(["a", "b"])
        .with_confirmations([true]);
    let answers = run(&unbounded, &backend).unwrap();
    assert_eq!(answers.get("tags"), Some(&AnswerValue::from(vec!["a", "b"])));
    assert_eq!(backend.remaining_confirmations(), 0);

    let exact = vec![QuestionSpec::text("tags", "Tag:").with_repeat(5).with_repeat_max(2)];
    let backend = TestBackend::new().with_answers(["a", "b", "c"]);
    let answers = run(&exact, &backend).unwrap();
    assert_eq!(answers.get_list("tags").unwrap().len(), 2);
    assert_eq!(backend.remaining_answers(), 1);
}

#[test]
fn test_repeat_replaces_earlier_value() {
    let questions = vec![
        QuestionSpec::confirm("books", "Any favorite books?"),
        QuestionSpec::text("other", "Something else:"),
        QuestionSpec::text("books", "Book:").with_repeat(2),
    ];
    let backend = TestBackend::new().with_answer(true).with_answers(["x", "A", "B"]);

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(answers.names().collect::<Vec<_>>(), vec!["books", "other"]);
    assert_eq!(answers.get("books"), Some(&AnswerValue::from(vec!["A", "B"])));
}

#[test]
fn test_repeated_list_composite() {
    let questions = vec![QuestionSpec::list("books", title_and_author()).with_repeat(3)];
    let backend = TestBackend::new().with_answers([
        "Dune",
        "Frank Herbert",
        "The Lord of the Rings",
        "J.R.R. Tolkien",
        "Hyperion",
        "Dan Simmons",
    ]);

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(
        answers.get("books"),
        Some(&AnswerValue::List(vec![
            vec!["Dune", "Frank Herbert"].into(),
            vec!["The Lord of the Rings", "J.R.R. Tolkien"].into(),
            vec!["Hyperion", "Dan Simmons"].into(),
        ]))
    );
}

#[test]
fn test_repeated_dict_composite_with_confirmations() {
    let questions = vec![
        QuestionSpec::dict("books", title_and_author())
            .with_repeat(-3)
            .with_repeat_prompt("Enter another book?"),
    ];
    let books = [
        "Dune",
        "Frank Herbert",
        "The Lord of the Rings",
        "J.R.R. Tolkien",
        "Hyperion",
        "Dan Simmons",
    ];

    let backend = TestBackend::new()
        .with_answers(books)
        .with_confirmations([true, true, true]);
    let answers = run(&questions, &backend).unwrap();
    let collected = answers.get_list("books").unwrap();
    assert_eq!(collected.len(), 3);
    assert_eq!(
        collected[2],
        AnswerValue::Map(map(vec![("title", "Hyperion"), ("author", "Dan Simmons")]))
    );

    let backend = TestBackend::new()
        .with_answers(books)
        .with_confirmations([true, false]);
    let answers = run(&questions, &backend).unwrap();
    assert_eq!(answers.get_list("books").unwrap().len(), 2);

    let backend = TestBackend::new()
        .with_answers(books)
        .with_confirmations([false]);
    let answers = run(&questions, &backend).unwrap();
    assert_eq!(
        answers.get("books"),
        Some(&AnswerValue::List(vec![AnswerValue::Map(map(vec![
            ("title", "Dune"),
            ("author", "Frank Herbert"),
        ]))]))
    );
}

#[test]
fn test_repeat_skipped_by_when_stores_nothing() {
    let questions = vec![
        QuestionSpec::text("books", "Book:")
            .with_repeat(3)
            .with_when(|_| false),
    ];
    let backend = TestBackend::new();

    let answers = run(&questions, &backend).unwrap();

    assert!(answers.is_empty());
    assert!(backend.asked_names().is_empty());
}

#[test]
fn test_repeat_ignores_conditional() {
    let questions = vec![
        QuestionSpec::confirm("again", "Again?")
            .with_repeat(2)
            .with_conditional(true, vec![QuestionSpec::text("why", "Why?")]),
    ];
    let backend = TestBackend::new().with_answers([true, true]);

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(answers.get("again"), Some(&AnswerValue::from(vec![true, true])));
    assert!(!answers.contains("why"));
}

#[test]
fn test_conditional_literal_true() {
    let questions = vec![
        QuestionSpec::confirm("ask_more", "Ask you more questions?")
            .with_conditional(true, vec![QuestionSpec::text("some_text", "enter some text")]),
    ];
    let backend = TestBackend::new().with_answer(true).with_answer("foo");

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(
        answers,
        map(vec![
            ("ask_more", AnswerValue::from(true)),
            ("some_text", AnswerValue::from("foo")),
        ])
    );
}

#[test]
fn test_conditional_literal_false_skips_on_yes() {
    let questions = vec![
        QuestionSpec::confirm("ask_more", "Ask you more questions?")
            .with_conditional(false, vec![QuestionSpec::text("some_text", "enter some text")]),
    ];
    let backend = TestBackend::new().with_answer(true);

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(answers, map(vec![("ask_more", true)]));
}

#[test]
fn test_conditional_literal_compares_strings() {
    let questions = vec![
        QuestionSpec::select("door", "Which door?", ["red", "blue"])
            .with_conditional("blue", vec![QuestionSpec::text("key", "Which key?")]),
    ];

    let backend = TestBackend::new().with_answer("red");
    assert!(!run(&questions, &backend).unwrap().contains("key"));

    let backend = TestBackend::new().with_answers(["blue", "silver"]);
    assert_eq!(
        run(&questions, &backend).unwrap().get_string("key").unwrap(),
        "silver"
    );
}

#[test]
fn test_conditional_predicate() {
    let questions = vec![
        QuestionSpec::confirm("ask_more", "Ask you more questions?").with_conditional(
            Condition::predicate(AnswerValue::is_truthy),
            vec![QuestionSpec::text("some_text", "enter some text")],
        ),
    ];

    let backend = TestBackend::new().with_answer(true).with_answer("foo");
    let answers = run(&questions, &backend).unwrap();
    assert_eq!(answers.get_string("some_text").unwrap(), "foo");

    let backend = TestBackend::new().with_answer(false);
    let answers = run(&questions, &backend).unwrap();
    assert_eq!(answers, map(vec![("ask_more", false)]));
}

#[test]
fn test_conditional_branch_shares_scope() {
    let questions = vec![
        QuestionSpec::text("color", "Favorite color:").with_conditional(
            Condition::predicate(|_| true),
            vec![
                QuestionSpec::text("shade", "Which shade?")
                    .with_when(|answers| answers.get_string("color").is_ok_and(|c| c == "blue")),
                QuestionSpec::text("color", "Are you sure? Color again:"),
            ],
        ),
    ];
    let backend = TestBackend::new().with_answers(["blue", "navy", "green"]);

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(answers.names().collect::<Vec<_>>(), vec!["color", "shade"]);
    assert_eq!(answers.get_string("color").unwrap(), "green");
    assert_eq!(answers.get_string("shade").unwrap(), "navy");
}

#[test]
fn test_conditional_sees_no_value_when_skipped() {
    let questions = vec![
        QuestionSpec::confirm("hidden", "Never shown")
            .with_when(|_| false)
            .with_conditional(
                Condition::predicate(AnswerValue::is_none),
                vec![QuestionSpec::text("fallback", "Fallback:")],
            ),
    ];
    let backend = TestBackend::new().with_answer("plan b");

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(answers, map(vec![("fallback", "plan b")]));
}

#[test]
fn test_hidden_gate_ignores_seeded_value() {
    let seed = map(vec![("gate", "old")]);
    let questions = vec![
        QuestionSpec::text("gate", "Gate:")
            .with_when(|_| false)
            .with_conditional(
                Condition::predicate(AnswerValue::is_none),
                vec![QuestionSpec::text("fallback", "Fallback:")],
            ),
    ];
    let backend = TestBackend::new().with_answer("plan b");

    let answers = Resolver::new(&backend)
        .resolve(&questions, Some(&seed))
        .unwrap();

    assert_eq!(answers, map(vec![("gate", "old"), ("fallback", "plan b")]));
}

#[test]
fn test_hidden_gate_ignores_earlier_sibling() {
    let questions = vec![
        QuestionSpec::confirm("burger", "Burger?"),
        QuestionSpec::confirm("burger", "Another burger?")
            .with_when(|_| false)
            .with_conditional(true, vec![QuestionSpec::text("sauce", "Sauce?")]),
    ];
    let backend = TestBackend::new().with_answer(true);

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(answers, map(vec![("burger", true)]));
    assert_eq!(backend.asked_names(), vec!["burger"]);
}

#[test]
fn test_failing_condition_is_a_config_error() {
    let questions = vec![
        QuestionSpec::confirm("burger", "Burger?").with_conditional(
            Condition::try_predicate(|_| anyhow::bail!("no kitchen")),
            vec![QuestionSpec::text("fries", "Fries?")],
        ),
    ];
    let backend = TestBackend::new().with_answer(true);

    let err = run(&questions, &backend).unwrap_err();

    let Some(ConfigError::Condition { path, .. }) = err.as_config() else {
        panic!("expected a condition error, got {err:?}");
    };
    assert_eq!(path.as_str(), "burger");
    assert!(err.to_string().contains("burger"));
    assert!(err.to_string().contains("no kitchen"));
    assert_eq!(backend.asked_names(), vec!["burger"]);
}

#[test]
fn test_print_without_name() {
    let questions = vec![
        QuestionSpec::print("Hello!").with_style("bold.red"),
        QuestionSpec::text("name", "Name:"),
    ];
    let backend = TestBackend::new().with_answer("Alice");

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(answers, map(vec![("name", "Alice")]));
    assert_eq!(backend.displayed(), vec!["Hello!"]);
}

#[test]
fn test_print_with_name() {
    let questions = vec![QuestionSpec::print("Hello!").with_name("hello")];
    let backend = TestBackend::new();

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(answers.get("hello"), Some(&AnswerValue::None));
}

#[test]
fn test_missing_nested_fails_before_asking() {
    for tag in ["dict", "list"] {
        let questions = vec![
            QuestionSpec::new(tag)
                .with_name("outer")
                .with_message("This doesn't matter"),
        ];
        let backend = TestBackend::new().with_answer("unused");

        let err = run(&questions, &backend).unwrap_err();

        assert!(
            matches!(err.as_config(), Some(ConfigError::MissingNested { .. })),
            "{tag}: {err}"
        );
        assert_eq!(backend.remaining_answers(), 1);
    }
}

#[test]
fn test_padded_composite_tag_is_unknown() {
    let questions = vec![
        QuestionSpec::new(" dict")
            .with_name("outer")
            .with_message("Padded tag"),
    ];
    let backend = TestBackend::new().with_answer("unused");

    let err = run(&questions, &backend).unwrap_err();

    assert!(matches!(
        err.as_config(),
        Some(ConfigError::UnknownType { tag, .. }) if tag == " dict"
    ));
    assert_eq!(backend.remaining_answers(), 1);
}

#[test]
fn test_missing_fields_fail_eagerly() {
    let cases = vec![
        QuestionSpec::new("text").with_name("a"),
        QuestionSpec::new("text").with_message("A?"),
        QuestionSpec::default().with_name("a").with_message("A?"),
        QuestionSpec::new("print"),
    ];
    for spec in cases {
        let backend = TestBackend::new().with_answer("unused");
        let err = run(std::slice::from_ref(&spec), &backend).unwrap_err();
        assert!(err.is_config(), "{spec:?}: {err}");
        assert_eq!(backend.remaining_answers(), 1);
    }
}

#[test]
fn test_later_broken_node_fails_after_earlier_asks() {
    let questions = vec![
        QuestionSpec::text("name", "Name:"),
        QuestionSpec::ask("slider", "volume", "Volume:"),
    ];
    let backend = TestBackend::new().with_answers(["Alice", "11"]);

    let err = run(&questions, &backend).unwrap_err();

    assert!(matches!(err.as_config(), Some(ConfigError::UnknownType { .. })));
    assert_eq!(backend.asked_names(), vec!["name"]);
}

#[test]
fn test_select_without_choices() {
    let questions = vec![QuestionSpec::ask("select", "door", "Which door?")];
    let backend = TestBackend::new().with_answer("red");

    let err = run(&questions, &backend).unwrap_err();

    assert!(matches!(
        err.as_config(),
        Some(ConfigError::MissingChoices { kind: "select", .. })
    ));
}

#[test]
fn test_invalid_repeat_values() {
    let zero = vec![QuestionSpec::text("books", "Book:").with_repeat(0)];
    let err = run(&zero, &TestBackend::new()).unwrap_err();
    assert!(matches!(err.as_config(), Some(ConfigError::InvalidRepeat { .. })));

    let no_max = vec![
        QuestionSpec::text("books", "Book:")
            .with_repeat(true)
            .with_repeat_max(0),
    ];
    let err = run(&no_max, &TestBackend::new()).unwrap_err();
    assert!(matches!(err.as_config(), Some(ConfigError::InvalidRepeatMax(_))));

    let unnamed = vec![QuestionSpec::new("text").with_message("Book:").with_repeat(2)];
    let err = run(&unnamed, &TestBackend::new()).unwrap_err();
    assert!(matches!(err.as_config(), Some(ConfigError::MissingName(_))));
}

#[test]
fn test_disabled_repeat_asks_once() {
    let questions = vec![QuestionSpec::text("book", "Book:").with_repeat(false)];
    let backend = TestBackend::new().with_answer("Dune");

    let answers = run(&questions, &backend).unwrap();

    assert_eq!(answers.get_string("book").unwrap(), "Dune");
}

#[test]
fn test_error_paths_point_into_the_tree() {
    let questions = vec![
        QuestionSpec::text("name", "Name:"),
        QuestionSpec::dict(
            "order",
            vec![
                QuestionSpec::text("drink", "Drink:"),
                QuestionSpec::list("sides", vec![]),
            ],
        ),
    ];
    let backend = TestBackend::new().with_answers(["Alice", "water"]);

    let err = run(&questions, &backend).unwrap_err();

    assert_eq!(
        err.as_config().map(|err| err.path().as_str()),
        Some("order.sides")
    );
}

#[test]
fn test_seed_is_not_mutated() {
    let seed = map(vec![("source", "cli"), ("name", "nobody")]);
    let questions = vec![QuestionSpec::text("name", "Name:")];
    let backend = TestBackend::new().with_answer("Alice");

    let answers = Resolver::new(&backend)
        .resolve(&questions, Some(&seed))
        .unwrap();

    assert_eq!(seed.get_string("name").unwrap(), "nobody");
    assert_eq!(answers.names().collect::<Vec<_>>(), vec!["source", "name"]);
    assert_eq!(answers.get_string("name").unwrap(), "Alice");
}

#[test]
fn test_seed_is_visible_to_when() {
    let seed = map(vec![("expert", true)]);
    let questions = vec![
        QuestionSpec::text("shortcut", "Shortcut:")
            .with_when(|answers| answers.get_bool("expert").unwrap_or(false)),
    ];
    let backend = TestBackend::new().with_answer("ctrl-k");

    let answers = resolve(&backend, questions, Some(&seed)).unwrap();

    assert_eq!(answers.get_string("shortcut").unwrap(), "ctrl-k");
}

#[test]
fn test_single_question_is_a_tree() {
    let backend = TestBackend::new().with_answer("Alice");

    let answers = resolve(&backend, QuestionSpec::text("name", "Name:"), None).unwrap();

    assert_eq!(answers, map(vec![("name", "Alice")]));
}

#[test]
fn test_cancellation_propagates() {
    let questions = vec![
        QuestionSpec::text("name", "Name:"),
        QuestionSpec::dict("book", title_and_author()),
        QuestionSpec::text("after", "Never asked:"),
    ];
    let backend = TestBackend::new().with_answers(["Alice", "Dune"]).with_interrupt();

    let err = run(&questions, &backend).unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(backend.asked_names(), vec!["name", "title", "author"]);
}

#[test]
fn test_cancellation_during_confirmation() {
    let questions = vec![QuestionSpec::text("books", "Book:").with_repeat(true)];
    let backend = TestBackend::new().with_answer("Dune").with_confirm_interrupt();

    let err = run(&questions, &backend).unwrap_err();

    assert!(matches!(err, SurveyError::Cancelled));
}

#[test]
fn test_prelude_and_epilogue() {
    let tree = SurveyTree::new(vec![QuestionSpec::text("host", "Server host:")])
        .with_prelude("Welcome to the server configuration!")
        .with_epilogue("Configuration complete.");
    let backend = TestBackend::new().with_answer("localhost");

    tree.run(&backend).unwrap();

    assert_eq!(
        backend.displayed(),
        vec![
            "Welcome to the server configuration!",
            "Configuration complete.",
        ]
    );
}

#[test]
fn test_epilogue_skipped_on_error() {
    let tree = SurveyTree::new(vec![QuestionSpec::text("host", "Server host:")])
        .with_prelude("Welcome!")
        .with_epilogue("Done.");
    let backend = TestBackend::new().with_interrupt();

    assert!(tree.run(&backend).is_err());
    assert_eq!(backend.displayed(), vec!["Welcome!"]);
}

#[test]
fn test_tree_seed_is_reused_between_runs() {
    let tree = SurveyTree::from(QuestionSpec::text("name", "Name:"))
        .with_answers(map(vec![("team", "core")]));

    for name in ["Alice", "Bob"] {
        let backend = TestBackend::new().with_answer(name);
        let answers = tree.run(&backend).unwrap();
        assert_eq!(answers.get_string("team").unwrap(), "core");
        assert_eq!(answers.get_string("name").unwrap(), name);
    }
    assert_eq!(tree.answers.as_ref().map(Answers::len), Some(1));
}

#[test]
fn test_tree_built_question_by_question() {
    let tree = SurveyTree::default()
        .with_question(QuestionSpec::text("host", "Server host:"))
        .with_question(QuestionSpec::int("port", "Server port:"));
    let backend = TestBackend::new().with_answer("localhost").with_answer(8080);

    let answers = tree.run(&backend).unwrap();

    assert_eq!(tree.len(), 2);
    assert_eq!(tree.questions()[1].name.as_deref(), Some("port"));
    assert_eq!(
        answers,
        map(vec![
            ("host", AnswerValue::from("localhost")),
            ("port", 8080.into()),
        ])
    );
}

#[test]
fn test_separate_collaborators() {
    let asker = TestBackend::new().with_answers(["a", "b"]);
    let confirmer = TestBackend::new().with_confirmations([true, false]);
    let sink = TestBackend::new();
    let questions = vec![
        QuestionSpec::print("Tags"),
        QuestionSpec::text("tags", "Tag:").with_repeat(true),
    ];

    let answers = Resolver::from_parts(&asker, &confirmer, &sink)
        .resolve(&questions, None)
        .unwrap();

    assert_eq!(answers.get("tags"), Some(&AnswerValue::from(vec!["a", "b"])));
    assert_eq!(asker.asked_names(), vec!["tags", "tags"]);
    assert!(asker.confirm_prompts().is_empty());
    assert_eq!(confirmer.confirm_prompts(), vec!["Tag:", "Tag:"]);
    assert_eq!(sink.displayed(), vec!["Tags"]);
}
