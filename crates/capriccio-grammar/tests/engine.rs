//! End-to-end checks of the public grammar API on a small line-based format.

use capriccio_grammar::{
    CharSet, Consumer, Matched, any_except, discard, evaluate, flatten, label, literal, not,
    one_or_more, optional, zero_or_more,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Entry,
    Comment,
}

/// `key = value` lines, optionally preceded by `# comment` lines.
fn grammar() -> Consumer<Label> {
    let newline = discard(one_or_more(literal("\n")));
    let spaces = discard(zero_or_more(literal(" ")));
    let word = flatten(one_or_more(any_except(CharSet::from_chars(" =\n#"))));
    let rest = flatten(one_or_more(any_except(CharSet::line_breaks())));
    let comment = label(
        Label::Comment,
        Consumer::Sequence(vec![discard(literal("#")), spaces.clone(), rest.clone(), newline.clone()]),
    );
    let entry = label(
        Label::Entry,
        Consumer::Sequence(vec![
            not(literal("#")),
            word,
            spaces.clone(),
            discard(literal("=")),
            spaces,
            rest,
            optional(newline),
        ]),
    );
    one_or_more(comment | entry)
}

#[test]
fn parses_entries_and_comments() {
    let tree = evaluate(&grammar(), "# first\nname = capriccio\nkind = parser\n")
        .unwrap_or_else(|err| panic!("document should parse: {err}"));
    assert_eq!(
        tree,
        vec![
            Matched::Node {
                label: Label::Comment,
                children: vec![Matched::Text("first".into())],
            },
            Matched::Node {
                label: Label::Entry,
                children: vec![
                    Matched::Text("name".into()),
                    Matched::Text("capriccio".into()),
                ],
            },
            Matched::Node {
                label: Label::Entry,
                children: vec![Matched::Text("kind".into()), Matched::Text("parser".into())],
            },
        ]
    );
}

#[test]
fn reports_line_of_malformed_entry() {
    let Err(err) = evaluate(&grammar(), "name = capriccio\nbroken\n") else {
        panic!("document should be rejected");
    };
    assert_eq!(err.line, 2);
    assert!(err.to_string().contains("line 2"), "unexpected message: {err}");
}
