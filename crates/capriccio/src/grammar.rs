//! Production rules of the feature-document grammar.
//!
//! The grammar is ordered choice throughout: `Scenario:` is tried before
//! `Scenario Outline:` at every position, and description lines stop at the
//! first line that would start the next structural element.
//!
//! ```text
//! feature   = tag* header("Feature:") (scenario / outline)+
//! scenario  = tag* header("Scenario:") step+
//! outline   = tag* header("Scenario Outline:") step+ examples+
//! examples  = tag* "Examples:" row row+
//! header(k) = k text description?
//! row       = "|" (cell ("|" cell)* "|")?
//! ```

use std::sync::LazyLock;

use capriccio_grammar::{
    CharSet, Consumer, any_except, charset, choice, discard, flatten, interleaved, label, literal,
    literal_ignore_case, not, one_or_more, optional, replace, sequence, zero_or_more,
};

use crate::keyword::StepKeyword;

/// Labels the grammar attaches to parse-tree nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GherkinLabel {
    /// Whole document.
    Feature,
    /// `Scenario:` block.
    Scenario,
    /// `Scenario Outline:` block.
    ScenarioOutline,
    /// Text after a header keyword.
    Name,
    /// Lines between a header and what follows it.
    Description,
    /// One `@tag`.
    Tag,
    /// One step line.
    Step,
    /// One `Examples:` block.
    Examples,
    /// Header row of an Examples table.
    ExampleKeys,
    /// Data rows of an Examples table.
    ExampleValues,
}

type Rule = Consumer<GherkinLabel>;

static GHERKIN: LazyLock<Rule> = LazyLock::new(feature);

/// The root rule, built on first use.
pub(crate) fn gherkin() -> &'static Rule {
    &GHERKIN
}

/// Spaces and tabs, dropped.
fn indent() -> Rule {
    discard(zero_or_more(charset(CharSet::horizontal_whitespace())))
}

fn line_break() -> Rule {
    literal("\r\n") | literal("\n")
}

fn end_of_input() -> Rule {
    not(any_except(CharSet::default()))
}

/// Line breaks and whitespace-only lines, dropped.
fn blank_lines() -> Rule {
    discard(zero_or_more(sequence([indent(), line_break()])))
}

/// A run of characters up to the end of the line or the next `|`.
fn text() -> Rule {
    let stop = CharSet::line_breaks().union(&CharSet::from_chars("|"));
    flatten(one_or_more(any_except(stop)))
}

fn tag() -> Rule {
    let stop = CharSet::line_breaks().union(&CharSet::from_chars("@"));
    label(
        GherkinLabel::Tag,
        sequence([
            indent(),
            discard(literal("@")),
            flatten(one_or_more(any_except(stop))),
            blank_lines(),
        ]),
    )
}

/// `keyword` followed by the name, then description lines up to `stop`.
fn header(keyword: &str, stop: &Rule) -> Rule {
    let name = label(
        GherkinLabel::Name,
        flatten(sequence([indent(), discard(literal(keyword)), indent(), text()])),
    );
    let description_line = sequence([
        not(stop.clone()),
        indent(),
        text(),
        replace(line_break(), " "),
        blank_lines(),
    ]);
    sequence([
        name,
        blank_lines(),
        optional(label(
            GherkinLabel::Description,
            flatten(one_or_more(description_line)),
        )),
    ])
}

fn step_keyword() -> Rule {
    sequence([
        indent(),
        choice(
            StepKeyword::ALL
                .into_iter()
                .map(|keyword| literal_ignore_case(keyword.as_str())),
        ),
    ])
}

fn step() -> Rule {
    label(
        GherkinLabel::Step,
        sequence([step_keyword(), indent(), text(), blank_lines()]),
    )
}

fn row_end() -> Rule {
    sequence([indent(), line_break() | end_of_input()])
}

/// `| a | b |` yielding one text per cell; a lone `|` yields nothing.
fn table_row() -> Rule {
    let pipe = || discard(literal("|"));
    let cell = sequence([not(row_end()), text()]);
    sequence([
        indent(),
        pipe(),
        optional(sequence([interleaved(pipe(), cell), pipe()])),
        discard(row_end()),
        blank_lines(),
    ])
}

fn examples() -> Rule {
    label(
        GherkinLabel::Examples,
        sequence([
            zero_or_more(tag()),
            indent(),
            discard(literal("Examples:")),
            indent(),
            blank_lines(),
            label(GherkinLabel::ExampleKeys, table_row()),
            label(GherkinLabel::ExampleValues, one_or_more(table_row())),
        ]),
    )
}

fn scenario() -> Rule {
    label(
        GherkinLabel::Scenario,
        sequence([
            zero_or_more(tag()),
            header("Scenario:", &step_keyword()),
            one_or_more(step()),
        ]),
    )
}

fn scenario_outline() -> Rule {
    label(
        GherkinLabel::ScenarioOutline,
        sequence([
            zero_or_more(tag()),
            header("Scenario Outline:", &step_keyword()),
            one_or_more(step()),
            one_or_more(examples()),
        ]),
    )
}

fn feature() -> Rule {
    let next_block = sequence([
        indent(),
        choice([
            literal("Scenario:"),
            literal("Scenario Outline:"),
            sequence([literal("@"), text()]),
        ]),
    ]);
    label(
        GherkinLabel::Feature,
        sequence([
            blank_lines(),
            zero_or_more(tag()),
            header("Feature:", &next_block),
            one_or_more(scenario() | scenario_outline()),
            blank_lines(),
            indent(),
        ]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use capriccio_grammar::{Matched, evaluate};
    use rstest::rstest;

    fn parse_with(rule: &Rule, input: &str) -> Vec<Matched<GherkinLabel>> {
        evaluate(rule, input).unwrap_or_else(|err| panic!("`{input:?}` should match: {err}"))
    }

    fn node(label: GherkinLabel, children: &[&str]) -> Matched<GherkinLabel> {
        Matched::Node {
            label,
            children: children
                .iter()
                .map(|text| Matched::Text((*text).to_owned()))
                .collect(),
        }
    }

    #[rstest]
    #[case("@smoke\n", &["smoke"])]
    #[case("  @smoke  \n\n", &["smoke  "])]
    #[case("@a @b\n", &["a ", "b"])]
    fn tags_split_on_at_sign(#[case] input: &str, #[case] names: &[&str]) {
        let expected: Vec<_> = names
            .iter()
            .map(|name| node(GherkinLabel::Tag, &[*name]))
            .collect();
        assert_eq!(parse_with(&zero_or_more(tag()), input), expected);
    }

    #[rstest]
    #[case("Given x\n", "Given", "x")]
    #[case("  when I act  \n", "when", "I act  ")]
    #[case("BUT not this", "BUT", "not this")]
    fn steps_keep_keyword_spelling(#[case] input: &str, #[case] keyword: &str, #[case] text: &str) {
        assert_eq!(
            parse_with(&step(), input),
            vec![node(GherkinLabel::Step, &[keyword, text])]
        );
    }

    #[test]
    fn description_lines_collapse_into_one() {
        let input = "Scenario: S\n  first line\n\n  second line\nGiven x\n";
        let rule = sequence([header("Scenario:", &step_keyword()), step()]);
        let tree = parse_with(&rule, input);
        assert_eq!(
            tree.get(..2),
            Some(
                [
                    node(GherkinLabel::Name, &["S"]),
                    node(GherkinLabel::Description, &["first line second line "]),
                ]
                .as_slice()
            )
        );
    }

    #[rstest]
    #[case("| a | b |\n", &[" a ", " b "])]
    #[case("  |a|b|   \n", &["a", "b"])]
    #[case("| |\n", &[" "])]
    #[case("|\n", &[])]
    #[case("| last |", &[" last "])]
    fn table_rows_yield_cells(#[case] input: &str, #[case] cells: &[&str]) {
        let expected: Vec<_> = cells
            .iter()
            .map(|cell| Matched::Text((*cell).to_owned()))
            .collect();
        assert_eq!(parse_with(&table_row(), input), expected);
    }

    #[rstest]
    #[case("| a | b\n")]
    #[case("a | b |\n")]
    fn malformed_rows_are_rejected(#[case] input: &str) {
        assert!(evaluate(&table_row(), input).is_err());
    }

    #[test]
    fn outline_header_is_not_a_scenario_header() {
        let input = "Scenario Outline: O\nGiven <x>\nExamples:\n| x |\n| 1 |\n";
        assert!(evaluate(&scenario(), input).is_err());
        let tree = parse_with(&scenario_outline(), input);
        assert_eq!(
            tree.first().and_then(Matched::label),
            Some(&GherkinLabel::ScenarioOutline)
        );
    }

    #[test]
    fn feature_description_stops_at_tag_line() {
        let input = "Feature: F\n  about\n@t\nScenario: S\nGiven x\n";
        let Some(Matched::Node { children, .. }) = parse_with(gherkin(), input).into_iter().next()
        else {
            panic!("expected a feature node");
        };
        let labels: Vec<_> = children.iter().filter_map(Matched::label).collect();
        assert_eq!(
            labels,
            vec![
                &GherkinLabel::Name,
                &GherkinLabel::Description,
                &GherkinLabel::Scenario
            ]
        );
    }
}
