//! Helpers for rendering a parsed feature.

use std::io::Write;

use capriccio::{Feature, Scenario, Tag};
use eyre::{Context, Result};

use crate::config::OutputFormat;

/// Write `feature` to `writer` in the selected format.
///
/// # Errors
///
/// Returns an error if the writer fails or the tree cannot be serialised.
pub fn write_feature(writer: &mut dyn Write, feature: &Feature, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Summary => write_summary(writer, feature),
        OutputFormat::Json => write_json(writer, feature),
    }
}

/// Write one line for the feature and one indented line per scenario.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_summary(writer: &mut dyn Write, feature: &Feature) -> Result<()> {
    writeln!(writer, "Feature: {}{}", feature.name, format_tags(&feature.tags))
        .wrap_err_with(|| format!("failed to write feature '{}'", feature.name))?;
    for scenario in &feature.scenarios {
        write_scenario(writer, scenario)?;
    }
    Ok(())
}

fn write_scenario(writer: &mut dyn Write, scenario: &Scenario) -> Result<()> {
    let steps = plural(scenario.steps().len(), "step");
    let (keyword, counts) = match scenario {
        Scenario::Simple(_) => ("Scenario", steps),
        Scenario::Outline(outline) => (
            "Scenario Outline",
            format!("{steps}, {}", plural(outline.examples.len(), "example")),
        ),
    };
    writeln!(
        writer,
        "  {keyword}: {}{} ({counts})",
        scenario.name(),
        format_tags(scenario.tags())
    )
    .wrap_err_with(|| format!("failed to write scenario '{}'", scenario.name()))
}

/// Write the document tree as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if the writer fails or the tree cannot be serialised.
pub fn write_json(writer: &mut dyn Write, feature: &Feature) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, feature)
        .wrap_err_with(|| format!("failed to serialise feature '{}'", feature.name))?;
    writeln!(writer).wrap_err("failed to terminate JSON output")
}

fn format_tags(tags: &[Tag]) -> String {
    tags.iter().map(|tag| format!(" @{}", tag.name)).collect()
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests fail loudly on malformed fixtures")]
mod tests {
    use super::*;
    use serde_json::json;

    const DOCUMENT: &str = "\
@billing
Feature: Refunds
  @happy @fast
  Scenario: Full refund
    Given an order
    Then it is refunded
  Scenario Outline: Partial refund
    Given an order of <amount>
    Examples:
      | amount |
      | 10     |
      | 20     |
";

    fn render(format: OutputFormat) -> String {
        let feature = capriccio::parse(DOCUMENT).expect("fixture parses");
        let mut buffer = Vec::new();
        write_feature(&mut buffer, &feature, format).expect("rendering succeeds");
        String::from_utf8(buffer).expect("output is UTF-8")
    }

    #[test]
    fn summary_lists_feature_and_scenarios() {
        assert_eq!(
            render(OutputFormat::Summary),
            "Feature: Refunds @billing\n\
             \x20 Scenario: Full refund @happy @fast (2 steps)\n\
             \x20 Scenario Outline: Partial refund @billing (1 step, 2 examples)\n"
        );
    }

    #[test]
    fn json_output_is_a_single_document() {
        let rendered = render(OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid JSON");
        assert_eq!(value.pointer("/name"), Some(&json!("Refunds")));
        assert_eq!(value.pointer("/scenarios/1/kind"), Some(&json!("outline")));
        assert_eq!(
            value.pointer("/scenarios/1/examples/1/amount"),
            Some(&json!("20"))
        );
        assert!(rendered.ends_with("}\n"));
    }

    #[test]
    fn pluralises_counts() {
        assert_eq!(plural(0, "step"), "0 steps");
        assert_eq!(plural(1, "example"), "1 example");
    }
}
