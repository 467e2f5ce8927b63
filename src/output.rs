use anyhow::Result;
use colored::*;

use crate::harness::{Outcome, Report, SuiteReport};

// Output the report as JSON
pub fn output_json(report: &Report) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}

// Output the report as text with colorful formatting
pub fn output_text(report: &Report) -> Result<()> {
    print!("{}", render_text(report));
    Ok(())
}

pub fn render_text(report: &Report) -> String {
    let mut lines = Vec::new();

    for suite in &report.suites {
        collect_suite_lines(suite, &mut lines);
        lines.push(String::new());
    }

    // Summary line
    let passed = format!("{} passed", report.passed).green();
    let failed = if report.failed == 0 {
        format!("{} failed", report.failed).normal()
    } else {
        format!("{} failed", report.failed).red().bold()
    };
    lines.push(format!("{}, {}", passed, failed));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

// Collect the header and one line per case for a suite
fn collect_suite_lines(suite: &SuiteReport, lines: &mut Vec<String>) {
    let header = if suite.failed() == 0 {
        suite.suite.blue().bold()
    } else {
        suite.suite.red().bold()
    };
    lines.push(format!("{} {}", header, suite.fixture.describe().dimmed()));

    for case in &suite.cases {
        let line = match &case.outcome {
            Outcome::Passed => format!("  {} {}", "ok".green(), case.check.as_str()),
            Outcome::Failed { expected, observed } => format!(
                "  {} {} {}",
                "FAIL".red().bold(),
                case.check.as_str().bold(),
                format!("expected {}, observed {}", expected, observed).yellow()
            ),
        };
        lines.push(line);
    }
}
