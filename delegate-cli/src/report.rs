//! Report generation
//!
//! Renders the outcome of a delegate invocation. The generator only uses the
//! engine's public read view: it walks the subscribers in invocation order,
//! calls each one individually with the scenario arguments, and labels the
//! rows through the registry's reverse lookup. The engine is never mutated.

use anyhow::Result;
use chrono::Local;
use clap::ValueEnum;
use delegate_core::RetDelegate;
use serde::{Deserialize, Serialize};

use crate::registry;

/// Report rendering style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// One line per subscriber
    #[default]
    List,
    /// Aligned ASCII table
    Table,
    /// Machine-readable JSON
    Json,
}

/// One subscriber's row in the report
#[derive(Debug, Serialize)]
pub struct ResultRow {
    pub index: usize,
    pub function: String,
    pub result: i64,
}

/// Outcome of one invocation pass, ready for rendering
#[derive(Debug, Serialize)]
pub struct Report {
    pub generated_at: String,
    pub scenario: String,
    pub args: i64,
    pub total: i64,
    pub rows: Vec<ResultRow>,
}

/// Run every subscriber individually and collect the report rows
///
/// Uses the immediate form per subscriber so each return value can be shown
/// on its own; the total therefore matches what `invoke(args)` aggregates.
pub fn build_report(delegate: &RetDelegate<i64, i64>, scenario: &str, args: i64) -> Report {
    log::debug!("building report over {} subscriber(s)", delegate.len());

    let mut rows = Vec::with_capacity(delegate.len());
    let mut total = 0;
    for (index, handler) in delegate.subscribers().enumerate() {
        let result = handler(args);
        total += result;
        rows.push(ResultRow {
            index,
            function: registry::name_of(handler)
                .unwrap_or("<unregistered>")
                .to_string(),
            result,
        });
    }

    Report {
        generated_at: Local::now().to_rfc3339(),
        scenario: scenario.to_string(),
        args,
        total,
        rows,
    }
}

/// Render a report in the requested view
pub fn render(report: &Report, view: View) -> Result<String> {
    match view {
        View::List => Ok(render_list(report)),
        View::Table => Ok(render_table(report)),
        View::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

fn header(report: &Report) -> String {
    format!(
        "Delegate Report: {}\nGenerated: {}\nArguments: {}\n\n",
        report.scenario, report.generated_at, report.args
    )
}

fn render_list(report: &Report) -> String {
    let mut out = header(report);
    for row in &report.rows {
        out.push_str(&format!(
            "[{}] {} returned {}\n",
            row.index, row.function, row.result
        ));
    }
    out.push_str(&format!("\nTotal: {}\n", report.total));
    out
}

fn render_table(report: &Report) -> String {
    // Column widths grow with the data; headers and the total row count too
    let idx_width = report
        .rows
        .iter()
        .map(|row| row.index.to_string().len())
        .chain(std::iter::once(1))
        .max()
        .unwrap_or(1);
    let name_width = report
        .rows
        .iter()
        .map(|row| row.function.len())
        .chain(std::iter::once("function".len()))
        .max()
        .unwrap_or(8);
    let result_width = report
        .rows
        .iter()
        .map(|row| row.result.to_string().len())
        .chain(std::iter::once(report.total.to_string().len()))
        .chain(std::iter::once("result".len()))
        .max()
        .unwrap_or(6);

    let sep = format!(
        "+{}+{}+{}+\n",
        "-".repeat(idx_width + 2),
        "-".repeat(name_width + 2),
        "-".repeat(result_width + 2)
    );

    let mut out = header(report);
    out.push_str(&sep);
    out.push_str(&format!(
        "| {:>idx_width$} | {:<name_width$} | {:>result_width$} |\n",
        "#", "function", "result"
    ));
    out.push_str(&sep);
    for row in &report.rows {
        out.push_str(&format!(
            "| {:>idx_width$} | {:<name_width$} | {:>result_width$} |\n",
            row.index, row.function, row.result
        ));
    }
    out.push_str(&sep);
    out.push_str(&format!(
        "| {:>idx_width$} | {:<name_width$} | {:>result_width$} |\n",
        "", "total", report.total
    ));
    out.push_str(&sep);
    out
}
