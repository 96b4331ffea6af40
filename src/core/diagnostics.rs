// src/core/diagnostics.rs
//! Console report for verification runs.
//!
//! `render_*` functions build plain text; `print_*` functions add color and
//! write to the terminal.

use colored::Colorize;

use crate::core::check::{CheckOutcome, TestReport};

pub fn render_seed(seed: u64) -> String {
    format!("Random seed: {}", seed)
}

pub fn render_header(report: &TestReport) -> String {
    format!(
        "TEST {}\n List of {} items:\n {}",
        report.test,
        report.sample.len(),
        report.sample
    )
}

pub fn render_failure(check: &CheckOutcome) -> String {
    let name = check.kind.statistic_name();
    format!(
        "{} was not the optimal alignment point for {}\n {} yields {}, optimum is {}",
        name,
        check.kind.fuel_name(),
        name,
        check.achieved,
        check.optimum.cost
    )
}

pub fn render_pass(check: &CheckOutcome) -> String {
    format!(
        "{} is the optimal alignment point for {} ({})",
        check.kind.statistic_name(),
        check.kind.fuel_name(),
        check.achieved
    )
}

pub fn render_summary(passed: usize, total: usize) -> String {
    format!("{}/{} tests passed", passed, total)
}

pub fn print_report(report: &TestReport) {
    println!();
    println!("{}", render_header(report));
    for check in &report.checks {
        if check.passed() {
            println!("{} {}", "PASSED:".bright_green().bold(), render_pass(check));
        } else {
            println!("{} {}", "FAILED:".bright_red().bold(), render_failure(check));
        }
    }
}

pub fn print_summary(passed: usize, total: usize) {
    let line = render_summary(passed, total);
    println!();
    if passed == total {
        println!("{}", line.bright_green());
    } else {
        println!("{}", line.bright_red());
    }
}

pub fn warn(message: &str) {
    eprintln!("{} {}", "warn:".yellow().bold(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", "err:".red().bold(), message);
}
