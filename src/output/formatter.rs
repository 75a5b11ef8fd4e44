use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::customer::{Customer, RiskStatus};

const UNSCORED: &str = "Unscored";

/// One-line summary printed while exporting a report.
/// Format: "Name: {name}, Credit Score: {score}, Risk Status: {status}"
pub fn format_customer_line(customer: &Customer) -> String {
    format!(
        "Name: {}, Credit Score: {}, Risk Status: {}",
        customer.display_name(),
        customer.credit_score(),
        customer
            .risk_status()
            .map(|s| s.as_str())
            .unwrap_or(UNSCORED)
    )
}

/// Format a risk status, red for high risk and green for low risk
pub fn format_risk_status(status: Option<RiskStatus>, use_colors: bool) -> String {
    match (status, use_colors) {
        (Some(RiskStatus::HighRisk), true) => RiskStatus::HighRisk.as_str().red().to_string(),
        (Some(RiskStatus::LowRisk), true) => RiskStatus::LowRisk.as_str().green().to_string(),
        (Some(status), false) => status.as_str().to_string(),
        (None, true) => UNSCORED.dimmed().to_string(),
        (None, false) => UNSCORED.to_string(),
    }
}

/// Format a single customer with detailed multi-line output (for verbose mode)
pub fn format_customer_detail(customer: &Customer, use_colors: bool) -> String {
    let name = customer.display_name();
    let status = format_risk_status(customer.risk_status(), use_colors);
    let id = customer.id().to_string();
    let score = customer.credit_score();

    if use_colors {
        format!(
            "{}\n  Id: {}\n  Payment history: {}%\n  Credit utilization: {}%\n  Credit history: {} years\n  Credit score: {}\n  Risk status: {}",
            name.bold(),
            id.dimmed(),
            customer.payment_history,
            customer.credit_utilization,
            customer.age_of_credit_history,
            score.bold(),
            status
        )
    } else {
        format!(
            "{}\n  Id: {}\n  Payment history: {}%\n  Credit utilization: {}%\n  Credit history: {} years\n  Credit score: {}\n  Risk status: {}",
            name,
            id,
            customer.payment_history,
            customer.credit_utilization,
            customer.age_of_credit_history,
            score,
            status
        )
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format customers as a table with columns: Index, Score, Status, Name
/// Index column: 3 chars (fits "99."), right-aligned
/// Score column: 4 chars, right-aligned; status column padded to 9 chars
pub fn format_customer_table(customers: &[&Customer], use_colors: bool) -> String {
    if customers.is_empty() {
        return "No matching customers found.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let score_width = 4;
    let status_width = UNSCORED.len().max(RiskStatus::HighRisk.as_str().len());
    let separator = "  ";
    let fixed_width = index_width + 1 + score_width + separator.len() * 2 + status_width;

    customers
        .iter()
        .enumerate()
        .map(|(idx, customer)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:>width$}", customer.credit_score(), width = score_width);
            let status_plain = format!(
                "{:<width$}",
                format_risk_status(customer.risk_status(), false),
                width = status_width
            );

            let name = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_name(customer.display_name(), width - fixed_width)
                }
                // Very narrow terminal, show truncated
                Some(_) => truncate_name(customer.display_name(), 20),
                // No terminal (pipe), don't truncate
                None => customer.display_name().to_string(),
            };

            if use_colors {
                // Pad before coloring so escape codes don't skew alignment
                let status = match customer.risk_status() {
                    Some(RiskStatus::HighRisk) => status_plain.red().to_string(),
                    Some(RiskStatus::LowRisk) => status_plain.green().to_string(),
                    None => status_plain.dimmed().to_string(),
                };
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    separator,
                    status,
                    separator,
                    name
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_str, separator, status_plain, separator, name
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format customers as tab-separated values for scripting
/// Columns: id, name, score, status (no headers, no colors)
pub fn format_tsv(customers: &[&Customer]) -> String {
    customers
        .iter()
        .map(|customer| {
            format!(
                "{}\t{}\t{}\t{}",
                customer.id(),
                customer.name.as_deref().unwrap_or_default(),
                customer.credit_score(),
                customer.risk_status().map(|s| s.as_str()).unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
