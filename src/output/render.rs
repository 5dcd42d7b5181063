use std::collections::HashMap;

use colored::Colorize;

use crate::scan::{ResultSink, ScanResult};

/// Presentation bucket for a status code. Cosmetic only; nothing branches
/// on it outside this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Success,
    Forbidden,
    NotFound,
    Other,
}

pub fn categorize(status: u16) -> StatusCategory {
    match status {
        200 => StatusCategory::Success,
        403 => StatusCategory::Forbidden,
        404 => StatusCategory::NotFound,
        _ => StatusCategory::Other,
    }
}

fn paint(status: u16, line: String) -> String {
    match categorize(status) {
        StatusCategory::Success => line.green().to_string(),
        StatusCategory::Forbidden => line.bright_yellow().to_string(),
        StatusCategory::NotFound => line.red().to_string(),
        StatusCategory::Other => line.blue().to_string(),
    }
}

/// Terminal sink: one colored line per result, plus the per-status summary.
pub struct ColorSink;

impl ResultSink for ColorSink {
    fn render(&self, result: &ScanResult) {
        let line = format!("/{}\t{}", result.path, result.status);
        println!("{}", paint(result.status, line));
    }

    fn render_summary(&self, tally: &HashMap<u16, u64>) {
        let mut codes: Vec<_> = tally.iter().collect();
        codes.sort_by_key(|(code, _)| **code);
        for (code, count) in codes {
            let line = format!("HTTP {code} -> {count} occurrences");
            println!("{}", paint(*code, line));
        }
    }
}
