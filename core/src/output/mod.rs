//! Output formatting module
//!
//! Renders replies for a terminal: speaker and text, then the payload as a
//! plain table for table replies or pretty JSON for everything else.

use crate::agent::types::{DisplayType, ReplyUnit};
use console::Style;
use serde_json::Value;

/// Output formatter for CLI results
pub struct OutputFormatter {
    blue: Style,
    green: Style,
    bold: Style,
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self {
            blue: Style::new().blue(),
            green: Style::new().green(),
            bold: Style::new().bold(),
        }
    }
}

impl OutputFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print a reply with styling
    pub fn print_reply(&self, reply: &ReplyUnit) {
        println!();
        println!(
            "{} {}",
            self.bold.apply_to(format!("{}:", reply.display().name)),
            reply.text()
        );

        if let Some(display_type) = reply.display_type() {
            println!("{}", self.blue.apply_to(format!("[{}]", display_type)));
        }
        if let Some(body) = render_payload(reply) {
            println!("{}", self.green.apply_to(body));
        }
        println!();
    }

    /// Print a reply as a single JSON document
    pub fn print_json(&self, reply: &ReplyUnit) -> serde_json::Result<()> {
        println!("{}", serde_json::to_string_pretty(reply)?);
        Ok(())
    }
}

/// Payload rendered as text, if the reply carries one
pub fn render_payload(reply: &ReplyUnit) -> Option<String> {
    let payload = reply.payload()?;
    match (reply.display_type(), payload) {
        (Some(DisplayType::Table), Value::Array(rows)) => Some(render_rows(rows)),
        _ => serde_json::to_string_pretty(payload).ok(),
    }
}

/// Tab-separated table with a header taken from the first row's keys
fn render_rows(rows: &[Value]) -> String {
    let columns: Vec<&String> = match rows.first() {
        Some(Value::Object(first)) => first.keys().collect(),
        _ => return format!("({} rows)", rows.len()),
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(columns.iter().map(|c| c.as_str()).collect::<Vec<_>>().join("\t"));
    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| match row.get(column.as_str()) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            })
            .collect();
        lines.push(cells.join("\t"));
    }
    lines.join("\n")
}
