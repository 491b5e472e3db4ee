//! Output formatting for CLI commands.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use transit_lib::{ConnectionView, RouteOutcome};

use crate::terminal::ColorPalette;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

/// Print a serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{rendered}");
    Ok(())
}

/// Write connections as CSV using the dataset's `From,To,Color,Minutes` header.
pub fn write_connections_csv<W: Write>(writer: W, views: &[ConnectionView]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for view in views {
        csv.serialize(view)
            .context("failed to write connection row")?;
    }
    csv.flush().context("failed to flush CSV output")?;
    Ok(())
}

/// Route sentence with the line names of each leg colored.
pub fn format_route(outcome: &RouteOutcome, palette: &ColorPalette) -> String {
    let sentence = outcome.describe();
    match outcome {
        RouteOutcome::Direct(route) => paint(&sentence, &route.line_name, &route.line, palette),
        RouteOutcome::Transfer(route) => {
            let first = paint(&sentence, &route.from_line_name, &route.from_line, palette);
            paint(&first, &route.to_line_name, &route.to_line, palette)
        }
        RouteOutcome::NoRoute { .. } => sentence,
    }
}

fn paint(text: &str, name: &str, code: &str, palette: &ColorPalette) -> String {
    match palette.line(code) {
        "" => text.to_string(),
        color => text.replacen(name, &format!("{color}{name}{}", palette.reset), 1),
    }
}

/// Friendly message for an unresolved station name.
pub fn format_unknown_station_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown station '{name}'.");
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{s}'"))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {joined}?"));
        }
    }
    message
}
