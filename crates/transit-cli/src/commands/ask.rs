use anyhow::Result;
use serde::Serialize;

use transit_cli::output::print_json;
use transit_lib::{answer, Intent};

use super::Session;

#[derive(Debug, Serialize)]
struct AskReport<'a> {
    question: &'a str,
    #[serde(flatten)]
    intent: Intent,
    answer: String,
}

/// Answer a free-text question about the network.
pub fn handle_ask_command(session: &Session, question: &str) -> Result<()> {
    let reply = answer(&session.network, question);

    if session.format.is_json() {
        return print_json(&AskReport {
            question,
            intent: Intent::classify_for(&session.network, question),
            answer: reply,
        });
    }
    println!("{reply}");
    Ok(())
}
