//! Free-text question shim over the typed planning and lookup API.
//!
//! Questions are classified into an [`Intent`] with simple keyword rules and
//! answered by delegating to [`crate::plan_route`],
//! [`NetworkGraph::line_info`] and [`NetworkGraph::station_lines`].

use serde::Serialize;
use tracing::debug;

use crate::network::NetworkGraph;
use crate::routing::{plan_route, RouteRequest};

const BUILTIN_LINES: [&str; 4] = ["red", "orange", "blue", "green"];

const HELP: &str = "I can help with transit routes and station information. Try asking:\n\
- 'How do I get from Harvard to South Station?'\n\
- 'Which line is Park Street on?'\n\
- 'Tell me about the Red Line'";

/// What a free-text question is asking for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    Route { origin: String, destination: String },
    LineInfo { line: String },
    StationLines { station: String },
    Help,
}

impl Intent {
    /// Classify using the built-in line names only.
    pub fn classify(question: &str) -> Self {
        classify_with(question, &[])
    }

    /// Classify, also recognising every line registered in `network` by
    /// `<code> line` or by its display name.
    pub fn classify_for(network: &NetworkGraph, question: &str) -> Self {
        let patterns: Vec<(String, String)> = network
            .lines()
            .iter()
            .flat_map(|line| {
                [
                    (format!("{} line", line.code), line.code.clone()),
                    (line.name.to_lowercase(), line.code.clone()),
                ]
            })
            .collect();
        classify_with(question, &patterns)
    }
}

fn classify_with(question: &str, line_patterns: &[(String, String)]) -> Intent {
    let question = question.trim().to_lowercase();

    if let Some(intent) = route_intent(&question) {
        return intent;
    }

    if let Some(line) = line_intent(&question, line_patterns) {
        return Intent::LineInfo { line };
    }

    if question.contains("which line") || question.contains("what line") {
        if let Some(station) = station_intent(&question) {
            return Intent::StationLines { station };
        }
    }

    Intent::Help
}

fn route_intent(question: &str) -> Option<Intent> {
    let from = find_word(question, "from", 0)?;
    let after_from = from + "from".len();
    let to = find_word(question, "to", after_from)?;

    let origin = question[after_from..to].trim();
    let destination = strip_punctuation(&question[to + "to".len()..]);
    if origin.is_empty() || destination.is_empty() {
        return None;
    }
    Some(Intent::Route {
        origin: origin.to_string(),
        destination: destination.to_string(),
    })
}

fn line_intent(question: &str, line_patterns: &[(String, String)]) -> Option<String> {
    if let Some(line) = BUILTIN_LINES
        .iter()
        .find(|line| question.contains(&format!("{line} line")))
    {
        return Some(line.to_string());
    }
    line_patterns
        .iter()
        .find(|(pattern, _)| !pattern.is_empty() && question.contains(pattern.as_str()))
        .map(|(_, code)| code.clone())
}

fn station_intent(question: &str) -> Option<String> {
    if let Some(start) = question.find('"') {
        let rest = &question[start + 1..];
        let end = rest.find('"')?;
        let station = rest[..end].trim();
        return (!station.is_empty()).then(|| station.to_string());
    }

    let (_, after) = question.split_once(" is ")?;
    let mut station = strip_punctuation(after);
    if let Some(stripped) = station.strip_suffix(" on") {
        station = strip_punctuation(stripped);
    }
    (!station.is_empty()).then(|| station.to_string())
}

fn strip_punctuation(text: &str) -> &str {
    text.trim().trim_end_matches(['?', '.']).trim_end()
}

/// Byte offset of `word` at or after `start`, bounded by non-alphanumerics.
fn find_word(haystack: &str, word: &str, start: usize) -> Option<usize> {
    let mut offset = start;
    while let Some(found) = haystack.get(offset..)?.find(word) {
        let index = offset + found;
        let before = haystack[..index].chars().next_back();
        let after = haystack[index + word.len()..].chars().next();
        let bounded = |c: Option<char>| c.map_or(true, |c| !c.is_alphanumeric());
        if bounded(before) && bounded(after) {
            return Some(index);
        }
        offset = index + word.len();
    }
    None
}

/// Answer a free-text question.
pub fn answer(network: &NetworkGraph, question: &str) -> String {
    let intent = Intent::classify_for(network, question);
    debug!(?intent, "classified question");

    match intent {
        Intent::Route {
            origin,
            destination,
        } => match plan_route(network, &RouteRequest::new(origin, destination)) {
            Ok(outcome) => outcome.describe(),
            Err(err) => capitalise(&err.to_string()),
        },
        Intent::LineInfo { line } => match network.line_info(&line) {
            Ok(summary) => summary.describe(),
            Err(err) => capitalise(&err.to_string()),
        },
        Intent::StationLines { station } => station_answer(network, &station),
        Intent::Help => HELP.to_string(),
    }
}

fn station_answer(network: &NetworkGraph, station: &str) -> String {
    let labels = match network.station_lines(station) {
        Ok(labels) => labels,
        Err(err) => return capitalise(&err.to_string()),
    };
    let name = network
        .station_by_name(station)
        .map(|station| station.name.as_str())
        .unwrap_or(station);

    match labels.as_slice() {
        [only] => {
            let line = network
                .resolve_station(station)
                .first()
                .and_then(|placement| {
                    let line = network.line(placement.family())?;
                    Some(match &placement.branch {
                        Some(branch) => format!("{} ({} branch)", line.name, branch),
                        None => line.name.clone(),
                    })
                })
                .unwrap_or_else(|| only.clone());
            format!("{name} is on the {line}.")
        }
        labels => format!("{name} is on the following lines: {}.", labels.join(", ")),
    }
}

fn capitalise(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
