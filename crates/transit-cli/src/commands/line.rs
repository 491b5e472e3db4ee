use anyhow::Result;

use transit_cli::output::print_json;

use super::{handle_lib_error, Session};

/// Describe a line and list the stations of each of its sequences.
pub fn handle_line_command(session: &Session, name: &str) -> Result<()> {
    let summary = session.network.line_info(name).map_err(handle_lib_error)?;

    if session.format.is_json() {
        return print_json(&summary);
    }

    let palette = &session.palette;
    println!(
        "{}",
        summary.describe().replacen(
            &summary.name,
            &format!(
                "{}{}{}",
                palette.line(&summary.code),
                summary.name,
                palette.reset
            ),
            1
        )
    );
    for sequence in &summary.sequences {
        println!();
        if let Some(branch) = &sequence.branch {
            println!("{}{} Branch{}", palette.white_bold, branch, palette.reset);
        }
        for (index, station) in sequence.stations.iter().enumerate() {
            println!("{}{:>3}.{} {}", palette.gray, index + 1, palette.reset, station);
        }
    }
    Ok(())
}
