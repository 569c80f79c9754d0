use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::{team_code, ProcessedPlayer};
use crate::roster::read_roster;
use crate::team_csv::{read_protected_fields, sort_by_rating, write_team_csv};

/// One team's outcome within a run.
#[derive(Debug)]
pub struct TeamReport {
    pub team: String,
    pub code: &'static str,
    pub players: usize,
    pub path: PathBuf,
}

/// What a run produced, for callers that want more than stdout.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub written: Vec<TeamReport>,
    pub skipped: Vec<String>,
}

/// Split the master roster at `input` into per-team files under
/// `output_dir`.
///
/// Teams are handled sequentially in first-seen order. An unmapped team
/// name gets a stdout warning and is skipped; any other failure aborts the
/// run, leaving teams not yet written with their previous files.
pub fn process_roster(input: &Path, output_dir: &Path) -> Result<RunSummary> {
    let rosters = read_roster(input)?;

    let mut summary = RunSummary::default();
    for roster in rosters {
        let Some(code) = team_code(&roster.team) else {
            println!("Warning: No mapping found for team '{}'", roster.team);
            summary.skipped.push(roster.team);
            continue;
        };

        let output_file = output_dir.join(format!("{}.csv", code));
        let existing = read_protected_fields(&output_file)?;

        println!(
            "Processing {} -> {}.csv ({} players)",
            roster.team,
            code,
            roster.players.len()
        );

        let mut players = Vec::with_capacity(roster.players.len());
        let mut preserved = 0usize;
        for row in &roster.players {
            let mut player = ProcessedPlayer::from_source(row)?;
            if let Some(record) = existing.get(&player.english_name) {
                player.apply_protected(record);
                preserved += 1;
            }
            players.push(player);
        }
        log::debug!(
            "{}: preserved fields for {} of {} players",
            code,
            preserved,
            players.len()
        );

        sort_by_rating(&mut players)?;
        let path = write_team_csv(output_dir, code, &players)?;
        println!("  -> Saved {} players to {}", players.len(), path.display());

        summary.written.push(TeamReport {
            team: roster.team,
            code,
            players: players.len(),
            path,
        });
    }

    Ok(summary)
}
