use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::player::parse_attribute;
use crate::model::ProcessedPlayer;

/// Sort players by overall rating, best first.
///
/// Ratings compare as integers, so "100" outranks "99". The sort is stable;
/// players with equal ratings keep their roster order. If any rating fails
/// to parse, the vector is left in its original order and the error is
/// returned.
pub fn sort_by_rating(players: &mut Vec<ProcessedPlayer>) -> Result<()> {
    let mut keys = Vec::with_capacity(players.len());
    for player in players.iter() {
        keys.push(parse_attribute(&player.rating, "rating", &player.name)?);
    }

    let mut keyed: Vec<(i64, ProcessedPlayer)> =
        keys.into_iter().zip(players.drain(..)).collect();
    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    players.extend(keyed.into_iter().map(|(_, player)| player));
    Ok(())
}

/// Output column names, in `ProcessedPlayer` field order.
const OUTPUT_COLUMNS: [&str; 25] = [
    "name", "englishName", "position", "playerType", "rotationType", "rating",
    "insideRating", "midRating", "threeRating", "freeThrowPercent",
    "interiorDefense", "perimeterDefense", "orbRating", "drbRating",
    "astRating", "stlRating", "blkRating", "layupRating", "standDunk",
    "drivingDunk", "athleticism", "durability", "offConst", "defConst",
    "drawFoul",
];

/// Write a team's players to `<dir>/<code>.csv`, replacing any previous
/// file wholesale. An empty team still gets the header row. Returns the
/// path written.
pub fn write_team_csv(
    dir: &Path,
    code: &str,
    players: &[ProcessedPlayer],
) -> Result<PathBuf> {
    let path = dir.join(format!("{}.csv", code));
    let mut wtr = csv::Writer::from_path(&path)?;
    // serialize only emits the header together with a first record.
    if players.is_empty() {
        wtr.write_record(&OUTPUT_COLUMNS)?;
    }
    for player in players {
        wtr.serialize(player)?;
    }
    wtr.flush()?;
    Ok(path)
}
