use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use crate::model::SourceRow;

/// All master-roster rows for a single team, in file order.
#[derive(Debug)]
pub struct TeamRoster {
    pub team: String,
    pub players: Vec<SourceRow>,
}

/// Read the master roster and group its rows by team.
///
/// Teams come back in order of first appearance and players keep their file
/// order within each team. The read is strict: any row that fails to
/// deserialize aborts the whole load.
pub fn read_roster<P: AsRef<Path>>(path: P) -> Result<Vec<TeamRoster>> {
    let mut rdr = csv::Reader::from_path(path)?;

    let mut rosters: Vec<TeamRoster> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut total = 0usize;

    for result in rdr.deserialize() {
        let row: SourceRow = result?;
        total += 1;

        match index.get(&row.team) {
            Some(&i) => rosters[i].players.push(row),
            None => {
                index.insert(row.team.clone(), rosters.len());
                rosters.push(TeamRoster {
                    team: row.team.clone(),
                    players: vec![row],
                });
            }
        }
    }

    log::debug!("Read {} roster rows across {} teams", total, rosters.len());
    Ok(rosters)
}
