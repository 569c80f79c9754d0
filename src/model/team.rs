use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Full team name -> short code used for the team's output filename.
    /// Read-only reference data, built once on first lookup.
    static ref TEAM_CODES: HashMap<&'static str, &'static str> = HashMap::from([
        ("Atlanta Hawks", "Hawks"),
        ("Boston Celtics", "Celtics"),
        ("Brooklyn Nets", "Nets"),
        ("Charlotte Hornets", "Hornets"),
        ("Chicago Bulls", "Bulls"),
        ("Cleveland Cavaliers", "Cavaliers"),
        ("Dallas Mavericks", "Mavericks"),
        ("Denver Nuggets", "Nuggets"),
        ("Detroit Pistons", "Pistons"),
        ("Golden State Warriors", "Warriors"),
        ("Houston Rockets", "Rockets"),
        ("Indiana Pacers", "Pacers"),
        ("Los Angeles Clippers", "Clippers"),
        ("Los Angeles Lakers", "Lakers"),
        ("Memphis Grizzlies", "Grizzlies"),
        ("Miami Heat", "Heat"),
        ("Milwaukee Bucks", "Bucks"),
        ("Minnesota Timberwolves", "Timberwolves"),
        ("New Orleans Pelicans", "Pelicans"),
        ("New York Knicks", "Knicks"),
        ("Oklahoma City Thunder", "Thunder"),
        ("Orlando Magic", "Magic"),
        ("Philadelphia 76ers", "76ers"),
        ("Phoenix Suns", "Suns"),
        ("Portland Trail Blazers", "Trail Blazers"),
        ("Sacramento Kings", "Kings"),
        ("San Antonio Spurs", "Spurs"),
        ("Toronto Raptors", "Raptors"),
        ("Utah Jazz", "Jazz"),
        ("Washington Wizards", "Wizards"),
    ]);
}

/// Look up the file code for a full team name.
///
/// Matching is exact and case-sensitive. Unknown names return `None`; the
/// caller decides whether that is a warning or an error.
pub fn team_code(team: &str) -> Option<&'static str> {
    TEAM_CODES.get(team).copied()
}
