//! Shared fixtures for unit tests.

use crate::model::{ProcessedPlayer, SourceRow};

/// Header row of a master roster file, all 30 columns in file order.
pub const ROSTER_HEADER: &str = "team,name,position,overallAttribute,closeShot,\
midRangeShot,threePointShot,freeThrow,interiorDefense,perimeterDefense,\
offensiveRebound,defensiveRebound,passAccuracy,passIQ,passVision,steal,block,\
layup,standingDunk,drivingDunk,speed,agility,strength,vertical,stamina,hustle,\
overallDurability,offensiveConsistency,defensiveConsistency,drawFoul";

/// A master roster data row matching [`ROSTER_HEADER`].
///
/// Passing is fixed at 70/70/71 (astRating 70) and the physical block at
/// 80/80/80/80/80/85 (athleticism 80); every other attribute is 75.
pub fn roster_line(team: &str, name: &str, overall: &str) -> String {
    format!(
        "{},{},F,{},75,75,75,75,75,75,75,75,70,70,71,75,75,75,75,75,80,80,80,80,80,85,75,75,75,75",
        team, name, overall
    )
}

/// The same fixture player as [`roster_line`], already deserialized.
pub fn source_row(team: &str, name: &str, overall: &str) -> SourceRow {
    SourceRow {
        team: team.to_string(),
        name: name.to_string(),
        position: "F".to_string(),
        overall_attribute: overall.to_string(),
        close_shot: "75".to_string(),
        mid_range_shot: "75".to_string(),
        three_point_shot: "75".to_string(),
        free_throw: "75".to_string(),
        interior_defense: "75".to_string(),
        perimeter_defense: "75".to_string(),
        offensive_rebound: "75".to_string(),
        defensive_rebound: "75".to_string(),
        pass_accuracy: "70".to_string(),
        pass_iq: "70".to_string(),
        pass_vision: "71".to_string(),
        steal: "75".to_string(),
        block: "75".to_string(),
        layup: "75".to_string(),
        standing_dunk: "75".to_string(),
        driving_dunk: "75".to_string(),
        speed: "80".to_string(),
        agility: "80".to_string(),
        strength: "80".to_string(),
        vertical: "80".to_string(),
        stamina: "80".to_string(),
        hustle: "85".to_string(),
        overall_durability: "75".to_string(),
        offensive_consistency: "75".to_string(),
        defensive_consistency: "75".to_string(),
        draw_foul: "75".to_string(),
    }
}

/// A processed fixture player with the given display name and rating.
pub fn processed_player(name: &str, rating: &str) -> ProcessedPlayer {
    let mut player = ProcessedPlayer::from_source(&source_row("Utah Jazz", name, "75")).unwrap();
    player.rating = rating.to_string();
    player
}
