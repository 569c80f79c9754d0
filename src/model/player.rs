use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};
use crate::model::ratings;

/// A player row from the master roster file.
///
/// Every attribute stays a string; only the fields feeding a derived rating
/// are parsed, at projection time. Extra columns in the file are ignored,
/// a missing column fails the read.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRow {
    pub team: String,
    pub name: String,
    pub position: String,
    pub overall_attribute: String,
    pub close_shot: String,
    pub mid_range_shot: String,
    pub three_point_shot: String,
    pub free_throw: String,
    pub interior_defense: String,
    pub perimeter_defense: String,
    pub offensive_rebound: String,
    pub defensive_rebound: String,
    pub pass_accuracy: String,
    #[serde(rename = "passIQ")]
    pub pass_iq: String,
    pub pass_vision: String,
    pub steal: String,
    pub block: String,
    pub layup: String,
    pub standing_dunk: String,
    pub driving_dunk: String,
    pub speed: String,
    pub agility: String,
    pub strength: String,
    pub vertical: String,
    pub stamina: String,
    pub hustle: String,
    pub overall_durability: String,
    pub offensive_consistency: String,
    pub defensive_consistency: String,
    pub draw_foul: String,
}

/// A row of a per-team roster file.
///
/// Field declaration order is the output column order; the CSV header is
/// generated from it, so reordering fields here changes the file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedPlayer {
    pub name: String,
    pub english_name: String,
    pub position: String,
    pub player_type: String,
    pub rotation_type: String,
    pub rating: String,
    pub inside_rating: String,
    pub mid_rating: String,
    pub three_rating: String,
    pub free_throw_percent: String,
    pub interior_defense: String,
    pub perimeter_defense: String,
    pub orb_rating: String,
    pub drb_rating: String,
    pub ast_rating: String,
    pub stl_rating: String,
    pub blk_rating: String,
    pub layup_rating: String,
    pub stand_dunk: String,
    pub driving_dunk: String,
    pub athleticism: String,
    pub durability: String,
    pub off_const: String,
    pub def_const: String,
    pub draw_foul: String,
}

impl ProcessedPlayer {
    /// Project a master-roster row into an output row.
    ///
    /// Attribute columns are copied verbatim as strings, the two derived
    /// ratings are computed, and the display name is mirrored into
    /// `englishName` (the master roster is English-only). `playerType` and
    /// `rotationType` start blank; reconciliation or hand edits fill them.
    pub fn from_source(row: &SourceRow) -> Result<Self> {
        let ast = ratings::ast_rating(
            parse_attribute(&row.pass_accuracy, "passAccuracy", &row.name)?,
            parse_attribute(&row.pass_iq, "passIQ", &row.name)?,
            parse_attribute(&row.pass_vision, "passVision", &row.name)?,
        );

        let athleticism = ratings::athleticism(
            parse_attribute(&row.speed, "speed", &row.name)?,
            parse_attribute(&row.agility, "agility", &row.name)?,
            parse_attribute(&row.strength, "strength", &row.name)?,
            parse_attribute(&row.vertical, "vertical", &row.name)?,
            parse_attribute(&row.stamina, "stamina", &row.name)?,
            parse_attribute(&row.hustle, "hustle", &row.name)?,
        );

        Ok(ProcessedPlayer {
            name: row.name.clone(),
            english_name: row.name.clone(),
            position: row.position.clone(),
            player_type: String::new(),
            rotation_type: String::new(),
            rating: row.overall_attribute.clone(),
            inside_rating: row.close_shot.clone(),
            mid_rating: row.mid_range_shot.clone(),
            three_rating: row.three_point_shot.clone(),
            free_throw_percent: row.free_throw.clone(),
            interior_defense: row.interior_defense.clone(),
            perimeter_defense: row.perimeter_defense.clone(),
            orb_rating: row.offensive_rebound.clone(),
            drb_rating: row.defensive_rebound.clone(),
            ast_rating: ast.to_string(),
            stl_rating: row.steal.clone(),
            blk_rating: row.block.clone(),
            layup_rating: row.layup.clone(),
            stand_dunk: row.standing_dunk.clone(),
            driving_dunk: row.driving_dunk.clone(),
            athleticism: athleticism.to_string(),
            durability: row.overall_durability.clone(),
            off_const: row.offensive_consistency.clone(),
            def_const: row.defensive_consistency.clone(),
            draw_foul: row.draw_foul.clone(),
        })
    }

    /// Overwrite the five protected fields from a previously written row.
    ///
    /// Values are taken verbatim, blanks included; every rating and
    /// attribute field keeps its freshly computed value.
    pub fn apply_protected(&mut self, existing: &ProtectedFields) {
        self.name = existing.name.clone();
        self.english_name = existing.english_name.clone();
        self.position = existing.position.clone();
        self.player_type = existing.player_type.clone();
        self.rotation_type = existing.rotation_type.clone();
    }
}

/// The manually-curated subset of a previously written team row.
///
/// Only these five columns survive a rerun; everything else is regenerated
/// from the master roster. Columns missing from the file read back as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectedFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub english_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub player_type: String,
    #[serde(default)]
    pub rotation_type: String,
}

impl ProtectedFields {
    /// The reconciliation key for this record: `englishName` when non-blank,
    /// falling back to `name`, or `None` when both are blank (unkeyable).
    ///
    /// New roster rows match on their display name, so a player renamed in
    /// the master roster will not match their old record and is processed
    /// as new.
    pub fn key(&self) -> Option<&str> {
        if !self.english_name.is_empty() {
            Some(&self.english_name)
        } else if !self.name.is_empty() {
            Some(&self.name)
        } else {
            None
        }
    }
}

/// Parse an integer attribute, tolerating surrounding whitespace.
pub(crate) fn parse_attribute(value: &str, field: &str, player: &str) -> Result<i64> {
    value.trim().parse().map_err(|_| {
        RosterError::InvalidAttribute(format!(
            "{}='{}' for player '{}'",
            field, value, player
        ))
    })
}
