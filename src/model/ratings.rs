/// Derived rating calculations for the two computed output columns

/// Playmaking rating: floor average of pass accuracy, pass IQ and pass vision
pub fn ast_rating(pass_accuracy: i64, pass_iq: i64, pass_vision: i64) -> i64 {
    floor_avg(&[pass_accuracy, pass_iq, pass_vision])
}

/// Athleticism rating: floor average of the six physical attributes
pub fn athleticism(
    speed: i64,
    agility: i64,
    strength: i64,
    vertical: i64,
    stamina: i64,
    hustle: i64,
) -> i64 {
    floor_avg(&[speed, agility, strength, vertical, stamina, hustle])
}

/// Floor of the arithmetic mean. Uses floor division, so the result is
/// never rounded up; summing is widened so extreme inputs cannot overflow.
fn floor_avg(values: &[i64]) -> i64 {
    let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
    sum.div_euclid(values.len() as i128) as i64
}
