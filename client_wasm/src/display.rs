//! Text shown next to the rendered pitch

use pitch_core::{CalculationResult, PitchConfig, PitchRegion};

pub fn distance_label(result: &CalculationResult) -> String {
    format!(
        "Distance to {} goal: {:.1} m",
        result.nearest_goal.name().to_lowercase(),
        result.distance_to_nearest_goal
    )
}

pub fn angle_label(result: &CalculationResult) -> String {
    format!("Angle between posts: {:.1}°", result.angle_width_degrees)
}

pub fn position_label(result: &CalculationResult) -> String {
    format!(
        "Position: ({:.1}, {:.1}) m",
        result.selected_point.x(),
        result.selected_point.y()
    )
}

pub fn region_label(result: &CalculationResult, config: &PitchConfig) -> &'static str {
    match config.region(result.selected_point) {
        PitchRegion::FieldOfPlay => "Field of play",
        PitchRegion::NearInGoal => "Near in-goal",
        PitchRegion::FarInGoal => "Far in-goal",
        PitchRegion::OutOfBounds => "Out of bounds",
    }
}
