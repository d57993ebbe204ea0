/// Fixed pitch dimensions for the conversion calculator
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (meters)
    pub const PITCH_LENGTH: f64 = 100.0; // Try line to try line
    pub const PITCH_WIDTH: f64 = 70.0; // Touchline to touchline
    pub const IN_GOAL_DEPTH: f64 = 10.0; // Behind each try line

    // Goal
    pub const GOAL_POST_WIDTH: f64 = 5.6;

    // Rendering
    pub const SCALE: f64 = 4.0; // Screen pixels per pitch meter

    // Geometry
    pub const POST_EPSILON: f64 = 1e-9; // Below this a kick point sits on a post
}
