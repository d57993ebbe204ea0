use crate::{PitchConfig, PitchPoint};

/// One of the two goal lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Goal {
    Near, // Goal line at y = 0
    Far,  // Goal line at y = length
}

impl Goal {
    /// Y coordinate of this goal line in pitch space
    pub fn line_y(self, config: &PitchConfig) -> f64 {
        match self {
            Goal::Near => 0.0,
            Goal::Far => config.length,
        }
    }

    /// Midpoint of the goal line, halfway between the posts
    pub fn midpoint(self, config: &PitchConfig) -> PitchPoint {
        PitchPoint::new(0.0, self.line_y(config))
    }

    pub fn opposite(self) -> Self {
        match self {
            Goal::Near => Goal::Far,
            Goal::Far => Goal::Near,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Goal::Near => "Near",
            Goal::Far => "Far",
        }
    }
}

/// Area of the rendered surface a pitch point falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PitchRegion {
    FieldOfPlay,
    NearInGoal,
    FarInGoal,
    OutOfBounds, // Beyond a touchline
}

/// Outcome of one click on the pitch
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationResult {
    pub selected_point: PitchPoint,
    pub nearest_goal: Goal,
    pub distance_to_nearest_goal: f64, // meters
    pub angle_width_degrees: f64,      // [0, 180]
}

impl CalculationResult {
    pub fn angle_width_radians(&self) -> f64 {
        self.angle_width_degrees.to_radians()
    }
}
