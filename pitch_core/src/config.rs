use crate::{ConfigError, Goal, Params, PitchPoint, PitchRegion};

/// Pitch configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PitchConfig {
    pub length: f64,
    pub width: f64,
    pub goal_post_width: f64,
    pub in_goal_depth: f64,
    pub scale: f64,
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            length: Params::PITCH_LENGTH,
            width: Params::PITCH_WIDTH,
            goal_post_width: Params::GOAL_POST_WIDTH,
            in_goal_depth: Params::IN_GOAL_DEPTH,
            scale: Params::SCALE,
        }
    }
}

impl PitchConfig {
    /// Build a custom pitch, rejecting dimensions the geometry can't use
    pub fn new(
        length: f64,
        width: f64,
        goal_post_width: f64,
        in_goal_depth: f64,
        scale: f64,
    ) -> Result<Self, ConfigError> {
        require_positive("length", length)?;
        require_positive("width", width)?;
        require_positive("goal_post_width", goal_post_width)?;
        require_positive("scale", scale)?;
        if !in_goal_depth.is_finite() || in_goal_depth < 0.0 {
            return Err(ConfigError::NegativeInGoalDepth(in_goal_depth));
        }
        if goal_post_width > width {
            return Err(ConfigError::PostsWiderThanField {
                posts: goal_post_width,
                width,
            });
        }

        Ok(Self {
            length,
            width,
            goal_post_width,
            in_goal_depth,
            scale,
        })
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    /// Left and right post positions for a goal
    pub fn posts(&self, goal: Goal) -> (PitchPoint, PitchPoint) {
        let half_posts = self.goal_post_width / 2.0;
        let y = goal.line_y(self);
        (PitchPoint::new(-half_posts, y), PitchPoint::new(half_posts, y))
    }

    /// Pixel size of the rendered pitch including both in-goal areas
    pub fn rendered_size(&self) -> (f64, f64) {
        (
            self.width * self.scale,
            (self.length + 2.0 * self.in_goal_depth) * self.scale,
        )
    }

    /// Classify a point against the touchlines and try lines
    pub fn region(&self, point: PitchPoint) -> PitchRegion {
        if point.x().abs() > self.half_width() {
            PitchRegion::OutOfBounds
        } else if point.y() < 0.0 {
            PitchRegion::NearInGoal
        } else if point.y() > self.length {
            PitchRegion::FarInGoal
        } else {
            PitchRegion::FieldOfPlay
        }
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
