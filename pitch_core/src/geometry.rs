//! Kick geometry
//!
//! Screen clicks are mapped into pitch meters, the nearer goal is picked and
//! the angle between the two posts is measured from the kick point.

use crate::{CalculationResult, Goal, Params, PitchConfig, PitchPoint, ScreenPoint};
use glam::DVec2;

/// Offset from the top-left of the rendered pitch to the pitch origin, in meters
fn origin_in_meters(config: &PitchConfig) -> DVec2 {
    DVec2::new(config.half_width(), config.in_goal_depth)
}

/// Convert a screen position to pitch coordinates.
///
/// `origin_offset` is the screen position of the rendered pitch's top-left
/// corner. Points outside the field are returned as-is.
pub fn screen_to_pitch(
    screen_point: ScreenPoint,
    origin_offset: ScreenPoint,
    config: &PitchConfig,
) -> PitchPoint {
    let relative = screen_point.0 - origin_offset.0;
    PitchPoint(relative / config.scale - origin_in_meters(config))
}

/// Inverse of [`screen_to_pitch`], used to place overlays
pub fn pitch_to_screen(
    pitch_point: PitchPoint,
    origin_offset: ScreenPoint,
    config: &PitchConfig,
) -> ScreenPoint {
    ScreenPoint((pitch_point.0 + origin_in_meters(config)) * config.scale + origin_offset.0)
}

/// Pick the goal whose line midpoint is closer.
///
/// Near only wins when strictly closer, so points on the halfway line go to Far.
pub fn nearest_goal(point: PitchPoint, config: &PitchConfig) -> (Goal, f64) {
    let to_near = point.distance(Goal::Near.midpoint(config));
    let to_far = point.distance(Goal::Far.midpoint(config));

    if to_near < to_far {
        (Goal::Near, to_near)
    } else {
        (Goal::Far, to_far)
    }
}

/// Angle in degrees between the two posts of the goal line at `goal_y`.
///
/// Returns 0 when the point sits on a post, where the angle is undefined.
pub fn angle_width(point: PitchPoint, goal_y: f64, config: &PitchConfig) -> f64 {
    let half_posts = config.goal_post_width / 2.0;
    let to_left = DVec2::new(-half_posts, goal_y) - point.0;
    let to_right = DVec2::new(half_posts, goal_y) - point.0;

    if hypot(to_left) <= Params::POST_EPSILON || hypot(to_right) <= Params::POST_EPSILON {
        log::debug!(
            "kick point ({}, {}) is on a post of goal line y={}, angle set to 0",
            point.x(),
            point.y(),
            goal_y
        );
        return 0.0;
    }

    // Normalize so squared lengths stay finite for far-away points
    let scale = to_left.abs().max(to_right.abs()).max_element();
    let (to_left, to_right) = (to_left / scale, to_right / scale);

    // Rounding can push the cosine just past +/-1 when the point is in line with the posts
    let cos_theta =
        (to_left.dot(to_right) / (to_left.length() * to_right.length())).clamp(-1.0, 1.0);
    cos_theta.acos().to_degrees()
}

fn hypot(v: DVec2) -> f64 {
    v.x.hypot(v.y)
}

/// Full pipeline for one click on the rendered pitch
pub fn compute_result(
    screen_point: ScreenPoint,
    origin_offset: ScreenPoint,
    config: &PitchConfig,
) -> CalculationResult {
    let selected_point = screen_to_pitch(screen_point, origin_offset, config);
    let (goal, distance) = nearest_goal(selected_point, config);
    let angle = angle_width(selected_point, goal.line_y(config), config);

    log::debug!(
        "click ({}, {}) -> pitch ({:.2}, {:.2}), {} goal {:.2}m, angle {:.2} deg",
        screen_point.x(),
        screen_point.y(),
        selected_point.x(),
        selected_point.y(),
        goal.name(),
        distance,
        angle
    );

    CalculationResult {
        selected_point,
        nearest_goal: goal,
        distance_to_nearest_goal: distance,
        angle_width_degrees: angle,
    }
}
