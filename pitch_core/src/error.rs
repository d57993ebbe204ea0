//! Errors raised while building a [`PitchConfig`](crate::PitchConfig)

/// Rejected pitch dimensions
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite and greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("in_goal_depth must be finite and not negative, got {0}")]
    NegativeInGoalDepth(f64),
    #[error("goal_post_width {posts} does not fit inside a field {width} wide")]
    PostsWiderThanField { posts: f64, width: f64 },
}
