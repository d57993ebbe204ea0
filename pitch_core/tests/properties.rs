use pitch_core::*;
use proptest::prelude::*;

proptest! {
    /// Property: the halfway line always resolves to the far goal
    #[test]
    fn prop_halfway_line_picks_far(x in -60.0f64..60.0) {
        let config = PitchConfig::default();
        let (goal, distance) = nearest_goal(PitchPoint::new(x, config.length / 2.0), &config);
        prop_assert_eq!(goal, Goal::Far);
        prop_assert!(distance >= config.length / 2.0);
    }

    /// Property: reported distance is the smaller of the two goal distances
    #[test]
    fn prop_nearest_distance_is_minimum(x in -60.0f64..60.0, y in -20.0f64..120.0) {
        let config = PitchConfig::default();
        let point = PitchPoint::new(x, y);
        let (goal, distance) = nearest_goal(point, &config);
        let to_near = point.distance(Goal::Near.midpoint(&config));
        let to_far = point.distance(Goal::Far.midpoint(&config));
        prop_assert_eq!(distance, to_near.min(to_far));
        prop_assert_eq!(goal == Goal::Near, to_near < to_far);
    }

    /// Property: angle shrinks moving straight back from the posts
    #[test]
    fn prop_angle_decreases_with_depth(d in 0.1f64..500.0, step in 0.1f64..100.0) {
        let config = PitchConfig::default();
        let closer = angle_width(PitchPoint::new(0.0, d), 0.0, &config);
        let further = angle_width(PitchPoint::new(0.0, d + step), 0.0, &config);
        prop_assert!(closer > further, "{} at {} vs {} at {}", closer, d, further, d + step);
        prop_assert!(closer < 180.0);
    }

    /// Property: mirroring across the centerline leaves the angle unchanged
    #[test]
    fn prop_angle_mirror_symmetric(x in -60.0f64..60.0, y in -20.0f64..120.0) {
        let config = PitchConfig::default();
        let point = PitchPoint::new(x, y);
        let (goal, _) = nearest_goal(point, &config);
        let goal_y = goal.line_y(&config);
        let angle = angle_width(point, goal_y, &config);
        let mirrored = angle_width(point.mirrored(), goal_y, &config);
        prop_assert!((angle - mirrored).abs() < 1e-9);
    }

    /// Property: angle is always a valid degree value
    #[test]
    fn prop_angle_in_range(x in -1e4f64..1e4, y in -1e4f64..1e4, goal_y in -200.0f64..200.0) {
        let config = PitchConfig::default();
        let angle = angle_width(PitchPoint::new(x, y), goal_y, &config);
        prop_assert!((0.0..=180.0).contains(&angle));
    }

    /// Property: distant but finite clicks still give a finite distance and a valid angle
    #[test]
    fn prop_huge_clicks_well_defined(sx in -1e300f64..1e300, sy in -1e300f64..1e300) {
        let config = PitchConfig::default();
        let result = compute_result(ScreenPoint::new(sx, sy), ScreenPoint::ZERO, &config);
        prop_assert!(result.distance_to_nearest_goal.is_finite());
        prop_assert!((0.0..=180.0).contains(&result.angle_width_degrees));
    }

    /// Property: screen -> pitch -> screen returns the original click
    #[test]
    fn prop_screen_round_trip(
        sx in -2000.0f64..2000.0,
        sy in -2000.0f64..2000.0,
        ox in -500.0f64..500.0,
        oy in -500.0f64..500.0
    ) {
        let config = PitchConfig::default();
        let screen = ScreenPoint::new(sx, sy);
        let origin = ScreenPoint::new(ox, oy);
        let back = pitch_to_screen(screen_to_pitch(screen, origin, &config), origin, &config);
        prop_assert!((back.x() - sx).abs() < 1e-9);
        prop_assert!((back.y() - sy).abs() < 1e-9);
    }

    /// Property: the full pipeline agrees with its parts
    #[test]
    fn prop_compute_result_consistent(sx in -100.0f64..400.0, sy in -100.0f64..600.0) {
        let config = PitchConfig::default();
        let result = compute_result(ScreenPoint::new(sx, sy), ScreenPoint::ZERO, &config);
        let (goal, distance) = nearest_goal(result.selected_point, &config);
        prop_assert_eq!(result.nearest_goal, goal);
        prop_assert_eq!(result.distance_to_nearest_goal, distance);
        prop_assert!(result.distance_to_nearest_goal >= 0.0);
        prop_assert!((0.0..=180.0).contains(&result.angle_width_degrees));
    }
}
