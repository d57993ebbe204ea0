use glam::DVec2;

/// Position on the rendering surface, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenPoint(pub DVec2);

impl ScreenPoint {
    pub const ZERO: Self = Self(DVec2::ZERO);

    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }
}

/// Position on the pitch, in meters.
///
/// Origin is the midpoint of the near try line. `x` runs across the field
/// (negative to the left of center), `y` runs toward the far try line.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PitchPoint(pub DVec2);

impl PitchPoint {
    pub const ORIGIN: Self = Self(DVec2::ZERO);

    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Euclidean distance; `hypot` keeps it finite for very distant points
    pub fn distance(&self, other: PitchPoint) -> f64 {
        let d = self.0 - other.0;
        d.x.hypot(d.y)
    }

    /// Same point reflected across the centerline
    pub fn mirrored(&self) -> Self {
        Self::new(-self.0.x, self.0.y)
    }
}

impl From<DVec2> for PitchPoint {
    fn from(v: DVec2) -> Self {
        Self(v)
    }
}

impl From<DVec2> for ScreenPoint {
    fn from(v: DVec2) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_point_distance() {
        let a = PitchPoint::new(0.0, 0.0);
        let b = PitchPoint::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn test_distance_does_not_overflow() {
        let a = PitchPoint::new(3e200, 4e200);
        let d = a.distance(PitchPoint::ORIGIN);
        assert!(d.is_finite());
        assert!((d / 5e200 - 1.0).abs() < 1e-12, "distance was {d}");
    }

    #[test]
    fn test_mirrored_keeps_depth() {
        let p = PitchPoint::new(12.5, 30.0);
        assert_eq!(p.mirrored(), PitchPoint::new(-12.5, 30.0));
        assert_eq!(p.mirrored().mirrored(), p);
    }
}
