//! Entry path of a launched body.
//!
//! A centripetal Catmull-Rom spline through a far entry point, a mid
//! control point and the fixed impact target. The ends are extended by
//! reflecting the neighbouring point, and the curve is reparameterized by
//! arc length so equal steps of `u` cover equal distances.

use glam::DVec3;
use rand::Rng;

use impactor_core::constants::*;

/// Immutable once built. One per launched body.
#[derive(Debug, Clone)]
pub struct OrbitPath {
    points: [DVec3; 3],
    /// Cumulative chord length at `ARC_LENGTH_DIVISIONS + 1` evenly spaced
    /// curve parameters.
    arc_lengths: Vec<f64>,
}

impl OrbitPath {
    /// Build a path through three explicit points.
    pub fn new(start: DVec3, control: DVec3, end: DVec3) -> Self {
        let mut path = Self {
            points: [start, control, end],
            arc_lengths: Vec::new(),
        };
        path.arc_lengths = path.tabulate_lengths(ARC_LENGTH_DIVISIONS);
        path
    }

    /// Build a path with a random entry and control point ending at the
    /// impact target.
    pub fn build<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let start = DVec3::new(
            spread(rng, ENTRY_SPREAD_X),
            spread(rng, ENTRY_SPREAD_Y),
            ENTRY_DEPTH,
        );
        let control = DVec3::new(
            spread(rng, CONTROL_SPREAD),
            spread(rng, CONTROL_SPREAD),
            CONTROL_DEPTH,
        );
        Self::new(start, control, IMPACT_TARGET)
    }

    pub fn start(&self) -> DVec3 {
        self.points[0]
    }

    pub fn control(&self) -> DVec3 {
        self.points[1]
    }

    pub fn end(&self) -> DVec3 {
        self.points[2]
    }

    /// Approximate total length of the curve.
    pub fn length(&self) -> f64 {
        self.arc_lengths.last().copied().unwrap_or(0.0)
    }

    /// Position at normalized arc length `u`. Callers keep `u` in [0, 1].
    pub fn point_at(&self, u: f64) -> DVec3 {
        self.point(self.u_to_t(u))
    }

    /// Unit direction of travel at normalized arc length `u`.
    pub fn tangent_at(&self, u: f64) -> DVec3 {
        self.tangent(self.u_to_t(u))
    }

    /// Position at raw curve parameter `t` in [0, 1].
    pub fn point(&self, t: f64) -> DVec3 {
        let last = self.points.len() - 1;
        let scaled = last as f64 * t;
        let mut segment = scaled.floor() as usize;
        let mut weight = scaled - segment as f64;
        if segment >= last {
            segment = last - 1;
            weight = 1.0;
        }

        let p1 = self.points[segment];
        let p2 = self.points[segment + 1];
        let p0 = if segment > 0 {
            self.points[segment - 1]
        } else {
            2.0 * p1 - p2
        };
        let p3 = if segment + 2 <= last {
            self.points[segment + 2]
        } else {
            2.0 * p2 - p1
        };

        centripetal(p0, p1, p2, p3, weight)
    }

    /// Unit direction at raw curve parameter `t`, by central difference.
    pub fn tangent(&self, t: f64) -> DVec3 {
        let t1 = (t - TANGENT_DELTA).max(0.0);
        let t2 = (t + TANGENT_DELTA).min(1.0);
        (self.point(t2) - self.point(t1)).normalize_or_zero()
    }

    /// Map normalized arc length to curve parameter.
    fn u_to_t(&self, u: f64) -> f64 {
        let lengths = &self.arc_lengths;
        let count = lengths.len();
        let total = self.length();
        if count < 2 || total <= 0.0 {
            return u;
        }

        let target = u * total;
        // Largest index whose cumulative length does not exceed the target.
        let i = lengths.partition_point(|&l| l <= target).saturating_sub(1);
        if i >= count - 1 {
            return 1.0;
        }

        let before = lengths[i];
        if before == target {
            return i as f64 / (count - 1) as f64;
        }
        let after = lengths[i + 1];
        let fraction = (target - before) / (after - before);
        (i as f64 + fraction) / (count - 1) as f64
    }

    fn tabulate_lengths(&self, divisions: usize) -> Vec<f64> {
        let mut lengths = Vec::with_capacity(divisions + 1);
        lengths.push(0.0);
        let mut previous = self.point(0.0);
        let mut sum = 0.0;
        for i in 1..=divisions {
            let current = self.point(i as f64 / divisions as f64);
            sum += current.distance(previous);
            lengths.push(sum);
            previous = current;
        }
        lengths
    }
}

/// Uniform sample in [-extent/2, extent/2).
fn spread<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> f64 {
    (rng.gen::<f64>() - 0.5) * extent
}

/// Evaluate the p1→p2 span of a centripetal Catmull-Rom spline at `w`.
fn centripetal(p0: DVec3, p1: DVec3, p2: DVec3, p3: DVec3, w: f64) -> DVec3 {
    let mut dt0 = p0.distance_squared(p1).powf(0.25);
    let mut dt1 = p1.distance_squared(p2).powf(0.25);
    let mut dt2 = p2.distance_squared(p3).powf(0.25);

    // Coincident points
    if dt1 < 1e-4 {
        dt1 = 1.0;
    }
    if dt0 < 1e-4 {
        dt0 = dt1;
    }
    if dt2 < 1e-4 {
        dt2 = dt1;
    }

    let m1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
    let m2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;

    hermite(p1, p2, m1, m2, w)
}

/// Cubic Hermite interpolation between `x0` and `x1` with end tangents.
fn hermite(x0: DVec3, x1: DVec3, t0: DVec3, t1: DVec3, w: f64) -> DVec3 {
    let c2 = -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1;
    let c3 = 2.0 * x0 - 2.0 * x1 + t0 + t1;
    x0 + t0 * w + c2 * (w * w) + c3 * (w * w * w)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn sample_path() -> OrbitPath {
        OrbitPath::new(
            DVec3::new(20.0, -15.0, 50.0),
            DVec3::new(-5.0, 8.0, 25.0),
            IMPACT_TARGET,
        )
    }

    #[test]
    fn test_endpoints_are_exact() {
        let path = sample_path();
        let start = path.point_at(0.0);
        let end = path.point_at(1.0);
        assert_relative_eq!(start.x, 20.0, epsilon = 1e-9);
        assert_relative_eq!(start.y, -15.0, epsilon = 1e-9);
        assert_relative_eq!(start.z, 50.0, epsilon = 1e-9);
        assert_relative_eq!(end.x, IMPACT_TARGET.x, epsilon = 1e-9);
        assert_relative_eq!(end.y, IMPACT_TARGET.y, epsilon = 1e-9);
        assert_relative_eq!(end.z, IMPACT_TARGET.z, epsilon = 1e-9);
    }

    #[test]
    fn test_passes_through_control_point() {
        // Raw parameter 0.5 is the knot at the control point.
        let path = sample_path();
        let mid = path.point(0.5);
        assert_relative_eq!(mid.x, -5.0, epsilon = 1e-9);
        assert_relative_eq!(mid.y, 8.0, epsilon = 1e-9);
        assert_relative_eq!(mid.z, 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_tangent_is_unit_and_heads_toward_earth() {
        let path = sample_path();
        for i in 0..=10 {
            let u = i as f64 / 10.0;
            let tangent = path.tangent_at(u);
            assert_relative_eq!(tangent.length(), 1.0, epsilon = 1e-9);
            // Depth decreases monotonically from 50 to 10.5.
            assert!(tangent.z < 0.0, "tangent at u={u} should point inward");
        }
    }

    #[test]
    fn test_arc_length_parameterization_is_uniform() {
        let path = sample_path();
        let steps = 20;
        let expected = path.length() / steps as f64;
        let mut previous = path.point_at(0.0);
        for i in 1..=steps {
            let current = path.point_at(i as f64 / steps as f64);
            let chord = current.distance(previous);
            // Chords of short arcs are close to the arc itself.
            assert!(
                (chord - expected).abs() < expected * 0.05,
                "step {i}: chord {chord:.4} vs expected {expected:.4}"
            );
            previous = current;
        }
    }

    #[test]
    fn test_length_exceeds_straight_line() {
        let path = sample_path();
        let straight = path.start().distance(path.end());
        assert!(path.length() >= straight);
    }

    #[test]
    fn test_build_with_zero_rng_uses_lower_bounds() {
        // A generator yielding only zeros samples the low end of every range.
        let mut rng = StepRng::new(0, 0);
        let path = OrbitPath::build(&mut rng);
        assert_eq!(path.start(), DVec3::new(-30.0, -20.0, ENTRY_DEPTH));
        assert_eq!(path.control(), DVec3::new(-10.0, -10.0, CONTROL_DEPTH));
        assert_eq!(path.end(), IMPACT_TARGET);
    }

    #[test]
    fn test_build_stays_in_entry_box() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let path = OrbitPath::build(&mut rng);
            let start = path.start();
            let control = path.control();
            assert!((-30.0..30.0).contains(&start.x));
            assert!((-20.0..20.0).contains(&start.y));
            assert_eq!(start.z, ENTRY_DEPTH);
            assert!((-10.0..10.0).contains(&control.x));
            assert!((-10.0..10.0).contains(&control.y));
            assert_eq!(control.z, CONTROL_DEPTH);
        }
    }

    #[test]
    fn test_degenerate_path_stays_put() {
        let p = DVec3::new(1.0, 2.0, 3.0);
        let path = OrbitPath::new(p, p, p);
        assert_eq!(path.length(), 0.0);
        assert_eq!(path.point_at(0.5), p);
        assert_eq!(path.tangent_at(0.5), DVec3::ZERO);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Every point of a built path stays near the box spanned by its
        /// three defining points.
        #[test]
        fn prop_points_stay_near_control_hull(seed in any::<u64>(), u in 0.0f64..=1.0) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let path = OrbitPath::build(&mut rng);
            let pts = [path.start(), path.control(), path.end()];
            let min = pts[0].min(pts[1]).min(pts[2]);
            let max = pts[0].max(pts[1]).max(pts[2]);
            let margin = (max - min) * 0.5 + DVec3::splat(1.0);

            let p = path.point_at(u);
            prop_assert!(p.cmpge(min - margin).all(), "{p:?} below {min:?}");
            prop_assert!(p.cmple(max + margin).all(), "{p:?} above {max:?}");
        }

        /// Depth never leaves the [impact, entry] span.
        #[test]
        fn prop_depth_between_entry_and_target(seed in any::<u64>(), u in 0.0f64..=1.0) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let path = OrbitPath::build(&mut rng);
            let z = path.point_at(u).z;
            prop_assert!(z <= ENTRY_DEPTH + 1e-6);
            prop_assert!(z >= IMPACT_TARGET.z - 1e-6);
        }
    }
}
