use bevy::prelude::*;
use itertools::Itertools;

/// One cubic Bézier span: four control points, parametrized over u ∈ [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicArc {
    pub p0: Vec3,
    pub p1: Vec3,
    pub p2: Vec3,
    pub p3: Vec3,
}

impl CubicArc {
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        CubicArc { p0, p1, p2, p3 }
    }

    /// Bernstein-basis evaluation:
    /// `(1-u)³ p0 + 3(1-u)² u p1 + 3(1-u) u² p2 + u³ p3`.
    pub fn position(&self, u: f32) -> Vec3 {
        let v = 1.0 - u;
        self.p0 * (v * v * v)
            + self.p1 * (3.0 * v * v * u)
            + self.p2 * (3.0 * v * u * u)
            + self.p3 * (u * u * u)
    }
}

/// Closed chain of cubic arcs, sampled by normalized phase.
///
/// Phase maps linearly onto arc indices, so traversal speed follows the
/// control polygon rather than arc length. Uneven speed around the loop is
/// the intended behavior; do not reparametrize.
#[derive(Clone, Debug)]
pub struct ClosedCurve {
    arcs: Vec<CubicArc>,
}

impl ClosedCurve {
    /// Panics if the chain is empty, not contiguous, or not closed. Curves
    /// are built from fixed control data at startup, so this is a
    /// construction-time invariant rather than a runtime error.
    pub fn new(arcs: Vec<CubicArc>) -> Self {
        assert!(!arcs.is_empty(), "closed curve needs at least one arc");
        for (a, b) in arcs.iter().tuple_windows() {
            assert!(
                a.p3.abs_diff_eq(b.p0, 1.0e-5),
                "arc chain breaks between {:?} and {:?}",
                a.p3,
                b.p0
            );
        }
        let (first, last) = (&arcs[0], &arcs[arcs.len() - 1]);
        assert!(
            last.p3.abs_diff_eq(first.p0, 1.0e-5),
            "arc chain does not close: {:?} vs {:?}",
            last.p3,
            first.p0
        );
        ClosedCurve { arcs }
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    pub fn arcs(&self) -> &[CubicArc] {
        &self.arcs
    }

    /// Point at normalized position `phase` along the loop. Any real input
    /// is taken modulo 1, then mapped to arc `floor(p·N)` at local
    /// parameter `p·N - floor(p·N)`.
    pub fn sample(&self, phase: f32) -> Vec3 {
        let scaled = wrap_phase(phase) * self.arcs.len() as f32;
        let index = (scaled as usize).min(self.arcs.len() - 1);
        let u = scaled - index as f32;
        self.arcs[index].position(u)
    }
}

/// Wrap any phase value into [0, 1).
pub fn wrap_phase(phase: f32) -> f32 {
    let wrapped = phase.rem_euclid(1.0);
    // rem_euclid rounds up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// Phase of instance `index` in a train of `count` evenly spaced instances
/// offset from `base`.
pub fn instance_phase(base: f32, index: usize, count: usize) -> f32 {
    wrap_phase(base + index as f32 / count as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Four linear arcs around the unit square; a cubic with control points
    // at the thirds of a segment degenerates to that segment.
    fn square_loop() -> ClosedCurve {
        let corners = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let arcs = (0..4)
            .map(|i| {
                let a = corners[i];
                let b = corners[(i + 1) % 4];
                CubicArc::new(a, a.lerp(b, 1.0 / 3.0), a.lerp(b, 2.0 / 3.0), b)
            })
            .collect();
        ClosedCurve::new(arcs)
    }

    #[test]
    fn sample_zero_is_first_control_point() {
        let curve = square_loop();
        assert_eq!(curve.sample(0.0), curve.arcs()[0].p0);
    }

    #[test]
    fn sample_matches_direct_arc_evaluation() {
        let curve = square_loop();
        for phase in [0.05, 0.37, 0.5, 0.62, 0.99] {
            let scaled = phase * curve.arc_count() as f32;
            let index = scaled as usize;
            let u = scaled - index as f32;
            let direct = curve.arcs()[index].position(u);
            assert!(curve.sample(phase).abs_diff_eq(direct, 1.0e-6));
        }
    }

    #[test]
    fn loop_closes_as_phase_approaches_one() {
        let curve = square_loop();
        let near_end = curve.sample(1.0 - 1.0e-6);
        assert!(near_end.abs_diff_eq(curve.sample(0.0), 1.0e-4));
    }

    #[test]
    fn wrapped_phases_land_in_unit_interval() {
        for phase in [-3.7, -1.0, -1.0e-12, 0.0, 0.5, 1.0, 2.25, 17.3] {
            let wrapped = wrap_phase(phase);
            assert!((0.0..1.0).contains(&wrapped), "{phase} wrapped to {wrapped}");
        }
    }

    #[test]
    fn sampling_accepts_out_of_range_phases() {
        let curve = square_loop();
        assert!(curve.sample(1.25).abs_diff_eq(curve.sample(0.25), 1.0e-6));
        assert!(curve.sample(-0.75).abs_diff_eq(curve.sample(0.25), 1.0e-6));
    }

    #[test]
    fn twenty_instances_from_zero_base() {
        // base phase 0, K = 20 ⇒ exactly {0.0, 0.05, 0.10, .., 0.95}
        for index in 0..20 {
            assert_eq!(instance_phase(0.0, index, 20), index as f32 / 20.0);
        }
    }

    #[test]
    fn instance_spacing_is_constant_for_any_base() {
        for base in [0.0, 0.137, 0.5, 0.999] {
            for index in 0..19 {
                let a = instance_phase(base, index, 20);
                let b = instance_phase(base, index + 1, 20);
                let gap = wrap_phase(b - a);
                assert!((gap - 0.05).abs() < 1.0e-5, "gap {gap} at base {base}");
            }
        }
    }

    #[test]
    #[should_panic(expected = "arc chain breaks")]
    fn rejects_discontiguous_chains() {
        let a = CubicArc::new(Vec3::ZERO, Vec3::X, Vec3::X, Vec3::X);
        let b = CubicArc::new(Vec3::Y, Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);
        ClosedCurve::new(vec![a, b]);
    }

    #[test]
    #[should_panic(expected = "does not close")]
    fn rejects_open_chains() {
        let a = CubicArc::new(Vec3::ZERO, Vec3::X, Vec3::X, Vec3::X);
        ClosedCurve::new(vec![a]);
    }
}
