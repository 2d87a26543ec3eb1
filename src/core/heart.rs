use bevy::prelude::*;

use crate::core::curve::{ClosedCurve, CubicArc};

// Control polygon of the heart outline, traced from the notch at (0.5, 0.5)
// down around the left lobe, over the apex at (0.5, 1.9) and back. The apex
// points +y, so meshes built from it get flipped about X when spawned.
const OUTLINE: [[Vec2; 4]; 6] = [
    [
        Vec2::new(0.5, 0.5),
        Vec2::new(0.5, 0.5),
        Vec2::new(0.4, 0.0),
        Vec2::new(0.0, 0.0),
    ],
    [
        Vec2::new(0.0, 0.0),
        Vec2::new(-0.6, 0.0),
        Vec2::new(-0.6, 0.7),
        Vec2::new(-0.6, 0.7),
    ],
    [
        Vec2::new(-0.6, 0.7),
        Vec2::new(-0.6, 1.1),
        Vec2::new(-0.3, 1.54),
        Vec2::new(0.5, 1.9),
    ],
    [
        Vec2::new(0.5, 1.9),
        Vec2::new(1.3, 1.54),
        Vec2::new(1.6, 1.1),
        Vec2::new(1.6, 0.7),
    ],
    [
        Vec2::new(1.6, 0.7),
        Vec2::new(1.6, 0.7),
        Vec2::new(1.6, 0.0),
        Vec2::new(1.0, 0.0),
    ],
    [
        Vec2::new(1.0, 0.0),
        Vec2::new(0.7, 0.0),
        Vec2::new(0.5, 0.5),
        Vec2::new(0.5, 0.5),
    ],
];

/// The heart outline as a closed curve in the z = `z` plane, control points
/// multiplied by `scale`.
pub fn heart_curve(scale: f32, z: f32) -> ClosedCurve {
    let lift = |p: Vec2| Vec3::new(p.x * scale, p.y * scale, z);
    ClosedCurve::new(
        OUTLINE
            .iter()
            .map(|[p0, p1, p2, p3]| CubicArc::new(lift(*p0), lift(*p1), lift(*p2), lift(*p3)))
            .collect(),
    )
}

/// Closed polygon tracing the outline, `samples_per_arc` points per arc.
/// Each arc is sampled over u ∈ [0, 1) so shared endpoints appear once.
pub fn heart_polygon(scale: f32, samples_per_arc: usize) -> Vec<Vec2> {
    assert!(samples_per_arc > 0, "need at least one sample per arc");
    let curve = heart_curve(scale, 0.0);
    let mut points = Vec::with_capacity(curve.arc_count() * samples_per_arc);
    for arc in curve.arcs() {
        for step in 0..samples_per_arc {
            let p = arc.position(step as f32 / samples_per_arc as f32);
            points.push(Vec2::new(p.x, p.y));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::curve::instance_phase;

    #[test]
    fn outline_has_six_contiguous_arcs() {
        // ClosedCurve::new asserts contiguity and closure on the way in.
        let curve = heart_curve(1.0, 0.0);
        assert_eq!(curve.arc_count(), 6);
    }

    #[test]
    fn scaled_curve_starts_at_scaled_notch() {
        let curve = heart_curve(25.0, 10.0);
        assert!(curve.sample(0.0).abs_diff_eq(Vec3::new(12.5, 12.5, 10.0), 1.0e-4));
    }

    #[test]
    fn curve_stays_in_its_plane() {
        let curve = heart_curve(25.0, 10.0);
        for step in 0..50 {
            assert!((curve.sample(step as f32 / 50.0).z - 10.0).abs() < 1.0e-4);
        }
    }

    #[test]
    fn text_train_phases_cover_the_six_arcs_evenly() {
        // 6 arcs, 20 instances, base phase 0
        let curve = heart_curve(25.0, 10.0);
        assert_eq!(curve.arc_count(), 6);
        let phases: Vec<f32> = (0..20).map(|i| instance_phase(0.0, i, 20)).collect();
        assert_eq!(phases[0], 0.0);
        assert_eq!(phases[1], 0.05);
        assert_eq!(phases[19], 0.95);
    }

    #[test]
    fn polygon_sample_count_and_closure() {
        let polygon = heart_polygon(1.0, 8);
        assert_eq!(polygon.len(), 48);
        // first sample is the notch, and the trace ends feeding back into it
        assert!(polygon[0].abs_diff_eq(Vec2::new(0.5, 0.5), 1.0e-6));
        assert!(polygon[47].distance(polygon[0]) < 0.5);
    }
}
