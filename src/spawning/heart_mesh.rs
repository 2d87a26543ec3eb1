use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;

use crate::core::heart;

/// Extruded heart: the outline polygon as front and back caps plus a side
/// wall, flat-shaded, caps at z = ±depth/2.
pub fn build_heart_mesh(scale: f32, depth: f32, samples_per_arc: usize) -> Mesh {
    let mut outline = heart::heart_polygon(scale, samples_per_arc);
    if polygon_area(&outline) < 0.0 {
        outline.reverse();
    }
    let triangles = triangulate(&outline);

    let n = outline.len();
    let half = depth / 2.0;
    let (min, max) = bounds(&outline);
    let extent = (max - min).max(Vec2::splat(1.0e-6));

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(6 * n);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(6 * n);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(6 * n);
    let mut indices: Vec<u32> = Vec::with_capacity(6 * (n - 2) + 6 * n);

    // front cap
    for point in &outline {
        positions.push([point.x, point.y, half]);
        normals.push([0.0, 0.0, 1.0]);
        uvs.push([(point.x - min.x) / extent.x, (point.y - min.y) / extent.y]);
    }
    for [a, b, c] in &triangles {
        indices.extend([*a, *b, *c]);
    }

    // back cap, winding reversed
    let back_base = n as u32;
    for point in &outline {
        positions.push([point.x, point.y, -half]);
        normals.push([0.0, 0.0, -1.0]);
        uvs.push([(point.x - min.x) / extent.x, (point.y - min.y) / extent.y]);
    }
    for [a, b, c] in &triangles {
        indices.extend([back_base + *c, back_base + *b, back_base + *a]);
    }

    // side wall, one flat-shaded quad per outline edge
    for i in 0..n {
        let a = outline[i];
        let b = outline[(i + 1) % n];
        let edge = b - a;
        let normal = Vec2::new(edge.y, -edge.x).normalize_or_zero();
        let normal = [normal.x, normal.y, 0.0];

        let base = positions.len() as u32;
        let u0 = i as f32 / n as f32;
        let u1 = (i + 1) as f32 / n as f32;
        positions.push([a.x, a.y, half]);
        positions.push([b.x, b.y, half]);
        positions.push([b.x, b.y, -half]);
        positions.push([a.x, a.y, -half]);
        normals.extend([normal; 4]);
        uvs.extend([[u0, 0.0], [u1, 0.0], [u1, 1.0], [u0, 1.0]]);

        // af, bb, bf / af, ab, bb keeps the outward face front
        indices.extend([base, base + 2, base + 1]);
        indices.extend([base, base + 3, base + 2]);
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}

/// Twice the signed area; positive for counter-clockwise winding.
fn polygon_area(points: &[Vec2]) -> f32 {
    let mut doubled = 0.0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        doubled += a.x * b.y - b.x * a.y;
    }
    doubled
}

fn bounds(points: &[Vec2]) -> (Vec2, Vec2) {
    let mut min = Vec2::splat(f32::INFINITY);
    let mut max = Vec2::splat(f32::NEG_INFINITY);
    for point in points {
        min = min.min(*point);
        max = max.max(*point);
    }
    (min, max)
}

fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d0 = cross(b - a, p - a);
    let d1 = cross(c - b, p - b);
    let d2 = cross(a - c, p - c);
    let eps = 1.0e-7;
    d0 > eps && d1 > eps && d2 > eps
}

/// Ear clipping over a simple counter-clockwise polygon. Returns
/// `points.len() - 2` triangles indexing into `points`.
fn triangulate(points: &[Vec2]) -> Vec<[u32; 3]> {
    assert!(points.len() >= 3, "need a polygon to triangulate");
    let mut remaining: Vec<u32> = (0..points.len() as u32).collect();
    let mut triangles = Vec::with_capacity(points.len() - 2);

    while remaining.len() > 3 {
        let n = remaining.len();
        let mut clipped = false;

        for i in 0..n {
            let ia = remaining[(i + n - 1) % n];
            let ib = remaining[i];
            let ic = remaining[(i + 1) % n];
            let (a, b, c) = (points[ia as usize], points[ib as usize], points[ic as usize]);

            if cross(b - a, c - b) <= 0.0 {
                continue; // reflex corner
            }
            let blocked = remaining.iter().any(|&j| {
                j != ia && j != ib && j != ic && point_in_triangle(points[j as usize], a, b, c)
            });
            if blocked {
                continue;
            }

            triangles.push([ia, ib, ic]);
            remaining.remove(i);
            clipped = true;
            break;
        }

        if !clipped {
            // numerically collinear leftovers; fan them out below
            break;
        }
    }

    for i in 1..remaining.len() - 1 {
        triangles.push([remaining[0], remaining[i], remaining[i + 1]]);
    }
    triangles
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    #[test]
    fn square_splits_into_two_triangles() {
        let square = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        assert_eq!(triangulate(&square).len(), 2);
    }

    #[test]
    fn concave_polygon_triangulates_fully() {
        // L-shape: one reflex corner
        let shape = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(0.0, 2.0),
        ];
        let triangles = triangulate(&shape);
        assert_eq!(triangles.len(), shape.len() - 2);
        for [a, b, c] in &triangles {
            let (a, b, c) = (
                shape[*a as usize],
                shape[*b as usize],
                shape[*c as usize],
            );
            assert!(cross(b - a, c - b) > 0.0, "triangle should wind CCW");
        }
        // triangle areas sum to the polygon area
        let total: f32 = triangles
            .iter()
            .map(|[a, b, c]| {
                cross(shape[*b as usize] - shape[*a as usize], shape[*c as usize] - shape[*a as usize]) / 2.0
            })
            .sum();
        assert!((total - 3.0).abs() < 1.0e-5);
    }

    #[test]
    fn heart_polygon_triangulates_fully() {
        let mut outline = heart::heart_polygon(1.0, 8);
        if polygon_area(&outline) < 0.0 {
            outline.reverse();
        }
        assert_eq!(triangulate(&outline).len(), outline.len() - 2);
    }

    #[test]
    fn mesh_vertex_and_index_counts_are_consistent() {
        let mesh = build_heart_mesh(1.0, 0.5, 8);
        let n = 48;
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("positions missing");
        };
        assert_eq!(positions.len(), 2 * n + 4 * n);
        let index_count = mesh.indices().expect("indexed mesh").len();
        // two caps of n-2 triangles plus 2n wall triangles
        assert_eq!(index_count, 3 * (2 * (n - 2) + 2 * n));
        assert_eq!(
            mesh.attribute(Mesh::ATTRIBUTE_NORMAL).map(|a| a.len()),
            Some(positions.len())
        );
    }

    #[test]
    fn caps_sit_at_half_depth() {
        let mesh = build_heart_mesh(1.0, 0.5, 8);
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("positions missing");
        };
        for position in positions {
            assert!((position[2].abs() - 0.25).abs() < 1.0e-6);
        }
    }
}
