use crate::geometry::Point3;
use crate::mesh::{MeshData, Triangle, build_mesh};

/// Generate a square-based pyramid
///
/// The base is a square of side `base` in the y = 0 plane, split along
/// the same diagonal as the ground tile; four side faces converge on the
/// apex at `(0, height, 0)`.
pub fn generate_pyramid(base: f32, height: f32) -> MeshData {
    let half = base / 2.0;
    let v0 = Point3::new(-half, 0.0, -half);
    let v1 = Point3::new(half, 0.0, -half);
    let v2 = Point3::new(half, 0.0, half);
    let v3 = Point3::new(-half, 0.0, half);
    let top = Point3::new(0.0, height, 0.0);

    build_mesh(&[
        // Base
        Triangle::new(v0, v1, v2),
        Triangle::new(v0, v2, v3),
        // Sides
        Triangle::new(v0, v1, top),
        Triangle::new(v1, v2, top),
        Triangle::new(v2, v3, top),
        Triangle::new(v3, v0, top),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pyramid_triangle_count() {
        let mesh = generate_pyramid(0.6, 0.5);

        // 2 base + 4 side triangles
        assert_eq!(mesh.triangle_count(), 6);
        assert_eq!(mesh.vertex_count(), 18);
    }

    #[test]
    fn test_pyramid_apex_appears_four_times() {
        let mesh = generate_pyramid(0.6, 0.5);

        let apex = Point3::new(0.0, 0.5, 0.0);
        let apex_count = mesh
            .positions
            .iter()
            .filter(|vertex| **vertex == apex)
            .count();
        assert_eq!(apex_count, 4);
    }

    #[test]
    fn test_pyramid_base_corners() {
        let mesh = generate_pyramid(0.6, 0.5);

        for vertex in &mesh.positions {
            if vertex.y == 0.0 {
                assert!((vertex.x.abs() - 0.3).abs() < 1e-6);
                assert!((vertex.z.abs() - 0.3).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_pyramid_respects_parameters() {
        let mesh = generate_pyramid(1.0, 2.0);

        let apex = Point3::new(0.0, 2.0, 0.0);
        assert!(mesh.positions.contains(&apex));
        let base_corner = Point3::new(0.5, 0.0, 0.5);
        assert!(mesh.positions.contains(&base_corner));
    }
}
