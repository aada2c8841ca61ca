use crate::geometry::Point3;
use crate::mesh::{MeshData, Triangle, build_mesh};

/// Generate a flat square ground tile
///
/// Two triangles split along one diagonal, lying in the y = 0 plane with
/// corners at `(±half_extent, 0, ±half_extent)`.
pub fn generate_tile(half_extent: f32) -> MeshData {
    let s = half_extent;
    let v0 = Point3::new(-s, 0.0, -s);
    let v1 = Point3::new(s, 0.0, -s);
    let v2 = Point3::new(s, 0.0, s);
    let v3 = Point3::new(-s, 0.0, s);

    build_mesh(&[Triangle::new(v0, v1, v2), Triangle::new(v0, v2, v3)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_triangle_count() {
        let mesh = generate_tile(0.5);

        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertex_count(), 6);
    }

    #[test]
    fn test_tile_lies_in_ground_plane() {
        let mesh = generate_tile(0.5);

        for vertex in &mesh.positions {
            assert_eq!(vertex.y, 0.0);
            assert_eq!(vertex.x.abs(), 0.5);
            assert_eq!(vertex.z.abs(), 0.5);
        }
    }

    #[test]
    fn test_tile_respects_half_extent() {
        let mesh = generate_tile(1.25);

        for vertex in &mesh.positions {
            assert_eq!(vertex.x.abs(), 1.25);
            assert_eq!(vertex.z.abs(), 1.25);
        }
    }
}
