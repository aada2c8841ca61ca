use crate::geometry::Point3;
use crate::mesh::{MeshData, Triangle, build_mesh};

/// Generate an axis-aligned cube centered on the origin
///
/// Eight corners at `(±half_extent, ±half_extent, ±half_extent)`, twelve
/// triangles (two per face). Each face is wound so its computed normal
/// points outward, away from the origin.
pub fn generate_cube(half_extent: f32) -> MeshData {
    let s = half_extent;
    let v = [
        Point3::new(-s, -s, -s),
        Point3::new(s, -s, -s),
        Point3::new(s, s, -s),
        Point3::new(-s, s, -s),
        Point3::new(-s, -s, s),
        Point3::new(s, -s, s),
        Point3::new(s, s, s),
        Point3::new(-s, s, s),
    ];

    build_mesh(&[
        // Back face (z = -s)
        Triangle::new(v[0], v[3], v[2]),
        Triangle::new(v[0], v[2], v[1]),
        // Front face (z = +s)
        Triangle::new(v[4], v[5], v[6]),
        Triangle::new(v[4], v[6], v[7]),
        // Left face (x = -s)
        Triangle::new(v[0], v[4], v[7]),
        Triangle::new(v[0], v[7], v[3]),
        // Right face (x = +s)
        Triangle::new(v[1], v[2], v[6]),
        Triangle::new(v[1], v[6], v[5]),
        // Bottom face (y = -s)
        Triangle::new(v[0], v[1], v[5]),
        Triangle::new(v[0], v[5], v[4]),
        // Top face (y = +s)
        Triangle::new(v[3], v[7], v[6]),
        Triangle::new(v[3], v[6], v[2]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_triangle_count() {
        let mesh = generate_cube(0.45);

        // 6 faces * 2 triangles each = 12 triangles
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.vertex_count(), 36);
    }

    #[test]
    fn test_cube_normals_point_outward() {
        let mesh = generate_cube(0.45);

        for i in 0..mesh.triangle_count() {
            let v0 = mesh.positions[i * 3];
            let v1 = mesh.positions[i * 3 + 1];
            let v2 = mesh.positions[i * 3 + 2];
            let centroid = Point3::new(
                (v0.x + v1.x + v2.x) / 3.0,
                (v0.y + v1.y + v2.y) / 3.0,
                (v0.z + v1.z + v2.z) / 3.0,
            );

            let normal = mesh.normals[i * 3];
            assert!(
                normal.dot(centroid) > 0.0,
                "triangle {} normal points inward",
                i
            );
        }
    }

    #[test]
    fn test_cube_normals_are_axis_aligned() {
        let mesh = generate_cube(0.45);

        for normal in &mesh.normals {
            let components = [normal.x.abs(), normal.y.abs(), normal.z.abs()];
            let ones = components.iter().filter(|c| (**c - 1.0).abs() < 1e-6).count();
            let zeros = components.iter().filter(|c| **c < 1e-6).count();
            assert_eq!(ones, 1);
            assert_eq!(zeros, 2);
        }
    }

    #[test]
    fn test_cube_respects_half_extent() {
        let mesh = generate_cube(0.45);

        for vertex in &mesh.positions {
            assert!((vertex.x.abs() - 0.45).abs() < 1e-6);
            assert!((vertex.y.abs() - 0.45).abs() < 1e-6);
            assert!((vertex.z.abs() - 0.45).abs() < 1e-6);
        }
    }
}
