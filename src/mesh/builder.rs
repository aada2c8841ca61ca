use crate::geometry::Point3;

/// A triangle defined by three corner points
///
/// The corner order is the winding: it determines the direction of the
/// computed face normal via the right-hand rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Point3,
    pub v1: Point3,
    pub v2: Point3,
}

impl Triangle {
    pub const fn new(v0: Point3, v1: Point3, v2: Point3) -> Self {
        Self { v0, v1, v2 }
    }

    /// Unit face normal from the cross product of the two edges at `v0`
    ///
    /// Degenerate triangles (collinear or coincident corners) yield the
    /// zero vector rather than an error or NaN.
    pub fn normal(&self) -> Point3 {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        e1.cross(e2).normalized()
    }
}

/// Flat-shaded vertex data ready for serialization
///
/// The three sequences are index-aligned: `normals[i]` is the normal for
/// `positions[i]`. Vertices are never shared between triangles, so
/// `indices` is always the trivial enumeration `0..positions.len()` in
/// consecutive per-triangle triples. Downstream consumers rely on
/// "one triangle = three fresh, flat-shaded vertices".
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub positions: Vec<Point3>,
    pub normals: Vec<Point3>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of triangles in the mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of emitted vertices (three per triangle)
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Build flat-shaded mesh data from a list of triangles
///
/// Each input triangle contributes three new vertices carrying one shared
/// face normal. No deduplication, welding, or reordering is performed;
/// degenerate triangles pass through with a zero normal.
pub fn build_mesh(triangles: &[Triangle]) -> MeshData {
    let mut mesh = MeshData {
        positions: Vec::with_capacity(triangles.len() * 3),
        normals: Vec::with_capacity(triangles.len() * 3),
        indices: Vec::with_capacity(triangles.len() * 3),
    };

    for tri in triangles {
        let normal = tri.normal();
        let base = mesh.positions.len() as u32;

        mesh.positions.extend([tri.v0, tri.v1, tri.v2]);
        mesh.normals.extend([normal, normal, normal]);
        mesh.indices.extend([base, base + 1, base + 2]);
    }

    mesh
}
