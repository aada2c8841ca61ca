use super::MeshData;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write mesh data to a Wavefront OBJ file
///
/// Emits a minimal subset of the OBJ grammar, one directive per line:
/// - a single comment header
/// - `v x y z` per vertex position, 6-decimal fixed point
/// - `vn x y z` per vertex normal, 6-decimal fixed point
/// - `f a//a b//b c//c` per triangle, with 1-based indices; the position
///   and normal lists are index-aligned, so each index appears twice
///
/// Missing parent directories are created first; an existing file at
/// `path` is overwritten. The final character is the last face line's
/// newline.
///
/// # Arguments
/// * `mesh` - Mesh data to serialize
/// * `path` - Output file path
pub fn write_obj(mesh: &MeshData, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create output directory: {}", parent.display())
        })?;
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create OBJ file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# Generated primitive mesh")?;

    for vertex in &mesh.positions {
        writeln!(writer, "v {:.6} {:.6} {:.6}", vertex.x, vertex.y, vertex.z)?;
    }

    for normal in &mesh.normals {
        writeln!(writer, "vn {:.6} {:.6} {:.6}", normal.x, normal.y, normal.z)?;
    }

    // Faces are 1-indexed in OBJ
    for face in mesh.indices.chunks_exact(3) {
        let (a, b, c) = (face[0] + 1, face[1] + 1, face[2] + 1);
        writeln!(writer, "f {}//{} {}//{} {}//{}", a, a, b, b, c, c)?;
    }

    writer.flush()?;

    Ok(())
}

/// Number of text lines `write_obj` emits for the given mesh
pub fn obj_line_count(mesh: &MeshData) -> usize {
    // 1 (header) + positions + normals + one face line per triangle
    1 + mesh.positions.len() + mesh.normals.len() + mesh.indices.len() / 3
}
