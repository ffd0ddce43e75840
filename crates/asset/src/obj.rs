//! Minimal OBJ parser: positions and faces only.
//!
//! Normals, texture coordinates, materials and grouping directives are
//! ignored even when present in the source file; the viewer consumes raw
//! positions and nothing else.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result, anyhow};

use crate::mesh::MeshData;

/// Load an OBJ mesh from a file path.
pub fn load_obj_from_path(path: impl AsRef<Path>) -> Result<MeshData> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open OBJ file: {}", path.as_ref().display()))?;
    let mesh = load_obj_from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse OBJ file: {}", path.as_ref().display()))?;
    log::debug!(
        "Parsed {}: {} positions, {} triangles",
        path.as_ref().display(),
        mesh.positions.len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Load an OBJ mesh from a [`BufRead`] implementation.
pub fn load_obj_from_reader<R: BufRead>(reader: R) -> Result<MeshData> {
    parse_obj(reader)
}

/// Convenience helper to parse an OBJ string literal.
pub fn load_obj_from_str(contents: &str) -> Result<MeshData> {
    parse_obj(io::Cursor::new(contents))
}

fn parse_obj<R: BufRead>(reader: R) -> Result<MeshData> {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", line_no + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        let tag = parts
            .next()
            .ok_or_else(|| anyhow!("Malformed OBJ line {}: '{}'", line_no + 1, trimmed))?;

        match tag {
            "v" => {
                let x = parse_f32(parts.next(), line_no, "x coordinate")?;
                let y = parse_f32(parts.next(), line_no, "y coordinate")?;
                let z = parse_f32(parts.next(), line_no, "z coordinate")?;
                positions.push([x, y, z]);
            }
            "f" => {
                let mut face: Vec<u32> = Vec::new();
                for token in parts {
                    let idx = parse_face_vertex(token, positions.len(), line_no)?;
                    let idx = u32::try_from(idx)
                        .map_err(|_| anyhow!("Too many vertices in OBJ (>{})", u32::MAX))?;
                    face.push(idx);
                }

                if face.len() < 3 {
                    continue;
                }
                // Triangulate fan
                for tri in 1..(face.len() - 1) {
                    indices.push(face[0]);
                    indices.push(face[tri]);
                    indices.push(face[tri + 1]);
                }
            }
            _ => {
                // Ignore other directives (vt/vn/o/g/s/usemtl/etc.)
            }
        }
    }

    if positions.is_empty() || indices.is_empty() {
        anyhow::bail!("OBJ contained no triangles");
    }

    Ok(MeshData::new(positions, indices))
}

fn parse_f32(value: Option<&str>, line_no: usize, what: &str) -> Result<f32> {
    let token = value.ok_or_else(|| anyhow!("Missing {} on line {}", what, line_no + 1))?;
    token
        .parse::<f32>()
        .with_context(|| format!("Failed to parse {} on line {}", what, line_no + 1))
}

/// A face vertex token is `i`, `i/t`, `i/t/n` or `i//n`; only the position
/// index is consulted.
fn parse_face_vertex(token: &str, pos_count: usize, line_no: usize) -> Result<usize> {
    let pos = token
        .split('/')
        .next()
        .ok_or_else(|| anyhow!("Malformed face element '{}' on line {}", token, line_no + 1))?;
    resolve_index(pos, pos_count, line_no)
}

fn resolve_index(token: &str, len: usize, line_no: usize) -> Result<usize> {
    let raw = token
        .parse::<i32>()
        .with_context(|| format!("Invalid index '{}' on line {}", token, line_no + 1))?;
    if raw == 0 {
        anyhow::bail!("OBJ indices are 1-based; found 0 on line {}", line_no + 1);
    }

    let idx = if raw > 0 {
        (raw - 1) as isize
    } else {
        (len as isize) + (raw as isize)
    };

    if idx < 0 || idx as usize >= len {
        anyhow::bail!(
            "OBJ index {} resolved out of bounds (len={}) on line {}",
            raw,
            len,
            line_no + 1
        );
    }

    Ok(idx as usize)
}
