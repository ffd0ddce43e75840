//! CPU-side mesh representations used by the loader and the renderer.

/// Indexed triangle mesh as produced by the OBJ loader. Positions are in
/// object space; `indices` is a triangle list (length divisible by 3).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(positions: Vec<[f32; 3]>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns `true` if the mesh holds at least one whole triangle.
    pub fn is_valid(&self) -> bool {
        !self.positions.is_empty() && !self.indices.is_empty() && self.indices.len() % 3 == 0
    }

    /// Flatten the indexed representation into a non-indexed position
    /// stream: for every index entry, the referenced position's three
    /// components are appended in input order. Shared vertices are
    /// duplicated, never deduplicated.
    ///
    /// Indices are trusted to be in range. The loader validates them at
    /// parse time, so an out-of-range index here is a loader bug and panics.
    pub fn flatten(&self) -> FlatMesh {
        let mut coords = Vec::with_capacity(self.indices.len() * 3);
        for &index in &self.indices {
            coords.extend_from_slice(&self.positions[index as usize]);
        }
        FlatMesh { coords }
    }
}

/// Non-indexed coordinate stream ready for a one-time GPU upload: three
/// contiguous `f32`s per vertex, length always a multiple of 3.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatMesh {
    coords: Vec<f32>,
}

impl FlatMesh {
    pub fn coords(&self) -> &[f32] {
        &self.coords
    }

    /// Number of vertices a triangle-list draw over this stream covers.
    pub fn vertex_count(&self) -> u32 {
        (self.coords.len() / 3) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_copies_positions_in_index_order() {
        let mesh = MeshData::new(
            vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]],
            vec![2, 0, 1],
        );
        let flat = mesh.flatten();
        assert_eq!(
            flat.coords(),
            &[2.0, 2.0, 2.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn flatten_duplicates_shared_vertices() {
        // Two triangles sharing an edge: 6 index entries -> 18 floats.
        let mesh = MeshData::new(
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ],
            vec![0, 1, 2, 0, 2, 3],
        );
        let flat = mesh.flatten();
        assert_eq!(flat.coords().len(), 18);
        assert_eq!(flat.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn flat_length_is_three_times_index_count() {
        let mesh = MeshData::new(vec![[1.0, 2.0, 3.0]], vec![0, 0, 0]);
        assert!(mesh.is_valid());
        assert_eq!(mesh.flatten().coords().len(), mesh.indices.len() * 3);
    }
}
