/*!
The output triangle mesh
*/

use std::fmt::Debug;
use std::fmt::Display;

use crate::traits::Intensity;

/**
Output mesh of the extraction algorithm.

Vertices appear in first-discovery order; every physically distinct
threshold crossing appears exactly once, so triangles of neighboring cells
share vertex indices and the surface has no seams. Coordinates are in grid
space (one unit per voxel step) unless [Mesh::to_physical] is applied.
*/
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mesh<D>
where
    D: Intensity,
{
    /// Flat vector of the vertex positions. Each consecutive three floats define x,y,z for one vertex
    pub positions: Vec<D>,
    /**
    Flat vector of the triangle indices. Each consecutive i,j,k define one triangle by 3 indices.
    Indices refer to the `positions` "triples", so each index is in 0..num_vertices()
    */
    pub triangle_indices: Vec<usize>,
}

impl<D> Mesh<D>
where
    D: Intensity,
{
    /// An empty mesh (the valid result of extracting a volume with no threshold crossing)
    pub fn empty() -> Self {
        Mesh {
            positions: vec![],
            triangle_indices: vec![],
        }
    }

    /// Shorthand to get the vertex count
    pub fn num_vertices(&self) -> usize {
        self.positions.len() / 3
    }

    /// Shorthand to get the triangles count
    pub fn num_tris(&self) -> usize {
        self.triangle_indices.len() / 3
    }

    /// The x,y,z position of one vertex
    pub fn position(&self, vertex_index: usize) -> [D; 3] {
        [
            self.positions[3 * vertex_index],
            self.positions[3 * vertex_index + 1],
            self.positions[3 * vertex_index + 2],
        ]
    }

    /// The 3 vertex indices of one triangle
    pub fn face(&self, triangle_index: usize) -> [usize; 3] {
        [
            self.triangle_indices[3 * triangle_index],
            self.triangle_indices[3 * triangle_index + 1],
            self.triangle_indices[3 * triangle_index + 2],
        ]
    }

    /// Outputs a copy of the triangles in a structured format
    pub fn tris(&self) -> Vec<Triangle<D>> {
        let mut tris: Vec<Triangle<D>> = vec![];
        for i in 0..self.num_tris() {
            let [i1, i2, i3] = self.face(i);
            tris.push(Triangle {
                vertices: [self.position(i1), self.position(i2), self.position(i3)],
            });
        }
        tris
    }

    /**
    A copy of this mesh with vertex coordinates mapped from grid space to
    physical space: `physical = origin + grid * spacing`, component-wise.
    Face topology is unchanged.

    With unit spacing and a zero origin this is the identity.
    */
    pub fn to_physical(&self, spacing: &[D; 3], origin: &[D; 3]) -> Mesh<D> {
        let mut positions = Vec::with_capacity(self.positions.len());
        for chunk in self.positions.chunks_exact(3) {
            positions.push(origin[0] + chunk[0] * spacing[0]);
            positions.push(origin[1] + chunk[1] * spacing[1]);
            positions.push(origin[2] + chunk[2] * spacing[2]);
        }
        Mesh {
            positions,
            triangle_indices: self.triangle_indices.clone(),
        }
    }
}

/// A triangle, mostly for debugging or test purposes
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Triangle<D>
where
    D: Intensity,
{
    /// The x,y,z positions of the 3 corners, in winding order
    pub vertices: [[D; 3]; 3],
}

impl<D> Display for Triangle<D>
where
    D: Intensity + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Triangle:")?;
        let [v1, v2, v3] = self.vertices;
        writeln!(f, "    + Pos {:?}", v1)?;
        writeln!(f, "    + Pos {:?}", v2)?;
        writeln!(f, "    + Pos {:?}", v3)?;
        Ok(())
    }
}
