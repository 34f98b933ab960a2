/*!
This is the main algorithm implementation.

At its heart it's simply, for each cell of the voxel grid:
 1 - classify the 8 corners against the threshold to get a configuration code
 2 - look up which of the cell's 12 edges the surface crosses
 3 - place (or reuse) a vertex on each crossed edge, by linear interpolation
 4 - look up how the crossed edges combine into triangles, and emit them

Some details worth knowing:
 - classification uses "value >= threshold means inside", so a sample exactly
   at the threshold classifies identically from every cell that touches it
 - an interior grid edge is shared by up to 4 cells; vertices are deduplicated
   through a cache keyed by the edge's canonical identity (its lower grid
   vertex plus its axis), so neighboring cells reference the same vertex index
   and the mesh has no seams
 - cells are scanned in a fixed z, then y, then x ascending order, and the
   tables resolve every ambiguous configuration one fixed way, so the output
   is fully deterministic
 - cells only exist between sampled voxels: nothing is emitted beyond the
   outer voxel layer, which is the accepted boundary behavior
 */

use super::tables::*;
use crate::mesh::Mesh;
use crate::traits::Intensity;
use crate::volume::Volume;

/**
Computes the 8-bit configuration code for one cell: bit `i` is set iff
corner `i` (in `CORNER_DELTAS` order) is inside, that is at or above the
threshold. Pure; always yields a valid code in 0..=255.
*/
#[inline]
pub fn cell_case<D>(corner_values: &[D; 8], threshold: D) -> u8
where
    D: Intensity,
{
    let mut case = 0u8;
    for (i, value) in corner_values.iter().enumerate() {
        if value.inside(&threshold) {
            case |= 1 << i;
        }
    }
    case
}

/// One extraction pass over a volume. Owns the output buffers and the
/// shared-vertex cache while the pass runs.
pub struct Extractor<'v, D>
where
    D: Intensity,
{
    volume: &'v Volume<D>,
    threshold: D,
    vertices: usize,
    positions: Vec<D>,
    triangle_indices: Vec<usize>,
    shared_storage: SharedVertexIndices,
}

impl<'v, D> Extractor<'v, D>
where
    D: Intensity,
{
    /// The volume must already have passed the boundary validation;
    /// this type indexes it unchecked.
    pub fn new(volume: &'v Volume<D>, threshold: D) -> Self {
        Extractor {
            volume,
            threshold,
            vertices: 0,
            positions: Default::default(),
            triangle_indices: Default::default(),
            shared_storage: SharedVertexIndices::new(volume.dimensions()),
        }
    }

    /// Runs the pass and yields the mesh, in grid-space coordinates
    pub fn extract(mut self) -> Mesh<D> {
        let [nx, ny, nz] = self.volume.dimensions();
        for cell_z in 0..nz - 1 {
            for cell_y in 0..ny - 1 {
                for cell_x in 0..nx - 1 {
                    self.extract_cell(cell_x, cell_y, cell_z);
                }
            }
        }
        log::debug!(
            "extracted {} vertices / {} triangles from a {}x{}x{} volume",
            self.vertices,
            self.triangle_indices.len() / 3,
            nx,
            ny,
            nz
        );
        self.output_mesh()
    }

    fn output_mesh(self) -> Mesh<D> {
        Mesh {
            positions: self.positions,
            triangle_indices: self.triangle_indices,
        }
    }

    fn extract_cell(&mut self, cell_x: usize, cell_y: usize, cell_z: usize) {
        let mut corner_values = [D::ZERO; 8];
        for (i, &(dx, dy, dz)) in CORNER_DELTAS.iter().enumerate() {
            corner_values[i] = self.volume.value(cell_x + dx, cell_y + dy, cell_z + dz);
        }
        let case = cell_case(&corner_values, self.threshold);
        if case == 0 || case == 0xFF {
            // Fully outside or fully inside: the surface does not cross this cell
            return;
        }
        // The tables are indexed by the below-threshold mask
        let table_index = (!case) as usize;

        let crossed_edges = EDGE_TABLE[table_index];
        let mut cell_vertices_indices = [0usize; 12];
        for edge in 0..12 {
            if crossed_edges & (1 << edge) != 0 {
                cell_vertices_indices[edge] =
                    self.edge_vertex(cell_x, cell_y, cell_z, edge, &corner_values);
            }
        }

        let packed = CELL_TRIANGLES[table_index];
        for t in 0..triangle_count(packed) {
            let [e1, e2, e3] = triangle_edges(packed, t);
            // Reversed relative to the table's native order, so that face
            // normals point away from the above-threshold region
            self.triangle_indices.push(cell_vertices_indices[e3]);
            self.triangle_indices.push(cell_vertices_indices[e2]);
            self.triangle_indices.push(cell_vertices_indices[e1]);
        }
    }

    // Either creates or reuses an existing vertex on the given cell edge.
    // Returns its index in the vertices buffer.
    fn edge_vertex(
        &mut self,
        cell_x: usize,
        cell_y: usize,
        cell_z: usize,
        edge: usize,
        corner_values: &[D; 8],
    ) -> usize {
        let (corner_a, corner_b) = EDGE_CORNERS[edge];
        // Canonical edge identity: the endpoint with the lower coordinate
        // along the edge's axis, in global grid coordinates, plus the axis.
        // Order-independent, so all 4 cells sharing the edge agree on it.
        let (dx, dy, dz) = CORNER_DELTAS[corner_a];
        let (base_x, base_y, base_z) = (cell_x + dx, cell_y + dy, cell_z + dz);
        let axis = edge_axis(edge);

        if let Some(index) = self.shared_storage.get(base_x, base_y, base_z, axis) {
            return index;
        }
        let index = self.new_vertex(
            base_x,
            base_y,
            base_z,
            axis,
            corner_values[corner_a],
            corner_values[corner_b],
        );
        self.shared_storage.put(base_x, base_y, base_z, axis, index);
        index
    }

    // Creates a new vertex between the edge's endpoints, where the threshold
    // is crossed. Returns its index in the vertices buffer.
    fn new_vertex(
        &mut self,
        base_x: usize,
        base_y: usize,
        base_z: usize,
        axis: usize,
        value_a: D,
        value_b: D,
    ) -> usize {
        let toward_b = D::interp(value_a, value_b, self.threshold);
        let mut position = [
            D::from_index(base_x),
            D::from_index(base_y),
            D::from_index(base_z),
        ];
        position[axis] = position[axis] + toward_b;
        self.positions.push(position[0]);
        self.positions.push(position[1]);
        self.positions.push(position[2]);
        let index = self.vertices;
        self.vertices += 1;
        index
    }
}

/**
Vertex indices of already-interpolated edge crossings, for reuse by the up to
4 cells sharing each interior grid edge.

Storage is a flat arena over all (grid vertex, axis) pairs: the slot for the
edge starting at grid vertex (x, y, z) and running along `axis` is
`3 * (x + nx * (y + ny * z)) + axis`. Lives for the whole extraction pass.
*/
struct SharedVertexIndices {
    indices: Vec<usize>,
    nx: usize,
    ny: usize,
}

/// Marks a grid edge whose crossing vertex has not been created yet
const UNSET: usize = usize::MAX;

impl SharedVertexIndices {
    pub fn new(dimensions: [usize; 3]) -> Self {
        let [nx, ny, nz] = dimensions;
        SharedVertexIndices {
            indices: vec![UNSET; 3 * nx * ny * nz],
            nx,
            ny,
        }
    }

    fn storage_index(&self, x: usize, y: usize, z: usize, axis: usize) -> usize {
        3 * (x + self.nx * (y + self.ny * z)) + axis
    }

    pub fn get(&self, x: usize, y: usize, z: usize, axis: usize) -> Option<usize> {
        let index = self.indices[self.storage_index(x, y, z, axis)];
        if index == UNSET {
            None
        } else {
            Some(index)
        }
    }

    pub fn put(&mut self, x: usize, y: usize, z: usize, axis: usize, vertex_index: usize) {
        let storage_index = self.storage_index(x, y, z, axis);
        self.indices[storage_index] = vertex_index;
    }
}
