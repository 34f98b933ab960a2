/*!
Surface extraction for volumetric scan data.

This crate turns a dense 3D scalar grid (a [Volume], typically reconstructed
from a stack of imaging slices) into a triangle [Mesh] approximating the
surface where the intensity crosses a chosen threshold, using the classic
marching cubes algorithm. The mesh can then be written out as a Wavefront OBJ
file, readable by common 3D tooling.

# Example

```
use scanmesh::prelude::*;

// A small synthetic volume: a ball of high intensity in a cold field
let volume = Volume::<f32>::from_fn([16, 16, 16], [1.0, 1.0, 1.0], [0.0, 0.0, 0.0], |x, y, z| {
    let (dx, dy, dz) = (x - 7.5, y - 7.5, z - 7.5);
    5.0 - (dx * dx + dy * dy + dz * dz).sqrt()
});
let mesh = extract(&volume, 0.0).unwrap();
assert!(mesh.num_tris() > 0);

let mut obj = Vec::new();
write_obj(&mesh, &mut obj).unwrap();
```

# Coordinate spaces

[extract] produces a mesh in grid space (one unit per voxel step, origin at
voxel 0,0,0). [extract_physical] additionally applies the volume's spacing and
origin, yielding physical coordinates. Both are deterministic: the same volume
and threshold always produce byte-identical meshes.

# Conventions

A sample equal to the threshold counts as inside the surface. Triangles are
wound so that face normals point away from the above-threshold region.
*/

#![warn(missing_docs)]

pub mod error;
pub mod extraction;
pub mod mesh;
pub mod obj;
pub mod prelude;
pub mod traits;
pub mod volume;

pub mod implementation;

pub use error::ExtractionError;
pub use extraction::{extract, extract_physical};
pub use mesh::Mesh;
pub use obj::write_obj;
pub use volume::Volume;

#[cfg(test)]
mod unit_tests;
