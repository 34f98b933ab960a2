/*!
Wavefront OBJ serialization of extracted meshes.

This is the one canonical exchange format the crate writes: a plain vertex
list (`v x y z`) followed by a 1-based face list (`f i j k`), readable by
common 3D tooling.
*/

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::mesh::Mesh;
use crate::traits::Intensity;

/**
Writes the mesh to the given writer in Wavefront OBJ format.

Vertices keep their mesh order, so the output is deterministic. An empty
mesh produces a valid OBJ file with no geometry.
*/
pub fn write_obj<D, W>(mesh: &Mesh<D>, writer: &mut W) -> io::Result<()>
where
    D: Intensity + Display,
    W: Write,
{
    writeln!(writer, "# scanmesh OBJ export")?;
    writeln!(
        writer,
        "# {} vertices, {} faces",
        mesh.num_vertices(),
        mesh.num_tris()
    )?;
    for vertex in mesh.positions.chunks_exact(3) {
        writeln!(writer, "v {} {} {}", vertex[0], vertex[1], vertex[2])?;
    }
    for face in mesh.triangle_indices.chunks_exact(3) {
        // OBJ uses 1-based indexing
        writeln!(writer, "f {} {} {}", face[0] + 1, face[1] + 1, face[2] + 1)?;
    }
    Ok(())
}

/// Writes the mesh to a new file at `path`, in Wavefront OBJ format
pub fn write_obj_to_file<D, P>(mesh: &Mesh<D>, path: P) -> io::Result<()>
where
    D: Intensity + Display,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_obj(mesh, &mut writer)?;
    writer.flush()
}
