/*!
Main mesh extraction methods
*/

use crate::error::ExtractionError;
use crate::implementation::algorithm::Extractor;
use crate::mesh::Mesh;
use crate::traits::Intensity;
use crate::volume::Volume;

/**
Extracts the iso-surface [Mesh] of a [Volume] at the given threshold, in
grid-space coordinates (one unit per voxel step).

Any real threshold is accepted; a volume entirely above or entirely below it
simply yields an empty mesh. The only failure is a malformed volume
(inconsistent sample buffer, or an axis with fewer than 2 voxels), rejected
before any extraction work begins.

Arguments:
 * `volume`: the scalar grid to extract from
 * `threshold`: intensity value defining the iso-surface (samples at or above
   it count as inside)
 */
pub fn extract<D>(volume: &Volume<D>, threshold: D) -> Result<Mesh<D>, ExtractionError>
where
    D: Intensity,
{
    volume.ensure_extractable()?;
    Ok(Extractor::new(volume, threshold).extract())
}

/**
Same as [extract], but with vertex coordinates mapped to physical space using
the volume's spacing and origin (`physical = origin + grid * spacing`).
*/
pub fn extract_physical<D>(volume: &Volume<D>, threshold: D) -> Result<Mesh<D>, ExtractionError>
where
    D: Intensity,
{
    let mesh = extract(volume, threshold)?;
    Ok(mesh.to_physical(&volume.spacing(), &volume.origin()))
}
