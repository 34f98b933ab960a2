/*!
The input voxel grid, and the loaders that assemble it
*/

use std::cmp::Ordering;

use crate::error::ExtractionError;
use crate::traits::Intensity;

/**
A dense 3D scalar grid: the input of the extraction algorithm.

Samples are stored x-fastest, then y, then z (the sample for voxel
`(x, y, z)` lives at linear index `x + nx * (y + ny * z)`), so each z-slice
is one contiguous `nx * ny` run. This matches a slice stack laid down in
z order, and is the documented axis order for everything downstream.

A volume is constructed once, by [Volume::new], [Volume::from_fn] or a
[SliceStack], and is immutable thereafter.
*/
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Volume<D>
where
    D: Intensity,
{
    dimensions: [usize; 3],
    spacing: [D; 3],
    origin: [D; 3],
    samples: Vec<D>,
}

impl<D> Volume<D>
where
    D: Intensity,
{
    /**
    Build a volume from a pre-ordered sample array.

    `samples` must hold exactly `nx * ny * nz` values in the documented
    x-fastest order, every dimension must be non-zero and every spacing
    component strictly positive.
    */
    pub fn new(
        dimensions: [usize; 3],
        spacing: [D; 3],
        origin: [D; 3],
        samples: Vec<D>,
    ) -> Result<Self, ExtractionError> {
        if dimensions.iter().any(|&n| n == 0) {
            return Err(ExtractionError::malformed(format!(
                "dimensions {:?} contain a zero axis",
                dimensions
            )));
        }
        let expected = dimensions[0]
            .checked_mul(dimensions[1])
            .and_then(|p| p.checked_mul(dimensions[2]))
            .ok_or_else(|| {
                ExtractionError::malformed(format!("dimensions {:?} overflow", dimensions))
            })?;
        if samples.len() != expected {
            return Err(ExtractionError::malformed(format!(
                "got {} samples but dimensions {:?} require {}",
                samples.len(),
                dimensions,
                expected
            )));
        }
        validate_spacing(&spacing)?;
        Ok(Volume {
            dimensions,
            spacing,
            origin,
            samples,
        })
    }

    /**
    Build a volume by sampling a closure at every voxel.

    The closure receives physical coordinates (`origin + index * spacing`),
    so synthetic fields can be written in world terms.
    */
    pub fn from_fn<FUN>(
        dimensions: [usize; 3],
        spacing: [D; 3],
        origin: [D; 3],
        mut f: FUN,
    ) -> Self
    where
        FUN: FnMut(D, D, D) -> D,
    {
        let [nx, ny, nz] = dimensions;
        let mut samples = Vec::with_capacity(nx * ny * nz);
        for z in 0..nz {
            let pz = origin[2] + D::from_index(z) * spacing[2];
            for y in 0..ny {
                let py = origin[1] + D::from_index(y) * spacing[1];
                for x in 0..nx {
                    let px = origin[0] + D::from_index(x) * spacing[0];
                    samples.push(f(px, py, pz));
                }
            }
        }
        Volume {
            dimensions,
            spacing,
            origin,
            samples,
        }
    }

    /// Voxel counts along each axis
    pub fn dimensions(&self) -> [usize; 3] {
        self.dimensions
    }

    /// Physical distance between adjacent voxel centers, per axis
    pub fn spacing(&self) -> [D; 3] {
        self.spacing
    }

    /// Physical position of voxel (0, 0, 0)
    pub fn origin(&self) -> [D; 3] {
        self.origin
    }

    /// Number of stored samples
    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    /// Intensity at the given voxel
    #[inline]
    pub fn value(&self, x: usize, y: usize, z: usize) -> D {
        debug_assert!(x < self.dimensions[0] && y < self.dimensions[1] && z < self.dimensions[2]);
        self.samples[x + self.dimensions[0] * (y + self.dimensions[1] * z)]
    }

    /// Checks that at least one cube of adjacent voxels can be formed, and
    /// that the sample buffer and spacing are consistent with the
    /// dimensions. Called at the extraction boundary, before any work is
    /// done; this also covers volumes built by [Volume::from_fn], which
    /// has no failure path of its own.
    pub(crate) fn ensure_extractable(&self) -> Result<(), ExtractionError> {
        validate_spacing(&self.spacing)?;
        if self.dimensions.iter().any(|&n| n < 2) {
            return Err(ExtractionError::malformed(format!(
                "dimensions {:?} cannot form a cube (every axis needs at least 2 samples)",
                self.dimensions
            )));
        }
        let expected = self.dimensions[0] * self.dimensions[1] * self.dimensions[2];
        if self.samples.len() != expected {
            return Err(ExtractionError::malformed(format!(
                "got {} samples but dimensions {:?} require {}",
                self.samples.len(),
                self.dimensions,
                expected
            )));
        }
        Ok(())
    }
}

fn validate_spacing<D>(spacing: &[D; 3]) -> Result<(), ExtractionError>
where
    D: Intensity,
{
    for (axis, &s) in spacing.iter().enumerate() {
        if !(s > D::ZERO) || !s.is_finite() {
            return Err(ExtractionError::malformed(format!(
                "spacing along axis {} is not a positive finite number",
                axis
            )));
        }
    }
    Ok(())
}

/**
Assembles a [Volume] from positioned 2D slices, in the way a scan series is
stacked: slices can be pushed in any order and are sorted by their position
along the stacking axis at build time.

```
use scanmesh::volume::SliceStack;

let mut stack = SliceStack::<f32>::new(2, 2);
stack.push_slice(4.0, vec![0.0; 4]).unwrap();
stack.push_slice(0.0, vec![0.0; 4]).unwrap();
stack.push_slice(2.0, vec![1.0; 4]).unwrap();
let volume = stack.build().unwrap();
assert_eq!(volume.dimensions(), [2, 2, 3]);
assert_eq!(volume.value(0, 0, 1), 1.0); // the slice at position 2.0
```

The slice spacing is inferred from the gap between the first two slices
(after sorting). Unevenly spaced stacks are still built with that first gap,
but logged as a warning, since the geometry downstream assumes a uniform
grid.
*/
#[derive(Debug)]
pub struct SliceStack<D>
where
    D: Intensity,
{
    nx: usize,
    ny: usize,
    pixel_spacing: [D; 2],
    slices: Vec<PositionedSlice<D>>,
}

#[derive(Debug)]
struct PositionedSlice<D> {
    position: D,
    samples: Vec<D>,
}

/// Relative deviation between slice gaps above which the stack is considered
/// unevenly spaced (and a warning is emitted).
const GAP_TOLERANCE: f64 = 1e-3;

impl<D> SliceStack<D>
where
    D: Intensity,
{
    /// A new stack of `nx` by `ny` slices, with unit in-plane pixel spacing
    pub fn new(nx: usize, ny: usize) -> Self {
        SliceStack {
            nx,
            ny,
            pixel_spacing: [D::ONE, D::ONE],
            slices: vec![],
        }
    }

    /// Sets the in-plane physical distance between adjacent pixels
    pub fn with_pixel_spacing(mut self, sx: D, sy: D) -> Self {
        self.pixel_spacing = [sx, sy];
        self
    }

    /**
    Adds one slice at the given position along the stacking axis.
    `samples` must hold exactly `nx * ny` values, x-fastest.
    */
    pub fn push_slice(&mut self, position: D, samples: Vec<D>) -> Result<(), ExtractionError> {
        if !position.is_finite() {
            return Err(ExtractionError::malformed(
                "slice position is not a finite number",
            ));
        }
        if samples.len() != self.nx * self.ny {
            return Err(ExtractionError::malformed(format!(
                "slice has {} samples but the stack is {}x{}",
                samples.len(),
                self.nx,
                self.ny
            )));
        }
        self.slices.push(PositionedSlice { position, samples });
        Ok(())
    }

    /// Number of slices pushed so far
    pub fn num_slices(&self) -> usize {
        self.slices.len()
    }

    /**
    Sorts the slices by position and assembles the [Volume].

    At least two slices are required (the slice spacing cannot be inferred
    from fewer, and no cube could be formed anyway).
    */
    pub fn build(mut self) -> Result<Volume<D>, ExtractionError> {
        if self.slices.len() < 2 {
            return Err(ExtractionError::malformed(format!(
                "slice stack has {} slices, at least 2 are needed",
                self.slices.len()
            )));
        }
        self.slices.sort_by(|a, b| {
            a.position
                .partial_cmp(&b.position)
                .unwrap_or(Ordering::Equal)
        });
        let slice_gap = self.slices[1].position - self.slices[0].position;
        let mut warned_uneven = false;
        // Every adjacent pair must be strictly increasing, even after an
        // uneven gap has already been reported
        for pair in self.slices.windows(2) {
            let gap = pair[1].position - pair[0].position;
            if !(gap > D::ZERO) {
                return Err(ExtractionError::malformed(
                    "two slices share the same position",
                ));
            }
            let deviation = ((gap - slice_gap) / slice_gap).abs();
            if !warned_uneven && deviation.to_f64().unwrap_or(f64::INFINITY) > GAP_TOLERANCE {
                log::warn!(
                    "slice stack is unevenly spaced (gap deviates by a factor {:?}); \
                     building with the first gap anyway",
                    deviation.to_f64()
                );
                warned_uneven = true;
            }
        }
        let nz = self.slices.len();
        let origin = [D::ZERO, D::ZERO, self.slices[0].position];
        let mut samples = Vec::with_capacity(self.nx * self.ny * nz);
        for slice in &self.slices {
            samples.extend_from_slice(&slice.samples);
        }
        Volume::new(
            [self.nx, self.ny, nz],
            [self.pixel_spacing[0], self.pixel_spacing[1], slice_gap],
            origin,
            samples,
        )
    }
}
