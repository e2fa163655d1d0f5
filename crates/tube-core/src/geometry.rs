//! Tube geometry builder.
//!
//! The CPU-side buffer never holds an actual tube surface. Each vertex
//! carries only a signed arc-length position, a radial angle and a texture
//! coordinate; the vertex shader extrudes the cross-section from those plus
//! the per-instance thickness. The buffer is deliberately non-indexed: every
//! triangle owns its three vertex records, so the angle attribute stays
//! unambiguous within a face and never gets averaged across the +-pi seam.

use bytemuck::{Pod, Zeroable};
use std::f32::consts::TAU;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("tube needs at least 3 sides, got {0}")]
    TooFewSides(u32),
    #[error("tube needs at least 1 subdivision, got {0}")]
    TooFewSubdivisions(u32),
}

/// One vertex record of the unrolled tube, laid out for direct GPU upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct TubeVertex {
    /// Signed position along the tube's length axis, in [-0.5, 0.5].
    pub arc_position: f32,
    /// Angle around the cross-section, in (-pi, pi].
    pub radial_angle: f32,
    pub uv: [f32; 2],
}

/// Immutable, non-indexed vertex buffer shared by every tube instance.
#[derive(Clone, Debug)]
pub struct TubeGeometry {
    vertices: Vec<TubeVertex>,
    sides: u32,
    subdivisions: u32,
}

impl TubeGeometry {
    pub fn vertices(&self) -> &[TubeVertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn subdivisions(&self) -> u32 {
        self.subdivisions
    }

    /// Raw bytes for buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Build the unrolled tessellation of a unit cylinder (radius 1, length 1,
/// length axis = X). Walls contribute `sides * subdivisions * 2` triangles;
/// unless `open_ended`, each end gets a `sides`-triangle cap fan.
pub fn build_tube_geometry(
    sides: u32,
    subdivisions: u32,
    open_ended: bool,
) -> Result<TubeGeometry, GeometryError> {
    if sides < 3 {
        return Err(GeometryError::TooFewSides(sides));
    }
    if subdivisions < 1 {
        return Err(GeometryError::TooFewSubdivisions(subdivisions));
    }

    let wall_verts = (sides * subdivisions * 2 * 3) as usize;
    let cap_verts = if open_ended { 0 } else { (sides * 2 * 3) as usize };
    let mut vertices = Vec::with_capacity(wall_verts + cap_verts);

    let corner = |x: f32, angle: f32, u: f32, v: f32| TubeVertex {
        arc_position: x,
        radial_angle: angle,
        uv: [u, v],
    };

    for j in 0..subdivisions {
        let x0 = j as f32 / subdivisions as f32 - 0.5;
        let x1 = (j + 1) as f32 / subdivisions as f32 - 0.5;
        let v0 = j as f32 / subdivisions as f32;
        let v1 = (j + 1) as f32 / subdivisions as f32;
        for i in 0..sides {
            let a0 = ring_angle(i, sides);
            let a1 = ring_angle(i + 1, sides);
            let u0 = i as f32 / sides as f32;
            let u1 = (i + 1) as f32 / sides as f32;

            vertices.push(corner(x0, a0, u0, v0));
            vertices.push(corner(x1, a0, u0, v1));
            vertices.push(corner(x1, a1, u1, v1));

            vertices.push(corner(x0, a0, u0, v0));
            vertices.push(corner(x1, a1, u1, v1));
            vertices.push(corner(x0, a1, u1, v0));
        }
    }

    if !open_ended {
        // Triangle fans around each end; the degenerate center vertex takes
        // angle 0 and the rim reuses the wall angles.
        for &(x, flip) in &[(0.5_f32, false), (-0.5_f32, true)] {
            for i in 0..sides {
                let a0 = ring_angle(i, sides);
                let a1 = ring_angle(i + 1, sides);
                let center = corner(x, 0.0, 0.5, 0.5);
                let rim0 = corner(x, a0, a0.cos() * 0.5 + 0.5, a0.sin() * 0.5 + 0.5);
                let rim1 = corner(x, a1, a1.cos() * 0.5 + 0.5, a1.sin() * 0.5 + 0.5);
                if flip {
                    vertices.push(center);
                    vertices.push(rim1);
                    vertices.push(rim0);
                } else {
                    vertices.push(center);
                    vertices.push(rim0);
                    vertices.push(rim1);
                }
            }
        }
    }

    log::debug!(
        "built tube geometry: sides={} subdivisions={} open_ended={} verts={}",
        sides,
        subdivisions,
        open_ended,
        vertices.len()
    );

    Ok(TubeGeometry {
        vertices,
        sides,
        subdivisions,
    })
}

/// Principal-range angle of ring column `i`. The duplicated seam column
/// (`i == sides`) wraps back next to column 0, which keeps every face's
/// angles circularly tight instead of spanning the branch cut.
#[inline]
fn ring_angle(i: u32, sides: u32) -> f32 {
    let theta = i as f32 * TAU / sides as f32;
    theta.sin().atan2(theta.cos())
}
