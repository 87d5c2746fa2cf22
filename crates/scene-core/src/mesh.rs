//! CPU-side tessellation of the beam volumes.
//!
//! Meshes are generated once in beam-local space (axis along +X at the
//! origin); the renderer lifts them to the beam axis height via a uniform.

use crate::beam::{ConeProfile, PrismProfile};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

/// Open-ended lateral surface of a frustum along the X axis.
pub fn cone_mesh(profile: &ConeProfile, segments: u32) -> MeshData {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity(segments as usize * 2);
    let mut indices = Vec::with_capacity(segments as usize * 6);

    let slope = (profile.end_radius - profile.start_radius) / profile.length;
    let inv_norm = 1.0 / (1.0 + slope * slope).sqrt();
    for i in 0..segments {
        let theta = i as f32 / segments as f32 * std::f32::consts::TAU;
        let (sin_t, cos_t) = theta.sin_cos();
        vertices.push(MeshVertex {
            position: [
                profile.start_x,
                profile.start_radius * cos_t,
                profile.start_radius * sin_t,
            ],
            normal: [-slope * inv_norm, cos_t * inv_norm, sin_t * inv_norm],
        });
        vertices.push(MeshVertex {
            position: [
                profile.start_x + profile.length,
                profile.end_radius * cos_t,
                profile.end_radius * sin_t,
            ],
            normal: [-slope * inv_norm, cos_t * inv_norm, sin_t * inv_norm],
        });
    }
    for i in 0..segments {
        let a = i * 2;
        let b = ((i + 1) % segments) * 2;
        // two triangles per lateral quad
        indices.extend_from_slice(&[a, a + 1, b, b, a + 1, b + 1]);
    }

    MeshData { vertices, indices }
}

/// Closed square prism along the X axis with flat per-face normals.
pub fn prism_mesh(profile: &PrismProfile) -> MeshData {
    let h = profile.cross_section * 0.5;
    let x0 = profile.start_x;
    let x1 = profile.start_x + profile.length;

    // (normal, four corners counter-clockwise seen from outside)
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (
            [0.0, 1.0, 0.0],
            [[x0, h, -h], [x0, h, h], [x1, h, h], [x1, h, -h]],
        ),
        (
            [0.0, -1.0, 0.0],
            [[x0, -h, h], [x0, -h, -h], [x1, -h, -h], [x1, -h, h]],
        ),
        (
            [0.0, 0.0, 1.0],
            [[x0, -h, h], [x1, -h, h], [x1, h, h], [x0, h, h]],
        ),
        (
            [0.0, 0.0, -1.0],
            [[x1, -h, -h], [x0, -h, -h], [x0, h, -h], [x1, h, -h]],
        ),
        (
            [1.0, 0.0, 0.0],
            [[x1, -h, -h], [x1, h, -h], [x1, h, h], [x1, -h, h]],
        ),
        (
            [-1.0, 0.0, 0.0],
            [[x0, -h, h], [x0, h, h], [x0, h, -h], [x0, -h, -h]],
        ),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, corners) in &faces {
        let base = vertices.len() as u32;
        for corner in corners {
            vertices.push(MeshVertex {
                position: *corner,
                normal: *normal,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}
