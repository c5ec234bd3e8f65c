use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Vertex {
    pub(crate) position: [f32; 3],
    pub(crate) normal: [f32; 3],
}

/// Indexed triangle list with counter-clockwise front faces.
#[derive(Clone, Debug, Default)]
pub(crate) struct MeshData {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) indices: Vec<u16>,
}

impl MeshData {
    /// Append a quad centred on `center` spanning `±u` and `±v`
    /// (`u × v` must point along `normal`).
    fn push_quad(&mut self, center: Vec3, normal: Vec3, u: Vec3, v: Vec3) {
        let base = self.vertices.len() as u16;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            self.vertices.push(Vertex {
                position: (center + u * su + v * sv).to_array(),
                normal: normal.to_array(),
            });
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Axis-aligned cube of edge `size` centred on the origin, flat-shaded.
pub(crate) fn cube(size: f32) -> MeshData {
    let h = size * 0.5;
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    let mut mesh = MeshData::default();
    for (n, u, v) in faces {
        mesh.push_quad(n * h, n, u * h, v * h);
    }
    mesh
}

/// Square of edge `size` in the XZ plane facing +Y.
pub(crate) fn floor_plane(size: f32) -> MeshData {
    let h = size * 0.5;
    let mut mesh = MeshData::default();
    mesh.push_quad(Vec3::ZERO, Vec3::Y, Vec3::Z * h, Vec3::X * h);
    mesh
}
