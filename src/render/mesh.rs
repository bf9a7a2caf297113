use crate::world::coord::BlockCoord;
use bytemuck::{Pod, Zeroable};
use glam::{vec3, Vec3};

/// Half the edge length of a unit block.
pub const HALF_EXTENT: f32 = 0.5;

/// Four vertices per face, six faces.
pub const VERTS_PER_CUBE: usize = 24;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Quad-ordered cube geometry centered on a block coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeMesh {
    vertices: [Vec3; VERTS_PER_CUBE],
}

impl CubeMesh {
    pub fn at(coord: BlockCoord, n: f32) -> Self {
        let c = coord.center();
        let (x, y, z) = (c.x, c.y, c.z);
        let vertices = [
            // top
            vec3(x - n, y + n, z - n),
            vec3(x - n, y + n, z + n),
            vec3(x + n, y + n, z + n),
            vec3(x + n, y + n, z - n),
            // bottom
            vec3(x - n, y - n, z - n),
            vec3(x + n, y - n, z - n),
            vec3(x + n, y - n, z + n),
            vec3(x - n, y - n, z + n),
            // left
            vec3(x - n, y - n, z - n),
            vec3(x - n, y - n, z + n),
            vec3(x - n, y + n, z + n),
            vec3(x - n, y + n, z - n),
            // right
            vec3(x + n, y - n, z + n),
            vec3(x + n, y - n, z - n),
            vec3(x + n, y + n, z - n),
            vec3(x + n, y + n, z + n),
            // front
            vec3(x - n, y - n, z + n),
            vec3(x + n, y - n, z + n),
            vec3(x + n, y + n, z + n),
            vec3(x - n, y + n, z + n),
            // back
            vec3(x + n, y - n, z - n),
            vec3(x - n, y - n, z - n),
            vec3(x - n, y + n, z - n),
            vec3(x + n, y + n, z - n),
        ];
        Self { vertices }
    }

    pub fn positions(&self) -> &[Vec3; VERTS_PER_CUBE] {
        &self.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_quad_vertex_count() {
        let mesh = CubeMesh::at(BlockCoord::new(0, 0, 0), HALF_EXTENT);
        assert_eq!(mesh.positions().len(), VERTS_PER_CUBE);
    }

    #[test]
    fn cube_is_centered_on_block() {
        let coord = BlockCoord::new(2, -3, 4);
        let mesh = CubeMesh::at(coord, HALF_EXTENT);
        let center = coord.center();
        for v in mesh.positions() {
            let d = *v - center;
            assert_eq!(d.x.abs(), HALF_EXTENT);
            assert_eq!(d.y.abs(), HALF_EXTENT);
            assert_eq!(d.z.abs(), HALF_EXTENT);
        }
    }

    #[test]
    fn each_corner_appears_three_times() {
        let mesh = CubeMesh::at(BlockCoord::new(0, 0, 0), HALF_EXTENT);
        for corner in mesh.positions() {
            let count = mesh.positions().iter().filter(|v| *v == corner).count();
            assert_eq!(count, 3);
        }
    }

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 20);
        let verts = [Vertex {
            position: [1.0, 2.0, 3.0],
            uv: [0.25, 0.75],
        }];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 20);
    }
}
