use crate::render::atlas::FaceUvs;
use crate::render::mesh::{CubeMesh, Vertex};
use crate::render::sink::{MeshHandle, RenderError, RenderSink};
use crate::world::coord::BlockCoord;
use std::collections::HashMap;

/// CPU-side render sink: keeps every accepted mesh as an interleaved vertex
/// list keyed by handle. Stands in for a GPU batch in the demo binary and
/// the test suite.
#[derive(Debug, Default)]
pub struct VertexBatch {
    meshes: HashMap<MeshHandle, BatchEntry>,
    next_handle: u64,
    submitted: u64,
    released: u64,
}

#[derive(Debug)]
struct BatchEntry {
    coord: BlockCoord,
    vertices: Vec<Vertex>,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of meshes currently held.
    pub fn resident_meshes(&self) -> usize {
        self.meshes.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.meshes.values().map(|e| e.vertices.len()).sum()
    }

    /// Total size of resident vertex data as it would be uploaded.
    pub fn byte_len(&self) -> usize {
        self.meshes
            .values()
            .map(|e| bytemuck::cast_slice::<Vertex, u8>(&e.vertices).len())
            .sum()
    }

    pub fn submitted_total(&self) -> u64 {
        self.submitted
    }

    pub fn released_total(&self) -> u64 {
        self.released
    }

    pub fn vertices(&self, handle: MeshHandle) -> Option<&[Vertex]> {
        self.meshes.get(&handle).map(|e| e.vertices.as_slice())
    }

    pub fn coord_of(&self, handle: MeshHandle) -> Option<BlockCoord> {
        self.meshes.get(&handle).map(|e| e.coord)
    }
}

impl RenderSink for VertexBatch {
    fn submit(
        &mut self,
        coord: BlockCoord,
        mesh: &CubeMesh,
        uvs: &FaceUvs,
    ) -> Result<MeshHandle, RenderError> {
        let vertices = mesh
            .positions()
            .iter()
            .zip(uvs.iter())
            .map(|(p, uv)| Vertex {
                position: (*p).into(),
                uv: (*uv).into(),
            })
            .collect();

        let handle = MeshHandle::new(self.next_handle);
        self.next_handle += 1;
        self.meshes.insert(handle, BatchEntry { coord, vertices });
        self.submitted += 1;
        Ok(handle)
    }

    fn release(&mut self, handle: MeshHandle) -> Result<(), RenderError> {
        self.meshes
            .remove(&handle)
            .ok_or(RenderError::UnknownHandle(handle.raw()))?;
        self.released += 1;
        Ok(())
    }
}
