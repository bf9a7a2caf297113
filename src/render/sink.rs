use crate::render::atlas::FaceUvs;
use crate::render::mesh::CubeMesh;
use crate::world::coord::BlockCoord;
use thiserror::Error;

/// Token returned by a renderer for accepted geometry. Required to release
/// that geometry again; the core never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(u64);

impl MeshHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> u64 {
        self.0
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("geometry submission rejected: {0}")]
    SubmitFailed(String),
    #[error("unknown mesh handle {0}")]
    UnknownHandle(u64),
}

/// The renderer as the world sees it: a sink that accepts cube geometry for
/// a block and hands back an opaque handle, and releases geometry by handle.
/// Calls are synchronous; a failed call is not retried and the world does
/// not roll back its own bookkeeping for it.
pub trait RenderSink {
    fn submit(
        &mut self,
        coord: BlockCoord,
        mesh: &CubeMesh,
        uvs: &FaceUvs,
    ) -> Result<MeshHandle, RenderError>;

    fn release(&mut self, handle: MeshHandle) -> Result<(), RenderError>;
}
