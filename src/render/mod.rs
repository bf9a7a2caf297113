pub mod atlas;
pub mod batch;
pub mod mesh;
pub mod sink;

pub use atlas::{FaceUvs, TextureAtlas};
pub use batch::VertexBatch;
pub use mesh::{CubeMesh, Vertex, HALF_EXTENT, VERTS_PER_CUBE};
pub use sink::{MeshHandle, RenderError, RenderSink};
