pub mod config;
pub mod render;
pub mod utils;
pub mod world;

// Re-export commonly used types
pub use config::{Config, WorldConfig, WorldGenConfig};
pub use render::{
    CubeMesh, FaceUvs, MeshHandle, RenderError, RenderSink, TextureAtlas, Vertex, VertexBatch,
};
pub use utils::ray::Ray;
pub use world::{
    BlockCoord, BlockId, BlockRegistry, DeferredOp, RayHit, SectorCoord, TerrainGenerator, World,
    WorldError,
};
