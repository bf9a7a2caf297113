pub mod block_id;
pub mod coord;
pub mod core;
pub mod error;
pub mod generator;

pub use block_id::{BlockDefinition, BlockId, BlockRegistry, FaceTiles, BLOCKS};
pub use coord::{BlockCoord, SectorCoord, FACES};
pub use error::WorldError;
pub use generator::TerrainGenerator;
pub use self::core::{DeferredOp, RayHit, World};
