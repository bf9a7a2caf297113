use crate::render::sink::RenderError;
use crate::world::coord::BlockCoord;
use thiserror::Error;

/// Precondition violations and propagated renderer failures. Precondition
/// variants indicate caller bugs and are never silently accepted.
#[derive(Error, Debug)]
pub enum WorldError {
    #[error("no block at {0}")]
    BlockNotFound(BlockCoord),
    #[error("block at {0} is not shown")]
    BlockNotShown(BlockCoord),
    #[error("block at {0} was never placed")]
    BlockNotPlaced(BlockCoord),
    #[error("no render handle recorded for block at {0}")]
    HandleMissing(BlockCoord),
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}
