use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Horizontal edge length of a sector, in blocks.
    pub sector_size: i32,
    /// Frame rate the deferred queue budget is derived from.
    pub ticks_per_sec: u32,
    /// Default hit-test search limit, in blocks.
    pub max_distance: i32,
    /// Radius (in sectors, minus one) of the streamed visibility disk.
    pub sector_pad: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            sector_size: 16,
            ticks_per_sec: 60,
            max_distance: 8,
            sector_pad: 4,
        }
    }
}

impl WorldConfig {
    /// Wall-clock budget for one queue drain pass.
    pub fn tick_budget(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.ticks_per_sec.max(1) as f64)
    }
}
