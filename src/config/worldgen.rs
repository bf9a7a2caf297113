use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldGenConfig {
    pub world_seed: u64,
    /// Half the width of the generated square of terrain, in blocks.
    pub ground_radius: i32,
    /// Y level the viewer stands on; ground layers go in just below it.
    pub ground_level: i32,
    pub hill_count: u32,
    /// Hills keep this many blocks away from the terrain edge.
    pub hill_margin: i32,
    pub hill_height_min: i32,
    pub hill_height_max: i32,
    pub hill_size_min: i32,
    pub hill_size_max: i32,
    /// Radius around the origin kept free of hills.
    pub spawn_clearing: i32,
    /// Amplitude of the noise applied to the ground height; 0 keeps it flat.
    pub height_variation: f64,
    pub noise_scale: f64,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            world_seed: 1,
            ground_radius: 80,
            ground_level: 0,
            hill_count: 120,
            hill_margin: 10,
            hill_height_min: 1,
            hill_height_max: 6,
            hill_size_min: 4,
            hill_size_max: 8,
            spawn_clearing: 5,
            height_variation: 0.0,
            noise_scale: 0.03,
        }
    }
}
