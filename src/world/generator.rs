use crate::config::worldgen::WorldGenConfig;
use crate::render::sink::RenderSink;
use crate::world::block_id::BlockId;
use crate::world::coord::BlockCoord;
use crate::world::core::World;
use crate::world::error::WorldError;
use log::info;
use noise::{NoiseFn, Perlin};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const HILL_PALETTE: [BlockId; 3] = [BlockId::GRASS, BlockId::SAND, BlockId::BRICK];

/// Populates an empty world: a layered ground slab, stone walls around the
/// perimeter and a scattering of rounded hills. All blocks are added
/// non-immediate; the caller streams sectors in and drains the queue before
/// the first frame.
pub struct TerrainGenerator {
    config: WorldGenConfig,
    height_noise: Perlin,
}

impl TerrainGenerator {
    pub fn new(config: WorldGenConfig) -> Self {
        Self {
            height_noise: Perlin::new(config.world_seed as u32),
            config,
        }
    }

    pub fn generate<S: RenderSink>(&self, world: &mut World<S>) -> Result<(), WorldError> {
        self.lay_ground(world)?;
        self.raise_hills(world)?;
        info!(
            "generated terrain: {} blocks over a {}-block square, seed {}",
            world.len(),
            self.config.ground_radius * 2 + 1,
            self.config.world_seed
        );
        Ok(())
    }

    fn lay_ground<S: RenderSink>(&self, world: &mut World<S>) -> Result<(), WorldError> {
        let n = self.config.ground_radius;
        let y = self.config.ground_level;
        for x in -n..=n {
            for z in -n..=n {
                let h = self.ground_height(x, z);
                world.add_block(BlockCoord::new(x, y + h - 2, z), BlockId::GRASS, false)?;
                world.add_block(BlockCoord::new(x, y + h - 3, z), BlockId::STONE, false)?;
                if x == -n || x == n || z == -n || z == n {
                    // perimeter wall
                    for dy in -2..=2 {
                        world.add_block(BlockCoord::new(x, y + dy, z), BlockId::STONE, false)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn raise_hills<S: RenderSink>(&self, world: &mut World<S>) -> Result<(), WorldError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.world_seed);
        let reach = self.config.ground_radius - self.config.hill_margin;
        let base = self.config.ground_level - 1;
        let clearing = self.config.spawn_clearing;

        for _ in 0..self.config.hill_count {
            let a = rng.gen_range(-reach..=reach);
            let b = rng.gen_range(-reach..=reach);
            let height = rng.gen_range(self.config.hill_height_min..=self.config.hill_height_max);
            let mut size = rng.gen_range(self.config.hill_size_min..=self.config.hill_size_max);
            let block = HILL_PALETTE[rng.gen_range(0..HILL_PALETTE.len())];

            for y in base..base + height {
                for x in (a - size)..=(a + size) {
                    for z in (b - size)..=(b + size) {
                        if (x - a).pow(2) + (z - b).pow(2) > (size + 1).pow(2) {
                            continue;
                        }
                        if x.pow(2) + z.pow(2) < clearing.pow(2) {
                            continue;
                        }
                        world.add_block(BlockCoord::new(x, y, z), block, false)?;
                    }
                }
                // shrink each layer so the hill rounds off
                size -= 1;
            }
        }
        Ok(())
    }

    fn ground_height(&self, x: i32, z: i32) -> i32 {
        if self.config.height_variation == 0.0 {
            return 0;
        }
        let v = self.height_noise.get([
            x as f64 * self.config.noise_scale,
            z as f64 * self.config.noise_scale,
        ]);
        (v * self.config.height_variation).round() as i32
    }
}
