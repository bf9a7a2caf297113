use anyhow::{Context, Result};
use glam::Vec3;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use sandvox::{
    BlockCoord, BlockId, Config, SectorCoord, TerrainGenerator, TextureAtlas, VertexBatch, World,
};

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;
    info!("Initializing world...");

    let config = Config::load_or_default();
    let mut world = World::new(
        config.world.clone(),
        TextureAtlas::default(),
        VertexBatch::new(),
    );

    let generator = TerrainGenerator::new(config.worldgen.clone());
    generator
        .generate(&mut world)
        .context("terrain generation failed")?;

    // stream in the spawn neighborhood and drain before the first frame
    let spawn = SectorCoord::from_world(Vec3::ZERO, config.world.sector_size);
    world.change_sectors(None, Some(spawn))?;
    world.process_entire_queue()?;
    info!(
        "world ready: {} blocks, {} shown, {} meshes resident ({} bytes)",
        world.len(),
        world.shown_len(),
        world.sink().resident_meshes(),
        world.sink().byte_len()
    );

    // walk the viewer east a few sectors, draining inside the frame budget
    let mut current = spawn;
    for step in 1..=4 {
        let next = SectorCoord::new(current.x() + 1, 0, current.z());
        world.change_sectors(Some(current), Some(next))?;
        current = next;
        let mut frames = 0;
        while world.queued_len() > 0 {
            world.process_queue()?;
            frames += 1;
        }
        info!(
            "step {}: viewer in sector {}, {} shown after {} frames",
            step,
            current,
            world.shown_len(),
            frames
        );
    }

    // a couple of interactive-style edits back at the spawn
    world.change_sectors(Some(current), Some(spawn))?;
    world.process_entire_queue()?;

    let placed = BlockCoord::new(0, 0, 0);
    world.add_block(placed, BlockId::BRICK, true)?;
    info!("placed {} at {}", BlockId::BRICK, placed);

    if let Some(hit) = world.hit_test(Vec3::new(0.0, 4.0, 0.0), Vec3::new(0.0, -1.0, 0.0), None) {
        info!(
            "looking down from y=4 hits {} at {} (empty cell before it: {:?})",
            world.block_at(hit.block).unwrap_or(BlockId::STONE),
            hit.block,
            hit.previous
        );
        world.remove_block(hit.block, true)?;
        info!("removed the block again");
    }

    info!(
        "done: {} blocks, {} shown, {} submitted / {} released over the run",
        world.len(),
        world.shown_len(),
        world.sink().submitted_total(),
        world.sink().released_total()
    );
    Ok(())
}
