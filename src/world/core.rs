use crate::config::core::WorldConfig;
use crate::render::atlas::TextureAtlas;
use crate::render::mesh::{CubeMesh, HALF_EXTENT};
use crate::render::sink::{MeshHandle, RenderSink};
use crate::utils::ray::Ray;
use crate::world::block_id::BlockId;
use crate::world::coord::{BlockCoord, SectorCoord, FACES};
use crate::world::error::WorldError;
use glam::Vec3;
use log::debug;
use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Instant;

/// Line-of-sight samples taken per block of ray travel.
const RAY_SAMPLES_PER_BLOCK: i32 = 8;

/// A show or hide request bound to a coordinate, waiting in the deferred
/// queue. `Show` carries the block type captured at enqueue time; a later
/// remove-and-readd at the same coordinate must not change what gets drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredOp {
    Show { coord: BlockCoord, block: BlockId },
    Hide { coord: BlockCoord },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RayHit {
    /// First occupied block along the line of sight.
    pub block: BlockCoord,
    /// The empty coordinate stepped through just before the hit; where a
    /// new block would be placed.
    pub previous: Option<BlockCoord>,
}

/// The world-management core: block store, sector index, shown set, render
/// handle table and the deferred geometry queue. Single-threaded; all
/// mutation happens on the frame loop.
pub struct World<S: RenderSink> {
    config: WorldConfig,
    atlas: TextureAtlas,
    sink: S,
    blocks: HashMap<BlockCoord, BlockId>,
    sectors: HashMap<SectorCoord, Vec<BlockCoord>>,
    shown: HashMap<BlockCoord, BlockId>,
    handles: HashMap<BlockCoord, MeshHandle>,
    queue: VecDeque<DeferredOp>,
}

impl<S: RenderSink> World<S> {
    pub fn new(config: WorldConfig, atlas: TextureAtlas, sink: S) -> Self {
        Self {
            config,
            atlas,
            sink,
            blocks: HashMap::new(),
            sectors: HashMap::new(),
            shown: HashMap::new(),
            handles: HashMap::new(),
            queue: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn shown_len(&self) -> usize {
        self.shown.len()
    }

    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    pub fn queued(&self) -> impl Iterator<Item = &DeferredOp> {
        self.queue.iter()
    }

    pub fn block_at(&self, coord: BlockCoord) -> Option<BlockId> {
        self.blocks.get(&coord).copied()
    }

    pub fn contains(&self, coord: BlockCoord) -> bool {
        self.blocks.contains_key(&coord)
    }

    pub fn is_shown(&self, coord: BlockCoord) -> bool {
        self.shown.contains_key(&coord)
    }

    pub fn render_handle(&self, coord: BlockCoord) -> Option<MeshHandle> {
        self.handles.get(&coord).copied()
    }

    pub fn sector_of(&self, coord: BlockCoord) -> SectorCoord {
        SectorCoord::of(coord, self.config.sector_size)
    }

    pub fn sector_blocks(&self, sector: SectorCoord) -> &[BlockCoord] {
        self.sectors.get(&sector).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter_blocks(&self) -> impl Iterator<Item = (BlockCoord, BlockId)> + '_ {
        self.blocks.iter().map(|(c, b)| (*c, *b))
    }

    pub fn iter_sectors(&self) -> impl Iterator<Item = (SectorCoord, &[BlockCoord])> {
        self.sectors.iter().map(|(s, v)| (*s, v.as_slice()))
    }

    /// True iff at least one of the six face neighbors is empty space.
    /// Membership in the block store is the only definition of emptiness;
    /// coordinates outside generated terrain count as empty.
    pub fn exposed(&self, coord: BlockCoord) -> bool {
        FACES
            .iter()
            .any(|face| !self.blocks.contains_key(&BlockCoord(coord.0 + *face)))
    }

    /// Places a block. An occupied coordinate is fully removed first so no
    /// stale render handle survives a type change. With `immediate` the
    /// block is shown when exposed and all six neighbors are rechecked;
    /// otherwise visibility is left to the queue or sector streaming.
    pub fn add_block(
        &mut self,
        coord: BlockCoord,
        block: BlockId,
        immediate: bool,
    ) -> Result<(), WorldError> {
        if self.blocks.contains_key(&coord) {
            self.remove_block(coord, immediate)?;
        }
        self.blocks.insert(coord, block);
        let sector = self.sector_of(coord);
        self.sectors.entry(sector).or_default().push(coord);

        if immediate {
            if self.exposed(coord) {
                self.show_block(coord, true)?;
            }
            self.check_neighbors(coord)?;
        }
        Ok(())
    }

    /// Removes the block at `coord`; it is an error if none is there.
    pub fn remove_block(&mut self, coord: BlockCoord, immediate: bool) -> Result<(), WorldError> {
        self.blocks
            .remove(&coord)
            .ok_or(WorldError::BlockNotFound(coord))?;
        let sector = self.sector_of(coord);
        if let Some(list) = self.sectors.get_mut(&sector) {
            list.retain(|c| *c != coord);
            if list.is_empty() {
                self.sectors.remove(&sector);
            }
        }

        if immediate {
            if self.shown.contains_key(&coord) {
                self.hide_block(coord, true)?;
            }
            self.check_neighbors(coord)?;
        }
        Ok(())
    }

    /// Brings the six neighbors of an edited coordinate back in line with
    /// their exposure: shows newly exposed blocks, hides newly occluded
    /// ones. Always synchronous, whatever the triggering edit's flag was.
    pub fn check_neighbors(&mut self, coord: BlockCoord) -> Result<(), WorldError> {
        for neighbor in coord.neighbors() {
            if !self.blocks.contains_key(&neighbor) {
                continue;
            }
            if self.exposed(neighbor) {
                if !self.shown.contains_key(&neighbor) {
                    self.show_block(neighbor, true)?;
                }
            } else if self.shown.contains_key(&neighbor) {
                self.hide_block(neighbor, true)?;
            }
        }
        Ok(())
    }

    /// Marks a placed block as shown. With `immediate` the geometry goes to
    /// the sink now; otherwise a deferred show is queued carrying the block
    /// type as of this call.
    pub fn show_block(&mut self, coord: BlockCoord, immediate: bool) -> Result<(), WorldError> {
        let block = *self
            .blocks
            .get(&coord)
            .ok_or(WorldError::BlockNotPlaced(coord))?;
        self.shown.insert(coord, block);
        if immediate {
            self.submit_geometry(coord, block)?;
        } else {
            self.queue.push_back(DeferredOp::Show { coord, block });
        }
        Ok(())
    }

    /// Removes a block from the shown set; it is an error if it was not
    /// shown. With `immediate` the render handle is released now; otherwise
    /// a deferred hide is queued.
    pub fn hide_block(&mut self, coord: BlockCoord, immediate: bool) -> Result<(), WorldError> {
        self.shown
            .remove(&coord)
            .ok_or(WorldError::BlockNotShown(coord))?;
        if immediate {
            self.release_geometry(coord)?;
        } else {
            self.queue.push_back(DeferredOp::Hide { coord });
        }
        Ok(())
    }

    fn submit_geometry(&mut self, coord: BlockCoord, block: BlockId) -> Result<(), WorldError> {
        let mesh = CubeMesh::at(coord, HALF_EXTENT);
        let uvs = self.atlas.uv_coords(block);
        let handle = self.sink.submit(coord, &mesh, &uvs)?;
        self.handles.insert(coord, handle);
        Ok(())
    }

    fn release_geometry(&mut self, coord: BlockCoord) -> Result<(), WorldError> {
        let handle = self
            .handles
            .remove(&coord)
            .ok_or(WorldError::HandleMissing(coord))?;
        self.sink.release(handle)?;
        Ok(())
    }

    fn run_deferred(&mut self, op: DeferredOp) -> Result<(), WorldError> {
        match op {
            DeferredOp::Show { coord, block } => self.submit_geometry(coord, block),
            DeferredOp::Hide { coord } => self.release_geometry(coord),
        }
    }

    /// Drains deferred operations in FIFO order until the queue is empty or
    /// the per-tick wall-clock budget elapses. Intended to be called once
    /// per frame; never sleeps, and a non-empty queue always makes progress.
    pub fn process_queue(&mut self) -> Result<(), WorldError> {
        let budget = self.config.tick_budget();
        let start = Instant::now();
        loop {
            if start.elapsed() >= budget {
                break;
            }
            match self.queue.pop_front() {
                Some(op) => self.run_deferred(op)?,
                None => break,
            }
        }
        Ok(())
    }

    /// Drains the queue unconditionally. Used at load time so the first
    /// frame starts from a fully consistent shown set.
    pub fn process_entire_queue(&mut self) -> Result<(), WorldError> {
        let drained = self.queue.len();
        while let Some(op) = self.queue.pop_front() {
            self.run_deferred(op)?;
        }
        if drained > 0 {
            debug!("drained {} deferred geometry ops", drained);
        }
        Ok(())
    }

    /// Queues shows for every exposed, not-yet-shown block of a sector.
    pub fn show_sector(&mut self, sector: SectorCoord) -> Result<(), WorldError> {
        let coords = self.sectors.get(&sector).cloned().unwrap_or_default();
        for coord in coords {
            if !self.shown.contains_key(&coord) && self.exposed(coord) {
                self.show_block(coord, false)?;
            }
        }
        Ok(())
    }

    /// Queues hides for every shown block of a sector.
    pub fn hide_sector(&mut self, sector: SectorCoord) -> Result<(), WorldError> {
        let coords = self.sectors.get(&sector).cloned().unwrap_or_default();
        for coord in coords {
            if self.shown.contains_key(&coord) {
                self.hide_block(coord, false)?;
            }
        }
        Ok(())
    }

    /// Streams geometry after the viewer crosses a sector boundary: sectors
    /// entering the visible disk are shown, sectors leaving it are hidden.
    /// Either side may be absent (startup, teardown).
    pub fn change_sectors(
        &mut self,
        before: Option<SectorCoord>,
        after: Option<SectorCoord>,
    ) -> Result<(), WorldError> {
        let pad = self.config.sector_pad;
        let before_set: HashSet<SectorCoord> = before
            .map(|s| s.disk(pad).into_iter().collect())
            .unwrap_or_default();
        let after_set: HashSet<SectorCoord> = after
            .map(|s| s.disk(pad).into_iter().collect())
            .unwrap_or_default();

        let show: Vec<SectorCoord> = after_set.difference(&before_set).copied().collect();
        let hide: Vec<SectorCoord> = before_set.difference(&after_set).copied().collect();
        debug!(
            "sector change: {} entering, {} leaving",
            show.len(),
            hide.len()
        );
        for sector in show {
            self.show_sector(sector)?;
        }
        for sector in hide {
            self.hide_sector(sector)?;
        }
        Ok(())
    }

    /// Marches the line of sight in fixed sub-block steps and reports the
    /// first occupied block, together with the empty coordinate crossed
    /// just before it. `max_distance` defaults to the configured limit.
    pub fn hit_test(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: Option<i32>,
    ) -> Option<RayHit> {
        let max_distance = max_distance.unwrap_or(self.config.max_distance);
        let ray = Ray::new(origin, direction);
        let mut previous: Option<BlockCoord> = None;
        for step in 0..max_distance * RAY_SAMPLES_PER_BLOCK {
            let key = BlockCoord::normalize(ray.at(step as f32 / RAY_SAMPLES_PER_BLOCK as f32));
            if previous != Some(key) && self.blocks.contains_key(&key) {
                return Some(RayHit {
                    block: key,
                    previous,
                });
            }
            previous = Some(key);
        }
        None
    }
}
