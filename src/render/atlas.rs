use crate::render::mesh::VERTS_PER_CUBE;
use crate::world::block_id::{BlockId, FaceTiles, BLOCKS};
use glam::{vec2, Vec2};

/// One UV pair per cube vertex, in the same face order as `CubeMesh`.
pub type FaceUvs = [Vec2; VERTS_PER_CUBE];

const FALLBACK_TILES: FaceTiles = FaceTiles::uniform(2, 1);

/// Maps block types to texture coordinates on a square tile atlas. Pure and
/// total: unregistered ids fall back to the stone tile.
#[derive(Debug, Clone, Copy)]
pub struct TextureAtlas {
    tiles_per_side: u32,
}

impl TextureAtlas {
    pub fn new(tiles_per_side: u32) -> Self {
        Self { tiles_per_side }
    }

    pub fn uv_coords(&self, block: BlockId) -> FaceUvs {
        let tiles = BLOCKS
            .get(block)
            .map(|def| def.tiles)
            .unwrap_or(FALLBACK_TILES);
        let top = self.tile_quad(tiles.top);
        let bottom = self.tile_quad(tiles.bottom);
        let side = self.tile_quad(tiles.side);

        let mut uvs = [Vec2::ZERO; VERTS_PER_CUBE];
        for (face, quad) in [top, bottom, side, side, side, side].iter().enumerate() {
            uvs[face * 4..face * 4 + 4].copy_from_slice(quad);
        }
        uvs
    }

    fn tile_quad(&self, tile: (u32, u32)) -> [Vec2; 4] {
        let m = 1.0 / self.tiles_per_side as f32;
        let dx = tile.0 as f32 * m;
        let dy = tile.1 as f32 * m;
        [
            vec2(dx, dy),
            vec2(dx + m, dy),
            vec2(dx + m, dy + m),
            vec2(dx, dy + m),
        ]
    }
}

impl Default for TextureAtlas {
    fn default() -> Self {
        Self { tiles_per_side: 4 }
    }
}
