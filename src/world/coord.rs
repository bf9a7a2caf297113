use glam::{IVec3, Vec3};
use std::fmt::{self, Display, Formatter};

/// Offsets of the six face-adjacent neighbors of a block.
pub const FACES: [IVec3; 6] = [
    IVec3::new(0, 1, 0),
    IVec3::new(0, -1, 0),
    IVec3::new(-1, 0, 0),
    IVec3::new(1, 0, 0),
    IVec3::new(0, 0, 1),
    IVec3::new(0, 0, -1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockCoord(pub IVec3);

impl BlockCoord {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self(IVec3::new(x, y, z))
    }

    /// Rounds an arbitrary-precision position to the block containing it.
    /// Rounding is half-away-from-zero on every axis.
    pub fn normalize(position: Vec3) -> Self {
        Self(position.round().as_ivec3())
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn y(&self) -> i32 {
        self.0.y
    }

    pub fn z(&self) -> i32 {
        self.0.z
    }

    /// Center of the block in world space.
    pub fn center(&self) -> Vec3 {
        self.0.as_vec3()
    }

    pub fn neighbors(&self) -> [BlockCoord; 6] {
        let mut out = [*self; 6];
        for (slot, face) in out.iter_mut().zip(FACES) {
            *slot = BlockCoord(self.0 + face);
        }
        out
    }
}

impl Display for BlockCoord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

impl From<IVec3> for BlockCoord {
    fn from(vec: IVec3) -> Self {
        Self(vec)
    }
}

impl From<BlockCoord> for IVec3 {
    fn from(coord: BlockCoord) -> Self {
        coord.0
    }
}

/// A sector is an infinite vertical column of blocks with a fixed square
/// horizontal footprint. The y component of a sector coordinate is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectorCoord(pub IVec3);

impl SectorCoord {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self(IVec3::new(x, y, z))
    }

    /// Sector owning the given block coordinate. Uses floor division so
    /// negative coordinates bucket correctly (-1 lands in sector -1, not 0).
    pub fn of(block: BlockCoord, sector_size: i32) -> Self {
        Self(IVec3::new(
            block.x().div_euclid(sector_size),
            0,
            block.z().div_euclid(sector_size),
        ))
    }

    pub fn from_world(position: Vec3, sector_size: i32) -> Self {
        Self::of(BlockCoord::normalize(position), sector_size)
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn z(&self) -> i32 {
        self.0.z
    }

    /// The 2D disk-shaped neighborhood of sectors around this one that a
    /// viewer standing here should have streamed in: every sector within
    /// `pad` steps on each axis whose Euclidean distance is at most `pad + 1`.
    pub fn disk(&self, pad: i32) -> Vec<SectorCoord> {
        let mut out = Vec::new();
        for dx in -pad..=pad {
            for dz in -pad..=pad {
                if dx * dx + dz * dz > (pad + 1) * (pad + 1) {
                    continue;
                }
                out.push(SectorCoord::new(self.0.x + dx, 0, self.0.z + dz));
            }
        }
        out
    }
}

impl Display for SectorCoord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.0.x, self.0.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_rounds_to_nearest() {
        assert_eq!(
            BlockCoord::normalize(Vec3::new(0.4, 0.6, -0.4)),
            BlockCoord::new(0, 1, 0)
        );
        assert_eq!(
            BlockCoord::normalize(Vec3::new(12.1, -3.9, 7.49)),
            BlockCoord::new(12, -4, 7)
        );
    }

    #[test]
    fn normalize_rounds_half_away_from_zero() {
        assert_eq!(
            BlockCoord::normalize(Vec3::new(0.5, -0.5, 1.5)),
            BlockCoord::new(1, -1, 2)
        );
        assert_eq!(
            BlockCoord::normalize(Vec3::new(-1.5, 2.5, -2.5)),
            BlockCoord::new(-2, 3, -3)
        );
    }

    #[test]
    fn sectorize_uses_floor_division() {
        assert_eq!(
            SectorCoord::of(BlockCoord::new(15, 0, 0), 16),
            SectorCoord::new(0, 0, 0)
        );
        assert_eq!(
            SectorCoord::of(BlockCoord::new(16, 0, 0), 16),
            SectorCoord::new(1, 0, 0)
        );
        assert_eq!(
            SectorCoord::of(BlockCoord::new(-1, 0, 0), 16),
            SectorCoord::new(-1, 0, 0)
        );
    }

    #[test]
    fn sectorize_flattens_y() {
        assert_eq!(
            SectorCoord::of(BlockCoord::new(5, 37, -17), 16),
            SectorCoord::new(0, 0, -2)
        );
    }

    #[test]
    fn disk_shape_for_default_pad() {
        let disk = SectorCoord::new(0, 0, 0).disk(4);
        assert_eq!(disk.len(), 77);
        assert!(disk.contains(&SectorCoord::new(0, 0, 0)));
        assert!(disk.contains(&SectorCoord::new(4, 0, 3)));
        assert!(!disk.contains(&SectorCoord::new(4, 0, 4)));
    }

    #[test]
    fn disk_is_centered() {
        let disk = SectorCoord::new(7, 0, -2).disk(1);
        assert!(disk.contains(&SectorCoord::new(7, 0, -2)));
        assert!(disk.contains(&SectorCoord::new(8, 0, -1)));
        assert!(!disk.contains(&SectorCoord::new(9, 0, -2)));
    }

    #[test]
    fn neighbors_are_face_adjacent() {
        let center = BlockCoord::new(1, 2, 3);
        let neighbors = center.neighbors();
        assert_eq!(neighbors.len(), 6);
        for n in neighbors {
            let d = n.0 - center.0;
            assert_eq!(d.x.abs() + d.y.abs() + d.z.abs(), 1);
        }
    }
}
