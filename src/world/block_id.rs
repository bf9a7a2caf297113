use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

/// Opaque identifier for a block type. Stored by value in the world store;
/// resolved to atlas tiles through the block registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub u16);

impl BlockId {
    pub const GRASS: BlockId = BlockId(1);
    pub const SAND: BlockId = BlockId(2);
    pub const BRICK: BlockId = BlockId(3);
    pub const STONE: BlockId = BlockId(4);

    pub const fn new(id: u16) -> Self {
        BlockId(id)
    }
}

impl Display for BlockId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match BLOCKS.get(*self) {
            Some(def) => write!(f, "{}", def.name),
            None => write!(f, "Block({})", self.0),
        }
    }
}

impl From<BlockId> for u16 {
    fn from(id: BlockId) -> u16 {
        id.0
    }
}

impl From<u16> for BlockId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

/// Atlas tile assignment for the three face groups of a cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceTiles {
    pub top: (u32, u32),
    pub bottom: (u32, u32),
    pub side: (u32, u32),
}

impl FaceTiles {
    pub const fn uniform(x: u32, y: u32) -> Self {
        Self {
            top: (x, y),
            bottom: (x, y),
            side: (x, y),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockDefinition {
    pub id: BlockId,
    pub name: String,
    pub tiles: FaceTiles,
}

#[derive(Debug, Clone, Default)]
pub struct BlockRegistry {
    defs: HashMap<BlockId, BlockDefinition>,
    by_name: HashMap<String, BlockId>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin_blocks() -> Self {
        let mut registry = Self::new();
        registry.register(BlockDefinition {
            id: BlockId::GRASS,
            name: "grass".to_string(),
            tiles: FaceTiles {
                top: (1, 0),
                bottom: (0, 1),
                side: (0, 0),
            },
        });
        registry.register(BlockDefinition {
            id: BlockId::SAND,
            name: "sand".to_string(),
            tiles: FaceTiles::uniform(1, 1),
        });
        registry.register(BlockDefinition {
            id: BlockId::BRICK,
            name: "brick".to_string(),
            tiles: FaceTiles::uniform(2, 0),
        });
        registry.register(BlockDefinition {
            id: BlockId::STONE,
            name: "stone".to_string(),
            tiles: FaceTiles::uniform(2, 1),
        });
        registry
    }

    pub fn register(&mut self, def: BlockDefinition) {
        self.by_name.insert(def.name.clone(), def.id);
        self.defs.insert(def.id, def);
    }

    pub fn get(&self, id: BlockId) -> Option<&BlockDefinition> {
        self.defs.get(&id)
    }

    pub fn get_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, id: BlockId) -> bool {
        self.defs.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

/// Built-in block definitions.
pub static BLOCKS: Lazy<BlockRegistry> = Lazy::new(BlockRegistry::with_builtin_blocks);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_blocks_are_registered() {
        assert_eq!(BLOCKS.len(), 4);
        for id in [BlockId::GRASS, BlockId::SAND, BlockId::BRICK, BlockId::STONE] {
            assert!(BLOCKS.contains(id));
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(BLOCKS.get_by_name("grass"), Some(BlockId::GRASS));
        assert_eq!(BLOCKS.get_by_name("bedrock"), None);
    }

    #[test]
    fn display_uses_registered_name() {
        assert_eq!(BlockId::BRICK.to_string(), "brick");
        assert_eq!(BlockId::new(999).to_string(), "Block(999)");
    }

    #[test]
    fn grass_has_distinct_face_tiles() {
        let def = BLOCKS.get(BlockId::GRASS).expect("grass registered");
        assert_ne!(def.tiles.top, def.tiles.side);
        assert_ne!(def.tiles.top, def.tiles.bottom);
    }
}
