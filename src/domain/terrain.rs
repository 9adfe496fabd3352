use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Movement cost reported for ids that name no terrain.
pub const IMPASSABLE: i32 = -1;

/// Upper bound (exclusive) of the roll used to pick a terrain during generation.
pub const TERRAIN_ROLL_RANGE: u32 = 20;

/// Terrain of a single map tile.
/// Discriminants are the stable numeric ids used by textures and game rules.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Terrain {
    Road = 1,
    /// Rendered as grass or forest depending on the texture pack
    Grass = 2,
    /// Rendered as a tree or a rock depending on the texture pack
    Tree = 3,
    NeutralTower = 4,
    RedTower = 5,
    BlueTower = 6,
}

impl Terrain {
    pub const ALL: [Terrain; 6] = [
        Terrain::Road,
        Terrain::Grass,
        Terrain::Tree,
        Terrain::NeutralTower,
        Terrain::RedTower,
        Terrain::BlueTower,
    ];

    /// Numeric terrain id
    pub const fn id(self) -> i32 {
        self as i32
    }

    /// Look up a terrain by id, `None` for anything outside 1..=6
    pub const fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Terrain::Road),
            2 => Some(Terrain::Grass),
            3 => Some(Terrain::Tree),
            4 => Some(Terrain::NeutralTower),
            5 => Some(Terrain::RedTower),
            6 => Some(Terrain::BlueTower),
            _ => None,
        }
    }

    /// Map a roll in `0..TERRAIN_ROLL_RANGE` to a terrain:
    /// 0-3 road (20%), 4-15 grass (60%), 16-18 tree (15%), 19 neutral tower (5%).
    /// Coloured towers are never generated.
    pub const fn from_roll(roll: u32) -> Self {
        match roll {
            0..=3 => Terrain::Road,
            4..=15 => Terrain::Grass,
            16..=18 => Terrain::Tree,
            _ => Terrain::NeutralTower,
        }
    }

    /// Cost of entering a tile of this terrain
    pub const fn movement_cost(self) -> i32 {
        match self {
            Terrain::Road => 4,
            Terrain::Tree => 2,
            Terrain::Grass | Terrain::NeutralTower | Terrain::RedTower | Terrain::BlueTower => 1,
        }
    }

    /// Towers are the capturable points of the map
    pub const fn is_capture_point(self) -> bool {
        matches!(self, Terrain::NeutralTower | Terrain::RedTower | Terrain::BlueTower)
    }
}

/// Movement cost for a raw terrain id, `IMPASSABLE` when the id is unknown
pub fn movement_cost(id: i32) -> i32 {
    Terrain::from_id(id).map_or(IMPASSABLE, Terrain::movement_cost)
}

/// Whether a raw terrain id is a tower; unknown ids are never capture points
pub fn is_capture_point(id: i32) -> bool {
    Terrain::from_id(id).is_some_and(Terrain::is_capture_point)
}

/// Art set used to draw the map.
/// Both packs share the tower art and differ on road, grass and tree.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum TexturePack {
    /// Pack 1: road, grass, tree
    #[default]
    Plains,
    /// Pack 2: road, forest, rock
    Wilds,
}

impl TexturePack {
    pub const ALL: [TexturePack; 2] = [TexturePack::Plains, TexturePack::Wilds];

    pub const fn name(self) -> &'static str {
        match self {
            TexturePack::Plains => "plains",
            TexturePack::Wilds => "wilds",
        }
    }

    /// The other pack
    pub const fn toggled(self) -> Self {
        match self {
            TexturePack::Plains => TexturePack::Wilds,
            TexturePack::Wilds => TexturePack::Plains,
        }
    }
}

impl fmt::Display for TexturePack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TexturePack {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plains" | "1" => Ok(TexturePack::Plains),
            "wilds" | "2" => Ok(TexturePack::Wilds),
            other => Err(format!("unknown texture pack '{other}' (expected plains or wilds)")),
        }
    }
}

impl TryFrom<String> for TexturePack {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Asset file name for a terrain in a pack
pub const fn texture_file(pack: TexturePack, terrain: Terrain) -> &'static str {
    match (pack, terrain) {
        (_, Terrain::Road) => "road.png",
        (TexturePack::Plains, Terrain::Grass) => "grass.png",
        (TexturePack::Plains, Terrain::Tree) => "tree.png",
        (TexturePack::Wilds, Terrain::Grass) => "forest.png",
        (TexturePack::Wilds, Terrain::Tree) => "rock.png",
        (_, Terrain::NeutralTower) => "tower_neutral.png",
        (_, Terrain::RedTower) => "tower_red.png",
        (_, Terrain::BlueTower) => "tower_blue.png",
    }
}
