use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{DisplayError, DisplayResult};

/// Integer block coordinate in the host world.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct BlockPos {
    /// East-west axis.
    pub x: i32,
    /// Vertical axis.
    pub y: i32,
    /// North-south axis.
    pub z: i32,
}

impl BlockPos {
    /// Construct a block position.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Neighbouring position one block away in `dir`.
    pub fn offset(self, dir: Direction) -> Self {
        let [dx, dy, dz] = dir.unit();
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

/// One of the six axis-aligned unit directions.
///
/// Also used for a block's facing side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// +y
    Up,
    /// -y
    Down,
    /// -z
    North,
    /// +z
    South,
    /// +x
    East,
    /// -x
    West,
}

impl Direction {
    /// All directions in declaration order.
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit vector as `[x, y, z]`.
    pub fn unit(self) -> [i32; 3] {
        match self {
            Direction::Up => [0, 1, 0],
            Direction::Down => [0, -1, 0],
            Direction::North => [0, 0, -1],
            Direction::South => [0, 0, 1],
            Direction::East => [1, 0, 0],
            Direction::West => [-1, 0, 0],
        }
    }

    /// Lowercase name accepted by [`Direction::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = DisplayError;

    fn from_str(s: &str) -> DisplayResult<Self> {
        let s = s.trim();
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                DisplayError::validation(format!(
                    "unknown direction \"{s}\" (expected up, down, north, south, east or west)"
                ))
            })
    }
}

/// Size of a block region in blocks, persisted as `[x, y, z]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "[u32; 3]", into = "[u32; 3]")]
pub struct Size3 {
    /// Extent along x.
    pub x: u32,
    /// Extent along y.
    pub y: u32,
    /// Extent along z.
    pub z: u32,
}

impl Size3 {
    /// Construct a size.
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Smallest of the three extents.
    pub fn min_axis(self) -> u32 {
        self.x.min(self.y).min(self.z)
    }

    /// Largest of the three extents.
    pub fn max_axis(self) -> u32 {
        self.x.max(self.y).max(self.z)
    }

    /// Whether the region is one block thick along x or z, i.e. an upright wall.
    /// Anything else planar lies flat (floor or ceiling) with y as the depth axis.
    fn is_upright(self) -> bool {
        self.x == 1 || self.z == 1
    }

    /// Horizontal span in blocks of a planar region.
    ///
    /// Walls span whichever of x/z is not the depth axis; flat regions span x.
    pub fn width_span(self) -> u32 {
        if self.is_upright() {
            self.x.max(self.z)
        } else {
            self.x
        }
    }

    /// Vertical span in blocks: y for walls, z for flat regions.
    pub fn height_span(self) -> u32 {
        if self.is_upright() { self.y } else { self.z }
    }
}

impl From<[u32; 3]> for Size3 {
    fn from(v: [u32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Size3> for [u32; 3] {
    fn from(s: Size3) -> Self {
        [s.x, s.y, s.z]
    }
}

/// Inclusive axis-aligned block region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Region {
    /// Minimum corner; the region's main block.
    pub min: BlockPos,
    /// Maximum corner (inclusive).
    pub max: BlockPos,
}

impl Region {
    /// Region spanning two corners given in any order.
    pub fn spanning(a: BlockPos, b: BlockPos) -> Self {
        Self {
            min: BlockPos::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: BlockPos::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Extent in blocks along each axis.
    pub fn size(&self) -> Size3 {
        let extent = |lo: i32, hi: i32| (i64::from(hi) - i64::from(lo) + 1) as u32;
        Size3::new(
            extent(self.min.x, self.max.x),
            extent(self.min.y, self.max.y),
            extent(self.min.z, self.max.z),
        )
    }

    /// Whether `pos` lies inside the region.
    pub fn contains(&self, pos: BlockPos) -> bool {
        (self.min.x..=self.max.x).contains(&pos.x)
            && (self.min.y..=self.max.y).contains(&pos.y)
            && (self.min.z..=self.max.z).contains(&pos.z)
    }

    /// Whether the two regions share at least one block.
    pub fn intersects(&self, other: &Region) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
            && self.min.z <= other.max.z
            && other.min.z <= self.max.z
    }

    /// Every position in the region, x fastest.
    pub fn positions(&self) -> impl Iterator<Item = BlockPos> + '_ {
        (self.min.y..=self.max.y).flat_map(move |y| {
            (self.min.z..=self.max.z)
                .flat_map(move |z| (self.min.x..=self.max.x).map(move |x| BlockPos::new(x, y, z)))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
