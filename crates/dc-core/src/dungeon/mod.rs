//! Dungeon terrain
//!
//! Only what the transformation core needs to ask about the map: the terrain
//! feature under a position, and whether a web or net is trapping someone there.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Position on the map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Check if adjacent (including diagonals)
    pub const fn is_adjacent(&self, other: &Position) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx <= 1 && dy <= 1 && (dx > 0 || dy > 0)
    }
}

/// Terrain feature of a map cell
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Feature {
    #[default]
    Floor,
    ShallowWater,
    DeepWater,
    Lava,
    Altar,
    StoneStairs,
}

impl Feature {
    /// Any kind of water
    pub const fn is_water(&self) -> bool {
        matches!(self, Feature::ShallowWater | Feature::DeepWater)
    }

    /// Terrain that kills a walker who can neither fly nor swim in it
    pub const fn is_lethal_to_walkers(&self) -> bool {
        matches!(self, Feature::DeepWater | Feature::Lava)
    }
}

/// A single dungeon level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    width: i16,
    height: i16,
    cells: Vec<Feature>,
    webs: Vec<Position>,
    nets: Vec<Position>,
}

impl Level {
    /// Create a level of plain floor
    pub fn new(width: i16, height: i16) -> Self {
        let size = width.max(0) as usize * height.max(0) as usize;
        Self {
            width,
            height,
            cells: vec![Feature::Floor; size],
            webs: Vec::new(),
            nets: Vec::new(),
        }
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    /// Terrain at `pos`; out-of-bounds positions read as floor.
    pub fn feature_at(&self, pos: Position) -> Feature {
        self.index(pos).map_or(Feature::Floor, |i| self.cells[i])
    }

    pub fn set_feature(&mut self, pos: Position, feature: Feature) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = feature;
        }
    }

    pub fn web_at(&self, pos: Position) -> bool {
        self.webs.contains(&pos)
    }

    pub fn place_web(&mut self, pos: Position) {
        if !self.web_at(pos) {
            self.webs.push(pos);
        }
    }

    pub fn destroy_web(&mut self, pos: Position) {
        self.webs.retain(|p| *p != pos);
    }

    pub fn net_at(&self, pos: Position) -> bool {
        self.nets.contains(&pos)
    }

    pub fn place_net(&mut self, pos: Position) {
        if !self.net_at(pos) {
            self.nets.push(pos);
        }
    }

    pub fn destroy_net(&mut self, pos: Position) {
        self.nets.retain(|p| *p != pos);
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::new(80, 21)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_lookup() {
        let mut level = Level::new(10, 10);
        let pos = Position::new(3, 4);
        assert_eq!(level.feature_at(pos), Feature::Floor);
        level.set_feature(pos, Feature::Lava);
        assert_eq!(level.feature_at(pos), Feature::Lava);
        assert_eq!(level.feature_at(Position::new(-1, 4)), Feature::Floor);
        assert_eq!(level.feature_at(Position::new(10, 0)), Feature::Floor);
    }

    #[test]
    fn test_webs_and_nets() {
        let mut level = Level::new(5, 5);
        let pos = Position::new(1, 1);
        level.place_web(pos);
        level.place_web(pos);
        level.place_net(pos);
        assert!(level.web_at(pos));
        level.destroy_web(pos);
        assert!(!level.web_at(pos));
        assert!(level.net_at(pos));
    }

    #[test]
    fn test_water_classes() {
        assert!(Feature::DeepWater.is_water());
        assert!(Feature::ShallowWater.is_water());
        assert!(!Feature::Lava.is_water());
        assert!(Feature::Lava.is_lethal_to_walkers());
        assert!(!Feature::ShallowWater.is_lethal_to_walkers());
    }
}
