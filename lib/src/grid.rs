//! The sparse grid, and the transition from one generation to the next.

use crate::{
    cells::{neighbors, Age, BoundingBox, Coord, NEWBORN},
    rules::RuleSet,
};
use std::collections::{hash_map, HashMap};

/// Living cells on the unbounded lattice, with their ages.
///
/// Only living cells are stored. A cell that is absent is dead; every stored
/// cell has an age of at least [`NEWBORN`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseGrid {
    cells: HashMap<Coord, Age>,
}

impl SparseGrid {
    /// An empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of living cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether there are no living cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The age of a cell, or `None` if it is dead.
    pub fn get(&self, coord: Coord) -> Option<Age> {
        self.cells.get(&coord).copied()
    }

    /// Whether a cell is alive.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Iterates over the living cells and their ages, in no particular order.
    pub fn iter(&self) -> hash_map::Iter<'_, Coord, Age> {
        self.cells.iter()
    }

    /// Coordinates of the living cells, sorted by `(x, y)`.
    pub fn coords(&self) -> Vec<Coord> {
        let mut coords: Vec<Coord> = self.cells.keys().copied().collect();
        coords.sort_unstable();
        coords
    }

    /// The smallest box containing all living cells.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::of(self.cells.keys().copied())
    }

    /// Sets a cell alive with age [`NEWBORN`], even if it was already alive.
    pub fn add_cell(&mut self, coord: Coord) {
        self.cells.insert(coord, NEWBORN);
    }

    /// Kills a cell. Returns whether it was alive.
    pub fn remove_cell(&mut self, coord: Coord) -> bool {
        self.cells.remove(&coord).is_some()
    }

    /// Kills all cells.
    pub fn clear(&mut self) {
        self.cells.clear()
    }

    /// Computes the next generation.
    ///
    /// Only the neighbors of living cells are examined, so the cost is
    /// proportional to the number of living cells, however far apart they
    /// are. A cell with no living neighbor is therefore always dead in the
    /// next generation, even under a rule with `B0` or `S0`.
    pub fn step(&self, rule: &RuleSet) -> SparseGrid {
        let mut counts: HashMap<Coord, u8> = HashMap::with_capacity(self.cells.len() * 8);
        for &coord in self.cells.keys() {
            for neigh in neighbors(coord) {
                *counts.entry(neigh).or_insert(0) += 1;
            }
        }

        let mut cells = HashMap::with_capacity(self.cells.len());
        for (coord, count) in counts {
            match self.cells.get(&coord) {
                Some(&age) => {
                    if rule.evaluate(true, count) {
                        cells.insert(coord, age.saturating_add(1));
                    }
                }
                None => {
                    if rule.evaluate(false, count) {
                        cells.insert(coord, NEWBORN);
                    }
                }
            }
        }
        SparseGrid { cells }
    }

    /// Displays the living cells in
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) format,
    /// within the bounding box.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`.
    ///
    /// An empty grid gives an empty string.
    pub fn plaintext(&self) -> String {
        let mut str = String::new();
        if let Some(bbox) = self.bounding_box() {
            for y in bbox.min.1..=bbox.max.1 {
                for x in bbox.min.0..=bbox.max.0 {
                    if self.contains((x, y)) {
                        str.push('o');
                    } else {
                        str.push('.');
                    }
                }
                str.push('\n');
            }
        }
        str
    }
}

/// Creates newborn cells.
impl FromIterator<Coord> for SparseGrid {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut grid = SparseGrid::new();
        grid.extend(iter);
        grid
    }
}

/// Adds newborn cells, keeping the existing ones.
impl Extend<Coord> for SparseGrid {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        for coord in iter {
            self.add_cell(coord);
        }
    }
}

impl<'a> IntoIterator for &'a SparseGrid {
    type Item = (&'a Coord, &'a Age);
    type IntoIter = hash_map::Iter<'a, Coord, Age>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(coords: &[Coord]) -> SparseGrid {
        coords.iter().copied().collect()
    }

    #[test]
    fn add_overwrites_age() {
        let mut grid = grid(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        grid = grid.step(&RuleSet::default());
        assert_eq!(grid.get((0, 0)), Some(2));
        grid.add_cell((0, 0));
        assert_eq!(grid.get((0, 0)), Some(NEWBORN));
    }

    #[test]
    fn remove_missing_cell() {
        let mut grid = grid(&[(0, 0)]);
        let before = grid.clone();
        assert!(!grid.remove_cell((5, 5)));
        assert_eq!(grid, before);
        assert!(grid.remove_cell((0, 0)));
        assert!(grid.is_empty());
    }

    #[test]
    fn lonely_cells_die() {
        let grid = grid(&[(0, 0), (10, 10)]);
        assert!(grid.step(&RuleSet::default()).is_empty());
    }

    #[test]
    fn cells_without_living_neighbors_are_not_examined() {
        let rule = RuleSet::parse("B0/S012345678");
        let grid = grid(&[(0, 0)]);
        assert!(grid.step(&rule).is_empty());
    }

    #[test]
    fn negative_coordinates() {
        let grid = grid(&[(-101, -50), (-100, -50), (-99, -50)]);
        let next = grid.step(&RuleSet::default());
        assert_eq!(next.coords(), vec![(-100, -51), (-100, -50), (-100, -49)]);
        assert_eq!(next.get((-100, -50)), Some(2));
        assert_eq!(next.get((-100, -51)), Some(NEWBORN));
    }

    #[test]
    fn frozen_rule_kills_everything() {
        let grid = grid(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert!(grid.step(&RuleSet::frozen()).is_empty());
    }

    #[test]
    fn extreme_coordinates() {
        let grid = grid(&[(i64::MAX, 0), (i64::MAX, 1), (i64::MAX, 2)]);
        let next = grid.step(&RuleSet::default());
        assert_eq!(next.coords(), vec![(i64::MAX - 1, 1), (i64::MAX, 1)]);
    }

    #[test]
    fn plaintext() {
        let grid = grid(&[(0, 0), (1, 1), (-1, 2), (0, 2), (1, 2)]);
        assert_eq!(grid.plaintext(), ".o.\n..o\nooo\n");
        assert_eq!(SparseGrid::new().plaintext(), "");
    }
}
