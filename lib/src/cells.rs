//! Cells on the lattice.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coordinates of a cell.
///
/// `(x-coordinate, y-coordinate)`. The lattice has no edges, and negative
/// coordinates are as good as positive ones.
pub type Coord = (i64, i64);

/// The age of a living cell.
///
/// A living cell always has an age of at least [`NEWBORN`]. A dead cell has
/// no age at all: it is simply absent from the grid.
pub type Age = u64;

/// The age of a cell that was just born or placed.
pub const NEWBORN: Age = 1;

/// Offsets of the eight cells in the Moore neighborhood.
const NBHD: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The neighbors of a cell.
///
/// Neighbors that cannot be represented by [`Coord`] are skipped.
#[inline]
pub(crate) fn neighbors((x, y): Coord) -> impl Iterator<Item = Coord> {
    NBHD.iter()
        .filter_map(move |&(dx, dy)| Some((x.checked_add(dx)?, y.checked_add(dy)?)))
}

/// An axis-aligned bounding box, with both corners inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    /// The corner with the smallest coordinates.
    pub min: Coord,
    /// The corner with the largest coordinates.
    pub max: Coord,
}

impl BoundingBox {
    /// The smallest box containing all the given coordinates.
    ///
    /// Returns `None` if there are no coordinates.
    pub fn of<I: IntoIterator<Item = Coord>>(coords: I) -> Option<Self> {
        coords.into_iter().fold(None, |bbox, (x, y)| {
            Some(match bbox {
                None => BoundingBox {
                    min: (x, y),
                    max: (x, y),
                },
                Some(BoundingBox { min, max }) => BoundingBox {
                    min: (min.0.min(x), min.1.min(y)),
                    max: (max.0.max(x), max.1.max(y)),
                },
            })
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u64 {
        self.max.0.abs_diff(self.min.0).saturating_add(1)
    }

    /// Number of rows.
    pub fn height(&self) -> u64 {
        self.max.1.abs_diff(self.min.1).saturating_add(1)
    }

    /// The midpoint of the box, rounded down on both axes.
    ///
    /// When the width or the height is even, this is the lower of the two
    /// middle cells.
    pub fn center(&self) -> Coord {
        let mid = |a: i64, b: i64| (i128::from(a) + i128::from(b)).div_euclid(2) as i64;
        (mid(self.min.0, self.max.0), mid(self.min.1, self.max.1))
    }

    /// Whether the cell lies in the box.
    pub fn contains(&self, (x, y): Coord) -> bool {
        (self.min.0..=self.max.0).contains(&x) && (self.min.1..=self.max.1).contains(&y)
    }
}
