use crate::math::{CellIndex, DIM};

/// An iterator over every cell of the integer lattice inside an inclusive
/// `[mins, maxs]` range, in lexicographic order (last axis varying
/// fastest).
#[derive(Clone, Debug)]
pub struct CellRange {
    mins: CellIndex,
    maxs: CellIndex,
    next: Option<CellIndex>,
}

impl CellRange {
    /// Creates an iterator over the inclusive cell range `[mins, maxs]`.
    ///
    /// The range is empty if `maxs` is smaller than `mins` on any axis.
    pub fn new(mins: CellIndex, maxs: CellIndex) -> CellRange {
        let nonempty = (0..DIM).all(|i| mins[i] <= maxs[i]);
        CellRange {
            mins,
            maxs,
            next: nonempty.then_some(mins),
        }
    }

    /// Tests whether `cell` lies inside this range.
    #[inline]
    pub fn contains(&self, cell: &CellIndex) -> bool {
        (0..DIM).all(|i| self.mins[i] <= cell[i] && cell[i] <= self.maxs[i])
    }
}

impl Iterator for CellRange {
    type Item = CellIndex;

    fn next(&mut self) -> Option<CellIndex> {
        let current = self.next?;

        // Odometer increment, least significant axis last.
        let mut following = current;
        let mut axis = DIM;
        self.next = loop {
            if axis == 0 {
                break None;
            }
            axis -= 1;

            if following[axis] < self.maxs[axis] {
                following[axis] += 1;
                break Some(following);
            }
            following[axis] = self.mins[axis];
        };

        Some(current)
    }
}

impl PartialEq for CellRange {
    /// Two ranges are equal when they span the same cells.
    fn eq(&self, other: &CellRange) -> bool {
        self.mins == other.mins && self.maxs == other.maxs
    }
}
