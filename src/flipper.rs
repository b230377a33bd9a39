// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Grid dimensional flipper
//!
//! A utility proxy for a `Grid` that maps the width to the original
//! height, and vice versa, as well as every x to y and vice versa.
//!
//! This has the effect of making it possible to treat each column in a
//! horizontal seam search as a row, so the top-to-bottom dynamic
//! program serves both orientations, and a horizontal seam comes back
//! as one y coordinate per column without any extra bookkeeping.

use crate::twodmap::Grid;

pub struct Flipper<'a, G: Grid> {
    pub grid: &'a G,
}

impl<'a, G: Grid> Flipper<'a, G> {
    pub fn new(grid: &'a G) -> Self {
        Flipper { grid }
    }
}

impl<'a, G: Grid> Grid for Flipper<'a, G> {
    type Item = G::Item;

    fn dimensions(&self) -> (u32, u32) {
        let (x, y) = self.grid.dimensions();
        (y, x)
    }

    fn get(&self, x: u32, y: u32) -> G::Item {
        self.grid.get(y, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twodmap::TwoDimensionalMap;

    #[test]
    fn flipping_transposes_addressing() {
        let map = TwoDimensionalMap::from_vec(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        let flipped = Flipper::new(&map);
        assert_eq!(flipped.dimensions(), (2, 3));
        assert_eq!(flipped.get(1, 2), 5);
        assert_eq!(flipped.get(0, 1), 1);
        assert_eq!(flipped.get(1, 0), 3);
    }
}
