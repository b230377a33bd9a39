// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam through an energy map
//!
//! The canonical dynamic program: every cell of the cost table holds
//! its own energy plus the cheapest of the three cells it can be
//! reached from, along with the address of that parent.  The search
//! is written once, top to bottom; horizontal seams are found by
//! running it over a flipped view of the map.
//!
//! Ties are broken deterministically.  Between parents, the one
//! straight ahead wins, then the lower-indexed diagonal.  At the
//! terminal edge, the lowest index with the minimum total wins.

use crate::energy::EnergyMap;
use crate::error::{Error, Result};
use crate::flipper::Flipper;
use crate::twodmap::{EnergyAndBackPointer, Grid, TwoDimensionalMap};
use itertools::Itertools;
use std::fmt;

/// Which way a seam runs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Top to bottom, one x per row.  Removing it narrows the image.
    Vertical,
    /// Left to right, one y per column.  Removing it shortens the image.
    Horizontal,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Vertical => write!(f, "vertical"),
            Orientation::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// A connected path of pixels to delete.
///
/// For a vertical seam `positions[y]` is the column removed from row
/// `y`; for a horizontal seam `positions[x]` is the row removed from
/// column `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam {
    orientation: Orientation,
    positions: Vec<u32>,
}

impl Seam {
    pub fn new(orientation: Orientation, positions: Vec<u32>) -> Self {
        Seam {
            orientation,
            positions,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn positions(&self) -> &[u32] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The seam's pixels as `(x, y)` pairs, in path order.
    pub fn coordinates(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let orientation = self.orientation;
        self.positions
            .iter()
            .enumerate()
            .map(move |(i, p)| match orientation {
                Orientation::Vertical => (*p, i as u32),
                Orientation::Horizontal => (i as u32, *p),
            })
    }

    /// Check the seam against a buffer of the given size: it must have
    /// exactly one entry per row (or column), every entry in range.
    pub fn check_fits(&self, width: u32, height: u32) -> Result<()> {
        let (span, limit) = match self.orientation {
            Orientation::Vertical => (height, width),
            Orientation::Horizontal => (width, height),
        };
        let out = |detail: String| Error::SeamOutOfBounds {
            width,
            height,
            detail,
        };
        if self.positions.len() != span as usize {
            return Err(out(format!(
                "{} seam has {} entries, expected {}",
                self.orientation,
                self.positions.len(),
                span
            )));
        }
        if let Some((i, p)) = self.positions.iter().find_position(|p| **p >= limit) {
            return Err(out(format!("entry {} is {}, limit {}", i, p, limit)));
        }
        Ok(())
    }
}

// For every row after the first, populate each cell with its own
// energy plus the cheapest parent above it.  The straight-ahead parent
// is the incumbent; diagonals must be strictly cheaper to displace it,
// and the left diagonal is tried first.
fn calculate_cost<G>(grid: &G) -> TwoDimensionalMap<EnergyAndBackPointer<f64>>
where
    G: Grid<Item = f64>,
{
    let (width, height) = grid.dimensions();
    let mut target = TwoDimensionalMap::new(width, height);
    let max_width = width - 1;

    for x in 0..width {
        target[(x, 0)] = EnergyAndBackPointer {
            energy: grid.get(x, 0),
            parent: x,
        };
    }

    for y in 1..height {
        for x in 0..width {
            let mut parent = x;
            let mut best = target[(x, y - 1)].energy;
            if x != 0 && target[(x - 1, y - 1)].energy < best {
                parent = x - 1;
                best = target[(x - 1, y - 1)].energy;
            }
            if x != max_width && target[(x + 1, y - 1)].energy < best {
                parent = x + 1;
                best = target[(x + 1, y - 1)].energy;
            }
            target[(x, y)] = EnergyAndBackPointer {
                energy: grid.get(x, y) + best,
                parent,
            };
        }
    }
    target
}

// Find the x coordinate of the bottommost cell with the least total,
// then work backwards up the parent pointers.
fn energy_to_seam(costs: &TwoDimensionalMap<EnergyAndBackPointer<f64>>) -> Vec<u32> {
    let (width, height) = costs.dimensions();
    let mut seam_col = (0..width)
        .position_min_by(|a, b| {
            costs[(*a, height - 1)]
                .energy
                .total_cmp(&costs[(*b, height - 1)].energy)
        })
        .unwrap_or(0) as u32;

    let mut seam = vec![0; height as usize];
    for y in (0..height).rev() {
        seam[y as usize] = seam_col;
        seam_col = costs[(seam_col, y)].parent;
    }
    seam
}

fn seam_through<G>(grid: &G) -> Vec<u32>
where
    G: Grid<Item = f64>,
{
    energy_to_seam(&calculate_cost(grid))
}

/// Find the minimum-energy seam running in the given direction.
///
/// Fails with `DegenerateMap` when the map is a single pixel across
/// the dimension the seam would shrink.
pub fn find_seam(energy: &EnergyMap, orientation: Orientation) -> Result<Seam> {
    let (width, height) = energy.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    let across = match orientation {
        Orientation::Vertical => width,
        Orientation::Horizontal => height,
    };
    if across < 2 {
        return Err(Error::DegenerateMap {
            orientation,
            width,
            height,
        });
    }

    let positions = match orientation {
        Orientation::Vertical => seam_through(energy),
        Orientation::Horizontal => seam_through(&Flipper::new(energy)),
    };
    Ok(Seam::new(orientation, positions))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENERGY_DATA: [f64; 20] = [
        9.0, 9.0, 0.0, 9.0, 9.0, 9.0, 1.0, 9.0, 8.0, 9.0, 9.0, 9.0, 9.0, 9.0, 0.0, 9.0, 9.0, 9.0,
        0.0, 9.0,
    ];

    fn energies() -> EnergyMap {
        EnergyMap::from_vec(5, 4, ENERGY_DATA.to_vec()).unwrap()
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        let seam = find_seam(&energies(), Orientation::Vertical).unwrap();
        assert_eq!(seam.positions(), &[2, 3, 4, 3]);
    }

    #[test]
    fn energy_grid_to_horizontal_seam() {
        let seam = find_seam(&energies(), Orientation::Horizontal).unwrap();
        assert_eq!(seam.positions(), &[1, 1, 0, 1, 2]);
    }

    #[test]
    fn flat_map_prefers_leftmost_straight_seam() {
        let flat = EnergyMap::from_vec(4, 4, vec![1.0; 16]).unwrap();
        let seam = find_seam(&flat, Orientation::Vertical).unwrap();
        assert_eq!(seam.positions(), &[0, 0, 0, 0]);
        let seam = find_seam(&flat, Orientation::Horizontal).unwrap();
        assert_eq!(seam.positions(), &[0, 0, 0, 0]);
    }

    #[test]
    fn straight_parent_beats_equal_diagonals() {
        // Both columns 0 and 2 of the top row tie with column 1, so the
        // bottom-middle cell must keep its straight parent.
        #[rustfmt::skip]
        let map = EnergyMap::from_vec(3, 2, vec![
            5.0, 5.0, 5.0,
            9.0, 0.0, 9.0,
        ]).unwrap();
        let seam = find_seam(&map, Orientation::Vertical).unwrap();
        assert_eq!(seam.positions(), &[1, 1]);
    }

    #[test]
    fn left_diagonal_beats_equal_right_diagonal() {
        #[rustfmt::skip]
        let map = EnergyMap::from_vec(3, 2, vec![
            1.0, 7.0, 1.0,
            9.0, 0.0, 9.0,
        ]).unwrap();
        let seam = find_seam(&map, Orientation::Vertical).unwrap();
        assert_eq!(seam.positions(), &[0, 1]);
    }

    #[test]
    fn seam_is_connected_and_in_bounds() {
        let map = energies();
        for orientation in [Orientation::Vertical, Orientation::Horizontal].iter() {
            let seam = find_seam(&map, *orientation).unwrap();
            assert!(seam.check_fits(5, 4).is_ok());
            for (a, b) in seam.positions().iter().tuple_windows() {
                assert!((i64::from(*a) - i64::from(*b)).abs() <= 1);
            }
        }
    }

    #[test]
    fn narrow_maps_are_degenerate() {
        let column = EnergyMap::from_vec(1, 3, vec![1.0; 3]).unwrap();
        assert!(matches!(
            find_seam(&column, Orientation::Vertical),
            Err(Error::DegenerateMap { .. })
        ));
        let seam = find_seam(&column, Orientation::Horizontal).unwrap();
        assert_eq!(seam.len(), 1);

        let row = EnergyMap::from_vec(3, 1, vec![1.0, 0.0, 1.0]).unwrap();
        assert!(matches!(
            find_seam(&row, Orientation::Horizontal),
            Err(Error::DegenerateMap { .. })
        ));
        assert_eq!(find_seam(&row, Orientation::Vertical).unwrap().positions(), &[1]);
    }

    #[test]
    fn coordinates_follow_orientation() {
        let v = Seam::new(Orientation::Vertical, vec![2, 3]);
        assert_eq!(v.coordinates().collect::<Vec<_>>(), vec![(2, 0), (3, 1)]);
        let h = Seam::new(Orientation::Horizontal, vec![2, 3]);
        assert_eq!(h.coordinates().collect::<Vec<_>>(), vec![(0, 2), (1, 3)]);
    }

    #[test]
    fn ill_fitting_seams_are_reported() {
        let seam = Seam::new(Orientation::Vertical, vec![0, 4]);
        assert!(matches!(
            seam.check_fits(4, 2),
            Err(Error::SeamOutOfBounds { .. })
        ));
        assert!(seam.check_fits(5, 3).is_err());
        assert!(seam.check_fits(5, 2).is_ok());
    }
}
