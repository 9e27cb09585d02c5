//! Initial point layouts: grids, rings, free scatter.
//!
//! Every layout produces the same construction input, a list of
//! `(rest position, pinned)` pairs, so a field never needs a separate code
//! path per shape.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Construction input for a field: rest position and pinned flag per point.
pub type Layout<F> = AllocVec<(Vec2<F>, bool)>;

/// A regular grid of points.
///
/// Point at (col, row) has index `row * cols + col`, positioned at
/// `origin + (col, row) * spacing`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout<F: Float> {
    pub cols: usize,
    pub rows: usize,
    pub spacing: F,
    /// Pin the first and last row and column.
    pub pin_boundary: bool,
}

impl<F: Float> GridLayout<F> {
    pub fn new(cols: usize, rows: usize, spacing: F) -> Self {
        GridLayout { cols, rows, spacing, pin_boundary: false }
    }

    pub fn with_pinned_boundary(mut self) -> Self {
        self.pin_boundary = true;
        self
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    pub fn is_boundary(&self, col: usize, row: usize) -> bool {
        col == 0 || row == 0 || col + 1 == self.cols || row + 1 == self.rows
    }

    pub fn points(&self, origin: Vec2<F>) -> Layout<F> {
        let pin_boundary = self.pin_boundary;
        grid_with(origin, self.cols, self.rows, self.spacing, |col, row| {
            pin_boundary && self.is_boundary(col, row)
        })
    }
}

/// A grid whose pinned points are chosen by `pin(col, row)`.
pub fn grid_with<F, P>(origin: Vec2<F>, cols: usize, rows: usize, spacing: F, pin: P) -> Layout<F>
where
    F: Float,
    P: Fn(usize, usize) -> bool,
{
    let mut points = AllocVec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let x = origin.x + F::from_usize(col) * spacing;
            let y = origin.y + F::from_usize(row) * spacing;
            points.push((Vec2::new(x, y), pin(col, row)));
        }
    }
    points
}

/// `count` free points spaced evenly by angle around `center`, starting at +x.
pub fn ring<F: Float>(center: Vec2<F>, radius: F, count: usize) -> Layout<F> {
    let two_pi = F::two() * F::pi();
    (0..count)
        .map(|i| {
            let angle = two_pi * F::from_usize(i) / F::from_usize(count);
            let pos = Vec2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin());
            (pos, false)
        })
        .collect()
}

/// Free points at arbitrary positions.
pub fn scatter<F: Float>(positions: &[Vec2<F>]) -> Layout<F> {
    positions.iter().map(|&p| (p, false)).collect()
}
