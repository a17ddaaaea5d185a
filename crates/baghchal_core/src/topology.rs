//! Lattice geometry: which intersections are joined by a drawn line.
//!
//! Orthogonal lines join every pair of horizontally or vertically adjacent
//! points. Diagonal lines only pass through points whose coordinate sum is
//! even, which reproduces the classic alquerque board:
//!
//! ```text
//! o---o---o---o---o
//! | \ | / | \ | / |
//! o---o---o---o---o
//! | / | \ | / | \ |
//! o---o---o---o---o
//! | \ | / | \ | / |
//! o---o---o---o---o
//! | / | \ | / | \ |
//! o---o---o---o---o
//! ```
//!
//! Nothing here is stored per edge: adjacency is recomputed from the
//! coordinates on every query.

use crate::types::{Position, Step};

/// Width and height of the standard board.
pub const STANDARD_SIZE: u32 = 5;

/// A single drawable segment between two adjacent points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    pub from: Position,
    pub to: Position,
    pub step: Step,
}

impl Line {
    pub fn is_diagonal(&self) -> bool {
        !self.step.is_orthogonal()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Topology {
    width: u32,
    height: u32,
}

impl Default for Topology {
    fn default() -> Self {
        Self::new(STANDARD_SIZE, STANDARD_SIZE)
    }
}

impl Topology {
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "empty lattice");
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn cell_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    pub fn contains(&self, p: Position) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }

    /// Row-major cell index. Caller guarantees `contains(p)`.
    pub(crate) fn index(&self, p: Position) -> usize {
        p.y as usize * self.width as usize + p.x as usize
    }

    /// True if diagonal lines cross at `p`.
    pub fn is_diagonal_point(&self, p: Position) -> bool {
        (p.x + p.y).rem_euclid(2) == 0
    }

    /// Direction from `p` to `q` if a single drawn segment joins them.
    pub fn step_along_line(&self, p: Position, q: Position) -> Option<Step> {
        if !self.contains(p) || !self.contains(q) {
            return None;
        }
        let step = Step::between(p, q)?;
        if step.is_orthogonal() || self.is_diagonal_point(p) {
            Some(step)
        } else {
            None
        }
    }

    pub fn neighbors(&self, p: Position) -> Vec<Position> {
        Step::ALL
            .iter()
            .map(|&s| p.offset(s))
            .filter(|&q| self.step_along_line(p, q).is_some())
            .collect()
    }

    /// Jump geometry for a capture: the point passed over and the landing
    /// point, when both segments are drawn along the same direction.
    pub fn jump(&self, from: Position, step: Step) -> Option<(Position, Position)> {
        let over = from.offset(step);
        let landing = over.offset(step);
        self.step_along_line(from, over)?;
        self.step_along_line(over, landing)?;
        Some((over, landing))
    }

    /// Recovers the direction of a two-segment straight jump from `from` to
    /// `to`, if one exists.
    pub fn jump_step(&self, from: Position, to: Position) -> Option<Step> {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        if dx % 2 != 0 || dy % 2 != 0 {
            return None;
        }
        let step = Step::between(from, Position::new(from.x + dx / 2, from.y + dy / 2))?;
        self.jump(from, step).map(|_| step)
    }

    /// Lines spanned by the inner play area, for layout.
    pub fn centre_extent(&self) -> (u32, u32) {
        (self.width - 1, self.height - 1)
    }

    /// Every position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> + Clone + use<> {
        let (w, h) = (self.width as i32, self.height as i32);
        (0..h).flat_map(move |y| (0..w).map(move |x| Position::new(x, y)))
    }

    /// Each drawn segment exactly once.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.positions().flat_map(move |p| {
            Step::FORWARD.into_iter().filter_map(move |step| {
                let to = p.offset(step);
                self.step_along_line(p, to).map(|_| Line { from: p, to, step })
            })
        })
    }

    /// Nearest lattice point to a fractional coordinate, clamped into range.
    /// NaN maps to zero.
    pub fn normalize(&self, x: f64, y: f64) -> Position {
        Position::new(clamp_axis(x, self.width), clamp_axis(y, self.height))
    }
}

fn clamp_axis(v: f64, size: u32) -> i32 {
    if v.is_nan() {
        return 0;
    }
    let max = (size - 1) as f64;
    v.round().clamp(0.0, max) as i32
}

#[cfg(test)]
#[path = "topology_tests.rs"]
mod topology_tests;
