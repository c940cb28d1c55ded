//! Box geometry shared by the paddle and the bricks
//!
//! A box is anchored at its top-left corner in canvas space (y grows
//! downward). Corners and edges are derived on demand and always come back
//! in the same rotational order, so an edge index always names the same
//! side:
//!
//! | index | corner       | edge (corner i -> i+1) | outward normal |
//! |-------|--------------|------------------------|----------------|
//! | 1     | right-top    | right side             | ( 1,  0)       |
//! | 2     | right-bottom | bottom                 | ( 0,  1)       |
//! | 3     | left-bottom  | left side              | (-1,  0)       |
//! | 4     | left-top     | top                    | ( 0, -1)       |

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    RightTop,
    RightBottom,
    LeftBottom,
    LeftTop,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::RightTop,
        Corner::RightBottom,
        Corner::LeftBottom,
        Corner::LeftTop,
    ];

    /// Look up a corner by its 1-based index
    pub fn from_index(index: usize) -> Result<Self> {
        match index {
            1..=4 => Ok(Self::ALL[index - 1]),
            _ => Err(GameError::InvalidArgument(format!(
                "corner index must be 1..=4, got {index}"
            ))),
        }
    }

    pub fn index(self) -> usize {
        self as usize + 1
    }

    /// The following corner in rotational order (wraps 4 -> 1)
    pub fn next(self) -> Self {
        Self::ALL[self.index() % 4]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Right,
    Bottom,
    Left,
    Top,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Right, Edge::Bottom, Edge::Left, Edge::Top];

    /// Look up an edge by its 1-based index
    pub fn from_index(index: usize) -> Result<Self> {
        match index {
            1..=4 => Ok(Self::ALL[index - 1]),
            _ => Err(GameError::InvalidArgument(format!(
                "edge index must be 1..=4, got {index}"
            ))),
        }
    }

    pub fn index(self) -> usize {
        self as usize + 1
    }

    /// Corner the edge starts at; also the anchor for signed distances
    pub fn start(self) -> Corner {
        Corner::ALL[self as usize]
    }

    pub fn end(self) -> Corner {
        self.start().next()
    }
}

/// An unrotated rectangle described through its corners and edge normals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientedBox {
    /// Top-left anchor
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl OrientedBox {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self { pos, width, height }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height) / 2.0
    }

    pub fn corner(&self, corner: Corner) -> Vec2 {
        match corner {
            Corner::RightTop => Vec2::new(self.right(), self.top()),
            Corner::RightBottom => Vec2::new(self.right(), self.bottom()),
            Corner::LeftBottom => Vec2::new(self.left(), self.bottom()),
            Corner::LeftTop => Vec2::new(self.left(), self.top()),
        }
    }

    /// Corner by 1-based index
    pub fn corner_point(&self, index: usize) -> Result<Vec2> {
        Ok(self.corner(Corner::from_index(index)?))
    }

    /// Outward unit normal of an edge
    ///
    /// Computed from the corners rather than hard-coded so the sign
    /// convention follows the corner order.
    pub fn normal(&self, edge: Edge) -> Vec2 {
        let along = self.corner(edge.start()) - self.corner(edge.end());
        along.perp().normalize_or_zero()
    }

    /// Outward unit normal by 1-based edge index
    pub fn edge_normal(&self, index: usize) -> Result<Vec2> {
        Ok(self.normal(Edge::from_index(index)?))
    }

    /// Is a circle inside the box's extent padded by `radius` on every side?
    ///
    /// Inclusive on all four sides.
    pub fn contains_circle(&self, center: Vec2, radius: f32) -> bool {
        center.x - radius <= self.right()
            && center.y - radius <= self.bottom()
            && center.x + radius >= self.left()
            && center.y + radius >= self.top()
    }

    /// Shrink about the centre by `fraction` of the current size
    pub fn shrink(&mut self, fraction: f32) {
        let lost = Vec2::new(self.width, self.height) * fraction;
        self.pos += lost / 2.0;
        self.width -= lost.x;
        self.height -= lost.y;
    }
}
