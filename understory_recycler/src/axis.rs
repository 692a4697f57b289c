// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll direction and the per-axis strategy derived from it.
//!
//! Everything that differs between a horizontal and a vertical list (which
//! component of a size or point is "the" axis, and which way content moves
//! when the list advances) lives behind [`Axis`]. The engine picks an
//! implementation once from its [`Direction`] and never branches on the
//! direction again.

use core::fmt::Debug;

use kurbo::{Point, Size};

/// The single axis a list scrolls along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Items are laid out left to right as the index increases.
    #[default]
    Horizontal,
    /// Items are laid out top to bottom as the index increases.
    Vertical,
}

impl Direction {
    /// Returns the axis strategy for this direction.
    #[must_use]
    pub fn axis(self) -> &'static dyn Axis {
        match self {
            Self::Horizontal => &HorizontalAxis,
            Self::Vertical => &VerticalAxis,
        }
    }
}

/// Axis-specific geometry queries.
///
/// The sign returned by [`Axis::sign`] does double duty: item positions are
/// `sign * signed_position` and scroll progress is `sign * (offset - reference)`.
/// A horizontal list advances as its content moves toward negative X, while a
/// vertical list (Y up) advances as its content moves toward positive Y.
pub trait Axis: Debug {
    /// The direction this strategy implements.
    fn direction(&self) -> Direction;

    /// Component of `size` along the scroll axis.
    fn extent(&self, size: Size) -> f64;

    /// Component of `size` across the scroll axis.
    fn cross_extent(&self, size: Size) -> f64;

    /// Component of `point` along the scroll axis.
    fn component(&self, point: Point) -> f64;

    /// Returns `point` with its scroll-axis component replaced by `value`.
    ///
    /// The cross component is preserved.
    fn with_component(&self, point: Point, value: f64) -> Point;

    /// Builds a size from a scroll-axis extent and a cross-axis extent.
    fn size(&self, extent: f64, cross_extent: f64) -> Size;

    /// `+1.0` or `-1.0`; see the trait docs.
    fn sign(&self) -> f64;
}

/// [`Axis`] for [`Direction::Horizontal`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HorizontalAxis;

impl Axis for HorizontalAxis {
    fn direction(&self) -> Direction {
        Direction::Horizontal
    }

    fn extent(&self, size: Size) -> f64 {
        size.width
    }

    fn cross_extent(&self, size: Size) -> f64 {
        size.height
    }

    fn component(&self, point: Point) -> f64 {
        point.x
    }

    fn with_component(&self, point: Point, value: f64) -> Point {
        Point::new(value, point.y)
    }

    fn size(&self, extent: f64, cross_extent: f64) -> Size {
        Size::new(extent, cross_extent)
    }

    fn sign(&self) -> f64 {
        -1.0
    }
}

/// [`Axis`] for [`Direction::Vertical`].
#[derive(Debug, Clone, Copy, Default)]
pub struct VerticalAxis;

impl Axis for VerticalAxis {
    fn direction(&self) -> Direction {
        Direction::Vertical
    }

    fn extent(&self, size: Size) -> f64 {
        size.height
    }

    fn cross_extent(&self, size: Size) -> f64 {
        size.width
    }

    fn component(&self, point: Point) -> f64 {
        point.y
    }

    fn with_component(&self, point: Point, value: f64) -> Point {
        Point::new(point.x, value)
    }

    fn size(&self, extent: f64, cross_extent: f64) -> Size {
        Size::new(cross_extent, extent)
    }

    fn sign(&self) -> f64 {
        1.0
    }
}
