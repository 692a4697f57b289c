// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.

use core::num::NonZeroUsize;

use crate::Direction;

/// Extra pooled elements beyond those needed to cover the viewport.
///
/// Masks gaps at the viewport edges when the host stretches the viewport
/// (for example on an aspect-ratio change) before the list is re-initialized.
pub const DEFAULT_OVERSCAN: usize = 4;

/// Options fixed for the lifetime of one [`Recycler`](crate::Recycler).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecyclerConfig {
    /// Axis the list scrolls along.
    pub direction: Direction,
    /// Margin on each side of an item along the scroll axis.
    pub item_margin_primary: f64,
    /// Margin on each side of an item across the scroll axis.
    ///
    /// Only affects the cross size of the content strip, never positions.
    pub item_margin_cross: f64,
    /// Elements materialized beyond the viewport; see [`DEFAULT_OVERSCAN`].
    pub overscan_count: usize,
    /// Upper bound on wraps performed by a single frame tick.
    ///
    /// The default of one assumes the content never moves more than one item
    /// per frame. Raise it for hosts that allow fast flicks.
    pub max_wraps_per_tick: NonZeroUsize,
}

impl Default for RecyclerConfig {
    fn default() -> Self {
        Self::new(Direction::default())
    }
}

impl RecyclerConfig {
    /// Default options for a list scrolling along `direction`.
    #[must_use]
    pub const fn new(direction: Direction) -> Self {
        Self {
            direction,
            item_margin_primary: 0.0,
            item_margin_cross: 0.0,
            overscan_count: DEFAULT_OVERSCAN,
            max_wraps_per_tick: NonZeroUsize::MIN,
        }
    }

    /// Sets the item margins along and across the scroll axis.
    ///
    /// Negative margins are clamped to `0.0`.
    #[must_use]
    pub fn with_margins(mut self, primary: f64, cross: f64) -> Self {
        debug_assert!(
            primary.is_finite() && cross.is_finite(),
            "item margins must be finite; got {primary:?} and {cross:?}"
        );
        self.item_margin_primary = primary.max(0.0);
        self.item_margin_cross = cross.max(0.0);
        self
    }

    /// Sets the overscan count.
    #[must_use]
    pub const fn with_overscan(mut self, overscan_count: usize) -> Self {
        self.overscan_count = overscan_count;
        self
    }

    /// Sets the maximum number of wraps per frame tick.
    #[must_use]
    pub const fn with_max_wraps_per_tick(mut self, max_wraps: NonZeroUsize) -> Self {
        self.max_wraps_per_tick = max_wraps;
        self
    }
}
