// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host geometry queries and the resolved per-axis layout derived from them.

use kurbo::Size;

use crate::util::ceil_div;
use crate::{ConfigError, Direction, RecyclerConfig};

/// Read-only layout queries answered by the host.
///
/// Sizes are reported without margins; the engine adds the margins from
/// [`RecyclerConfig`]. Returning `None` means the host has nothing to measure
/// (no template, no layout yet), which is a configuration error.
pub trait Geometry {
    /// Size of one item as laid out from the item template.
    fn item_size(&self) -> Option<Size>;

    /// Size of the visible viewport.
    fn viewport_size(&self) -> Option<Size>;
}

/// Geometry resolved along the active axis for one `initialize` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisGeometry {
    /// Direction the extents were resolved for.
    pub direction: Direction,
    /// Item extent along the scroll axis, primary margins on both sides included.
    pub item_extent: f64,
    /// Item extent across the scroll axis, cross margins on both sides included.
    pub cross_extent: f64,
    /// Viewport extent along the scroll axis.
    pub viewport_extent: f64,
    /// Extent of the whole content strip: `item_extent * total_count`.
    pub content_extent: f64,
}

impl AxisGeometry {
    /// Measures `geometry` along the axis selected by `config`.
    pub fn resolve<G: Geometry + ?Sized>(
        geometry: &G,
        config: &RecyclerConfig,
        total_count: usize,
    ) -> Result<Self, ConfigError> {
        let axis = config.direction.axis();
        let item = geometry
            .item_size()
            .ok_or(ConfigError::MissingItemTemplate)?;
        let viewport = geometry
            .viewport_size()
            .ok_or(ConfigError::MissingViewport)?;

        let item_extent = axis.extent(item) + 2.0 * config.item_margin_primary;
        if !item_extent.is_finite() || item_extent <= 0.0 {
            return Err(ConfigError::InvalidItemExtent);
        }
        let cross_extent = axis.cross_extent(item) + 2.0 * config.item_margin_cross;

        #[allow(
            clippy::cast_precision_loss,
            reason = "Item counts stay far below f64's exact integer range"
        )]
        let content_extent = item_extent * total_count as f64;

        Ok(Self {
            direction: config.direction,
            item_extent,
            cross_extent: cross_extent.max(0.0),
            viewport_extent: axis.extent(viewport).max(0.0),
            content_extent,
        })
    }

    /// Half of [`item_extent`](Self::item_extent); the wrap threshold.
    #[must_use]
    pub fn half_extent(&self) -> f64 {
        self.item_extent / 2.0
    }

    /// Number of pooled elements needed to cover the viewport plus `overscan`,
    /// never more than `total_count`.
    #[must_use]
    pub fn materialized_count(&self, overscan: usize, total_count: usize) -> usize {
        ceil_div(self.viewport_extent, self.item_extent)
            .saturating_add(overscan)
            .min(total_count)
    }

    /// Size of the content container along both axes.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.direction
            .axis()
            .size(self.content_extent, self.cross_extent)
    }

    /// Distance from the content midpoint to the center of item `index`,
    /// positive toward the start of the strip.
    #[must_use]
    pub fn signed_position(&self, index: usize) -> f64 {
        let content_mid = self.content_extent / 2.0;
        #[allow(
            clippy::cast_precision_loss,
            reason = "Item counts stay far below f64's exact integer range"
        )]
        let item_offset = self.item_extent * index as f64;
        content_mid - (item_offset + self.half_extent())
    }

    /// Local scroll-axis coordinate of the element showing item `index`.
    ///
    /// Horizontal lists place items at `-signed_position`, vertical lists at
    /// `signed_position`. The value depends on `index` alone, so repeated wraps
    /// cannot accumulate drift.
    #[must_use]
    pub fn axis_position(&self, index: usize) -> f64 {
        self.direction.axis().sign() * self.signed_position(index)
    }
}
