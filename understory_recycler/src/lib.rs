// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_recycler --heading-base-level=0

//! Understory Recycler: a fixed-pool recycling engine for scrolling lists.
//!
//! A list of arbitrarily many logical items is shown with a small pool of
//! reusable visual elements. As the content scrolls past an item boundary, the
//! element at one end of the pool is moved to the other end, repositioned, and
//! rebound to the item that just came into range. No element is created or
//! destroyed while scrolling.
//!
//! The core concepts are:
//!
//! - [`Recycler`]: the engine. It owns the host and a [`Pool`], sizes the pool
//!   in [`Recycler::initialize`], and wraps elements in
//!   [`Recycler::on_frame_tick`].
//! - [`Pool`]: elements in slot order, each paired with the logical index it
//!   shows. Indices always form a contiguous ascending run.
//! - [`Host`]: what the embedding UI stack provides. It is the union of
//!   [`Geometry`] (item and viewport sizes), [`ScrollContainer`] (content
//!   offset and size), and [`ElementFactory`] (instantiating the item template).
//!   Pooled elements implement [`VisualElement`].
//! - [`Binder`]: the callback that loads an item's data into an element. Any
//!   `FnMut(&mut Element, usize)` is a binder.
//! - [`Direction`] and [`Axis`]: the scroll axis and the strategy that maps it
//!   onto `kurbo` sizes and points.
//!
//! Elements are placed purely from their logical index (see
//! [`AxisGeometry::axis_position`]): item `0` sits at the leading edge of the
//! content strip and each following item one item extent further along.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_recycler::{
//!     Direction, ElementFactory, Geometry, Recycler, RecyclerConfig, ScrollContainer,
//!     TickOutcome, VisualElement,
//! };
//!
//! #[derive(Debug, Default)]
//! struct Label {
//!     position: Point,
//!     text: String,
//! }
//!
//! impl VisualElement for Label {
//!     fn position(&self) -> Point {
//!         self.position
//!     }
//!     fn set_position(&mut self, position: Point) {
//!         self.position = position;
//!     }
//! }
//!
//! #[derive(Debug, Default)]
//! struct Strip {
//!     offset: Point,
//! }
//!
//! impl Geometry for Strip {
//!     fn item_size(&self) -> Option<Size> {
//!         Some(Size::new(100.0, 40.0))
//!     }
//!     fn viewport_size(&self) -> Option<Size> {
//!         Some(Size::new(250.0, 40.0))
//!     }
//! }
//!
//! impl ScrollContainer for Strip {
//!     fn content_offset(&self) -> Point {
//!         self.offset
//!     }
//!     fn set_content_size(&mut self, _size: Size) {}
//!     fn scroll_to_start(&mut self) {
//!         self.offset = Point::ZERO;
//!     }
//! }
//!
//! impl ElementFactory for Strip {
//!     type Element = Label;
//!     fn create_element(&mut self) -> Option<Label> {
//!         Some(Label::default())
//!     }
//! }
//!
//! let names: Vec<String> = (0..100).map(|i| format!("item {i}")).collect();
//! let mut list = Recycler::with_binder(
//!     Strip::default(),
//!     RecyclerConfig::new(Direction::Horizontal),
//!     move |label: &mut Label, index: usize| label.text = names[index].clone(),
//! );
//! list.initialize(100).unwrap();
//!
//! // Three items cover the viewport, plus four of overscan.
//! assert_eq!(list.materialized_count(), 7);
//! assert_eq!(list.slots().next().unwrap().0.text, "item 0");
//!
//! // Horizontal content moves left as the list advances.
//! list.host_mut().offset.x = -180.0;
//! assert_eq!(list.on_frame_tick(), TickOutcome::Advanced { wraps: 1 });
//! assert_eq!(list.indices().collect::<Vec<_>>(), (1..8).collect::<Vec<_>>());
//! assert_eq!(list.element_for_index(7).unwrap().text, "item 7");
//! ```
//!
//! ## Thresholds
//!
//! [`Recycler::initialize`] scrolls the content back to its start and records a
//! reference offset half a viewport ahead of that rest position. A tick
//! advances once the content has moved more than half an item past the
//! reference in the advancing direction, and retreats once it has moved more
//! than half an item the other way. Each wrap shifts the reference by one item.
//! By default a tick performs one wrap; see
//! [`RecyclerConfig::max_wraps_per_tick`] for hosts that allow fast flicks.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade: configuration failures and
//! missing binders at `error`, initialization summaries at `debug`, and
//! individual wraps at `trace`. Reaching either end of the list is not logged.
//!
//! ## Features
//!
//! - `std` *(default)*: enables `kurbo/std`.
//! - `libm`: enables `kurbo/libm` for `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod config;
mod error;
mod geometry;
mod host;
mod pool;
mod recycler;
#[cfg(test)]
mod test_host;
mod util;

pub use axis::{Axis, Direction, HorizontalAxis, VerticalAxis};
pub use config::{DEFAULT_OVERSCAN, RecyclerConfig};
pub use error::ConfigError;
pub use geometry::{AxisGeometry, Geometry};
pub use host::{Binder, ElementFactory, Host, ScrollContainer, VisualElement};
pub use pool::Pool;
pub use recycler::{Recycler, TickOutcome};
