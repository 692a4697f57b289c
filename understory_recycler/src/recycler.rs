// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recycling engine: owns the host and the pool, and wraps elements as
//! the content scrolls.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Point;

use crate::{
    Axis, AxisGeometry, Binder, ConfigError, Direction, Host, Pool, RecyclerConfig, VisualElement,
};

/// What a frame tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Displacement is within half an item of the reference, or the engine is
    /// not initialized.
    Idle,
    /// Head elements were recycled to the tail.
    Advanced {
        /// Number of wraps performed.
        wraps: usize,
    },
    /// Tail elements were recycled to the head.
    Retreated {
        /// Number of wraps performed.
        wraps: usize,
    },
    /// The content moved backward but item `0` is already materialized.
    AtStart,
    /// The content moved forward but the last item is already materialized.
    AtEnd,
}

/// Recycling engine for a scrolling list over `0..total_count` items.
///
/// This type:
/// - owns a host implementing [`Host`] and a [`Pool`] of its elements,
/// - sizes the pool to cover the viewport plus overscan,
/// - places each element from its logical index alone,
/// - and, once per frame, moves one element from one end of the pool to the
///   other when the content has scrolled past half an item.
///
/// Only the wrapped element is repositioned and rebound; a wrap costs the same
/// whatever the pool size.
///
/// At most one [`Binder`] is active. Set it before calling
/// [`initialize`](Self::initialize); without one, binding is skipped and an
/// error is logged each time.
pub struct Recycler<H: Host> {
    host: H,
    config: RecyclerConfig,
    axis: &'static dyn Axis,
    binder: Option<Box<dyn Binder<H::Element>>>,
    pool: Pool<H::Element>,

    geometry: Option<AxisGeometry>,
    total_count: usize,
    reference_offset: f64,
}

impl<H> fmt::Debug for Recycler<H>
where
    H: Host + fmt::Debug,
    H::Element: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recycler")
            .field("host", &self.host)
            .field("config", &self.config)
            .field("axis", &self.axis)
            .field("has_binder", &self.binder.is_some())
            .field("pool", &self.pool)
            .field("geometry", &self.geometry)
            .field("total_count", &self.total_count)
            .field("reference_offset", &self.reference_offset)
            .finish()
    }
}

impl<H: Host> Recycler<H>
where
    H::Element: 'static,
{
    /// Creates an engine around `host` without a binder.
    ///
    /// Locks the host's scrolling to the configured axis. Nothing is
    /// materialized until [`initialize`](Self::initialize).
    #[must_use]
    pub fn new(mut host: H, config: RecyclerConfig) -> Self {
        host.lock_axis(config.direction);
        Self {
            host,
            config,
            axis: config.direction.axis(),
            binder: None,
            pool: Pool::new(),
            geometry: None,
            total_count: 0,
            reference_offset: 0.0,
        }
    }

    /// Creates an engine with `binder` already attached.
    #[must_use]
    pub fn with_binder<B>(host: H, config: RecyclerConfig, binder: B) -> Self
    where
        B: Binder<H::Element> + 'static,
    {
        let mut recycler = Self::new(host, config);
        recycler.set_binder(binder);
        recycler
    }

    /// Attaches `binder`, replacing any previous one.
    ///
    /// Already bound elements are not rebound; call
    /// [`initialize`](Self::initialize) to bind everything again.
    pub fn set_binder<B>(&mut self, binder: B)
    where
        B: Binder<H::Element> + 'static,
    {
        self.binder = Some(Box::new(binder));
    }

    /// Detaches the binder.
    pub fn clear_binder(&mut self) {
        self.binder = None;
    }

    /// Returns `true` if a binder is attached.
    #[must_use]
    pub fn has_binder(&self) -> bool {
        self.binder.is_some()
    }

    /// Materializes and binds the window `0..materialized_count` for a list of
    /// `total_count` items.
    ///
    /// Measures the host, sizes the content strip, scrolls back to the start,
    /// and records the reference offset. An existing pool is reused: surviving
    /// elements keep their identity, missing ones are created, and surplus
    /// ones are handed to [`ElementFactory::release_element`](crate::ElementFactory::release_element).
    /// Every element is then placed and bound in slot order.
    ///
    /// On error the engine is left uninitialized: the window is empty, frame
    /// ticks do nothing, and existing elements are kept aside for the next
    /// successful call.
    pub fn initialize(&mut self, total_count: usize) -> Result<(), ConfigError> {
        self.geometry = None;
        self.total_count = 0;
        self.pool.park();

        let geometry =
            AxisGeometry::resolve(&self.host, &self.config, total_count).inspect_err(|err| {
                log::error!("recycler: cannot initialize {total_count} items: {err}");
            })?;
        let count = geometry.materialized_count(self.config.overscan_count, total_count);
        self.fill_pool(count).inspect_err(|err| {
            log::error!("recycler: cannot initialize {total_count} items: {err}");
        })?;
        self.pool.renumber(0);

        self.host.set_content_size(geometry.content_size());
        self.host.scroll_to_start();
        let rest = self.axis.component(self.host.content_offset());
        self.reference_offset = rest + self.axis.sign() * geometry.viewport_extent / 2.0;

        self.geometry = Some(geometry);
        self.total_count = total_count;

        for (element, index) in self.pool.iter_mut() {
            place(&geometry, element, index);
        }
        match self.binder.as_mut() {
            Some(binder) => {
                for (element, index) in self.pool.iter_mut() {
                    binder.bind(element, index);
                }
            }
            None if !self.pool.is_empty() => {
                log::error!(
                    "recycler: no binder attached; {} elements left unbound",
                    self.pool.len()
                );
            }
            None => {}
        }

        log::debug!(
            "recycler: {count} of {total_count} items materialized along {:?} (item extent {}, viewport {})",
            self.config.direction,
            geometry.item_extent,
            geometry.viewport_extent,
        );
        Ok(())
    }

    /// Fills the empty pool with `count` slots, taking parked elements first.
    ///
    /// Parked elements beyond `count` are released. If the factory fails, every
    /// element gathered so far is parked again.
    fn fill_pool(&mut self, count: usize) -> Result<(), ConfigError> {
        while self.pool.len() < count {
            let element = match self.pool.unpark() {
                Some(element) => element,
                None => match self.host.create_element() {
                    Some(element) => element,
                    None => {
                        let slot = self.pool.len();
                        self.pool.park();
                        return Err(ConfigError::ElementCreationFailed { slot });
                    }
                },
            };
            self.pool.push(element);
        }
        for element in self.pool.drain_parked() {
            self.host.release_element(element);
        }
        Ok(())
    }

    /// Checks how far the content has moved and wraps elements accordingly.
    ///
    /// Call once per frame. Performs at most
    /// [`max_wraps_per_tick`](RecyclerConfig::max_wraps_per_tick) wraps.
    pub fn on_frame_tick(&mut self) -> TickOutcome {
        let Some(geometry) = self.geometry else {
            return TickOutcome::Idle;
        };
        if self.pool.is_empty() {
            return TickOutcome::Idle;
        }

        let half = geometry.half_extent();
        let mut advanced = 0;
        let mut retreated = 0;
        for _ in 0..self.config.max_wraps_per_tick.get() {
            let offset = self.axis.component(self.host.content_offset());
            let progress = self.axis.sign() * (offset - self.reference_offset);
            if progress > half {
                if self.advance().is_none() {
                    if advanced == 0 {
                        return TickOutcome::AtEnd;
                    }
                    break;
                }
                advanced += 1;
            } else if progress < -half {
                if self.retreat().is_none() {
                    if retreated == 0 {
                        return TickOutcome::AtStart;
                    }
                    break;
                }
                retreated += 1;
            } else {
                break;
            }
        }

        if advanced > 0 {
            TickOutcome::Advanced { wraps: advanced }
        } else if retreated > 0 {
            TickOutcome::Retreated { wraps: retreated }
        } else {
            TickOutcome::Idle
        }
    }

    /// Recycles the first element to the end of the window.
    ///
    /// Returns the logical index it now shows, or `None` when the last item
    /// is already materialized (or the engine is not initialized).
    pub fn advance(&mut self) -> Option<usize> {
        let geometry = self.geometry?;
        let index = self.pool.head_to_tail(self.total_count)?;
        self.reference_offset += self.axis.sign() * geometry.item_extent;
        let slot = self.pool.len() - 1;
        self.refresh_slot(slot, &geometry);
        log::trace!("recycler: advanced, slot {slot} now shows item {index}");
        Some(index)
    }

    /// Recycles the last element to the start of the window.
    ///
    /// Returns the logical index it now shows, or `None` when item `0` is
    /// already materialized (or the engine is not initialized).
    pub fn retreat(&mut self) -> Option<usize> {
        let geometry = self.geometry?;
        let index = self.pool.tail_to_head()?;
        self.reference_offset -= self.axis.sign() * geometry.item_extent;
        self.refresh_slot(0, &geometry);
        log::trace!("recycler: retreated, slot 0 now shows item {index}");
        Some(index)
    }

    fn refresh_slot(&mut self, slot: usize, geometry: &AxisGeometry) {
        let Some((element, index)) = self.pool.get_mut(slot) else {
            return;
        };
        place(geometry, element, index);
        match self.binder.as_mut() {
            Some(binder) => binder.bind(element, index),
            None => log::error!("recycler: no binder attached; item {index} left unbound"),
        }
    }
}

impl<H: Host> Recycler<H> {
    /// Returns a shared reference to the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns a mutable reference to the host.
    ///
    /// Geometry changes made here take effect on the next
    /// [`initialize`](Self::initialize).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &RecyclerConfig {
        &self.config
    }

    /// Returns the scroll direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.config.direction
    }

    /// Returns the pool.
    #[must_use]
    pub const fn pool(&self) -> &Pool<H::Element> {
        &self.pool
    }

    /// Returns `true` once [`initialize`](Self::initialize) has succeeded.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.geometry.is_some()
    }

    /// Geometry resolved by the last successful initialization.
    #[must_use]
    pub const fn geometry(&self) -> Option<AxisGeometry> {
        self.geometry
    }

    /// Item extent along the scroll axis, margins included, or `0.0` before
    /// initialization.
    #[must_use]
    pub fn item_extent(&self) -> f64 {
        self.geometry.map_or(0.0, |geometry| geometry.item_extent)
    }

    /// Extent of the whole content strip, or `0.0` before initialization.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        self.geometry.map_or(0.0, |geometry| geometry.content_extent)
    }

    /// Number of logical items, or `0` before initialization.
    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.total_count
    }

    /// Number of pooled elements.
    #[must_use]
    pub fn materialized_count(&self) -> usize {
        self.pool.len()
    }

    /// Content offset the next wrap threshold is measured from.
    #[must_use]
    pub const fn reference_offset(&self) -> f64 {
        self.reference_offset
    }

    /// Logical indices in slot order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.pool.indices()
    }

    /// First materialized logical index.
    #[must_use]
    pub fn first_index(&self) -> Option<usize> {
        self.pool.first_index()
    }

    /// Last materialized logical index.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.pool.last_index()
    }

    /// Elements paired with their logical indices, in slot order.
    pub fn slots(&self) -> impl Iterator<Item = (&H::Element, usize)> + '_ {
        self.pool.iter()
    }

    /// Element currently showing item `index`, if it is materialized.
    #[must_use]
    pub fn element_for_index(&self, index: usize) -> Option<&H::Element> {
        self.pool.element_for_index(index)
    }

    /// Scroll-axis position item `index` is placed at.
    ///
    /// `None` before initialization or when `index` is out of range.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Option<f64> {
        let geometry = self.geometry?;
        (index < self.total_count).then(|| geometry.axis_position(index))
    }
}

/// Tags `element` with `index` and moves it to the index's position, keeping
/// its cross-axis coordinate.
fn place<E: VisualElement>(geometry: &AxisGeometry, element: &mut E, index: usize) {
    element.set_logical_index(index);
    let current: Point = element.position();
    let axis = geometry.direction.axis();
    element.set_position(axis.with_component(current, geometry.axis_position(index)));
}
