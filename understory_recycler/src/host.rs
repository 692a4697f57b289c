// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traits the embedding UI stack implements so the engine can drive it.

use kurbo::{Point, Size};

use crate::{Direction, Geometry};

/// A pooled on-screen element.
pub trait VisualElement {
    /// Current position in the content container's local space.
    fn position(&self) -> Point;

    /// Moves the element within the content container.
    fn set_position(&mut self, position: Point);

    /// Records which logical item the element now shows.
    ///
    /// Called before the element is repositioned. Hosts often use it to
    /// rename the element for debugging.
    fn set_logical_index(&mut self, index: usize) {
        let _ = index;
    }
}

/// The scroll container that moves the content strip.
pub trait ScrollContainer {
    /// Current local position of the content strip.
    fn content_offset(&self) -> Point;

    /// Resizes the content strip.
    fn set_content_size(&mut self, size: Size);

    /// Scrolls back so item `0` sits at the leading edge.
    fn scroll_to_start(&mut self);

    /// Restricts scrolling to `direction`'s axis.
    ///
    /// Called once when the engine is constructed.
    fn lock_axis(&mut self, direction: Direction) {
        let _ = direction;
    }
}

/// Produces pooled elements from the host's item template.
pub trait ElementFactory {
    /// Element handle stored in the pool.
    type Element: VisualElement;

    /// Creates a new element from the item template, attached to the content
    /// strip, or `None` if there is no template to instantiate.
    fn create_element(&mut self) -> Option<Self::Element>;

    /// Takes back an element the pool no longer needs after a
    /// re-initialization shrank it.
    fn release_element(&mut self, element: Self::Element) {
        let _ = element;
    }
}

/// Everything the engine needs from its host.
///
/// Implemented automatically for any type that provides the three parts.
pub trait Host: Geometry + ScrollContainer + ElementFactory {}

impl<T: Geometry + ScrollContainer + ElementFactory> Host for T {}

/// Synchronizes an element with the logical item it now represents.
///
/// Implemented for any `FnMut(&mut E, usize)`. The element is only borrowed
/// for the duration of the call.
pub trait Binder<E> {
    /// Loads item `index` into `element`.
    fn bind(&mut self, element: &mut E, index: usize);
}

impl<E, F: FnMut(&mut E, usize)> Binder<E> for F {
    fn bind(&mut self, element: &mut E, index: usize) {
        self(element, index);
    }
}
